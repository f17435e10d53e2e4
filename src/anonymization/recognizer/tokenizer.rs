//! Word tokenizer
//!
//! Splits text on Unicode word boundaries (UAX #29) and drops whitespace
//! segments. Token offsets are chars, matching [`Span`](crate::anonymization::models::Span).
//!
//! ```rust
//! use mascara::anonymization::recognizer::tokenizer::tokenize;
//!
//! let tokens = tokenize("Ligue (11) 91234-5678");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, ["Ligue", "(", "11", ")", "91234", "-", "5678"]);
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// A token and its position in the original text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token text
    pub text: String,
    /// Char offset of the first char (inclusive)
    pub start: usize,
    /// Char offset one past the last char (exclusive)
    pub end: usize,
}

impl Token {
    /// First char is an uppercase letter
    pub fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }

    /// Contains at least one letter and nothing but letters, digits, `.` or `/`
    pub fn is_word(&self) -> bool {
        self.text.chars().any(char::is_alphabetic)
            && self
                .text
                .chars()
                .all(|c| c.is_alphanumeric() || c == '.' || c == '/' || c == '\'')
    }

    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Tokenize text into non-whitespace word-boundary segments
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut char_pos = 0;

    for segment in text.split_word_bounds() {
        let len = segment.chars().count();
        if !segment.chars().all(char::is_whitespace) {
            tokens.push(Token {
                text: segment.to_string(),
                start: char_pos,
                end: char_pos + len,
            });
        }
        char_pos += len;
    }

    tokens
}
