//! Char/byte offset translation
//!
//! Regex matches and `str` slicing work in bytes while spans are expressed
//! in chars. [`CharIndex`] translates between the two for one text.

/// Byte position of every char boundary in a text
#[derive(Debug, Clone)]
pub struct CharIndex<'a> {
    text: &'a str,
    /// `boundaries[i]` is the byte offset of char `i`; the last entry is `text.len()`
    boundaries: Vec<usize>,
}

impl<'a> CharIndex<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        boundaries.push(text.len());
        Self { text, boundaries }
    }

    /// Length of the text in chars
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Byte offset of a char offset (`char_len()` maps to `text.len()`)
    pub fn byte_of(&self, char_offset: usize) -> Option<usize> {
        self.boundaries.get(char_offset).copied()
    }

    /// Char offset of a byte offset, if the byte offset lies on a char boundary
    pub fn char_of(&self, byte_offset: usize) -> Option<usize> {
        self.boundaries.binary_search(&byte_offset).ok()
    }

    /// Substring between two char offsets
    pub fn slice(&self, start: usize, end: usize) -> Option<&'a str> {
        let from = self.byte_of(start)?;
        let to = self.byte_of(end)?;
        self.text.get(from..to)
    }

    pub fn text(&self) -> &'a str {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_offsets_are_identity() {
        let index = CharIndex::new("abc");
        assert_eq!(index.char_len(), 3);
        assert_eq!(index.byte_of(2), Some(2));
        assert_eq!(index.char_of(3), Some(3));
    }

    #[test]
    fn test_multibyte_offsets() {
        // "é" takes two bytes
        let index = CharIndex::new("Meu CPF é 123");
        assert_eq!(index.char_len(), 13);
        assert_eq!(index.char_of(11), Some(10));
        assert_eq!(index.char_of(9), None);
        assert_eq!(index.slice(8, 9), Some("é"));
        assert_eq!(index.slice(10, 13), Some("123"));
    }

    #[test]
    fn test_empty_text() {
        let index = CharIndex::new("");
        assert_eq!(index.char_len(), 0);
        assert_eq!(index.byte_of(0), Some(0));
        assert_eq!(index.slice(0, 0), Some(""));
    }
}
