//! Rule-based entity recognizer
//!
//! Combines gazetteers (known first names, places, organizations) with a few
//! contextual cues (person titles, organization suffixes, address heads)
//! over runs of capitalized words.
//!
//! ```rust
//! use mascara::anonymization::recognizer::{gazetteer::GazetteerRecognizer, EntityRecognizer};
//! use mascara::anonymization::PiiLabel;
//!
//! let recognizer = GazetteerRecognizer::builtin()?;
//! let doc = recognizer.analyze("Maria da Silva mora em Belo Horizonte")?;
//! let labels: Vec<PiiLabel> = doc.ents().iter().map(|s| s.label).collect();
//! assert_eq!(labels, [PiiLabel::Person, PiiLabel::Location]);
//! # Ok::<(), mascara::domain::MascaraError>(())
//! ```

use super::tokenizer::{tokenize, Token};
use super::{Document, EntityRecognizer};
use crate::anonymization::models::{PiiLabel, Span};
use crate::domain::{RecognizerError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Gazetteer file layout
#[derive(Debug, Default, Deserialize)]
struct GazetteerFile {
    #[serde(default)]
    first_names: Vec<String>,
    #[serde(default)]
    locations: Vec<String>,
    #[serde(default)]
    geo_political: Vec<String>,
    #[serde(default)]
    organizations: Vec<String>,
    #[serde(default)]
    person_titles: Vec<String>,
    #[serde(default)]
    org_suffixes: Vec<String>,
    #[serde(default)]
    org_heads: Vec<String>,
    #[serde(default)]
    location_heads: Vec<String>,
    #[serde(default)]
    connectors: Vec<String>,
}

/// Lowercased word lists used by [`GazetteerRecognizer`]
#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    first_names: HashSet<String>,
    locations: HashSet<String>,
    geo_political: HashSet<String>,
    organizations: HashSet<String>,
    person_titles: HashSet<String>,
    org_suffixes: HashSet<String>,
    org_heads: HashSet<String>,
    location_heads: HashSet<String>,
    connectors: HashSet<String>,
}

fn normalize(entries: Vec<String>) -> HashSet<String> {
    entries
        .into_iter()
        .map(|e| {
            e.split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase()
        })
        .filter(|e| !e.is_empty())
        .collect()
}

impl Gazetteer {
    /// Built-in Brazilian Portuguese gazetteer
    pub fn builtin() -> Result<Self> {
        Self::from_toml(include_str!("../../../gazetteers/pt_br.toml"))
    }

    /// Load a gazetteer from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: GazetteerFile = toml::from_str(content)
            .map_err(|e| RecognizerError::InvalidGazetteer(e.to_string()))?;

        Ok(Self {
            first_names: normalize(file.first_names),
            locations: normalize(file.locations),
            geo_political: normalize(file.geo_political),
            organizations: normalize(file.organizations),
            person_titles: normalize(file.person_titles),
            org_suffixes: normalize(file.org_suffixes),
            org_heads: normalize(file.org_heads),
            location_heads: normalize(file.location_heads),
            connectors: normalize(file.connectors),
        })
    }

    /// Load a gazetteer from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RecognizerError::GazetteerNotFound(path.display().to_string()).into());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            RecognizerError::InvalidGazetteer(format!("{}: {}", path.display(), e))
        })?;

        Self::from_toml(&content)
    }

    pub fn add_first_name(&mut self, name: &str) {
        self.first_names.insert(name.to_lowercase());
    }

    pub fn add_location(&mut self, name: &str) {
        self.locations.insert(name.to_lowercase());
    }

    pub fn add_organization(&mut self, name: &str) {
        self.organizations.insert(name.to_lowercase());
    }

    /// Total number of entries across all lists
    pub fn len(&self) -> usize {
        self.first_names.len()
            + self.locations.len()
            + self.geo_political.len()
            + self.organizations.len()
            + self.person_titles.len()
            + self.org_suffixes.len()
            + self.org_heads.len()
            + self.location_heads.len()
            + self.connectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rule-based recognizer for PER, ORG, LOC and GPE
#[derive(Debug, Clone)]
pub struct GazetteerRecognizer {
    gazetteer: Gazetteer,
}

impl GazetteerRecognizer {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// Recognizer backed by the built-in gazetteer
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Gazetteer::builtin()?))
    }

    /// Recognizer backed by a gazetteer file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(Gazetteer::from_file(path)?))
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    fn is_name_token(token: &Token) -> bool {
        token.is_capitalized() && token.is_word()
    }

    /// Maximal runs of capitalized words, as inclusive token index ranges
    ///
    /// Connectors may join two capitalized words but never start or end a run.
    fn find_runs(&self, tokens: &[Token]) -> Vec<(usize, usize)> {
        let mut runs = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if !Self::is_name_token(&tokens[i]) {
                i += 1;
                continue;
            }

            let start = i;
            let mut end = i;
            let mut j = i + 1;
            loop {
                if j < tokens.len() && Self::is_name_token(&tokens[j]) {
                    end = j;
                    j += 1;
                } else if j + 1 < tokens.len()
                    && self.gazetteer.connectors.contains(&tokens[j].text)
                    && Self::is_name_token(&tokens[j + 1])
                {
                    end = j + 1;
                    j += 2;
                } else {
                    break;
                }
            }

            runs.push((start, end));
            i = end + 1;
        }

        runs
    }

    /// "Dr Silva", "seu João", "Dra. Ana"
    fn preceded_by_title(&self, tokens: &[Token], idx: usize) -> bool {
        let titles = &self.gazetteer.person_titles;
        match idx {
            0 => false,
            1 => titles.contains(&tokens[0].lower()),
            _ => {
                let prev = &tokens[idx - 1];
                titles.contains(&prev.lower())
                    || (prev.text == "." && titles.contains(&tokens[idx - 2].lower()))
            }
        }
    }

    fn classify(&self, run: &[Token], titled: bool) -> Option<PiiLabel> {
        let gaz = &self.gazetteer;
        let words: Vec<String> = run.iter().map(Token::lower).collect();
        let first = words.first()?;
        let last = words.last()?;
        let joined = words.join(" ");
        let multi = words.len() > 1;

        if titled {
            Some(PiiLabel::Person)
        } else if gaz.organizations.contains(&joined)
            || (multi && (gaz.org_suffixes.contains(last) || gaz.org_heads.contains(first)))
        {
            Some(PiiLabel::Organization)
        } else if gaz.locations.contains(&joined) || (multi && gaz.location_heads.contains(first))
        {
            Some(PiiLabel::Location)
        } else if gaz.geo_political.contains(&joined) {
            Some(PiiLabel::GeoPoliticalEntity)
        } else if gaz.first_names.contains(first) {
            Some(PiiLabel::Person)
        } else {
            None
        }
    }

    /// Label a run, dropping leading words until a rule fires
    fn label_run(&self, tokens: &[Token], a: usize, b: usize) -> Option<Span> {
        let mut titled = self.preceded_by_title(tokens, a);
        let mut k = a;

        while k <= b {
            let head = tokens[k].lower();
            if self.gazetteer.connectors.contains(&head) {
                k += 1;
                continue;
            }
            if self.gazetteer.person_titles.contains(&head) {
                titled = true;
                k += 1;
                continue;
            }
            if let Some(label) = self.classify(&tokens[k..=b], titled) {
                return Some(Span::new(tokens[k].start, tokens[b].end, label));
            }
            titled = false;
            k += 1;
        }

        None
    }
}

impl EntityRecognizer for GazetteerRecognizer {
    fn name(&self) -> &str {
        "gazetteer"
    }

    fn analyze(&self, text: &str) -> Result<Document> {
        let tokens = tokenize(text);
        let ents: Vec<Span> = self
            .find_runs(&tokens)
            .into_iter()
            .filter_map(|(a, b)| self.label_run(&tokens, a, b))
            .collect();

        tracing::trace!(
            tokens = tokens.len(),
            entities = ents.len(),
            "Gazetteer analysis complete"
        );

        Ok(Document::new(text, tokens, ents))
    }
}
