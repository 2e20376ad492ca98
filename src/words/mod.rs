mod lexicon;
mod phrase;

pub use lexicon::{EnglishSource, Lexicon, NounSource};
pub use phrase::PhraseSource;

use clap::ValueEnum;

/// Supplies the ordered target word list for a session.
///
/// Implementations are interchangeable: the session controller and the
/// match and classify layers treat every word as an opaque character
/// sequence, so a generator only has to hand back `count` strings.
pub trait WordSource {
    fn generate(&self, count: usize) -> Vec<String>;
}

/// The selectable word generators.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum SourceKind {
    /// Random hangul pseudo-phrases (the default).
    Phrases,
    /// The embedded korean noun list.
    Nouns,
    /// The embedded english word list.
    English,
}

impl SourceKind {
    pub fn as_source(&self) -> Box<dyn WordSource> {
        match self {
            SourceKind::Phrases => Box::new(PhraseSource),
            SourceKind::Nouns => Box::new(NounSource::new()),
            SourceKind::English => Box::new(EnglishSource::new()),
        }
    }

    /// Parse the lowercase name used in the config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "phrases" => Some(SourceKind::Phrases),
            "nouns" => Some(SourceKind::Nouns),
            "english" => Some(SourceKind::English),
            _ => None,
        }
    }
}

/// A fixed word list, for headless tests and scripted drills. The
/// requested count is ignored; the list is returned as given.
#[derive(Clone, Debug)]
pub struct FixedSource {
    words: Vec<String>,
}

impl FixedSource {
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl WordSource for FixedSource {
    fn generate(&self, _count: usize) -> Vec<String> {
        self.words.clone()
    }
}
