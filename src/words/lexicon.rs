use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::from_str;

use super::WordSource;

static DATA_DIR: Dir = include_dir!("src/words/data");

/// An embedded word list, deserialized from `src/words/data/<file>.json`.
#[derive(Deserialize, Clone, Debug)]
pub struct Lexicon {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

impl Lexicon {
    /// Load a list compiled into the binary. Panics only on a build-time
    /// packaging mistake, never on user input.
    pub fn load(file_name: &str) -> Self {
        let file = DATA_DIR
            .get_file(file_name)
            .expect("embedded word list missing");
        let contents = file
            .contents_utf8()
            .expect("embedded word list is not utf-8");
        from_str(contents).expect("unable to deserialize word list json")
    }

    /// Draw `count` words uniformly, each slot independent of the rest, so
    /// repeats are expected and the list length never limits a session.
    pub fn sample(&self, count: usize) -> Vec<String> {
        let rng = &mut rand::thread_rng();
        (0..count)
            .filter_map(|_| self.words.choose(rng).cloned())
            .collect()
    }
}

/// Target words drawn from the embedded English list.
pub struct EnglishSource {
    lexicon: Lexicon,
}

impl EnglishSource {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::load("english.json"),
        }
    }
}

impl Default for EnglishSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for EnglishSource {
    fn generate(&self, count: usize) -> Vec<String> {
        self.lexicon.sample(count)
    }
}

/// Target words drawn from the embedded Korean noun list.
pub struct NounSource {
    lexicon: Lexicon,
}

impl NounSource {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::load("korean_nouns.json"),
        }
    }
}

impl Default for NounSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WordSource for NounSource {
    fn generate(&self, count: usize) -> Vec<String> {
        self.lexicon.sample(count)
    }
}
