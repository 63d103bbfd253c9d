//! Tokens left out of the contexts file
//!
//! Usually punctuation and stop words, one item a line and lower case. The documents file keeps
//! them; only word occurrences are filtered.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use errors::*;
use farm::{FarmSet, new_farm_set};

#[derive(Default)]
pub struct StopWords {
    words: FarmSet<String>,
}

impl StopWords {
    /// Read one stop token per line. Lines are trimmed but otherwise taken as-is.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = new_farm_set();
        for line in reader.lines() {
            words.insert(line?.trim().to_string());
        }
        Ok(StopWords { words })
    }

    pub fn from_list(words: &[&str]) -> Self {
        StopWords { words: words.iter().map(|w| w.to_string()).collect() }
    }

    /// Membership is exact; callers pass the lowercased form.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Load the stop-words file
pub fn load_stop_words<P: AsRef<Path>>(path: P) -> Result<StopWords> {
    let file = File::open(path.as_ref())
        .map_err(|e| Error::MissingFile("stop-words file", Some(e)))?;
    let stop_words = StopWords::from_reader(BufReader::new(file))?;
    if stop_words.is_empty() {
        warn!("{} has no stop tokens, every word will be written", path.as_ref().display());
    } else {
        info!("Loaded {} stop tokens from {}", stop_words.len(), path.as_ref().display());
    }
    Ok(stop_words)
}
