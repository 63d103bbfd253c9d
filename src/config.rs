//! Options for one run
use std::path::PathBuf;
use errors::*;
use entity::FREEBASE_NAMESPACE;

#[derive(Debug, Clone)]
pub struct Config {
    /// Sentences with recognized entities, two tab separated columns
    pub sentences: PathBuf,
    /// Where the contexts file ("wordsfile") goes
    pub contexts_output: PathBuf,
    /// Where the documents file ("docsfile") goes
    pub documents_output: PathBuf,
    /// Context ids are assigned from here on
    pub first_context_id: u64,
    /// Tokens to omit from the contexts file, one per line and lower case
    pub stop_words: PathBuf,
    /// Base URI prepended to entity ids
    pub entity_namespace: String,
    /// Tokenize this many lines at a time on all cores. `None` runs line by line.
    pub batch_size: Option<usize>,
}

impl Config {
    pub fn new<P: Into<PathBuf>>(sentences: P,
                                 contexts_output: P,
                                 documents_output: P,
                                 stop_words: P) -> Self {
        Config {
            sentences: sentences.into(),
            contexts_output: contexts_output.into(),
            documents_output: documents_output.into(),
            first_context_id: 0,
            stop_words: stop_words.into(),
            entity_namespace: FREEBASE_NAMESPACE.to_string(),
            batch_size: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.batch_size == Some(0) {
            return Err(Error::InvalidConfig("the batch size must be at least 1".to_string()));
        }
        if self.contexts_output == self.documents_output {
            return Err(Error::InvalidConfig(format!(
                "the contexts and documents files are both {}", self.contexts_output.display())));
        }
        Ok(())
    }
}
