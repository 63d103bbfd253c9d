//! Drive sentences through the tokenizer into both output files
//!
//! Every line with exactly two tab separated columns becomes one context. Its id is the next in
//! sequence from the first context id; lines that don't fit are logged and don't use up an id.
//! Only the first column is used. The second one is read past.
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use rayon::prelude::*;
use errors::*;
use config::Config;
use context::ContextWriter;
use document::document_record;
use entity::FREEBASE_NAMESPACE;
use stopwords::{StopWords, load_stop_words};
use tokenizer::tokenize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Lines that became contexts
    pub accepted: u64,
    /// Lines without exactly one tab
    pub skipped: u64,
    /// Lines written to the contexts file
    pub occurrences: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Written under this context id
    Accepted(u64),
    /// Left out; holds the line number the diagnostic reported
    Skipped(u64),
}

/// The diagnostic for a line without exactly one tab
pub fn malformed_line_message(line_number: u64) -> String {
    format!("Ignoring line without exactly one tab, line number (starting from 0): {}", line_number)
}

/// The sentence column, if the line has exactly two columns
///
/// Surrounding whitespace is trimmed first, so a trailing tab leaves only one column.
pub fn sentence_column(line: &str) -> Option<&str> {
    let mut cols = line.trim().split('\t');
    match (cols.next(), cols.next(), cols.next()) {
        (Some(sentence), Some(_), None) => Some(sentence),
        _ => None,
    }
}

pub struct Pipeline<C: Write, D: Write> {
    contexts: ContextWriter<C>,
    documents: D,
    stop_words: StopWords,
    first_context_id: u64,
    next_context_id: u64,
    stats: RunStats,
}

impl<C: Write, D: Write> Pipeline<C, D> {
    pub fn new(contexts: C, documents: D, stop_words: StopWords) -> Self {
        Pipeline {
            contexts: ContextWriter::new(contexts, FREEBASE_NAMESPACE),
            documents,
            stop_words,
            first_context_id: 0,
            next_context_id: 0,
            stats: RunStats::default(),
        }
    }

    /// Start assigning context ids from this number
    pub fn first_context_id(mut self, id: u64) -> Self {
        self.first_context_id = id;
        self.next_context_id = id;
        self
    }

    pub fn namespace(mut self, namespace: &str) -> Self {
        self.contexts.set_namespace(namespace);
        self
    }

    /// The id the next accepted line will get
    pub fn next_context_id(&self) -> u64 {
        self.next_context_id
    }

    pub fn stats(&self) -> RunStats {
        RunStats { occurrences: self.contexts.written(), ..self.stats }
    }

    pub fn process_line(&mut self, line: &str) -> Result<LineOutcome> {
        match sentence_column(line) {
            Some(sentence) => {
                let tokens = tokenize(sentence);
                self.accept(&tokens)
            }
            None => Ok(self.skip()),
        }
    }

    fn accept(&mut self, tokens: &[&str]) -> Result<LineOutcome> {
        let context_id = self.next_context_id;
        writeln!(self.documents, "{}", document_record(context_id, tokens))?;
        self.contexts.write_context(context_id, tokens, &self.stop_words)?;
        self.next_context_id += 1;
        self.stats.accepted += 1;
        Ok(LineOutcome::Accepted(context_id))
    }

    fn skip(&mut self) -> LineOutcome {
        // Counts accepted lines only, so after earlier skips this is not the input line number.
        let line_number = self.next_context_id - self.first_context_id;
        warn!("{}", malformed_line_message(line_number));
        self.stats.skipped += 1;
        LineOutcome::Skipped(line_number)
    }

    /// Process every line, one at a time
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            self.process_line(&line?)?;
        }
        Ok(())
    }

    /// Process every line, tokenizing `batch_size` lines at a time in parallel
    ///
    /// Output is written in input order and is byte for byte what `run` writes.
    pub fn run_batched<R: BufRead>(&mut self, input: R, batch_size: usize) -> Result<()> {
        if batch_size == 0 {
            return Err(Error::InvalidConfig("the batch size must be at least 1".to_string()));
        }
        let mut lines = input.lines();
        loop {
            let batch = lines.by_ref()
                .take(batch_size)
                .collect::<::std::io::Result<Vec<String>>>()?;
            if batch.is_empty() {
                return Ok(());
            }
            debug!("Tokenizing a batch of {} lines from context {}", batch.len(), self.next_context_id);
            let tokenized: Vec<Option<Vec<&str>>> = batch.par_iter()
                .map(|line| sentence_column(line).map(tokenize))
                .collect();
            for tokens in tokenized {
                match tokens {
                    Some(tokens) => { self.accept(&tokens)?; }
                    None => { self.skip(); }
                }
            }
        }
    }

    /// Flush both outputs and report what was written
    pub fn finish(&mut self) -> Result<RunStats> {
        self.contexts.flush()?;
        self.documents.flush()?;
        let stats = self.stats();
        info!("Wrote {} contexts ({} occurrences), ignored {} lines",
            stats.accepted, stats.occurrences, stats.skipped);
        Ok(stats)
    }

    /// Hand back the contexts and documents writers
    pub fn into_inner(self) -> (C, D) {
        (self.contexts.into_inner(), self.documents)
    }
}

/// Run with files named in the config
///
/// Every file is closed when this returns, whether or not it succeeded.
pub fn run_files(config: &Config) -> Result<RunStats> {
    config.validate()?;
    let stop_words = load_stop_words(&config.stop_words)?;
    let input = File::open(&config.sentences)
        .map_err(|e| Error::MissingFile("sentences file", Some(e)))?;
    let contexts = File::create(&config.contexts_output)
        .map_err(|e| Error::Unwritable("contexts file", e))?;
    let documents = File::create(&config.documents_output)
        .map_err(|e| Error::Unwritable("documents file", e))?;
    info!("Writing contexts to {} and documents to {}, starting at context {}",
        config.contexts_output.display(), config.documents_output.display(),
        config.first_context_id);

    let mut pipeline = Pipeline::new(BufWriter::new(contexts), BufWriter::new(documents), stop_words)
        .first_context_id(config.first_context_id)
        .namespace(&config.entity_namespace);
    let input = BufReader::new(input);
    match config.batch_size {
        Some(batch_size) => pipeline.run_batched(input, batch_size)?,
        None => pipeline.run(input)?,
    }
    pipeline.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn pipeline(stop: &[&str]) -> Pipeline<Vec<u8>, Vec<u8>> {
        Pipeline::new(vec![], vec![], StopWords::from_list(stop))
    }

    #[test]
    fn two_columns_only() {
        assert_eq!(sentence_column("a b\tdoc1"), Some("a b"));
        assert_eq!(sentence_column("a b\tdoc1\n"), Some("a b"));
        assert_eq!(sentence_column("a b"), None);
        assert_eq!(sentence_column("a\tb\tc"), None);
        assert_eq!(sentence_column("a b\t"), None);
        assert_eq!(sentence_column(""), None);
    }

    #[test]
    fn skipped_lines_keep_their_id() {
        let mut p = pipeline(&[]).first_context_id(10);
        assert_eq!(p.process_line("one\tx").unwrap(), LineOutcome::Accepted(10));
        assert_eq!(p.process_line("broken").unwrap(), LineOutcome::Skipped(1));
        assert_eq!(p.process_line("two\tx").unwrap(), LineOutcome::Accepted(11));
        assert_eq!(p.next_context_id(), 12);
        let stats = p.stats();
        assert_eq!((stats.accepted, stats.skipped, stats.occurrences), (2, 1, 2));
    }

    #[test]
    fn writes_both_files() {
        let mut p = pipeline(&["the", "a"]).namespace("http://example.org/");
        p.run(Cursor::new("the [m.01|New York] is big\tdoc\n")).unwrap();
        p.finish().unwrap();
        let (contexts, documents) = p.into_inner();
        assert_eq!(String::from_utf8(documents).unwrap(), "0\tthe New York is big\n");
        assert_eq!(String::from_utf8(contexts).unwrap(),
            "new\t0\t0\t1\nyork\t0\t0\t1\n<http://example.org/m.01/>\t1\t0\t1\nis\t0\t0\t1\nbig\t0\t0\t1\n");
    }

    #[test]
    fn batched_matches_sequential() {
        let input = "a [x|B C] d\t1\nbad line\n\tempty sentence\n[y|Lead] on\t2\nz  z\t3\n";
        let mut seq = pipeline(&["a"]).first_context_id(3);
        seq.run(Cursor::new(input)).unwrap();
        let seq_stats = seq.stats();
        let seq_output = seq.into_inner();
        for batch_size in 1..5 {
            let mut par = pipeline(&["a"]).first_context_id(3);
            par.run_batched(Cursor::new(input), batch_size).unwrap();
            assert_eq!(par.stats(), seq_stats);
            assert_eq!(par.into_inner(), seq_output);
        }
    }

    #[test]
    fn diagnostic_counts_accepted_lines_only() {
        let mut p = pipeline(&[]).first_context_id(5);
        assert_eq!(p.process_line("first\tx").unwrap(), LineOutcome::Accepted(5));
        assert_eq!(p.process_line("no tab").unwrap(), LineOutcome::Skipped(1));
        // The third input line, but a second skip in a row still reports 1.
        assert_eq!(p.process_line("a\tb\tc").unwrap(), LineOutcome::Skipped(1));
        assert_eq!(p.process_line("second\tx").unwrap(), LineOutcome::Accepted(6));
        assert_eq!(p.process_line("").unwrap(), LineOutcome::Skipped(2));
        assert_eq!(malformed_line_message(2),
            "Ignoring line without exactly one tab, line number (starting from 0): 2");
    }

    #[test]
    fn zero_batch_is_rejected() {
        let mut p = pipeline(&[]);
        assert!(p.run_batched(Cursor::new("a\tb\n"), 0).is_err());
    }
}
