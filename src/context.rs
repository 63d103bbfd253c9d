//! The contexts file ("wordsfile")
//!
//! One line per occurrence: `key \t kind \t context id \t 1`. Words are lowercased and filtered
//! by the stop list. A marked entity contributes its surface words (filtered the same way) and
//! then always one entity line keyed by its URI. Repeats within a context are written every
//! time; counting them up is left to whoever reads the file.
use std::fmt;
use std::io::Write;
use errors::*;
use entity::{split_entity, full_entity_uri};
use stopwords::StopWords;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccurrenceKind {
    Word = 0,
    Entity = 1,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceRecord {
    /// Lowercased word or full entity URI
    pub key: String,
    pub kind: OccurrenceKind,
    pub context_id: u64,
    pub count: u32,
}

impl OccurrenceRecord {
    pub fn word(word: String, context_id: u64) -> Self {
        OccurrenceRecord { key: word, kind: OccurrenceKind::Word, context_id, count: 1 }
    }

    pub fn entity(uri: String, context_id: u64) -> Self {
        OccurrenceRecord { key: uri, kind: OccurrenceKind::Entity, context_id, count: 1 }
    }
}

impl fmt::Display for OccurrenceRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}\t{}", self.key, self.kind as u8, self.context_id, self.count)
    }
}

/// Hand every occurrence in one context to `sink`, in token order
pub fn emit_occurrences<F>(context_id: u64,
                           tokens: &[&str],
                           stop_words: &StopWords,
                           namespace: &str,
                           mut sink: F) -> Result<()>
    where F: FnMut(OccurrenceRecord) -> Result<()> {
    for token in tokens {
        match split_entity(token) {
            None => {
                let lower = token.to_lowercase();
                if !stop_words.contains(&lower) {
                    sink(OccurrenceRecord::word(lower, context_id))?;
                }
            }
            Some(entity) => {
                for word in entity.words() {
                    let lower = word.to_lowercase();
                    if !stop_words.contains(&lower) {
                        sink(OccurrenceRecord::word(lower, context_id))?;
                    }
                }
                // The stop list never applies to entities.
                sink(OccurrenceRecord::entity(full_entity_uri(namespace, entity.id), context_id))?;
            }
        }
    }
    Ok(())
}

/// Streams occurrence lines into a writer
pub struct ContextWriter<W: Write> {
    out: W,
    namespace: String,
    written: u64,
}

impl<W: Write> ContextWriter<W> {
    pub fn new(out: W, namespace: &str) -> Self {
        ContextWriter { out, namespace: namespace.to_string(), written: 0 }
    }

    /// Write one context, returning how many lines it took
    pub fn write_context(&mut self, context_id: u64, tokens: &[&str], stop_words: &StopWords)
        -> Result<u64> {
        let out = &mut self.out;
        let mut lines = 0;
        emit_occurrences(context_id, tokens, stop_words, &self.namespace, |record| {
            writeln!(out, "{}", record)?;
            lines += 1;
            Ok(())
        })?;
        self.written += lines;
        Ok(lines)
    }

    pub fn set_namespace(&mut self, namespace: &str) {
        self.namespace = namespace.to_string();
    }

    /// Lines written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        Ok(self.out.flush()?)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::FREEBASE_NAMESPACE;

    fn occurrences(context_id: u64, tokens: &[&str], stop_words: &StopWords, namespace: &str)
        -> Vec<OccurrenceRecord> {
        let mut records = vec![];
        emit_occurrences(context_id, tokens, stop_words, namespace, |record| {
            records.push(record);
            Ok(())
        }).unwrap();
        records
    }

    fn keys(records: &[OccurrenceRecord]) -> Vec<(&str, OccurrenceKind)> {
        records.iter().map(|r| (r.key.as_str(), r.kind)).collect()
    }

    #[test]
    fn words_and_entities() {
        let stop = StopWords::from_list(&["a", "the"]);
        let tokens = ["The", "[m.01|New York]", "is", "big"];
        let records = occurrences(3, &tokens, &stop, FREEBASE_NAMESPACE);
        assert_eq!(keys(&records), vec![
            ("new", OccurrenceKind::Word),
            ("york", OccurrenceKind::Word),
            ("<http://rdf.freebase.com/ns/m.01/>", OccurrenceKind::Entity),
            ("is", OccurrenceKind::Word),
            ("big", OccurrenceKind::Word),
        ]);
        assert!(records.iter().all(|r| r.context_id == 3 && r.count == 1));
    }

    #[test]
    fn stop_list_never_hides_entities() {
        let stop = StopWords::from_list(&["the", "who"]);
        let records = occurrences(0, &["[m.0x|The Who]"], &stop, FREEBASE_NAMESPACE);
        assert_eq!(keys(&records), vec![("<http://rdf.freebase.com/ns/m.0x/>", OccurrenceKind::Entity)]);
    }

    #[test]
    fn repeats_are_kept() {
        let stop = StopWords::default();
        let records = occurrences(1, &["go", "Go", "go"], &stop, FREEBASE_NAMESPACE);
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.key == "go"));
    }

    #[test]
    fn writes_tab_separated_lines() {
        let stop = StopWords::from_list(&["in"]);
        let mut writer = ContextWriter::new(vec![], "http://example.org/");
        let lines = writer.write_context(7, &["Born", "in", "[e1|Ulm]"], &stop).unwrap();
        assert_eq!(lines, 3);
        assert_eq!(writer.written(), 3);
        let text = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(text, "born\t0\t7\t1\nulm\t0\t7\t1\n<http://example.org/e1/>\t1\t7\t1\n");
    }

    #[test]
    fn sink_errors_stop_the_context() {
        let stop = StopWords::default();
        let mut seen = 0;
        let result = emit_occurrences(0, &["a", "b", "c"], &stop, FREEBASE_NAMESPACE, |_| {
            seen += 1;
            Err(Error::InvalidConfig("full".to_string()))
        });
        assert!(result.is_err());
        assert_eq!(seen, 1);
    }
}
