//! The documents file ("docsfile"): `context id \t text`, entities shown as their surface text
use std::fmt;
use entity::to_document_token;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    pub context_id: u64,
    pub text: String,
}

impl fmt::Display for DocumentRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}", self.context_id, self.text)
    }
}

/// Every token is kept, stop words included
pub fn document_record(context_id: u64, tokens: &[&str]) -> DocumentRecord {
    let text = tokens.iter()
        .map(|&token| to_document_token(token))
        .collect::<Vec<&str>>()
        .join(" ");
    DocumentRecord { context_id, text }
}
