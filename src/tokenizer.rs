//! Annotation-aware sentence tokenizer
//!
//! Sentences are split on single spaces, except that a recognized entity span
//! `[entityId|surface text]` stays one token even though its surface text has spaces in it.
//!
//! ```
//! use entity_contexts::tokenizer::tokenize;
//! assert_eq!(tokenize("a [m.01|New York] city"), vec!["a", "[m.01|New York]", "city"]);
//! ```
//!
//! An entity only opens on a `[` that directly follows a space, so a bracket at the very start
//! of a sentence is plain text. Existing corpora were tokenized that way and their token
//! boundaries have to stay the same.
//!
//! The scan works on bytes. Every delimiter is ASCII, and ASCII bytes never occur inside a
//! multi-byte UTF-8 sequence, so each cut lands on a char boundary.

/// Where the scanner is relative to entity brackets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Outside,
    InsideEntity,
}

/// What a byte means, given its neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Space,
    /// `[` right after a space (never the first byte of the sentence)
    EntityOpen,
    /// `]` that is the last byte or is followed by a space
    EntityClose,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Continue,
    /// The pending token ends before this byte and the next one starts after it
    CutBefore,
    /// The pending token ends with this byte
    CutThrough,
}

fn classify(bytes: &[u8], i: usize) -> CharClass {
    match bytes[i] {
        b' ' => CharClass::Space,
        b'[' if i > 0 && bytes[i - 1] == b' ' => CharClass::EntityOpen,
        b']' if i + 1 == bytes.len() || bytes[i + 1] == b' ' => CharClass::EntityClose,
        _ => CharClass::Other,
    }
}

fn transition(state: State, class: CharClass) -> (State, Action) {
    use self::State::*;
    use self::CharClass::*;
    use self::Action::*;
    match (state, class) {
        (Outside, Space) => (Outside, CutBefore),
        (Outside, EntityOpen) => (InsideEntity, Continue),
        (Outside, EntityClose) | (Outside, Other) => (Outside, Continue),
        (InsideEntity, EntityClose) => (Outside, CutThrough),
        (InsideEntity, Space) | (InsideEntity, EntityOpen) | (InsideEntity, Other) => {
            (InsideEntity, Continue)
        }
    }
}

/// Split one annotated sentence into tokens
///
/// Tokens are slices of the sentence and never empty. Runs of spaces and leading or trailing
/// spaces produce no tokens. An entity span that is never closed runs to the end of the sentence.
pub fn tokenize(sentence: &str) -> Vec<&str> {
    let bytes = sentence.as_bytes();
    let mut tokens = vec![];
    let mut state = State::Outside;
    let mut start = 0;
    for i in 0..bytes.len() {
        let (next, action) = transition(state, classify(bytes, i));
        match action {
            Action::Continue => {}
            Action::CutBefore => {
                if i > start {
                    tokens.push(&sentence[start..i]);
                }
                start = i + 1;
            }
            Action::CutThrough => {
                tokens.push(&sentence[start..i + 1]);
                start = i + 1;
            }
        }
        state = next;
    }
    if start < bytes.len() {
        tokens.push(&sentence[start..]);
    }
    tokens
}
