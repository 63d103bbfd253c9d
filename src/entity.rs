//! Marked entities: `[entityId|surface text]`
//!
//! Entity identity comes resolved in the input. Here it's only recognized and taken apart.

/// Base URI of the default entity namespace
pub const FREEBASE_NAMESPACE: &str = "http://rdf.freebase.com/ns/";

/// The two halves of a marked entity token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entity<'a> {
    pub id: &'a str,
    pub surface: &'a str,
}

impl<'a> Entity<'a> {
    /// Surface words, split on single spaces (so a doubled space yields an empty word)
    pub fn words(&self) -> ::std::str::Split<'a, char> {
        self.surface.split(' ')
    }
}

/// Starts with `[`, ends with `]` and has a `|` somewhere
pub fn is_marked_entity(token: &str) -> bool {
    token.starts_with('[') && token.ends_with(']') && token.contains('|')
}

/// Take a marked entity apart at its first `|`, or `None` if it isn't one
pub fn split_entity<'a>(token: &'a str) -> Option<Entity<'a>> {
    if !is_marked_entity(token) {
        return None;
    }
    // Both brackets are one byte and the bar can't be either of them.
    let bar = token.find('|')?;
    Some(Entity {
        id: &token[1..bar],
        surface: &token[bar + 1..token.len() - 1],
    })
}

/// What the documents file shows for a token: the surface text of entities, anything else as-is
pub fn to_document_token(token: &str) -> &str {
    match split_entity(token) {
        Some(entity) => entity.surface,
        None => token,
    }
}

/// Render an entity id in the given namespace, e.g. `<http://rdf.freebase.com/ns/m.01/>`
pub fn full_entity_uri(namespace: &str, entity_id: &str) -> String {
    format!("<{}{}/>", namespace, entity_id)
}

pub fn to_full_entity_uri(entity_id: &str) -> String {
    full_entity_uri(FREEBASE_NAMESPACE, entity_id)
}
