//! Context and document files for entity-annotated sentences
//!
//! Turns sentences like `a [m.01|New York] city` into the two flat files an index builder
//! consumes: one occurrence per word or entity and context, and one plain text line per context.
//! The binaries are thin wrappers around `pipeline`.


#[macro_use] extern crate log;
extern crate farmhash;
extern crate rayon;
pub mod errors;
pub mod farm;
pub mod stopwords;
pub mod tokenizer;
pub mod entity;
pub mod context;
pub mod document;
pub mod config;
pub mod pipeline;
