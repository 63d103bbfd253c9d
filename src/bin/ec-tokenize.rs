//! Show how annotated sentences get tokenized
//!
//! Reads sentences on stdin (only the part before the first tab) and prints each line's tokens
//! separated by ` | `, with entities as they appear in the documents file unless `--raw` is given.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate entity_contexts;

use std::io::{self, BufRead, BufWriter, Write};

use entity_contexts::entity::to_document_token;
use entity_contexts::errors::*;
use entity_contexts::tokenizer::tokenize;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    inner_main().expect("Could not recover. Exiting.");
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .arg_from_usage("--raw 'Print entity tokens with their ids and brackets'")
        .get_matches();
    let raw = args.is_present("raw");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut token_count = 0;
    for line in stdin.lock().lines() {
        let line = line?;
        let sentence = line.split('\t').next().unwrap_or("");
        let tokens: Vec<&str> = tokenize(sentence).into_iter()
            .map(|token| if raw { token } else { to_document_token(token) })
            .collect();
        token_count += tokens.len();
        writeln!(out, "{}", tokens.join(" | "))?;
    }
    out.flush()?;
    info!("{} tokens", token_count);
    Ok(())
}
