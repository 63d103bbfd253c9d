//! Write the contexts and documents files for an index builder
//!
//! Reads a sentences file with recognized entities (the sentence, a tab, and one more column
//! that is ignored) and writes:
//!
//! - the contexts file ("wordsfile", `--w`): `word or entity \t 0 or 1 \t context id \t 1`
//! - the documents file ("docsfile", `--d`): `context id \t sentence with entities as plain text`
//!
//! Lines without exactly one tab are reported and skipped. Set RUST_LOG to change how much is
//! logged; the default is info.

// argument parsing
#[macro_use] extern crate clap;
extern crate env_logger;
// lastly, this library
extern crate entity_contexts;

use clap::{App, Arg, ArgMatches};

use entity_contexts::config::Config;
use entity_contexts::errors::*;
use entity_contexts::pipeline::run_files;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    inner_main().expect("Could not recover. Exiting.");
}
pub fn inner_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = app().get_matches();
    run_files(&config_from(&args))?;
    Ok(())
}

fn app() -> App<'static, 'static> {
    app_from_crate!()
        .arg_from_usage("--sentences <FILE> 'Sentences file with recognized entities'")
        // Single letter long names, as the existing scripts call them
        .arg(Arg::with_name("w")
            .long("w")
            .alias("wordsfile")
            .value_name("FILE")
            .takes_value(true)
            .required(true)
            .help("Output filename for the contexts file (\"wordsfile\")"))
        .arg(Arg::with_name("d")
            .long("d")
            .alias("docsfile")
            .value_name("FILE")
            .takes_value(true)
            .required(true)
            .help("Output filename for the orig text file (\"docsfile\")"))
        .arg_from_usage("--stop-tokens-file <FILE> 'Tokens to omit in the contexts file, \
                         one item a line and lower case'")
        .arg_from_usage("--first-context-id [ID] 'Start assigning context ids from this number'")
        .arg_from_usage("--namespace [URI] 'Base URI for entity ids'")
        .arg_from_usage("--batch-size [LINES] 'Tokenize this many lines at a time on all cores'")
}

fn config_from(args: &ArgMatches) -> Config {
    let mut config = Config::new(
        args.value_of("sentences").unwrap(),
        args.value_of("w").unwrap(),
        args.value_of("d").unwrap(),
        args.value_of("stop-tokens-file").unwrap());
    if args.is_present("first-context-id") {
        config.first_context_id = value_t!(args, "first-context-id", u64)
            .unwrap_or_else(|e| e.exit());
    }
    if let Some(namespace) = args.value_of("namespace") {
        config.entity_namespace = namespace.to_string();
    }
    if args.is_present("batch-size") {
        config.batch_size = Some(value_t!(args, "batch-size", usize).unwrap_or_else(|e| e.exit()));
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(argv: &[&str]) -> ::std::result::Result<Config, clap::Error> {
        let args = app().get_matches_from_safe(argv.iter().cloned())?;
        Ok(config_from(&args))
    }

    #[test]
    fn takes_the_scripts_option_names() {
        let config = parse(&["ec-contexts", "--sentences", "s.tsv", "--w", "w.tsv", "--d", "d.tsv",
                             "--stop-tokens-file", "st.txt", "--first-context-id", "5"]).unwrap();
        assert_eq!(config.sentences, PathBuf::from("s.tsv"));
        assert_eq!(config.contexts_output, PathBuf::from("w.tsv"));
        assert_eq!(config.documents_output, PathBuf::from("d.tsv"));
        assert_eq!(config.stop_words, PathBuf::from("st.txt"));
        assert_eq!(config.first_context_id, 5);
        assert_eq!(config.batch_size, None);
    }

    #[test]
    fn long_aliases_and_options() {
        let config = parse(&["ec-contexts", "--sentences", "s.tsv", "--wordsfile", "w.tsv",
                             "--docsfile", "d.tsv", "--stop-tokens-file", "st.txt",
                             "--namespace", "http://example.org/", "--batch-size", "64"]).unwrap();
        assert_eq!(config.contexts_output, PathBuf::from("w.tsv"));
        assert_eq!(config.documents_output, PathBuf::from("d.tsv"));
        assert_eq!(config.first_context_id, 0);
        assert_eq!(config.entity_namespace, "http://example.org/");
        assert_eq!(config.batch_size, Some(64));
    }

    #[test]
    fn outputs_are_required() {
        assert!(parse(&["ec-contexts", "--sentences", "s.tsv", "--w", "w.tsv",
                        "--stop-tokens-file", "st.txt"]).is_err());
    }
}
