//! mushaf: offline access to the mushaf corpus
//!
//! Command-line collaborator over the corpus library. It loads a corpus document named by
//! `--corpus` or by `.mushaf.toml`, runs one query through the engine and renders the result
//! as a table or as JSON.

#![warn(missing_docs)]

pub mod cli;
