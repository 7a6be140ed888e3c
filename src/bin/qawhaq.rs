//! qawhaq CLI
//!
//! Loads a JSON dictionary snapshot and runs one query against it,
//! printing the rendered entries as JSON. Morphological analysis is an
//! external service; the CLI runs with the no-op analyzer, so only the
//! DSL/plain-term pass produces matches here.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use dict_core::{LinkFormat, LookupEngine, NullAnalyzer};
use dict_types::{Dictionary, Entry, EntryId};

#[derive(Parser)]
#[command(name = "qawhaq", about = "Dictionary lookup over a JSON snapshot")]
struct Args {
    /// Path to the dictionary snapshot (JSON)
    dictionary: PathBuf,

    /// Query: a word, a phrase, or a DSL expression
    query: String,

    /// Display locale
    #[arg(long, default_value = "en")]
    locale: String,

    /// Markup dialect emitted for embedded links
    #[arg(long, value_enum, default_value = "html")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Markdown,
}

impl From<Format> for LinkFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Html => LinkFormat::Html,
            Format::Markdown => LinkFormat::Markdown,
        }
    }
}

/// On-disk snapshot shape: the loader's output, serialized.
#[derive(Deserialize)]
struct Snapshot {
    locales: Vec<String>,
    entries: Vec<SnapshotEntry>,
}

#[derive(Deserialize)]
struct SnapshotEntry {
    id: EntryId,
    #[serde(flatten)]
    entry: Entry,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let raw = fs::read_to_string(&args.dictionary)
        .with_context(|| format!("reading {}", args.dictionary.display()))?;
    let snapshot: Snapshot =
        serde_json::from_str(&raw).context("parsing dictionary snapshot")?;
    let dictionary = Dictionary::new(
        snapshot.entries.into_iter().map(|e| (e.id, e.entry)),
        snapshot.locales,
    )?;

    let engine = LookupEngine::new(dictionary, Box::new(NullAnalyzer));
    let results = engine.dictionary_query(&args.query, &args.locale, args.format.into());
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
