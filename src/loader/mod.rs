//! Corpus loaders
//!
//! Turn a directory on disk into an ordered list of [`SampleRecord`]s.
//! The core never sees file formats: each supported layout is resolved here
//! into the canonical [`TextSample`](crate::models::TextSample) shape.
//!
//! Supported layouts:
//! - `PromptDirLoader`: `<dir>/<id>/prompt.xml`, text inside `<body>`
//! - `JsonDirLoader`: `<dir>/*.json` holding thematic commands, essays,
//!   a flat string map, or a list of strings
//!
//! Failures are per sample: a broken file becomes a `Malformed` record
//! and the rest of the corpus still loads.

mod json_dir;
mod natural_sort;
mod prompt_dir;

pub use json_dir::JsonDirLoader;
pub use natural_sort::{natural_cmp, natural_sort};
pub use prompt_dir::PromptDirLoader;

use crate::models::SampleRecord;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that make a single sample unusable
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no <body> element found")]
    MissingBody,

    #[error("unsupported JSON layout (expected \"comando_tematico\", \"redacao\", a string map or a list)")]
    UnsupportedShape,

    #[error("entry '{key}' is not a string")]
    NonStringEntry { key: String },
}

/// Source layouts the loaders understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `<body>` element of a prompt XML file
    PromptXml,
    /// `{"comando_tematico": {"1": "...", ...}}`
    ThematicCommands,
    /// `{"redacao": {"1": "...", ...}}`
    Essays,
    /// `{"a": "...", "b": "..."}`
    FlatMap,
    /// `["...", "..."]`
    List,
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::PromptXml => write!(f, "prompt_xml"),
            SourceFormat::ThematicCommands => write!(f, "comando_tematico"),
            SourceFormat::Essays => write!(f, "redacao"),
            SourceFormat::FlatMap => write!(f, "flat_map"),
            SourceFormat::List => write!(f, "list"),
        }
    }
}

/// A source of samples for one named corpus
pub trait CorpusLoader: Sync {
    /// Name used for every sample and in reports
    fn corpus_name(&self) -> &str;

    /// Load all samples in natural order. Never fails as a whole: a missing
    /// directory yields an empty list, broken files yield `Malformed` records.
    fn load(&self) -> Vec<SampleRecord>;
}
