//! Loader for directories of `*.json` sample files

use super::{natural_cmp, natural_sort, CorpusLoader, LoadError, SourceFormat};
use crate::models::{SampleRecord, TextSample};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const THEMATIC_KEY: &str = "comando_tematico";
const ESSAY_KEY: &str = "redacao";

/// Decide which layout a parsed JSON document uses.
pub(crate) fn detect_format(value: &Value) -> Option<SourceFormat> {
    match value {
        Value::Object(map) => {
            if matches!(map.get(THEMATIC_KEY), Some(Value::Object(_))) {
                Some(SourceFormat::ThematicCommands)
            } else if matches!(map.get(ESSAY_KEY), Some(Value::Object(_))) {
                Some(SourceFormat::Essays)
            } else if map.values().all(Value::is_string) {
                Some(SourceFormat::FlatMap)
            } else {
                None
            }
        }
        Value::Array(_) => Some(SourceFormat::List),
        _ => None,
    }
}

/// `(key, text)` pairs of a document in sample order; non-string entries
/// are returned as errors so they can be reported individually.
pub(crate) fn extract_entries(
    value: &Value,
    format: SourceFormat,
) -> Vec<(String, Result<String, LoadError>)> {
    match (format, value) {
        (SourceFormat::ThematicCommands, Value::Object(map)) => nested_entries(map, THEMATIC_KEY),
        (SourceFormat::Essays, Value::Object(map)) => nested_entries(map, ESSAY_KEY),
        (SourceFormat::FlatMap, Value::Object(map)) => map_entries(map),
        (SourceFormat::List, Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let key = i.to_string();
                let text = entry_text(&key, item);
                (key, text)
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn nested_entries(root: &Map<String, Value>, key: &str) -> Vec<(String, Result<String, LoadError>)> {
    match root.get(key) {
        Some(Value::Object(inner)) => map_entries(inner),
        _ => Vec::new(),
    }
}

fn map_entries(map: &Map<String, Value>) -> Vec<(String, Result<String, LoadError>)> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort_by(|a, b| natural_cmp(a, b));
    keys.into_iter()
        .map(|k| (k.clone(), entry_text(k, &map[k.as_str()])))
        .collect()
}

fn entry_text(key: &str, value: &Value) -> Result<String, LoadError> {
    value
        .as_str()
        .map(|s| s.trim().to_string())
        .ok_or_else(|| LoadError::NonStringEntry {
            key: key.to_string(),
        })
}

/// Reads every `*.json` file in a directory; one sample per entry.
#[derive(Debug, Clone)]
pub struct JsonDirLoader {
    corpus_name: String,
    dir: PathBuf,
}

impl JsonDirLoader {
    pub fn new(corpus_name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            corpus_name: corpus_name.into(),
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Parse one file into records. Whole-file failures become a single
    /// `Malformed` record named after the file.
    pub fn load_file(&self, path: &Path) -> Vec<SampleRecord> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let value = match read_json(path) {
            Ok(v) => v,
            Err(e) => {
                return vec![SampleRecord::Malformed {
                    sample_id: file_name,
                    reason: e.to_string(),
                }]
            }
        };

        let Some(format) = detect_format(&value) else {
            return vec![SampleRecord::Malformed {
                sample_id: file_name,
                reason: LoadError::UnsupportedShape.to_string(),
            }];
        };
        debug!("{}: {} uses layout {}", self.corpus_name, file_name, format);

        extract_entries(&value, format)
            .into_iter()
            .map(|(key, text)| {
                let sample_id = format!("{}#{}", file_name, key);
                match text {
                    Ok(text) => SampleRecord::Loaded(TextSample::new(&self.corpus_name, sample_id, text)),
                    Err(e) => SampleRecord::Malformed {
                        sample_id,
                        reason: e.to_string(),
                    },
                }
            })
            .collect()
    }
}

fn read_json(path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

impl CorpusLoader for JsonDirLoader {
    fn corpus_name(&self) -> &str {
        &self.corpus_name
    }

    fn load(&self) -> Vec<SampleRecord> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Directory '{}' not found or unreadable: {}", self.dir.display(), e);
                return Vec::new();
            }
        };

        let mut files: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|name| name.ends_with(".json"))
            .collect();
        natural_sort(&mut files);

        let records: Vec<SampleRecord> = files
            .iter()
            .flat_map(|name| self.load_file(&self.dir.join(name)))
            .collect();

        debug!(
            "{}: loaded {} records from {} files in {}",
            self.corpus_name,
            records.len(),
            files.len(),
            self.dir.display()
        );
        records
    }
}
