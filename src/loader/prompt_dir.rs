//! Loader for directories of `<id>/prompt.xml` samples

use super::{natural_sort, CorpusLoader, LoadError};
use crate::models::{SampleRecord, TextSample};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

const PROMPT_FILE: &str = "prompt.xml";

fn body_pattern() -> &'static Regex {
    static BODY: OnceLock<Regex> = OnceLock::new();
    BODY.get_or_init(|| Regex::new(r"(?is)<body>(.*?)</body>").expect("valid body regex"))
}

/// Extract the trimmed text of the first `<body>` element.
pub(crate) fn extract_body(xml: &str) -> Result<String, LoadError> {
    body_pattern()
        .captures(xml)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .ok_or(LoadError::MissingBody)
}

/// Reads one sample per subdirectory containing a `prompt.xml` file.
#[derive(Debug, Clone)]
pub struct PromptDirLoader {
    corpus_name: String,
    dir: PathBuf,
}

impl PromptDirLoader {
    pub fn new(corpus_name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            corpus_name: corpus_name.into(),
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read_sample(&self, sample_id: &str, path: &Path) -> Result<TextSample, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let body = extract_body(&content)?;
        Ok(TextSample::new(&self.corpus_name, sample_id, body))
    }
}

impl CorpusLoader for PromptDirLoader {
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

        let mut subdirs: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        natural_sort(&mut subdirs);

        let mut records = Vec::new();
        for name in subdirs {
            let xml_path = self.dir.join(&name).join(PROMPT_FILE);
            if !xml_path.is_file() {
                debug!("{}: no {} in {}, ignoring", self.corpus_name, PROMPT_FILE, name);
                continue;
            }
            let record = match self.read_sample(&name, &xml_path) {
                Ok(sample) => SampleRecord::Loaded(sample),
                Err(e) => SampleRecord::Malformed {
                    sample_id: name,
                    reason: e.to_string(),
                },
            };
            records.push(record);
        }

        debug!("{}: loaded {} records from {}", self.corpus_name, records.len(), self.dir.display());
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_prompt(root: &Path, id: &str, content: &str) {
        let dir = root.join(id);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(PROMPT_FILE), content).unwrap();
    }

    #[test]
    fn test_extract_body() {
        let xml = "<prompt>\n<BODY>\n  Escreva uma redação\n sobre o tema.  </BODY></prompt>";
        assert_eq!(extract_body(xml).unwrap(), "Escreva uma redação\n sobre o tema.");
        assert!(matches!(extract_body("<prompt/>"), Err(LoadError::MissingBody)));
    }

    #[test]
    fn test_extract_first_body_only() {
        let xml = "<body>primeiro</body><body>segundo</body>";
        assert_eq!(extract_body(xml).unwrap(), "primeiro");
    }

    #[test]
    fn test_load_natural_order() {
        let dir = tempfile::tempdir().unwrap();
        write_prompt(dir.path(), "prompt10", "<body>dez</body>");
        write_prompt(dir.path(), "prompt2", "<body>dois</body>");
        write_prompt(dir.path(), "prompt1", "<body>um</body>");
        std::fs::create_dir_all(dir.path().join("empty")).unwrap();

        let loader = PromptDirLoader::new("Data", dir.path());
        let records = loader.load();
        let ids: Vec<&str> = records.iter().map(|r| r.sample_id()).collect();
        assert_eq!(ids, vec!["prompt1", "prompt2", "prompt10"]);
        assert_eq!(
            records[2],
            SampleRecord::Loaded(TextSample::new("Data", "prompt10", "dez"))
        );
    }

    #[test]
    fn test_missing_body_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        write_prompt(dir.path(), "p1", "<prompt>no body</prompt>");
        let records = PromptDirLoader::new("Data", dir.path()).load();
        assert_eq!(records.len(), 1);
        assert!(matches!(&records[0], SampleRecord::Malformed { sample_id, .. } if sample_id == "p1"));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("p1");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(sub.join(PROMPT_FILE), [0xff, 0xfe, 0x00, 0x62]).unwrap();
        let records = PromptDirLoader::new("Data", dir.path()).load();
        assert!(matches!(&records[0], SampleRecord::Malformed { .. }));
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let loader = PromptDirLoader::new("Data", "/nonexistent/lexiscore/Data");
        assert!(loader.load().is_empty());
        assert_eq!(loader.corpus_name(), "Data");
    }
}
