use super::Context;
use crate::Result;
use camino::Utf8Path;
use compact_str::CompactString;
use ohno::{IntoAppError, app_err, bail};
use std::collections::HashMap;

const LOG_TARGET: &str = "     store";

/// Pre-fetched artifact metadata, keyed by URL.
///
/// Entries are kept as raw JSON and only converted into a [`Context`] when requested,
/// so a malformed entry affects the artifact it belongs to and nothing else.
#[derive(Debug, Clone, Default)]
pub struct ContextStore {
    entries: HashMap<CompactString, serde_json::Value>,
}

impl ContextStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from a JSON file holding an object keyed by URL.
    pub fn load(path: &Utf8Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).into_app_err_with(|| format!("reading context file '{path}'"))?;
        let store = Self::from_json(&text).map_err(|e| app_err!("parsing context file '{path}': {e}"))?;
        log::info!(target: LOG_TARGET, "Loaded metadata for {} artifact(s) from '{path}'", store.len());
        Ok(store)
    }

    /// Parse a store from JSON text holding an object keyed by URL.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let serde_json::Value::Object(map) = value else {
            bail!("context data must be a JSON object keyed by artifact URL");
        };

        let mut store = Self::new();
        for (url, entry) in map {
            store.insert(&url, entry);
        }

        Ok(store)
    }

    /// Record metadata for a URL, replacing any previous entry.
    pub fn insert(&mut self, url: &str, metadata: serde_json::Value) {
        let _ = self.entries.insert(normalize(url), metadata);
    }

    /// Get the context for a URL.
    ///
    /// Returns `Ok(None)` when nothing is known about the URL and an error when the
    /// stored metadata is not a JSON object.
    pub fn get(&self, url: &str) -> Result<Option<Context>> {
        self.entries
            .get(normalize(url).as_str())
            .map(|value| Context::from_json(value.clone()).map_err(|e| app_err!("invalid metadata for '{url}': {e}")))
            .transpose()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything.
    pub fn reset(&mut self) {
        log::debug!(target: LOG_TARGET, "Clearing {} cached entries", self.entries.len());
        self.entries.clear();
    }
}

fn normalize(url: &str) -> CompactString {
    CompactString::from(url.trim().trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::keys;
    use camino::Utf8PathBuf;
    use serde_json::json;

    const SAMPLE: &str = r#"{
        "https://huggingface.co/google/gemma-3-270m": {
            "hf_readme": "Gemma model card",
            "git_contributors": 7
        },
        "https://huggingface.co/broken/model": "not an object"
    }"#;

    #[test]
    fn test_from_json_and_get() {
        let store = ContextStore::from_json(SAMPLE).unwrap();
        assert_eq!(store.len(), 2);

        let context = store.get("https://huggingface.co/google/gemma-3-270m").unwrap().unwrap();
        assert_eq!(context.text(keys::README).unwrap(), Some("Gemma model card"));
        assert_eq!(context.number(keys::GIT_CONTRIBUTORS).unwrap(), Some(7.0));
    }

    #[test]
    fn test_get_ignores_trailing_slash() {
        let store = ContextStore::from_json(SAMPLE).unwrap();
        assert!(store.get("https://huggingface.co/google/gemma-3-270m/").unwrap().is_some());
        assert!(store.get(" https://huggingface.co/google/gemma-3-270m ").unwrap().is_some());
    }

    #[test]
    fn test_get_unknown_url() {
        let store = ContextStore::from_json(SAMPLE).unwrap();
        assert!(store.get("https://huggingface.co/other/model").unwrap().is_none());
    }

    #[test]
    fn test_get_non_object_entry_fails() {
        let store = ContextStore::from_json(SAMPLE).unwrap();
        let err = store.get("https://huggingface.co/broken/model").unwrap_err();
        assert!(err.to_string().contains("invalid metadata"), "{err}");
    }

    #[test]
    fn test_from_json_rejects_non_object_root() {
        assert!(ContextStore::from_json("[1, 2, 3]").is_err());
        assert!(ContextStore::from_json("{ not json").is_err());
    }

    #[test]
    fn test_insert_and_reset() {
        let mut store = ContextStore::new();
        store.insert("https://huggingface.co/a/b/", json!({ "license": "mit" }));
        assert_eq!(store.len(), 1);

        let context = store.get("https://huggingface.co/a/b").unwrap().unwrap();
        assert_eq!(context.text(keys::LICENSE).unwrap(), Some("mit"));

        store.reset();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("context.json")).unwrap();
        std::fs::write(&path, SAMPLE).unwrap();

        let store = ContextStore::load(&path).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ContextStore::load(Utf8Path::new("/nonexistent/context.json")).unwrap_err();
        assert!(err.to_string().contains("reading context file"), "{err}");
    }
}
