use super::{ArtifactCategory, ArtifactRef, Context, ContextStore, keys};
use crate::Result;

const LOG_TARGET: &str = "   context";

/// Assembles per-artifact contexts while walking an ordered list of artifacts.
///
/// Dataset and code URLs are not scored themselves. The builder remembers the most
/// recent of each and links them into the context of every model that follows.
#[derive(Debug)]
pub struct ContextBuilder<'a> {
    store: &'a ContextStore,
    dataset_link: Option<String>,
    code_link: Option<String>,
}

impl<'a> ContextBuilder<'a> {
    #[must_use]
    pub const fn new(store: &'a ContextStore) -> Self {
        Self {
            store,
            dataset_link: None,
            code_link: None,
        }
    }

    /// Note an artifact, updating the remembered dataset and code links.
    pub fn observe(&mut self, artifact: &ArtifactRef) {
        match artifact.category() {
            ArtifactCategory::Dataset => {
                log::debug!(target: LOG_TARGET, "Linking dataset '{}' to subsequent models", artifact.name());
                self.dataset_link = Some(artifact.url().to_string());
            }
            ArtifactCategory::Code => {
                log::debug!(target: LOG_TARGET, "Linking code repository '{}' to subsequent models", artifact.name());
                self.code_link = Some(artifact.url().to_string());
            }
            ArtifactCategory::Model | ArtifactCategory::Unknown => {}
        }
    }

    /// Build the context for an artifact.
    ///
    /// Stored metadata wins over remembered links, so explicitly supplied
    /// `dataset_link`, `code_link` or `example_code_present` values are kept as is.
    pub fn build(&self, artifact: &ArtifactRef) -> Result<Context> {
        let mut context = self.store.get(artifact.url())?.unwrap_or_else(|| {
            log::debug!(target: LOG_TARGET, "No stored metadata for '{artifact}', scoring from links only");
            Context::new()
        });

        if let Some(link) = &self.dataset_link
            && !context.contains(keys::DATASET_LINK)
        {
            let _ = context.insert(keys::DATASET_LINK, link.as_str());
        }

        if let Some(link) = &self.code_link {
            if !context.contains(keys::CODE_LINK) {
                let _ = context.insert(keys::CODE_LINK, link.as_str());
            }

            if !context.contains(keys::EXAMPLE_CODE_PRESENT) {
                let _ = context.insert(keys::EXAMPLE_CODE_PRESENT, true);
            }
        }

        Ok(context)
    }
}
