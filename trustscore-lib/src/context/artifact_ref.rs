use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::{Display as StrumDisplay, EnumIter};
use url::{ParseError, Url};

/// The kind of resource an artifact URL points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, StrumDisplay, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ArtifactCategory {
    Model,
    Dataset,
    Code,
    Unknown,
}

/// A classified artifact URL with a display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactRef {
    url: Arc<str>,
    category: ArtifactCategory,
    name: Arc<str>,
}

impl ArtifactRef {
    /// Classify a URL.
    ///
    /// Hugging Face URLs are models unless they live under `/datasets/`, GitHub and
    /// GitLab URLs are code repositories, and everything else (including text that
    /// does not parse as a URL) is unknown and named after the input itself. Input
    /// without a scheme, such as `huggingface.co/google/bert`, is read as `https`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let (category, name) = parse_url(raw).map_or_else(|_| (ArtifactCategory::Unknown, raw.to_string()), |url| classify(&url, raw));

        Self {
            url: Arc::from(raw),
            category,
            name: Arc::from(name),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn category(&self) -> ArtifactCategory {
        self.category
    }

    #[must_use]
    pub fn is_model(&self) -> bool {
        self.category == ArtifactCategory::Model
    }
}

impl Display for ArtifactRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.url)
    }
}

fn parse_url(raw: &str) -> Result<Url, ParseError> {
    match Url::parse(raw) {
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{raw}")),
        result => result,
    }
}

fn classify(url: &Url, raw: &str) -> (ArtifactCategory, String) {
    let host = url.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    let segments: Vec<&str> = url
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    match host {
        "huggingface.co" | "hf.co" => {
            if let Some(pos) = segments.iter().position(|s| *s == "datasets") {
                let name = segments.get(pos + 1).map_or_else(|| raw.to_string(), |s| (*s).to_string());
                (ArtifactCategory::Dataset, name)
            } else {
                (ArtifactCategory::Model, owner_and_repo(&segments, raw))
            }
        }
        "github.com" | "gitlab.com" => (ArtifactCategory::Code, owner_and_repo(&segments, raw)),
        _ => (ArtifactCategory::Unknown, raw.to_string()),
    }
}

fn owner_and_repo(segments: &[&str], raw: &str) -> String {
    match segments {
        [owner, repo, ..] => format!("{owner}/{}", repo.trim_end_matches(".git")),
        [single] => (*single).to_string(),
        [] => raw.to_string(),
    }
}
