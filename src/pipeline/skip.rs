//! Directory skip policy for discovery.

use crate::utils::config::CatalogueDefaults;

/// Decides whether a directory (and its subtree) is left out of discovery.
#[derive(Clone, Debug)]
pub struct SkipPolicy {
    keywords: Vec<String>,
}

impl Default for SkipPolicy {
    fn default() -> Self {
        Self::new(CatalogueDefaults::SKIP_KEYWORDS)
    }
}

impl SkipPolicy {
    /// Policy with a caller-supplied keyword list. Keywords are compared case-insensitively.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if the lowercased name equals a keyword or starts with `00000`.
    pub fn should_skip(&self, directory_name: &str) -> bool {
        let name = directory_name.to_lowercase();
        self.keywords.iter().any(|k| *k == name) || name.starts_with(CatalogueDefaults::SKIP_PREFIX)
    }
}
