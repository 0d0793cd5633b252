//! Content loading and the built-in sample set
//!
//! The dashboard is driven by one immutable [`Content`] bundle. By default it
//! comes from the built-in sample set; a TOML content file, either at the
//! global location or passed with `--content`, replaces it wholesale.

mod builtin;
mod lint;

pub use lint::{lint, report, LintFinding};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{CharacterSheet, HeaderStats, PathNode, Quest};

/// Everything the three views render, constructed once and never mutated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub header: HeaderStats,
    pub character: CharacterSheet,
    pub path: Vec<PathNode>,
    pub quests: Vec<Quest>,
    #[serde(default)]
    pub recent_achievements: Vec<String>,
}

/// Errors from reading a content file
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Content {
    /// The built-in sample content
    pub fn builtin() -> Self {
        builtin::BUILTIN.clone()
    }

    /// Load content from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let text = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ContentError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve content for the app: an explicit `--content` path, then the
    /// global content file, then the built-in set. A present-but-broken file
    /// falls back with a warning rather than aborting.
    pub fn load(override_path: Option<&Path>) -> Self {
        let candidate = override_path
            .map(Path::to_path_buf)
            .or_else(|| Some(global_content_path()).filter(|p| p.exists()));

        let content = match candidate {
            Some(path) => match Self::from_file(&path) {
                Ok(content) => {
                    info!("[questdeck] Loaded content from {}", path.display());
                    content
                }
                Err(e) => {
                    warn!("[questdeck] {e}. Falling back to built-in content.");
                    Self::builtin()
                }
            },
            None => Self::builtin(),
        };

        lint::report(&content);
        content
    }
}

/// Global content file location: ~/.questdeck/content.toml
pub fn global_content_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".questdeck")
        .join("content.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let content = Content::builtin();
        assert_eq!(content.quests.len(), 6);
        assert_eq!(content.path.len(), 9);
        assert_eq!(content.character.equipment.len(), 3);
        assert_eq!(content.header.streak, 7);
    }

    #[test]
    fn test_missing_override_falls_back_to_builtin() {
        let content = Content::load(Some(Path::new("/nonexistent/content.toml")));
        assert_eq!(content.quests.len(), Content::builtin().quests.len());
    }
}
