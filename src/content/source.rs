//! Content Sources
//!
//! Where site content comes from. The shell only needs the records once, at
//! session start, so sources are async and read-only.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use super::types::SiteContent;

/// Content loading errors
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("cannot read content file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {format} content '{path}': {message}")]
    Parse { path: String, format: ContentFormat, message: String },

    #[error("unsupported content file extension '{path}' (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat { path: String },
}

/// Serialized content formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Json,
    Yaml,
    Toml,
}

impl std::fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ContentFormat::Json => "JSON",
            ContentFormat::Yaml => "YAML",
            ContentFormat::Toml => "TOML",
        };
        f.write_str(name)
    }
}

impl ContentFormat {
    /// Pick a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Parse `input` in this format.
    pub fn parse(self, input: &str) -> Result<SiteContent, String> {
        match self {
            ContentFormat::Json => serde_json::from_str(input).map_err(|e| e.to_string()),
            ContentFormat::Yaml => serde_yaml::from_str(input).map_err(|e| e.to_string()),
            ContentFormat::Toml => toml::from_str(input).map_err(|e| e.to_string()),
        }
    }
}

/// Something that can produce the site content.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn load(&self) -> Result<SiteContent, ContentError>;
}

/// Content read from a JSON, YAML or TOML file.
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn load(&self) -> Result<SiteContent, ContentError> {
        let display = self.path.display().to_string();
        let format = ContentFormat::from_path(&self.path)
            .ok_or_else(|| ContentError::UnsupportedFormat { path: display.clone() })?;

        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ContentError::Io { path: display.clone(), source })?;

        let content = format.parse(&raw).map_err(|message| ContentError::Parse {
            path: display.clone(),
            format,
            message,
        })?;
        log::debug!(
            "loaded {} content from {}: {} projects, {} learnings, {} experience entries",
            format,
            display,
            content.projects.len(),
            content.learnings.len(),
            content.experience.len()
        );
        Ok(content)
    }
}

/// Content already held in memory.
pub struct StaticContentSource {
    content: SiteContent,
}

impl StaticContentSource {
    pub fn new(content: SiteContent) -> Self {
        Self { content }
    }
}

impl Default for StaticContentSource {
    fn default() -> Self {
        Self::new(SiteContent::sample())
    }
}

#[async_trait]
impl ContentSource for StaticContentSource {
    async fn load(&self) -> Result<SiteContent, ContentError> {
        Ok(self.content.clone())
    }
}
