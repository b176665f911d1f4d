use std::path::Path;

use anyhow::Context;

use crate::{
    color::gamma::Gamma,
    foundation::error::{PixfmtError, PixfmtResult},
    pixel::{batch::BatchThreading, format::PixelFormat},
};

/// Everything needed to pack a buffer, loadable from JSON.
///
/// ```json
/// { "format": "bgra+premultiplied", "gamma": { "r": 1.0, "g": 1.0, "b": 1.0 },
///   "threading": { "parallel": true, "chunk_size": 1024 } }
/// ```
///
/// Every field is optional; unknown fields are rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Target layout. Defaults to `rgba`.
    pub format: PixelFormat,
    /// Forward gamma applied on encode. Defaults to identity.
    pub gamma: Gamma,
    /// Batch threading. Defaults to sequential.
    pub threading: BatchThreading,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            format: PixelFormat::RGBA,
            gamma: Gamma::NONE,
            threading: BatchThreading::default(),
        }
    }
}

impl CodecConfig {
    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> PixfmtResult<Self> {
        serde_json::from_str(s).map_err(|e| PixfmtError::serde(format!("codec config: {e}")))
    }

    /// Read and parse a JSON file.
    pub fn load(path: &Path) -> PixfmtResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read codec config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Pretty JSON form.
    pub fn to_json_pretty(&self) -> PixfmtResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| PixfmtError::serde(e.to_string()))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
