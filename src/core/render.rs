//! Renderer module
//!
//! Renders a PathContentMap to a JSON document and writes it out.

use std::io::Write;

use crate::core::error::{DirJsonError, Result};
use crate::core::model::PathContentMap;

/// Render configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }
}

/// Renderer for path/content maps
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a map to a JSON string (compact unless `pretty`)
    pub fn render(&self, map: &PathContentMap) -> Result<String> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(map)?
        } else {
            serde_json::to_string(map)?
        };
        Ok(json)
    }

    /// Render to a writer, followed by a single newline.
    ///
    /// The document is fully rendered before the first byte is written.
    pub fn render_to<W: Write>(&self, map: &PathContentMap, mut writer: W) -> Result<()> {
        let output = self.render(map)?;
        writer
            .write_all(output.as_bytes())
            .map_err(DirJsonError::Write)?;
        writer.write_all(b"\n").map_err(DirJsonError::Write)?;
        writer.flush().map_err(DirJsonError::Write)
    }
}
