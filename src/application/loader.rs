//! Asynchronous pattern loading.
//!
//! Files are resolved into [`Pattern`]s before the stamper ever sees them.
//! A file that cannot be read or parsed is logged and skipped; it never
//! prevents the session from starting.

use std::path::Path;

use macroquad::file::load_string;
use macroquad::texture::load_image;

use crate::domain::Pattern;

/// How a pattern file is decoded, picked by extension
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternSource {
    /// Life plaintext (`.cells`, `.txt`)
    Plaintext,
    /// Raster image; dark pixels are live (`.png`)
    Image,
}

impl PatternSource {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "cells" | "txt" => Some(PatternSource::Plaintext),
            "png" => Some(PatternSource::Image),
            _ => None,
        }
    }
}

/// Pattern name derived from the file stem
pub fn pattern_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load one pattern file
pub async fn load_pattern(path: &Path) -> anyhow::Result<Pattern> {
    let source = PatternSource::from_path(path)
        .ok_or_else(|| anyhow::anyhow!("unsupported pattern file type"))?;
    let name = pattern_name(path);
    let path_str = path.to_string_lossy();

    let pattern = match source {
        PatternSource::Plaintext => {
            let text = load_string(&path_str)
                .await
                .map_err(|e| anyhow::anyhow!("read failed: {e:?}"))?;
            Pattern::from_plaintext(name, &text)?
        }
        PatternSource::Image => {
            let image = load_image(&path_str)
                .await
                .map_err(|e| anyhow::anyhow!("image decode failed: {e:?}"))?;
            Pattern::from_rgba(name, image.width as usize, image.height as usize, &image.bytes)?
        }
    };
    Ok(pattern)
}

/// Load every file, skipping (and logging) the ones that fail
pub async fn load_patterns<P: AsRef<Path>>(paths: &[P]) -> Vec<Pattern> {
    let mut patterns = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        match load_pattern(path).await {
            Ok(pattern) => {
                log::info!("Loaded pattern '{}' ({} cells) from {}", pattern.name, pattern.offsets.len(), path.display());
                patterns.push(pattern);
            }
            Err(e) => log::warn!("Skipping pattern {}: {e:#}", path.display()),
        }
    }
    patterns
}
