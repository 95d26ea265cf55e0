//! CJK fallback font for the tip texts
//!
//! egui's bundled fonts have no CJK glyphs, so the default tips would render
//! as boxes. A system font (or the one named in the config) is appended as a
//! fallback to both font families.

use anyhow::{Context, Result};
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const FALLBACK_FONT_NAME: &str = "cjk-fallback";

/// Well-known locations of CJK fonts, checked in order
const SYSTEM_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/wenquanyi/wqy-microhei/wqy-microhei.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Light.ttc",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\simhei.ttf",
];

/// The configured font if set, otherwise the first system candidate that exists
pub fn find_font(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = configured {
        return Some(path.to_path_buf());
    }
    SYSTEM_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Default font definitions with `font` appended as the last fallback
pub fn with_fallback(font: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts.font_data.insert(
        FALLBACK_FONT_NAME.to_owned(),
        Arc::new(FontData::from_owned(font)),
    );
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(FALLBACK_FONT_NAME.to_owned());
    }
    fonts
}

/// Install a CJK fallback font, returning the file that was used
pub fn install_cjk_fallback(
    ctx: &egui::Context,
    configured: Option<&Path>,
) -> Result<Option<PathBuf>> {
    let Some(path) = find_font(configured) else {
        tracing::warn!("No CJK font found; set appearance.cjk_font to render Chinese tip text");
        return Ok(None);
    };

    let bytes = std::fs::read(&path)
        .with_context(|| format!("Failed to read font {}", path.display()))?;
    ctx.set_fonts(with_fallback(bytes));
    tracing::info!("Using CJK fallback font {:?}", path);
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_font_wins() {
        let path = Path::new("/somewhere/font.ttf");
        assert_eq!(find_font(Some(path)), Some(path.to_path_buf()));
    }

    #[test]
    fn test_fallback_is_last_in_each_family() {
        let fonts = with_fallback(Vec::new());
        assert!(fonts.font_data.contains_key(FALLBACK_FONT_NAME));
        for family in [FontFamily::Proportional, FontFamily::Monospace] {
            let names = &fonts.families[&family];
            assert_eq!(names.last().map(String::as_str), Some(FALLBACK_FONT_NAME));
            assert!(names.len() > 1);
        }
    }

    #[test]
    fn test_missing_configured_font_is_an_error() {
        let ctx = egui::Context::default();
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.ttf");
        assert!(install_cjk_fallback(&ctx, Some(&missing)).is_err());
    }
}
