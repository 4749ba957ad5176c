use kurbo::Vec2;

use crate::error::PathError;
use crate::geom::Mat22;
use crate::parse;
use crate::path::Path;

/// All stroke processing parameters in one struct.
/// Adjustable at runtime (for editor sliders and the CLI).
#[derive(Debug, Clone)]
pub struct PathConfig {
    // -- Decoding --
    /// Text encoding of incoming paths.
    pub format: Format,
    /// If true, malformed tokens are errors instead of being skipped.
    pub strict: bool,

    // -- Transforms --
    /// Uniform scale factor, applied first.
    pub scale: f64,
    /// Rotation in radians, applied after scaling.
    pub angle: f64,
    /// Offset added after rotation.
    pub offset: Vec2,
    /// Rewrite points relative to the first one, after the transforms.
    pub relative: bool,

    // -- Simplification --
    /// Whether to simplify at all.
    pub simplify: bool,
    /// Maximum distance a dropped point may lie from the simplified stroke.
    pub simplify_threshold: f64,
}

/// Text encodings understood by [`parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `"x,y x,y ..."`
    Legacy,
    /// `"Mx yLx y..."`
    Svg,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            format: Format::Legacy,
            strict: false,
            scale: 1.0,
            angle: 0.0,
            offset: Vec2::ZERO,
            relative: false,
            simplify: true,
            simplify_threshold: 1.0,
        }
    }
}

impl PathConfig {
    /// Decode `text` in the configured format and mode.
    pub fn parse(&self, text: &str) -> Result<Path, PathError> {
        match (self.format, self.strict) {
            (Format::Legacy, false) => Ok(parse::parse_legacy(text)),
            (Format::Legacy, true) => parse::parse_legacy_strict(text),
            (Format::Svg, false) => Ok(parse::parse_svg(text)),
            (Format::Svg, true) => parse::parse_svg_strict(text),
        }
    }

    /// Encode `path` in the configured format.
    pub fn encode(&self, path: &Path) -> String {
        match self.format {
            Format::Legacy => path.to_legacy_string(),
            Format::Svg => path.to_svg_string(),
        }
    }

    /// Scale → rotate → translate → relative → simplify.
    pub fn apply(&self, path: Path) -> Path {
        let mut path = path.scale(self.scale);
        if self.angle != 0.0 {
            path = path.rotate(Mat22::from_angle(self.angle));
        }
        path = path.translate(self.offset);
        if self.relative {
            path = path.make_relative();
        }
        if self.simplify {
            path = path.simplify(self.simplify_threshold);
        }
        path
    }
}
