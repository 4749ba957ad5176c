//! stroke-path: 2D polyline geometry for drawn strokes.
//!
//! Represents user-drawn or level-defined strokes as ordered point
//! sequences: decodes them from text, transforms them, bounds them and
//! simplifies dense strokes into sparse ones that keep their shape.
//!
//! # Example
//!
//! ```
//! use stroke_path::Path;
//!
//! let path = Path::parse_legacy("0,0 1,0 2,0 10,0 10,10").simplify(1.0);
//! assert_eq!(path.to_legacy_string(), "0,0 10,0 10,10");
//! ```

#![forbid(unsafe_code)]

mod config;
mod path;

pub mod error;
pub mod geom;
pub mod parse;
pub mod simplify;

// Re-export kurbo so downstream users get the same Point/Vec2/Rect
// types used throughout the API.
pub use kurbo;

pub use config::{Format, PathConfig};
pub use error::PathError;
pub use geom::{Mat22, Segment};
pub use path::Path;
