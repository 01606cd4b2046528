//! Procedural vector shapes for two-sided cards.
//!
//! A [`ShapeSpec`] turns into a [`Path`] given a random source; a
//! [`CardView`] puts a shape on its front, a random pattern on its back and
//! mounts both into a [`ViewTree`], which an [`OutputDevice`] such as
//! [`SvgWriter`] can draw.

mod error;
mod private;
pub mod scene;

pub use error::{Error, Result};
pub use private::geom;
pub use private::{Arc, Path, PathBuilder, Segment};
pub use private::{ShapeKind, ShapeSpec, MAX_PATTERN_EDGE, PATTERN_COUNT, PATTERN_RADII};
pub use private::{Stroke, ShapeLayer, View, ViewId, ViewTree};
pub use private::{CardState, CardView, Face, FlipCompletion, FlippableView};
pub use private::{CardStyle, Color};
pub use private::{OutputDevice, SvgWriter};
pub use scene::{Scene, SceneOptions};
