use super::{Color, Path, Point, Rect, Size};
use crate::error::{Error, Result};
use rand::Rng;
use std::f32::consts::TAU;

/// Number of circles or lines drawn by the decorative patterns.
pub const PATTERN_COUNT: usize = 15;
/// Inclusive radius range for `RandomArcs`.
pub const PATTERN_RADII: (u32, u32) = (5, 15);
/// Random patterns need both edges below this.
pub const MAX_PATTERN_EDGE: f32 = u32::MAX as f32;

/// The fixed set of shapes a card face can carry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// A circle as large as the shorter edge allows, centred in the box.
    Circle,
    /// A square with the shorter edge, anchored at the origin.
    Square,
    /// The whole box.
    FillRect,
    /// Small filled circles scattered over the box.
    RandomArcs,
    /// Thick line segments scattered over the box.
    RandomLines,
}

/// Everything needed to draw one shape layer. Only built through
/// [`ShapeSpec::new`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShapeSpec {
    kind: ShapeKind,
    size: Size,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    stroke_width: f32,
}

impl ShapeKind {
    pub fn is_random(&self) -> bool {
        match *self {
            ShapeKind::RandomArcs | ShapeKind::RandomLines => true,
            _ => false,
        }
    }
}

impl ShapeSpec {
    /// Validates `size` and picks the fill and stroke a shape of `kind` is
    /// painted with.
    pub fn new(kind: ShapeKind, size: Size, color: Color) -> Result<ShapeSpec> {
        if !size.is_valid() {
            return Err(Error::InvalidSize { width: size.width, height: size.height });
        }
        // Random samples are drawn from [1, edge] as u32.
        let sampleable = |edge: f32| edge >= 1.0 && edge < MAX_PATTERN_EDGE;
        if kind.is_random() && !(sampleable(size.width) && sampleable(size.height)) {
            return Err(Error::DegenerateSize { kind, width: size.width, height: size.height });
        }

        let (fill_color, stroke_color, stroke_width) = match kind {
            ShapeKind::Circle | ShapeKind::Square | ShapeKind::FillRect => (Some(color), None, 0.0),
            ShapeKind::RandomArcs => (Some(color), Some(color), 1.0),
            ShapeKind::RandomLines => (None, Some(color), 3.0),
        };

        Ok(ShapeSpec { kind, size, fill_color, stroke_color, stroke_width })
    }

    pub fn kind(&self) -> ShapeKind { self.kind }
    pub fn size(&self) -> Size { self.size }
    pub fn fill_color(&self) -> Option<Color> { self.fill_color }
    pub fn stroke_color(&self) -> Option<Color> { self.stroke_color }
    pub fn stroke_width(&self) -> f32 { self.stroke_width }

    /// Builds the path for this shape. Only the random patterns consume
    /// values from `rng`.
    pub fn build_path<R: Rng>(&self, rng: &mut R) -> Path {
        let Size { width, height } = self.size;
        match self.kind {
            ShapeKind::Circle => {
                let radius = self.size.min_edge() / 2.0;
                let center = Point::new(width / 2.0, height / 2.0);
                Path::builder()
                    .arc(center, radius, 0.0, TAU, true)
                    .close()
                    .build()
            }
            ShapeKind::Square => {
                let edge = self.size.min_edge();
                Path::builder().rect(&Rect::new(0.0, 0.0, edge, edge)).build()
            }
            ShapeKind::FillRect => {
                Path::builder().rect(&Rect::new(0.0, 0.0, width, height)).build()
            }
            ShapeKind::RandomArcs => {
                let mut builder = Path::builder();
                for _ in 0..PATTERN_COUNT {
                    let center = random_point(rng, self.size);
                    let radius = rng.random_range(PATTERN_RADII.0..=PATTERN_RADII.1) as f32;
                    builder = builder.move_to(center).arc(center, radius, 0.0, TAU, true);
                }
                builder.build()
            }
            ShapeKind::RandomLines => {
                let mut builder = Path::builder();
                for _ in 0..PATTERN_COUNT {
                    let from = random_point(rng, self.size);
                    let to = random_point(rng, self.size);
                    builder = builder.move_to(from).line_to(to);
                }
                builder.build()
            }
        }
    }

    /// [`build_path`](Self::build_path) with the thread-local generator.
    pub fn build_path_with_thread_rng(&self) -> Path {
        self.build_path(&mut rand::rng())
    }
}

/// A point with integer coordinates in `[1, width] x [1, height]`.
fn random_point<R: Rng>(rng: &mut R, size: Size) -> Point {
    let x = rng.random_range(1..=size.width as u32);
    let y = rng.random_range(1..=size.height as u32);
    Point::new(x as f32, y as f32)
}
