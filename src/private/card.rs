use super::{CardStyle, Color, Rect, ShapeKind, ShapeLayer, ShapeSpec, View, ViewId, ViewTree};
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Called once a flip has finished.
pub type FlipCompletion = Box<dyn FnMut(&dyn FlippableView)>;

/// Something with two faces that can be turned over.
pub trait FlippableView {
    fn is_flipped(&self) -> bool;
    /// Changing the flag marks the view as needing a render.
    fn set_flipped(&mut self, flipped: bool);
    /// Toggles the flag, then runs the completion handler if one is set.
    fn flip(&mut self);
    fn set_flip_completion_handler(&mut self, handler: Option<FlipCompletion>);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
}

/// Presentation state of a card.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardState {
    pub is_flipped: bool,
    pub front_shape: ShapeSpec,
    pub back_pattern: ShapeSpec,
    /// The card in its own coordinates.
    pub bounds: Rect,
}

/// A rounded, bordered card showing a shape on the front and a random
/// pattern on the back.
///
/// The card lives in a [`ViewTree`] once mounted. Face views are built on the
/// first render and reused afterwards.
pub struct CardView {
    frame: Rect,
    style: CardStyle,
    state: CardState,
    pattern_seed: u64,
    needs_display: bool,
    view: Option<ViewId>,
    faces: Option<(ViewId, ViewId)>,
    flip_completion_handler: Option<FlipCompletion>,
}

impl CardView {
    pub fn new<R: Rng>(frame: Rect, color: Color, front: ShapeKind, rng: &mut R) -> Result<CardView> {
        CardView::with_style(frame, color, front, CardStyle::default(), rng)
    }

    /// Picks the back pattern and validates that both faces fit in `frame`.
    pub fn with_style<R: Rng>(frame: Rect, color: Color, front: ShapeKind, style: CardStyle, rng: &mut R) -> Result<CardView> {
        let bounds = frame.bounds();
        let size = bounds.size();
        if !size.is_valid() {
            return Err(Error::InvalidSize { width: size.width, height: size.height });
        }

        let inset = bounds.inset(style.margin);
        if !inset.size().is_valid() {
            return Err(Error::DegenerateSize { kind: front, width: size.width, height: size.height });
        }
        let front_shape = ShapeSpec::new(front, inset.size(), color)?;

        let back = if rng.random_bool(0.5) { ShapeKind::RandomArcs } else { ShapeKind::RandomLines };
        let back_pattern = ShapeSpec::new(back, size, style.pattern_color)?;

        Ok(CardView {
            frame,
            style,
            state: CardState {
                is_flipped: false,
                front_shape,
                back_pattern,
                bounds,
            },
            pattern_seed: rng.random(),
            needs_display: true,
            view: None,
            faces: None,
            flip_completion_handler: None,
        })
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// The card's own view, once mounted.
    pub fn view(&self) -> Option<ViewId> {
        self.view
    }

    /// Face views as `(front, back)`, once built.
    pub fn face_views(&self) -> Option<(ViewId, ViewId)> {
        self.faces
    }

    /// Faces from bottom to top.
    pub fn z_order(&self) -> [Face; 2] {
        if self.state.is_flipped {
            [Face::Back, Face::Front]
        } else {
            [Face::Front, Face::Back]
        }
    }

    pub fn topmost(&self) -> Face {
        self.z_order()[1]
    }

    /// Adds the card's chrome view to `parent` and renders the faces into it.
    pub fn mount(&mut self, tree: &mut ViewTree, parent: ViewId) -> ViewId {
        let id = match self.view {
            Some(id) => {
                tree.add_subview(parent, id);
                id
            }
            None => {
                let chrome = View::new(self.frame)
                    .clipped()
                    .with_corner_radius(self.style.corner_radius)
                    .with_border(self.style.border_width, self.style.border_color);
                let id = tree.add_view(parent, chrome);
                self.view = Some(id);
                id
            }
        };
        self.render(tree);
        id
    }

    /// Re-attaches both faces in the order given by [`z_order`](Self::z_order).
    /// Does nothing until the card is mounted.
    pub fn render(&mut self, tree: &mut ViewTree) {
        let card = match self.view {
            Some(card) => card,
            None => return,
        };
        let (front, back) = self.build_faces(tree);

        tree.remove_from_superview(back);
        tree.remove_from_superview(front);
        for face in &self.z_order() {
            match *face {
                Face::Front => tree.add_subview(card, front),
                Face::Back => tree.add_subview(card, back),
            }
        }
        self.needs_display = false;
    }

    /// Renders only if the state changed since the last render.
    pub fn render_if_needed(&mut self, tree: &mut ViewTree) {
        if self.needs_display {
            self.render(tree);
        }
    }

    fn build_faces(&mut self, tree: &mut ViewTree) -> (ViewId, ViewId) {
        if let Some(faces) = self.faces {
            return faces;
        }

        let mut rng = StdRng::seed_from_u64(self.pattern_seed);
        let bounds = self.state.bounds;

        let front = tree.insert(View::new(bounds).with_background(self.style.face_background));
        let shape = View::new(bounds.inset(self.style.margin))
            .with_layer(ShapeLayer::new(self.state.front_shape, &mut rng));
        tree.add_view(front, shape);

        let back = tree.insert(View::new(bounds)
            .with_background(self.style.face_background)
            .with_layer(ShapeLayer::new(self.state.back_pattern, &mut rng)));

        tracing::debug!(
            front = ?self.state.front_shape.kind(),
            back = ?self.state.back_pattern.kind(),
            "built card faces"
        );
        self.faces = Some((front, back));
        (front, back)
    }
}

impl FlippableView for CardView {
    fn is_flipped(&self) -> bool {
        self.state.is_flipped
    }

    fn set_flipped(&mut self, flipped: bool) {
        self.state.is_flipped = flipped;
        self.needs_display = true;
    }

    fn flip(&mut self) {
        let flipped = !self.state.is_flipped;
        self.set_flipped(flipped);

        // No animation is run, so the flip is complete right away.
        if let Some(mut handler) = self.flip_completion_handler.take() {
            let view: &dyn FlippableView = &*self;
            handler(view);
            if self.flip_completion_handler.is_none() {
                self.flip_completion_handler = Some(handler);
            }
        }
    }

    fn set_flip_completion_handler(&mut self, handler: Option<FlipCompletion>) {
        self.flip_completion_handler = handler;
    }
}

impl fmt::Debug for CardView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CardView")
            .field("frame", &self.frame)
            .field("state", &self.state)
            .field("needs_display", &self.needs_display)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}
