//! The demo scenes the `cards` binary knows how to draw.

use crate::error::Result;
use crate::geom::{Matrix, Point, Rect};
use crate::{CardStyle, CardView, Color, FlippableView, Path, ShapeKind, ShapeLayer, Stroke, View, ViewTree};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::PI;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Scene {
    /// Two cards side by side, the second one flipped.
    Cards,
    /// A single open arc.
    Bezier,
    /// Nested, rotated and bordered views.
    Views,
}

#[derive(Clone, Debug)]
pub struct SceneOptions {
    pub seed: u64,
    pub style: CardStyle,
    pub front: ShapeKind,
}

impl Default for SceneOptions {
    fn default() -> SceneOptions {
        SceneOptions {
            seed: 0,
            style: CardStyle::default(),
            front: ShapeKind::Circle,
        }
    }
}

impl Scene {
    pub fn build(&self, options: &SceneOptions) -> Result<ViewTree> {
        match *self {
            Scene::Cards => card_table(options),
            Scene::Bezier => Ok(bezier()),
            Scene::Views => Ok(nested_views()),
        }
    }
}

fn card_table(options: &SceneOptions) -> Result<ViewTree> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut tree = ViewTree::new(View::new(Rect::new(0.0, 0.0, 320.0, 150.0)).with_background(Color::WHITE));
    let root = tree.root();

    let mut first = CardView::with_style(
        Rect::new(0.0, 0.0, 120.0, 150.0), Color::RED, options.front, options.style, &mut rng)?;
    first.mount(&mut tree, root);

    let mut second = CardView::with_style(
        Rect::new(200.0, 0.0, 120.0, 150.0), Color::RED, options.front, options.style, &mut rng)?;
    second.set_flipped(true);
    second.mount(&mut tree, root);

    Ok(tree)
}

fn bezier() -> ViewTree {
    let mut tree = ViewTree::new(View::new(Rect::new(0.0, 0.0, 400.0, 400.0)).with_background(Color::WHITE));
    let root = tree.root();

    let path = Path::builder()
        .arc(Point::new(200.0, 200.0), 150.0, PI / 5.0, PI, true)
        .build();
    let stroke = Stroke { width: 5.0, color: Color::GRAY };
    tree.view_mut(root).layers.push(ShapeLayer::custom(path, Some(Color::GREEN), Some(stroke)));
    tree
}

fn nested_views() -> ViewTree {
    let mut tree = ViewTree::new(View::new(Rect::new(0.0, 0.0, 400.0, 450.0)).with_background(Color::GRAY));
    let root = tree.root();

    let red = tree.insert(View::new(Rect::new(50.0, 50.0, 200.0, 200.0))
        .with_background(Color::RED)
        .clipped()
        .with_transform(Matrix::new().rotate(PI / 3.0)));
    let green = tree.insert(View::new(Rect::new(100.0, 100.0, 180.0, 180.0)).with_background(Color::GREEN));
    let white = tree.insert(View::new(Rect::new(0.0, 0.0, 50.0, 50.0)).with_background(Color::WHITE));

    tree.center_in(green, red);
    tree.center_in(white, green);

    tree.add_subview(root, red);
    tree.add_subview(red, green);
    tree.add_subview(green, white);

    let pink = tree.add_view(root, View::new(Rect::new(50.0, 300.0, 100.0, 100.0))
        .with_background(Color::PINK)
        .with_border(5.0, Color::YELLOW)
        .with_corner_radius(10.0));
    tree.add_view(pink, View::new(Rect::new(10.0, 10.0, 20.0, 20.0))
        .with_background(Color::BLACK)
        .with_corner_radius(10.0));

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SvgWriter;

    #[test]
    fn card_table_has_two_cards_with_two_faces_each() {
        let tree = Scene::Cards.build(&SceneOptions::default()).unwrap();
        let root = tree.view(tree.root());
        assert_eq!(root.children().len(), 2);
        for &card in root.children() {
            assert_eq!(tree.view(card).children().len(), 2);
        }
    }

    #[test]
    fn scenes_are_reproducible() {
        let options = SceneOptions { seed: 11, ..SceneOptions::default() };
        let a = SvgWriter::render(&Scene::Cards.build(&options).unwrap()).into_string();
        let b = SvgWriter::render(&Scene::Cards.build(&options).unwrap()).into_string();
        assert_eq!(a, b);
    }

    #[test]
    fn bezier_is_an_open_stroked_arc() {
        let tree = Scene::Bezier.build(&SceneOptions::default()).unwrap();
        let layers = &tree.view(tree.root()).layers;
        assert_eq!(layers.len(), 1);
        assert!(!layers[0].path.is_closed());
        assert_eq!(layers[0].stroke_width(), 5.0);
    }

    #[test]
    fn nested_views_stay_centred_on_the_rotated_parent() {
        let tree = Scene::Views.build(&SceneOptions::default()).unwrap();
        let root = tree.view(tree.root());
        let red = root.children()[0];
        let green = tree.view(red).children()[0];
        let white = tree.view(green).children()[0];
        let expected = Point::new(150.0, 150.0);
        assert!(tree.frame_in_root(white).midpoint().close_to(&expected, 1e-3));
        assert!(tree.frame_in_root(green).midpoint().close_to(&expected, 1e-3));
    }
}
