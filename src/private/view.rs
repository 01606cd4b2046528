use super::{Color, Matrix, OutputDevice, Path, Point, Rect, ShapeKind, ShapeSpec};
use rand::Rng;

/// Index of a view inside a [`ViewTree`].
///
/// An id is only meaningful for the tree that handed it out. Passing it to
/// another tree panics if it is out of range there, or addresses an
/// unrelated view otherwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(usize);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

/// A painted path, drawn at the owning view's local origin.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeLayer {
    /// The generator the path came from, if any.
    pub kind: Option<ShapeKind>,
    pub path: Path,
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

/// A rectangle in its parent's coordinate space, with optional paint and
/// shape layers.
#[derive(Clone, Debug)]
pub struct View {
    pub frame: Rect,
    pub background: Option<Color>,
    /// Applied about the centre of the frame.
    pub transform: Matrix,
    pub clips_to_bounds: bool,
    pub corner_radius: f32,
    pub border: Option<Stroke>,
    pub layers: Vec<ShapeLayer>,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
}

/// An arena of views with a single root.
#[derive(Clone, Debug)]
pub struct ViewTree {
    views: Vec<View>,
    root: ViewId,
}

impl ShapeLayer {
    /// Generates the path for `spec` and takes its paint.
    pub fn new<R: Rng>(spec: ShapeSpec, rng: &mut R) -> ShapeLayer {
        ShapeLayer {
            kind: Some(spec.kind()),
            path: spec.build_path(rng),
            fill: spec.fill_color(),
            stroke: spec.stroke_color().map(|color| Stroke { width: spec.stroke_width(), color }),
        }
    }

    pub fn custom(path: Path, fill: Option<Color>, stroke: Option<Stroke>) -> ShapeLayer {
        ShapeLayer { kind: None, path, fill, stroke }
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke.map_or(0.0, |s| s.width)
    }
}

impl View {
    pub fn new(frame: Rect) -> View {
        View {
            frame,
            background: None,
            transform: Matrix::new(),
            clips_to_bounds: false,
            corner_radius: 0.0,
            border: None,
            layers: vec![],
            parent: None,
            children: vec![],
        }
    }

    pub fn with_background(mut self, color: Color) -> View {
        self.background = Some(color);
        self
    }

    pub fn with_transform(mut self, transform: Matrix) -> View {
        self.transform = transform;
        self
    }

    pub fn clipped(mut self) -> View {
        self.clips_to_bounds = true;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> View {
        self.corner_radius = radius;
        self
    }

    pub fn with_border(mut self, width: f32, color: Color) -> View {
        self.border = Some(Stroke { width, color });
        self
    }

    pub fn with_layer(mut self, layer: ShapeLayer) -> View {
        self.layers.push(layer);
        self
    }

    pub fn bounds(&self) -> Rect {
        self.frame.bounds()
    }

    pub fn parent(&self) -> Option<ViewId> {
        self.parent
    }

    /// Subviews, back to front.
    pub fn children(&self) -> &[ViewId] {
        &self.children
    }

    /// Maps local coordinates into the parent's coordinates.
    pub fn parent_from_local(&self) -> Matrix {
        let origin = self.frame.origin();
        Matrix::new()
            .translate(origin.x, origin.y)
            .then(&self.transform.about(&self.bounds().midpoint()))
    }
}

impl ViewTree {
    pub fn new(root: View) -> ViewTree {
        ViewTree {
            views: vec![root],
            root: ViewId(0),
        }
    }

    pub fn root(&self) -> ViewId {
        self.root
    }

    /// Number of views, attached or not, including the root.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Always false: a tree holds at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Adds a detached view; attach it with [`add_subview`](Self::add_subview).
    pub fn insert(&mut self, view: View) -> ViewId {
        let id = ViewId(self.views.len());
        self.views.push(view);
        id
    }

    pub fn view(&self, id: ViewId) -> &View {
        &self.views[id.0]
    }

    pub fn view_mut(&mut self, id: ViewId) -> &mut View {
        &mut self.views[id.0]
    }

    /// Attaches `child` on top of `parent`'s other subviews, detaching it from
    /// any previous parent first.
    ///
    /// # Panics
    ///
    /// If either id is out of range, if `child` is the root, or if `child` is
    /// `parent` or one of its ancestors.
    pub fn add_subview(&mut self, parent: ViewId, child: ViewId) {
        assert!(parent.0 < self.views.len() && child.0 < self.views.len(),
                "view id from another tree");
        assert!(child != self.root, "the root view cannot be a subview");
        assert!(!self.is_ancestor_or_self(child, parent),
                "a view cannot be added to one of its own subviews");
        self.remove_from_superview(child);
        self.views[parent.0].children.push(child);
        self.views[child.0].parent = Some(parent);
    }

    /// Inserts `view` and attaches it to `parent` in one go.
    pub fn add_view(&mut self, parent: ViewId, view: View) -> ViewId {
        let id = self.insert(view);
        self.add_subview(parent, id);
        id
    }

    /// True if `ancestor` is `id` or appears on the chain of parents above it.
    pub fn is_ancestor_or_self(&self, ancestor: ViewId, id: ViewId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.view(c).parent;
        }
        false
    }

    pub fn remove_from_superview(&mut self, child: ViewId) {
        if let Some(parent) = self.views[child.0].parent.take() {
            self.views[parent.0].children.retain(|&c| c != child);
        }
    }

    /// Moves `view` so its centre sits on the midpoint of `container`'s
    /// bounds, i.e. the centre in the container's local coordinates.
    pub fn center_in(&mut self, view: ViewId, container: ViewId) {
        let center = self.view(container).bounds().midpoint();
        let v = self.view_mut(view);
        v.frame = v.frame.centered_on(&center);
    }

    /// Maps local coordinates of `id` into the root's local coordinates.
    pub fn root_from_local(&self, id: ViewId) -> Matrix {
        let mut m = Matrix::new();
        let mut current = Some(id);
        while let Some(c) = current {
            if c == self.root {
                break;
            }
            let view = self.view(c);
            m = view.parent_from_local().then(&m);
            current = view.parent;
        }
        m
    }

    pub fn convert_to_root(&self, id: ViewId, point: &Point) -> Point {
        self.root_from_local(id).transform_point(point)
    }

    /// Axis-aligned bounds of the view as it appears in root coordinates.
    pub fn frame_in_root(&self, id: ViewId) -> Rect {
        self.root_from_local(id).transform_rect(&self.view(id).bounds())
    }

    /// Walks the tree from the root in painter's order.
    pub fn render_all<O: OutputDevice>(&self, out: &mut O) {
        let root = self.view(self.root);
        out.set_size(root.frame.width(), root.frame.height());
        self.render_view(self.root, &Matrix::new(), out);
    }

    fn render_view<O: OutputDevice>(&self, id: ViewId, parent_from_local: &Matrix, out: &mut O) {
        let view = self.view(id);
        out.begin_view(view, parent_from_local);
        for layer in &view.layers {
            out.draw_layer(layer);
        }
        for &child in &view.children {
            let child_view = self.view(child);
            self.render_view(child, &child_view.parent_from_local(), out);
        }
        out.end_view(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    struct Recorder {
        events: Vec<String>,
    }

    impl OutputDevice for Recorder {
        fn begin_view(&mut self, view: &View, _: &Matrix) {
            self.events.push(format!("begin {}", view.frame.width()));
        }
        fn draw_layer(&mut self, layer: &ShapeLayer) {
            self.events.push(format!("layer {:?}", layer.kind));
        }
        fn end_view(&mut self, view: &View) {
            self.events.push(format!("end {}", view.frame.width()));
        }
    }

    fn nested() -> (ViewTree, ViewId, ViewId, ViewId) {
        let mut tree = ViewTree::new(View::new(Rect::new(0.0, 0.0, 400.0, 400.0)));
        let red = tree.insert(View::new(Rect::new(50.0, 50.0, 200.0, 200.0))
            .with_transform(Matrix::new().rotate(PI / 3.0)));
        let green = tree.insert(View::new(Rect::new(100.0, 100.0, 180.0, 180.0)));
        let white = tree.insert(View::new(Rect::new(0.0, 0.0, 50.0, 50.0)));

        tree.center_in(green, red);
        tree.center_in(white, green);

        let root = tree.root();
        tree.add_subview(root, red);
        tree.add_subview(red, green);
        tree.add_subview(green, white);
        (tree, red, green, white)
    }

    #[test]
    fn center_in_uses_local_coordinates() {
        let (tree, _, green, white) = nested();
        assert!(tree.view(green).frame.close_to(&Rect::new(10.0, 10.0, 180.0, 180.0), 1e-4));
        assert!(tree.view(white).frame.close_to(&Rect::new(65.0, 65.0, 50.0, 50.0), 1e-4));
    }

    #[test]
    fn rotated_parent_keeps_nested_centres_aligned() {
        let (tree, red, _, white) = nested();
        let red_center = tree.convert_to_root(red, &Point::new(100.0, 100.0));
        assert!(red_center.close_to(&Point::new(150.0, 150.0), 1e-3));

        let white_center = tree.convert_to_root(white, &Point::new(25.0, 25.0));
        assert!(white_center.close_to(&red_center, 1e-3));
    }

    #[test]
    fn frame_in_root_grows_under_rotation() {
        let (tree, red, _, _) = nested();
        let frame = tree.frame_in_root(red);
        assert!(frame.width() > 200.0);
        assert!(frame.midpoint().close_to(&Point::new(150.0, 150.0), 1e-3));
    }

    #[test]
    fn re_adding_moves_to_front() {
        let mut tree = ViewTree::new(View::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let root = tree.root();
        let a = tree.add_view(root, View::new(Rect::new(0.0, 0.0, 1.0, 1.0)));
        let b = tree.add_view(root, View::new(Rect::new(0.0, 0.0, 2.0, 2.0)));
        assert_eq!(tree.view(root).children(), &[a, b]);

        tree.add_subview(root, a);
        assert_eq!(tree.view(root).children(), &[b, a]);

        tree.remove_from_superview(b);
        assert_eq!(tree.view(root).children(), &[a]);
        assert_eq!(tree.view(b).parent(), None);
    }

    #[test]
    fn ancestry_follows_parents() {
        let (tree, red, green, white) = nested();
        assert!(tree.is_ancestor_or_self(red, white));
        assert!(tree.is_ancestor_or_self(tree.root(), green));
        assert!(tree.is_ancestor_or_self(green, green));
        assert!(!tree.is_ancestor_or_self(white, red));
    }

    #[test]
    #[should_panic(expected = "own subviews")]
    fn cannot_add_an_ancestor_below_its_descendant() {
        let mut tree = ViewTree::new(View::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let root = tree.root();
        let a = tree.add_view(root, View::new(Rect::new(0.0, 0.0, 5.0, 5.0)));
        let b = tree.add_view(a, View::new(Rect::new(0.0, 0.0, 2.0, 2.0)));
        tree.add_subview(b, a);
    }

    #[test]
    #[should_panic(expected = "own subviews")]
    fn cannot_add_a_view_to_itself() {
        let mut tree = ViewTree::new(View::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let a = tree.insert(View::new(Rect::new(0.0, 0.0, 5.0, 5.0)));
        tree.add_subview(a, a);
    }

    #[test]
    #[should_panic(expected = "another tree")]
    fn foreign_ids_are_rejected() {
        let mut big = ViewTree::new(View::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let root = big.root();
        big.add_view(root, View::new(Rect::new(0.0, 0.0, 1.0, 1.0)));
        let foreign = big.add_view(root, View::new(Rect::new(0.0, 0.0, 2.0, 2.0)));

        let mut small = ViewTree::new(View::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
        let small_root = small.root();
        small.add_subview(small_root, foreign);
    }

    #[test]
    fn renders_depth_first() {
        let (tree, _, _, _) = nested();
        let mut recorder = Recorder { events: vec![] };
        tree.render_all(&mut recorder);
        assert_eq!(recorder.events, vec![
            "begin 400", "begin 200", "begin 180", "begin 50",
            "end 50", "end 180", "end 200", "end 400",
        ]);
    }
}
