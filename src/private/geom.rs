use std::ops::{Add, Sub, Mul};
use vecmath::{col_mat3_mul, col_mat3_transform_pos2, mat3_id};

#[derive(PartialOrd, PartialEq, Copy, Clone, Debug)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(PartialOrd, PartialEq, Copy, Clone, Debug)]
pub struct Vector {
    pub x: f32,
    pub y: f32
}

/// Width and height of a box anchored at some origin.
///
/// Sizes handed to the shape generator are validated there; a `Size` by
/// itself may hold anything.
#[derive(PartialOrd, PartialEq, Copy, Clone, Debug)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

#[derive(PartialOrd, PartialEq, Copy, Clone, Debug)]
pub struct Rect
{
    pub top_left: Point,
    pub bottom_right: Point
}

/// A 2d affine transform stored as a column-major 3x3 matrix.
#[derive(PartialOrd, PartialEq, Copy, Clone, Debug)]
pub struct Matrix {
    m: [[f32; 3]; 3]
}

impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, rhs: Vector) -> Point {
        Point {
            x: self.x - rhs.x,
            y: self.y - rhs.y
        }
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        Point {
            x: self.x + rhs.x,
            y: self.y + rhs.y
        }
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f32) -> Vector {
        Vector {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl Size {
    pub fn new(width: f32, height: f32) -> Size {
        Size { width, height }
    }

    /// The shorter of the two edges.
    pub fn min_edge(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() &&
        self.width >= 0.0 && self.height >= 0.0
    }

    pub fn as_vector(&self) -> Vector {
        Vector { x: self.width, y: self.height }
    }
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect::from_point_and_size(&Point { x, y }, &Size::new(width, height))
    }

    pub fn from_points(p1: &Point, p2: &Point) -> Rect {
        let mut r = Rect::null_at(p1);
        r.expand_to_include(p2);
        r
    }

    pub fn from_point_and_size(point: &Point, size: &Size) -> Rect {
        Rect {
            top_left: *point,
            bottom_right: *point + size.as_vector()
        }
    }

    pub fn null_at(point: &Point) -> Rect {
        Rect {
            top_left: *point,
            bottom_right: *point,
        }
    }

    pub fn inset(&self, by: f32) -> Rect {
        let v = Vector { x: by, y: by };
        Rect {
            top_left: self.top_left + v,
            bottom_right: self.bottom_right - v,
        }
    }

    pub fn width(&self) -> f32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f32 {
        self.bottom_right.y - self.top_left.y
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// The same rectangle moved to the origin, i.e. the local coordinate
    /// space of a view with this frame.
    pub fn bounds(&self) -> Rect {
        Rect::from_point_and_size(&Point::origin(), &self.size())
    }

    pub fn origin(&self) -> Point {
        self.top_left
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    pub fn bottom_left(&self) -> Point {
        Point {
            x: self.top_left().x,
            y: self.bottom_right().y
        }
    }

    pub fn top_right(&self) -> Point {
        Point {
            x: self.bottom_right().x,
            y: self.top_left().y
        }
    }

    pub fn corners(&self) -> [Point; 4] {
        [self.top_left(), self.top_right(), self.bottom_right(), self.bottom_left()]
    }

    pub fn expand_to_include(&mut self, point: &Point) {
        if point.x < self.top_left.x {
            self.top_left.x = point.x;
        }
        if point.y < self.top_left.y {
            self.top_left.y = point.y;
        }

        if point.x > self.bottom_right.x {
            self.bottom_right.x = point.x;
        }
        if point.y > self.bottom_right.y {
            self.bottom_right.y = point.y;
        }
    }

    pub fn union_with(&self, other: &Rect) -> Rect {
        let mut r = *self;
        r.expand_to_include(&other.top_left);
        r.expand_to_include(&other.bottom_right);
        r
    }

    pub fn contains(&self, p: &Point) -> bool {
        p.x >= self.top_left.x &&
        p.x <= self.bottom_right.x &&
        p.y >= self.top_left.y &&
        p.y <= self.bottom_right.y
    }

    /// True if `other` lies entirely inside this rectangle, allowing `epsilon`
    /// of slack on every edge.
    pub fn contains_rect(&self, other: &Rect, epsilon: f32) -> bool {
        self.inset(-epsilon).contains(&other.top_left) &&
        self.inset(-epsilon).contains(&other.bottom_right)
    }

    pub fn midpoint(&self) -> Point {
        let half = Vector { x: self.width() / 2.0, y: self.height() / 2.0 };
        self.top_left() + half
    }

    /// Moves the rectangle so that its midpoint lands on `center`.
    pub fn centered_on(&self, center: &Point) -> Rect {
        let half = Vector { x: self.width() / 2.0, y: self.height() / 2.0 };
        Rect::from_point_and_size(&(*center - half), &self.size())
    }

    pub fn close_to(&self, other: &Rect, epsilon: f32) -> bool {
        self.top_left.close_to(&other.top_left, epsilon) &&
        self.bottom_right.close_to(&other.bottom_right, epsilon)
    }
}

impl Matrix {
    pub fn new() -> Matrix {
        Matrix { m: mat3_id() }
    }

    pub fn transform_point(&self, point: &Point) -> Point {
        let p = [point.x, point.y];
        let p = col_mat3_transform_pos2(self.m, p);
        Point { x: p[0], y: p[1] }
    }

    /// The axis-aligned box around the four transformed corners of `rect`.
    pub fn transform_rect(&self, rect: &Rect) -> Rect {
        let [a, b, c, d] = rect.corners();
        let mut out = Rect::null_at(&self.transform_point(&a));
        out.expand_to_include(&self.transform_point(&b));
        out.expand_to_include(&self.transform_point(&c));
        out.expand_to_include(&self.transform_point(&d));
        out
    }

    pub fn apply_matrix(mut self, matrix: [[f32; 3]; 3]) -> Self {
        {
            let current = &mut self.m;
            *current = col_mat3_mul(*current, matrix);
        }
        self
    }

    /// `self` applied after `other`.
    pub fn then(self, other: &Matrix) -> Self {
        self.apply_matrix(other.m)
    }

    pub fn translate(self, dx: f32, dy: f32) -> Self {
        let mut prod = mat3_id();
        prod[2][0] = dx;
        prod[2][1] = dy;
        self.apply_matrix(prod)
    }

    /// Applies a scaling transformation to the matrix.
    pub fn scale(self, sx: f32, sy: f32) -> Self {
        let mut prod = mat3_id();
        prod[0][0] = sx;
        prod[1][1] = sy;
        self.apply_matrix(prod)
    }

    /// Applies a rotation transformation to the matrix.
    ///
    /// With y pointing down, positive angles turn clockwise on screen.
    pub fn rotate(self, theta: f32) -> Self {
        let mut prod = mat3_id();
        let (c, s) = (theta.cos(), theta.sin());
        prod[0][0] = c;
        prod[0][1] = s;
        prod[1][0] = -s;
        prod[1][1] = c;
        self.apply_matrix(prod)
    }

    /// Conjugates the matrix so it acts about `pivot` instead of the origin.
    pub fn about(self, pivot: &Point) -> Self {
        Matrix::new()
            .translate(pivot.x, pivot.y)
            .then(&self)
            .translate(-pivot.x, -pivot.y)
    }

    /// The `a b c d e f` coefficients used by SVG and most 2d canvases.
    pub fn coefficients(&self) -> [f32; 6] {
        [self.m[0][0], self.m[0][1],
         self.m[1][0], self.m[1][1],
         self.m[2][0], self.m[2][1]]
    }
}

impl Default for Matrix {
    fn default() -> Matrix {
        Matrix::new()
    }
}

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    pub fn origin() -> Point {
        Point { x: 0.0, y: 0.0 }
    }

    pub fn close_to(&self, other: &Point, epsilon: f32) -> bool {
        self.distance_2(other) < epsilon * epsilon
    }

    pub fn distance_2(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}
