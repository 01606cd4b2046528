use super::{Point, Rect, Vector};
use itertools::Itertools;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// A circular arc. Angles are in radians, measured from the positive x axis
/// towards the positive y axis (clockwise on a y-down screen).
#[derive(PartialEq, Copy, Clone, Debug)]
pub struct Arc {
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
    pub clockwise: bool,
}

#[derive(PartialEq, Copy, Clone, Debug)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    /// Draws a straight line from the current point (if any) to the arc's
    /// start, then the arc itself.
    Arc(Arc),
    Close,
}

/// An immutable sequence of drawing instructions.
#[derive(PartialEq, Clone, Debug)]
pub struct Path {
    segments: Vec<Segment>,
}

/// Accumulates segments for a [`Path`].
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    segments: Vec<Segment>,
}

impl Arc {
    pub fn point_at(&self, angle: f32) -> Point {
        self.center + Vector { x: angle.cos(), y: angle.sin() } * self.radius
    }

    pub fn start_point(&self) -> Point {
        self.point_at(self.start_angle)
    }

    pub fn end_point(&self) -> Point {
        self.point_at(self.start_angle + self.sweep())
    }

    /// The signed angle covered by the arc: positive when clockwise, never
    /// more than a full turn in either direction.
    pub fn sweep(&self) -> f32 {
        let raw = self.end_angle - self.start_angle;
        if !raw.is_finite() {
            return 0.0;
        }
        if self.clockwise {
            if raw >= 0.0 { raw.min(TAU) } else { raw.rem_euclid(TAU) }
        } else if raw <= 0.0 {
            raw.max(-TAU)
        } else {
            -(-raw).rem_euclid(TAU)
        }
    }

    pub fn bounding_box(&self) -> Rect {
        let sweep = self.sweep();
        let (lo, hi) = if sweep >= 0.0 {
            (self.start_angle, self.start_angle + sweep)
        } else {
            (self.start_angle + sweep, self.start_angle)
        };

        let mut rect = Rect::from_points(&self.start_point(), &self.end_point());
        // Extremes of a circle sit on the quarter turns; a sweep of at most
        // one turn passes at most five of them.
        let first = (lo / FRAC_PI_2).ceil();
        for step in 0..5 {
            let angle = (first + step as f32) * FRAC_PI_2;
            if angle > hi {
                break;
            }
            rect.expand_to_include(&self.point_at(angle));
        }
        rect
    }

    fn is_finite(&self) -> bool {
        self.center.x.is_finite() && self.center.y.is_finite() && self.radius.is_finite() &&
        self.start_angle.is_finite() && self.end_angle.is_finite()
    }
}

impl PathBuilder {
    pub fn new() -> PathBuilder {
        PathBuilder { segments: Vec::new() }
    }

    pub fn move_to(mut self, p: Point) -> Self {
        self.segments.push(Segment::MoveTo(p));
        self
    }

    pub fn line_to(mut self, p: Point) -> Self {
        self.segments.push(Segment::LineTo(p));
        self
    }

    /// Adds an arc. Arcs with a non-finite centre, radius or angle are
    /// dropped.
    pub fn arc(mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32, clockwise: bool) -> Self {
        let arc = Arc {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        };
        if arc.is_finite() {
            self.segments.push(Segment::Arc(arc));
        }
        self
    }

    /// A closed rectangle starting at its top left corner.
    pub fn rect(self, rect: &Rect) -> Self {
        self.move_to(rect.top_left())
            .line_to(rect.top_right())
            .line_to(rect.bottom_right())
            .line_to(rect.bottom_left())
            .close()
    }

    /// Closes the current subpath. Closing twice in a row is a no-op.
    pub fn close(mut self) -> Self {
        match self.segments.last() {
            None | Some(Segment::Close) => {}
            Some(_) => self.segments.push(Segment::Close),
        }
        self
    }

    pub fn build(self) -> Path {
        Path { segments: self.segments }
    }
}

impl Path {
    pub fn builder() -> PathBuilder {
        PathBuilder::new()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if the path ends by closing its last subpath.
    pub fn is_closed(&self) -> bool {
        self.segments.last() == Some(&Segment::Close)
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        let mut include = |r: Rect| {
            rect = Some(match rect {
                Some(existing) => existing.union_with(&r),
                None => r,
            });
        };

        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(p) | Segment::LineTo(p) => include(Rect::null_at(&p)),
                Segment::Arc(ref arc) => include(arc.bounding_box()),
                Segment::Close => {}
            }
        }
        rect
    }

    /// Renders the path as SVG path data (the `d` attribute).
    pub fn svg_data(&self) -> String {
        let mut current: Option<Point> = None;
        let mut subpath_start: Option<Point> = None;
        let mut commands = vec![];

        for segment in &self.segments {
            match *segment {
                Segment::MoveTo(p) => {
                    commands.push(format!("M{} {}", p.x, p.y));
                    current = Some(p);
                    subpath_start = Some(p);
                }
                Segment::LineTo(p) => {
                    if current.is_none() {
                        commands.push(format!("M{} {}", p.x, p.y));
                        subpath_start = Some(p);
                    } else {
                        commands.push(format!("L{} {}", p.x, p.y));
                    }
                    current = Some(p);
                }
                Segment::Arc(ref arc) => {
                    let start = arc.start_point();
                    if current.is_none() {
                        commands.push(format!("M{} {}", start.x, start.y));
                        subpath_start = Some(start);
                    } else {
                        commands.push(format!("L{} {}", start.x, start.y));
                    }

                    // Elliptical arc commands are ambiguous past half a turn.
                    let sweep = arc.sweep();
                    let pieces = (sweep.abs() / PI).ceil().max(1.0) as usize;
                    let step = sweep / pieces as f32;
                    let flag = if sweep >= 0.0 { 1 } else { 0 };
                    for i in 1..=pieces {
                        let p = arc.point_at(arc.start_angle + step * i as f32);
                        commands.push(format!("A{r} {r} 0 0 {} {} {}", flag, p.x, p.y, r = arc.radius));
                    }
                    current = Some(arc.end_point());
                }
                Segment::Close => {
                    commands.push("Z".to_string());
                    current = subpath_start;
                }
            }
        }

        commands.iter().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle(radius: f32) -> Arc {
        Arc {
            center: Point::new(50.0, 75.0),
            radius,
            start_angle: 0.0,
            end_angle: TAU,
            clockwise: true,
        }
    }

    #[test]
    fn full_circle_sweeps_one_turn() {
        assert!((circle(50.0).sweep() - TAU).abs() < 1e-6);
    }

    #[test]
    fn counter_clockwise_sweep_is_negative() {
        let arc = Arc { clockwise: false, end_angle: FRAC_PI_2, ..circle(10.0) };
        assert!((arc.sweep() + 3.0 * FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn circle_bounding_box_touches_all_four_sides() {
        let bb = circle(50.0).bounding_box();
        assert!(bb.close_to(&Rect::new(0.0, 25.0, 100.0, 100.0), 1e-3));
    }

    #[test]
    fn partial_arc_bounding_box() {
        // From a fifth of a turn down to the left-most point: passes the
        // bottom of the circle only.
        let arc = Arc {
            center: Point::new(200.0, 200.0),
            radius: 150.0,
            start_angle: PI / 5.0,
            end_angle: PI,
            clockwise: true,
        };
        let bb = arc.bounding_box();
        assert!((bb.top_left.x - 50.0).abs() < 1e-3);
        assert!((bb.bottom_right.y - 350.0).abs() < 1e-3);
        assert!((bb.top_left.y - 200.0).abs() < 1e-3);
        assert!((bb.bottom_right.x - arc.start_point().x).abs() < 1e-3);
    }

    #[test]
    fn closing_twice_adds_one_segment() {
        let path = Path::builder().rect(&Rect::new(0.0, 0.0, 10.0, 10.0)).close().build();
        assert_eq!(path.segments().len(), 5);
        assert!(path.is_closed());
    }

    #[test]
    fn open_path_is_not_closed() {
        let path = Path::builder()
            .move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(3.0, 4.0))
            .build();
        assert!(!path.is_closed());
        assert_eq!(path.svg_data(), "M0 0 L3 4");
    }

    #[test]
    fn full_circle_becomes_two_half_arcs() {
        let path = Path::builder().arc(Point::new(10.0, 10.0), 5.0, 0.0, TAU, true).build();
        let data = path.svg_data();
        assert!(data.starts_with("M15 10 "));
        assert_eq!(data.matches('A').count(), 2);
    }

    #[test]
    fn huge_start_angle_still_bounds() {
        let arc = Arc { start_angle: 1.0e10, end_angle: 0.0, ..circle(5.0) };
        assert!(arc.sweep() >= 0.0 && arc.sweep() <= TAU);

        let path = Path::builder().arc(Point::origin(), 5.0, 1.0e10, 0.0, true).build();
        let bb = path.bounding_box().unwrap();
        assert!(Rect::new(-5.0, -5.0, 10.0, 10.0).contains_rect(&bb, 1e-3));
        assert!(path.svg_data().matches('A').count() <= 2);
    }

    #[test]
    fn non_finite_arcs_are_dropped() {
        let path = Path::builder()
            .move_to(Point::origin())
            .arc(Point::origin(), 5.0, f32::INFINITY, 0.0, true)
            .arc(Point::origin(), f32::NAN, 0.0, TAU, true)
            .build();
        assert_eq!(path.segments().len(), 1);
        assert_eq!(path.svg_data(), "M0 0");
    }

    #[test]
    fn negative_clockwise_sweep_wraps_once() {
        let arc = Arc { start_angle: PI, end_angle: 0.0, ..circle(10.0) };
        assert!((arc.sweep() - PI).abs() < 1e-5);
        let arc = Arc { start_angle: 0.0, end_angle: TAU, clockwise: false, ..circle(10.0) };
        assert_eq!(arc.sweep(), 0.0);
    }

    #[test]
    fn empty_path_has_no_bounds() {
        assert_eq!(Path::builder().close().build().bounding_box(), None);
    }
}
