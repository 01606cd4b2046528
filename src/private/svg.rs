use super::{Color, Matrix, OutputDevice, ShapeLayer, Stroke, View, ViewTree};
use crate::error::Result;
use std::fmt::Write as _;

pub struct SvgWriter {
    buffer: String,
    clip_ids: usize,
    width: f32,
    height: f32,
}

impl SvgWriter {
    pub fn new() -> SvgWriter {
        SvgWriter {
            buffer: String::new(),
            clip_ids: 0,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Renders a whole tree into a fresh document.
    pub fn render(tree: &ViewTree) -> SvgWriter {
        flame::start("render svg");
        let mut writer = SvgWriter::new();
        tree.render_all(&mut writer);
        flame::end("render svg");
        writer
    }

    pub fn into_string(self) -> String {
        let mut s = String::from(r#"<?xml version="1.0" standalone="no"?>"#);
        s.push('\n');
        s.push_str(&format!(
            r#"<svg width="{0}" height="{1}" viewBox="0 0 {0} {1}" version="1.1" xmlns="http://www.w3.org/2000/svg">"#,
            self.width, self.height));
        s.push_str(&self.buffer);
        s.push_str("\n</svg>\n");
        s
    }

    pub fn write_out(self, path: &str) -> Result<()> {
        let document = self.into_string();
        std::fs::write(path, document.as_bytes())?;
        tracing::info!(path, bytes = document.len(), "wrote svg");
        Ok(())
    }

    fn rect_element(&mut self, view: &View, fill: Option<Color>, stroke: Option<Stroke>) {
        let bounds = view.bounds();
        let _ = write!(self.buffer, "\n<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\"",
                       bounds.width(), bounds.height());
        if view.corner_radius > 0.0 {
            let _ = write!(self.buffer, " rx=\"{}\"", view.corner_radius);
        }
        self.paint(fill, stroke);
        self.buffer.push_str("/>");
    }

    fn paint(&mut self, fill: Option<Color>, stroke: Option<Stroke>) {
        match fill {
            Some(c) => {
                let _ = write!(self.buffer, " fill=\"{}\"", c);
                if !c.is_opaque() {
                    let _ = write!(self.buffer, " fill-opacity=\"{}\"", c.opacity());
                }
            }
            None => self.buffer.push_str(" fill=\"none\""),
        }
        if let Some(Stroke { width, color: c }) = stroke {
            let _ = write!(self.buffer, " stroke=\"{}\" stroke-width=\"{}\"", c, width);
            if !c.is_opaque() {
                let _ = write!(self.buffer, " stroke-opacity=\"{}\"", c.opacity());
            }
        }
    }
}

impl Default for SvgWriter {
    fn default() -> SvgWriter {
        SvgWriter::new()
    }
}

impl OutputDevice for SvgWriter {
    fn begin_view(&mut self, view: &View, parent_from_local: &Matrix) {
        let [a, b, c, d, e, f] = parent_from_local.coefficients();
        let _ = write!(self.buffer, "\n<g transform=\"matrix({} {} {} {} {} {})\">", a, b, c, d, e, f);

        if view.clips_to_bounds {
            self.clip_ids += 1;
            let id = self.clip_ids;
            let bounds = view.bounds();
            let _ = write!(self.buffer, "\n<clipPath id=\"clip{}\"><rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" rx=\"{}\"/></clipPath>",
                           id, bounds.width(), bounds.height(), view.corner_radius);
            let _ = write!(self.buffer, "\n<g clip-path=\"url(#clip{})\">", id);
        }

        if let Some(background) = view.background {
            self.rect_element(view, Some(background), None);
        }
    }

    fn draw_layer(&mut self, layer: &ShapeLayer) {
        if layer.path.is_empty() {
            return;
        }
        let _ = write!(self.buffer, "\n<path d=\"{}\"", layer.path.svg_data());
        self.paint(layer.fill, layer.stroke);
        self.buffer.push_str("/>");
    }

    fn end_view(&mut self, view: &View) {
        if view.clips_to_bounds {
            self.buffer.push_str("\n</g>");
        }
        // Borders sit on top of the content and are never clipped.
        if let Some(border) = view.border {
            self.rect_element(view, None, Some(border));
        }
        self.buffer.push_str("\n</g>");
    }

    fn set_size(&mut self, w: f32, h: f32) {
        self.width = w;
        self.height = h;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::private::{Rect, ShapeKind, ShapeSpec};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tree() -> ViewTree {
        let mut rng = StdRng::seed_from_u64(7);
        let spec = ShapeSpec::new(ShapeKind::Circle, Rect::new(0.0, 0.0, 20.0, 20.0).size(), Color::RED).unwrap();
        let mut tree = ViewTree::new(View::new(Rect::new(0.0, 0.0, 100.0, 80.0)).with_background(Color::WHITE));
        let root = tree.root();
        tree.add_view(root, View::new(Rect::new(10.0, 10.0, 20.0, 20.0))
            .clipped()
            .with_corner_radius(4.0)
            .with_border(2.0, Color::BLACK)
            .with_layer(ShapeLayer::new(spec, &mut rng)));
        tree
    }

    #[test]
    fn document_has_size_and_balanced_groups() {
        let svg = SvgWriter::render(&tree()).into_string();
        assert!(svg.contains(r#"<svg width="100" height="80""#));
        assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn one_path_per_layer_and_a_clip_per_clipping_view() {
        let svg = SvgWriter::render(&tree()).into_string();
        assert_eq!(svg.matches("<path ").count(), 1);
        assert_eq!(svg.matches("<clipPath ").count(), 1);
        assert!(svg.contains(r##"clip-path="url(#clip1)""##));
        assert!(svg.contains(r##"fill="#ff0000""##));
    }

    #[test]
    fn border_is_drawn_outside_the_clip() {
        let svg = SvgWriter::render(&tree()).into_string();
        let clip_end = svg.rfind("</g>\n<rect").expect("border after clip group");
        assert!(svg[clip_end..].contains(r##"stroke="#000000" stroke-width="2""##));
    }

    #[test]
    fn translation_shows_up_in_the_group_transform() {
        let svg = SvgWriter::render(&tree()).into_string();
        assert!(svg.contains(r#"transform="matrix(1 0 0 1 10 10)""#));
    }
}
