use super::{Matrix, ShapeLayer, View};

/// Receives a view tree in painter's order.
///
/// `begin_view` is called with the transform from the view's local space to
/// its parent's space. Every `begin_view` is matched by an `end_view` once
/// the view's layers and subviews have been emitted.
pub trait OutputDevice {
    fn begin_view(&mut self, view: &View, parent_from_local: &Matrix);
    fn draw_layer(&mut self, layer: &ShapeLayer);
    fn end_view(&mut self, view: &View);
    fn set_size(&mut self, _w: f32, _h: f32) { }
}
