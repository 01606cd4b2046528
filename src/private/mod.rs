pub mod geom;
pub mod color;
pub mod path;
pub mod shape;
pub mod view;
pub mod card;
pub mod style;
pub mod svg;
pub mod output_device;

pub use self::geom::*;
pub use self::color::*;
pub use self::path::*;
pub use self::shape::*;
pub use self::view::*;
pub use self::card::*;
pub use self::style::*;
pub use self::svg::*;
pub use self::output_device::*;
