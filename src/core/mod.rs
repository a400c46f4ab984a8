pub mod category_scale;
pub mod color_scale;
pub mod types;
pub mod value_scale;

pub use category_scale::CategoryScale;
pub use color_scale::ColorScale;
pub use types::{DataPoint, Viewport};
pub use value_scale::{ValueScale, max_value};
