mod chart;
mod data_view;
mod layout_engine;
mod visual_config;

pub use chart::DumbbellChart;
pub use data_view::{CategoryColumn, DataView, MeasureColumn, coerce_category, coerce_measure};
pub use layout_engine::{LayoutScales, PRIMITIVES_PER_POINT, layout, layout_frame};
pub use visual_config::{Margins, VisualConfig};
