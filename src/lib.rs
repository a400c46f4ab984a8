//! dumbbell-chart: deterministic dumbbell/slope chart layout.
//!
//! The crate turns `(category, value A, value B)` rows and a viewport into an
//! ordered list of positioned drawing primitives, reflowing category labels
//! with a greedy word wrap. Drawing surfaces plug in through
//! [`render::Renderer`]; text metrics through [`text::TextMeasurer`].

pub mod api;
pub mod core;
pub mod error;
pub mod format;
pub mod render;
pub mod telemetry;
pub mod text;

pub use api::{DataView, DumbbellChart, VisualConfig, layout};
pub use error::{ChartError, ChartResult};
pub use text::wrap_label;
