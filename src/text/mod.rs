//! Label wrapping and the text-measurement capability it depends on.

mod measure;
mod wrap;

pub use measure::{MonospaceMeasurer, TextMeasurer};
pub use wrap::{wrap_label, wrap_labels, wrap_text_primitive};
