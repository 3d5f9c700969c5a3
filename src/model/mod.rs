pub mod expression;
pub mod fluorochrome;
pub mod marker;
pub mod panel;

pub use expression::ExpressionLevel;
pub use fluorochrome::Fluorochrome;
pub use marker::{AnnotatedMarker, RawMarker};
pub use panel::{Panel, PanelEntry};
