//! Theme system providing colors, typography, and layout dimensions.
//!
//! The schema lives in `gpui_mosaic_theme`; this module adds the semantic
//! tokens resolved against it and the gpui globals that carry it.

pub use gpui_mosaic_theme::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod scopes;
pub use scopes::*;
