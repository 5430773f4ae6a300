//! Theme schema providing colors, layout dimensions and typography.
//!
//! Themes are plain JSON documents. Parsing validates them, so a `Theme`
//! value is always complete and every semantic token resolves against it.

mod schema;
pub use schema::*;

mod deserializers;

mod error;
pub use error::*;

mod refine;
pub use refine::*;

mod validate;
