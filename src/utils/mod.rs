mod colors;
pub use colors::*;

mod element;
pub use element::*;

mod pixels;
pub use pixels::*;

mod transitions;
pub use transitions::*;
