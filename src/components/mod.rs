mod button;
pub use button::*;

mod checkbox;
pub use checkbox::*;

mod chip;
pub use chip::*;

mod dialog;
pub use dialog::*;

mod input;
pub use input::*;

mod overlay;
pub use overlay::*;

mod skeleton;
pub use skeleton::*;

mod spinner;
pub use spinner::*;

mod toggle;
pub use toggle::*;

pub mod segmented;
pub mod select;
pub mod toast;
