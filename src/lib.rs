pub mod components;

pub mod style;

pub mod theme;

pub mod utils;

mod init;
pub use init::*;
