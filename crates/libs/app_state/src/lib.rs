#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod raw_settings;
mod settings;
mod load_settings;

pub use raw_settings::*;
pub use settings::*;
pub use load_settings::*;
