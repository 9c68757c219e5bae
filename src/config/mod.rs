//! Runtime configuration: environment-backed settings plus the fixed
//! constants the service is wired with.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
