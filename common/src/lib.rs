mod config;
mod logging;
mod validation;

pub use config::*;
pub use logging::*;
pub use validation::*;
