pub mod config;
pub mod error;
pub mod feature_flags;
pub mod prediction;

pub use config::*;
pub use error::*;
pub use feature_flags::*;
pub use prediction::*;
