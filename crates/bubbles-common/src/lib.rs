pub mod errors;
pub mod types;

pub use errors::{BubblesError, ConfigError};
pub use types::{BubbleId, ContainerSize};

pub type Result<T> = std::result::Result<T, BubblesError>;
