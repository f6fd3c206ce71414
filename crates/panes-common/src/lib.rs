pub mod errors;
pub mod types;

pub use errors::{ConfigError, GridError, InputError, PanesError};
pub use types::{Coord, Direction, Size};

pub type Result<T> = std::result::Result<T, PanesError>;
