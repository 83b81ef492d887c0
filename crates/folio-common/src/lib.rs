pub mod errors;

pub use errors::{ConfigError, FolioError};

pub type Result<T> = std::result::Result<T, FolioError>;
