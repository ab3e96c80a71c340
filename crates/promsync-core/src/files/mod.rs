pub mod errors;
pub mod operations;

pub use errors::FileError;
pub use operations::{write_config_file, write_config_file_async};
