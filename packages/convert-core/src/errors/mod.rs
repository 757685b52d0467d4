pub mod types;

pub use types::{ConvertError, FetchError, StorageError, TransformError};
