pub mod constants;
pub mod errors;
pub mod fetch;
pub mod naming;
pub mod request;
pub mod storage;
pub mod transform;

// 公開API
pub use constants::{DEFAULT_QUALITY, DEFAULT_STORAGE_ENDPOINT, DEFAULT_TARGET_WIDTH, MAX_BODY_SIZE};
pub use errors::{ConvertError, FetchError, StorageError, TransformError};
pub use fetch::FetchClient;
pub use request::ConversionRequest;
pub use storage::StorageClient;
pub use transform::{
    calculate_target_dimensions, decode_image, encode_image, resize_image, OutputFormat,
};
