pub mod client;

pub use client::StorageClient;
pub use crate::errors::StorageError;
