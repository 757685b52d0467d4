pub mod client;

pub use client::FetchClient;
pub use crate::errors::FetchError;
