mod client;
mod error;
pub mod models;

pub use client::VimeoClient;
pub use error::VimeoError;

pub type Result<T> = std::result::Result<T, VimeoError>;
