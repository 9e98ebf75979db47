mod client;
mod error;
pub mod models;

pub use client::YoutubeClient;
pub use error::YoutubeError;

pub type Result<T> = std::result::Result<T, YoutubeError>;
