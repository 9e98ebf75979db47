//! Canonical video metadata model and provider adapters.
//!
//! This crate maps heterogeneous provider responses into one normalized
//! record. A URL is first classified into a `(platform, native id)` pair,
//! then dispatched to the matching adapter:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            MetadataProvider trait            │
//! │   fetch(&native_id) -> VideoMetadata         │
//! └──────────────────────────────────────────────┘
//!      △                 △                  △
//!      │                 │                  │
//! ┌────┴──────────┐ ┌────┴─────────┐ ┌──────┴────────┐
//! │YoutubeProvider│ │VimeoProvider │ │DirectProvider │
//! └───────────────┘ └──────────────┘ └───────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use metadata::{classify, Platform};
//!
//! let video_ref = classify("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
//! assert_eq!(video_ref.platform, Platform::Youtube);
//! assert_eq!(video_ref.id, "dQw4w9WgXcQ");
//! ```

mod adapters;
mod classify;
mod duration;
mod error;
mod models;
mod provider;
mod sanitize;

pub use adapters::{DirectProvider, VimeoProvider, YoutubeProvider};
pub use classify::classify;
pub use duration::{format_duration, parse_iso8601_duration, UNKNOWN_DURATION};
pub use error::ProviderError;
pub use models::{Platform, VideoMetadata, VideoRef};
pub use provider::MetadataProvider;
pub use sanitize::{sanitize_text, MAX_TEXT_LENGTH};
