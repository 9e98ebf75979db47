mod direct_adapter;
mod vimeo_adapter;
mod youtube_adapter;

pub use direct_adapter::DirectProvider;
pub use vimeo_adapter::VimeoProvider;
pub use youtube_adapter::YoutubeProvider;
