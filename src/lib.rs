//! TubeGrab library

pub mod fetcher;
pub mod gui;
pub mod utils;

// Re-export main types for easier use
pub use fetcher::{
    AudioBitrate, FetchRequest, FetchedMedia, MediaFetcher, MediaKind, ResolutionCap, Target,
};
pub use gui::{Message, TubeGrabApp};
pub use utils::{AppSettings, FetchError};
