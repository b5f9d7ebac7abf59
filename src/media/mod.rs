//! Media attachment constraints.
//!
//! A device picks one of a fixed set of quality tiers from its memory class,
//! the sender's quality preference, codec support and remote flags. The
//! chosen tier, clamped against the transport's attachment ceiling, yields
//! every limit the encoders and upload pipeline need.

mod constraints;
mod error;
mod ladder;
mod policy;
mod preset;
mod quality;
mod signals;
mod tier;

pub use constraints::*;
pub use error::*;
pub use ladder::*;
pub use policy::*;
pub use preset::*;
pub use quality::*;
pub use signals::*;
pub use tier::*;

/// One kibibyte.
pub const KB: u64 = 1024;

/// One mebibyte.
pub const MB: u64 = 1024 * KB;

/// Maximum size of an animated image, independent of tier.
pub const GIF_MAX_BYTES: u64 = 25 * MB;
