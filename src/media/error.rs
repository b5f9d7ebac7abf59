/// Errors raised by the media constraint core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MediaError {
    /// The requested ladder maximum does not exceed the fixed 512px anchor.
    #[error("ladder maximum {max} must be greater than the {anchor}px anchor")]
    LadderBelowAnchor { max: u32, anchor: u32 },

    /// A quality preference string or code did not name a known preference.
    #[error("unknown sent media quality: {0}")]
    UnknownQuality(String),
}
