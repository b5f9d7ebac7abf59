use serde::{Deserialize, Serialize};

/// Video transcoding profile handed to the external video encoder.
///
/// The profile's internals (bitrates, resolutions, codec parameters) belong to
/// the encoder; this crate only decides which one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TranscodingPreset {
    #[serde(rename = "level_1")]
    Level1,
    #[serde(rename = "level_2")]
    Level2,
    #[serde(rename = "level_3")]
    Level3,
    #[serde(rename = "level_3_h265")]
    Level3H265,
}

impl TranscodingPreset {
    /// Whether this preset targets the HEVC (H.265) encoder.
    pub fn is_hevc(self) -> bool {
        matches!(self, Self::Level3H265)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Level1 => "level_1",
            Self::Level2 => "level_2",
            Self::Level3 => "level_3",
            Self::Level3H265 => "level_3_h265",
        }
    }
}

impl std::fmt::Display for TranscodingPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
