//! The fixed media quality tier table.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ladder::build_ladder;
use super::{MediaSignals, TranscodingPreset, MB};

// ============================================================================
// Types
// ============================================================================

/// Named media quality tier.
///
/// Variant order matches the row order of the tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaTier {
    /// Conservative limits for memory-constrained devices.
    #[serde(rename = "level_1_low_memory")]
    Level1LowMemory,
    #[serde(rename = "level_1")]
    Level1,
    #[serde(rename = "level_2")]
    Level2,
    #[serde(rename = "level_3")]
    Level3,
    /// Level 3 limits with HEVC video.
    #[serde(rename = "level_3_h265")]
    Level3H265,
}

/// Constant limits carried by one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierRecord {
    pub tier: MediaTier,
    /// Tier only applies on memory-constrained devices.
    pub is_low_memory: bool,
    /// Ordinal within the memory class; unique only together with
    /// `is_low_memory`.
    pub level: u32,
    pub max_image_file_size: u64,
    /// Maximum the dimension ladder was generated from.
    pub ladder_max: u32,
    /// Strictly descending square pixel bounds.
    pub image_size_targets: Vec<u32>,
    /// Image compression quality, 0..=100.
    pub quality_setting: u8,
    pub video_preset: TranscodingPreset,
}

impl TierRecord {
    fn new(
        tier: MediaTier,
        is_low_memory: bool,
        level: u32,
        max_image_file_size: u64,
        ladder_max: u32,
        quality_setting: u8,
        video_preset: TranscodingPreset,
    ) -> Self {
        Self {
            tier,
            is_low_memory,
            level,
            max_image_file_size,
            ladder_max,
            image_size_targets: build_ladder(ladder_max),
            quality_setting,
            video_preset,
        }
    }
}

static TIER_TABLE: Lazy<[TierRecord; 5]> = Lazy::new(|| {
    use MediaTier::*;
    use TranscodingPreset as P;

    [
        TierRecord::new(Level1LowMemory, true, 1, 5 * MB, 3000, 75, P::Level1),
        TierRecord::new(Level1, false, 1, 10 * MB, 6000, 75, P::Level1),
        TierRecord::new(Level2, false, 2, 15 * MB, 9000, 75, P::Level2),
        TierRecord::new(Level3, false, 3, 20 * MB, 12000, 100, P::Level3),
        TierRecord::new(Level3H265, false, 4, 20 * MB, 12000, 100, P::Level3H265),
    ]
});

/// Every tier record, in table order.
pub fn tier_table() -> &'static [TierRecord] {
    TIER_TABLE.as_slice()
}

// ============================================================================
// Lookups
// ============================================================================

impl MediaTier {
    pub const ALL: [MediaTier; 5] = [
        MediaTier::Level1LowMemory,
        MediaTier::Level1,
        MediaTier::Level2,
        MediaTier::Level3,
        MediaTier::Level3H265,
    ];

    /// The constant record for this tier.
    pub fn record(self) -> &'static TierRecord {
        &TIER_TABLE[self as usize]
    }

    pub fn is_low_memory(self) -> bool {
        self.record().is_low_memory
    }

    pub fn level(self) -> u32 {
        self.record().level
    }

    pub fn max_image_file_size(self) -> u64 {
        self.record().max_image_file_size
    }

    pub fn image_size_targets(self) -> &'static [u32] {
        &self.record().image_size_targets
    }

    pub fn quality_setting(self) -> u8 {
        self.record().quality_setting
    }

    pub fn video_preset(self) -> TranscodingPreset {
        self.record().video_preset
    }

    /// First tier whose level and memory class both match.
    pub fn by_level(level: u32, is_low_memory: bool) -> Option<MediaTier> {
        tier_table()
            .iter()
            .find(|r| r.level == level && r.is_low_memory == is_low_memory)
            .map(|r| r.tier)
    }

    /// Look up a level within the device's current memory class.
    pub fn for_level<S: MediaSignals + ?Sized>(level: u32, signals: &S) -> Option<MediaTier> {
        Self::by_level(level, signals.is_low_memory_device())
    }

    /// Tier used when nothing else picks one.
    pub fn default_tier(is_low_memory: bool) -> MediaTier {
        if is_low_memory {
            MediaTier::Level1LowMemory
        } else {
            MediaTier::Level3H265
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Level1LowMemory => "level_1_low_memory",
            Self::Level1 => "level_1",
            Self::Level2 => "level_2",
            Self::Level3 => "level_3",
            Self::Level3H265 => "level_3_h265",
        }
    }
}

impl std::fmt::Display for MediaTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a remotely configured quality level to a tier.
///
/// Unknown levels resolve to `None` so the caller falls back to its default.
pub fn resolve_quality_level(level: u32, is_low_memory: bool) -> Option<MediaTier> {
    let tier = MediaTier::by_level(level, is_low_memory);
    if tier.is_none() {
        warn!(level, is_low_memory, "Remote media quality level has no matching tier");
    }
    tier
}

// ============================================================================
// Tests
// ============================================================================
