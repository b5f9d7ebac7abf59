//! Tier selection policy.
//!
//! Selection is a priority cascade, first match wins:
//!
//! 1. Low-memory devices always get the low-memory tier.
//! 2. A HIGH quality request gets level 3, with HEVC when the device can
//!    encode it and either the remote flag or the internal override allows it.
//! 3. Otherwise the remote quality level applies, falling back to the
//!    device default.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{MediaSignals, MediaTier, SentMediaQuality};

// ============================================================================
// Types
// ============================================================================

/// Everything the policy looks at, captured at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionInputs {
    pub is_low_memory_device: bool,
    pub quality: Option<SentMediaQuality>,
    pub can_encode_hevc: bool,
    pub hevc_remote_enabled: bool,
    pub hevc_internal_override: bool,
    pub remote_quality_level: Option<MediaTier>,
}

impl SelectionInputs {
    /// Read every signal once.
    pub fn read<S: MediaSignals + ?Sized>(signals: &S, quality: Option<SentMediaQuality>) -> Self {
        Self {
            is_low_memory_device: signals.is_low_memory_device(),
            quality,
            can_encode_hevc: signals.can_encode_hevc(),
            hevc_remote_enabled: signals.hevc_remote_flag_enabled(),
            hevc_internal_override: signals.hevc_internal_override_enabled(),
            remote_quality_level: signals.remote_quality_level_override(),
        }
    }

    fn hevc_allowed(&self) -> bool {
        self.can_encode_hevc && (self.hevc_remote_enabled || self.hevc_internal_override)
    }
}

/// Which rule of the cascade picked the tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionReason {
    /// Device is memory-constrained.
    LowMemory,
    /// HIGH requested and HEVC encoding is allowed.
    HighQualityHevc,
    /// HIGH requested without HEVC.
    HighQuality,
    /// Remote quality level applied.
    RemoteOverride,
    /// Nothing else applied.
    DeviceDefault,
}

/// Result of a tier selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierSelection {
    pub tier: MediaTier,
    pub reason: SelectionReason,
}

// ============================================================================
// Core functions
// ============================================================================

/// Pick a tier from already-captured inputs.
pub fn select_tier(inputs: &SelectionInputs) -> TierSelection {
    let (tier, reason) = if inputs.is_low_memory_device {
        (MediaTier::Level1LowMemory, SelectionReason::LowMemory)
    } else if inputs.quality == Some(SentMediaQuality::High) {
        if inputs.hevc_allowed() {
            (MediaTier::Level3H265, SelectionReason::HighQualityHevc)
        } else {
            (MediaTier::Level3, SelectionReason::HighQuality)
        }
    } else if let Some(tier) = inputs.remote_quality_level {
        (tier, SelectionReason::RemoteOverride)
    } else {
        (
            MediaTier::default_tier(inputs.is_low_memory_device),
            SelectionReason::DeviceDefault,
        )
    };

    debug!(
        tier = %tier,
        reason = ?reason,
        low_memory = inputs.is_low_memory_device,
        quality = ?inputs.quality,
        "Selected media tier"
    );

    TierSelection { tier, reason }
}

/// Read the signals and pick a tier.
pub fn select_tier_from<S: MediaSignals + ?Sized>(
    signals: &S,
    quality: Option<SentMediaQuality>,
) -> TierSelection {
    select_tier(&SelectionInputs::read(signals, quality))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(
        low_memory: bool,
        quality: Option<SentMediaQuality>,
        can_encode_hevc: bool,
        hevc_remote_enabled: bool,
        remote_quality_level: Option<MediaTier>,
    ) -> SelectionInputs {
        SelectionInputs {
            is_low_memory_device: low_memory,
            quality,
            can_encode_hevc,
            hevc_remote_enabled,
            hevc_internal_override: false,
            remote_quality_level,
        }
    }

    const HIGH: Option<SentMediaQuality> = Some(SentMediaQuality::High);

    // ====================================================================
    // Low memory
    // ====================================================================

    #[test]
    fn low_memory_always_wins() {
        let sel = select_tier(&inputs(true, HIGH, true, true, Some(MediaTier::Level3)));
        assert_eq!(sel.tier, MediaTier::Level1LowMemory);
        assert_eq!(sel.reason, SelectionReason::LowMemory);
    }

    #[test]
    fn low_memory_ignores_internal_override() {
        let mut i = inputs(true, HIGH, true, false, None);
        i.hevc_internal_override = true;
        assert_eq!(select_tier(&i).tier, MediaTier::Level1LowMemory);
    }

    // ====================================================================
    // HIGH quality
    // ====================================================================

    #[test]
    fn high_without_hevc_support_falls_back() {
        let sel = select_tier(&inputs(false, HIGH, false, true, None));
        assert_eq!(sel.tier, MediaTier::Level3);
        assert_eq!(sel.reason, SelectionReason::HighQuality);
    }

    #[test]
    fn high_with_hevc_but_no_flag() {
        let sel = select_tier(&inputs(false, HIGH, true, false, None));
        assert_eq!(sel.tier, MediaTier::Level3);
    }

    #[test]
    fn high_with_hevc_and_internal_override() {
        let mut i = inputs(false, HIGH, true, false, None);
        i.hevc_internal_override = true;
        let sel = select_tier(&i);
        assert_eq!(sel.tier, MediaTier::Level3H265);
        assert_eq!(sel.reason, SelectionReason::HighQualityHevc);
    }

    #[test]
    fn high_with_hevc_and_remote_flag() {
        let sel = select_tier(&inputs(false, HIGH, true, true, None));
        assert_eq!(sel.tier, MediaTier::Level3H265);
    }

    #[test]
    fn high_ignores_remote_level() {
        let sel = select_tier(&inputs(false, HIGH, false, false, Some(MediaTier::Level1)));
        assert_eq!(sel.tier, MediaTier::Level3);
    }

    // ====================================================================
    // No preference
    // ====================================================================

    #[test]
    fn remote_level_honored_without_preference() {
        let sel = select_tier(&inputs(false, None, false, false, Some(MediaTier::Level2)));
        assert_eq!(sel.tier, MediaTier::Level2);
        assert_eq!(sel.reason, SelectionReason::RemoteOverride);
    }

    #[test]
    fn standard_preference_behaves_like_none() {
        let standard = Some(SentMediaQuality::Standard);
        let sel = select_tier(&inputs(false, standard, true, true, Some(MediaTier::Level1)));
        assert_eq!(sel.tier, MediaTier::Level1);
    }

    #[test]
    fn default_without_preference_or_remote() {
        let sel = select_tier(&inputs(false, None, false, false, None));
        assert_eq!(sel.tier, MediaTier::Level3H265);
        assert_eq!(sel.reason, SelectionReason::DeviceDefault);
    }

    #[test]
    fn selection_reason_serialization() {
        assert_eq!(
            serde_json::to_string(&SelectionReason::HighQualityHevc).unwrap(),
            "\"high_quality_hevc\""
        );
        assert_eq!(
            serde_json::to_string(&SelectionReason::DeviceDefault).unwrap(),
            "\"device_default\""
        );
    }
}
