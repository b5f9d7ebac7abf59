//! Constraint accessors handed to encoders and upload pipelines.

use serde::Serialize;

use super::{
    select_tier_from, MediaSignals, MediaTier, SelectionReason, SentMediaQuality,
    TierSelection, TranscodingPreset, GIF_MAX_BYTES,
};

/// Limits an attachment must satisfy before it is sent.
pub trait MediaConstraints {
    fn image_max_width(&self) -> u32;
    fn image_max_height(&self) -> u32;
    fn image_max_size(&self) -> u64;
    /// Descending square bounds to try when downscaling.
    fn image_dimension_targets(&self) -> &[u32];
    fn gif_max_size(&self) -> u64;
    fn video_max_size(&self) -> u64;
    /// Largest source video accepted before transcoding.
    fn uncompressed_video_max_size(&self) -> u64;
    fn compressed_video_max_size(&self) -> u64;
    fn audio_max_size(&self) -> u64;
    fn document_max_size(&self) -> u64;
    fn image_compression_quality(&self) -> u8;
    fn video_transcoding_preset(&self) -> TranscodingPreset;
}

/// Tier-driven constraints for media sent over the push transport.
///
/// The tier is chosen once at construction. Ceilings owned by the signals
/// (attachment size, transcode limits) are read on every accessor call.
#[derive(Debug, Clone)]
pub struct PushMediaConstraints<S> {
    signals: S,
    selection: TierSelection,
}

impl<S: MediaSignals> PushMediaConstraints<S> {
    pub fn new(signals: S, quality: Option<SentMediaQuality>) -> Self {
        let selection = select_tier_from(&signals, quality);
        Self { signals, selection }
    }

    pub fn tier(&self) -> MediaTier {
        self.selection.tier
    }

    pub fn selection_reason(&self) -> SelectionReason {
        self.selection.reason
    }

    pub fn signals(&self) -> &S {
        &self.signals
    }

    fn max_attachment_size(&self) -> u64 {
        self.signals.max_attachment_size()
    }

    /// Every accessor value at this instant.
    pub fn snapshot(&self) -> ConstraintsSnapshot {
        ConstraintsSnapshot {
            tier: self.selection.tier,
            reason: self.selection.reason,
            image_max_width: self.image_max_width(),
            image_max_height: self.image_max_height(),
            image_max_size: self.image_max_size(),
            image_dimension_targets: self.image_dimension_targets().to_vec(),
            gif_max_size: self.gif_max_size(),
            video_max_size: self.video_max_size(),
            uncompressed_video_max_size: self.uncompressed_video_max_size(),
            compressed_video_max_size: self.compressed_video_max_size(),
            audio_max_size: self.audio_max_size(),
            document_max_size: self.document_max_size(),
            image_compression_quality: self.image_compression_quality(),
            video_transcoding_preset: self.video_transcoding_preset(),
        }
    }
}

impl<S: MediaSignals> MediaConstraints for PushMediaConstraints<S> {
    fn image_max_width(&self) -> u32 {
        // Ladders always hold at least the max rung and the anchor.
        self.selection.tier.image_size_targets()[0]
    }

    fn image_max_height(&self) -> u32 {
        self.image_max_width()
    }

    fn image_max_size(&self) -> u64 {
        self.selection
            .tier
            .max_image_file_size()
            .min(self.max_attachment_size())
    }

    fn image_dimension_targets(&self) -> &[u32] {
        self.selection.tier.image_size_targets()
    }

    fn gif_max_size(&self) -> u64 {
        GIF_MAX_BYTES.min(self.max_attachment_size())
    }

    fn video_max_size(&self) -> u64 {
        self.max_attachment_size()
    }

    fn uncompressed_video_max_size(&self) -> u64 {
        if self.signals.is_video_transcode_available() {
            self.signals.max_source_transcode_video_size()
        } else {
            self.video_max_size()
        }
    }

    fn compressed_video_max_size(&self) -> u64 {
        self.max_attachment_size()
    }

    fn audio_max_size(&self) -> u64 {
        self.max_attachment_size()
    }

    fn document_max_size(&self) -> u64 {
        self.max_attachment_size()
    }

    fn image_compression_quality(&self) -> u8 {
        self.selection.tier.quality_setting()
    }

    fn video_transcoding_preset(&self) -> TranscodingPreset {
        self.selection.tier.video_preset()
    }
}

/// Serializable view of every constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintsSnapshot {
    pub tier: MediaTier,
    pub reason: SelectionReason,
    pub image_max_width: u32,
    pub image_max_height: u32,
    pub image_max_size: u64,
    pub image_dimension_targets: Vec<u32>,
    pub gif_max_size: u64,
    pub video_max_size: u64,
    pub uncompressed_video_max_size: u64,
    pub compressed_video_max_size: u64,
    pub audio_max_size: u64,
    pub document_max_size: u64,
    pub image_compression_quality: u8,
    pub video_transcoding_preset: TranscodingPreset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{StaticSignals, MB};
    use std::cell::Cell;

    fn signals(max_attachment_size: u64) -> StaticSignals {
        StaticSignals {
            low_memory: false,
            can_encode_hevc: false,
            hevc_remote_enabled: false,
            hevc_internal_override: false,
            remote_quality_level: None,
            max_attachment_size,
            video_transcode_available: true,
            max_source_transcode_video_size: 500 * MB,
        }
    }

    fn level_1(max_attachment_size: u64) -> PushMediaConstraints<StaticSignals> {
        let s = StaticSignals {
            remote_quality_level: Some(1),
            ..signals(max_attachment_size)
        };
        PushMediaConstraints::new(s, None)
    }

    #[test]
    fn image_size_clamped_by_attachment_ceiling() {
        let c = level_1(8 * MB);
        assert_eq!(c.tier(), MediaTier::Level1);
        assert_eq!(c.image_max_size(), 8 * MB);

        let c = level_1(50 * MB);
        assert_eq!(c.image_max_size(), 10 * MB);
    }

    #[test]
    fn image_bounds_are_square_ladder_head() {
        let c = PushMediaConstraints::new(signals(100 * MB), None);
        assert_eq!(c.tier(), MediaTier::Level3H265);
        assert_eq!(c.image_max_width(), 11968);
        assert_eq!(c.image_max_height(), c.image_max_width());
        assert_eq!(c.image_dimension_targets(), MediaTier::Level3H265.image_size_targets());
    }

    #[test]
    fn gif_size_clamped() {
        assert_eq!(level_1(100 * MB).gif_max_size(), 25 * MB);
        assert_eq!(level_1(10 * MB).gif_max_size(), 10 * MB);
    }

    #[test]
    fn pass_through_sizes_use_ceiling() {
        let c = level_1(64 * MB);
        assert_eq!(c.video_max_size(), 64 * MB);
        assert_eq!(c.compressed_video_max_size(), 64 * MB);
        assert_eq!(c.audio_max_size(), 64 * MB);
        assert_eq!(c.document_max_size(), 64 * MB);
    }

    #[test]
    fn uncompressed_video_depends_on_transcoder() {
        let c = PushMediaConstraints::new(signals(100 * MB), None);
        assert_eq!(c.uncompressed_video_max_size(), 500 * MB);

        let no_transcode = StaticSignals {
            video_transcode_available: false,
            ..signals(100 * MB)
        };
        let c = PushMediaConstraints::new(no_transcode, None);
        assert_eq!(c.uncompressed_video_max_size(), 100 * MB);
    }

    #[test]
    fn quality_and_preset_follow_tier() {
        let c = level_1(100 * MB);
        assert_eq!(c.image_compression_quality(), 75);
        assert_eq!(c.video_transcoding_preset(), TranscodingPreset::Level1);

        let high = PushMediaConstraints::new(signals(100 * MB), Some(SentMediaQuality::High));
        assert_eq!(high.tier(), MediaTier::Level3);
        assert_eq!(high.image_compression_quality(), 100);
        assert_eq!(high.video_transcoding_preset(), TranscodingPreset::Level3);
    }

    /// Signals whose attachment ceiling can change after construction.
    struct ShiftingCeiling {
        ceiling: Cell<u64>,
        low_memory: Cell<bool>,
    }

    impl MediaSignals for ShiftingCeiling {
        fn is_low_memory_device(&self) -> bool {
            self.low_memory.get()
        }
        fn can_encode_hevc(&self) -> bool {
            false
        }
        fn hevc_remote_flag_enabled(&self) -> bool {
            false
        }
        fn hevc_internal_override_enabled(&self) -> bool {
            false
        }
        fn remote_quality_level_override(&self) -> Option<MediaTier> {
            None
        }
        fn max_attachment_size(&self) -> u64 {
            self.ceiling.get()
        }
        fn is_video_transcode_available(&self) -> bool {
            false
        }
        fn max_source_transcode_video_size(&self) -> u64 {
            0
        }
    }

    #[test]
    fn tier_is_fixed_but_ceiling_is_live() {
        let s = ShiftingCeiling {
            ceiling: Cell::new(100 * MB),
            low_memory: Cell::new(false),
        };
        let c = PushMediaConstraints::new(&s, None);
        assert_eq!(c.tier(), MediaTier::Level3H265);
        assert_eq!(c.video_max_size(), 100 * MB);

        s.ceiling.set(16 * MB);
        s.low_memory.set(true);
        assert_eq!(c.tier(), MediaTier::Level3H265);
        assert_eq!(c.video_max_size(), 16 * MB);
        assert_eq!(c.image_max_size(), 16 * MB);
    }

    #[test]
    fn snapshot_collects_accessors() {
        let c = level_1(8 * MB);
        let snap = c.snapshot();
        assert_eq!(snap.tier, MediaTier::Level1);
        assert_eq!(snap.reason, SelectionReason::RemoteOverride);
        assert_eq!(snap.image_max_size, 8 * MB);
        assert_eq!(snap.image_max_width, 5952);
        assert_eq!(snap.uncompressed_video_max_size, 500 * MB);

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["tier"], "level_1");
        assert_eq!(json["videoTranscodingPreset"], "level_1");
        assert_eq!(json["imageMaxSize"], 8 * MB);
    }
}
