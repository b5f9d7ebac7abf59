//! External signals the constraint core reads.
//!
//! Memory class, codec capability, remote flags and transport ceilings are
//! owned by the host application. The core only reads them through
//! [`MediaSignals`], so selection stays a pure function of explicit inputs.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{resolve_quality_level, MediaTier, MB};

/// Default transport-wide attachment ceiling (100 MB).
pub const DEFAULT_MAX_ATTACHMENT_SIZE: u64 = 100 * MB;

/// Default largest source video accepted for transcoding (500 MB).
pub const DEFAULT_MAX_SOURCE_TRANSCODE_VIDEO_SIZE: u64 = 500 * MB;

/// Video transcoding is assumed available unless configured otherwise.
pub const DEFAULT_VIDEO_TRANSCODE_AVAILABLE: bool = true;

/// Read-only view of the device and remote state that drives tier
/// selection and attachment ceilings.
pub trait MediaSignals {
    /// Device is classified as memory-constrained by the host platform.
    fn is_low_memory_device(&self) -> bool;

    /// Device has a hardware or software HEVC encoder.
    fn can_encode_hevc(&self) -> bool;

    /// Remote flag enabling the HEVC encoder.
    fn hevc_remote_flag_enabled(&self) -> bool;

    /// Local internal-settings override enabling the HEVC encoder.
    fn hevc_internal_override_enabled(&self) -> bool;

    /// Remotely configured quality tier, if any.
    fn remote_quality_level_override(&self) -> Option<MediaTier>;

    /// Transport-wide attachment ceiling in bytes.
    fn max_attachment_size(&self) -> u64;

    /// Video transcoding is available on this device.
    fn is_video_transcode_available(&self) -> bool;

    /// Largest source video accepted for transcoding, in bytes.
    fn max_source_transcode_video_size(&self) -> u64;
}

impl<T: MediaSignals + ?Sized> MediaSignals for &T {
    fn is_low_memory_device(&self) -> bool {
        (**self).is_low_memory_device()
    }

    fn can_encode_hevc(&self) -> bool {
        (**self).can_encode_hevc()
    }

    fn hevc_remote_flag_enabled(&self) -> bool {
        (**self).hevc_remote_flag_enabled()
    }

    fn hevc_internal_override_enabled(&self) -> bool {
        (**self).hevc_internal_override_enabled()
    }

    fn remote_quality_level_override(&self) -> Option<MediaTier> {
        (**self).remote_quality_level_override()
    }

    fn max_attachment_size(&self) -> u64 {
        (**self).max_attachment_size()
    }

    fn is_video_transcode_available(&self) -> bool {
        (**self).is_video_transcode_available()
    }

    fn max_source_transcode_video_size(&self) -> u64 {
        (**self).max_source_transcode_video_size()
    }
}

impl<T: MediaSignals + ?Sized> MediaSignals for Arc<T> {
    fn is_low_memory_device(&self) -> bool {
        (**self).is_low_memory_device()
    }

    fn can_encode_hevc(&self) -> bool {
        (**self).can_encode_hevc()
    }

    fn hevc_remote_flag_enabled(&self) -> bool {
        (**self).hevc_remote_flag_enabled()
    }

    fn hevc_internal_override_enabled(&self) -> bool {
        (**self).hevc_internal_override_enabled()
    }

    fn remote_quality_level_override(&self) -> Option<MediaTier> {
        (**self).remote_quality_level_override()
    }

    fn max_attachment_size(&self) -> u64 {
        (**self).max_attachment_size()
    }

    fn is_video_transcode_available(&self) -> bool {
        (**self).is_video_transcode_available()
    }

    fn max_source_transcode_video_size(&self) -> u64 {
        (**self).max_source_transcode_video_size()
    }
}

/// Fixed signal values, typically loaded from configuration.
///
/// Missing keys take their [`Default`] values when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaticSignals {
    pub low_memory: bool,
    pub can_encode_hevc: bool,
    pub hevc_remote_enabled: bool,
    pub hevc_internal_override: bool,
    /// Remote quality level code, resolved against the memory class.
    pub remote_quality_level: Option<u32>,
    pub max_attachment_size: u64,
    pub video_transcode_available: bool,
    pub max_source_transcode_video_size: u64,
}

impl Default for StaticSignals {
    fn default() -> Self {
        Self {
            low_memory: false,
            can_encode_hevc: false,
            hevc_remote_enabled: false,
            hevc_internal_override: false,
            remote_quality_level: None,
            max_attachment_size: DEFAULT_MAX_ATTACHMENT_SIZE,
            video_transcode_available: DEFAULT_VIDEO_TRANSCODE_AVAILABLE,
            max_source_transcode_video_size: DEFAULT_MAX_SOURCE_TRANSCODE_VIDEO_SIZE,
        }
    }
}

impl MediaSignals for StaticSignals {
    fn is_low_memory_device(&self) -> bool {
        self.low_memory
    }

    fn can_encode_hevc(&self) -> bool {
        self.can_encode_hevc
    }

    fn hevc_remote_flag_enabled(&self) -> bool {
        self.hevc_remote_enabled
    }

    fn hevc_internal_override_enabled(&self) -> bool {
        self.hevc_internal_override
    }

    fn remote_quality_level_override(&self) -> Option<MediaTier> {
        self.remote_quality_level
            .and_then(|level| resolve_quality_level(level, self.low_memory))
    }

    fn max_attachment_size(&self) -> u64 {
        self.max_attachment_size
    }

    fn is_video_transcode_available(&self) -> bool {
        self.video_transcode_available
    }

    fn max_source_transcode_video_size(&self) -> u64 {
        self.max_source_transcode_video_size
    }
}
