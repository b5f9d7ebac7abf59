use super::Config;
use crate::media::{image_dimension_ladder, tier_table, MediaTier, GIF_MAX_BYTES};
use anyhow::Result;
use tracing::warn;

/// Validation errors for configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Validate a configuration object.
pub fn validate_config(config: &Config) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    let signals = &config.signals;

    if signals.max_attachment_size == 0 {
        errors.push(ConfigValidationError {
            path: "signals.maxAttachmentSize".to_string(),
            message: "Attachment ceiling must be greater than 0".to_string(),
        });
    }

    if signals.video_transcode_available && signals.max_source_transcode_video_size == 0 {
        errors.push(ConfigValidationError {
            path: "signals.maxSourceTranscodeVideoSize".to_string(),
            message: "Source transcode ceiling must be greater than 0 when transcoding is available"
                .to_string(),
        });
    }

    // An unresolvable remote level is treated as absent by selection.
    if let Some(level) = signals.remote_quality_level {
        if MediaTier::by_level(level, signals.low_memory).is_none() {
            warn!(
                level,
                low_memory = signals.low_memory,
                "Remote quality level has no tier for this device; the default tier applies"
            );
        }
    }

    if signals.max_attachment_size > 0 && signals.max_attachment_size < GIF_MAX_BYTES {
        warn!(
            max_attachment_size = signals.max_attachment_size,
            "Attachment ceiling is below the animated image limit; GIFs will be clamped"
        );
    }

    if signals.hevc_internal_override && !signals.can_encode_hevc {
        warn!("HEVC internal override is set but the device cannot encode HEVC");
    }

    errors
}

/// Validate configuration and return Result.
pub fn validate_config_object(config: &Config) -> Result<()> {
    let errors = validate_config(config);
    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        anyhow::bail!("Configuration validation failed:\n{}", messages.join("\n"));
    }
}

/// Check the built-in tier table's structural invariants.
///
/// Returns one message per violated invariant; empty when the table is sound.
pub fn validate_tier_table() -> Vec<String> {
    let table = tier_table();
    let mut problems = Vec::new();

    let low_memory = table.iter().filter(|r| r.is_low_memory).count();
    if low_memory != 1 {
        problems.push(format!("expected exactly one low-memory tier, found {low_memory}"));
    }
    if table.iter().all(|r| r.is_low_memory) {
        problems.push("no standard tiers".to_string());
    }

    for (i, a) in table.iter().enumerate() {
        if table[i + 1..]
            .iter()
            .any(|b| a.level == b.level && a.is_low_memory == b.is_low_memory)
        {
            problems.push(format!("{} shares its level key with a later tier", a.tier));
        }
        if a.quality_setting > 100 {
            problems.push(format!("{} quality {} exceeds 100", a.tier, a.quality_setting));
        }
        match image_dimension_ladder(a.ladder_max) {
            Ok(ladder) if ladder == a.image_size_targets => {}
            Ok(_) => problems.push(format!("{} ladder does not match its maximum", a.tier)),
            Err(e) => problems.push(format!("{}: {e}", a.tier)),
        }
    }

    problems
}
