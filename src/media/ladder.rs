//! Image dimension ladders.
//!
//! A ladder is the descending list of square pixel bounds an image encoder
//! walks through, largest first, until the encoded output fits the tier's
//! byte limit.

use super::MediaError;

/// Smallest rung of every ladder.
pub const LADDER_ANCHOR_PX: u32 = 512;

/// First rung of the 64px grid above the anchor.
pub const LADDER_GRID_START_PX: u32 = 768;

/// Spacing of the grid rungs.
pub const LADDER_GRID_STEP_PX: u32 = 64;

/// Build the dimension ladder for `max_dimension`.
///
/// The result always ends in [`LADDER_ANCHOR_PX`]. It starts at
/// `max_dimension` when that value is on the grid or not a multiple of 16;
/// otherwise it starts at the largest grid rung below it. A multiple of 16
/// below the grid start (528..=752) has no rung of its own, so its ladder is
/// the anchor alone. Values at or below the anchor are rejected since they
/// would duplicate it.
pub fn image_dimension_ladder(max_dimension: u32) -> Result<Vec<u32>, MediaError> {
    if max_dimension <= LADDER_ANCHOR_PX {
        return Err(MediaError::LadderBelowAnchor {
            max: max_dimension,
            anchor: LADDER_ANCHOR_PX,
        });
    }
    Ok(build_ladder(max_dimension))
}

/// Ladder construction without the precondition check.
///
/// Only called with table constants, all of which exceed the anchor.
pub(crate) fn build_ladder(max_dimension: u32) -> Vec<u32> {
    debug_assert!(max_dimension > LADDER_ANCHOR_PX);

    let mut rungs = vec![LADDER_ANCHOR_PX];
    rungs.extend(
        (LADDER_GRID_START_PX..=max_dimension).step_by(LADDER_GRID_STEP_PX as usize),
    );

    // Off-grid maxima are still reachable as the top rung.
    if max_dimension % 16 != 0 {
        rungs.push(max_dimension);
    }

    rungs.reverse();
    rungs
}
