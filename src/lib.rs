//! Tier-based media attachment constraints.
//!
//! [`media`] holds the tier table, the selection policy and the
//! [`media::PushMediaConstraints`] facade. [`config`], [`logging`] and [`cli`]
//! back the `media-constraints` binary.

pub mod cli;
pub mod config;
pub mod logging;
pub mod media;
