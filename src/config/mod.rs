//! JSON configuration for the demo binaries.
pub mod scene;
pub mod trace;
