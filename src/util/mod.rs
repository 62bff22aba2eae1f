//! Shared utilities for hosts driving the controls.

/// Frame delta measurement for [`SpatialControls::tick`](crate::controls::SpatialControls::tick).
pub mod frame_timing;
