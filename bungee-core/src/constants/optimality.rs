//! Optimality Targets
//!
//! A jump is judged by how close its lowest point lands to a target clearance.

/// Ideal clearance above the ground at the lowest point (m).
pub const OPTIMAL_ENDING_HEIGHT_M: f64 = 0.31;

/// Lower edge of the acceptable ending-height band (m), inclusive.
pub const OPTIMAL_BAND_MIN_M: f64 = 0.30;

/// Upper edge of the acceptable ending-height band (m), inclusive.
pub const OPTIMAL_BAND_MAX_M: f64 = 0.32;

/// Length resolution a cord can actually be cut to (m).
///
/// Used when judging the as-built cord rather than the exact solution.
pub const CORD_CUT_RESOLUTION_M: f64 = 0.01;
