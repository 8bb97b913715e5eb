//! Judging how close a jump ends to the target clearance
//!
//! Two interpretations are provided:
//!
//! - [`OptimalityMode::Literal`] judges the configured ending height itself.
//!   Since that is a constant, the distance and flag are the same for every
//!   input (0.010 m and optimal, with default constants).
//! - [`OptimalityMode::AsBuilt`] judges the ending height the jumper would
//!   actually reach with a cord extension cut to
//!   [`CORD_CUT_RESOLUTION_M`]. The exact solution always lands on the target,
//!   so the cut is what makes this vary with the inputs.
//!
//! `Literal` is the default.

use crate::config::JumpConstants;
use crate::constants::CORD_CUT_RESOLUTION_M;
use crate::inputs::JumpInputs;

/// Which ending height the optimality check is applied to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum OptimalityMode {
    /// Judge the configured target ending height
    #[default]
    Literal,
    /// Judge the ending height reached by the as-cut cord
    AsBuilt,
}

impl OptimalityMode {
    /// Name as used on the command line and in JSON
    pub const fn name(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::AsBuilt => "as-built",
        }
    }
}

impl core::fmt::Display for OptimalityMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of an optimality check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optimality {
    /// Ending height that was judged (m)
    pub ending_height: f64,
    /// Absolute distance from the ideal ending height (m)
    pub distance_from_optimal: f64,
    /// Whether the ending height falls inside the optimal band
    pub is_optimal: bool,
}

impl Optimality {
    /// Judge an ending height against the configured target and band
    pub fn judge(ending_height: f64, constants: &JumpConstants) -> Self {
        Self {
            ending_height,
            distance_from_optimal: libm::fabs(ending_height - constants.optimal_ending_height),
            is_optimal: ending_height >= constants.optimal_band_min
                && ending_height <= constants.optimal_band_max,
        }
    }
}

/// Judge the configured ending height, independent of any input
pub fn literal(constants: &JumpConstants) -> Optimality {
    Optimality::judge(constants.ending_height, constants)
}

/// Judge the ending height produced by the cord as it would be cut
pub fn as_built(
    constants: &JumpConstants,
    inputs: &JumpInputs,
    stretch_distance: f64,
    string_added: f64,
) -> Optimality {
    let cut_added = round_to_step(string_added, CORD_CUT_RESOLUTION_M);
    let reached = inputs.start_height()
        - inputs.unstretched_length()
        - cut_added
        - stretch_distance
        - inputs.jumper_height();
    Optimality::judge(reached, constants)
}

/// Round to the nearest multiple of `step`
pub(crate) fn round_to_step(value: f64, step: f64) -> f64 {
    libm::round(value / step) * step
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_match_cli_values() {
        assert_eq!(OptimalityMode::Literal.name(), "literal");
        assert_eq!(OptimalityMode::AsBuilt.name(), "as-built");
    }

    #[test]
    fn literal_uses_only_constants() {
        let constants = JumpConstants::default();
        let outcome = literal(&constants);
        assert_eq!(outcome.ending_height, 0.3);
        assert!((outcome.distance_from_optimal - 0.01).abs() < 1e-12);
        assert!(outcome.is_optimal);
    }

    #[test]
    fn literal_follows_substituted_target() {
        let constants = JumpConstants::default().with_ending_height(0.5);
        let outcome = literal(&constants);
        assert!((outcome.distance_from_optimal - 0.19).abs() < 1e-12);
        assert!(!outcome.is_optimal);
    }

    #[test]
    fn band_edges_are_inclusive() {
        let constants = JumpConstants::default();
        assert!(Optimality::judge(0.30, &constants).is_optimal);
        assert!(Optimality::judge(0.32, &constants).is_optimal);
        assert!(!Optimality::judge(0.33, &constants).is_optimal);
        assert!(!Optimality::judge(0.29, &constants).is_optimal);
    }

    #[test]
    fn as_built_lands_within_half_a_cut_of_target() {
        let constants = JumpConstants::default();
        let inputs = JumpInputs::new(70.0, 50.0, 1.7, 0.35).unwrap();
        let stretch = 123.097_432_051_922_9;
        let added = 50.0 - stretch - 0.35 - 0.3 - 1.7;

        let outcome = as_built(&constants, &inputs, stretch, added);
        assert!((outcome.ending_height - 0.3).abs() <= CORD_CUT_RESOLUTION_M / 2.0 + 1e-9);
        // Cutting -75.4474 to -75.45 shortens the cord 2.6 mm, so the jump ends higher
        assert!((outcome.ending_height - 0.302_567_948).abs() < 1e-6);
        assert!(outcome.is_optimal);
    }

    #[test]
    fn step_rounding() {
        assert!((round_to_step(1.234, 0.01) - 1.23).abs() < 1e-12);
        assert!((round_to_step(-75.4474, 0.01) + 75.45).abs() < 1e-12);
    }
}
