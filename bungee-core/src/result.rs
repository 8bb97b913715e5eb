//! Calculation result record
//!
//! A [`JumpResult`] only ever comes out of
//! [`CalculationEngine::compute`](crate::CalculationEngine::compute), so every
//! field is finite; anything that overflows is reported as
//! [`ValidationError::Overflow`](crate::ValidationError::Overflow) instead.
//! Values are kept at full precision; [`JumpResult::rounded`] and the
//! `Display` impl apply display precision (2 decimals, 3 for the distance
//! from optimal).

use core::fmt;

use crate::constants::{ENERGY_DECIMALS, OPTIMALITY_DECIMALS};

/// Derived quantities for one jump
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JumpResult {
    /// Energy at the platform, `m·h0·g` (J)
    pub total_energy: f64,
    /// Gravitational energy left at the lowest point (J)
    pub ending_gpe: f64,
    /// Energy stored in the stretched cord at the lowest point (J)
    pub ending_elastic_pe: f64,
    /// Cord extension at the lowest point (m)
    pub stretch_distance: f64,
    /// Cord length to add beyond the unstretched length (m); negative means shorten
    pub string_added: f64,
    /// Ending height the optimality check judged (m)
    pub ending_height: f64,
    /// Distance of that ending height from the ideal (m)
    pub distance_from_optimal: f64,
    /// Whether that ending height is inside the optimal band
    pub is_optimal: bool,
}

/// One presentable line of a result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultField {
    /// Machine name
    pub name: &'static str,
    /// Human label
    pub label: &'static str,
    /// Full-precision value
    pub value: f64,
    /// Unit symbol
    pub unit: &'static str,
    /// Display precision
    pub decimals: usize,
}

impl fmt::Display for ResultField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.*} {}", self.label, self.decimals, self.value, self.unit)
    }
}

impl JumpResult {
    /// Copy with every value rounded to display precision
    pub fn rounded(&self) -> Self {
        Self {
            total_energy: round_decimals(self.total_energy, ENERGY_DECIMALS),
            ending_gpe: round_decimals(self.ending_gpe, ENERGY_DECIMALS),
            ending_elastic_pe: round_decimals(self.ending_elastic_pe, ENERGY_DECIMALS),
            stretch_distance: round_decimals(self.stretch_distance, ENERGY_DECIMALS),
            string_added: round_decimals(self.string_added, ENERGY_DECIMALS),
            ending_height: round_decimals(self.ending_height, ENERGY_DECIMALS),
            distance_from_optimal: round_decimals(
                self.distance_from_optimal,
                OPTIMALITY_DECIMALS,
            ),
            is_optimal: self.is_optimal,
        }
    }

    /// Numeric fields in presentation order
    pub fn fields(&self) -> [ResultField; 7] {
        [
            field("string_added", "String Added", self.string_added, "m", ENERGY_DECIMALS),
            field(
                "stretch_distance",
                "Bungee Stretch Distance",
                self.stretch_distance,
                "m",
                ENERGY_DECIMALS,
            ),
            field("total_energy", "Total Energy", self.total_energy, "J", ENERGY_DECIMALS),
            field("ending_height", "Ending Height", self.ending_height, "m", ENERGY_DECIMALS),
            field("ending_gpe", "Ending Gravitational PE", self.ending_gpe, "J", ENERGY_DECIMALS),
            field(
                "ending_elastic_pe",
                "Ending Elastic PE",
                self.ending_elastic_pe,
                "J",
                ENERGY_DECIMALS,
            ),
            field(
                "distance_from_optimal",
                "Distance From Optimal",
                self.distance_from_optimal,
                "m",
                OPTIMALITY_DECIMALS,
            ),
        ]
    }
}

impl fmt::Display for JumpResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.fields() {
            writeln!(f, "{row}")?;
        }
        write!(f, "Optimal: {}", if self.is_optimal { "yes" } else { "no" })
    }
}

const fn field(
    name: &'static str,
    label: &'static str,
    value: f64,
    unit: &'static str,
    decimals: usize,
) -> ResultField {
    ResultField { name, label, value, unit, decimals }
}

/// Round half away from zero to a number of decimal places
pub fn round_decimals(value: f64, decimals: usize) -> f64 {
    let scale = libm::pow(10.0, decimals as f64);
    libm::round(value * scale) / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JumpResult {
        JumpResult {
            total_energy: 34300.0,
            ending_gpe: 205.8,
            ending_elastic_pe: 34094.2,
            stretch_distance: 123.097_432_051_922_9,
            string_added: -75.447_432_051_922_9,
            ending_height: 0.3,
            distance_from_optimal: 0.010_000_000_000_000_009,
            is_optimal: true,
        }
    }

    #[test]
    fn rounding_uses_display_precision() {
        let rounded = sample().rounded();
        assert_eq!(rounded.stretch_distance, 123.1);
        assert_eq!(rounded.string_added, -75.45);
        assert_eq!(rounded.distance_from_optimal, 0.01);
        assert!(rounded.is_optimal);
    }

    #[test]
    fn decimals_helper() {
        assert_eq!(round_decimals(1.005_1, 2), 1.01);
        assert_eq!(round_decimals(-2.5, 0), -3.0);
        assert_eq!(round_decimals(0.0104, 3), 0.01);
    }

    #[test]
    fn fields_cover_every_numeric_value() {
        let fields = sample().fields();
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[0].name, "string_added");
        assert_eq!(fields[6].decimals, 3);
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_formats_fixed_precision() {
        let text = sample().to_string();
        assert!(text.contains("String Added: -75.45 m"));
        assert!(text.contains("Bungee Stretch Distance: 123.10 m"));
        assert!(text.contains("Total Energy: 34300.00 J"));
        assert!(text.contains("Ending Gravitational PE: 205.80 J"));
        assert!(text.contains("Ending Elastic PE: 34094.20 J"));
        assert!(text.contains("Ending Height: 0.30 m"));
        assert!(text.contains("Distance From Optimal: 0.010 m"));
        assert!(text.ends_with("Optimal: yes"));
    }
}
