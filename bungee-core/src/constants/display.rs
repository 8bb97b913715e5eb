//! Display Precision

/// Decimal places for energies and distances (J, m).
pub const ENERGY_DECIMALS: usize = 2;

/// Decimal places for the distance-from-optimal field (m).
pub const OPTIMALITY_DECIMALS: usize = 3;
