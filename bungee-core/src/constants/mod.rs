//! Constants for the bungee calculator
//!
//! Every numeric value the engine uses lives here with its unit in the name.
//! The engine never reads these directly; they seed
//! [`JumpConstants::default`](crate::config::JumpConstants), which is what
//! gets passed around.
//!
//! ## Organization
//!
//! - **Physics**: cord stiffness, gravity and the jump geometry targets
//! - **Optimality**: the ending-height band a jump is judged against
//! - **Display**: rounding precision for presented results

/// Physical constants and jump geometry targets.
pub mod physics;

/// Target ending height and the band considered optimal.
pub mod optimality;

/// Rounding precision for presented values.
pub mod display;

// Re-export commonly used constants for convenience
pub use physics::{
    SPRING_CONSTANT_N_PER_M, GRAVITY_M_PER_S2, ENDING_HEIGHT_M,
    NO_GO_ZONE_M, BUFFER_M,
};

pub use optimality::{
    OPTIMAL_ENDING_HEIGHT_M, OPTIMAL_BAND_MIN_M, OPTIMAL_BAND_MAX_M,
    CORD_CUT_RESOLUTION_M,
};

pub use display::{ENERGY_DECIMALS, OPTIMALITY_DECIMALS};
