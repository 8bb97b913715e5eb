//! Physical Constants for the Jump Model
//!
//! The model treats the cord as an ideal spring and the jumper as a point
//! mass dropped from rest. Air drag and cord mass are ignored.

// ===== FUNDAMENTAL PHYSICS CONSTANTS =====

/// Gravitational acceleration (m/s²).
///
/// Rounded standard gravity, as used in introductory mechanics.
/// Standard value is 9.80665 m/s².
pub const GRAVITY_M_PER_S2: f64 = 9.8;

// ===== CORD PROPERTIES =====

/// Spring constant of the elastic cord (N/m).
///
/// Stiffness `k` in Hooke's law `F = -kx`. Stored elastic energy at
/// extension `x` is `½kx²`, which the engine inverts for the stretch.
///
/// Source: measured for the rubber-band cords used in the classroom drop
pub const SPRING_CONSTANT_N_PER_M: f64 = 4.5;

// ===== JUMP GEOMETRY =====

/// Target clearance above the ground at the lowest point (m).
///
/// The jumper's lowest point should sit this far above the landing
/// surface. All cord sizing is solved against this value.
pub const ENDING_HEIGHT_M: f64 = 0.3;

/// Clearance below which the jumper must never go (m).
///
/// Declared alongside the other targets but not consumed by any formula.
pub const NO_GO_ZONE_M: f64 = 0.1;

/// Safety margin above the no-go zone (m).
///
/// Declared alongside the other targets but not consumed by any formula.
pub const BUFFER_M: f64 = 0.2;
