//! Flat 2D particle physics engine.
//!
//! The engine owns every body of a simulation instance in one contiguous
//! allocation and advances them with a fixed-step integrator. Forces come from
//! a constant field acceleration, quadratic drag against an ambient fluid
//! (optionally moving as wind), buoyancy, and optional pairwise Newtonian
//! gravity.
//!
//! Callers reach engine state only through the accessors on [`Phys`],
//! [`PObj`] and [`PVec`]; the viewer crate wraps these in borrow-scoped
//! handles.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`phys`] | Simulation instance, bodies, vectors, and the `run` step |
//! | [`error`] | Result codes and their human-readable descriptions |

pub mod error;
pub mod phys;

pub use error::{PhysError, strerror};
pub use phys::{PObj, PVec, Phys};

// ── Physical constants ──────────────────────────────────────────

/// Gravitational constant, m³·kg⁻¹·s⁻².
pub const G: f64 = 6.674_301_515_151_515_151_4e-11;

/// π as used throughout the engine.
pub const PI: f64 = std::f64::consts::PI;

/// Density of air at sea level, kg/m³.
pub const AIR_DENSITY: f64 = 1.225;

/// Standard acceleration of free fall, m/s².
pub const ACCEL_OF_FREE_FALL: f64 = 9.806_65;

/// Drag coefficient of a sphere.
pub const BALL_DRAG_COEF: f64 = 0.47;
