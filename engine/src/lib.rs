//! Weight Simulator Engine
//!
//! Pure projection engine behind the weight-change simulator UI: estimates
//! BMR (Mifflin-St Jeor), TDEE (activity-multiplier scaling), and a linear
//! 30-day weight trajectory from a planned caloric intake.
//!
//! The presentation layer collects inputs, calls
//! [`projection::simulate`], and renders the returned scalars and path.
//! The engine holds no state between calls and performs no I/O.

pub mod errors;
pub mod projection;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use projection::*;
pub use types::*;
