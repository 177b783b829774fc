//! Solver capability.
//!
//! ## Overview
//!
//! - **Trait**: `Solver`, given a canonical encoding returns moves or a failure
//! - **Baseline**: `FallbackSolver`, a fixed placeholder sequence
//! - **Adapter**: `FnSolver` wraps a text-in/text-out solving function
//!
//! The caller picks one implementation at startup (`select_solver`) and
//! passes it to `solve`, which never mutates the cube. Replaying the answer
//! is a separate, explicit step.

pub mod external;
pub mod traits;

pub use external::{parse_solver_reply, FnSolver};
pub use traits::{select_solver, solve, FallbackSolver, Solver};
