//! Numerical methods for the heat equation
//!
//! This module contains the concrete FTCS implementations.
//!
//! # Available Methods
//!
//! - **[`FtcsSolver`]**: explicit FTCS, full `nx × nt` history
//!   - Order: O(dt) + O(dx²)
//!   - Cost: 3 multiply-adds per interior node per step
//!   - Use: post-processing, plotting, export of the whole history
//!
//! - **[`FtcsStepper`]**: the same recurrence as an iterator
//!   - Memory: two columns
//!   - Use: long runs where only some snapshots matter
//!
//! Both share the column update in `ftcs::advance_column`, so a stepper
//! snapshot is bit-identical to the corresponding solver column.
//!
//! # Performance Considerations
//!
//! - **Rayon parallelization** (feature `parallel`) of the interior sweep
//! - **Configurable threshold** via `set_parallel_threshold()`

pub mod ftcs;
pub mod stepper;

// Re-exports for convenience
pub use ftcs::FtcsSolver;
pub use stepper::{FieldSnapshot, FtcsStepper};
