//! Streaming FTCS integration
//!
//! [`FtcsSolver`](super::FtcsSolver) keeps every column of the field, which
//! costs `nx·nt` floats. When only a few snapshots (or just the last one) are
//! needed, [`FtcsStepper`] walks the same recurrence while holding two
//! columns, and hands out each profile as it is produced.
//!
//! The iterator is finite (exactly `nt` items, column 0 first) and cannot be
//! restarted; build a new stepper to replay a run.
//!
//! # Example
//!
//! ```rust
//! use heat_rs::solver::{FtcsStepper, Scenario, SolverConfiguration};
//!
//! let scenario = Scenario::default();
//! let config = SolverConfiguration::default().with_steps(100);
//!
//! let last = FtcsStepper::new(&scenario, &config)
//!     .unwrap()
//!     .last()
//!     .unwrap();
//!
//! assert_eq!(last.index, 99);
//! ```

use std::iter::FusedIterator;

use nalgebra::DVector;

use crate::solver;
use crate::solver::methods::ftcs::{advance_column, initial_column};
use crate::solver::mesh::Discretization;
use crate::solver::{Scenario, SolverConfiguration};

/// Temperature profile at one time point
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSnapshot {
    /// Time index j
    pub index: usize,

    /// Time t_j
    pub time: f64,

    /// Temperatures at every node
    pub values: DVector<f64>,
}

/// Two-column FTCS iterator over time
pub struct FtcsStepper<'a> {
    scenario: &'a Scenario,
    mesh: Discretization,
    current: Vec<f64>,
    scratch: Vec<f64>,
    next_index: usize,
}

impl<'a> FtcsStepper<'a> {
    /// Prepare a run; nothing is computed until the first `next()`
    ///
    /// # Errors
    ///
    /// Same validation as [`FtcsSolver`](super::FtcsSolver): degenerate mesh,
    /// non-positive length or horizon, negative diffusivity, non-finite
    /// boundary constants.
    pub fn new(scenario: &'a Scenario, config: &SolverConfiguration) -> Result<Self, String> {
        config.validate()?;
        scenario.validate()?;

        let mesh = Discretization::new(config);
        solver::warn_if_unstable(mesh.r);

        let current = initial_column(scenario, &mesh, config.length);
        let scratch = vec![0.0; current.len()];

        Ok(Self {
            scenario,
            mesh,
            current,
            scratch,
            next_index: 0,
        })
    }

    /// Grids and weights of this run
    pub fn discretization(&self) -> &Discretization {
        &self.mesh
    }
}

impl Iterator for FtcsStepper<'_> {
    type Item = FieldSnapshot;

    fn next(&mut self) -> Option<FieldSnapshot> {
        let index = self.next_index;
        if index >= self.mesh.steps() {
            return None;
        }

        if index > 0 {
            advance_column(
                &self.current,
                &mut self.scratch,
                self.mesh.r,
                self.mesh.r2,
                self.scenario.boundaries(),
            );
            std::mem::swap(&mut self.current, &mut self.scratch);
        }

        self.next_index += 1;

        Some(FieldSnapshot {
            index,
            time: self.mesh.t[index],
            values: DVector::from_column_slice(&self.current),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.mesh.steps().saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FtcsStepper<'_> {}

impl FusedIterator for FtcsStepper<'_> {}

// =================================================================================================
// Tests
// =================================================================================================
