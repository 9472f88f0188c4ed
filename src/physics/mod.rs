//! Heat problems
//!
//! This module provides the trait describing a 1D heat problem.
//! A heat model encapsulates the problem data of the diffusion equation
//!
//! ```text
//! ∂u/∂t = α ∂²u/∂x²,   0 < x < L,   u(0, t) = u0,   u(L, t) = uL
//! ```
//!
//! that is, the initial profile `u(x, 0)`, the Dirichlet constants and the
//! analytical solution used as a reference.
//!
//! # Architecture
//!
//! Heat models are **separate from numerical solvers**:
//! - The model provides the **problem** (initial and boundary data)
//! - The solver provides the **method** (FTCS stencil)
//!
//! This separation allows:
//! - Same model with the dense solver or the streaming stepper
//! - Same solver with different profiles (single mode, sine series, shifted)
//!
//! # Implementing a New Heat Model
//!
//! ```rust
//! use heat_rs::physics::HeatModel;
//!
//! struct Tent;
//!
//! impl HeatModel for Tent {
//!     fn initial_value(&self, x: f64, length: f64) -> f64 {
//!         1.0 - (2.0 * x / length - 1.0).abs()
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Tent"
//!     }
//! }
//! ```
//!
//! # Available Models
//!
//! See [`crate::models`].

// module declaration
pub mod traits;

// re-export commonly used types for convenience
pub use traits::HeatModel;
