//! Bayes Priors Rust Library
//!
//! This library provides serializable prior specifications for Bayesian models:
//! - A prior on a standard deviation, parameterized by a guess and a sample size
//! - Scalar normal, AR1 coefficient, multivariate normal and uniform priors
//! - Conversion of every prior into a probability model through a pluggable factory
//! - A default factory backed by `statrs` distributions
//! - Reading/writing named prior collections as JSON
//!
//! # Example
//!
//! ```rust
//! use bayes_priors::prelude::*;
//!
//! let prior = NormalPrior::builder().mu(2.0).sigma(3.0).build();
//! assert_eq!(prior.variance(), 9.0);
//!
//! let model = prior.to_model(&StatrsFactory).unwrap();
//! assert_eq!(model.mu(), 2.0);
//! ```

#![warn(unused_imports)]

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::io::*;
    pub use crate::models::*;
    pub use crate::priors::*;
}

/// Prior specification types
pub mod priors {
    pub use crate::priors::ar1::*;
    pub use crate::priors::error::*;
    pub use crate::priors::mvn::*;
    pub use crate::priors::normal::*;
    pub use crate::priors::sd::*;
    pub use crate::priors::spec::*;
    pub use crate::priors::uniform::*;

    /// Prior on an autoregressive coefficient
    pub mod ar1;
    /// Error types for construction and parsing
    pub mod error;
    /// Multivariate normal prior
    pub mod mvn;
    /// JSON encoding of non-finite hyperparameters
    mod serde_helpers;
    /// Scalar normal prior
    pub mod normal;
    /// Prior on a standard deviation
    pub mod sd;
    /// Tagged union and short-form parser
    pub mod spec;
    /// Uniform prior
    pub mod uniform;
}

/// Probability models the priors convert into
pub mod models {
    pub use crate::models::distributions::*;
    pub use crate::models::error::*;
    pub use crate::models::factory::*;
    pub use crate::models::gradient::*;

    /// `statrs`-backed models and the default factory
    pub mod distributions;
    /// Error types for model construction
    pub mod error;
    /// The factory trait used by every `to_model` method
    pub mod factory;
    /// Log density gradients of scalar models
    pub mod gradient;
}

/// JSON input/output of prior collections
pub mod io;
