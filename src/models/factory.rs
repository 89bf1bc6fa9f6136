//! The seam between prior specifications and the probability-model library.
//!
//! Prior specifications never construct distributions themselves. Instead, every
//! `to_model` method receives a [`ModelFactory`] and forwards its stored
//! hyperparameters to the matching constructor. This keeps the prior types free
//! of any numerical dependency and lets callers plug in whichever model library
//! their sampler works with.
//!
//! The crate ships one implementation, [`StatrsFactory`](crate::models::StatrsFactory),
//! which builds `statrs` distributions.

use std::fmt;

use ndarray::{ArrayView1, ArrayView2};

/// A constructor for concrete probability models.
///
/// Each method corresponds to one model family the prior specifications can be
/// converted into. Implementations decide how hyperparameters are validated and
/// which representation the resulting model uses.
///
/// # Associated Types
///
/// * `Chisq` - Inverse-gamma style model for a standard deviation, parameterized
///   by a prior sample size and a guess at sigma
/// * `Gaussian` - Scalar normal model
/// * `Mvn` - Multivariate normal model
/// * `Uniform` - Scalar uniform model
/// * `Error` - Error returned when a model rejects its hyperparameters
pub trait ModelFactory {
    type Chisq: fmt::Debug;
    type Gaussian: fmt::Debug;
    type Mvn: fmt::Debug;
    type Uniform: fmt::Debug;
    type Error: std::error::Error;

    /// Creates a chi-squared model on the precision 1/sigma².
    ///
    /// # Arguments
    ///
    /// * `df` - Degrees of freedom, i.e. the prior sample size
    /// * `sigma_guess` - Guess at the standard deviation
    fn chisq_model(&self, df: f64, sigma_guess: f64) -> Result<Self::Chisq, Self::Error>;

    /// Creates a scalar Gaussian model with mean `mu` and standard deviation `sigma`.
    fn gaussian_model(&self, mu: f64, sigma: f64) -> Result<Self::Gaussian, Self::Error>;

    /// Creates a multivariate normal model.
    ///
    /// # Arguments
    ///
    /// * `mu` - Mean vector of length n
    /// * `sigma` - n×n variance matrix
    fn mvn_model(
        &self,
        mu: ArrayView1<f64>,
        sigma: ArrayView2<f64>,
    ) -> Result<Self::Mvn, Self::Error>;

    /// Creates a uniform model on `[lo, hi]`.
    fn uniform_model(&self, lo: f64, hi: f64) -> Result<Self::Uniform, Self::Error>;
}

/// Any model a [`ModelFactory`] can produce.
///
/// Returned by [`PriorSpec::to_model`](crate::priors::PriorSpec::to_model) when
/// the concrete prior type is only known at runtime.
pub enum Model<F: ModelFactory> {
    Chisq(F::Chisq),
    Gaussian(F::Gaussian),
    Mvn(F::Mvn),
    Uniform(F::Uniform),
}

impl<F: ModelFactory> Model<F> {
    /// Name of the model family, as used in summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Model::Chisq(_) => "ChisqModel",
            Model::Gaussian(_) => "GaussianModel",
            Model::Mvn(_) => "MvnModel",
            Model::Uniform(_) => "UniformModel",
        }
    }
}

impl<F: ModelFactory> fmt::Debug for Model<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Chisq(model) => f.debug_tuple("Chisq").field(model).finish(),
            Model::Gaussian(model) => f.debug_tuple("Gaussian").field(model).finish(),
            Model::Mvn(model) => f.debug_tuple("Mvn").field(model).finish(),
            Model::Uniform(model) => f.debug_tuple("Uniform").field(model).finish(),
        }
    }
}

impl<F> fmt::Display for Model<F>
where
    F: ModelFactory,
    F::Chisq: fmt::Display,
    F::Gaussian: fmt::Display,
    F::Mvn: fmt::Display,
    F::Uniform: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Chisq(model) => model.fmt(f),
            Model::Gaussian(model) => model.fmt(f),
            Model::Mvn(model) => model.fmt(f),
            Model::Uniform(model) => model.fmt(f),
        }
    }
}
