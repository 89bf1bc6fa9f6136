use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ModelFactory;

/// The information needed to create a prior distribution on an AR1 coefficient.
///
/// The prior itself is normal. The two flags describe truncations of its
/// support that a sampler is expected to apply:
///
/// - `force_stationary` restricts the coefficient to (-1, 1)
/// - `force_positive` restricts the coefficient to (0, ∞)
///
/// Neither flag is checked or enforced here, and [`Ar1CoefficientPrior::to_model`]
/// returns the untruncated Gaussian model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ar1CoefficientPrior {
    #[serde(with = "crate::priors::serde_helpers::float")]
    mu: f64,
    #[serde(with = "crate::priors::serde_helpers::float")]
    sigma: f64,
    force_stationary: bool,
    force_positive: bool,
    #[serde(with = "crate::priors::serde_helpers::float")]
    initial_value: f64,
}

#[bon::bon]
impl Ar1CoefficientPrior {
    /// Creates a new AR1 coefficient prior.
    ///
    /// # Arguments
    ///
    /// * `mu` - Prior mean of the coefficient (default: 0.0)
    /// * `sigma` - Prior standard deviation of the coefficient (default: 1.0)
    /// * `force_stationary` - Truncate the support to (-1, 1) (default: true)
    /// * `force_positive` - Truncate the support to positive values (default: false)
    /// * `initial_value` - Where to start an MCMC run (default: `mu`)
    #[builder]
    pub fn new(
        #[builder(default = 0.0)] mu: f64,
        #[builder(default = 1.0)] sigma: f64,
        #[builder(default = true)] force_stationary: bool,
        #[builder(default)] force_positive: bool,
        initial_value: Option<f64>,
    ) -> Self {
        Self {
            mu,
            sigma,
            force_stationary,
            force_positive,
            initial_value: initial_value.unwrap_or(mu),
        }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn force_stationary(&self) -> bool {
        self.force_stationary
    }

    pub fn force_positive(&self) -> bool {
        self.force_positive
    }

    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Builds the Gaussian model with this prior's mean and standard deviation.
    ///
    /// The stationarity and positivity flags are not passed to the factory.
    pub fn to_model<F: ModelFactory>(&self, factory: &F) -> Result<F::Gaussian, F::Error> {
        factory.gaussian_model(self.mu, self.sigma)
    }
}

impl Default for Ar1CoefficientPrior {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Display for Ar1CoefficientPrior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ar1CoefficientPrior with mu = {}, sigma = {}, force_stationary = {}, force_positive = {}",
            self.mu, self.sigma, self.force_stationary, self.force_positive
        )
    }
}
