use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ModelFactory;

/// A scalar normal prior distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NormalPrior {
    #[serde(with = "crate::priors::serde_helpers::float")]
    mu: f64,
    #[serde(with = "crate::priors::serde_helpers::float")]
    sigma: f64,
    #[serde(with = "crate::priors::serde_helpers::float")]
    initial_value: f64,
}

#[bon::bon]
impl NormalPrior {
    /// Creates a new normal prior.
    ///
    /// # Arguments
    ///
    /// * `mu` - Prior mean (default: 0.0)
    /// * `sigma` - Prior standard deviation (default: 1.0)
    /// * `initial_value` - Starting value for an MCMC chain (default: `mu`)
    #[builder]
    pub fn new(
        #[builder(default = 0.0)] mu: f64,
        #[builder(default = 1.0)] sigma: f64,
        initial_value: Option<f64>,
    ) -> Self {
        Self {
            mu,
            sigma,
            initial_value: initial_value.unwrap_or(mu),
        }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Alias for [`NormalPrior::mu`].
    pub fn mean(&self) -> f64 {
        self.mu
    }

    /// Alias for [`NormalPrior::sigma`].
    pub fn sd(&self) -> f64 {
        self.sigma
    }

    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    /// Builds the Gaussian model with this prior's mean and standard deviation.
    pub fn to_model<F: ModelFactory>(&self, factory: &F) -> Result<F::Gaussian, F::Error> {
        factory.gaussian_model(self.mu, self.sigma)
    }
}

impl Default for NormalPrior {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Display for NormalPrior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalPrior with mu = {}, sigma = {}", self.mu, self.sigma)
    }
}
