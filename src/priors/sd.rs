use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ModelFactory;

/// A prior distribution for a standard deviation `sigma`.
///
/// The prior assumes that `1 / sigma² ~ Gamma(a, b)` with `a = df / 2` and
/// `b = ss / 2`. Here `df` is the `sample_size` and `ss` is the sum of squares,
/// equal to the sample size times `sigma_guess²`.
///
/// The support of sigma can be truncated from above with `upper_limit`, which is
/// infinite by default. Whether a sampler respects the upper limit, the initial
/// value or the `fixed` flag is up to the sampler.
///
/// # Example
///
/// ```rust
/// use bayes_priors::priors::SdPrior;
///
/// let prior = SdPrior::builder().sigma_guess(2.0).sample_size(10.0).build();
/// assert_eq!(prior.sum_of_squares(), 40.0);
/// assert_eq!(prior.initial_value(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SdPrior {
    #[serde(with = "crate::priors::serde_helpers::float")]
    sigma_guess: f64,
    #[serde(with = "crate::priors::serde_helpers::float")]
    sample_size: f64,
    #[serde(with = "crate::priors::serde_helpers::float")]
    initial_value: f64,
    fixed: bool,
    #[serde(with = "crate::priors::serde_helpers::float", default = "unbounded")]
    upper_limit: f64,
}

#[bon::bon]
impl SdPrior {
    /// Creates a new standard deviation prior.
    ///
    /// # Arguments
    ///
    /// * `sigma_guess` - Guess at the value of the standard deviation
    /// * `sample_size` - Number of observations worth of information with which
    ///   to weight the guess (default: 0.01)
    /// * `initial_value` - Starting value for an MCMC chain (default: `sigma_guess`)
    /// * `fixed` - Whether the parameter should be held fixed by a sampler. Mainly
    ///   useful for debugging (default: false)
    /// * `upper_limit` - Upper limit on the value of sigma (default: infinity)
    #[builder]
    pub fn new(
        sigma_guess: f64,
        #[builder(default = 0.01)] sample_size: f64,
        initial_value: Option<f64>,
        #[builder(default)] fixed: bool,
        #[builder(default = f64::INFINITY)] upper_limit: f64,
    ) -> Self {
        Self {
            sigma_guess,
            sample_size,
            initial_value: initial_value.unwrap_or(sigma_guess),
            fixed,
            upper_limit,
        }
    }

    pub fn sigma_guess(&self) -> f64 {
        self.sigma_guess
    }

    pub fn sample_size(&self) -> f64 {
        self.sample_size
    }

    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    pub fn fixed(&self) -> bool {
        self.fixed
    }

    pub fn upper_limit(&self) -> f64 {
        self.upper_limit
    }

    /// The prior sum of squares, `sigma_guess² * sample_size`.
    pub fn sum_of_squares(&self) -> f64 {
        self.sigma_guess * self.sigma_guess * self.sample_size
    }

    /// Builds the chi-squared model corresponding to this prior.
    ///
    /// The sample size is passed as the degrees of freedom and the sigma guess
    /// as the scale. `fixed`, `initial_value` and `upper_limit` are sampler
    /// settings and are not part of the model.
    pub fn to_model<F: ModelFactory>(&self, factory: &F) -> Result<F::Chisq, F::Error> {
        factory.chisq_model(self.sample_size, self.sigma_guess)
    }
}

impl fmt::Display for SdPrior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SdPrior with sigma_guess = {}, sample_size = {}, upper_limit = {}",
            self.sigma_guess, self.sample_size, self.upper_limit
        )
    }
}

fn unbounded() -> f64 {
    f64::INFINITY
}
