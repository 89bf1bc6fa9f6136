//! Probability models backed by the `statrs` crate.
//!
//! [`StatrsFactory`] is the default [`ModelFactory`]. Each model keeps the
//! hyperparameters it was created from next to the underlying `statrs`
//! distribution, so callers can read them back without going through the
//! `Option`-returning statistics traits.
//!
//! Hyperparameter validation happens here and only here: a `NormalPrior` with a
//! negative sigma is a perfectly valid prior specification, but converting it
//! with this factory fails with a [`ModelError`].

use std::fmt;

use nalgebra::{DMatrix, DVector, Dyn};
use ndarray::{ArrayView1, ArrayView2};
use rand::distributions::Distribution;
use rand::Rng;
use statrs::distribution::{Continuous, Gamma, MultivariateNormal, Normal, Uniform};

use super::error::ModelError;
use super::factory::ModelFactory;

/// Model factory producing `statrs`-backed distributions.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatrsFactory;

impl ModelFactory for StatrsFactory {
    type Chisq = ChisqModel;
    type Gaussian = GaussianModel;
    type Mvn = MvnModel;
    type Uniform = UniformModel;
    type Error = ModelError;

    fn chisq_model(&self, df: f64, sigma_guess: f64) -> Result<ChisqModel, ModelError> {
        log::debug!("Creating ChisqModel with df = {df}, sigma_guess = {sigma_guess}");
        ChisqModel::new(df, sigma_guess)
    }

    fn gaussian_model(&self, mu: f64, sigma: f64) -> Result<GaussianModel, ModelError> {
        log::debug!("Creating GaussianModel with mu = {mu}, sigma = {sigma}");
        GaussianModel::new(mu, sigma)
    }

    fn mvn_model(
        &self,
        mu: ArrayView1<f64>,
        sigma: ArrayView2<f64>,
    ) -> Result<MvnModel, ModelError> {
        log::debug!("Creating MvnModel of dimension {}", mu.len());
        let dim = mu.len();
        let mu = DVector::from_iterator(dim, mu.iter().copied());
        let sigma = DMatrix::from_fn(sigma.nrows(), sigma.ncols(), |i, j| sigma[[i, j]]);
        MvnModel::new(mu, sigma)
    }

    fn uniform_model(&self, lo: f64, hi: f64) -> Result<UniformModel, ModelError> {
        log::debug!("Creating UniformModel on [{lo}, {hi}]");
        UniformModel::new(lo, hi)
    }
}

/// Chi-squared model on the precision of a normal distribution.
///
/// With `df` prior observations and a guess `sigma_estimate` at the standard
/// deviation, the precision follows
///
/// ```text
/// 1 / sigma² ~ Gamma(df / 2, df * sigma_estimate² / 2)
/// ```
///
/// where the second argument is the rate. The density and sampling methods
/// operate on the precision scale; [`ChisqModel::sample_sigma`] transforms a
/// draw back to the standard deviation scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ChisqModel {
    df: f64,
    sigma_estimate: f64,
    precision: Gamma,
}

impl ChisqModel {
    /// Creates a new chi-squared model.
    ///
    /// # Arguments
    ///
    /// * `df` - Degrees of freedom (prior sample size), must be positive
    /// * `sigma_estimate` - Guess at the standard deviation, must be positive
    ///
    /// # Returns
    ///
    /// * `Ok(ChisqModel)` - The model
    /// * `Err(ModelError::Chisq)` - If `statrs` rejects the implied Gamma parameters
    pub fn new(df: f64, sigma_estimate: f64) -> Result<Self, ModelError> {
        let shape = df / 2.0;
        let rate = df * sigma_estimate * sigma_estimate / 2.0;
        let precision = Gamma::new(shape, rate).map_err(|e| ModelError::Chisq {
            df,
            sigma_guess: sigma_estimate,
            message: e.to_string(),
        })?;

        Ok(Self {
            df,
            sigma_estimate,
            precision,
        })
    }

    pub fn df(&self) -> f64 {
        self.df
    }

    pub fn sigma_estimate(&self) -> f64 {
        self.sigma_estimate
    }

    /// Prior sum of squares, `df * sigma_estimate²`.
    pub fn sum_of_squares(&self) -> f64 {
        self.df * self.sigma_estimate * self.sigma_estimate
    }

    /// The Gamma distribution of the precision.
    pub fn precision_distribution(&self) -> &Gamma {
        &self.precision
    }

    /// Draws a standard deviation by sampling the precision and inverting it.
    pub fn sample_sigma<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let precision: f64 = self.precision.sample(rng);
        precision.sqrt().recip()
    }
}

impl Continuous<f64, f64> for ChisqModel {
    fn pdf(&self, x: f64) -> f64 {
        self.precision.pdf(x)
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        self.precision.ln_pdf(x)
    }
}

impl Distribution<f64> for ChisqModel {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.precision.sample(rng)
    }
}

impl fmt::Display for ChisqModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ChisqModel(df = {}, sigma_estimate = {})",
            self.df, self.sigma_estimate
        )
    }
}

/// Scalar normal model.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianModel {
    mu: f64,
    sigma: f64,
    dist: Normal,
}

impl GaussianModel {
    /// Creates a normal model with mean `mu` and standard deviation `sigma`.
    ///
    /// Fails with [`ModelError::Gaussian`] if `sigma` is not positive or either
    /// argument is NaN.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, ModelError> {
        let dist = Normal::new(mu, sigma).map_err(|e| ModelError::Gaussian {
            mu,
            sigma,
            message: e.to_string(),
        })?;
        Ok(Self { mu, sigma, dist })
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }
}

impl Continuous<f64, f64> for GaussianModel {
    fn pdf(&self, x: f64) -> f64 {
        self.dist.pdf(x)
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        self.dist.ln_pdf(x)
    }
}

impl Distribution<f64> for GaussianModel {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.dist.sample(rng)
    }
}

impl fmt::Display for GaussianModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GaussianModel(mu = {}, sigma = {})", self.mu, self.sigma)
    }
}

/// Multivariate normal model over dense `nalgebra` types.
#[derive(Debug, Clone)]
pub struct MvnModel {
    mu: DVector<f64>,
    sigma: DMatrix<f64>,
    dist: MultivariateNormal<Dyn>,
}

impl MvnModel {
    /// Creates a multivariate normal model.
    ///
    /// # Arguments
    ///
    /// * `mu` - Mean vector of length n
    /// * `sigma` - Symmetric positive definite n×n variance matrix
    ///
    /// # Returns
    ///
    /// * `Ok(MvnModel)` - The model
    /// * `Err(ModelError::Mvn)` - If the dimensions disagree or `sigma` is not
    ///   symmetric positive definite
    pub fn new(mu: DVector<f64>, sigma: DMatrix<f64>) -> Result<Self, ModelError> {
        let dim = mu.len();
        if sigma.nrows() != dim || sigma.ncols() != dim {
            return Err(ModelError::Mvn {
                dim,
                message: format!(
                    "variance matrix has shape {}x{}",
                    sigma.nrows(),
                    sigma.ncols()
                ),
            });
        }

        let dist = MultivariateNormal::new(mu.as_slice().to_vec(), sigma.as_slice().to_vec())
            .map_err(|e| ModelError::Mvn {
                dim,
                message: e.to_string(),
            })?;

        Ok(Self { mu, sigma, dist })
    }

    pub fn dim(&self) -> usize {
        self.mu.len()
    }

    pub fn mu(&self) -> &DVector<f64> {
        &self.mu
    }

    pub fn sigma(&self) -> &DMatrix<f64> {
        &self.sigma
    }

    /// Log density at `x`.
    pub fn ln_pdf(&self, x: &DVector<f64>) -> f64 {
        self.dist.ln_pdf(x)
    }

    /// Draws a single vector from the model.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DVector<f64> {
        self.dist.sample(rng)
    }
}

impl fmt::Display for MvnModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MvnModel(dim = {})", self.dim())
    }
}

/// Scalar uniform model on `[lo, hi]`.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformModel {
    lo: f64,
    hi: f64,
    dist: Uniform,
}

impl UniformModel {
    /// Creates a uniform model. `statrs` requires finite bounds with `lo < hi`.
    pub fn new(lo: f64, hi: f64) -> Result<Self, ModelError> {
        let dist = Uniform::new(lo, hi).map_err(|e| ModelError::Uniform {
            lo,
            hi,
            message: e.to_string(),
        })?;
        Ok(Self { lo, hi, dist })
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }
}

impl Continuous<f64, f64> for UniformModel {
    fn pdf(&self, x: f64) -> f64 {
        self.dist.pdf(x)
    }

    fn ln_pdf(&self, x: f64) -> f64 {
        self.dist.ln_pdf(x)
    }
}

impl Distribution<f64> for UniformModel {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.dist.sample(rng)
    }
}

impl fmt::Display for UniformModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UniformModel(lo = {}, hi = {})", self.lo, self.hi)
    }
}
