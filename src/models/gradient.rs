use rand::distributions::Distribution;
use rand::thread_rng;
use statrs::distribution::Continuous;

use super::distributions::{ChisqModel, GaussianModel, UniformModel};

/// A trait for scalar models with differentiable log probability density functions.
///
/// Gradient-based samplers such as HMC or NUTS need d/dx ln p(x) in addition to
/// the density itself. The scalar models produced by
/// [`StatrsFactory`](super::StatrsFactory) implement this trait so they can be
/// handed to such a sampler directly.
///
/// # Type Requirements
///
/// - `Continuous<f64, f64>`: Continuous probability distribution over real numbers
/// - `Clone + Send + Sync`: Thread safety for parallel chains
pub trait DiffableModel: Continuous<f64, f64> + Clone + Send + Sync {
    /// Computes the gradient of the log probability density function at `x`.
    fn ln_pdf_grad(&self, x: f64) -> f64;

    /// Draws a single sample using the thread-local random number generator.
    fn draw_sample(&self) -> f64
    where
        Self: Distribution<f64>,
    {
        let mut rng = thread_rng();
        self.sample(&mut rng)
    }
}

/// For N(μ, σ²) the gradient is -(x - μ) / σ².
impl DiffableModel for GaussianModel {
    fn ln_pdf_grad(&self, x: f64) -> f64 {
        -(x - self.mu()) / self.variance()
    }
}

/// The log density is constant inside the support, so the gradient vanishes.
impl DiffableModel for UniformModel {
    fn ln_pdf_grad(&self, _: f64) -> f64 {
        0.0
    }
}

/// Gradient with respect to the precision x of Gamma(a, b): (a - 1) / x - b.
impl DiffableModel for ChisqModel {
    fn ln_pdf_grad(&self, x: f64) -> f64 {
        let gamma = self.precision_distribution();
        (gamma.shape() - 1.0) / x - gamma.rate()
    }
}
