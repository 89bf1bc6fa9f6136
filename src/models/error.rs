use thiserror::Error;

/// Error types that can occur when the default factory builds a model.
///
/// The prior specifications do not validate their hyperparameters, so invalid
/// values such as a negative standard deviation first surface here.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to create ChisqModel with df = {df}, sigma_guess = {sigma_guess}: {message}")]
    Chisq {
        df: f64,
        sigma_guess: f64,
        message: String,
    },

    #[error("Failed to create GaussianModel with mu = {mu}, sigma = {sigma}: {message}")]
    Gaussian { mu: f64, sigma: f64, message: String },

    #[error("Failed to create MvnModel of dimension {dim}: {message}")]
    Mvn { dim: usize, message: String },

    #[error("Failed to create UniformModel with lo = {lo}, hi = {hi}: {message}")]
    Uniform { lo: f64, hi: f64, message: String },
}
