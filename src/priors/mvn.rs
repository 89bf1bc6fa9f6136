use std::fmt;

use ndarray::{Array, Array1, Array2, ArrayView1, ArrayView2, Dimension, Ix1, Ix2};
use serde::{Deserialize, Serialize};

use super::error::PriorError;
use crate::models::ModelFactory;

/// A multivariate normal prior with mean vector `mu` and variance matrix `sigma`.
///
/// Construction checks the shapes of both arrays, so an `MvnPrior` always holds
/// a vector of length n and an n×n matrix. Whether the matrix is symmetric
/// positive definite is left to the model factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MvnPriorState", into = "MvnPriorState")]
pub struct MvnPrior {
    mu: Array1<f64>,
    sigma: Array2<f64>,
}

impl MvnPrior {
    /// Creates a new multivariate normal prior.
    ///
    /// Both arguments may have any dimensionality, including
    /// [`IxDyn`](ndarray::IxDyn). The checks run in the following order and the
    /// first failure is returned:
    ///
    /// 1. `mu` must have exactly one axis
    /// 2. `sigma` must have exactly two axes
    /// 3. `sigma` must be square
    /// 4. `sigma` must have as many rows as `mu` has elements
    ///
    /// # Arguments
    ///
    /// * `mu` - Prior mean vector
    /// * `sigma` - Prior variance matrix
    ///
    /// # Returns
    ///
    /// * `Ok(MvnPrior)` - The validated prior
    /// * `Err(PriorError)` - `MuNotVector`, `SigmaNotMatrix`, `SigmaNotSquare` or
    ///   `DimensionMismatch`
    pub fn new<D1, D2>(mu: Array<f64, D1>, sigma: Array<f64, D2>) -> Result<Self, PriorError>
    where
        D1: Dimension,
        D2: Dimension,
    {
        if mu.ndim() != 1 {
            return Err(PriorError::MuNotVector(mu.ndim()));
        }
        if sigma.ndim() != 2 {
            return Err(PriorError::SigmaNotMatrix(sigma.ndim()));
        }

        let mu = mu.into_dimensionality::<Ix1>()?;
        let sigma = sigma.into_dimensionality::<Ix2>()?;

        let (rows, cols) = sigma.dim();
        if rows != cols {
            return Err(PriorError::SigmaNotSquare { rows, cols });
        }
        if rows != mu.len() {
            return Err(PriorError::DimensionMismatch {
                mu: mu.len(),
                sigma: rows,
            });
        }

        Ok(Self { mu, sigma })
    }

    pub fn mu(&self) -> ArrayView1<f64> {
        self.mu.view()
    }

    pub fn sigma(&self) -> ArrayView2<f64> {
        self.sigma.view()
    }

    /// Dimension of the distribution.
    pub fn dim(&self) -> usize {
        self.mu.len()
    }

    /// Builds the multivariate normal model from the stored vector and matrix.
    pub fn to_model<F: ModelFactory>(&self, factory: &F) -> Result<F::Mvn, F::Error> {
        factory.mvn_model(self.mu.view(), self.sigma.view())
    }
}

impl fmt::Display for MvnPrior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MvnPrior of dimension {}", self.dim())
    }
}

/// Serialized form of an [`MvnPrior`]: the mean and the rows of the variance matrix.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct MvnPriorState {
    #[serde(with = "crate::priors::serde_helpers::float_vec")]
    mu: Vec<f64>,
    #[serde(with = "crate::priors::serde_helpers::float_rows")]
    sigma: Vec<Vec<f64>>,
}

impl From<MvnPrior> for MvnPriorState {
    fn from(prior: MvnPrior) -> Self {
        Self {
            mu: prior.mu.to_vec(),
            sigma: prior.sigma.rows().into_iter().map(|row| row.to_vec()).collect(),
        }
    }
}

impl TryFrom<MvnPriorState> for MvnPrior {
    type Error = PriorError;

    fn try_from(state: MvnPriorState) -> Result<Self, Self::Error> {
        let rows = state.sigma.len();
        let cols = state.sigma.first().map_or(0, Vec::len);

        if let Some((row, found)) = state
            .sigma
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != cols)
        {
            return Err(PriorError::RaggedMatrix {
                row,
                expected: cols,
                found,
            });
        }

        let sigma = Array2::from_shape_vec((rows, cols), state.sigma.concat())?;
        MvnPrior::new(Array1::from(state.mu), sigma)
    }
}
