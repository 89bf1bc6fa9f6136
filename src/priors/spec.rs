//! A tagged union over all prior specifications.
//!
//! [`PriorSpec`] is used wherever the concrete prior type is only known at
//! runtime: JSON collections of named priors, and the short string form accepted
//! on the command line.
//!
//! # String Format
//!
//! Scalar priors can be written as `Name(param1, param2, ...)`. Names are
//! case-insensitive and whitespace around parentheses and commas is ignored.
//! Trailing parameters that have defaults may be omitted.
//!
//! - `Sd(sigma_guess[, sample_size])`, also `SdPrior`
//! - `Normal([mu[, sigma]])`, also `N`
//! - `Ar1([mu[, sigma]])`
//! - `Uniform(lo, hi)`, also `U`
//!
//! Multivariate normal priors have no short form.
//!
//! # Serialized Form
//!
//! ```json
//! {"type": "normal", "params": {"mu": 0.0, "sigma": 1.0, "initial_value": 0.0}}
//! ```

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use variantly::Variantly;

use super::{Ar1CoefficientPrior, MvnPrior, NormalPrior, PriorError, SdPrior, UniformPrior};
use crate::models::{Model, ModelFactory};

lazy_static! {
    static ref SPEC_PATTERN: Regex =
        Regex::new(r"^([a-zA-Z][a-zA-Z0-9]*)\s*\(\s*([^)]*)\s*\)$").expect("valid prior pattern");
}

/// Any of the supported prior specifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Variantly)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
pub enum PriorSpec {
    Sd(SdPrior),
    Normal(NormalPrior),
    Ar1(Ar1CoefficientPrior),
    Mvn(MvnPrior),
    Uniform(UniformPrior),
}

/// Name and parameters of a short-form specification before validation.
#[derive(Debug)]
struct ParsedSpec {
    name: String,
    params: Vec<f64>,
}

impl PriorSpec {
    pub const AVAILABLE_PRIORS: [&str; 4] = ["sd", "normal", "ar1", "uniform"];

    /// Name of the wrapped prior type.
    pub fn kind(&self) -> &'static str {
        match self {
            PriorSpec::Sd(_) => "SdPrior",
            PriorSpec::Normal(_) => "NormalPrior",
            PriorSpec::Ar1(_) => "Ar1CoefficientPrior",
            PriorSpec::Mvn(_) => "MvnPrior",
            PriorSpec::Uniform(_) => "UniformPrior",
        }
    }

    /// Converts the wrapped prior with `factory`.
    ///
    /// Dispatches to the `to_model` method of the concrete prior and wraps the
    /// result in the matching [`Model`] variant.
    pub fn to_model<F: ModelFactory>(&self, factory: &F) -> Result<Model<F>, F::Error> {
        let model = match self {
            PriorSpec::Sd(prior) => Model::Chisq(prior.to_model(factory)?),
            PriorSpec::Normal(prior) => Model::Gaussian(prior.to_model(factory)?),
            PriorSpec::Ar1(prior) => Model::Gaussian(prior.to_model(factory)?),
            PriorSpec::Mvn(prior) => Model::Mvn(prior.to_model(factory)?),
            PriorSpec::Uniform(prior) => Model::Uniform(prior.to_model(factory)?),
        };
        Ok(model)
    }

    /// Splits `Name(p1, p2, ...)` into a lowercase name and its numeric parameters.
    fn parse_short_form(s: &str) -> Result<ParsedSpec, PriorError> {
        let s = s.trim();

        let captures = SPEC_PATTERN.captures(s).ok_or_else(|| {
            PriorError::Parse(format!(
                "Invalid format: '{s}'. Use 'PriorName(param1, param2, ...)'"
            ))
        })?;

        let name = captures[1].to_lowercase();
        let params_str = &captures[2];

        let params = if params_str.trim().is_empty() {
            Vec::new()
        } else {
            Self::parse_parameters(params_str)?
        };

        Ok(ParsedSpec { name, params })
    }

    fn parse_parameters(params_str: &str) -> Result<Vec<f64>, PriorError> {
        params_str
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| PriorError::Parse(format!("Failed to parse parameters '{params_str}': {e}")))
    }

    fn from_parsed(spec: ParsedSpec) -> Result<Self, PriorError> {
        let params = &spec.params;
        match spec.name.as_str() {
            "sd" | "sdprior" => {
                Self::validate_param_count(&spec.name, params, 1, 2)?;
                let prior = SdPrior::builder()
                    .sigma_guess(params[0])
                    .maybe_sample_size(params.get(1).copied())
                    .build();
                Ok(Self::Sd(prior))
            }
            "normal" | "n" => {
                Self::validate_param_count(&spec.name, params, 0, 2)?;
                let prior = NormalPrior::builder()
                    .maybe_mu(params.first().copied())
                    .maybe_sigma(params.get(1).copied())
                    .build();
                Ok(Self::Normal(prior))
            }
            "ar1" => {
                Self::validate_param_count(&spec.name, params, 0, 2)?;
                let prior = Ar1CoefficientPrior::builder()
                    .maybe_mu(params.first().copied())
                    .maybe_sigma(params.get(1).copied())
                    .build();
                Ok(Self::Ar1(prior))
            }
            "uniform" | "u" => {
                Self::validate_param_count(&spec.name, params, 2, 2)?;
                Ok(Self::Uniform(UniformPrior::new(params[0], params[1])))
            }
            "mvn" | "mvnprior" => Err(PriorError::Parse(
                "Multivariate normal priors have no short form, use the JSON representation"
                    .to_string(),
            )),
            _ => Err(PriorError::Parse(format!(
                "Unknown prior type: '{}'. Available: {}",
                spec.name,
                Self::AVAILABLE_PRIORS.join(", ")
            ))),
        }
    }

    fn validate_param_count(
        name: &str,
        params: &[f64],
        min: usize,
        max: usize,
    ) -> Result<(), PriorError> {
        if (min..=max).contains(&params.len()) {
            return Ok(());
        }

        let expected = if min == max {
            format!("exactly {min} parameter{}", if min == 1 { "" } else { "s" })
        } else {
            format!("between {min} and {max} parameters")
        };

        Err(PriorError::Parse(format!(
            "{name} prior requires {expected}, got {}",
            params.len()
        )))
    }
}

impl FromStr for PriorSpec {
    type Err = PriorError;

    /// Parses the short form, e.g. `"Sd(2.0, 10)"` or `"U(0, 1)"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = Self::parse_short_form(s)?;
        Self::from_parsed(spec)
    }
}

impl fmt::Display for PriorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorSpec::Sd(prior) => prior.fmt(f),
            PriorSpec::Normal(prior) => prior.fmt(f),
            PriorSpec::Ar1(prior) => prior.fmt(f),
            PriorSpec::Mvn(prior) => prior.fmt(f),
            PriorSpec::Uniform(prior) => prior.fmt(f),
        }
    }
}

impl From<SdPrior> for PriorSpec {
    fn from(prior: SdPrior) -> Self {
        Self::Sd(prior)
    }
}

impl From<NormalPrior> for PriorSpec {
    fn from(prior: NormalPrior) -> Self {
        Self::Normal(prior)
    }
}

impl From<Ar1CoefficientPrior> for PriorSpec {
    fn from(prior: Ar1CoefficientPrior) -> Self {
        Self::Ar1(prior)
    }
}

impl From<MvnPrior> for PriorSpec {
    fn from(prior: MvnPrior) -> Self {
        Self::Mvn(prior)
    }
}

impl From<UniformPrior> for PriorSpec {
    fn from(prior: UniformPrior) -> Self {
        Self::Uniform(prior)
    }
}
