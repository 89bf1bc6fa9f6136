//! Tests for converting and persisting prior specifications.
//!
//! The first group checks, with a factory that records its arguments, that every
//! prior forwards exactly its stored hyperparameters. The remaining tests convert
//! priors with the `statrs` factory and round-trip collections through JSON files.

#[cfg(test)]
mod test_priors {
    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use bayes_priors::prelude::*;
    use ndarray::{array, Array1, Array2, ArrayView1, ArrayView2};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    /// Arguments a factory constructor was called with.
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Chisq { df: f64, sigma_guess: f64 },
        Gaussian { mu: f64, sigma: f64 },
        Mvn { mu: Vec<f64>, sigma: Vec<Vec<f64>> },
        Uniform { lo: f64, hi: f64 },
    }

    /// Factory whose "models" are the arguments it received.
    struct RecordingFactory;

    impl ModelFactory for RecordingFactory {
        type Chisq = Call;
        type Gaussian = Call;
        type Mvn = Call;
        type Uniform = Call;
        type Error = Infallible;

        fn chisq_model(&self, df: f64, sigma_guess: f64) -> Result<Call, Infallible> {
            Ok(Call::Chisq { df, sigma_guess })
        }

        fn gaussian_model(&self, mu: f64, sigma: f64) -> Result<Call, Infallible> {
            Ok(Call::Gaussian { mu, sigma })
        }

        fn mvn_model(
            &self,
            mu: ArrayView1<f64>,
            sigma: ArrayView2<f64>,
        ) -> Result<Call, Infallible> {
            Ok(Call::Mvn {
                mu: mu.to_vec(),
                sigma: sigma.rows().into_iter().map(|row| row.to_vec()).collect(),
            })
        }

        fn uniform_model(&self, lo: f64, hi: f64) -> Result<Call, Infallible> {
            Ok(Call::Uniform { lo, hi })
        }
    }

    #[test]
    fn test_sd_prior_forwards_sample_size_and_guess() {
        // ARRANGE
        let prior = SdPrior::builder()
            .sigma_guess(2.0)
            .sample_size(10.0)
            .upper_limit(5.0)
            .fixed(true)
            .build();

        // ACT
        let call = prior.to_model(&RecordingFactory).unwrap();

        // ASSERT
        assert_eq!(
            call,
            Call::Chisq {
                df: 10.0,
                sigma_guess: 2.0
            }
        );
    }

    #[test]
    fn test_normal_prior_forwards_mu_and_sigma() {
        let prior = NormalPrior::builder()
            .mu(-1.0)
            .sigma(0.5)
            .initial_value(3.0)
            .build();
        let call = prior.to_model(&RecordingFactory).unwrap();
        assert_eq!(call, Call::Gaussian { mu: -1.0, sigma: 0.5 });
    }

    #[test]
    fn test_ar1_prior_drops_truncation_flags() {
        let stationary = Ar1CoefficientPrior::builder()
            .mu(0.5)
            .sigma(0.2)
            .force_stationary(true)
            .force_positive(true)
            .build();
        let unrestricted = Ar1CoefficientPrior::builder()
            .mu(0.5)
            .sigma(0.2)
            .force_stationary(false)
            .build();

        let expected = Call::Gaussian { mu: 0.5, sigma: 0.2 };
        assert_eq!(stationary.to_model(&RecordingFactory).unwrap(), expected);
        assert_eq!(unrestricted.to_model(&RecordingFactory).unwrap(), expected);
    }

    #[test]
    fn test_mvn_prior_forwards_vector_and_matrix() {
        let prior = MvnPrior::new(array![1.0, 2.0], array![[1.0, 0.3], [0.3, 2.0]]).unwrap();
        let call = prior.to_model(&RecordingFactory).unwrap();
        assert_eq!(
            call,
            Call::Mvn {
                mu: vec![1.0, 2.0],
                sigma: vec![vec![1.0, 0.3], vec![0.3, 2.0]],
            }
        );
    }

    #[test]
    fn test_uniform_prior_forwards_ordered_bounds() {
        let prior = UniformPrior::new(5.0, 2.0);
        let call = prior.to_model(&RecordingFactory).unwrap();
        assert_eq!(call, Call::Uniform { lo: 2.0, hi: 5.0 });
    }

    #[test]
    fn test_prior_spec_dispatch() {
        let spec: PriorSpec = "Ar1(0.9, 0.1)".parse().unwrap();
        match spec.to_model(&RecordingFactory).unwrap() {
            Model::Gaussian(call) => assert_eq!(call, Call::Gaussian { mu: 0.9, sigma: 0.1 }),
            other => panic!("Expected a Gaussian model, got {other:?}"),
        }

        let spec: PriorSpec = "Sd(1.5)".parse().unwrap();
        let model = spec.to_model(&RecordingFactory).unwrap();
        assert_eq!(model.kind(), "ChisqModel");
    }

    #[test]
    fn test_statrs_conversion_of_every_prior() {
        // ARRANGE
        let sd = SdPrior::builder().sigma_guess(2.0).sample_size(10.0).build();
        let normal = NormalPrior::builder().mu(2.0).sigma(3.0).build();
        let ar1 = Ar1CoefficientPrior::default();
        let mvn = MvnPrior::new(Array1::zeros(3), Array2::eye(3)).unwrap();
        let uniform = UniformPrior::new(1.0, -1.0);

        // ACT
        let chisq = sd.to_model(&StatrsFactory).unwrap();
        let gaussian = normal.to_model(&StatrsFactory).unwrap();
        let ar1_model = ar1.to_model(&StatrsFactory).unwrap();
        let mvn_model = mvn.to_model(&StatrsFactory).unwrap();
        let uniform_model = uniform.to_model(&StatrsFactory).unwrap();

        // ASSERT
        assert_relative_eq!(chisq.sum_of_squares(), sd.sum_of_squares());
        assert_eq!(gaussian.variance(), normal.variance());
        assert_eq!(ar1_model.mu(), 0.0);
        assert_eq!(ar1_model.sigma(), 1.0);
        assert_eq!(mvn_model.dim(), 3);
        assert_eq!(uniform_model.lo(), -1.0);
        assert_eq!(uniform_model.hi(), 1.0);
    }

    #[test]
    fn test_invalid_hyperparameters_surface_in_the_factory() {
        // The prior accepts a negative sigma, the model does not
        let prior = NormalPrior::builder().sigma(-2.0).build();
        assert_eq!(prior.sd(), -2.0);

        let result = prior.to_model(&StatrsFactory);
        assert!(matches!(result, Err(ModelError::Gaussian { .. })));

        let spec: PriorSpec = "Sd(1.0, -2)".parse().unwrap();
        assert!(spec.to_model(&StatrsFactory).is_err());
    }

    #[test]
    fn test_save_and_load_collection() {
        // ARRANGE
        let dir = tempdir().unwrap();
        let path = dir.path().join("priors.json");

        let mut priors = PriorCollection::new();
        priors.insert(
            "sigma_obs".into(),
            SdPrior::builder().sigma_guess(0.5).sample_size(4.0).build().into(),
        );
        priors.insert(
            "level".into(),
            NormalPrior::builder().mu(10.0).sigma(5.0).build().into(),
        );
        priors.insert("phi".into(), Ar1CoefficientPrior::default().into());
        priors.insert(
            "beta".into(),
            MvnPrior::new(array![0.0, 0.0], array![[1.0, 0.0], [0.0, 1.0]])
                .unwrap()
                .into(),
        );
        priors.insert("weight".into(), UniformPrior::new(0.0, 1.0).into());

        // ACT
        save_priors(&path, &priors).unwrap();
        let loaded = load_priors(&path).unwrap();

        // ASSERT
        assert_eq!(loaded, priors);
        assert_eq!(
            loaded.keys().cloned().collect::<Vec<_>>(),
            vec!["beta", "level", "phi", "sigma_obs", "weight"]
        );
    }

    #[test]
    fn test_save_and_load_non_finite_hyperparameters() {
        // ARRANGE
        let dir = tempdir().unwrap();
        let path = dir.path().join("priors.json");

        let mut priors = PriorCollection::new();
        priors.insert(
            "sigma_obs".into(),
            SdPrior::builder()
                .sigma_guess(1.0)
                .upper_limit(f64::NEG_INFINITY)
                .build()
                .into(),
        );
        priors.insert(
            "level".into(),
            NormalPrior::builder().sigma(f64::INFINITY).build().into(),
        );
        priors.insert(
            "weight".into(),
            UniformPrior::new(f64::NEG_INFINITY, 0.0).into(),
        );
        priors.insert(
            "beta".into(),
            MvnPrior::new(array![f64::INFINITY], array![[1.0]])
                .unwrap()
                .into(),
        );

        // ACT
        save_priors(&path, &priors).unwrap();
        let loaded = load_priors(&path).unwrap();

        // ASSERT
        assert_eq!(loaded, priors);
        match &loaded["sigma_obs"] {
            PriorSpec::Sd(prior) => assert_eq!(prior.upper_limit(), f64::NEG_INFINITY),
            other => panic!("Expected an Sd prior, got {other:?}"),
        }
    }

    #[test]
    fn test_save_into_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("priors.json");

        let result = save_priors(&path, &PriorCollection::new());
        assert!(matches!(result, Err(IOError::FileWriteError(_))));
    }

    #[test]
    fn test_load_rejects_invalid_mvn_payload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("priors.json");
        std::fs::write(
            &path,
            r#"{"beta": {"type": "mvn", "params": {"mu": [0.0], "sigma": [[1.0, 0.0], [0.0, 1.0]]}}}"#,
        )
        .unwrap();

        let result = load_priors(&path);
        assert!(matches!(result, Err(IOError::JsonParseError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_priors(dir.path().join("missing.json"));
        assert!(matches!(result, Err(IOError::FileNotFound(_))));
    }
}
