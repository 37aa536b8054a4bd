//! Classifier simulation from a confusion matrix.
//!
//! [`FromCm`] turns truth labels into mock probabilistic classifications.
//! For an item of true class `t` it takes row `t` of the confusion matrix,
//! adds independent `Normal(0, σ)` noise to every entry, folds negative values
//! back with `abs`, and divides by the row sum:
//!
//! ```text
//! p_i = |CM[t_i] + ε_i| / Σ_j |CM[t_i, j] + ε_ij|,   ε_ij ~ N(0, σ²)
//! ```
//!
//! Each simulator owns its random stream, seeded at construction, so two
//! simulators built with the same seed produce the same predictions for the
//! same sequence of calls regardless of what else runs in the process.
//!
//! ```
//! use proclam_core::{Classifier, FromCm};
//!
//! let cm = vec![vec![0.9, 0.1], vec![0.2, 0.8]];
//! let mut sim = FromCm::new("CM", 42);
//! let pred = sim.classify(&cm, &[0, 1, 0], false).unwrap();
//! assert_eq!(pred.len(), 3);
//! for row in &pred {
//!     assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! }
//! ```

use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, StandardNormal};

use crate::classifier::{Classifier, class_count};
use crate::config::{DEFAULT_NOISE_STD, DEFAULT_SCHEME, SimulatorConfig};
use crate::error::{Result, SimulationError};

/// Simulates predicted classifications from truth values and a confusion matrix.
#[derive(Debug, Clone)]
pub struct FromCm {
    scheme: String,
    seed: u64,
    noise_std: f64,
    rng: StdRng,
}

impl FromCm {
    /// Create a simulator with the default noise level.
    pub fn new(scheme: impl Into<String>, seed: u64) -> Self {
        let scheme = scheme.into();
        debug!("FromCm '{scheme}': seed={seed}, noise_std={DEFAULT_NOISE_STD}");
        Self {
            scheme,
            seed,
            noise_std: DEFAULT_NOISE_STD,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build a simulator from a [`SimulatorConfig`].
    pub fn from_config(config: &SimulatorConfig) -> Result<Self> {
        Self::new(config.scheme.clone(), config.seed).with_noise_std(config.noise_std)
    }

    /// Replace the noise standard deviation. Zero disables the perturbation.
    ///
    /// Does not reseed the random stream.
    pub fn with_noise_std(mut self, noise_std: f64) -> Result<Self> {
        if !noise_std.is_finite() || noise_std < 0.0 {
            return Err(SimulationError::InvalidNoise { value: noise_std });
        }
        self.noise_std = noise_std;
        debug!("FromCm '{}': noise_std={noise_std}", self.scheme);
        Ok(self)
    }

    /// Standard deviation of the per-entry Gaussian noise.
    pub fn noise_std(&self) -> f64 {
        self.noise_std
    }

    /// Perturb one confusion-matrix row and project it onto the simplex.
    fn perturb_row(&mut self, base: &[f64], index: usize, label: usize) -> Result<Vec<f64>> {
        let mut row: Vec<f64> = base
            .iter()
            .map(|&p| {
                let eps: f64 = StandardNormal.sample(&mut self.rng);
                (p + self.noise_std * eps).abs()
            })
            .collect();

        let sum: f64 = row.iter().sum();
        if sum == 0.0 || !sum.is_finite() {
            return Err(SimulationError::DegenerateRow { index, label, sum });
        }
        for p in &mut row {
            *p /= sum;
        }
        Ok(row)
    }
}

impl Default for FromCm {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEME, 0)
    }
}

impl Classifier for FromCm {
    fn scheme(&self) -> &str {
        &self.scheme
    }

    fn seed(&self) -> u64 {
        self.seed
    }

    fn classify(
        &mut self,
        cm: &[Vec<f64>],
        truth: &[usize],
        other: bool,
    ) -> Result<Vec<Vec<f64>>> {
        debug!(
            "FromCm '{}': classifying {} item(s) against {} class(es){}",
            self.scheme,
            truth.len(),
            class_count(cm, other),
            if other { " incl. other" } else { "" }
        );

        let mut prediction = Vec::with_capacity(truth.len());
        for (index, &label) in truth.iter().enumerate() {
            let base = cm.get(label).ok_or(SimulationError::LabelOutOfRange {
                index,
                label,
                rows: cm.len(),
            })?;
            prediction.push(self.perturb_row(base, index, label)?);
        }

        trace!("FromCm '{}': produced {} row(s)", self.scheme, prediction.len());
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_class_cm() -> Vec<Vec<f64>> {
        vec![vec![0.9, 0.1], vec![0.2, 0.8]]
    }

    fn noiseless() -> FromCm {
        FromCm::default().with_noise_std(0.0).unwrap()
    }

    fn assert_rows_close(actual: &[Vec<f64>], expected: &[Vec<f64>]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert_eq!(a.len(), e.len());
            for (x, y) in a.iter().zip(e) {
                assert!((x - y).abs() < 1e-12, "{a:?} != {e:?}");
            }
        }
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn test_default_construction() {
        let sim = FromCm::default();
        assert_eq!(sim.scheme(), "CM");
        assert_eq!(sim.seed(), 0);
        assert_eq!(sim.noise_std(), DEFAULT_NOISE_STD);
    }

    #[test]
    fn test_from_config() {
        let cfg = SimulatorConfig {
            scheme: "tuned".to_string(),
            seed: 9,
            noise_std: 0.05,
        };
        let sim = FromCm::from_config(&cfg).unwrap();
        assert_eq!(sim.scheme(), "tuned");
        assert_eq!(sim.seed(), 9);
        assert_eq!(sim.noise_std(), 0.05);
    }

    #[test]
    fn test_rejects_bad_noise() {
        for bad in [-0.01, f64::NAN, f64::INFINITY] {
            let err = FromCm::default().with_noise_std(bad).unwrap_err();
            assert!(matches!(err, SimulationError::InvalidNoise { .. }));
        }
    }

    // -----------------------------------------------------------------------
    // Noiseless behavior
    // -----------------------------------------------------------------------

    #[test]
    fn test_noiseless_returns_cm_rows() {
        let pred = noiseless()
            .classify(&two_class_cm(), &[0, 1, 0], false)
            .unwrap();
        assert_rows_close(&pred, &[vec![0.9, 0.1], vec![0.2, 0.8], vec![0.9, 0.1]]);
    }

    #[test]
    fn test_noiseless_normalizes_rows() {
        let cm = vec![vec![2.0, 2.0, 4.0]];
        let pred = noiseless().classify(&cm, &[0], false).unwrap();
        assert_rows_close(&pred, &[vec![0.25, 0.25, 0.5]]);
    }

    #[test]
    fn test_negative_entries_are_folded() {
        let cm = vec![vec![-1.0, 3.0]];
        let pred = noiseless().classify(&cm, &[0], false).unwrap();
        assert_rows_close(&pred, &[vec![0.25, 0.75]]);
    }

    #[test]
    fn test_permuting_truth_permutes_rows() {
        let cm = vec![vec![0.7, 0.2, 0.1], vec![0.1, 0.8, 0.1], vec![0.0, 0.3, 0.7]];
        let a = noiseless().classify(&cm, &[0, 1, 2], false).unwrap();
        let b = noiseless().classify(&cm, &[2, 0, 1], false).unwrap();
        assert_rows_close(&b, &[a[2].clone(), a[0].clone(), a[1].clone()]);
    }

    // -----------------------------------------------------------------------
    // Other flag
    // -----------------------------------------------------------------------

    #[test]
    fn test_other_flag_keeps_shape() {
        let cm = two_class_cm();
        let with_other = FromCm::new("CM", 3).classify(&cm, &[0, 1], true).unwrap();
        let without = FromCm::new("CM", 3).classify(&cm, &[0, 1], false).unwrap();
        assert_eq!(with_other, without);
        assert!(with_other.iter().all(|row| row.len() == 2));
    }

    // -----------------------------------------------------------------------
    // Errors
    // -----------------------------------------------------------------------

    #[test]
    fn test_label_out_of_range() {
        let err = FromCm::default()
            .classify(&two_class_cm(), &[0, 2, 1], false)
            .unwrap_err();
        match err {
            SimulationError::LabelOutOfRange { index, label, rows } => {
                assert_eq!((index, label, rows), (1, 2, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_row_is_degenerate() {
        let cm = vec![vec![0.5, 0.5], vec![0.0, 0.0]];
        let err = noiseless().classify(&cm, &[0, 1], false).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::DegenerateRow {
                index: 1,
                label: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_nan_row_is_degenerate() {
        let cm = vec![vec![f64::NAN, 0.5]];
        let err = FromCm::default().classify(&cm, &[0], false).unwrap_err();
        assert!(matches!(err, SimulationError::DegenerateRow { .. }));
    }

    #[test]
    fn test_empty_truth() {
        let pred = FromCm::default()
            .classify(&two_class_cm(), &[], false)
            .unwrap();
        assert!(pred.is_empty());
    }

    // -----------------------------------------------------------------------
    // Noisy behavior
    // -----------------------------------------------------------------------

    #[test]
    fn test_rows_on_simplex() {
        let cm = vec![vec![1.0, 0.0, 0.0], vec![0.0, 0.5, 0.5], vec![0.3, 0.3, 0.4]];
        let truth: Vec<usize> = (0..300).map(|i| i % 3).collect();
        let pred = FromCm::new("CM", 11).classify(&cm, &truth, false).unwrap();
        assert_eq!(pred.len(), truth.len());
        for row in &pred {
            assert_eq!(row.len(), 3);
            assert!(row.iter().all(|&p| p >= 0.0));
            assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let cm = two_class_cm();
        let truth = [0, 1, 1, 0, 1];
        let a = FromCm::new("a", 5).classify(&cm, &truth, false).unwrap();
        let b = FromCm::new("b", 5).classify(&cm, &truth, false).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_stream_advances_between_calls() {
        let cm = two_class_cm();
        let mut sim = FromCm::new("CM", 5);
        let first = sim.classify(&cm, &[0, 1], false).unwrap();
        let second = sim.classify(&cm, &[0, 1], false).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_instances_do_not_interfere() {
        let cm = two_class_cm();
        let truth = [0, 1, 0];
        let expected = FromCm::new("CM", 8).classify(&cm, &truth, false).unwrap();

        let mut sim = FromCm::new("CM", 8);
        let mut bystander = FromCm::new("CM", 99);
        bystander.classify(&cm, &truth, false).unwrap();
        assert_eq!(sim.classify(&cm, &truth, false).unwrap(), expected);
    }
}
