//! # proclam-core
//!
//! **Mock classifier output for benchmarking classification metrics.**
//!
//! `proclam-core` simulates what a probabilistic classifier would have said
//! about a set of items, given their true classes and a confusion matrix
//! describing the classifier's per-class error profile. No model is trained;
//! each prediction is the confusion-matrix row of the item's true class with a
//! little Gaussian noise, renormalized onto the probability simplex.
//!
//! ## Quick Start
//!
//! ```
//! use proclam_core::{Classifier, FromCm};
//!
//! let cm = vec![vec![0.9, 0.1], vec![0.2, 0.8]];
//! let truth = [0, 1, 0];
//!
//! let mut sim = FromCm::new("CM", 0);
//! let prediction = sim.classify(&cm, &truth, false).unwrap();
//!
//! assert_eq!(prediction.len(), truth.len());
//! assert!(prediction.iter().all(|row| row.len() == 2));
//! ```
//!
//! Every simulator implements the [`Classifier`] trait. [`FromCm`] owns its
//! random stream, so results depend only on its seed and the calls made on it.

pub mod classifier;
pub mod config;
pub mod error;
pub mod from_cm;

pub use classifier::{Classifier, class_count};
pub use config::{DEFAULT_NOISE_STD, DEFAULT_SCHEME, SimulatorConfig};
pub use error::{Result, SimulationError};
pub use from_cm::FromCm;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
