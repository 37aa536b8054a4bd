//! Shared classifier-simulator trait.
//!
//! Every simulated classifier implements [`Classifier`]: it carries a scheme
//! name and a seed, and turns truth labels plus a confusion matrix into one
//! predicted probability vector per item.

use crate::error::Result;

/// Trait that every classifier simulator must implement.
pub trait Classifier: Send {
    /// Name of the simulated classifier configuration.
    fn scheme(&self) -> &str;

    /// Seed the simulator's random stream was initialized with.
    fn seed(&self) -> u64;

    /// Simulate predictions for `truth` using the rows of `cm`.
    ///
    /// Returns one row per truth label, in the same order. `other` reserves a
    /// conceptual "other" class; see [`class_count`].
    fn classify(&mut self, cm: &[Vec<f64>], truth: &[usize], other: bool)
    -> Result<Vec<Vec<f64>>>;
}

/// Number of classes a confusion matrix describes, counting the optional
/// "other" bucket.
///
/// This is bookkeeping only. Predictions keep the column count of `cm`
/// whether or not `other` is set.
pub fn class_count(cm: &[Vec<f64>], other: bool) -> usize {
    cm.len() + usize::from(other)
}
