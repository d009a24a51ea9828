//! Defines the decision stump weak learner.
use std::fmt;

use crate::{Classifier, Sample, WeakLearner};
use crate::common::checker;

use super::stump_classifier::{
    NegativeSide,
    StumpClassifier,
};


/// The number of steps the threshold grid cuts each feature range into.
pub const DEFAULT_NUM_STEPS: usize = 10;


/// The decision stump weak learner.
/// Given a sample and a distribution over its examples,
/// [`DecisionStump`] searches over feature dimensions, thresholds,
/// and directions for the single-feature threshold rule
/// ([`StumpClassifier`]) that minimizes the weighted classification error.
///
/// The threshold candidates form a grid:
/// for each feature, the observed `min..max` range is cut into
/// `n_steps` equal steps, and thresholds are placed at every step
/// boundary from one step below the range to one step above it.
/// The search is exhaustive over this grid.
///
/// # Example
/// ```no_run
/// use stumpboost::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let n_sample = sample.shape().0;
/// let dist = vec![1.0 / n_sample as f64; n_sample];
///
/// let stump = DecisionStump::new();
/// let h = stump.produce(&sample, &dist);
///
/// let predictions = h.predict_all(&sample);
/// ```
pub struct DecisionStump {
    n_steps: usize,
    verbose: bool,
}


impl Default for DecisionStump {
    fn default() -> Self {
        Self::new()
    }
}


impl DecisionStump {
    /// Construct a new instance of `DecisionStump`
    /// with the default grid of [`DEFAULT_NUM_STEPS`] steps.
    pub fn new() -> Self {
        Self { n_steps: DEFAULT_NUM_STEPS, verbose: false, }
    }


    /// Set the number of steps of the threshold grid.
    /// Default value is `10`.
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        assert!(n_steps > 0, "the threshold grid must have a step");
        self.n_steps = n_steps;
        self
    }


    /// Print the weighted error of every candidate rule while searching.
    /// Default is `false`.
    pub fn verbose(mut self, flag: bool) -> Self {
        self.verbose = flag;
        self
    }


    /// Search the grid for the best stump.
    /// Returns the stump minimizing the weighted error,
    /// together with that error and its prediction vector.
    /// Ties keep the first candidate found, in the fixed search order:
    /// dimension ascending, threshold ascending,
    /// [`NegativeSide::Below`] before [`NegativeSide::Above`].
    ///
    /// `dist` must be a distribution
    /// over the examples of `sample`.
    pub fn search(&self, sample: &Sample, dist: &[f64])
        -> (StumpClassifier, f64, Vec<f64>)
    {
        checker::check_distribution(sample, dist);

        let target = sample.target();

        let mut best: Option<(StumpClassifier, f64, Vec<f64>)> = None;

        for (dim, feature) in sample.features().iter().enumerate() {
            let (range_min, range_max) = feature.range();
            let step = (range_max - range_min) / self.n_steps as f64;

            for j in -1..=(self.n_steps as i64) {
                let threshold = range_min + j as f64 * step;

                for side in [NegativeSide::Below, NegativeSide::Above] {
                    let h = StumpClassifier::new(dim, threshold, side);

                    let predictions = h.confidence_all(sample);

                    // Weighted error: total mass of misclassified examples.
                    let error = predictions.iter()
                        .zip(target)
                        .zip(dist)
                        .map(|((hx, y), d)| if hx == y { 0.0 } else { *d })
                        .sum::<f64>();

                    if self.verbose {
                        println!(
                            "split: dim {dim}, threshold {threshold:.2}, \
                             negative side {side}, weighted error {error:.3}"
                        );
                    }

                    let improved = best.as_ref()
                        .map(|(_, best_error, _)| error < *best_error)
                        .unwrap_or(true);
                    if improved {
                        best = Some((h, error, predictions));
                    }
                }
            }
        }

        // `check_distribution` guarantees a non-empty sample,
        // so the grid has at least one candidate.
        best.expect("the sample has no feature to split on")
    }
}


impl WeakLearner for DecisionStump {
    type Hypothesis = StumpClassifier;


    fn name(&self) -> &str {
        "DecisionStump"
    }


    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis {
        self.search(sample, dist).0
    }
}


impl fmt::Display for DecisionStump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "----------\n\
             # Decision Stump Weak Learner\n\n\
             - Number of threshold grid steps: {}\n\
             ----------",
            self.n_steps,
        )
    }
}
