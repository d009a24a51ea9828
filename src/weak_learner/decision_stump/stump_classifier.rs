//! Defines the decision stump classifier.
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::{Classifier, Sample};


/// Which side of the threshold is classified as `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegativeSide {
    /// Values less than or equal to the threshold are classified as `-1`.
    Below,
    /// Values greater than the threshold are classified as `-1`.
    Above,
}


impl fmt::Display for NegativeSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Below => write!(f, "below"),
            Self::Above => write!(f, "above"),
        }
    }
}


/// A classifier that splits on a single feature
/// using one threshold and one direction.
/// Immutable once constructed by
/// [`DecisionStump`](crate::weak_learner::DecisionStump).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StumpClassifier {
    pub(super) feature_index: usize,
    pub(super) threshold: f64,
    pub(super) negative_side: NegativeSide,
}


impl StumpClassifier {
    /// Construct a new `StumpClassifier`.
    #[inline]
    pub(super) fn new(
        feature_index: usize,
        threshold: f64,
        negative_side: NegativeSide,
    ) -> Self
    {
        Self { feature_index, threshold, negative_side, }
    }


    /// The index of the feature this stump splits on.
    pub fn feature_index(&self) -> usize {
        self.feature_index
    }


    /// The threshold this stump splits at.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }


    /// The side of the threshold classified as `-1`.
    pub fn negative_side(&self) -> NegativeSide {
        self.negative_side
    }
}


impl Classifier for StumpClassifier {
    /// Evaluate the stump on the i'th example of `sample`.
    /// Panics if `self.feature_index` is out of range for `sample`,
    /// which is a bug of the caller.
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        let value = sample.features()[self.feature_index][row];

        match self.negative_side {
            NegativeSide::Below => {
                if value <= self.threshold { -1.0 } else { 1.0 }
            },
            NegativeSide::Above => {
                if value > self.threshold { -1.0 } else { 1.0 }
            },
        }
    }
}


impl fmt::Display for StumpClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stump [dim: {}, threshold: {}, negative side: {}]",
            self.feature_index, self.threshold, self.negative_side,
        )
    }
}
