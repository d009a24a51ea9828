use serde::{Serialize, Deserialize};
use crate::{Classifier, Sample};


/// A weighted majority vote over base hypotheses.
/// This is the struct the boosting algorithm in this library returns:
/// an ordered sequence of `(weight, hypothesis)` pairs,
/// append-only during training and read-only at prediction time.
/// You can read/write this struct by the `Serde` traits.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeightedMajority<H> {
    /// Weights on each hypothesis in `self.hypotheses`.
    /// A weight may be negative
    /// if the corresponding hypothesis is worse than random guessing.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
}


impl<H: Clone> WeightedMajority<H> {
    /// Construct a new `WeightedMajority` from the given slices.
    /// The pairs keep the given order.
    #[inline]
    pub fn from_slices(weights: &[f64], hypotheses: &[H]) -> Self {
        assert_eq!(weights.len(), hypotheses.len());
        Self {
            weights: weights.to_vec(),
            hypotheses: hypotheses.to_vec(),
        }
    }
}

impl<H> WeightedMajority<H> {
    /// Append a pair `(weight, hypothesis)`
    /// to the current combined hypothesis.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Returns the number of base hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if no hypothesis is combined yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Decompose the combined hypothesis
    /// into the two vectors `Vec<f64>` and `Vec<H>`.
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<H> Classifier for WeightedMajority<H>
    where H: Classifier,
{
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        self.weights.iter()
            .zip(&self.hypotheses[..])
            .map(|(w, h)| *w * h.confidence(sample, row))
            .sum::<f64>()
    }
}
