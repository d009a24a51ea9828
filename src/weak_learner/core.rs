//! Provides the `WeakLearner` trait.
use crate::Sample;


/// An algorithm that takes a sample and a distribution over its examples
/// and produces a hypothesis performing slightly better
/// than random guessing with respect to that distribution.
pub trait WeakLearner {
    /// The hypothesis this weak learner returns.
    type Hypothesis;


    /// A name of this weak learner, used by loggers.
    fn name(&self) -> &str;


    /// Produce a hypothesis for the given `sample` and
    /// distribution `dist` over its examples.
    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis;
}
