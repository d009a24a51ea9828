//! Defines objective functions of boosting algorithms.
use crate::{Classifier, Sample};


/// A trait that defines the objective value
/// a boosting algorithm minimizes.
pub trait ObjectiveFunction<H> {
    /// The name of the objective function, used by loggers.
    fn name(&self) -> &str;


    /// Evaluate the objective value of `f` over `sample`.
    fn eval(&self, sample: &Sample, f: &H) -> f64;
}


/// The exponential loss
/// `(1/m) * sum( exp( - y f(x) ) )`,
/// the objective AdaBoost greedily minimizes.
pub struct ExponentialLoss;


impl<H> ObjectiveFunction<H> for ExponentialLoss
    where H: Classifier,
{
    fn name(&self) -> &str {
        "Exponential Loss"
    }


    fn eval(&self, sample: &Sample, f: &H) -> f64 {
        let n_sample = sample.shape().0 as f64;
        let target = sample.target();

        target.iter()
            .enumerate()
            .map(|(i, y)| (- y * f.confidence(sample, i)).exp())
            .sum::<f64>()
            / n_sample
    }
}
