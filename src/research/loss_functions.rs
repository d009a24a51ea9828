//! Defines loss functions for measuring classifiers.
use crate::{Classifier, Sample};


/// Fraction of examples in `sample` misclassified by `f`.
pub fn zero_one_loss<H>(sample: &Sample, f: &H) -> f64
    where H: Classifier,
{
    let n_sample = sample.shape().0 as f64;

    let target = sample.target();

    f.predict_all(sample)
        .into_iter()
        .zip(target)
        .map(|(hx, &y)| if hx != y as i64 { 1.0 } else { 0.0 })
        .sum::<f64>()
        / n_sample
}
