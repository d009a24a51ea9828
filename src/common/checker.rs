//! This file defines some functions that check some pre-conditions,
//! e.g., shape of data.
use crate::Sample;
use super::error::BoostError;


const SIMPLEX_TOLERANCE: f64 = 1e-9;


/// Check whether the given sample is a valid training sample
/// for binary classification.
/// Returns an error describing the violated invariant, if any.
#[inline]
pub(crate) fn check_binary_sample(sample: &Sample)
    -> Result<(), BoostError>
{
    let (n_sample, n_feature) = sample.shape();

    if n_sample == 0 || n_feature == 0 {
        return Err(BoostError::EmptySample);
    }

    let target = sample.target();
    if target.len() != n_sample {
        return Err(BoostError::TargetLength {
            expected: n_sample,
            got: target.len(),
        });
    }

    // Each label must be exactly `+1.0` or `-1.0`.
    for (index, &value) in target.iter().enumerate() {
        if value != 1.0 && value != -1.0 {
            return Err(BoostError::NonBinaryLabel { index, value });
        }
    }

    Ok(())
}


/// Check whether the given slice is a distribution
/// over the examples in `sample`.
/// Called on the booster-to-weak-learner boundary,
/// where a violation is a bug of the caller, not a user error.
#[inline(always)]
pub(crate) fn check_distribution(sample: &Sample, dist: &[f64]) {
    let n_sample = sample.shape().0;
    assert_eq!(
        n_sample, dist.len(),
        "the distribution length differs from the number of examples",
    );

    let sum = dist.iter().sum::<f64>();
    assert!(
        (sum - 1f64).abs() < SIMPLEX_TOLERANCE,
        "sum(dist[..]) = {sum}, not 1",
    );
    assert!(
        dist.iter().all(|d| *d >= 0f64),
        "dist[..] has a negative entry",
    );
}
