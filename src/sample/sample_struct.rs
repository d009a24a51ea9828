use std::collections::HashMap;
use std::ops::Index;

use crate::common::{checker, error::BoostError};
use super::feature_struct::*;


/// Struct `Sample` holds a batch sample in a dense, column-major format.
///
/// A sample is an ordered set of examples,
/// where every example has the same number of real-valued features
/// and a target label.
/// A `Sample` is always constructed explicitly,
/// either from in-memory rows via [`Sample::from_rows`]
/// or from a CSV file via [`SampleReader`](crate::SampleReader).
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a `Sample` from row-major examples and their targets.
    ///
    /// Every row must have the same number of features,
    /// and `target` must have one label per row.
    /// Feature columns are named `Feat. [1]`, `Feat. [2]`, and so on.
    ///
    /// # Errors
    /// - [`BoostError::EmptySample`] if `rows` is empty
    ///   or the rows have no features.
    /// - [`BoostError::RaggedRow`] if some row has a different
    ///   number of features than the first one.
    /// - [`BoostError::TargetLength`] if `target.len() != rows.len()`.
    pub fn from_rows(rows: Vec<Vec<f64>>, target: Vec<f64>)
        -> Result<Self, BoostError>
    {
        let n_sample = rows.len();
        if n_sample == 0 {
            return Err(BoostError::EmptySample);
        }

        let n_feature = rows[0].len();
        if n_feature == 0 {
            return Err(BoostError::EmptySample);
        }

        if target.len() != n_sample {
            return Err(BoostError::TargetLength {
                expected: n_sample,
                got: target.len(),
            });
        }

        let mut features = (1..=n_feature)
            .map(|i| Feature::new(format!("Feat. [{i}]")))
            .collect::<Vec<_>>();

        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != n_feature {
                return Err(BoostError::RaggedRow {
                    index,
                    expected: n_feature,
                    got: row.len(),
                });
            }
            for (feat, x) in features.iter_mut().zip(row) {
                feat.append(x);
            }
        }

        Ok(Self::from_parts(features, target))
    }


    /// Build a `Sample` from already-validated columns.
    pub(crate) fn from_parts(features: Vec<Feature>, target: Vec<f64>)
        -> Self
    {
        let n_sample = features.first().map(Feature::len).unwrap_or(0);
        let n_feature = features.len();

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Self { name_to_index, features, target, n_sample, n_feature, }
    }


    /// Returns the target labels as a slice.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns the feature columns as a slice.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    ///
    /// # Errors
    /// [`BoostError::NoSuchFeature`] if no feature is named `target`.
    pub fn set_target<S: AsRef<str>>(mut self, target: S)
        -> Result<Self, BoostError>
    {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .ok_or_else(|| BoostError::NoSuchFeature(target.to_string()))?;

        self.target = self.features.remove(pos).into_target();
        self.n_feature -= 1;

        self.name_to_index = self.features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        Ok(self)
    }


    /// Returns the pair of the number of examples and
    /// the number of features.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the `idx`-th example `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target[idx];

        (x, y)
    }


    /// Check whether `self` is
    /// a training set for binary classification or not.
    ///
    /// # Errors
    /// A [`BoostError`] naming the violated invariant:
    /// an empty sample, a target column of the wrong length,
    /// or a label outside `{-1.0, +1.0}`.
    pub fn is_valid_binary_instance(&self) -> Result<(), BoostError> {
        checker::check_binary_sample(self)
    }


    /// Returns a copy of `self` restricted to the rows in `ix`,
    /// keeping the order of `ix`.
    pub(crate) fn subsample(&self, ix: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| feat.subsample(ix))
            .collect::<Vec<_>>();
        let target = ix.iter()
            .map(|&i| self.target[i])
            .collect::<Vec<_>>();

        Self::from_parts(features, target)
    }
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name)
            .unwrap_or_else(|| panic!("no feature named `{name}`"));
        &self.features[k]
    }
}
