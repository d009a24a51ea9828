use std::ops::Index;


/// Dense representation of a feature (a column of the sample).
#[derive(Debug, Clone)]
pub struct Feature {
    /// Feature name
    name: String,
    /// Feature values, one per example.
    values: Vec<f64>,
}


impl Feature {
    /// Construct an empty feature of the given name.
    pub(crate) fn new<T: ToString>(name: T) -> Self {
        Self { name: name.to_string(), values: Vec::new(), }
    }


    /// Get the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if the number of items is equal to `0`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }


    /// Append a value to this feature.
    pub(crate) fn append(&mut self, value: f64) {
        self.values.push(value);
    }


    /// Returns the observed `(min, max)` of this feature.
    pub fn range(&self) -> (f64, f64) {
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        self.values.iter()
            .copied()
            .for_each(|val| {
                min = min.min(val);
                max = max.max(val);
            });
        (min, max)
    }


    /// Turn this feature into a target column.
    pub(crate) fn into_target(self) -> Vec<f64> {
        self.values
    }


    /// Returns a copy of this feature restricted to
    /// the rows in `ix`, keeping the order of `ix`.
    pub(crate) fn subsample(&self, ix: &[usize]) -> Self {
        let values = ix.iter()
            .map(|&i| self.values[i])
            .collect::<Vec<_>>();
        Self { name: self.name.clone(), values, }
    }
}


impl Index<usize> for Feature {
    type Output = f64;


    fn index(&self, row: usize) -> &Self::Output {
        &self.values[row]
    }
}
