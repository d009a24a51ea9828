//! This file provides some common numeric functions.
use rayon::prelude::*;


/// Normalize the given slice so that `\| items \|_1 = 1`.
#[inline(always)]
pub(crate) fn normalize(items: &mut [f64]) {
    let z = items.iter()
        .map(|it| it.abs())
        .sum::<f64>();

    assert_ne!(z, 0.0);

    items.par_iter_mut()
        .for_each(|item| { *item /= z; });
}
