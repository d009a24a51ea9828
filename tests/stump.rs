use stumpboost::prelude::*;


fn toy_sample() -> Sample {
    let rows = vec![
        vec![1.0, 2.1],
        vec![1.5, 1.6],
        vec![1.3, 1.0],
        vec![1.0, 1.0],
        vec![2.0, 1.0],
    ];
    let target = vec![1.0, 1.0, -1.0, -1.0, 1.0];
    Sample::from_rows(rows, target).unwrap()
}


/// Tests for `DecisionStump`.
#[cfg(test)]
pub mod decision_stump_tests {
    use super::*;

    #[test]
    fn best_stump_under_uniform_distribution() {
        let sample = toy_sample();
        let n_sample = sample.shape().0;
        let dist = vec![1.0 / n_sample as f64; n_sample];

        let stump = DecisionStump::new();
        let (h, error, predictions) = stump.search(&sample, &dist);

        // The hand-computed optimum for this dataset:
        // split the first feature at 1.3,
        // classifying values below the threshold as -1.
        assert_eq!(h.feature_index(), 0);
        assert!((h.threshold() - 1.3).abs() < 1e-9);
        assert_eq!(h.negative_side(), NegativeSide::Below);
        assert!((error - 0.2).abs() < 1e-9);

        // The best stump misclassifies exactly one example:
        // the first one (x0 = 1.0, y = +1).
        assert_eq!(predictions, vec![-1.0, 1.0, -1.0, -1.0, 1.0]);
    }


    #[test]
    fn search_respects_the_distribution() {
        let sample = toy_sample();

        // Put almost all mass on the first example.
        // The best stump must classify it correctly now.
        let dist = vec![0.8, 0.05, 0.05, 0.05, 0.05];

        let stump = DecisionStump::new();
        let (h, error, _) = stump.search(&sample, &dist);

        assert_eq!(h.predict(&sample, 0), 1);
        assert!(error < 0.2);
    }


    #[test]
    fn direction_semantics() {
        let rows = vec![vec![0.0], vec![1.0], vec![2.0]];
        let target = vec![-1.0, -1.0, 1.0];
        let sample = Sample::from_rows(rows, target).unwrap();

        let dist = vec![1.0 / 3.0; 3];
        let stump = DecisionStump::new();
        let (h, error, predictions) = stump.search(&sample, &dist);

        // Values at the threshold go to the negative side
        // under `Below`.
        assert_eq!(h.negative_side(), NegativeSide::Below);
        assert_eq!(error, 0.0);
        assert_eq!(predictions, vec![-1.0, -1.0, 1.0]);
        assert!(h.threshold() >= 1.0 && h.threshold() < 2.0);
    }


    #[test]
    fn produce_returns_the_searched_stump() {
        let sample = toy_sample();
        let n_sample = sample.shape().0;
        let dist = vec![1.0 / n_sample as f64; n_sample];

        let stump = DecisionStump::new();
        let h = stump.produce(&sample, &dist);
        let (searched, _, _) = stump.search(&sample, &dist);

        assert_eq!(h, searched);
    }


    #[test]
    fn coarser_grid_still_finds_a_split() {
        let sample = toy_sample();
        let n_sample = sample.shape().0;
        let dist = vec![1.0 / n_sample as f64; n_sample];

        let stump = DecisionStump::new().n_steps(2);
        let (_, error, _) = stump.search(&sample, &dist);

        // A valid stump is always returned,
        // even if the coarse grid misses the optimum.
        assert!(error < 0.5);
    }
}
