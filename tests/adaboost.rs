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


/// Tests for `AdaBoost`.
#[cfg(test)]
pub mod adaboost_tests {
    use super::*;

    #[test]
    fn toy_sample_is_boosted_to_zero_training_error() {
        let sample = toy_sample();

        let mut booster = AdaBoost::init(&sample).max_rounds(40);
        let weak_learner = DecisionStump::new();

        let f = booster.run(&weak_learner).unwrap();

        // This dataset is not separable by a single stump,
        // but a few boosting rounds separate it.
        assert_eq!(booster.training_error(), 0.0);
        assert!(booster.terminated_at() <= 5);

        // Training halts immediately at zero error,
        // so the ensemble is much shorter than `max_rounds`.
        assert_eq!(f.len(), booster.terminated_at());
        assert!(f.len() > 1);
        assert!(f.len() < 40);

        // The combined hypothesis reproduces the training labels.
        let target = sample.target();
        let predictions = f.predict_all(&sample);
        for (p, y) in predictions.iter().zip(target) {
            assert_eq!(*p as f64, *y);
        }
    }


    #[test]
    fn scores_sign_matches_predictions() {
        let sample = toy_sample();

        let mut booster = AdaBoost::init(&sample).max_rounds(40);
        let weak_learner = DecisionStump::new();
        let f = booster.run(&weak_learner).unwrap();

        // The cumulative votes kept by the booster and
        // the prediction of the returned ensemble must agree,
        // including the `sign(0) == +1` convention.
        let predictions = f.predict_all(&sample);
        for (score, p) in booster.scores().iter().zip(predictions) {
            let sign = if *score >= 0.0 { 1 } else { -1 };
            assert_eq!(sign, p);
        }
    }


    #[test]
    fn prediction_is_idempotent() {
        let sample = toy_sample();

        let mut booster = AdaBoost::init(&sample).max_rounds(40);
        let weak_learner = DecisionStump::new();
        let f = booster.run(&weak_learner).unwrap();

        assert_eq!(f.predict_all(&sample), f.predict_all(&sample));
        assert_eq!(f.confidence_all(&sample), f.confidence_all(&sample));
    }


    #[test]
    fn identical_labels_halt_after_one_round() {
        let rows = vec![
            vec![1.0, 2.1],
            vec![1.5, 1.6],
            vec![1.3, 1.0],
        ];
        let target = vec![1.0, 1.0, 1.0];
        let sample = Sample::from_rows(rows, target).unwrap();

        let mut booster = AdaBoost::init(&sample).max_rounds(40);
        let weak_learner = DecisionStump::new();
        let f = booster.run(&weak_learner).unwrap();

        // A single stump suffices, so training stops after round 1.
        assert_eq!(f.len(), 1);
        assert_eq!(booster.terminated_at(), 1);
        assert_eq!(booster.training_error(), 0.0);

        // The zero weighted error is floored,
        // so the hypothesis weight is large but finite.
        assert!(f.weights[0].is_finite());
        assert!(f.weights[0] > 0.0);

        assert_eq!(f.predict_all(&sample), vec![1, 1, 1]);
    }


    #[test]
    fn max_rounds_bounds_the_ensemble_length() {
        let sample = toy_sample();

        let mut booster = AdaBoost::init(&sample).max_rounds(1);
        let weak_learner = DecisionStump::new();
        let f = booster.run(&weak_learner).unwrap();

        assert_eq!(f.len(), 1);
        // One stump cannot separate this dataset.
        assert!(booster.training_error() > 0.0);
    }


    #[test]
    fn non_binary_label_aborts_training() {
        let rows = vec![vec![1.0, 2.1], vec![1.5, 1.6]];
        let target = vec![1.0, 2.0];
        let sample = Sample::from_rows(rows, target).unwrap();

        let mut booster = AdaBoost::init(&sample);
        let weak_learner = DecisionStump::new();

        let err = booster.run(&weak_learner);
        assert!(matches!(
            err,
            Err(BoostError::NonBinaryLabel { index: 1, .. })
        ));
    }


    #[test]
    fn ensemble_roundtrips_as_json() {
        let sample = toy_sample();

        let mut booster = AdaBoost::init(&sample).max_rounds(40);
        let weak_learner = DecisionStump::new();
        let f = booster.run(&weak_learner).unwrap();

        let json = serde_json::to_string(&f).unwrap();
        let g: WeightedMajority<StumpClassifier> =
            serde_json::from_str(&json).unwrap();

        assert_eq!(f, g);
        assert_eq!(f.predict_all(&sample), g.predict_all(&sample));
    }
}
