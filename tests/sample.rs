use std::env;

use stumpboost::prelude::*;


fn toy_rows() -> (Vec<Vec<f64>>, Vec<f64>) {
    let rows = vec![
        vec![1.0, 2.1],
        vec![1.5, 1.6],
        vec![1.3, 1.0],
        vec![1.0, 1.0],
        vec![2.0, 1.0],
    ];
    let target = vec![1.0, 1.0, -1.0, -1.0, 1.0];
    (rows, target)
}


#[test]
fn from_rows_builds_the_expected_shape() {
    let (rows, target) = toy_rows();
    let sample = Sample::from_rows(rows, target).unwrap();

    assert_eq!(sample.shape(), (5, 2));
    assert_eq!(sample.target(), &[1.0, 1.0, -1.0, -1.0, 1.0]);
    assert_eq!(sample.at(2), (vec![1.3, 1.0], -1.0));
    assert!(sample.is_valid_binary_instance().is_ok());
}


#[test]
fn empty_rows_are_rejected() {
    let err = Sample::from_rows(Vec::new(), Vec::new());
    assert!(matches!(err, Err(BoostError::EmptySample)));
}


#[test]
fn ragged_rows_are_rejected() {
    let rows = vec![vec![1.0, 2.0], vec![1.0]];
    let target = vec![1.0, -1.0];

    let err = Sample::from_rows(rows, target);
    assert!(matches!(
        err,
        Err(BoostError::RaggedRow { index: 1, expected: 2, got: 1 })
    ));
}


#[test]
fn target_length_mismatch_is_rejected() {
    let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    let target = vec![1.0];

    let err = Sample::from_rows(rows, target);
    assert!(matches!(
        err,
        Err(BoostError::TargetLength { expected: 2, got: 1 })
    ));
}


#[test]
fn csv_reader_agrees_with_from_rows() {
    let mut path = env::current_dir().unwrap();
    path.push("tests/dataset/toy.csv");

    let from_csv = SampleReader::new()
        .file(path)
        .has_header(true)
        .target_feature("class")
        .read()
        .unwrap();

    let (rows, target) = toy_rows();
    let from_rows = Sample::from_rows(rows, target).unwrap();

    assert_eq!(from_csv.shape(), from_rows.shape());
    assert_eq!(from_csv.target(), from_rows.target());

    let n_sample = from_csv.shape().0;
    for i in 0..n_sample {
        assert_eq!(from_csv.at(i).0, from_rows.at(i).0);
    }

    // Named column access survives the target extraction.
    assert_eq!(from_csv["x0"].name(), "x0");
    assert_eq!(from_csv["x1"][0], 2.1);
}


#[test]
fn missing_target_column_is_rejected() {
    let mut path = env::current_dir().unwrap();
    path.push("tests/dataset/toy.csv");

    let err = SampleReader::new()
        .file(path)
        .has_header(true)
        .target_feature("no-such-column")
        .read();

    assert!(matches!(err, Err(BoostError::NoSuchFeature(_))));
}
