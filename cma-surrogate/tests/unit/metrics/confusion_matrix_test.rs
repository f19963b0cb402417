use super::*;
use proptest::prelude::*;

fn create_matrix(pairs: &[(bool, bool)]) -> ConfusionMatrix {
    ConfusionMatrix::new(pairs.iter().copied())
}

#[test]
fn can_count_each_outcome_once() {
    let matrix = create_matrix(&[(true, true), (true, false), (false, true), (false, false)]);

    assert_eq!(matrix, ConfusionMatrix { tp: 1, fp: 1, tn: 1, fn_: 1 });
    assert_eq!(matrix.as_matrix(), [[1, 1], [1, 1]]);
    assert_eq!(matrix.total(), 4);
}

parameterized_test! {can_calculate_prediction_accuracy, (pairs, expected_ppa, expected_npa), {
    let matrix = create_matrix(pairs);

    assert!((matrix.positive_prediction_accuracy() - expected_ppa).abs() < 1e-12);
    assert!((matrix.negative_prediction_accuracy() - expected_npa).abs() < 1e-12);
}}

can_calculate_prediction_accuracy! {
    case01_empty: (&[] as &[(bool, bool)], 0., 0.),
    case02_mixed: (&[(true, true), (true, true), (true, false), (false, false), (false, true)], 2. / 3., 0.5),
    case03_only_positives: (&[(true, true), (true, false)], 0.5, 0.),
    case04_only_negatives: (&[(false, false), (false, false), (false, true)], 0., 2. / 3.),
}

parameterized_test! {can_calculate_mcc, (pairs, expected), {
    let matrix = create_matrix(pairs);

    assert!((matrix.mcc().unwrap() - expected).abs() < 1e-12);
}}

can_calculate_mcc! {
    case01_perfect: (&[(true, true), (false, false)], 1.),
    case02_all_wrong: (&[(true, false), (false, true)], -1.),
    case03_random: (&[(true, true), (true, false), (false, true), (false, false)], 0.),
}

parameterized_test! {can_detect_degenerate_ratio, pairs, {
    let matrix = create_matrix(pairs);

    assert_eq!(matrix.mcc(), Err(OptimizationError::DegenerateRatio("mcc")));
}}

can_detect_degenerate_ratio! {
    case01_empty: &[] as &[(bool, bool)],
    case02_only_true_positives: &[(true, true), (true, true)],
    case03_no_actual_negatives: &[(true, true), (false, true)],
}

#[test]
fn can_detect_degenerate_accuracy() {
    assert_eq!(ConfusionMatrix::default().accuracy(), Err(OptimizationError::DegenerateRatio("accuracy")));
    assert_eq!(create_matrix(&[(true, true), (false, true)]).accuracy(), Ok(0.5));
}

#[test]
fn can_serialize_false_negatives_as_fn() {
    let json = serde_json::to_string(&ConfusionMatrix { tp: 1, fp: 2, tn: 3, fn_: 4 }).unwrap();

    assert_eq!(json, r#"{"tp":1,"fp":2,"tn":3,"fn":4}"#);
}

proptest! {
    #[test]
    fn can_count_all_pairs(pairs in prop::collection::vec((any::<bool>(), any::<bool>()), 0..200)) {
        let matrix = create_matrix(pairs.as_slice());

        prop_assert_eq!(matrix.total(), pairs.len());
        prop_assert!((0. ..=1.).contains(&matrix.positive_prediction_accuracy()));
        prop_assert!((0. ..=1.).contains(&matrix.negative_prediction_accuracy()));

        if let Ok(mcc) = matrix.mcc() {
            prop_assert!((-1. - 1e-12..=1. + 1e-12).contains(&mcc));
        }
    }
}
