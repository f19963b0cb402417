use super::*;

parameterized_test! {can_detect_termination, (history, distance, expected), {
    let mut termination = Convergence::new(distance);

    let result = history.iter().map(|&fitness| termination.is_termination(1, fitness)).collect::<Vec<_>>();

    assert_eq!(result, expected);
}}

can_detect_termination! {
    case01_single: (vec![1.], 0.1, vec![false]),
    case02_improving: (vec![10., 5., 1.], 0.1, vec![false, false, false]),
    case03_stagnating: (vec![10., 5., 4.95], 0.1, vec![false, false, true]),
    case04_recovering: (vec![1., 1., 0.5], 0.1, vec![false, true, false]),
}

#[test]
fn can_combine_criteria() {
    let mut termination = CompositeTermination::new(vec![
        Box::new(MaxGeneration::new(3)),
        Box::new(Convergence::new(0.1)),
        Box::new(TargetProximity::new(0., 1e-3)),
    ]);

    assert!(!termination.is_termination(1, 10.));
    assert!(!termination.is_termination(2, 5.));
    assert!(termination.is_termination(3, 2.));
    assert_eq!(termination.estimate(2, 5.), 2. / 3.);
}

#[test]
fn can_let_all_criteria_observe_generation() {
    let mut termination =
        CompositeTermination::new(vec![Box::new(TargetProximity::new(0., 1.)), Box::new(Convergence::new(0.1))]);

    assert!(termination.is_termination(1, 0.5));
    // convergence has seen the first generation even though target proximity triggered
    assert!(termination.is_termination(2, 0.5));
    assert!(!CompositeTermination::new(vec![]).is_termination(1, 0.));
}
