use super::*;

parameterized_test! {can_detect_termination, (target, accuracy, best_fitness, expected), {
    let mut termination = TargetProximity::new(target, accuracy);

    assert_eq!(termination.is_termination(1, best_fitness), expected);
}}

can_detect_termination! {
    case01_far: (0., 1e-8, 1e-3, false),
    case02_close: (0., 1e-8, 1e-9, true),
    case03_close_from_below: (1., 1e-3, 0.9995, true),
    case04_on_boundary: (1., 0.5, 1.5, false),
    case05_infinite: (0., 1e-8, Float::INFINITY, false),
}
