use super::*;

parameterized_test! {can_compare_floats, (a, b, expected), {
    assert_eq!(compare_floats(a, b), expected);
}}

can_compare_floats! {
    case01_less: (1., 2., Ordering::Less),
    case02_greater: (2., 1., Ordering::Greater),
    case03_equal: (1., 1., Ordering::Equal),
    case04_nan_greatest: (Float::NAN, 1., Ordering::Greater),
    case05_nan_greatest: (1., Float::NAN, Ordering::Less),
    case06_nans: (Float::NAN, Float::NAN, Ordering::Equal),
}

#[test]
fn can_rank_by_fitness_keeping_order_of_ties() {
    let mut items = vec![("a", 3.), ("b", 1.), ("c", 2.), ("d", 1.)];

    rank_by_fitness(items.as_mut_slice(), |(_, fitness)| *fitness);

    assert_eq!(items.iter().map(|(name, _)| *name).collect::<Vec<_>>(), vec!["b", "d", "c", "a"]);
}
