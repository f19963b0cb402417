use super::*;

parameterized_test! {can_get_mean, (values, expected), {
    assert_eq!(get_mean_iter(values.into_iter()), expected);
}}

can_get_mean! {
    case01_empty: (Vec::<Float>::new(), 0.),
    case02_single: (vec![3.], 3.),
    case03_many: (vec![1., 2., 3., 6.], 3.),
}
