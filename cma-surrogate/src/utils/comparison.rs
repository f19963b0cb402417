#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::{Ordering, PartialOrd};

macro_rules! compare_float_types {
    ($fn_name_: ident, $type_: ty) => {
        /// Compares floating point numbers. NaN is considered as the greatest value.
        #[inline]
        pub fn $fn_name_(a: $type_, b: $type_) -> Ordering {
            match a.partial_cmp(&b) {
                Some(ordering) => ordering,
                None => match (a.is_nan(), b.is_nan()) {
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    _ => Ordering::Equal,
                },
            }
        }
    };
}

compare_float_types! { compare_floats, Float}
compare_float_types! { compare_floats_refs, &Float}

/// Sorts items by fitness in ascending order (best first). The sort is stable, so items with
/// equal fitness keep the order in which they were selected.
pub fn rank_by_fitness<T, F>(items: &mut [T], fitness_fn: F)
where
    F: Fn(&T) -> Float,
{
    items.sort_by(|a, b| compare_floats(fitness_fn(a), fitness_fn(b)));
}
