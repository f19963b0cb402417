#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/statistics_test.rs"]
mod statistics_test;

use crate::utils::Float;

/// Gets mean of values using given iterator.
pub fn get_mean_iter<Iter>(values: Iter) -> Float
where
    Iter: Iterator<Item = Float>,
{
    let (sum, count) = values.fold((0., 0), |(sum, count), item| (sum + item, count + 1));

    if count == 0 { 0. } else { sum / count as Float }
}
