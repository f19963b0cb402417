use super::*;
use crate::utils::{compare_floats, point_to_vec};

fn create_distribution_with_covariance(values: &[Float]) -> SearchDistribution {
    let dimension = (values.len() as Float).sqrt() as usize;
    let mut distribution = SearchDistribution::new(Point::zeros(dimension), 1.);
    distribution.covariance = Matrix::from_row_slice(dimension, dimension, values);

    distribution
}

fn assert_matrix_eq(actual: &Matrix, expected: &Matrix) {
    assert!((actual - expected).abs().max() < 1e-9, "actual: {actual}, expected: {expected}");
}

#[test]
fn can_create_identity_distribution() {
    let distribution = SearchDistribution::new(Point::from_row_slice(&[1., 2., 3.]), 0.5);

    assert_eq!(distribution.covariance(), &Matrix::identity(3, 3));
    assert_eq!(distribution.eigenvectors(), &Matrix::identity(3, 3));
    assert_eq!(distribution.scaling(), &Point::from_element(3, 1.));
    assert_eq!(distribution.sigma(), 0.5);
}

#[test]
fn can_refresh_decomposition_of_diagonal_covariance() {
    let mut distribution = create_distribution_with_covariance(&[4., 0., 0., 9.]);

    distribution.refresh_decomposition().unwrap();

    let mut scaling = point_to_vec(distribution.scaling());
    scaling.sort_by(|a, b| compare_floats(*a, *b));
    assert!((scaling[0] - 2.).abs() < 1e-9);
    assert!((scaling[1] - 3.).abs() < 1e-9);
    assert_matrix_eq(distribution.covariance(), &Matrix::from_row_slice(2, 2, &[4., 0., 0., 9.]));
    assert_matrix_eq(distribution.inv_sqrt_covariance(), &Matrix::from_row_slice(2, 2, &[0.5, 0., 0., 1. / 3.]));
}

#[test]
fn can_symmetrize_and_recompose_covariance() {
    let mut distribution = create_distribution_with_covariance(&[2., 1., 0.8, 2.]);

    distribution.refresh_decomposition().unwrap();

    let covariance = distribution.covariance();
    assert_matrix_eq(covariance, &covariance.transpose());
    assert_matrix_eq(covariance, &Matrix::from_row_slice(2, 2, &[2., 0.9, 0.9, 2.]));
    assert!(distribution.scaling().iter().all(|d| *d > 0.));

    let basis = distribution.eigenvectors();
    assert_matrix_eq(&(basis.transpose() * basis), &Matrix::identity(2, 2));
}

parameterized_test! {can_detect_numerical_instability, values, {
    let mut distribution = create_distribution_with_covariance(values);

    let result = distribution.refresh_decomposition();

    assert!(matches!(result, Err(OptimizationError::NumericalInstability(_))));
}}

can_detect_numerical_instability! {
    case01_negative: &[1., 0., 0., -1.],
    case02_indefinite: &[1., 2., 2., 1.],
    case03_nan: &[Float::NAN, 0., 0., 1.],
}

#[test]
fn can_transform_standard_normal_vector() {
    let mut distribution = create_distribution_with_covariance(&[4., 0., 0., 1.]);
    distribution.xmean = Point::from_row_slice(&[1., 1.]);
    distribution.sigma = 2.;
    distribution.refresh_decomposition().unwrap();

    assert_eq!(distribution.transform(&Point::zeros(2)), Point::from_row_slice(&[1., 1.]));

    let point = distribution.transform(&Point::from_row_slice(&[1., 0.]));
    let offset = (point - Point::from_row_slice(&[1., 1.])).norm();
    assert!((offset - 4.).abs() < 1e-9 || (offset - 2.).abs() < 1e-9);
}
