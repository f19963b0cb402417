use super::*;
use crate::helpers::utils::create_test_engine;
use crate::helpers::utils::random::FakeRandom;

fn rank_by_sphere(mut points: Vec<Point>) -> Vec<Point> {
    rank_by_fitness(points.as_mut_slice(), |point| point.norm_squared());
    points
}

parameterized_test! {can_reject_invalid_parameters, (mu, lambda, xmean, sigma), {
    let result = CmaEs::new(mu, lambda, Point::from_vec(xmean), sigma, Arc::new(DefaultRandom::default()));

    assert!(result.is_err());
}}

can_reject_invalid_parameters! {
    case01_zero_sigma: (2, 4, vec![0., 0.], 0.),
    case02_negative_sigma: (2, 4, vec![0., 0.], -1.),
    case03_infinite_sigma: (2, 4, vec![0., 0.], Float::INFINITY),
    case04_nan_mean: (2, 4, vec![Float::NAN, 0.], 1.),
    case05_empty_mean: (2, 4, vec![], 1.),
    case06_mu_greater_than_lambda: (5, 4, vec![0., 0.], 1.),
}

#[test]
fn can_sample_point_from_distribution() {
    let random = Arc::new(FakeRandom::new(vec![], vec![1., -1.]));
    let engine = CmaEs::new(1, 2, Point::from_row_slice(&[1., 2.]), 2., random).unwrap();

    let point = engine.sample_point();

    assert_eq!(point, Point::from_row_slice(&[3., 0.]));
}

#[test]
fn can_sample_exactly_lambda_feasible_points() {
    let engine = create_test_engine(5, 10, &[0., 0.], 1.);

    let batch = engine.sample(|point| point[0] >= 0., DEFAULT_MAX_ATTEMPTS).unwrap();

    assert_eq!(batch.candidates.len(), 10);
    assert!(batch.candidates.iter().all(|point| point[0] >= 0.));
    assert!(batch.rejected > 0);
}

#[test]
fn can_stop_resampling_after_max_attempts() {
    let engine = create_test_engine(5, 10, &[0., 0.], 1.);

    let result = engine.sample(|_| false, 50);

    assert!(matches!(result, Err(OptimizationError::ResamplingExhausted { attempts: 50 })));
}

#[test]
fn can_keep_covariance_symmetric_and_scaling_positive() {
    let mut engine = create_test_engine(5, 10, &[3., -2., 1.], 1.);

    (0..30).for_each(|_| {
        let selected = rank_by_sphere((0..10).map(|_| engine.sample_point()).collect());
        engine.update(selected.as_slice()).unwrap();

        let covariance = engine.distribution().covariance();
        assert!((covariance - covariance.transpose()).abs().max() < 1e-12);
        assert!(engine.distribution().scaling().iter().all(|d| *d >= 0.));
        assert!(engine.distribution().sigma() > 0.);
    });

    assert_eq!(engine.generation(), 30);
}

#[test]
fn can_move_mean_to_weighted_selection() {
    let mut engine = create_test_engine(3, 6, &[0., 0.], 1.);
    let target = Point::from_row_slice(&[0.5, -0.5]);

    engine.update(vec![target.clone(); 3].as_slice()).unwrap();

    assert!((engine.distribution().xmean() - &target).norm() < 1e-12);
    assert!(engine.path().ps.norm() > 0.);
    assert!(engine.path().pc.norm() > 0.);
}

#[test]
fn can_use_only_first_mu_selected_points() {
    let mut engine = create_test_engine(2, 4, &[0., 0.], 1.);
    let best = Point::from_row_slice(&[1., 1.]);
    let worst = Point::from_row_slice(&[100., 100.]);

    engine.update(&[best.clone(), best.clone(), worst.clone(), worst]).unwrap();

    assert!((engine.distribution().xmean() - &best).norm() < 1e-12);
}

#[test]
fn can_reject_too_few_selected_points() {
    let mut engine = create_test_engine(3, 6, &[0., 0.], 1.);

    let result = engine.update(&[Point::zeros(2), Point::zeros(2)]);

    assert!(matches!(result, Err(OptimizationError::ContractViolation(_))));
    assert_eq!(engine.generation(), 0);
}

#[test]
fn can_reject_dimension_mismatch() {
    let mut engine = create_test_engine(1, 2, &[0., 0.], 1.);

    let result = engine.update(&[Point::zeros(3)]);

    assert!(matches!(result, Err(OptimizationError::ContractViolation(_))));
}

parameterized_test! {can_adapt_sigma_by_path_length, (selected, is_increased), {
    let mut engine = create_test_engine(5, 10, &[0., 0.], 1.);
    let selected = vec![Point::from_row_slice(selected); 5];

    engine.update(selected.as_slice()).unwrap();

    assert_eq!(engine.distribution().sigma() > 1., is_increased);
}}

can_adapt_sigma_by_path_length! {
    case01_long_step: (&[2., 2.], true),
    case02_no_step: (&[0., 0.], false),
}
