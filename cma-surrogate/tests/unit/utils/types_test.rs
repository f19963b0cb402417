use super::*;

#[test]
fn can_convert_matrix_to_rows() {
    let matrix = Matrix::from_row_slice(2, 2, &[1., 2., 3., 4.]);

    assert_eq!(matrix_to_rows(&matrix), vec![vec![1., 2.], vec![3., 4.]]);
}

#[test]
fn can_convert_point_to_vec() {
    assert_eq!(point_to_vec(&Point::from_row_slice(&[1., -2.])), vec![1., -2.]);
}
