//! Integration tests for Matrix construction, access, and lifecycle.

use densemat::{Matrix, MatrixError};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_is_zero_initialized() {
    let m = Matrix::new(2, 3).unwrap();
    assert_eq!(m.nrows(), 2);
    assert_eq!(m.ncols(), 3);
    assert_eq!(m.shape(), (2, 3));
    for v in m.as_slice() {
        assert_eq!(*v, 0.0);
    }
}

#[test]
fn new_rejects_zero_dimensions() {
    assert_eq!(
        Matrix::new(0, 3),
        Err(MatrixError::InvalidDimension { rows: 0, cols: 3 })
    );
    assert_eq!(
        Matrix::new(3, 0),
        Err(MatrixError::InvalidDimension { rows: 3, cols: 0 })
    );
}

#[test]
fn from_shape_vec_adopts_buffer() {
    let m = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(0, 1)], 2.0);
    assert_eq!(m[(1, 0)], 3.0);
    assert_eq!(m[(1, 1)], 4.0);
}

#[test]
fn from_shape_vec_rejects_wrong_length() {
    let result = Matrix::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0]);
    assert_eq!(
        result,
        Err(MatrixError::ShapeMismatch {
            rows: 2,
            cols: 3,
            len: 3
        })
    );
}

#[test]
fn from_shape_vec_rejects_zero_dimensions() {
    let result = Matrix::from_shape_vec((0, 0), vec![]);
    assert_eq!(
        result,
        Err(MatrixError::InvalidDimension { rows: 0, cols: 0 })
    );
}

#[test]
fn identity_has_unit_diagonal() {
    let id = Matrix::identity(3).unwrap();
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_eq!(id[(i, j)], expected);
        }
    }
}

#[test]
fn default_is_the_empty_matrix() {
    let m = Matrix::default();
    assert!(m.is_empty());
    assert_eq!(m.shape(), (0, 0));
    assert!(m.as_slice().is_empty());
}

// ---------------------------------------------------------------------------
// Element access
// ---------------------------------------------------------------------------

#[test]
fn get_and_get_mut_check_bounds() {
    let mut m = Matrix::new(2, 2).unwrap();
    *m.get_mut(1, 1).unwrap() = 7.5;
    assert_eq!(m.get(1, 1).unwrap(), 7.5);

    assert_eq!(
        m.get(2, 0),
        Err(MatrixError::OutOfRange {
            row: 2,
            col: 0,
            rows: 2,
            cols: 2
        })
    );
    assert!(m.get_mut(0, 5).is_err());
}

#[test]
#[should_panic(expected = "out of bounds")]
fn index_panics_out_of_bounds() {
    let m = Matrix::new(2, 2).unwrap();
    let _ = m[(0, 2)];
}

#[test]
fn row_slice_views_one_row() {
    let m = Matrix::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(m.row_slice(0), &[1.0, 2.0, 3.0]);
    assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
}

// ---------------------------------------------------------------------------
// Copy and move semantics
// ---------------------------------------------------------------------------

#[test]
fn clone_is_a_deep_copy() {
    let original = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy[(0, 0)] = 99.0;
    assert_eq!(original[(0, 0)], 1.0);
    assert_ne!(copy, original);
}

#[test]
fn take_leaves_the_source_empty() {
    let mut source = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let moved = source.take();

    assert!(source.is_empty());
    assert_eq!(source.shape(), (0, 0));
    assert_eq!(moved.shape(), (2, 2));
    assert_eq!(moved[(1, 1)], 4.0);
}

#[test]
fn self_assignment_leaves_the_matrix_unchanged() {
    let mut m = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    m = m.clone();
    assert_eq!(m.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
}

// ---------------------------------------------------------------------------
// Resizing
// ---------------------------------------------------------------------------

#[test]
fn set_rows_truncates_and_zero_fills() {
    let mut m = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();

    m.set_rows(3).unwrap();
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.row_slice(0), &[1.0, 2.0]);
    assert_eq!(m.row_slice(1), &[3.0, 4.0]);
    assert_eq!(m.row_slice(2), &[0.0, 0.0]);

    m.set_rows(1).unwrap();
    assert_eq!(m.shape(), (1, 2));
    assert_eq!(m.row_slice(0), &[1.0, 2.0]);
}

#[test]
fn set_cols_preserves_the_overlap() {
    let mut m = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();

    m.set_cols(3).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.row_slice(0), &[1.0, 2.0, 0.0]);
    assert_eq!(m.row_slice(1), &[3.0, 4.0, 0.0]);

    m.set_cols(1).unwrap();
    assert_eq!(m.shape(), (2, 1));
    assert_eq!(m.row_slice(0), &[1.0]);
    assert_eq!(m.row_slice(1), &[3.0]);
}

#[test]
fn resize_rejects_zero_and_empty() {
    let mut m = Matrix::new(2, 2).unwrap();
    assert!(m.set_rows(0).is_err());
    assert!(m.set_cols(0).is_err());

    let mut empty = Matrix::default();
    assert!(empty.set_rows(2).is_err());
    assert!(empty.set_cols(2).is_err());
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn display_prints_one_row_per_line() {
    let m = Matrix::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m.to_string(), "[1, 2]\n[3, 4]");
}
