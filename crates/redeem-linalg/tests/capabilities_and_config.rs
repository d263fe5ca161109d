//! Integration tests for the capability traits, serde support and FormatConfig.

use anyhow::Result;
use redeem_linalg::{
    FormatConfig, LinalgError, Matrix, MatrixOps, RowVector, Scalable, Shaped, VectorOps,
};

// ---------------------------------------------------------------------------
// Capability traits
// ---------------------------------------------------------------------------

fn halve_all<T: Scalable>(items: &mut [T]) {
    for item in items.iter_mut() {
        item.scale_in_place(0.5);
    }
}

fn total_size(items: &[&dyn Shaped]) -> usize {
    items.iter().map(|item| item.size()).sum()
}

fn squared_length<V: VectorOps>(v: &V) -> redeem_linalg::Result<f64> {
    v.dot(v)
}

fn gram<M: MatrixOps>(m: &M) -> redeem_linalg::Result<M> {
    m.transpose().matmul(m)
}

#[test]
fn shaped_reports_every_container() -> Result<()> {
    let v = RowVector::new(4)?;
    let c = v.transpose();
    let m = Matrix::new(2, 3)?;

    assert_eq!(Shaped::shape(&v), (1, 4));
    assert_eq!(Shaped::shape(&c), (4, 1));
    assert_eq!(Shaped::shape(&m), (2, 3));
    assert_eq!(total_size(&[&v, &c, &m]), 4 + 4 + 6);
    Ok(())
}

#[test]
fn scalable_is_generic_over_vectors_and_matrices() -> Result<()> {
    let mut vectors = vec![RowVector::from_vec(vec![2.0, 4.0])?];
    halve_all(&mut vectors);
    assert_eq!(vectors[0].to_vec(), vec![1.0, 2.0]);

    let mut matrices = vec![Matrix::from_rows(vec![vec![8.0], vec![6.0]])?];
    halve_all(&mut matrices);
    assert_eq!(matrices[0].to_rows(), vec![vec![4.0], vec![3.0]]);

    let m = Matrix::from_rows(vec![vec![1.0, 2.0]])?;
    assert_eq!(Scalable::scaled(&m, 3.0).to_rows(), vec![vec![3.0, 6.0]]);
    assert_eq!(m.to_rows(), vec![vec![1.0, 2.0]]);
    Ok(())
}

#[test]
fn vector_ops_through_trait() -> Result<()> {
    let v = RowVector::from_vec(vec![1.0, 2.0, 2.0])?;
    assert_eq!(squared_length(&v)?, 9.0);
    assert_eq!(VectorOps::length(&v), 3.0);

    let w = RowVector::from_vec(vec![1.0, 2.0])?;
    assert!(matches!(
        VectorOps::add(&v, &w),
        Err(LinalgError::ShapeMismatch { .. })
    ));
    Ok(())
}

#[test]
fn matrix_ops_through_trait() -> Result<()> {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    assert_eq!(gram(&m)?.to_rows(), vec![vec![10.0, 14.0], vec![14.0, 20.0]]);

    let rect = Matrix::new(2, 3)?;
    assert!(MatrixOps::matmul(&rect, &rect).is_err());
    Ok(())
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[test]
fn matrix_serializes_as_nested_rows() -> Result<()> {
    let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let json = serde_json::to_string(&m)?;
    assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");

    let back: Matrix = serde_json::from_str(&json)?;
    assert_eq!(back, m);
    Ok(())
}

#[test]
fn deserializing_ragged_matrix_fails() {
    let err = serde_json::from_str::<Matrix>("[[1.0, 2.0], [3.0]]").unwrap_err();
    assert!(err.to_string().contains("row 1 has 1 elements, expected 2"));
}

#[test]
fn row_vector_serde_rejects_empty() -> Result<()> {
    let v: RowVector = serde_json::from_str("[1.0, -2.5]")?;
    assert_eq!(v.to_vec(), vec![1.0, -2.5]);
    assert!(serde_json::from_str::<RowVector>("[]").is_err());
    Ok(())
}

// ---------------------------------------------------------------------------
// FormatConfig
// ---------------------------------------------------------------------------

#[test]
fn format_config_defaults_and_json() -> Result<()> {
    let cfg = FormatConfig::default();
    assert_eq!(cfg.precision, None);
    assert_eq!(cfg.separator, ", ");

    let loaded: FormatConfig = serde_json::from_str(r#"{ "precision": 2 }"#)?;
    assert_eq!(loaded.precision, Some(2));
    assert_eq!(loaded.separator, ", ");
    Ok(())
}

#[test]
fn format_config_drives_vector_display() -> Result<()> {
    let v = RowVector::from_vec(vec![1.0, 2.0 / 3.0])?;
    let cfg: FormatConfig = "3".parse().map_err(anyhow::Error::msg)?;
    assert_eq!(v.display_with(&cfg), "[1.000, 0.667]");

    let spaced = FormatConfig::new(None, " ");
    assert_eq!(v.transpose().display_with(&spaced), "[[1] [0.6666666666666666]]");
    Ok(())
}
