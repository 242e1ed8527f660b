use crate::error::{NetworkError, Result};

/// Elementwise residual `output[j] - target[j]`.
///
/// This is the raw signed error the backward pass consumes directly; it is
/// deliberately not squared or otherwise loss-scaled. Fails with
/// `DimensionMismatch` when the two vectors disagree in length.
pub fn residual(output: &[f64], target: &[f64]) -> Result<Vec<f64>> {
    if output.len() != target.len() {
        return Err(NetworkError::DimensionMismatch {
            expected: output.len(),
            actual: target.len(),
        });
    }
    Ok(output.iter().zip(target.iter()).map(|(o, t)| o - t).collect())
}
