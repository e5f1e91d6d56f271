//! Batched operator application: `out[e, :] = A * in[e, :]` for every element.
//!
//! Inputs and outputs are row-major [n_elements, n_cols] / [n_elements, n_rows]
//! blocks. Each element is one matrix-vector product; batching them is a
//! single matrix-matrix product `OUT = IN * A^T`.

use faer::Mat;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scalar batched apply.
///
/// Each output entry is a dot product summed in ascending column order.
pub fn batched_apply_scalar(a: &Mat<f64>, input: &[f64], output: &mut [f64], n_elements: usize) {
    let (n_rows, n_cols) = (a.nrows(), a.ncols());
    debug_assert_eq!(input.len(), n_elements * n_cols);
    debug_assert_eq!(output.len(), n_elements * n_rows);

    for k in 0..n_elements {
        let x = &input[k * n_cols..(k + 1) * n_cols];
        let y = &mut output[k * n_rows..(k + 1) * n_rows];
        apply_element(a, x, y);
    }
}

/// Batched apply as one faer GEMM per call.
///
/// Uses `Par::Seq`, so results are reproducible run to run; they may differ
/// from the scalar path in the last bits because of FMA and blocking.
pub fn batched_apply_faer(a: &Mat<f64>, input: &[f64], output: &mut [f64], n_elements: usize) {
    use faer::linalg::matmul::matmul;
    use faer::{Accum, MatMut, MatRef, Par};

    let (n_rows, n_cols) = (a.nrows(), a.ncols());
    debug_assert_eq!(input.len(), n_elements * n_cols);
    debug_assert_eq!(output.len(), n_elements * n_rows);

    if n_elements == 0 || n_rows == 0 {
        return;
    }

    let x = MatRef::from_row_major_slice(input, n_elements, n_cols);
    let mut y = MatMut::from_row_major_slice_mut(output, n_elements, n_rows);
    let a_t = a.as_ref().transpose();

    // OUT = IN * A^T
    matmul(&mut y, Accum::Replace, &x, &a_t, 1.0, Par::Seq);
}

/// Parallel batched apply using Rayon.
///
/// Elements are split across threads; each element uses the scalar summation
/// order, so results match [`batched_apply_scalar`] bit-for-bit.
#[cfg(feature = "parallel")]
pub fn batched_apply_parallel(a: &Mat<f64>, input: &[f64], output: &mut [f64], n_elements: usize) {
    let (n_rows, n_cols) = (a.nrows(), a.ncols());
    debug_assert_eq!(input.len(), n_elements * n_cols);
    debug_assert_eq!(output.len(), n_elements * n_rows);

    // Zero-sized chunks are not allowed by par_chunks
    if n_rows == 0 || n_cols == 0 {
        batched_apply_scalar(a, input, output, n_elements);
        return;
    }

    output
        .par_chunks_mut(n_rows)
        .zip(input.par_chunks(n_cols))
        .for_each(|(y, x)| apply_element(a, x, y));
}

#[inline]
fn apply_element(a: &Mat<f64>, x: &[f64], y: &mut [f64]) {
    for (i, yi) in y.iter_mut().enumerate() {
        let mut sum = 0.0;
        for (j, &xj) in x.iter().enumerate() {
            sum += a[(i, j)] * xj;
        }
        *yi = sum;
    }
}
