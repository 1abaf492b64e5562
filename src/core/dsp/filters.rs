//! Smoothing and numerical differentiation primitives

use crate::error::{AnalysisError, AnalysisResult};

/// Savitzky-Golay smoothing: least-squares local polynomial fit.
///
/// Each output sample is the value at its own position of a degree-`polyorder`
/// polynomial fitted to the surrounding `window_length` samples. Edge samples
/// are served by the polynomial fitted to the first (or last) full window, so
/// any input that is itself a polynomial of degree <= `polyorder` passes
/// through unchanged.
///
/// `window_length` must be odd, no longer than the data, and strictly greater
/// than `polyorder`.
pub fn savgol_filter(
    data: &[f64],
    window_length: usize,
    polyorder: usize,
) -> AnalysisResult<Vec<f64>> {
    if window_length == 0 || window_length % 2 == 0 {
        return Err(AnalysisError::InvalidArgument(format!(
            "smoothing window length must be odd, got {}",
            window_length
        )));
    }
    if window_length > data.len() {
        return Err(AnalysisError::InvalidArgument(format!(
            "smoothing window length {} exceeds data length {}",
            window_length,
            data.len()
        )));
    }
    if polyorder >= window_length {
        return Err(AnalysisError::InvalidArgument(format!(
            "polynomial order {} must be less than window length {}",
            polyorder, window_length
        )));
    }

    let half = window_length / 2;
    let n = data.len();
    let mut output = vec![0.0f64; n];

    // Evaluation weights at the window center, reused for every interior sample
    let center_weights = center_weights(window_length, polyorder);

    for i in half..n - half {
        let window = &data[i - half..i + half + 1];
        output[i] = window
            .iter()
            .zip(center_weights.iter())
            .map(|(&y, &c)| y * c)
            .sum();
    }

    // Leading edge: fit the first full window, evaluate at each edge offset
    let xs: Vec<f64> = (0..window_length).map(|j| j as f64 - half as f64).collect();
    let coeffs = fit_polynomial(&xs, &data[..window_length], polyorder);
    for i in 0..half {
        output[i] = poly_eval(&coeffs, i as f64 - half as f64);
    }

    // Trailing edge: same with the last full window
    let coeffs = fit_polynomial(&xs, &data[n - window_length..], polyorder);
    for i in n - half..n {
        let offset = i as f64 - (n - 1 - half) as f64;
        output[i] = poly_eval(&coeffs, offset);
    }

    Ok(output)
}

/// Numerical derivative dy/dx on a shared axis.
///
/// Central differences at interior points, first-order one-sided differences
/// at the two boundary points; output length equals input length. Both slices
/// must hold at least two points.
pub fn gradient(y: &[f64], x: &[f64]) -> Vec<f64> {
    debug_assert_eq!(y.len(), x.len());
    debug_assert!(y.len() >= 2);

    let n = y.len();
    let mut dy = Vec::with_capacity(n);

    dy.push((y[1] - y[0]) / (x[1] - x[0]));
    for i in 1..n - 1 {
        dy.push((y[i + 1] - y[i - 1]) / (x[i + 1] - x[i - 1]));
    }
    dy.push((y[n - 1] - y[n - 2]) / (x[n - 1] - x[n - 2]));

    dy
}

/// Weights turning a window of samples into the fitted value at its center.
///
/// Row zero of (A^T A)^-1 A^T for the Vandermonde matrix A over the centered
/// offsets -h..h.
fn center_weights(window_length: usize, polyorder: usize) -> Vec<f64> {
    let half = (window_length / 2) as isize;
    let terms = polyorder + 1;

    // Normal matrix A^T A: entry (r, c) = sum_j x_j^(r+c)
    let mut ata = vec![vec![0.0f64; terms]; terms];
    for r in 0..terms {
        for c in 0..terms {
            ata[r][c] = (-half..=half)
                .map(|j| (j as f64).powi((r + c) as i32))
                .sum();
        }
    }

    // Solve (A^T A) z = e0; weights are then c_j = sum_m z_m x_j^m
    let mut e0 = vec![0.0f64; terms];
    e0[0] = 1.0;
    let z = solve_linear(ata, e0);

    (-half..=half)
        .map(|j| {
            (0..terms)
                .map(|m| z[m] * (j as f64).powi(m as i32))
                .sum()
        })
        .collect()
}

/// Least-squares polynomial fit via the normal equations.
fn fit_polynomial(xs: &[f64], ys: &[f64], polyorder: usize) -> Vec<f64> {
    let terms = polyorder + 1;

    let mut ata = vec![vec![0.0f64; terms]; terms];
    let mut aty = vec![0.0f64; terms];

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        for r in 0..terms {
            let xr = x.powi(r as i32);
            aty[r] += xr * y;
            for c in 0..terms {
                ata[r][c] += xr * x.powi(c as i32);
            }
        }
    }

    solve_linear(ata, aty)
}

fn poly_eval(coeffs: &[f64], x: f64) -> f64 {
    // Horner form, coefficients in ascending order
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Gaussian elimination with partial pivoting for the small normal systems.
fn solve_linear(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Vec<f64> {
    let n = b.len();

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&r1, &r2| {
                a[r1][col]
                    .abs()
                    .partial_cmp(&a[r2][col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col);
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0f64; n];
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in row + 1..n {
            sum -= a[row][k] * x[k];
        }
        x[row] = sum / a[row][row];
    }

    x
}
