//! Root finding for the low-degree polynomials that arise from Bézier
//! derivative components.

use super::TOLERANCE;

/// Root of the linear interpolation `a (1 - t) + b t`, clipped to `(0, 1)`.
#[must_use]
pub fn linear_root(a: f64, b: f64) -> Option<f64> {
    if (a - b).abs() < TOLERANCE {
        return None;
    }
    let t = a / (a - b);
    (t > TOLERANCE && t < 1.0 - TOLERANCE).then_some(t)
}

/// Roots of the quadratic Bézier polynomial with Bernstein coefficients
/// `a`, `b`, `c`, clipped to `(0, 1)` and sorted.
///
/// The polynomial is `a (1-t)² + 2 b (1-t) t + c t²`.
#[must_use]
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Vec<f64> {
    // Power-basis coefficients: d2 t² + d1 t + d0.
    let d2 = a - 2.0 * b + c;
    let d1 = 2.0 * (b - a);
    let d0 = a;

    let mut roots = Vec::new();
    if d2.abs() < TOLERANCE {
        // Degenerates to a linear polynomial.
        if d1.abs() >= TOLERANCE {
            roots.push(-d0 / d1);
        }
    } else {
        let disc = d1 * d1 - 4.0 * d2 * d0;
        if disc >= 0.0 {
            let q = disc.sqrt();
            roots.push((-d1 + q) / (2.0 * d2));
            roots.push((-d1 - q) / (2.0 * d2));
        }
    }

    roots.retain(|t| *t > TOLERANCE && *t < 1.0 - TOLERANCE);
    roots.sort_by(f64::total_cmp);
    roots
}
