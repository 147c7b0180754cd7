//! Numeric primitives on compositions: vectors of positive parts summing
//! to one (points of the Aitchison simplex).

/// Closure operation: rescale positive parts so they sum to one.
pub fn closure(parts: &[f64]) -> Vec<f64> {
    let total: f64 = parts.iter().sum();
    parts.iter().map(|p| p / total).collect()
}

/// Inverse centered log-ratio transform: exponentiate real coordinates and
/// close them onto the simplex. Length-preserving.
pub fn clr_inv(coords: &[f64]) -> Vec<f64> {
    let exponentiated: Vec<f64> = coords.iter().map(|c| c.exp()).collect();
    closure(&exponentiated)
}
