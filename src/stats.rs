//! Sizing helpers and the standard false-positive estimate.

/// Expected false-positive probability for a filter of `m` bits holding
/// `n` items under `k` hash slots: `(1 - e^(-kn/m))^k`
pub fn estimated_fpr(m: usize, n: usize, k: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let exponent = -(k as f64 * n as f64) / m as f64;
    (1.0 - exponent.exp()).powi(k as i32)
}

/// Bit-array size minimizing memory for `n` expected items at target
/// false-positive rate `fpr`
pub fn optimal_size_bits(n: usize, fpr: f64) -> usize {
    let ln2 = std::f64::consts::LN_2;
    ((-(n as f64) * fpr.ln()) / (ln2 * ln2)).ceil() as usize
}

/// Hash-slot count minimizing the false-positive rate for `n` items in
/// `m` bits
pub fn optimal_num_hashes(n: usize, m: usize) -> usize {
    (((m as f64 / n as f64) * std::f64::consts::LN_2).round() as usize).max(1)
}
