/// One-sided limited reconstruction of a face value.
///
/// Blends `w` toward `w_nbr` by at most half the jump, scaled by
/// `min(r, 1)`. A non-finite or non-positive `r` marks a local extremum and
/// falls back to the first-order value `w`.
#[inline]
pub fn limited_reconstruction(w: f64, w_nbr: f64, r: f64) -> f64 {
    if r.is_finite() && r > 0.0 {
        let limiter = r.min(1.0);
        w + 0.5 * (w_nbr - w) * limiter
    } else {
        w
    }
}
/// Applies `limited_reconstruction` componentwise with one shared ratio.
#[inline]
pub fn reconstruct_face(w: [f64; 3], w_nbr: [f64; 3], r: f64) -> [f64; 3] {
    std::array::from_fn(|ivar| limited_reconstruction(w[ivar], w_nbr[ivar], r))
}
