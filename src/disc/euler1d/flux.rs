use super::eos::pressure_of;

/// Physical flux of the 1D Euler equations for a conserved triple.
pub fn flux1d(q: [f64; 3], hcr: f64) -> [f64; 3] {
    let u = q[1] / q[0];
    let p = pressure_of(q, hcr);
    [q[1], q[1] * u + p, u * (q[2] + p)]
}
