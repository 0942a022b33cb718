/// Ideal-gas pressure from the conserved triple (rho, rho*u, rho*E).
/// `rho` must be nonzero; a vanishing density yields a non-finite pressure.
#[inline]
pub fn pressure(rho: f64, rho_u: f64, rho_e: f64, hcr: f64) -> f64 {
    let kinetic_energy = 0.5 * rho_u * rho_u / rho;
    (hcr - 1.0) * (rho_e - kinetic_energy)
}
#[inline]
pub fn pressure_of(q: [f64; 3], hcr: f64) -> f64 {
    pressure(q[0], q[1], q[2], hcr)
}
/// Primitive triple (rho, u, p) of a conserved state.
#[inline]
pub fn to_primitive(q: [f64; 3], hcr: f64) -> [f64; 3] {
    [q[0], q[1] / q[0], pressure_of(q, hcr)]
}
#[inline]
pub fn sound_speed(rho: f64, p: f64, hcr: f64) -> f64 {
    (hcr * p / rho).sqrt()
}
