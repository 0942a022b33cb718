use super::eos::{pressure, pressure_of, sound_speed};

/// Approximate Riemann flux at a face.
///
/// Central average of the physical fluxes of `w_minus` (left of the face) and
/// `w_plus` (right of the face), stabilised by a dissipation term scaled with
/// the spectral radius `|u| + c` of the Roe-averaged state.
pub fn euler_flux(w_minus: [f64; 3], w_plus: [f64; 3], hcr: f64) -> [f64; 3] {
    let rho_minus = w_minus[0];
    let rho_plus = w_plus[0];
    let u_minus = w_minus[1] / rho_minus;
    let u_plus = w_plus[1] / rho_plus;
    let e_minus = w_minus[2] / rho_minus;
    let e_plus = w_plus[2] / rho_plus;
    let p_minus = pressure_of(w_minus, hcr);
    let p_plus = pressure_of(w_plus, hcr);

    let mut flux = [
        0.5 * (rho_plus * u_plus + rho_minus * u_minus),
        0.5 * (rho_plus * u_plus * u_plus + p_plus + rho_minus * u_minus * u_minus + p_minus),
        0.5 * (rho_plus * u_plus * e_plus
            + u_plus * p_plus
            + rho_minus * u_minus * e_minus
            + u_minus * p_minus),
    ];

    let sqrt_rho_minus = rho_minus.sqrt();
    let sqrt_rho_plus = rho_plus.sqrt();
    let weight_sum = sqrt_rho_minus + sqrt_rho_plus;
    let rho = sqrt_rho_minus * sqrt_rho_plus;
    let u = (sqrt_rho_minus * u_minus + sqrt_rho_plus * u_plus) / weight_sum;
    let e = (sqrt_rho_minus * e_minus + sqrt_rho_plus * e_plus) / weight_sum;
    let p = pressure(rho, rho * u, rho * e, hcr);
    let spectral_radius = sound_speed(rho, p, hcr) + u.abs();

    for ivar in 0..3 {
        flux[ivar] += 0.5 * spectral_radius * (w_minus[ivar] - w_plus[ivar]);
    }
    flux
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::euler1d::flux::flux1d;
    use approx::assert_relative_eq;

    const HCR: f64 = 1.4;

    fn conserved(rho: f64, u: f64, p: f64) -> [f64; 3] {
        [rho, rho * u, p / (HCR - 1.0) + 0.5 * rho * u * u]
    }

    #[test]
    fn test_identical_states_give_physical_flux() {
        for w in [
            conserved(1.0, 0.0, 1.0),
            conserved(0.125, 0.0, 0.1),
            conserved(0.7, -1.3, 0.45),
        ] {
            let num_flux = euler_flux(w, w, HCR);
            let phys_flux = flux1d(w, HCR);
            for ivar in 0..3 {
                assert_relative_eq!(num_flux[ivar], phys_flux[ivar], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_mirror_symmetry() {
        // reflecting x -> -x swaps sides and flips velocities
        let wl = conserved(1.0, 0.3, 1.0);
        let wr = conserved(0.125, -0.2, 0.1);
        let f = euler_flux(wl, wr, HCR);
        let mirror = |w: [f64; 3]| [w[0], -w[1], w[2]];
        let g = euler_flux(mirror(wr), mirror(wl), HCR);
        assert_relative_eq!(f[0], -g[0], epsilon = 1e-12);
        assert_relative_eq!(f[1], g[1], epsilon = 1e-12);
        assert_relative_eq!(f[2], -g[2], epsilon = 1e-12);
    }

    #[test]
    fn test_sod_interface_dissipation() {
        let wl = conserved(0.125, 0.0, 0.1);
        let wr = conserved(1.0, 0.0, 1.0);
        let f = euler_flux(wl, wr, HCR);

        let sqrt_l = 0.125_f64.sqrt();
        let rho = sqrt_l;
        let e = (sqrt_l * wl[2] / 0.125 + wr[2]) / (sqrt_l + 1.0);
        let p = (HCR - 1.0) * rho * e;
        let lambda = (HCR * p / rho).sqrt();

        assert_relative_eq!(f[0], 0.5 * lambda * (0.125 - 1.0), epsilon = 1e-12);
        assert_relative_eq!(f[1], 0.55, epsilon = 1e-12);
        assert_relative_eq!(f[2], 0.5 * lambda * (wl[2] - wr[2]), epsilon = 1e-12);
        // mass is pushed from the high-density side toward the low-density side
        assert!(f[0] < 0.0);
    }
}
