// Squared matrix element for v + p -> e+ + n at the order kept by the
// Strumia-Vissani formulation: |M|^2 = A - (s - u) B + (s - u)^2 C.

use crate::constants::PhysicalConstants;
use crate::form_factors::FormFactorSet;
use crate::invariants::Mandelstam;

/// The three scalar coefficients combining form factors, masses and the
/// nucleon mass splitting.
#[derive(Debug, Clone, Copy)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Coefficients {
    /// Evaluate A, B, C at momentum transfer squared `t`.
    pub fn evaluate(constants: &PhysicalConstants, t: f64, ff: &FormFactorSet) -> Self {
        let m_sq = constants.nucleon_mass * constants.nucleon_mass;
        let m_e_sq = constants.electron_mass * constants.electron_mass;
        let d = constants.mass_splitting;

        let f1_sq_minus_g1_sq = ff.f1 * ff.f1 - ff.g1 * ff.g1;
        let a = m_sq * f1_sq_minus_g1_sq * (t - m_e_sq)
            - m_sq * d * d * f1_sq_minus_g1_sq
            - 2.0 * m_e_sq * constants.nucleon_mass * d * ff.g1 * (ff.f1 + ff.f2);
        let b = t * ff.g1 * (ff.f1 + ff.f2);
        let c = (ff.f1 * ff.f1 + ff.g1 * ff.g1) / 4.0;

        Coefficients { a, b, c }
    }

    /// Combine the coefficients with the invariants into |M|^2. Finiteness
    /// is checked by the cross-section evaluator, which owns the fault; a
    /// NaN here is never zeroed.
    pub fn squared_amplitude(&self, inv: &Mandelstam) -> f64 {
        let s_minus_u = inv.s - inv.u;
        self.a - s_minus_u * self.b + s_minus_u * s_minus_u * self.c
    }
}
