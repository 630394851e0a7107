// Nucleon form factors as functions of the momentum transfer squared t.
// Dipole/monopole parametrizations; t is negative throughout this regime.

use crate::constants::PhysicalConstants;

/// Vector (f1, f2) and axial (g1, g2) form factors evaluated at one t.
///
/// g2 is the induced pseudoscalar term; it appears in the full amplitude
/// but drops out at the order kept here, so it is computed and carried but
/// never enters the leading-order squared amplitude.
#[derive(Debug, Clone, Copy)]
pub struct FormFactorSet {
    pub f1: f64,
    pub f2: f64,
    pub g1: f64,
    pub g2: f64,
}

impl FormFactorSet {
    /// Evaluate all four form factors at momentum transfer squared `t`.
    /// Pure function of t and the constants; no failure modes.
    pub fn at(constants: &PhysicalConstants, t: f64) -> Self {
        let m = constants.nucleon_mass;
        let m_sq = m * m;
        let xi = constants.xi;

        let vector_dipole = (1.0 - t / (4.0 * m_sq)) * (1.0 - t / constants.vector_mass.powi(2)).powi(2);
        let f1 = (1.0 - (1.0 + xi) * t / (4.0 * m_sq)) / vector_dipole;
        let f2 = xi / vector_dipole;

        let g1 = constants.axial_coupling / (1.0 - t / constants.axial_mass.powi(2)).powi(2);
        let g2 = 2.0 * m_sq * g1 / (constants.pion_mass.powi(2) - t);

        FormFactorSet { f1, f2, g1, g2 }
    }
}
