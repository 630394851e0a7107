// Mandelstam invariants for the two-body process v + p -> e+ + n.
//
// The lab frame is set up as in the generator: the neutrino moves along
// the x axis, the positron and neutron span the x-y plane, the azimuth is
// dropped by symmetry. The four-momentum constructors below rebuild the
// same invariants from explicit vectors and exist as a cross-check.

use crate::constants::PhysicalConstants;
use crate::kinematics::Kinematics;
use nalgebra::Vector4;

/// The frame-independent s, t, u for one solved final state.
#[derive(Debug, Clone, Copy)]
pub struct Mandelstam {
    pub s: f64,
    pub t: f64,
    pub u: f64,
}

impl Mandelstam {
    /// Build s, t, u from the solved kinematics using the
    /// difference-of-squares forms standard to two-body elastic scattering.
    pub fn from_kinematics(
        constants: &PhysicalConstants,
        e_v: f64,
        cos_theta_e: f64,
        kin: &Kinematics,
    ) -> Self {
        let m_p = constants.proton_mass;
        let s = m_p * m_p + 2.0 * e_v * m_p;

        let sin_theta_e = (1.0 - cos_theta_e * cos_theta_e).sqrt();
        let t = (e_v - kin.positron_energy).powi(2)
            - (e_v - kin.positron_momentum * cos_theta_e).powi(2)
            - (kin.positron_momentum * sin_theta_e).powi(2);

        let sin_theta_n = (1.0 - kin.cos_theta_n * kin.cos_theta_n).sqrt();
        let u = (e_v - kin.neutron_energy).powi(2)
            - (e_v - kin.neutron_momentum * kin.cos_theta_n).powi(2)
            - (kin.neutron_momentum * sin_theta_n).powi(2);

        Mandelstam { s, t, u }
    }
}

/// Four-momentum of the incident (massless) neutrino: [E, E, 0, 0].
pub fn neutrino_four_momentum(e_v: f64) -> Vector4<f64> {
    Vector4::new(e_v, e_v, 0.0, 0.0)
}

/// Four-momentum of the target proton at rest: [m_p, 0, 0, 0].
pub fn proton_four_momentum(constants: &PhysicalConstants) -> Vector4<f64> {
    Vector4::new(constants.proton_mass, 0.0, 0.0, 0.0)
}

/// Four-momentum of the outgoing positron in the x-y plane.
pub fn positron_four_momentum(kin: &Kinematics, cos_theta_e: f64) -> Vector4<f64> {
    let sin_theta_e = (1.0 - cos_theta_e * cos_theta_e).sqrt();
    Vector4::new(
        kin.positron_energy,
        kin.positron_momentum * cos_theta_e,
        kin.positron_momentum * sin_theta_e,
        0.0,
    )
}

/// Four-momentum of the recoil neutron in the x-y plane.
pub fn neutron_four_momentum(kin: &Kinematics) -> Vector4<f64> {
    let sin_theta_n = (1.0 - kin.cos_theta_n * kin.cos_theta_n).sqrt();
    Vector4::new(
        kin.neutron_energy,
        kin.neutron_momentum * kin.cos_theta_n,
        kin.neutron_momentum * sin_theta_n,
        0.0,
    )
}

/// Minkowski inner product with metric (+, -, -, -).
pub fn minkowski_dot(a: &Vector4<f64>, b: &Vector4<f64>) -> f64 {
    a[0] * b[0] - a[1] * b[1] - a[2] * b[2] - a[3] * b[3]
}
