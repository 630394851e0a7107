// Differential interaction weight for one (E_v, cos_theta_e) pair and the
// midpoint-rule total over the full angular range.
//
// Weights are in MeV^-2; callers wanting cm^2 apply
// `constants::MEV2_TO_CM2` themselves so the kernel stays unit-agnostic.

use crate::constants::PhysicalConstants;
use crate::error::{IbdError, IbdResult};
use crate::form_factors::FormFactorSet;
use crate::invariants::Mandelstam;
use crate::kinematics::Kinematics;
use crate::matrix_element::Coefficients;

/// Differential weight from an already-solved final state. Used by the
/// sampler to avoid solving the kinematics twice per event.
pub fn differential_from_kinematics(
    constants: &PhysicalConstants,
    e_v: f64,
    cos_theta_e: f64,
    kin: &Kinematics,
) -> IbdResult<f64> {
    let inv = Mandelstam::from_kinematics(constants, e_v, cos_theta_e, kin);
    let ff = FormFactorSet::at(constants, inv.t);
    let coeffs = Coefficients::evaluate(constants, inv.t, &ff);
    let m_squared = coeffs.squared_amplitude(&inv);
    if !m_squared.is_finite() {
        return Err(IbdError::Amplitude { e_v, cos_theta_e });
    }

    if kin.positron_momentum == 0.0 {
        return Err(IbdError::KinematicDomain {
            e_v,
            cos_theta_e,
            context: "zero positron momentum in flux factor",
        });
    }
    let flux_denominator = 1.0
        + kin.epsilon * (1.0 - kin.positron_energy / kin.positron_momentum * cos_theta_e);
    if flux_denominator == 0.0 {
        return Err(IbdError::KinematicDomain {
            e_v,
            cos_theta_e,
            context: "vanishing flux denominator",
        });
    }

    let m_p = constants.proton_mass;
    let coupling_sq = constants.fermi_coupling.powi(2) * constants.cos_theta_cabibbo.powi(2);
    let phase_space = 2.0 * m_p * kin.positron_momentum * kin.epsilon / flux_denominator;
    let propagator = coupling_sq / (2.0 * std::f64::consts::PI * (inv.s - m_p * m_p).powi(2));

    Ok(phase_space * propagator * m_squared)
}

/// Differential weight for one (E_v, cos_theta_e) pair (MeV^-2).
pub fn differential_cross_section(
    constants: &PhysicalConstants,
    e_v: f64,
    cos_theta_e: f64,
) -> IbdResult<f64> {
    let kin = Kinematics::solve(constants, e_v, cos_theta_e)?;
    differential_from_kinematics(constants, e_v, cos_theta_e, &kin)
}

/// Total cross section at `e_v` (MeV^-2): midpoint rule over
/// cos_theta_e in [-1, 1] with `constants.angular_samples` equal-width
/// samples.
///
/// The sample count, the midpoint grid and the ascending-index summation
/// order are part of the observable contract: identical inputs and sample
/// count reproduce the result bit for bit. A fault at any sample aborts
/// the whole integral; no partial sum is ever returned.
pub fn total_cross_section(constants: &PhysicalConstants, e_v: f64) -> IbdResult<f64> {
    let n = constants.angular_samples;
    if n == 0 {
        return Err(IbdError::Config(
            "angular_samples must be at least 1".to_string(),
        ));
    }
    let step = 2.0 / n as f64;
    (0..n).try_fold(0.0, |acc, i| {
        let cos_theta_e = -1.0 + (i as f64 + 0.5) * step;
        Ok(acc + differential_cross_section(constants, e_v, cos_theta_e)? * step)
    })
}
