// Closed-form quasi-elastic kinematics: (E_v, cos_theta_e) -> final state.
//
// Theta is the angle between the positron and the neutrino in the lab
// frame. The proton is at rest, the neutrino is massless. Momenta are
// always derived from energies via p = sqrt(E^2 - m^2), so the
// energy-momentum relations hold exactly by construction.

use crate::constants::PhysicalConstants;
use crate::error::{IbdError, IbdResult};

/// The solved final state for one (neutrino energy, positron angle) pair.
#[derive(Debug, Clone)]
pub struct Kinematics {
    /// E_v / m_p. The expansion parameter of the formulation.
    pub epsilon: f64,
    /// (1 + epsilon)^2 - (epsilon cos_theta_e)^2.
    pub kappa: f64,
    /// Total positron energy (MeV).
    pub positron_energy: f64,
    /// Positron momentum (MeV).
    pub positron_momentum: f64,
    /// Total neutron energy (MeV).
    pub neutron_energy: f64,
    /// Neutron momentum (MeV).
    pub neutron_momentum: f64,
    /// Cosine of the neutron recoil angle, clamped to at most 1.0.
    pub cos_theta_n: f64,
    /// Lab-frame opening angle between positron and neutron (degrees).
    pub opening_angle: f64,
}

impl Kinematics {
    /// Solve the full final state. Fails with a domain fault when the
    /// (E_v, cos_theta_e) pair lies outside the physically valid region:
    /// no substitute value is guessed, with one documented exception (see
    /// below).
    ///
    /// cos_theta_n can land slightly above 1.0 at forward angles where
    /// floating-point rounding matters; that case is clamped to exactly
    /// 1.0 and logged as a rounding correction, not treated as an error.
    /// No symmetric clamp below -1.0 is applied.
    pub fn solve(
        constants: &PhysicalConstants,
        e_v: f64,
        cos_theta_e: f64,
    ) -> IbdResult<Self> {
        let fault = |context: &'static str| IbdError::KinematicDomain {
            e_v,
            cos_theta_e,
            context,
        };

        if !(-1.0..=1.0).contains(&cos_theta_e) {
            return Err(fault("positron angle cosine outside [-1, 1]"));
        }

        let m_p = constants.proton_mass;
        let m_n = constants.neutron_mass;
        let m_e = constants.electron_mass;
        let delta = constants.delta();

        let epsilon = e_v / m_p;
        let kappa = (1.0 + epsilon).powi(2) - (epsilon * cos_theta_e).powi(2);
        if kappa <= 0.0 {
            return Err(fault("vanishing kappa denominator"));
        }

        let radicand = (e_v - delta).powi(2) - m_e * m_e * kappa;
        if radicand < 0.0 {
            return Err(fault("negative radicand in positron energy"));
        }
        let positron_energy =
            ((e_v - delta) * (1.0 + epsilon) + epsilon * cos_theta_e * radicand.sqrt()) / kappa;

        let p_e_sq = positron_energy * positron_energy - m_e * m_e;
        if p_e_sq < 0.0 {
            return Err(fault("positron energy below electron mass"));
        }
        let positron_momentum = p_e_sq.sqrt();

        // Energy conservation, exact by construction.
        let neutron_energy = e_v + m_p - positron_energy;
        let p_n_sq = neutron_energy * neutron_energy - m_n * m_n;
        if p_n_sq < 0.0 {
            return Err(fault("neutron energy below neutron mass"));
        }
        let neutron_momentum = p_n_sq.sqrt();
        if neutron_momentum == 0.0 {
            return Err(fault("zero neutron momentum"));
        }

        let mut cos_theta_n = (e_v - positron_momentum * cos_theta_e) / neutron_momentum;
        // Rounding can push this just past 1 at forward angles, which would
        // make the recoil angle undefined. Unphysical neutrino energies show
        // up the same way.
        if cos_theta_n > 1.0 {
            log::debug!(
                "clamping cos_theta_n = {} to 1.0 at E_v = {} MeV (rounding correction)",
                cos_theta_n,
                e_v
            );
            cos_theta_n = 1.0;
        }

        let opening_angle = cos_theta_e.acos().to_degrees() + cos_theta_n.acos().to_degrees();

        Ok(Kinematics {
            epsilon,
            kappa,
            positron_energy,
            positron_momentum,
            neutron_energy,
            neutron_momentum,
            cos_theta_n,
            opening_angle,
        })
    }
}
