// Physical constants for quasi-elastic antineutrino-proton scattering.
// Values follow Strumia & Vissani, "Precise quasielastic neutrino/nucleon
// cross-section". Energies and masses in MeV, c = hbar = 1, cross sections
// in MeV^-2.

use crate::error::{IbdError, IbdResult};
use serde::{Deserialize, Serialize};

/// Conversion from natural units to cm^2: (hbar c)^2 in MeV^2 cm^2.
/// Applied by callers that want physical cross sections; the kernel itself
/// stays in MeV^-2.
pub const MEV2_TO_CM2: f64 = 3.89105e-22;

/// The complete constant set consumed by the kinematics chain.
///
/// Constructed once, validated once, then injected read-only into every
/// evaluator. `Default` carries the reference values; a partial JSON file
/// can override individual fields via [`PhysicalConstants::from_file`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalConstants {
    /// Proton mass (MeV).
    pub proton_mass: f64,
    /// Neutron mass (MeV).
    pub neutron_mass: f64,
    /// Electron mass (MeV).
    pub electron_mass: f64,
    /// Average nucleon mass (MeV), used in the form-factor and amplitude
    /// expressions.
    pub nucleon_mass: f64,
    /// Charged pion mass (MeV), enters the induced pseudoscalar form factor.
    pub pion_mass: f64,
    /// Cosine of the Cabibbo angle.
    pub cos_theta_cabibbo: f64,
    /// Fermi coupling constant (MeV^-2).
    pub fermi_coupling: f64,
    /// Axial form-factor mass scale (MeV).
    pub axial_mass: f64,
    /// Vector form-factor mass scale (MeV).
    pub vector_mass: f64,
    /// Axial coupling at zero momentum transfer, g_1(0).
    pub axial_coupling: f64,
    /// Difference between proton and neutron anomalous magnetic moments,
    /// divided by 2 m_p (nuclear magnetons).
    pub xi: f64,
    /// Neutron-proton mass difference (MeV).
    pub mass_splitting: f64,
    /// IBD threshold (MeV). Candidate energies at or below this never reach
    /// the kinematics chain.
    pub threshold: f64,
    /// Number of equal-width angular samples for the total cross section
    /// integration. Part of the reproducibility contract.
    pub angular_samples: usize,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        let proton_mass = 938.27203;
        PhysicalConstants {
            proton_mass,
            neutron_mass: 939.56536,
            electron_mass: 0.5109989,
            nucleon_mass: 938.9,
            pion_mass: 134.976,
            cos_theta_cabibbo: 0.9742915,
            fermi_coupling: 1.16637e-11,
            axial_mass: 1e3,
            vector_mass: 842.615,
            axial_coupling: -1.270,
            xi: 3.706 / (2.0 * proton_mass),
            mass_splitting: 1.293,
            threshold: 1.807,
            angular_samples: 1000,
        }
    }
}

impl PhysicalConstants {
    /// Load constants from a JSON file. Fields absent from the file keep
    /// their default values. The result is validated before it is returned.
    pub fn from_file(path: &str) -> IbdResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let constants: Self = serde_json::from_str(&contents)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Mass-difference offset in the positron-energy relation:
    /// (m_n^2 - m_p^2 - m_e^2) / (2 m_p). Derived, never stored.
    pub fn delta(&self) -> f64 {
        (self.neutron_mass * self.neutron_mass
            - self.proton_mass * self.proton_mass
            - self.electron_mass * self.electron_mass)
            / (2.0 * self.proton_mass)
    }

    /// Reject a constant set the kernel must not run with: any non-finite
    /// scalar, a non-positive mass/coupling/threshold, or a zero angular
    /// sample count.
    pub fn validate(&self) -> IbdResult<()> {
        let scalars = [
            ("proton_mass", self.proton_mass),
            ("neutron_mass", self.neutron_mass),
            ("electron_mass", self.electron_mass),
            ("nucleon_mass", self.nucleon_mass),
            ("pion_mass", self.pion_mass),
            ("cos_theta_cabibbo", self.cos_theta_cabibbo),
            ("fermi_coupling", self.fermi_coupling),
            ("axial_mass", self.axial_mass),
            ("vector_mass", self.vector_mass),
            ("axial_coupling", self.axial_coupling),
            ("xi", self.xi),
            ("mass_splitting", self.mass_splitting),
            ("threshold", self.threshold),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(IbdError::Config(format!("{} is not finite: {}", name, value)));
            }
        }
        let positive = [
            ("proton_mass", self.proton_mass),
            ("neutron_mass", self.neutron_mass),
            ("electron_mass", self.electron_mass),
            ("nucleon_mass", self.nucleon_mass),
            ("pion_mass", self.pion_mass),
            ("fermi_coupling", self.fermi_coupling),
            ("axial_mass", self.axial_mass),
            ("vector_mass", self.vector_mass),
            ("threshold", self.threshold),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(IbdError::Config(format!("{} must be positive: {}", name, value)));
            }
        }
        if self.angular_samples == 0 {
            return Err(IbdError::Config(
                "angular_samples must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
