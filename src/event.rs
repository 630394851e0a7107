use serde::Serialize;

/// One fully determined IBD interaction: the incident antineutrino energy,
/// the final-state positron and neutron kinematics, and the differential
/// interaction weight (MeV^-2) at the sampled angle.
///
/// Events are immutable once constructed and are only ever built by the
/// sampler after a successful threshold check, so every record satisfies
/// energy conservation and the energy-momentum relations by construction.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    /// Incident antineutrino energy (MeV).
    pub neutrino_energy: f64,
    /// Cosine of the positron emission angle in the lab frame.
    pub cos_theta_e: f64,
    /// Total positron energy (MeV).
    pub positron_energy: f64,
    /// Positron momentum (MeV).
    pub positron_momentum: f64,
    /// Total neutron energy (MeV).
    pub neutron_energy: f64,
    /// Neutron momentum (MeV).
    pub neutron_momentum: f64,
    /// Cosine of the neutron recoil angle in the lab frame.
    pub cos_theta_n: f64,
    /// Opening angle between positron and neutron directions (degrees).
    pub opening_angle: f64,
    /// Differential cross section at this (energy, angle) pair (MeV^-2).
    pub weight: f64,
}
