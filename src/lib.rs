// Monte Carlo inverse beta decay event generation.
//
// Given an incident antineutrino energy, the crate solves the full
// quasi-elastic final state (positron and neutron energies, momenta and
// angles) in closed form, evaluates the differential interaction weight at
// the sampled angle, and integrates it over the angular range for total
// cross sections. Energies and masses in MeV, c = hbar = 1, cross
// sections in MeV^-2.

mod constants;
mod cross_section;
mod error;
mod event;
mod form_factors;
mod histogram;
pub mod invariants;
mod kinematics;
mod matrix_element;
mod recorder;
mod rng;
mod sampler;
mod spectrum;

pub use constants::{PhysicalConstants, MEV2_TO_CM2};
pub use cross_section::{differential_cross_section, total_cross_section};
pub use error::{IbdError, IbdResult};
pub use event::Event;
pub use form_factors::FormFactorSet;
pub use histogram::Histogram;
pub use invariants::Mandelstam;
pub use kinematics::Kinematics;
pub use matrix_element::Coefficients;
pub use recorder::{EventBank, Recorder, SpectrumRecorder};
pub use rng::EventRng;
pub use sampler::{EventSampler, Outcome, RunSummary};
pub use spectrum::{Monoenergetic, SpectrumSampler, TabulatedSpectrum};
