// Neutrino-energy sources. The kernel treats a drawn energy as opaque; it
// makes no assumption about the distribution shape.

use crate::error::{IbdError, IbdResult};
use rand::Rng;

/// External collaborator supplying candidate antineutrino energies (MeV).
pub trait SpectrumSampler {
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;
}

/// Fixed-energy source, mainly for tests and validation runs.
#[derive(Debug, Clone)]
pub struct Monoenergetic {
    pub energy: f64,
}

impl SpectrumSampler for Monoenergetic {
    fn draw<R: Rng + ?Sized>(&self, _rng: &mut R) -> f64 {
        self.energy
    }
}

/// Binned spectrum with uniform bin width over [e_min, e_max]. Drawing
/// inverts the cumulative weight: pick a bin proportionally to its
/// weight, then a uniform energy inside it.
#[derive(Debug, Clone)]
pub struct TabulatedSpectrum {
    e_min: f64,
    bin_width: f64,
    cumulative: Vec<f64>,
    total_weight: f64,
}

impl TabulatedSpectrum {
    /// Build from per-bin weights. Weights must be non-negative with a
    /// positive sum, and the energy range must be non-degenerate.
    pub fn new(e_min: f64, e_max: f64, weights: &[f64]) -> IbdResult<Self> {
        if !(e_max > e_min) {
            return Err(IbdError::Config(format!(
                "spectrum range is degenerate: [{}, {}]",
                e_min, e_max
            )));
        }
        if weights.is_empty() {
            return Err(IbdError::Config("spectrum has no bins".to_string()));
        }
        let mut cumulative = Vec::with_capacity(weights.len());
        let mut running = 0.0;
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(IbdError::Config(format!(
                    "invalid spectrum weight {} in bin {}",
                    w, i
                )));
            }
            running += w;
            cumulative.push(running);
        }
        if running <= 0.0 {
            return Err(IbdError::Config(
                "spectrum weights sum to zero".to_string(),
            ));
        }
        Ok(TabulatedSpectrum {
            e_min,
            bin_width: (e_max - e_min) / weights.len() as f64,
            cumulative,
            total_weight: running,
        })
    }
}

impl SpectrumSampler for TabulatedSpectrum {
    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let target = rng.gen::<f64>() * self.total_weight;
        let bin = self.cumulative.partition_point(|&c| c <= target);
        let bin = bin.min(self.cumulative.len() - 1);
        self.e_min + (bin as f64 + rng.gen::<f64>()) * self.bin_width
    }
}
