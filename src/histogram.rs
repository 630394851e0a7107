// Weighted 1-D histogram with uniform bins, the results container filled
// by recorders. Entries carry the differential interaction weight so the
// accumulated shapes are statistically meaningful spectra, not raw counts.

use std::fmt;

#[derive(Debug, Clone)]
pub struct Histogram {
    name: String,
    lo: f64,
    hi: f64,
    bins: Vec<f64>,
    underflow: f64,
    overflow: f64,
    entries: u64,
}

impl Histogram {
    /// New empty histogram with `n_bins` uniform bins over [lo, hi).
    pub fn new(name: &str, n_bins: usize, lo: f64, hi: f64) -> Self {
        assert!(n_bins > 0, "histogram needs at least one bin");
        assert!(hi > lo, "histogram range is degenerate");
        Histogram {
            name: name.to_string(),
            lo,
            hi,
            bins: vec![0.0; n_bins],
            underflow: 0.0,
            overflow: 0.0,
            entries: 0,
        }
    }

    /// Accumulate weight `w` at coordinate `x`. Out-of-range fills go to
    /// the underflow/overflow sums instead of being dropped.
    pub fn fill(&mut self, x: f64, w: f64) {
        self.entries += 1;
        if x < self.lo {
            self.underflow += w;
            return;
        }
        if x >= self.hi {
            self.overflow += w;
            return;
        }
        let index = ((x - self.lo) / self.bin_width()) as usize;
        let index = index.min(self.bins.len() - 1);
        self.bins[index] += w;
    }

    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.bins.len() as f64
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bins(&self) -> &[f64] {
        &self.bins
    }

    pub fn entries(&self) -> u64 {
        self.entries
    }

    pub fn underflow(&self) -> f64 {
        self.underflow
    }

    pub fn overflow(&self) -> f64 {
        self.overflow
    }

    /// Total in-range weight.
    pub fn total_weight(&self) -> f64 {
        self.bins.iter().sum()
    }

    /// Weight-averaged coordinate using bin centers. Zero when empty.
    pub fn weighted_mean(&self) -> f64 {
        let total = self.total_weight();
        if total == 0.0 {
            return 0.0;
        }
        let width = self.bin_width();
        let moment: f64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(i, &w)| (self.lo + (i as f64 + 0.5) * width) * w)
            .sum();
        moment / total
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Histogram: {}", self.name)?;
        writeln!(f, "  Range: [{}, {}) in {} bins", self.lo, self.hi, self.bins.len())?;
        writeln!(f, "  Entries: {}", self.entries)?;
        writeln!(f, "  In-range weight: {:.6e}", self.total_weight())?;
        write!(
            f,
            "  Underflow/overflow weight: {:.6e} / {:.6e}",
            self.underflow, self.overflow
        )
    }
}
