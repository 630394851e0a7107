// Event sinks. The sampler hands each completed event to a Recorder; the
// kernel makes no assumption about what the recorder does with it.

use crate::constants::PhysicalConstants;
use crate::event::Event;
use crate::histogram::Histogram;

/// External collaborator receiving ownership of each completed event.
pub trait Recorder {
    fn accept(&mut self, event: Event);
}

/// In-memory event collection, for callers that post-process the sample
/// themselves.
#[derive(Debug, Clone, Default)]
pub struct EventBank {
    events: Vec<Event>,
}

impl EventBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        EventBank {
            events: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Recorder for EventBank {
    fn accept(&mut self, event: Event) {
        self.events.push(event);
    }
}

/// Recorder accumulating the standard weighted output spectra: kinetic
/// energies, angular distributions and the opening angle, each entry
/// weighted by the event's differential cross section.
#[derive(Debug, Clone)]
pub struct SpectrumRecorder {
    electron_mass: f64,
    neutron_mass: f64,
    pub positron_energy: Histogram,
    pub neutron_energy: Histogram,
    pub positron_angle: Histogram,
    pub neutron_angle: Histogram,
    pub opening_angle: Histogram,
}

impl SpectrumRecorder {
    pub fn new(constants: &PhysicalConstants) -> Self {
        SpectrumRecorder {
            electron_mass: constants.electron_mass,
            neutron_mass: constants.neutron_mass,
            positron_energy: Histogram::new("Positron Spectrum", 1000, 0.0, 100.0),
            neutron_energy: Histogram::new("Neutron Spectrum", 1000, 0.0, 5.0),
            positron_angle: Histogram::new("Positron Angular Distribution", 100, -1.0, 1.0),
            neutron_angle: Histogram::new("Neutron Angular Distribution", 50, 0.0, 1.0),
            opening_angle: Histogram::new("Opening Angle Distribution", 1800, 0.0, 180.0),
        }
    }
}

impl Recorder for SpectrumRecorder {
    fn accept(&mut self, event: Event) {
        let w = event.weight;
        // Kinetic energies; the spectra are what a detector sees.
        self.positron_energy
            .fill(event.positron_energy - self.electron_mass, w);
        self.neutron_energy
            .fill(event.neutron_energy - self.neutron_mass, w);
        self.positron_angle.fill(event.cos_theta_e, w);
        self.neutron_angle.fill(event.cos_theta_n, w);
        self.opening_angle.fill(event.opening_angle, w);
    }
}
