// Integration tests for generated-event invariants: every event the
// sampler emits must satisfy energy conservation, the energy-momentum
// relations and the angular bounds, and no event may exist below the IBD
// threshold.

use ibd_mc::{
    EventBank, EventSampler, Monoenergetic, Outcome, PhysicalConstants, TabulatedSpectrum,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn generate_sample(n: usize, spectrum_hi: f64) -> (PhysicalConstants, EventBank) {
    let constants = PhysicalConstants::default();
    let sampler = EventSampler::new(constants.clone()).unwrap();
    let spectrum = TabulatedSpectrum::new(1.0, spectrum_hi, &[1.0, 2.0, 3.0, 2.0, 1.0]).unwrap();
    let mut bank = EventBank::new();
    sampler.generate(n, &spectrum, &mut bank, 20180501).unwrap();
    (constants, bank)
}

#[test]
fn test_energy_conservation_for_all_events() {
    let (constants, bank) = generate_sample(2000, 10.0);
    assert!(!bank.is_empty());
    for event in bank.events() {
        let expected = event.neutrino_energy + constants.proton_mass - event.positron_energy;
        assert!(
            (event.neutron_energy - expected).abs() < 1e-9,
            "conservation violated at E_v = {}",
            event.neutrino_energy
        );
    }
}

#[test]
fn test_momentum_energy_relations_for_all_events() {
    let (constants, bank) = generate_sample(2000, 10.0);
    let m_e_sq = constants.electron_mass.powi(2);
    let m_n_sq = constants.neutron_mass.powi(2);
    for event in bank.events() {
        let p_e_sq = event.positron_energy.powi(2) - m_e_sq;
        let p_n_sq = event.neutron_energy.powi(2) - m_n_sq;
        assert!((event.positron_momentum.powi(2) - p_e_sq).abs() < 1e-9);
        assert!((event.neutron_momentum.powi(2) - p_n_sq).abs() < 1e-7);
    }
}

#[test]
fn test_angular_bounds_for_all_events() {
    let (_, bank) = generate_sample(2000, 10.0);
    for event in bank.events() {
        assert!((-1.0..=1.0).contains(&event.cos_theta_e));
        assert!(event.cos_theta_n <= 1.0, "clamp violated: {}", event.cos_theta_n);
        assert!(event.opening_angle.is_finite());
        assert!((0.0..=360.0).contains(&event.opening_angle));
    }
}

#[test]
fn test_no_event_below_threshold() {
    // Spectrum mass sits mostly below threshold; whatever gets through must
    // be strictly above it.
    let (constants, bank) = generate_sample(5000, 2.5);
    for event in bank.events() {
        assert!(event.neutrino_energy > constants.threshold);
    }
}

#[test]
fn test_threshold_edge_behavior() {
    let constants = PhysicalConstants::default();
    let sampler = EventSampler::new(constants).unwrap();
    let mut rng = StdRng::seed_from_u64(5);
    assert!(matches!(
        sampler.sample(1.807, &mut rng).unwrap(),
        Outcome::Rejected
    ));
    match sampler.sample(1.8071, &mut rng).unwrap() {
        Outcome::Accepted(event) => {
            assert!(event.positron_energy > 0.0);
            assert!(event.weight > 0.0);
        }
        Outcome::Rejected => panic!("marginally-above-threshold energy must be accepted"),
    }
}

#[test]
fn test_monoenergetic_run_matches_event_count_accounting() {
    let sampler = EventSampler::new(PhysicalConstants::default()).unwrap();
    let spectrum = Monoenergetic { energy: 5.0 };
    let mut bank = EventBank::new();
    let summary = sampler.generate(1000, &spectrum, &mut bank, 3).unwrap();
    assert_eq!(summary.accepted, 1000);
    assert_eq!(summary.rejected, 0);
    assert_eq!(bank.len(), summary.accepted);
}
