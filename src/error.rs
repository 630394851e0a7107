use thiserror::Error;

/// Error taxonomy for the kinematics kernel.
///
/// A `KinematicDomain` fault means the (neutrino energy, positron angle)
/// pair lies outside the physically valid region for the quasi-elastic
/// formulation: a radicand went negative or a denominator vanished. These
/// are detected explicitly and surfaced to the caller instead of letting a
/// NaN leak through the formula chain.
#[derive(Error, Debug)]
pub enum IbdError {
    #[error("kinematic domain fault at E_v={e_v} MeV, cos_theta_e={cos_theta_e}: {context}")]
    KinematicDomain {
        e_v: f64,
        cos_theta_e: f64,
        context: &'static str,
    },

    #[error("non-finite squared amplitude at E_v={e_v} MeV, cos_theta_e={cos_theta_e}")]
    Amplitude { e_v: f64, cos_theta_e: f64 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type IbdResult<T> = Result<T, IbdError>;
