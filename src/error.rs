use thiserror::Error;

/// Errors in the caller-supplied arguments, detected before the solver is run
#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    #[error("no water depth supplied")]
    MissingDepth,
    #[error("supplied both an angular frequency and a period")]
    BothFrequencyAndPeriod,
    #[error("supplied neither an angular frequency nor a period")]
    MissingFrequencyOrPeriod,
    #[error("failed to parse {name} from \"{value}\"")]
    Malformed { name: &'static str, value: String },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}

/// Errors raised by the dispersion solver itself
#[derive(Debug, Error, PartialEq)]
pub enum SolveError {
    #[error("wavenumber did not converge after {iterations} iterations (last estimate {last_estimate})")]
    NoConvergence {
        iterations: usize,
        last_estimate: f64,
    },
}
