use {
    crate::{
        dispersion::{initial_guess, DispersionSolver},
        error::{ArgumentError, SolveError},
    },
    std::f64::consts::PI,
};

/// Temporal description of the wave, either its angular frequency (rad/s) or its period (s)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WaveInput {
    Frequency(f64),
    Period(f64),
}

impl WaveInput {
    /// Builds the input from two optional values, exactly one of which must be present
    pub fn from_options(
        frequency: Option<f64>,
        period: Option<f64>,
    ) -> Result<Self, ArgumentError> {
        match (frequency, period) {
            (Some(w), None) => Ok(WaveInput::Frequency(w)),
            (None, Some(t)) => Ok(WaveInput::Period(t)),
            (Some(_), Some(_)) => Err(ArgumentError::BothFrequencyAndPeriod),
            (None, None) => Err(ArgumentError::MissingFrequencyOrPeriod),
        }
    }

    pub fn angular_frequency(&self) -> f64 {
        match *self {
            WaveInput::Frequency(w) => w,
            WaveInput::Period(t) => 2.0 * PI / t,
        }
    }
}

/// Parses a named numeric argument
pub fn parse_quantity(name: &'static str, text: &str) -> Result<f64, ArgumentError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| ArgumentError::Malformed {
            name,
            value: text.to_owned(),
        })
}

/// Parses a named numeric argument that must be strictly positive
pub fn parse_positive(name: &'static str, text: &str) -> Result<f64, ArgumentError> {
    let value = parse_quantity(name, text)?;

    if value > 0.0 {
        Ok(value)
    } else {
        Err(ArgumentError::NonPositive { name, value })
    }
}

/// Validates the raw depth, frequency and period arguments into solver inputs
pub fn parse_arguments(
    depth: Option<&str>,
    frequency: Option<&str>,
    period: Option<&str>,
) -> Result<(f64, WaveInput), ArgumentError> {
    let depth = depth
        .ok_or(ArgumentError::MissingDepth)
        .and_then(|s| parse_positive("depth", s))?;

    let frequency = frequency
        .map(|s| parse_positive("frequency", s))
        .transpose()?;
    let period = period.map(|s| parse_positive("period", s)).transpose()?;

    Ok((depth, WaveInput::from_options(frequency, period)?))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveProperties {
    pub angular_frequency: f64,
    /// Shallow-water wavenumber used to seed the solve
    pub initial_guess: f64,
    pub wavenumber: f64,
    /// 1/k
    pub wavelength: f64,
    pub depth_to_wavelength_ratio: f64,
}

/// Solves for the wavenumber at the given depth and derives the wavelength quantities from it
pub fn wave_properties(
    depth: f64,
    input: WaveInput,
    solver: &DispersionSolver,
) -> Result<WaveProperties, SolveError> {
    let w = input.angular_frequency();
    let k0 = initial_guess(depth, w);
    let k = solver.solve(k0, depth, w)?.wavenumber;
    let wavelength = 1.0 / k;

    Ok(WaveProperties {
        angular_frequency: w,
        initial_guess: k0,
        wavenumber: k,
        wavelength,
        depth_to_wavelength_ratio: depth / wavelength,
    })
}
