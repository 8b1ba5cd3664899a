use {
    crate::wave::{WaveInput, WaveProperties},
    std::fmt,
};

/// Echo of the supplied parameters followed by the solved wave properties
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub depth: f64,
    pub input: WaveInput,
    pub tolerance: f64,
    pub properties: WaveProperties,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "---")?;
        writeln!(f, "PARAMETERS")?;
        writeln!(f, "water depth: {:.6}", self.depth)?;
        if let WaveInput::Period(t) = self.input {
            writeln!(f, "period: {:.6}", t)?;
        }
        writeln!(f, "angular frequency: {:.6}", self.properties.angular_frequency)?;
        writeln!(f, "error: {:.6}", self.tolerance)?;
        writeln!(f, "---")?;
        writeln!(f, "OUTPUT")?;
        writeln!(
            f,
            "initial guess (shallow water approximation): {:.6}",
            self.properties.initial_guess
        )?;
        writeln!(
            f,
            "final guess (Newton-Raphson method): {:.6}",
            self.properties.wavenumber
        )?;
        writeln!(f, "wavelength: {:.6}", self.properties.wavelength)?;
        writeln!(
            f,
            "depth to wavelength ratio: {:.6}",
            self.properties.depth_to_wavelength_ratio
        )?;
        write!(f, "---")
    }
}

#[cfg(test)]
mod test {
    use {
        super::*,
        crate::{dispersion::DispersionSolver, wave::wave_properties},
    };

    fn report(input: WaveInput) -> String {
        let solver = DispersionSolver::default();

        Report {
            depth: 10.0,
            input,
            tolerance: solver.tolerance,
            properties: wave_properties(10.0, input, &solver).unwrap(),
        }
        .to_string()
    }

    #[test]
    fn period_supplied() {
        assert_eq!(
            report(WaveInput::Period(8.0)),
            "---\n\
             PARAMETERS\n\
             water depth: 10.000000\n\
             period: 8.000000\n\
             angular frequency: 0.785398\n\
             error: 0.000010\n\
             ---\n\
             OUTPUT\n\
             initial guess (shallow water approximation): 0.079297\n\
             final guess (Newton-Raphson method): 0.088622\n\
             wavelength: 11.283823\n\
             depth to wavelength ratio: 0.886224\n\
             ---"
        );
    }

    #[test]
    fn frequency_supplied() {
        let out = report(WaveInput::Frequency(0.5));

        assert!(!out.contains("period"));
        assert!(out.contains("angular frequency: 0.500000\n"));
    }
}
