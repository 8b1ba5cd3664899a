use {
    crate::constants::{MAX_ITERATIONS, TOLERANCE},
    anyhow::{Context, Result},
    serde::Deserialize,
    std::{fs::File, path::Path},
};

/// Solver parameters
#[derive(Debug, PartialEq, Default, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Parameters {
    pub solver: Solver,
}

impl Parameters {
    /// Reads parameters from a YAML file, absent fields take their default values
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;

        serde_yaml::from_reader::<_, Parameters>(file)
            .with_context(|| format!("Failed to parse parameters from {:?}", path))
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Solver {
    /// Maximum difference between successive wavenumber estimates on convergence
    pub tolerance: f64,
    /// Number of Newton-Raphson updates after which the solve is abandoned
    pub max_iterations: usize,
}

impl Default for Solver {
    fn default() -> Self {
        Solver {
            tolerance: TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

#[cfg(test)]
mod test {
    use {super::*, std::io::Write, tempdir::TempDir};

    #[test]
    fn defaults() {
        assert_eq!(
            Parameters::default(),
            serde_yaml::from_reader::<_, Parameters>(
                File::open("src/testdata/defaults.yaml").unwrap()
            )
            .unwrap()
        );
    }

    #[test]
    fn partial_file() {
        let tempdir = TempDir::new("wavenumber").unwrap();
        let path = tempdir.path().join("parameters.yaml");

        File::create(&path)
            .unwrap()
            .write_all(b"solver:\n  tolerance: 1.0e-9\n")
            .unwrap();

        let params = Parameters::from_path(&path).unwrap();

        assert_eq!(params.solver.tolerance, 1.0E-9);
        assert_eq!(params.solver.max_iterations, MAX_ITERATIONS);
    }

    #[test]
    fn missing_file() {
        let tempdir = TempDir::new("wavenumber").unwrap();

        assert!(Parameters::from_path(tempdir.path().join("absent.yaml")).is_err());
    }

    #[test]
    fn malformed_file() {
        let tempdir = TempDir::new("wavenumber").unwrap();
        let path = tempdir.path().join("parameters.yaml");

        File::create(&path)
            .unwrap()
            .write_all(b"solver:\n  max_iterations: many\n")
            .unwrap();

        assert!(Parameters::from_path(&path).is_err());
    }
}
