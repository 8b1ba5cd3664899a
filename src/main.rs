#[macro_use]
extern crate clap;

use {
    anyhow::Result,
    log::{error, info},
    simplelog::{Config as LogConfig, LevelFilter, TermLogger, TerminalMode},
    wavenumber::{
        dispersion::DispersionSolver,
        parameters::Parameters,
        report::Report,
        wave::{parse_arguments, parse_positive, wave_properties, WaveInput},
    },
};

#[quit::main]
fn main() {
    let matches = clap_app!(wavenumber =>
        (version: crate_version!())
        (about: "Solves the linear dispersion relation for the wavenumber of a surface gravity wave.")
        (@arg DEPTH: -h --depth +takes_value "Water depth (m)")
        (@arg FREQUENCY: -w --frequency +takes_value "Angular frequency (rad/s)")
        (@arg PERIOD: -T --period +takes_value "Wave period (s)")
        (@arg ERROR: -e --error +takes_value "Convergence threshold on successive wavenumber estimates")
        (@arg PARAMETERS: -p --parameters +takes_value "Path to file containing solver parameters.")
        (@arg VERBOSE: -v --verbose "Log every solver iteration")
    )
    .get_matches();

    TermLogger::init(
        if matches.is_present("VERBOSE") {
            LevelFilter::Trace
        } else {
            LevelFilter::Info
        },
        LogConfig::default(),
        TerminalMode::Mixed,
    )
    .expect("Failed to initialize logger");

    let (depth, input) = parse_arguments(
        matches.value_of("DEPTH"),
        matches.value_of("FREQUENCY"),
        matches.value_of("PERIOD"),
    )
    .unwrap_or_else(|e| {
        error!("Error: \"{}\"", e);
        quit::with_code(2);
    });

    let mut params = match matches.value_of("PARAMETERS") {
        Some(path) => {
            let params = Parameters::from_path(path).unwrap_or_else(|e| {
                error!("{:#}", e);
                quit::with_code(1);
            });

            info!(
                "Successfully loaded solver parameters from \"{}\": \n{:#?}",
                path, params
            );

            params
        }
        None => Parameters::default(),
    };

    if let Some(tolerance) = matches.value_of("ERROR") {
        params.solver.tolerance = parse_positive("error", tolerance).unwrap_or_else(|e| {
            error!("Error: \"{}\"", e);
            quit::with_code(2);
        });
    }

    run(depth, input, &params).unwrap_or_else(|e| {
        error!("Error: \"{}\"", e);
        quit::with_code(1);
    });
}

fn run(depth: f64, input: WaveInput, params: &Parameters) -> Result<()> {
    let solver = DispersionSolver::from(params);

    let properties = wave_properties(depth, input, &solver)?;

    println!(
        "{}",
        Report {
            depth,
            input,
            tolerance: solver.tolerance,
            properties,
        }
    );

    Ok(())
}
