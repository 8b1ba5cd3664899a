/// Gravitational acceleration (m/s²)
pub const GRAVITY: f64 = 9.81;

/// Default convergence threshold on successive wavenumber estimates
pub const TOLERANCE: f64 = 1.0E-5;

/// Default cap on Newton-Raphson updates before giving up
pub const MAX_ITERATIONS: usize = 100;

/// Beyond this value of k·h, sech²(k·h) is below double precision relative to tanh(k·h) ≈ 1
pub const DEEP_WATER_KH: f64 = 20.0;
