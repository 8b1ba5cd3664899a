
pub mod dispersion;
pub mod report;
pub mod wave;

pub mod constants;
pub mod error;
pub mod parameters;
