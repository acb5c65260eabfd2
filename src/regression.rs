//! Ordinary least squares fitting of a line to the posted samples.

pub use self::error::{Axis, Error};
pub use self::fit::{fit, Fit};
pub use self::sample::{extract, Sample, SampleSet};

mod error;
mod fit;
mod sample;

/// Result of the whole validation and fitting pipeline for a single request.
pub type Outcome = Result<Fit, Error>;

/// Runs the extraction and the fitting over the raw request body.
pub fn process(body: &[u8]) -> Outcome {
    let samples = extract(body)?;
    fit(&samples)
}
