use crate::regression::{Error, SampleSet};

/// Fitted line `y = slope × x + intercept`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Fit {
    pub slope: f64,
    pub intercept: f64,
}

/// Ordinary least squares over the centered sums.
///
/// Fails with [`Error::NotFitable`] when all the X's are equal,
/// which includes a single sample. The zero check is exact on purpose.
/// Sums overflowing `f64` are not fitable either: the line is always finite.
pub fn fit(samples: &SampleSet) -> Result<Fit, Error> {
    let n = samples.len() as f64;
    let (sum_x, sum_y) = samples
        .iter()
        .fold((0.0, 0.0), |(sum_x, sum_y), sample| (sum_x + sample.x, sum_y + sample.y));
    let (mean_x, mean_y) = (sum_x / n, sum_y / n);

    let (s_xy, s_xx) = samples.iter().fold((0.0, 0.0), |(s_xy, s_xx), sample| {
        let dx = sample.x - mean_x;
        (s_xy + dx * (sample.y - mean_y), s_xx + dx * dx)
    });
    if s_xx == 0.0 {
        return Err(Error::NotFitable);
    }

    let slope = s_xy / s_xx;
    let intercept = mean_y - slope * mean_x;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(Error::NotFitable);
    }
    Ok(Fit { slope, intercept })
}
