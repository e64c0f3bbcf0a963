//! Next-month spend forecast
//!
//! A straight-line fit through the monthly sums, extrapolated one month past
//! the last bucket. This is trend extrapolation, not a statistical model: it
//! has no confidence bounds and can go negative or look implausible on
//! volatile data. A result of 0 is ambiguous between "flat at zero" and
//! "not enough months", so callers should not read meaning into it alone.

use super::stats::{mean, round2};

/// Minimum number of monthly buckets before a trend is fitted
pub const MIN_FORECAST_MONTHS: usize = 2;

/// Ordinary least squares over `(index, value)`, evaluated at `index = n`
pub fn forecast(monthly_values: &[f64]) -> f64 {
    let n = monthly_values.len();
    if n < MIN_FORECAST_MONTHS {
        return 0.0;
    }

    let mean_x = (n as f64 - 1.0) / 2.0;
    let mean_y = mean(monthly_values);

    let (sxy, sxx) = monthly_values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(sxy, sxx), (i, y)| {
            let dx = i as f64 - mean_x;
            (sxy + dx * (y - mean_y), sxx + dx * dx)
        });

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    round2(intercept + slope * n as f64)
}
