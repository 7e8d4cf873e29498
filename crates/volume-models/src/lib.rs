//! # Volume Models
//!
//! Rolling, lagged volume statistics over a daily volume series: average
//! daily volume (ADV) and median daily volume (MDV). Both are lagged by one
//! observation so that a date's statistic never includes that date's own
//! volume — the figure a participation-rate decision would actually have had
//! available.
//!
//! Like the TCA crate, this is pure Layer 1 logic: the series is an
//! in-memory slice supplied by an external market-data collaborator.

pub mod error;

pub use error::VolumeError;

use rust_decimal::Decimal;

/// Lagged rolling average daily volume.
///
/// Element `i` of the result is the mean of the `window` observations
/// strictly before `i`, and `None` while the lookback is not yet full. The
/// result has the same length as the input.
///
/// # Errors
///
/// Returns [`VolumeError::InvalidWindow`] for a zero window.
pub fn adv(volume: &[Decimal], window: usize) -> Result<Vec<Option<Decimal>>, VolumeError> {
    validate_window(window)?;

    let out = (0..volume.len())
        .map(|i| {
            if i < window {
                return None;
            }
            let lookback = &volume[i - window..i];
            let sum: Decimal = lookback.iter().copied().sum();
            Some(sum / Decimal::from(window as u64))
        })
        .collect();

    Ok(out)
}

/// Lagged rolling median daily volume.
///
/// Same shape and lag as [`adv`]; even windows average the two middle
/// observations.
///
/// # Errors
///
/// Returns [`VolumeError::InvalidWindow`] for a zero window.
pub fn mdv(volume: &[Decimal], window: usize) -> Result<Vec<Option<Decimal>>, VolumeError> {
    validate_window(window)?;

    let out = (0..volume.len())
        .map(|i| {
            if i < window {
                return None;
            }
            let mut lookback = volume[i - window..i].to_vec();
            lookback.sort();

            let mid = window / 2;
            let median = if window % 2 == 1 {
                lookback[mid]
            } else {
                (lookback[mid - 1] + lookback[mid]) / Decimal::from(2u64)
            };
            Some(median)
        })
        .collect();

    Ok(out)
}

fn validate_window(window: usize) -> Result<(), VolumeError> {
    if window == 0 {
        return Err(VolumeError::InvalidWindow(
            "lookback window must be at least one observation".to_string(),
        ));
    }
    Ok(())
}
