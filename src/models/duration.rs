//! Duration formatting: seconds into a days/HH:MM:SS display form.

use crate::error::{BikeshareError, BikeshareResult};

const SECONDS_PER_DAY: u64 = 86_400;

/// A trip duration decomposed for display.
///
/// An input of exactly zero is kept as the distinct [`Zero`] sentinel rather
/// than a `00:00:00` string; both the total and the mean duration report it
/// the same way.
///
/// [`Zero`]: FormattedDuration::Zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattedDuration {
    /// No duration at all.
    Zero,
    Formatted {
        days: u64,
        hours: u32,
        minutes: u32,
        seconds: u32,
    },
}

impl FormattedDuration {
    /// Decompose a non-negative count of seconds. Fractional seconds are
    /// truncated.
    ///
    /// # Errors
    /// Returns [`BikeshareError::InvalidInput`] for negative or non-finite
    /// input; valid data never produces either.
    pub fn from_seconds(secs: f64) -> BikeshareResult<Self> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(BikeshareError::InvalidInput(format!(
                "duration must be a non-negative number of seconds, got {}",
                secs
            )));
        }
        if secs == 0.0 {
            return Ok(FormattedDuration::Zero);
        }

        let total = secs.floor() as u64;
        let days = total / SECONDS_PER_DAY;
        // The remainder is derived from the input even when days == 0.
        let remainder = total - days * SECONDS_PER_DAY;
        Ok(FormattedDuration::Formatted {
            days,
            hours: (remainder / 3600) as u32,
            minutes: (remainder % 3600 / 60) as u32,
            seconds: (remainder % 60) as u32,
        })
    }

    /// Plain `HH:MM:SS` rendering, wrapping at 24 hours like a clock. Used
    /// for the mean duration, which is always below a day in practice but
    /// must not misrender when it is not.
    pub fn clock_display(&self) -> String {
        match *self {
            FormattedDuration::Zero => "no duration".to_string(),
            FormattedDuration::Formatted {
                hours,
                minutes,
                seconds,
                ..
            } => format!("{:02}:{:02}:{:02}", hours, minutes, seconds),
        }
    }

    /// The decomposition reassembled into whole seconds.
    pub fn total_seconds(&self) -> u64 {
        match *self {
            FormattedDuration::Zero => 0,
            FormattedDuration::Formatted {
                days,
                hours,
                minutes,
                seconds,
            } => days * SECONDS_PER_DAY + hours as u64 * 3600 + minutes as u64 * 60 + seconds as u64,
        }
    }
}

impl std::fmt::Display for FormattedDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            FormattedDuration::Zero => f.write_str("no duration"),
            FormattedDuration::Formatted {
                days,
                hours,
                minutes,
                seconds,
            } => {
                if days > 0 {
                    write!(f, "{} Days ", days)?;
                }
                write!(f, "{:02}:{:02}:{:02}", hours, minutes, seconds)
            }
        }
    }
}
