//! Step-response recording and characterization
//!
//! A [`Response`] collects the `(time, value)` trace of one simulation run and
//! derives the transient metrics the fitness function scores: rise time,
//! settling time, and maximum overshoot. Each metric is an `Option` that stays
//! `None` until its defining condition has actually been observed.

use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};

/// Fraction of the setpoint that defines the rise-time threshold
pub const RISE_TIME_THRESHOLD: f64 = 0.9;

/// Fractional tolerance band around the setpoint that defines settling
pub const SETTLING_BAND: f64 = 0.01;

/// One recorded sample of the closed-loop output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Simulation time in seconds
    pub time: f64,
    /// Plant output at that time
    pub value: f64,
}

/// The recorded step response of one simulation run
///
/// Samples are appended in time order during the run; once the run completes
/// the response is read-only. Metrics are updated incrementally as samples
/// arrive:
///
/// - **rise time** is latched the first time the 2-decimal-rounded output
///   equals 90% of the setpoint and is never retracted
/// - **settling time** marks the *last* entry into the ±1% band that holds
///   until the end of the run; leaving the band clears it
/// - **max overshoot** tracks the largest output at or above the setpoint and
///   stays unset if the output never gets there
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    setpoint: f64,
    samples: Vec<Sample>,
    rise_time: Option<f64>,
    settling_time: Option<f64>,
    max_overshoot: Option<f64>,
}

impl Response {
    /// Create an empty response for the given setpoint
    pub fn new(setpoint: f64) -> Self {
        Self {
            setpoint,
            samples: Vec::new(),
            rise_time: None,
            settling_time: None,
            max_overshoot: None,
        }
    }

    /// Append one sample and fold it into the derived metrics
    pub fn record(&mut self, time: f64, value: f64) {
        self.samples.push(Sample { time, value });

        if self.rise_time.is_none()
            && (value * 100.0).round() / 100.0 == RISE_TIME_THRESHOLD * self.setpoint
        {
            self.rise_time = Some(time);
        }

        let abs_error = (self.setpoint - value).abs();
        let band = SETTLING_BAND * self.setpoint;
        if self.settling_time.is_none() && abs_error < band {
            self.settling_time = Some(time);
        } else if self.settling_time.is_some() && abs_error > band {
            self.settling_time = None;
        }

        if value >= self.setpoint {
            self.max_overshoot = Some(match self.max_overshoot {
                Some(peak) => peak.max(value),
                None => value,
            });
        }
    }

    /// The setpoint this response was recorded against
    pub fn setpoint(&self) -> f64 {
        self.setpoint
    }

    /// The recorded samples in time order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Time at which the rounded output first reached 90% of the setpoint
    pub fn rise_time(&self) -> Option<f64> {
        self.rise_time
    }

    /// Time of the last entry into the ±1% band that held to the end
    pub fn settling_time(&self) -> Option<f64> {
        self.settling_time
    }

    /// Largest output observed at or above the setpoint
    pub fn max_overshoot(&self) -> Option<f64> {
        self.max_overshoot
    }

    /// Integral of the squared tracking error over the run
    ///
    /// Left-rectangle convention: each interval between successive samples is
    /// weighted by the squared error at the *earlier* sample,
    /// `sum of (setpoint - value_i)^2 * (t_{i+1} - t_i)`.
    pub fn integral_squared_error(&self) -> f64 {
        self.samples
            .windows(2)
            .map(|pair| {
                let error = self.setpoint - pair[0].value;
                error * error * (pair[1].time - pair[0].time)
            })
            .sum()
    }

    /// Write the response as a two-column CSV table, header `time,value`
    pub fn write_csv<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "time,value")?;
        for sample in &self.samples {
            writeln!(writer, "{},{}", sample.time, sample.value)?;
        }
        Ok(())
    }
}

/// Renders the three transient metrics, one per line, with `unset` standing
/// in for metrics whose defining condition was never observed.
impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn line(f: &mut fmt::Formatter<'_>, label: &str, metric: Option<f64>) -> fmt::Result {
            match metric {
                Some(v) => writeln!(f, "{label}: {v}"),
                None => writeln!(f, "{label}: unset"),
            }
        }
        line(f, "Rise time", self.rise_time)?;
        line(f, "Settling time", self.settling_time)?;
        line(f, "Max overshoot", self.max_overshoot)
    }
}
