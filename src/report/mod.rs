//! Indoor-walk energy report.
//!
//! Consumes workouts from the streaming extractor, applies the fixed
//! filter chain, and writes one comma-separated line per surviving
//! workout. The chain, in evaluation order:
//!
//! 1. activity type is walking
//! 2. the `HKIndoorWorkout` metadata flag is present and `1`
//! 3. an active-energy-burned statistic exists
//! 4. that statistic's unit is `kcal`
//! 5. the statistic carries sum, start and end dates
//!
//! A workout failing any step is dropped silently; the pipeline is
//! stateless across workouts.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::export::{ExportError, Workout, WorkoutStream};

/// Activity type identifier for walking workouts.
pub const WALKING_ACTIVITY_TYPE: &str = "HKWorkoutActivityTypeWalking";

/// Metadata key flagging a workout as indoor.
pub const INDOOR_WORKOUT_KEY: &str = "HKIndoorWorkout";

/// Quantity type identifier for active energy burned.
pub const ACTIVE_ENERGY_TYPE: &str = "HKQuantityTypeIdentifierActiveEnergyBurned";

/// Expected unit for the energy statistic.
pub const ENERGY_UNIT: &str = "kcal";

/// UTC offset suffix stripped from report dates.
const UTC_OFFSET_SUFFIX: &str = " +0000";

/// One line of the report: start, end, and energy sum as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub start: String,
    pub end: String,
    pub energy: String,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.start, self.end, self.energy)
    }
}

/// Evaluates the filter chain against one workout.
///
/// Returns the formatted line data when every filter passes, `None`
/// otherwise. A statistic that passes the type and unit filters but lacks
/// sum or date attributes is a data-integrity fault in the export; the
/// workout is skipped with a warning rather than aborting the run.
pub fn evaluate(workout: &Workout) -> Option<ReportLine> {
    if workout.activity_type != WALKING_ACTIVITY_TYPE {
        return None;
    }

    let indoor = workout.metadata_entry(INDOOR_WORKOUT_KEY)?;
    if indoor.value != "1" {
        return None;
    }

    let energy = workout.statistic(ACTIVE_ENERGY_TYPE)?;
    if energy.unit.as_deref() != Some(ENERGY_UNIT) {
        return None;
    }

    let (Some(sum), Some(start), Some(end)) =
        (&energy.sum, &energy.start_date, &energy.end_date)
    else {
        warn!(
            quantity_type = ACTIVE_ENERGY_TYPE,
            "skipping workout: energy statistic is missing sum or date attributes"
        );
        return None;
    };

    Some(ReportLine {
        start: strip_utc_suffix(start).to_string(),
        end: strip_utc_suffix(end).to_string(),
        energy: sum.clone(),
    })
}

/// Removes a trailing `" +0000"` from a date string, if present.
///
/// No other normalization takes place; dates are passed through as
/// opaque text.
pub fn strip_utc_suffix(date: &str) -> &str {
    date.strip_suffix(UTC_OFFSET_SUFFIX).unwrap_or(date)
}

/// Drains the workout stream, writing one line per matching workout.
///
/// Output is line-granular with no header and no trailing summary. Stream
/// failures abort via `?`; lines already written stand.
pub fn write_report<R: BufRead, W: Write>(
    stream: WorkoutStream<R>,
    writer: &mut W,
) -> Result<(), ExportError> {
    let mut seen = 0usize;
    let mut matched = 0usize;

    for workout in stream {
        let workout = workout?;
        seen += 1;
        if let Some(line) = evaluate(&workout) {
            writeln!(writer, "{line}")?;
            matched += 1;
        }
    }

    debug!(seen, matched, "report complete");
    Ok(())
}
