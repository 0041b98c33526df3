//! Apple Health export parsing.
//!
//! An `export.xml` file is a single large XML document containing, among
//! other things, `<Workout>` elements (one per exercise session) and
//! `<Record>` elements (raw sensor samples, which dominate the file size).
//! This module provides the data model for workouts and a streaming
//! extractor ([`WorkoutStream`]) that yields them one at a time without
//! ever holding more than one workout subtree in memory.

mod error;
mod stream;

pub use error::ExportError;
pub use stream::WorkoutStream;

/// One workout record from the export.
///
/// Carries the activity type plus the child entries the report cares
/// about. Other child elements of `<Workout>` (`WorkoutEvent`,
/// `WorkoutRoute`) are not captured.
#[derive(Debug, Clone, Default)]
pub struct Workout {
    /// Value of the `workoutActivityType` attribute.
    pub activity_type: String,
    /// `<MetadataEntry>` children, in document order.
    pub metadata: Vec<MetadataEntry>,
    /// `<WorkoutStatistics>` children, in document order.
    pub statistics: Vec<WorkoutStatistic>,
}

impl Workout {
    /// Finds the first metadata entry with the given key.
    pub fn metadata_entry(&self, key: &str) -> Option<&MetadataEntry> {
        self.metadata.iter().find(|entry| entry.key == key)
    }

    /// Finds the first statistic for the given quantity type.
    pub fn statistic(&self, quantity_type: &str) -> Option<&WorkoutStatistic> {
        self.statistics
            .iter()
            .find(|stat| stat.quantity_type == quantity_type)
    }
}

/// A key/value annotation attached to a workout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataEntry {
    pub key: String,
    pub value: String,
}

/// A per-quantity-type aggregate attached to a workout.
///
/// All values are carried as the opaque strings found in the export; the
/// schema marks everything except `type` as optional, so absence is
/// represented rather than defaulted.
#[derive(Debug, Clone, Default)]
pub struct WorkoutStatistic {
    /// Value of the `type` attribute, e.g.
    /// `HKQuantityTypeIdentifierActiveEnergyBurned`.
    pub quantity_type: String,
    pub unit: Option<String>,
    pub sum: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub average: Option<String>,
    pub minimum: Option<String>,
    pub maximum: Option<String>,
}
