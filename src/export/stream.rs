//! Streaming workout extraction.
//!
//! Apple Health exports routinely exceed a gigabyte, almost all of it
//! `<Record>` sample elements. [`WorkoutStream`] drives a quick-xml event
//! reader over the document and materializes only the `<Workout>` subtree
//! currently being read. `Record` subtrees (and any other element kind)
//! are never stored, so peak memory stays at one workout regardless of
//! file size.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use super::{ExportError, MetadataEntry, Workout, WorkoutStatistic};

const WORKOUT_TAG: &[u8] = b"Workout";
const METADATA_TAG: &[u8] = b"MetadataEntry";
const STATISTICS_TAG: &[u8] = b"WorkoutStatistics";

/// A pull-based cursor over the workouts of one export document.
///
/// The sequence is lazy, finite, in document order, and non-restartable:
/// each call to [`next_workout`](WorkoutStream::next_workout) advances the
/// underlying parse cursor until the next `</Workout>` boundary or the end
/// of the document.
pub struct WorkoutStream<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    /// Workout currently being assembled, between its open and close tags.
    current: Option<Workout>,
}

impl WorkoutStream<BufReader<File>> {
    /// Opens an export file for streaming.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ExportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ExportError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened export file");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> WorkoutStream<R> {
    /// Creates a stream over an already-open reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: Reader::from_reader(reader),
            buf: Vec::new(),
            current: None,
        }
    }

    /// Advances to the next completed workout.
    ///
    /// Returns `Ok(None)` at the end of the document. Any well-formedness
    /// violation aborts the stream with [`ExportError::Malformed`]; there
    /// is no partial-result mode.
    pub fn next_workout(&mut self) -> Result<Option<Workout>, ExportError> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf) {
                Ok(Event::Start(start)) => {
                    let position = self.reader.buffer_position();
                    open_element(&mut self.current, &start, position)?;
                }
                Ok(Event::Empty(start)) => {
                    let position = self.reader.buffer_position();
                    open_element(&mut self.current, &start, position)?;
                    // A self-closing element opens and closes in one event.
                    if start.name().as_ref() == WORKOUT_TAG {
                        if let Some(workout) = self.current.take() {
                            return Ok(Some(workout));
                        }
                    }
                }
                Ok(Event::End(end)) => {
                    if end.name().as_ref() == WORKOUT_TAG {
                        if let Some(workout) = self.current.take() {
                            return Ok(Some(workout));
                        }
                    }
                    // Closing boundaries of Record and every other element
                    // need no action: nothing was retained for them.
                }
                Ok(Event::Eof) => {
                    debug!("reached end of export document");
                    return Ok(None);
                }
                Ok(_) => {}
                Err(source) => {
                    return Err(ExportError::Malformed {
                        position: self.reader.buffer_position(),
                        source,
                    })
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for WorkoutStream<R> {
    type Item = Result<Workout, ExportError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_workout().transpose()
    }
}

/// Handles the entry boundary of an element.
///
/// Only three tag kinds matter: `Workout` begins a capture, and
/// `MetadataEntry`/`WorkoutStatistics` are recorded when a capture is in
/// progress. A `MetadataEntry` outside a workout belongs to a `Record`
/// sample and is skipped along with everything else.
fn open_element(
    current: &mut Option<Workout>,
    start: &BytesStart<'_>,
    position: usize,
) -> Result<(), ExportError> {
    match start.name().as_ref() {
        WORKOUT_TAG => {
            if current.is_none() {
                *current = Some(read_workout(start, position)?);
            }
        }
        METADATA_TAG => {
            if let Some(workout) = current.as_mut() {
                workout.metadata.push(read_metadata(start, position)?);
            }
        }
        STATISTICS_TAG => {
            if let Some(workout) = current.as_mut() {
                workout.statistics.push(read_statistic(start, position)?);
            }
        }
        _ => {}
    }
    Ok(())
}

fn read_workout(start: &BytesStart<'_>, position: usize) -> Result<Workout, ExportError> {
    let mut workout = Workout::default();
    for attr in start.attributes() {
        let attr = attr.map_err(|source| attr_error(source, position))?;
        if attr.key.as_ref() == b"workoutActivityType" {
            workout.activity_type = unescape(&attr, position)?;
        }
    }
    Ok(workout)
}

fn read_metadata(start: &BytesStart<'_>, position: usize) -> Result<MetadataEntry, ExportError> {
    let mut entry = MetadataEntry::default();
    for attr in start.attributes() {
        let attr = attr.map_err(|source| attr_error(source, position))?;
        match attr.key.as_ref() {
            b"key" => entry.key = unescape(&attr, position)?,
            b"value" => entry.value = unescape(&attr, position)?,
            _ => {}
        }
    }
    Ok(entry)
}

fn read_statistic(
    start: &BytesStart<'_>,
    position: usize,
) -> Result<WorkoutStatistic, ExportError> {
    let mut stat = WorkoutStatistic::default();
    for attr in start.attributes() {
        let attr = attr.map_err(|source| attr_error(source, position))?;
        let value = unescape(&attr, position)?;
        match attr.key.as_ref() {
            b"type" => stat.quantity_type = value,
            b"unit" => stat.unit = Some(value),
            b"sum" => stat.sum = Some(value),
            b"startDate" => stat.start_date = Some(value),
            b"endDate" => stat.end_date = Some(value),
            b"average" => stat.average = Some(value),
            b"minimum" => stat.minimum = Some(value),
            b"maximum" => stat.maximum = Some(value),
            _ => {}
        }
    }
    Ok(stat)
}

fn unescape(
    attr: &quick_xml::events::attributes::Attribute<'_>,
    position: usize,
) -> Result<String, ExportError> {
    attr.unescape_value()
        .map(|value| value.into_owned())
        .map_err(|source| ExportError::Malformed { position, source })
}

fn attr_error(source: AttrError, position: usize) -> ExportError {
    ExportError::Malformed {
        position,
        source: source.into(),
    }
}
