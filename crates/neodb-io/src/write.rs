//! Writers for streams of close approaches.
//!
//! Each output record describes one approach and its body. Unlinked
//! approaches are written with their own designation, an empty name, an
//! unknown diameter and a `false` hazard flag.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use neodb_model::Body;
use neodb_store::Approach;
use serde::ser::{SerializeSeq, Serializer as _};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;
use tracing::debug;

use crate::errors::DataError;

/// Header row of the CSV output.
pub const CSV_FIELDS: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// Writes approaches as CSV rows under [`CSV_FIELDS`]. Returns the row count.
///
/// The header is written even when there are no results. Unknown diameters
/// are written as `nan`.
pub fn write_to_csv<'s, I, W>(results: I, writer: W) -> Result<usize, DataError>
where
    I: IntoIterator<Item = Approach<'s>>,
    W: Write,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CSV_FIELDS)?;

    let mut count = 0;
    for approach in results {
        let neo = neo_of(&approach);
        let diameter = match neo.diameter() {
            Some(diameter) => diameter.to_string(),
            None => "nan".to_string(),
        };
        csv_writer.write_record([
            approach.time_str(),
            approach.distance_au.to_string(),
            approach.velocity_km_s.to_string(),
            neo.designation.to_string(),
            neo.name.clone().unwrap_or_default(),
            diameter,
            neo.is_hazardous.to_string(),
        ])?;
        count += 1;
    }
    csv_writer.flush()?;

    Ok(count)
}

/// Writes approaches as a tab-indented JSON array. Returns the record count.
///
/// Each element carries `datetime_utc`, `distance_au`, `velocity_km_s` and a
/// nested `neo` object; keys are sorted. Unknown diameters are `null`.
pub fn write_to_json<'s, I, W>(results: I, mut writer: W) -> Result<usize, DataError>
where
    I: IntoIterator<Item = Approach<'s>>,
    W: Write,
{
    let mut serializer = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"\t"));
    let mut seq = serializer.serialize_seq(None)?;
    let mut count = 0;
    for approach in results {
        // Going through `Value` sorts the keys of the record and its `neo`.
        let record = serde_json::to_value(JsonRecord {
            datetime_utc: approach.time_str(),
            distance_au: approach.distance_au,
            velocity_km_s: approach.velocity_km_s,
            neo: neo_of(&approach),
        })?;
        seq.serialize_element(&record)?;
        count += 1;
    }
    seq.end()?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(count)
}

/// Writes approaches to a CSV file, replacing any existing file.
pub fn write_csv_file<'s, I, P>(results: I, path: P) -> Result<usize, DataError>
where
    I: IntoIterator<Item = Approach<'s>>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let count = write_to_csv(results, BufWriter::new(File::create(path)?))?;
    debug!(path = %path.display(), count, "wrote CSV results");
    Ok(count)
}

/// Writes approaches to a JSON file, replacing any existing file.
pub fn write_json_file<'s, I, P>(results: I, path: P) -> Result<usize, DataError>
where
    I: IntoIterator<Item = Approach<'s>>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let count = write_to_json(results, BufWriter::new(File::create(path)?))?;
    debug!(path = %path.display(), count, "wrote JSON results");
    Ok(count)
}

/// Writes approaches to `path`, choosing the format from its extension
/// (`.csv` or `.json`, case-insensitive).
pub fn write_results<'s, I, P>(results: I, path: P) -> Result<usize, DataError>
where
    I: IntoIterator<Item = Approach<'s>>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => write_csv_file(results, path),
        Some("json") => write_json_file(results, path),
        _ => Err(DataError::UnsupportedFormat(path.display().to_string())),
    }
}

#[derive(Serialize)]
struct JsonRecord<'s> {
    datetime_utc: String,
    distance_au: f64,
    velocity_km_s: f64,
    neo: Cow<'s, Body>,
}

fn neo_of<'s>(approach: &Approach<'s>) -> Cow<'s, Body> {
    match approach.body() {
        Some(body) => Cow::Borrowed(body),
        None => Cow::Owned(Body::new(
            approach.body_designation.clone(),
            None,
            f64::NAN,
            false,
        )),
    }
}
