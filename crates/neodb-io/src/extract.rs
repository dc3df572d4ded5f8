//! Loaders for the NEO catalog (CSV) and close-approach data (JSON).

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use neodb_model::{
    cd_to_datetime, parse_number, ApproachEvent, Body, Designation, ValidationError,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::DataError;

/// How malformed rows are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadMode {
    /// The first malformed row is an error.
    #[default]
    Strict,
    /// Malformed rows are logged and skipped.
    Permissive,
}

/// Loads near-Earth objects from a CSV file.
pub fn load_bodies<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Vec<Body>, DataError> {
    let path = path.as_ref();
    let bodies = read_bodies(BufReader::new(File::open(path)?), mode)?;
    debug!(path = %path.display(), count = bodies.len(), "loaded bodies");
    Ok(bodies)
}

/// Reads near-Earth objects from CSV with a header row.
///
/// Only `pdes` is required. A missing or empty `name` is no name, a missing
/// or empty `diameter` is unknown (NaN), and `pha` must be `Y` for the body
/// to be hazardous.
pub fn read_bodies<R: Read>(reader: R, mode: ReadMode) -> Result<Vec<Body>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let position = |name: &str| headers.iter().position(|h| h.trim() == name);

    let columns = BodyColumns {
        pdes: position("pdes").ok_or_else(|| DataError::MissingField {
            field: "pdes".to_string(),
        })?,
        name: position("name"),
        diameter: position("diameter"),
        pha: position("pha"),
    };

    let mut tally = RowTally::new(mode);
    let mut bodies = Vec::new();
    for (index, record) in csv_reader.byte_records().enumerate() {
        let parsed = csv::StringRecord::from_byte_record(record?)
            .map_err(|err| ValidationError::Encoding {
                column: err.utf8_error().field(),
            })
            .and_then(|record| columns.parse(&record));
        match parsed {
            Ok(body) => bodies.push(body),
            Err(reason) => tally.reject(index + 1, reason)?,
        }
    }
    tally.finish("bodies");

    Ok(bodies)
}

/// Loads close approaches from a JSON file.
pub fn load_approaches<P: AsRef<Path>>(
    path: P,
    mode: ReadMode,
) -> Result<Vec<ApproachEvent>, DataError> {
    let path = path.as_ref();
    let approaches = read_approaches(BufReader::new(File::open(path)?), mode)?;
    debug!(path = %path.display(), count = approaches.len(), "loaded close approaches");
    Ok(approaches)
}

/// Reads close approaches from a `{"fields": [...], "data": [[...]]}` document.
///
/// Columns are located by name; `des`, `cd`, `dist` and `v_rel` are required.
pub fn read_approaches<R: Read>(
    reader: R,
    mode: ReadMode,
) -> Result<Vec<ApproachEvent>, DataError> {
    let document: CadDocument = serde_json::from_reader(reader)?;
    let position = |name: &str| {
        document
            .fields
            .iter()
            .position(|f| f == name)
            .ok_or_else(|| DataError::MissingField {
                field: name.to_string(),
            })
    };

    let columns = ApproachColumns {
        des: position("des")?,
        cd: position("cd")?,
        dist: position("dist")?,
        v_rel: position("v_rel")?,
    };

    let mut tally = RowTally::new(mode);
    let mut approaches = Vec::with_capacity(document.data.len());
    for (index, row) in document.data.iter().enumerate() {
        let parsed = match row {
            Value::Array(cells) => columns.parse(cells),
            _ => Err(ValidationError::Shape {
                expected: "an array",
            }),
        };
        match parsed {
            Ok(approach) => approaches.push(approach),
            Err(reason) => tally.reject(index + 1, reason)?,
        }
    }
    tally.finish("close approaches");

    Ok(approaches)
}

#[derive(Debug, Deserialize)]
struct CadDocument {
    fields: Vec<String>,
    #[serde(default)]
    data: Vec<Value>,
}

struct BodyColumns {
    pdes: usize,
    name: Option<usize>,
    diameter: Option<usize>,
    pha: Option<usize>,
}

impl BodyColumns {
    fn parse(&self, record: &csv::StringRecord) -> Result<Body, ValidationError> {
        let field = |column: Option<usize>| column.and_then(|i| record.get(i)).map(str::trim);

        let designation = Designation::parse(field(Some(self.pdes)).unwrap_or(""))?;
        let name = field(self.name).map(str::to_string);
        let diameter_km = match field(self.diameter) {
            None | Some("") => f64::NAN,
            Some(value) => parse_number("diameter", value)?,
        };
        let is_hazardous = field(self.pha) == Some("Y");

        Ok(Body::new(designation, name, diameter_km, is_hazardous))
    }
}

struct ApproachColumns {
    des: usize,
    cd: usize,
    dist: usize,
    v_rel: usize,
}

impl ApproachColumns {
    fn parse(&self, row: &[Value]) -> Result<ApproachEvent, ValidationError> {
        Ok(ApproachEvent::new(
            Designation::parse(cell(row, self.des))?,
            cd_to_datetime(&cell(row, self.cd))?,
            parse_number("dist", &cell(row, self.dist))?,
            parse_number("v_rel", &cell(row, self.v_rel))?,
        ))
    }
}

fn cell(row: &[Value], index: usize) -> Cow<'_, str> {
    match row.get(index) {
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Null) | None => Cow::Borrowed(""),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

struct RowTally {
    mode: ReadMode,
    skipped: usize,
}

impl RowTally {
    fn new(mode: ReadMode) -> Self {
        Self { mode, skipped: 0 }
    }

    fn reject(&mut self, row: usize, reason: ValidationError) -> Result<(), DataError> {
        match self.mode {
            ReadMode::Strict => Err(DataError::Malformed { row, reason }),
            ReadMode::Permissive => {
                warn!(row, %reason, "skipping malformed row");
                self.skipped += 1;
                Ok(())
            }
        }
    }

    fn finish(&self, kind: &str) {
        if self.skipped > 0 {
            warn!(kind, skipped = self.skipped, "skipped malformed rows");
        }
    }
}
