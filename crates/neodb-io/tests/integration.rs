use neodb_io::{
    load_approaches, load_bodies, read_approaches, read_bodies, write_results, write_to_csv,
    write_to_json, DataError, ReadMode, CSV_FIELDS,
};
use neodb_store::{BoxedFilter, Criteria, Store};
use serde_json::{json, Value};
use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::rc::Rc;
use tempfile::TempDir;

const NEOS_CSV: &str = "\
id,pdes,name,pha,diameter
a0000433,433,Eros,N,16.84
a0099942,99942,Apophis,Y,0.37
bK15A00B,2015 AB,,,
";

fn cad_json() -> Value {
    json!({
        "signature": { "source": "NASA/JPL SBDB Close Approach Data API", "version": "1.1" },
        "count": "4",
        "fields": ["des", "orbit_id", "jd", "cd", "dist", "dist_min", "dist_max", "v_rel", "v_inf", "t_sigma_f", "h"],
        "data": [
            ["433", "659", "2415020.5", "1900-Jan-01 00:00", "0.3", "0.29", "0.31", "5.0", "4.9", "< 00:01", "10.4"],
            ["99942", "199", "2462240.4", "2029-Apr-13 21:46", "0.000254", "0.000254", "0.000254", "7.42", "5.84", "< 00:01", "19.7"],
            ["2015 AB", "7", "2458849.5", "2020-Jan-01 00:00", "0.5", "0.49", "0.51", "10.0", "9.9", "00:12", "24.1"],
            ["2020 ZZ", "3", "2458850.0", "2020-Jan-01 12:00", "0.1", "0.09", "0.11", "20.0", "19.9", "00:02", "27.0"]
        ]
    })
}

fn sample_store() -> Store {
    let bodies = read_bodies(NEOS_CSV.as_bytes(), ReadMode::Strict).unwrap();
    let approaches =
        read_approaches(cad_json().to_string().as_bytes(), ReadMode::Strict).unwrap();
    Store::new(bodies, approaches)
}

#[test]
fn test_read_bodies_coerces_fields() {
    let bodies = read_bodies(NEOS_CSV.as_bytes(), ReadMode::Strict).unwrap();
    assert_eq!(bodies.len(), 3);

    assert_eq!(bodies[0].designation.as_str(), "433");
    assert_eq!(bodies[0].name.as_deref(), Some("Eros"));
    assert_eq!(bodies[0].diameter(), Some(16.84));
    assert!(!bodies[0].is_hazardous);

    assert!(bodies[1].is_hazardous);

    assert_eq!(bodies[2].name, None);
    assert!(bodies[2].diameter_km.is_nan());
    assert!(!bodies[2].is_hazardous);
}

#[test]
fn test_read_bodies_requires_only_pdes() {
    let bodies = read_bodies("pdes\n433\n".as_bytes(), ReadMode::Strict).unwrap();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0].name, None);
    assert_eq!(bodies[0].diameter(), None);

    let err = read_bodies("name\nEros\n".as_bytes(), ReadMode::Strict).unwrap_err();
    assert!(matches!(err, DataError::MissingField { ref field } if field == "pdes"));
}

#[test]
fn test_read_approaches_by_field_name() {
    let approaches =
        read_approaches(cad_json().to_string().as_bytes(), ReadMode::Strict).unwrap();
    assert_eq!(approaches.len(), 4);
    assert_eq!(approaches[1].body_designation.as_str(), "99942");
    assert_eq!(approaches[1].time_str(), "2029-04-13 21:46");
    assert_eq!(approaches[1].distance_au, 0.000254);
    assert_eq!(approaches[1].velocity_km_s, 7.42);
    assert!(approaches.iter().all(|a| a.body().is_none()));
}

#[test]
fn test_read_approaches_missing_column() {
    let doc = json!({ "fields": ["des", "cd", "dist"], "data": [] });
    let err = read_approaches(doc.to_string().as_bytes(), ReadMode::Strict).unwrap_err();
    assert!(matches!(err, DataError::MissingField { ref field } if field == "v_rel"));
}

#[test]
fn test_load_from_files() {
    let temp_dir = TempDir::new().unwrap();
    let neos = temp_dir.path().join("neos.csv");
    let cad = temp_dir.path().join("cad.json");
    fs::write(&neos, NEOS_CSV).unwrap();
    fs::write(&cad, cad_json().to_string()).unwrap();

    let store = Store::new(
        load_bodies(&neos, ReadMode::Strict).unwrap(),
        load_approaches(&cad, ReadMode::Strict).unwrap(),
    );
    assert_eq!(store.bodies().len(), 3);
    assert_eq!(store.events().len(), 4);
    assert_eq!(store.unlinked_events(), 1);
    assert_eq!(store.find_by_name("apophis").unwrap().events().len(), 1);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = load_bodies(temp_dir.path().join("absent.csv"), ReadMode::Strict).unwrap_err();
    assert!(matches!(err, DataError::Io(_)));
}

#[test]
fn test_write_csv() {
    let store = sample_store();
    let mut buffer = Vec::new();
    let count = write_to_csv(store.query(&[]), &mut buffer).unwrap();
    assert_eq!(count, 4);

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], CSV_FIELDS.join(","));
    assert_eq!(lines[1], "1900-01-01 00:00,0.3,5,433,Eros,16.84,false");
    assert_eq!(lines[3], "2020-01-01 00:00,0.5,10,2015 AB,,nan,false");
    assert_eq!(lines[4], "2020-01-01 12:00,0.1,20,2020 ZZ,,nan,false");
}

#[test]
fn test_write_csv_header_without_results() {
    let store = sample_store();
    let filters = Criteria {
        distance_min: Some(10.0),
        ..Criteria::default()
    }
    .into_filters();

    let mut buffer = Vec::new();
    assert_eq!(write_to_csv(store.query(&filters), &mut buffer).unwrap(), 0);
    assert_eq!(String::from_utf8(buffer).unwrap().trim_end(), CSV_FIELDS.join(","));
}

#[test]
fn test_write_json() {
    let store = sample_store();
    let mut buffer = Vec::new();
    let count = write_to_json(store.query(&[]), &mut buffer).unwrap();
    assert_eq!(count, 4);

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.starts_with("[\n\t{\n\t\t\"datetime_utc\""));

    let parsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        parsed[0],
        json!({
            "datetime_utc": "1900-01-01 00:00",
            "distance_au": 0.3,
            "velocity_km_s": 5.0,
            "neo": {
                "designation": "433",
                "name": "Eros",
                "diameter_km": 16.84,
                "potentially_hazardous": false
            }
        })
    );
    assert_eq!(parsed[2]["neo"]["name"], "");
    assert!(parsed[2]["neo"]["diameter_km"].is_null());
    assert_eq!(parsed[3]["neo"]["designation"], "2020 ZZ");
}

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_json_streams_records() {
    let store = sample_store();
    let buffer = SharedBuffer::default();
    let unfiltered: [BoxedFilter; 0] = [];

    let mut written_before = Vec::new();
    let results = store
        .query(&unfiltered)
        .inspect(|_| written_before.push(buffer.0.borrow().len()));
    assert_eq!(write_to_json(results, buffer.clone()).unwrap(), 4);

    // Each record reaches the writer before the next one is pulled.
    assert_eq!(written_before.len(), 4);
    assert!(written_before.windows(2).all(|pair| pair[0] < pair[1]));
    let parsed: Value = serde_json::from_slice(&buffer.0.borrow()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 4);
}

#[test]
fn test_write_results_by_extension() {
    let temp_dir = TempDir::new().unwrap();
    let store = sample_store();
    let filters = Criteria {
        hazardous: Some(true),
        ..Criteria::default()
    }
    .into_filters();

    let json_path = temp_dir.path().join("out.JSON");
    assert_eq!(write_results(store.query(&filters), &json_path).unwrap(), 1);
    let parsed: Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed[0]["neo"]["name"], "Apophis");

    let csv_path = temp_dir.path().join("out.csv");
    assert_eq!(write_results(store.query(&[]), &csv_path).unwrap(), 4);
    assert_eq!(fs::read_to_string(&csv_path).unwrap().lines().count(), 5);

    let txt_path = temp_dir.path().join("out.txt");
    let err = write_results(store.query(&[]), &txt_path).unwrap_err();
    assert!(matches!(err, DataError::UnsupportedFormat(_)));
    assert!(!txt_path.exists());
}
