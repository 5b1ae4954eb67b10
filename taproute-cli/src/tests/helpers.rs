//! Test helpers for writing request files and decoding command output.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Temporary directory holding request files for one test.
pub(super) struct RequestDir {
    _tmp: TempDir,
    root: Utf8PathBuf,
}

impl RequestDir {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        Self { _tmp: tmp, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    /// Write `body` as JSON under `name` and return its path.
    pub(super) fn write_json(&self, name: &str, body: &Value) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_string_pretty(body).expect("serialise request");
        write_utf8(&path, payload.as_bytes());
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// A brewery record in the shape returned by public brewery directories.
pub(super) fn brewery(id: &str, latitude: f64, longitude: f64) -> Value {
    json!({
        "id": id,
        "name": format!("{id} Brewing"),
        "brewery_type": "micro",
        "city": "Philadelphia",
        "state_province": "Pennsylvania",
        "latitude": latitude,
        "longitude": longitude,
    })
}

/// The three breweries around (40, -75) used throughout the plan tests.
pub(super) fn crawl_breweries() -> Vec<Value> {
    vec![
        brewery("A", 40.01, -75.0),
        brewery("B", 40.0, -75.5),
        brewery("C", 40.5, -75.0),
    ]
}

pub(super) fn decode_output(bytes: &[u8]) -> Value {
    let text = std::str::from_utf8(bytes).expect("stdout utf-8");
    serde_json::from_str(text).expect("output should be JSON")
}

pub(super) fn route_ids(output: &Value) -> Vec<String> {
    output["route"]
        .as_array()
        .expect("route should be a list")
        .iter()
        .map(|stop| stop["id"].as_str().expect("stop id").to_owned())
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "mirrors the two-decimal presentation rounding"
)]
pub(super) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
