//! Test helpers for writing score requests into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use geoscore_core::{LatLng, PointOfInterest, ScoreRequest};
use tempfile::TempDir;

/// Write `contents` to `path`, creating parent directories as needed.
pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directories");
    }
    std::fs::write(path, contents).expect("write file");
}

/// A temporary directory addressed by a UTF-8 path.
pub(super) fn utf8_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// A small request around central Lisbon with a cafe, a gym and a metro stop.
pub(super) fn sample_request(address: Option<&str>) -> ScoreRequest {
    let origin = LatLng {
        lat: 38.7223,
        lng: -9.1393,
    };
    let nearby = vec![
        PointOfInterest::new(
            "Pastelaria",
            LatLng {
                lat: 38.7226,
                lng: -9.1391,
            },
            ["cafe", "bakery"],
        ),
        PointOfInterest::new(
            "Ginasio",
            LatLng {
                lat: 38.7219,
                lng: -9.1400,
            },
            ["gym"],
        ),
    ];
    let transit = vec![PointOfInterest::new(
        "Rossio",
        LatLng {
            lat: 38.7139,
            lng: -9.1394,
        },
        ["subway_station"],
    )];
    let request = ScoreRequest::new(origin)
        .with_nearby_places(nearby)
        .with_transit_stations(transit);
    match address {
        Some(text) => request.with_address(text),
        None => request,
    }
}

/// Serialise `request` as pretty JSON at `path`.
pub(super) fn write_request(path: &Utf8Path, request: &ScoreRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}
