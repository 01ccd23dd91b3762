#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Decoding score requests as delivered by callers and places providers.

use geoscore_core::{LatLng, LocationError, ScoreError, ScoreRequest};
use rstest::{fixture, rstest};

#[fixture]
fn payload() -> serde_json::Value {
    serde_json::json!({
        "coordinates": { "lat": 51.5074, "lng": -0.1278 },
        "address": "Trafalgar Square, London",
        "businessType": "food_service",
        "nearbyPlaces": [
            {
                "name": "Corner Cafe",
                "location": { "lat": 51.5076, "lng": -0.1279 },
                "types": ["cafe", "food", "establishment"],
                "rating": 4.4,
                "user_ratings_total": 312,
                "vicinity": "1 Strand"
            },
            { "name": "Mystery Stall", "types": ["store"] }
        ],
        "transitStations": [
            { "name": "Charing Cross", "types": ["train_station", "subway_station"] }
        ]
    })
}

#[rstest]
fn provider_fields_decode(payload: serde_json::Value) {
    let request: ScoreRequest = serde_json::from_value(payload).expect("decode request");

    assert_eq!(request.business_type.as_deref(), Some("food_service"));
    assert_eq!(request.address.as_deref(), Some("Trafalgar Square, London"));
    let cafe = request.nearby_places.first().expect("cafe decoded");
    assert_eq!(cafe.user_ratings_total, Some(312));
    assert_eq!(cafe.vicinity.as_deref(), Some("1 Strand"));
    assert_eq!(cafe.primary_type(), Some("cafe"));
    assert!(request.nearby_places.last().expect("stall").location.is_none());
    assert_eq!(request.transit_stations.len(), 1);
    assert!(request.validate().is_ok());
}

#[rstest]
fn missing_lists_default_to_empty() {
    let request: ScoreRequest =
        serde_json::from_str(r#"{"coordinates":{"lat":0.0,"lng":0.0}}"#).expect("decode");
    assert_eq!(request, ScoreRequest::new(LatLng { lat: 0.0, lng: 0.0 }));
}

#[rstest]
fn optional_fields_are_omitted_when_absent() {
    let request = ScoreRequest::new(LatLng { lat: 1.0, lng: 2.0 });
    let json = serde_json::to_value(&request).expect("encode");
    assert!(json.get("businessType").is_none());
    assert!(json.get("address").is_none());
    assert_eq!(json["nearbyPlaces"], serde_json::json!([]));
}

#[rstest]
#[case(95.0, 0.0, LocationError::LatitudeOutOfRange(95.0))]
#[case(0.0, 200.0, LocationError::LongitudeOutOfRange(200.0))]
fn out_of_range_coordinates_fail_validation(
    #[case] lat: f64,
    #[case] lng: f64,
    #[case] expected: LocationError,
) {
    let request = ScoreRequest::new(LatLng { lat, lng });
    assert_eq!(request.validate(), Err(ScoreError::InvalidInput(expected)));
}
