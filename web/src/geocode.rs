//! Wire shapes for the two geocoding collaborators and their conversion
//! into the normalized types the UI consumes. Parsing lives here, outside
//! the server functions, so the lon/lat handling stays testable.

use serde::Deserialize;
use shared_types::{Position, SearchHit};

/// Photon-style GeoJSON response for `GET {base}/api?q=..&limit=..`.
#[derive(Debug, Deserialize)]
pub struct PhotonResponse {
    #[serde(default)]
    pub features: Vec<PhotonFeature>,
}

#[derive(Debug, Deserialize)]
pub struct PhotonFeature {
    pub geometry: PhotonGeometry,
    pub properties: PhotonProperties,
}

#[derive(Debug, Deserialize)]
pub struct PhotonGeometry {
    /// `[longitude, latitude]` on the wire.
    pub coordinates: [f64; 2],
}

#[derive(Debug, Deserialize)]
pub struct PhotonProperties {
    pub osm_id: Option<i64>,
    pub name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub osm_value: Option<String>,
}

impl PhotonResponse {
    /// Normalizes features into SearchHits, swapping the coordinate order
    /// and dropping nameless features.
    pub fn into_hits(self) -> Vec<SearchHit> {
        self.features
            .into_iter()
            .filter_map(|feature| {
                let name = feature.properties.name.filter(|n| !n.is_empty())?;
                Some(SearchHit {
                    id: feature
                        .properties
                        .osm_id
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                    name,
                    street: feature.properties.street,
                    city: feature.properties.city,
                    state: feature.properties.state,
                    country: feature.properties.country,
                    position: Position::from_lon_lat(feature.geometry.coordinates),
                    place_kind: feature.properties.osm_value.unwrap_or_default(),
                })
            })
            .collect()
    }
}

/// Nominatim `/reverse?format=json` response, reduced to the fields we read.
#[derive(Debug, Deserialize)]
pub struct ReverseResponse {
    pub name: Option<String>,
    pub display_name: Option<String>,
}

impl ReverseResponse {
    /// First non-empty of `name`, `display_name`.
    pub fn into_address(self) -> Option<String> {
        [self.name, self.display_name]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photon_features_swap_lon_lat() {
        let raw = r#"{
            "features": [{
                "geometry": { "type": "Point", "coordinates": [13.413, 52.5219] },
                "properties": {
                    "osm_id": 3908141014,
                    "name": "Berlin Alexanderplatz",
                    "city": "Berlin",
                    "country": "Germany",
                    "osm_value": "station"
                }
            }]
        }"#;
        let parsed: PhotonResponse = serde_json::from_str(raw).unwrap();
        let hits = parsed.into_hits();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Berlin Alexanderplatz");
        assert_eq!(hits[0].position, Position::new(52.5219, 13.413));
        assert_eq!(hits[0].place_kind, "station");
    }

    #[test]
    fn nameless_features_are_dropped() {
        let raw = r#"{
            "features": [{
                "geometry": { "coordinates": [13.4, 52.5] },
                "properties": {}
            }]
        }"#;
        let parsed: PhotonResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.into_hits().is_empty());
    }

    #[test]
    fn reverse_prefers_name_then_display_name() {
        let with_name = ReverseResponse {
            name: Some("Alexanderplatz".into()),
            display_name: Some("Alexanderplatz, Mitte, Berlin".into()),
        };
        assert_eq!(with_name.into_address().unwrap(), "Alexanderplatz");

        let empty_name = ReverseResponse {
            name: Some("  ".into()),
            display_name: Some("Alexanderplatz, Mitte, Berlin".into()),
        };
        assert_eq!(
            empty_name.into_address().unwrap(),
            "Alexanderplatz, Mitte, Berlin"
        );

        let neither = ReverseResponse {
            name: None,
            display_name: None,
        };
        assert!(neither.into_address().is_none());
    }
}
