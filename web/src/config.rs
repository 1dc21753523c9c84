use serde::{Deserialize, Serialize};
use shared_types::BoundingBox;

/// Everything the dashboard needs to know about its collaborators.
/// Built from the process environment on the server; the browser receives
/// it through the `get_app_config` server function (std::env is empty in
/// WASM, so the client never reads the environment itself).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Photon-compatible geocoding search endpoint.
    pub search_base_url: String,
    /// Nominatim-compatible reverse geocoding endpoint.
    pub nominatim_base_url: String,
    /// GraphQL platform API root (the `/graphql` path is appended).
    pub api_base_url: String,
    /// Leaflet tile template with `{z}/{x}/{y}` placeholders.
    pub tile_url_template: String,
    /// Map clicks outside this box are rejected before any network call.
    pub click_bounds: BoundingBox,
    /// Initial zoom for the location editor map.
    pub map_zoom: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_base_url: "https://photon.komoot.io".to_string(),
            nominatim_base_url: "https://nominatim.openstreetmap.org".to_string(),
            api_base_url: "https://api.platter.example.com".to_string(),
            tile_url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            // Greater Berlin service area.
            click_bounds: BoundingBox {
                south: 52.25,
                west: 12.9,
                north: 52.75,
                east: 13.85,
            },
            map_zoom: 13.0,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            search_base_url: env_or("PLATTER_SEARCH_BASE_URL", defaults.search_base_url),
            nominatim_base_url: env_or("PLATTER_NOMINATIM_BASE_URL", defaults.nominatim_base_url),
            api_base_url: env_or("PLATTER_API_BASE_URL", defaults.api_base_url),
            tile_url_template: env_or("PLATTER_TILE_URL_TEMPLATE", defaults.tile_url_template),
            click_bounds: click_bounds_from_env().unwrap_or(defaults.click_bounds),
            map_zoom: defaults.map_zoom,
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

/// `PLATTER_CLICK_BOUNDS=south,west,north,east`
fn click_bounds_from_env() -> Option<BoundingBox> {
    let raw = std::env::var("PLATTER_CLICK_BOUNDS").ok()?;
    parse_click_bounds(&raw)
}

fn parse_click_bounds(raw: &str) -> Option<BoundingBox> {
    let parts: Vec<f64> = raw
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;
    if parts.len() != 4 {
        return None;
    }
    let bbox = BoundingBox {
        south: parts[0],
        west: parts[1],
        north: parts[2],
        east: parts[3],
    };
    (bbox.south < bbox.north && bbox.west < bbox.east).then_some(bbox)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_bounds() {
        let bbox = parse_click_bounds("52.25, 12.9, 52.75, 13.85").unwrap();
        assert_eq!(bbox.south, 52.25);
        assert_eq!(bbox.east, 13.85);
    }

    #[test]
    fn survives_the_server_fn_boundary() {
        let config = AppConfig {
            tile_url_template: "https://tiles.internal/{z}/{x}/{y}.png".to_string(),
            click_bounds: BoundingBox {
                south: 48.0,
                west: 11.3,
                north: 48.3,
                east: 11.8,
            },
            ..AppConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn rejects_malformed_bounds() {
        assert!(parse_click_bounds("52.25,12.9,52.75").is_none());
        assert!(parse_click_bounds("a,b,c,d").is_none());
        // inverted box
        assert!(parse_click_bounds("52.75,12.9,52.25,13.85").is_none());
    }
}
