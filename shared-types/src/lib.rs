use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair. Latitude first, everywhere in this codebase;
/// only the geocoder wire format is longitude-first and the conversion
/// happens at the parsing boundary.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lng: f64,
}

impl Position {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a Position from a GeoJSON-style `[longitude, latitude]` pair.
    pub fn from_lon_lat(coords: [f64; 2]) -> Self {
        Self {
            lat: coords[1],
            lng: coords[0],
        }
    }

    pub fn is_plausible(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// Rectangular geographic filter for map clicks. Injected from
/// configuration; never hard-coded at the call site.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub fn contains(&self, pos: &Position) -> bool {
        pos.lat >= self.south
            && pos.lat <= self.north
            && pos.lng >= self.west
            && pos.lng <= self.east
    }
}

/// One geocoder match, already normalized out of the photon feature shape.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub id: String,
    pub name: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub position: Position,
    pub place_kind: String,
}

impl SearchHit {
    /// Secondary line shown under the result name.
    pub fn detail_line(&self) -> String {
        [&self.street, &self.city, &self.state, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Raw zone-containment answer from the platform API. Both fields nullable;
/// `selected_zone` set means the point is deliverable.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCheck {
    pub selected_zone: Option<String>,
    pub fallback_zone: Option<String>,
}

/// A persisted restaurant record, as much of it as the dashboard edits.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub position: Option<Position>,
}

/// Banner template element. A closed set of element kinds, each carrying
/// only its own payload; replaces the legacy string-keyed field lookup.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum BannerElement {
    Title(String),
    Highlight(String),
    Content(String),
    Image(String),
    Background(String),
}

impl BannerElement {
    pub const KINDS: [&'static str; 5] = ["title", "highlight", "content", "image", "background"];

    /// Inverse of the serde tag, for form handling. Unknown kinds are not
    /// representable; callers must keep them out of the UI.
    pub fn from_parts(kind: &str, value: String) -> Option<Self> {
        match kind {
            "title" => Some(BannerElement::Title(value)),
            "highlight" => Some(BannerElement::Highlight(value)),
            "content" => Some(BannerElement::Content(value)),
            "image" => Some(BannerElement::Image(value)),
            "background" => Some(BannerElement::Background(value)),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            BannerElement::Title(_) => "title",
            BannerElement::Highlight(_) => "highlight",
            BannerElement::Content(_) => "content",
            BannerElement::Image(_) => "image",
            BannerElement::Background(_) => "background",
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            BannerElement::Title(_) => "Title",
            BannerElement::Highlight(_) => "Highlight",
            BannerElement::Content(_) => "Content",
            BannerElement::Image(_) => "Image",
            BannerElement::Background(_) => "Background",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            BannerElement::Title(v)
            | BannerElement::Highlight(v)
            | BannerElement::Content(v)
            | BannerElement::Image(v)
            | BannerElement::Background(v) => v,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub title: String,
    pub is_active: bool,
    pub elements: Vec<BannerElement>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub sort_order: i32,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub quantity_minimum: i32,
    pub quantity_maximum: i32,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub name: String,
    pub discount_percent: f64,
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: String,
    pub restaurant_name: String,
    pub item_count: i32,
    pub total: f64,
    pub status: OrderStatus,
    pub placed_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Dispatched,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Accepted => "Accepted",
            OrderStatus::Dispatched => "Dispatched",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// The next status an operator may advance an order to, if any.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Accepted),
            OrderStatus::Accepted => Some(OrderStatus::Dispatched),
            OrderStatus::Dispatched => Some(OrderStatus::Delivered),
            OrderStatus::Delivered | OrderStatus::Cancelled => None,
        }
    }
}

/// Counters for the statistics home page.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub restaurant_count: i64,
    pub active_order_count: i64,
    pub banner_count: i64,
    pub total_sales: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_from_lon_lat_swaps_order() {
        let pos = Position::from_lon_lat([13.413, 52.5219]);
        assert_eq!(pos, Position::new(52.5219, 13.413));
    }

    #[test]
    fn bounding_box_contains_is_inclusive() {
        let bbox = BoundingBox {
            south: 52.3,
            west: 13.0,
            north: 52.7,
            east: 13.8,
        };
        assert!(bbox.contains(&Position::new(52.50, 13.40)));
        assert!(bbox.contains(&Position::new(52.3, 13.0)));
        assert!(!bbox.contains(&Position::new(48.1, 11.5)));
        assert!(!bbox.contains(&Position::new(52.50, 14.2)));
    }

    #[test]
    fn detail_line_skips_missing_parts() {
        let hit = SearchHit {
            id: "n1".into(),
            name: "Berlin Alexanderplatz".into(),
            street: None,
            city: Some("Berlin".into()),
            state: None,
            country: Some("Germany".into()),
            position: Position::new(52.5219, 13.413),
            place_kind: "station".into(),
        };
        assert_eq!(hit.detail_line(), "Berlin, Germany");
    }

    #[test]
    fn banner_element_serializes_tagged() {
        let element = BannerElement::Highlight("50% off".into());
        let json = serde_json::to_string(&element).unwrap();
        assert_eq!(json, r#"{"kind":"highlight","value":"50% off"}"#);
        let back: BannerElement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, element);
    }

    #[test]
    fn banner_element_kind_round_trips_through_from_parts() {
        for kind in BannerElement::KINDS {
            let element = BannerElement::from_parts(kind, "x".into()).unwrap();
            assert_eq!(element.kind(), kind);
        }
        assert!(BannerElement::from_parts("video", "x".into()).is_none());
    }

    #[test]
    fn order_status_advances_to_terminal() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Accepted));
        assert_eq!(OrderStatus::Delivered.next(), None);
        assert_eq!(OrderStatus::Cancelled.next(), None);
    }
}
