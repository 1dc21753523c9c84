use leptos::prelude::*;
use leptos::server;
use shared_types::{
    Addon, Banner, DashboardStats, MenuCategory, Offer, OrderStatus, OrderSummary, Position,
    Restaurant, SearchHit, ZoneCheck,
};

use crate::config::AppConfig;

#[cfg(feature = "ssr")]
use crate::api::queries;
#[cfg(feature = "ssr")]
use crate::geocode::{PhotonResponse, ReverseResponse};

/// Runtime configuration for the browser. The environment is only readable
/// here; the client gets the resolved values over the wire.
#[server]
pub async fn get_app_config() -> Result<AppConfig, ServerFnError> {
    Ok(AppConfig::from_env())
}

/// Free-text geocoding search, limited to 10 results. An empty query is
/// answered locally without touching the geocoder.
#[server]
pub async fn search_places(query: String) -> Result<Vec<SearchHit>, ServerFnError> {
    let query = query.trim().to_string();
    if query.is_empty() {
        return Ok(Vec::new());
    }

    let config = AppConfig::from_env();
    let url = format!(
        "{}/api?q={}&limit=10",
        config.search_base_url.trim_end_matches('/'),
        urlencoding::encode(&query)
    );

    let response: PhotonResponse = crate::api::client::http_client()
        .get(&url)
        .send()
        .await
        .map_err(|e| ServerFnError::new(format!("Geocoder request failed: {}", e)))?
        .error_for_status()
        .map_err(|e| ServerFnError::new(format!("Geocoder request failed: {}", e)))?
        .json()
        .await
        .map_err(|e| ServerFnError::new(format!("Geocoder response unreadable: {}", e)))?;

    Ok(response.into_hits())
}

/// Best-effort reverse geocode. `None` means the position has no usable
/// display name; callers leave the previous address in place.
#[server]
pub async fn reverse_geocode(position: Position) -> Result<Option<String>, ServerFnError> {
    let config = AppConfig::from_env();
    let url = format!(
        "{}/reverse?lat={}&lon={}&format=json",
        config.nominatim_base_url.trim_end_matches('/'),
        position.lat,
        position.lng
    );

    let response: ReverseResponse = crate::api::client::http_client()
        .get(&url)
        .send()
        .await
        .map_err(|e| ServerFnError::new(format!("Reverse geocode failed: {}", e)))?
        .error_for_status()
        .map_err(|e| ServerFnError::new(format!("Reverse geocode failed: {}", e)))?
        .json()
        .await
        .map_err(|e| ServerFnError::new(format!("Reverse geocode unreadable: {}", e)))?;

    Ok(response.into_address())
}

/// Point-in-zone query against the platform API.
#[server]
pub async fn check_delivery_zone(position: Position) -> Result<ZoneCheck, ServerFnError> {
    queries::zone_check(position)
        .await
        .map_err(|e| ServerFnError::new(format!("Zone check failed: {}", e)))
}

#[server]
pub async fn get_restaurants() -> Result<Vec<Restaurant>, ServerFnError> {
    queries::list_restaurants()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch restaurants: {}", e)))
}

#[server]
pub async fn save_restaurant_location(
    restaurant_id: String,
    position: Position,
) -> Result<(), ServerFnError> {
    queries::save_restaurant_location(&restaurant_id, position)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to save location: {}", e)))
}

#[server]
pub async fn get_banners() -> Result<Vec<Banner>, ServerFnError> {
    queries::list_banners()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch banners: {}", e)))
}

#[server]
pub async fn save_banner(banner: Banner) -> Result<(), ServerFnError> {
    queries::upsert_banner(&banner)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to save banner: {}", e)))
}

#[server]
pub async fn remove_banner(id: String) -> Result<(), ServerFnError> {
    queries::delete_banner(&id)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to delete banner: {}", e)))
}

#[server]
pub async fn get_categories(restaurant_id: String) -> Result<Vec<MenuCategory>, ServerFnError> {
    queries::list_categories(&restaurant_id)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch categories: {}", e)))
}

#[server]
pub async fn save_category(
    restaurant_id: String,
    category: MenuCategory,
) -> Result<(), ServerFnError> {
    queries::upsert_category(&restaurant_id, &category)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to save category: {}", e)))
}

#[server]
pub async fn remove_category(id: String) -> Result<(), ServerFnError> {
    queries::delete_category(&id)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to delete category: {}", e)))
}

#[server]
pub async fn get_addons(restaurant_id: String) -> Result<Vec<Addon>, ServerFnError> {
    queries::list_addons(&restaurant_id)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch add-ons: {}", e)))
}

#[server]
pub async fn save_addon(restaurant_id: String, addon: Addon) -> Result<(), ServerFnError> {
    queries::upsert_addon(&restaurant_id, &addon)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to save add-on: {}", e)))
}

#[server]
pub async fn remove_addon(id: String) -> Result<(), ServerFnError> {
    queries::delete_addon(&id)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to delete add-on: {}", e)))
}

#[server]
pub async fn get_offers(restaurant_id: String) -> Result<Vec<Offer>, ServerFnError> {
    queries::list_offers(&restaurant_id)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch offers: {}", e)))
}

#[server]
pub async fn save_offer(restaurant_id: String, offer: Offer) -> Result<(), ServerFnError> {
    queries::upsert_offer(&restaurant_id, &offer)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to save offer: {}", e)))
}

#[server]
pub async fn remove_offer(id: String) -> Result<(), ServerFnError> {
    queries::delete_offer(&id)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to delete offer: {}", e)))
}

#[server]
pub async fn get_orders() -> Result<Vec<OrderSummary>, ServerFnError> {
    queries::list_orders()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch orders: {}", e)))
}

#[server]
pub async fn advance_order(id: String, status: OrderStatus) -> Result<(), ServerFnError> {
    queries::set_order_status(&id, status)
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to update order: {}", e)))
}

#[server]
pub async fn get_dashboard_stats() -> Result<DashboardStats, ServerFnError> {
    queries::dashboard_stats()
        .await
        .map_err(|e| ServerFnError::new(format!("Failed to fetch stats: {}", e)))
}
