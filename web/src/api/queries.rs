//! GraphQL operations against the platform API, one function per operation.
//! The documents mirror the platform schema; every function returns the
//! shared wire types the views render.

use serde::Deserialize;
use serde_json::json;
use shared_types::{
    Addon, Banner, DashboardStats, MenuCategory, Offer, OrderStatus, OrderSummary, Position,
    Restaurant, ZoneCheck,
};

use crate::api::{graphql, ApiError};

const ZONE_CHECK: &str = r"
query ZoneCheck($latitude: Float!, $longitude: Float!) {
  zoneCheck(latitude: $latitude, longitude: $longitude) {
    selectedZone
    fallbackZone
  }
}";

const RESTAURANTS: &str = r"
query Restaurants {
  restaurants {
    id
    name
    address
    position { lat lng }
  }
}";

const SAVE_RESTAURANT_LOCATION: &str = r"
mutation SaveRestaurantLocation($id: ID!, $latitude: Float!, $longitude: Float!) {
  saveRestaurantLocation(id: $id, latitude: $latitude, longitude: $longitude) {
    id
  }
}";

const BANNERS: &str = r"
query Banners {
  banners {
    id
    title
    isActive
    elements { kind value }
  }
}";

const UPSERT_BANNER: &str = r"
mutation UpsertBanner($banner: BannerInput!) {
  upsertBanner(banner: $banner) { id }
}";

const DELETE_BANNER: &str = r"
mutation DeleteBanner($id: ID!) {
  deleteBanner(id: $id)
}";

const CATEGORIES: &str = r"
query Categories($restaurantId: ID!) {
  categories(restaurantId: $restaurantId) {
    id
    name
    sortOrder
    isActive
  }
}";

const UPSERT_CATEGORY: &str = r"
mutation UpsertCategory($restaurantId: ID!, $category: CategoryInput!) {
  upsertCategory(restaurantId: $restaurantId, category: $category) { id }
}";

const DELETE_CATEGORY: &str = r"
mutation DeleteCategory($id: ID!) {
  deleteCategory(id: $id)
}";

const ADDONS: &str = r"
query Addons($restaurantId: ID!) {
  addons(restaurantId: $restaurantId) {
    id
    name
    price
    quantityMinimum
    quantityMaximum
    isActive
  }
}";

const UPSERT_ADDON: &str = r"
mutation UpsertAddon($restaurantId: ID!, $addon: AddonInput!) {
  upsertAddon(restaurantId: $restaurantId, addon: $addon) { id }
}";

const DELETE_ADDON: &str = r"
mutation DeleteAddon($id: ID!) {
  deleteAddon(id: $id)
}";

const OFFERS: &str = r"
query Offers($restaurantId: ID!) {
  offers(restaurantId: $restaurantId) {
    id
    name
    discountPercent
    isActive
  }
}";

const UPSERT_OFFER: &str = r"
mutation UpsertOffer($restaurantId: ID!, $offer: OfferInput!) {
  upsertOffer(restaurantId: $restaurantId, offer: $offer) { id }
}";

const DELETE_OFFER: &str = r"
mutation DeleteOffer($id: ID!) {
  deleteOffer(id: $id)
}";

const ORDERS: &str = r"
query Orders {
  orders {
    id
    restaurantName
    itemCount
    total
    status
    placedAt
  }
}";

const SET_ORDER_STATUS: &str = r"
mutation SetOrderStatus($id: ID!, $status: OrderStatus!) {
  setOrderStatus(id: $id, status: $status) { id }
}";

const DASHBOARD_STATS: &str = r"
query DashboardStats {
  dashboardStats {
    restaurantCount
    activeOrderCount
    bannerCount
    totalSales
  }
}";

#[derive(Debug, Deserialize)]
struct ZoneCheckData {
    #[serde(rename = "zoneCheck")]
    zone_check: ZoneCheck,
}

pub async fn zone_check(position: Position) -> Result<ZoneCheck, ApiError> {
    let data: ZoneCheckData = graphql(
        ZONE_CHECK,
        json!({ "latitude": position.lat, "longitude": position.lng }),
    )
    .await?;
    Ok(data.zone_check)
}

#[derive(Debug, Deserialize)]
struct RestaurantsData {
    restaurants: Vec<Restaurant>,
}

pub async fn list_restaurants() -> Result<Vec<Restaurant>, ApiError> {
    let data: RestaurantsData = graphql(RESTAURANTS, json!({})).await?;
    Ok(data.restaurants)
}

pub async fn save_restaurant_location(id: &str, position: Position) -> Result<(), ApiError> {
    let _: serde_json::Value = graphql(
        SAVE_RESTAURANT_LOCATION,
        json!({ "id": id, "latitude": position.lat, "longitude": position.lng }),
    )
    .await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct BannersData {
    banners: Vec<Banner>,
}

pub async fn list_banners() -> Result<Vec<Banner>, ApiError> {
    let data: BannersData = graphql(BANNERS, json!({})).await?;
    Ok(data.banners)
}

pub async fn upsert_banner(banner: &Banner) -> Result<(), ApiError> {
    let _: serde_json::Value = graphql(UPSERT_BANNER, json!({ "banner": banner })).await?;
    Ok(())
}

pub async fn delete_banner(id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = graphql(DELETE_BANNER, json!({ "id": id })).await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct CategoriesData {
    categories: Vec<MenuCategory>,
}

pub async fn list_categories(restaurant_id: &str) -> Result<Vec<MenuCategory>, ApiError> {
    let data: CategoriesData =
        graphql(CATEGORIES, json!({ "restaurantId": restaurant_id })).await?;
    Ok(data.categories)
}

pub async fn upsert_category(
    restaurant_id: &str,
    category: &MenuCategory,
) -> Result<(), ApiError> {
    let _: serde_json::Value = graphql(
        UPSERT_CATEGORY,
        json!({ "restaurantId": restaurant_id, "category": category }),
    )
    .await?;
    Ok(())
}

pub async fn delete_category(id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = graphql(DELETE_CATEGORY, json!({ "id": id })).await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct AddonsData {
    addons: Vec<Addon>,
}

pub async fn list_addons(restaurant_id: &str) -> Result<Vec<Addon>, ApiError> {
    let data: AddonsData = graphql(ADDONS, json!({ "restaurantId": restaurant_id })).await?;
    Ok(data.addons)
}

pub async fn upsert_addon(restaurant_id: &str, addon: &Addon) -> Result<(), ApiError> {
    let _: serde_json::Value = graphql(
        UPSERT_ADDON,
        json!({ "restaurantId": restaurant_id, "addon": addon }),
    )
    .await?;
    Ok(())
}

pub async fn delete_addon(id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = graphql(DELETE_ADDON, json!({ "id": id })).await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct OffersData {
    offers: Vec<Offer>,
}

pub async fn list_offers(restaurant_id: &str) -> Result<Vec<Offer>, ApiError> {
    let data: OffersData = graphql(OFFERS, json!({ "restaurantId": restaurant_id })).await?;
    Ok(data.offers)
}

pub async fn upsert_offer(restaurant_id: &str, offer: &Offer) -> Result<(), ApiError> {
    let _: serde_json::Value = graphql(
        UPSERT_OFFER,
        json!({ "restaurantId": restaurant_id, "offer": offer }),
    )
    .await?;
    Ok(())
}

pub async fn delete_offer(id: &str) -> Result<(), ApiError> {
    let _: serde_json::Value = graphql(DELETE_OFFER, json!({ "id": id })).await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct OrdersData {
    orders: Vec<OrderSummary>,
}

pub async fn list_orders() -> Result<Vec<OrderSummary>, ApiError> {
    let data: OrdersData = graphql(ORDERS, json!({})).await?;
    Ok(data.orders)
}

pub async fn set_order_status(id: &str, status: OrderStatus) -> Result<(), ApiError> {
    let _: serde_json::Value =
        graphql(SET_ORDER_STATUS, json!({ "id": id, "status": status })).await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct DashboardStatsData {
    #[serde(rename = "dashboardStats")]
    dashboard_stats: DashboardStats,
}

pub async fn dashboard_stats() -> Result<DashboardStats, ApiError> {
    let data: DashboardStatsData = graphql(DASHBOARD_STATS, json!({})).await?;
    Ok(data.dashboard_stats)
}
