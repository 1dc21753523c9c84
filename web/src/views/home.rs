use leptos::prelude::*;

use crate::{
    components::{error::ErrorView, loading::LoadingView},
    server::get_dashboard_stats,
};

/// Statistics home page: one fetch per mount, four counters.
#[component]
pub fn HomePage() -> impl IntoView {
    let stats = OnceResource::new(async move { get_dashboard_stats().await });

    view! {
        <div class="home-page">
            <div class="home-page__header">
                <h1>"Overview"</h1>
                <p>"Platform activity at a glance"</p>
            </div>

            <Suspense fallback=|| view! {
                <LoadingView message=Some("Fetching statistics...".to_string()) />
            }>
                {move || match stats.get() {
                    Some(Ok(stats)) => view! {
                        <div class="home-page__grid">
                            <StatCard label="Restaurants" value=stats.restaurant_count.to_string() />
                            <StatCard label="Active orders" value=stats.active_order_count.to_string() />
                            <StatCard label="Banners" value=stats.banner_count.to_string() />
                            <StatCard label="Total sales" value=format!("{:.2}", stats.total_sales) />
                        </div>
                    }.into_any(),
                    Some(Err(err)) => {
                        leptos::logging::warn!("Failed to load dashboard stats: {}", err);
                        view! {
                            <ErrorView message=Some("Could not load statistics.".to_string()) />
                        }.into_any()
                    },
                    None => view! {
                        <LoadingView message=Some("Fetching statistics...".to_string()) />
                    }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
