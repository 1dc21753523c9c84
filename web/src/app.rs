use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};
use thaw::ssr::SSRMountStyleProvider;
use thaw::{ConfigProvider, ToasterProvider};

use crate::components::Navbar;
use crate::config::AppConfig;
use crate::server::get_app_config;
use crate::views::{
    banners::BannersPage, home::HomePage, locations::LocationsPage, not_found::NotFound,
    orders::OrdersPage, vendor::VendorPage,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <SSRMountStyleProvider>
            <!DOCTYPE html>
            <html lang="en">
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <AutoReload options=options.clone() />
                    <HydrationScripts options/>
                    <MetaTags/>
                </head>
                <link
                    rel="stylesheet"
                    href="https://unpkg.com/leaflet@1.9.3/dist/leaflet.css"
                />
                <script
                    src="https://unpkg.com/leaflet@1.9.3/dist/leaflet.js"
                    defer
                ></script>
                <body>
                    <App/>
                </body>
            </html>
        </SSRMountStyleProvider>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Resolved on the server and carried into the hydration payload, so the
    // browser sees the env-derived values rather than baked-in defaults.
    let config = OnceResource::new(async move {
        get_app_config().await.unwrap_or_else(|err| {
            leptos::logging::warn!("Falling back to default config: {}", err);
            AppConfig::default()
        })
    });
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/web.css"/>

        <Title text="Platter Admin"/>

        <ConfigProvider>
            <ToasterProvider>
                <Router>
                    <Navbar/>
                    <main>
                        <Routes fallback=|| view! { <NotFound/> }>
                            <Route path=StaticSegment("") view=HomePage/>
                            <Route path=StaticSegment("banners") view=BannersPage/>
                            <Route path=StaticSegment("vendor") view=VendorPage/>
                            <Route path=StaticSegment("orders") view=OrdersPage/>
                            <Route path=StaticSegment("locations") view=LocationsPage/>
                        </Routes>
                    </main>
                </Router>
            </ToasterProvider>
        </ConfigProvider>
    }
}
