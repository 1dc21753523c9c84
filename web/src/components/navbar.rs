use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href="/" attr:class="navbar__logo">
                        "Platter Admin"
                    </A>
                </div>

                <div class="navbar__links">
                    <A href="/banners" attr:class="navbar__link">
                        "Banners"
                    </A>
                    <A href="/vendor" attr:class="navbar__link">
                        "Vendor"
                    </A>
                    <A href="/orders" attr:class="navbar__link">
                        "Orders"
                    </A>
                    <A href="/locations" attr:class="navbar__link">
                        "Locations"
                    </A>
                </div>
            </div>
        </nav>
    }
}
