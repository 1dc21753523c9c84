use leptos::{prelude::*, task::spawn_local};
use shared_types::{Addon, MenuCategory, Offer};
use thaw::{
    Button, ButtonAppearance, Flex, FlexAlign, Input, Label, Select, ToastIntent,
    ToasterInjection,
};
use thaw_utils::Model;

use crate::{
    components::{error::ErrorView, loading::LoadingView, toast::dispatch_message},
    server::{
        get_addons, get_categories, get_offers, get_restaurants, remove_addon, remove_category,
        remove_offer, save_addon, save_category, save_offer,
    },
};

/// Stall configuration: menu categories, add-ons, and offers for one
/// restaurant. Plain forms over the platform API; the server validates.
#[component]
pub fn VendorPage() -> impl IntoView {
    let restaurants = OnceResource::new(async move { get_restaurants().await });
    let selected_id = RwSignal::new(String::new());
    let selected_model: Model<String> = selected_id.into();

    view! {
        <div class="vendor-page">
            <h1>"Vendor configuration"</h1>
            <Suspense fallback=|| view! {
                <LoadingView message=Some("Fetching restaurants...".to_string()) />
            }>
                {move || match restaurants.get() {
                    Some(Ok(list)) => {
                        if selected_id.get_untracked().is_empty() {
                            if let Some(first) = list.first() {
                                selected_id.set(first.id.clone());
                            }
                        }
                        view! {
                            <Flex vertical=true align=FlexAlign::Start>
                                <Label>"Restaurant"</Label>
                                <Select value=selected_model>
                                    {list.into_iter().map(|r| view! {
                                        <option value=r.id.clone()>{r.name.clone()}</option>
                                    }).collect_view()}
                                </Select>
                            </Flex>
                            {move || {
                                let id = selected_id.get();
                                (!id.is_empty()).then(|| view! {
                                    <CategoriesSection restaurant_id=id.clone() />
                                    <AddonsSection restaurant_id=id.clone() />
                                    <OffersSection restaurant_id=id />
                                })
                            }}
                        }.into_any()
                    }
                    Some(Err(err)) => {
                        leptos::logging::warn!("Failed to load restaurants: {}", err);
                        view! {
                            <ErrorView message=Some("Could not load restaurants.".to_string()) />
                        }.into_any()
                    }
                    None => view! {
                        <LoadingView message=Some("Fetching restaurants...".to_string()) />
                    }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

fn report_failure(toaster: ToasterInjection, what: &'static str) {
    dispatch_message(
        toaster,
        ToastIntent::Error,
        "Vendor",
        format!("{} failed.", what),
    );
}

#[component]
fn CategoriesSection(restaurant_id: String) -> impl IntoView {
    let toaster = ToasterInjection::expect_context();
    let id = StoredValue::new(restaurant_id);
    let reload = RwSignal::new(0u32);
    let categories = Resource::new(
        move || reload.get(),
        move |_| async move { get_categories(id.get_value()).await },
    );
    let new_name = RwSignal::new(String::new());

    let add = move |_| {
        let name = new_name.get_untracked().trim().to_string();
        if name.is_empty() {
            return;
        }
        let category = MenuCategory {
            id: String::new(),
            name,
            sort_order: 0,
            is_active: true,
        };
        spawn_local(async move {
            match save_category(id.get_value(), category).await {
                Ok(()) => {
                    new_name.set(String::new());
                    reload.update(|n| *n += 1);
                }
                Err(err) => {
                    leptos::logging::warn!("Category save failed: {}", err);
                    report_failure(toaster, "Saving the category");
                }
            }
        });
    };

    let toggle = move |mut category: MenuCategory| {
        category.is_active = !category.is_active;
        spawn_local(async move {
            match save_category(id.get_value(), category).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(err) => {
                    leptos::logging::warn!("Category update failed: {}", err);
                    report_failure(toaster, "Updating the category");
                }
            }
        });
    };

    let delete = move |category_id: String| {
        spawn_local(async move {
            match remove_category(category_id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(err) => {
                    leptos::logging::warn!("Category delete failed: {}", err);
                    report_failure(toaster, "Deleting the category");
                }
            }
        });
    };

    view! {
        <section class="vendor-section">
            <h2>"Menu categories"</h2>
            <Suspense fallback=|| view! { <LoadingView /> }>
                {move || match categories.get() {
                    Some(Ok(list)) => view! {
                        <div class="vendor-section__list">
                            {list.into_iter().map(|category| {
                                let for_toggle = category.clone();
                                let category_id = category.id.clone();
                                view! {
                                    <div class="vendor-row">
                                        <span>{category.name.clone()}</span>
                                        <Button on_click=move |_| toggle(for_toggle.clone())>
                                            {if category.is_active { "Active" } else { "Inactive" }}
                                        </Button>
                                        <Button on_click=move |_| delete(category_id.clone())>
                                            "Delete"
                                        </Button>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any(),
                    Some(Err(err)) => {
                        leptos::logging::warn!("Failed to load categories: {}", err);
                        view! { <ErrorView /> }.into_any()
                    },
                    None => view! { <LoadingView /> }.into_any(),
                }}
            </Suspense>
            <div class="vendor-section__add">
                <Input value=new_name placeholder="New category name" />
                <Button appearance=ButtonAppearance::Primary on_click=add>"Add category"</Button>
            </div>
        </section>
    }
}

#[component]
fn AddonsSection(restaurant_id: String) -> impl IntoView {
    let toaster = ToasterInjection::expect_context();
    let id = StoredValue::new(restaurant_id);
    let reload = RwSignal::new(0u32);
    let addons = Resource::new(
        move || reload.get(),
        move |_| async move { get_addons(id.get_value()).await },
    );
    let new_name = RwSignal::new(String::new());
    let new_price = RwSignal::new(String::new());

    let add = move |_| {
        let name = new_name.get_untracked().trim().to_string();
        let Ok(price) = new_price.get_untracked().trim().parse::<f64>() else {
            report_failure(toaster, "Parsing the add-on price");
            return;
        };
        if name.is_empty() || price < 0.0 {
            return;
        }
        let addon = Addon {
            id: String::new(),
            name,
            price,
            quantity_minimum: 0,
            quantity_maximum: 1,
            is_active: true,
        };
        spawn_local(async move {
            match save_addon(id.get_value(), addon).await {
                Ok(()) => {
                    new_name.set(String::new());
                    new_price.set(String::new());
                    reload.update(|n| *n += 1);
                }
                Err(err) => {
                    leptos::logging::warn!("Add-on save failed: {}", err);
                    report_failure(toaster, "Saving the add-on");
                }
            }
        });
    };

    let delete = move |addon_id: String| {
        spawn_local(async move {
            match remove_addon(addon_id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(err) => {
                    leptos::logging::warn!("Add-on delete failed: {}", err);
                    report_failure(toaster, "Deleting the add-on");
                }
            }
        });
    };

    view! {
        <section class="vendor-section">
            <h2>"Add-ons"</h2>
            <Suspense fallback=|| view! { <LoadingView /> }>
                {move || match addons.get() {
                    Some(Ok(list)) => view! {
                        <div class="vendor-section__list">
                            {list.into_iter().map(|addon| {
                                let addon_id = addon.id.clone();
                                view! {
                                    <div class="vendor-row">
                                        <span>{addon.name.clone()}</span>
                                        <span>{format!("{:.2}", addon.price)}</span>
                                        <span>{format!("qty {}-{}", addon.quantity_minimum, addon.quantity_maximum)}</span>
                                        <Button on_click=move |_| delete(addon_id.clone())>
                                            "Delete"
                                        </Button>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any(),
                    Some(Err(err)) => {
                        leptos::logging::warn!("Failed to load add-ons: {}", err);
                        view! { <ErrorView /> }.into_any()
                    },
                    None => view! { <LoadingView /> }.into_any(),
                }}
            </Suspense>
            <div class="vendor-section__add">
                <Input value=new_name placeholder="Add-on name" />
                <Input value=new_price placeholder="Price" />
                <Button appearance=ButtonAppearance::Primary on_click=add>"Add add-on"</Button>
            </div>
        </section>
    }
}

#[component]
fn OffersSection(restaurant_id: String) -> impl IntoView {
    let toaster = ToasterInjection::expect_context();
    let id = StoredValue::new(restaurant_id);
    let reload = RwSignal::new(0u32);
    let offers = Resource::new(
        move || reload.get(),
        move |_| async move { get_offers(id.get_value()).await },
    );
    let new_name = RwSignal::new(String::new());
    let new_discount = RwSignal::new(String::new());

    let add = move |_| {
        let name = new_name.get_untracked().trim().to_string();
        let Ok(discount) = new_discount.get_untracked().trim().parse::<f64>() else {
            report_failure(toaster, "Parsing the discount");
            return;
        };
        if name.is_empty() || !(0.0..=100.0).contains(&discount) {
            return;
        }
        let offer = Offer {
            id: String::new(),
            name,
            discount_percent: discount,
            is_active: true,
        };
        spawn_local(async move {
            match save_offer(id.get_value(), offer).await {
                Ok(()) => {
                    new_name.set(String::new());
                    new_discount.set(String::new());
                    reload.update(|n| *n += 1);
                }
                Err(err) => {
                    leptos::logging::warn!("Offer save failed: {}", err);
                    report_failure(toaster, "Saving the offer");
                }
            }
        });
    };

    let delete = move |offer_id: String| {
        spawn_local(async move {
            match remove_offer(offer_id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(err) => {
                    leptos::logging::warn!("Offer delete failed: {}", err);
                    report_failure(toaster, "Deleting the offer");
                }
            }
        });
    };

    view! {
        <section class="vendor-section">
            <h2>"Offers"</h2>
            <Suspense fallback=|| view! { <LoadingView /> }>
                {move || match offers.get() {
                    Some(Ok(list)) => view! {
                        <div class="vendor-section__list">
                            {list.into_iter().map(|offer| {
                                let offer_id = offer.id.clone();
                                view! {
                                    <div class="vendor-row">
                                        <span>{offer.name.clone()}</span>
                                        <span>{format!("{:.0}% off", offer.discount_percent)}</span>
                                        <span>{if offer.is_active { "active" } else { "inactive" }}</span>
                                        <Button on_click=move |_| delete(offer_id.clone())>
                                            "Delete"
                                        </Button>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any(),
                    Some(Err(err)) => {
                        leptos::logging::warn!("Failed to load offers: {}", err);
                        view! { <ErrorView /> }.into_any()
                    },
                    None => view! { <LoadingView /> }.into_any(),
                }}
            </Suspense>
            <div class="vendor-section__add">
                <Input value=new_name placeholder="Offer name" />
                <Input value=new_discount placeholder="Discount %" />
                <Button appearance=ButtonAppearance::Primary on_click=add>"Add offer"</Button>
            </div>
        </section>
    }
}
