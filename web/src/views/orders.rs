use leptos::{prelude::*, task::spawn_local};
use shared_types::OrderStatus;
use thaw::{Button, ToastIntent, ToasterInjection};

use crate::{
    components::{error::ErrorView, loading::LoadingView, toast::dispatch_message},
    server::{advance_order, get_orders},
};

#[component]
pub fn OrdersPage() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let orders = Resource::new(move || reload.get(), |_| async move { get_orders().await });
    let toaster = ToasterInjection::expect_context();

    let advance = move |id: String, next: OrderStatus| {
        spawn_local(async move {
            match advance_order(id, next).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(err) => {
                    leptos::logging::warn!("Order update failed: {}", err);
                    dispatch_message(
                        toaster,
                        ToastIntent::Error,
                        "Orders",
                        "Updating the order failed.".to_string(),
                    );
                }
            }
        });
    };

    view! {
        <div class="orders-page">
            <h1>"Orders"</h1>
            <Suspense fallback=|| view! {
                <LoadingView message=Some("Fetching orders...".to_string()) />
            }>
                {move || match orders.get() {
                    Some(Ok(list)) if list.is_empty() => view! {
                        <p class="orders-page__empty">"No orders right now."</p>
                    }.into_any(),
                    Some(Ok(list)) => view! {
                        <table class="orders-table">
                            <thead>
                                <tr>
                                    <th>"Order"</th>
                                    <th>"Restaurant"</th>
                                    <th>"Items"</th>
                                    <th>"Total"</th>
                                    <th>"Placed"</th>
                                    <th>"Status"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|order| {
                                    let id = order.id.clone();
                                    let next = order.status.next();
                                    view! {
                                        <tr>
                                            <td>{order.id.clone()}</td>
                                            <td>{order.restaurant_name.clone()}</td>
                                            <td>{order.item_count}</td>
                                            <td>{format!("{:.2}", order.total)}</td>
                                            <td>{order.placed_at.clone()}</td>
                                            <td>{order.status.label()}</td>
                                            <td>
                                                {next.map(|next| view! {
                                                    <Button on_click=move |_| advance(id.clone(), next)>
                                                        {format!("Mark {}", next.label())}
                                                    </Button>
                                                })}
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any(),
                    Some(Err(err)) => {
                        leptos::logging::warn!("Failed to load orders: {}", err);
                        view! {
                            <ErrorView message=Some("Could not load orders.".to_string()) />
                        }.into_any()
                    },
                    None => view! {
                        <LoadingView message=Some("Fetching orders...".to_string()) />
                    }.into_any(),
                }}
            </Suspense>
        </div>
    }
}
