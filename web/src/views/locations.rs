use leptos::{prelude::*, task::spawn_local};
use shared_types::{Position, Restaurant};
use thaw::{Button, ButtonAppearance, Flex, FlexAlign, Label, Select, Spinner, SpinnerSize, ToasterInjection};
use thaw_utils::Model;

use crate::{
    components::{
        error::ErrorView, loading::LoadingView, toast::dispatch_notice, GeocodeSearchBox,
    },
    config::AppConfig,
    map::MapSurface,
    server::{check_delivery_zone, get_restaurants, reverse_geocode, save_restaurant_location},
    state::{Command, EditorEvent, LocationEditor, ZoneOutcome},
};

/// Restaurant location page: pick a restaurant, then edit its position on
/// the map. The editor component is re-created per selection so no state
/// leaks between restaurants.
#[component]
pub fn LocationsPage() -> impl IntoView {
    let app_config = expect_context::<OnceResource<AppConfig>>();
    let restaurants = OnceResource::new(async move { get_restaurants().await });
    let selected_id = RwSignal::new(String::new());
    let selected_model: Model<String> = selected_id.into();

    view! {
        <div class="locations-page">
            <h1>"Restaurant locations"</h1>
            <Suspense fallback=|| view! {
                <LoadingView message=Some("Fetching restaurants...".to_string()) />
            }>
                {move || match (restaurants.get(), app_config.get()) {
                    (Some(Ok(list)), Some(config)) => {
                        if selected_id.get_untracked().is_empty() {
                            if let Some(first) = list.first() {
                                selected_id.set(first.id.clone());
                            }
                        }
                        let options = list.clone();
                        view! {
                            <Flex vertical=true align=FlexAlign::Start>
                                <Label>"Restaurant"</Label>
                                <Select value=selected_model>
                                    {options.into_iter().map(|r| {
                                        view! {
                                            <option value=r.id.clone()>{r.name.clone()}</option>
                                        }
                                    }).collect_view()}
                                </Select>
                            </Flex>
                            {move || {
                                let id = selected_id.get();
                                list.iter()
                                    .find(|r| r.id == id)
                                    .cloned()
                                    .map(|restaurant| view! {
                                        <RestaurantLocationEditor
                                            restaurant=restaurant
                                            config=config.clone()
                                        />
                                    })
                            }}
                        }.into_any()
                    }
                    (Some(Err(err)), _) => {
                        leptos::logging::warn!("Failed to load restaurants: {}", err);
                        view! {
                            <ErrorView message=Some("Could not load restaurants.".to_string()) />
                        }.into_any()
                    }
                    _ => view! {
                        <LoadingView message=Some("Fetching restaurants...".to_string()) />
                    }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

/// Handles shared by the async command executors. Everything in here is a
/// cheap copyable handle, so spawned futures can carry the whole context.
#[derive(Clone, Copy)]
struct EditorCtx {
    editor: RwSignal<LocationEditor>,
    toaster: ToasterInjection,
    restaurant_id: StoredValue<String>,
}

fn apply_event(ctx: EditorCtx, event: EditorEvent) {
    let commands = ctx
        .editor
        .try_update(|editor| editor.apply(event))
        .unwrap_or_default();
    execute(ctx, commands);
}

fn execute(ctx: EditorCtx, commands: Vec<Command>) {
    for command in commands {
        match command {
            Command::Notify(notice) => dispatch_notice(ctx.toaster, notice),
            Command::CheckZone {
                generation,
                position,
            } => {
                spawn_local(async move {
                    let event = match check_delivery_zone(position).await {
                        Ok(check) => EditorEvent::ValidationComplete {
                            generation,
                            outcome: ZoneOutcome::classify(check),
                        },
                        Err(err) => {
                            leptos::logging::warn!("Zone check failed: {}", err);
                            EditorEvent::ValidationFailed { generation }
                        }
                    };
                    apply_event(ctx, event);
                });
            }
            Command::ResolveAddress {
                generation,
                position,
            } => {
                spawn_local(async move {
                    match reverse_geocode(position).await {
                        Ok(Some(address)) => {
                            apply_event(
                                ctx,
                                EditorEvent::AddressResolved {
                                    generation,
                                    address,
                                },
                            );
                        }
                        // Cosmetic lookup only; the previous address stands.
                        Ok(None) => {}
                        Err(err) => {
                            leptos::logging::warn!("Reverse geocode failed: {}", err);
                        }
                    }
                });
            }
            Command::PersistLocation { position } => {
                spawn_local(async move {
                    let id = ctx.restaurant_id.get_value();
                    let event = match save_restaurant_location(id, position).await {
                        Ok(()) => EditorEvent::SaveSucceeded,
                        Err(err) => {
                            leptos::logging::warn!("Location save failed: {}", err);
                            EditorEvent::SaveFailed
                        }
                    };
                    apply_event(ctx, event);
                });
            }
        }
    }
}

#[component]
fn RestaurantLocationEditor(restaurant: Restaurant, config: AppConfig) -> impl IntoView {
    let fallback_center = Position::new(
        (config.click_bounds.south + config.click_bounds.north) / 2.0,
        (config.click_bounds.west + config.click_bounds.east) / 2.0,
    );

    let ctx = EditorCtx {
        editor: RwSignal::new(LocationEditor::default()),
        toaster: ToasterInjection::expect_context(),
        restaurant_id: StoredValue::new(restaurant.id.clone()),
    };
    let editor = ctx.editor;

    // LOAD: the persisted position (if any) is validated right away and its
    // address resolved. Dispatched from an effect so the zone check and
    // reverse geocode only ever run in the browser, not during SSR.
    let initial_position = restaurant.position;
    let initial_address = StoredValue::new(restaurant.address.clone());
    Effect::new(move |_| {
        apply_event(
            ctx,
            EditorEvent::Loaded {
                position: initial_position,
                address: initial_address.get_value(),
            },
        );
    });

    let address = Signal::derive(move || editor.read().address.clone());
    let map_position =
        Signal::derive(move || editor.read().position.unwrap_or(fallback_center));
    let save_disabled = Signal::derive(move || !editor.read().can_save());

    view! {
        <div class="location-editor">
            <Flex vertical=true align=FlexAlign::Start>
                <Label>"Address"</Label>
                <GeocodeSearchBox
                    current_text=address
                    on_select=move |hit: shared_types::SearchHit| {
                        apply_event(ctx, EditorEvent::PositionChanged(hit.position));
                    }
                />
            </Flex>

            <MapSurface
                config=config
                position=map_position
                on_position=move |pos: Position| {
                    apply_event(ctx, EditorEvent::PositionChanged(pos));
                }
            />

            <div class="location-editor__footer">
                {move || {
                    editor.read().validating.then(|| view! {
                        <span class="location-editor__checking">
                            <Spinner size=SpinnerSize::Tiny />
                            " Checking delivery zone..."
                        </span>
                    })
                }}
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=save_disabled
                    on_click=move |_| apply_event(ctx, EditorEvent::SaveRequested)
                >
                    {move || if editor.read().saving { "Saving..." } else { "Save location" }}
                </Button>
            </div>
        </div>
    }
}
