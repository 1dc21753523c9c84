use leptos::{prelude::*, task::spawn_local};
use shared_types::{Banner, BannerElement};
use thaw::{Button, ButtonAppearance, Input, Label, Select, ToastIntent, ToasterInjection};
use thaw_utils::Model;

use crate::{
    components::{error::ErrorView, loading::LoadingView, toast::dispatch_message},
    server::{get_banners, remove_banner, save_banner},
};

/// Banner list plus a per-banner element editor. Banner templates are a
/// closed set of element kinds; the editor only ever constructs
/// `BannerElement` variants, never free-form key/value pairs.
#[component]
pub fn BannersPage() -> impl IntoView {
    let reload = RwSignal::new(0u32);
    let banners = Resource::new(move || reload.get(), |_| async move { get_banners().await });
    let editing = RwSignal::new(Option::<Banner>::None);
    let toaster = ToasterInjection::expect_context();

    let delete = move |id: String| {
        spawn_local(async move {
            match remove_banner(id).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(err) => {
                    leptos::logging::warn!("Banner delete failed: {}", err);
                    dispatch_message(
                        toaster,
                        ToastIntent::Error,
                        "Banner",
                        "Deleting the banner failed.".to_string(),
                    );
                }
            }
        });
    };

    view! {
        <div class="banners-page">
            <div class="banners-page__header">
                <h1>"Banners"</h1>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(Banner {
                        id: String::new(),
                        title: String::new(),
                        is_active: false,
                        elements: Vec::new(),
                    }))
                >
                    "New banner"
                </Button>
            </div>

            <Suspense fallback=|| view! {
                <LoadingView message=Some("Fetching banners...".to_string()) />
            }>
                {move || match banners.get() {
                    Some(Ok(list)) => view! {
                        <div class="banners-page__list">
                            {list.into_iter().map(|banner| {
                                let for_edit = banner.clone();
                                let id = banner.id.clone();
                                view! {
                                    <div class="banner-row">
                                        <span class="banner-row__title">{banner.title.clone()}</span>
                                        <span class="banner-row__state">
                                            {if banner.is_active { "active" } else { "inactive" }}
                                        </span>
                                        <span class="banner-row__elements">
                                            {format!("{} elements", banner.elements.len())}
                                        </span>
                                        <Button on_click=move |_| editing.set(Some(for_edit.clone()))>
                                            "Edit"
                                        </Button>
                                        <Button on_click=move |_| delete(id.clone())>
                                            "Delete"
                                        </Button>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any(),
                    Some(Err(err)) => {
                        leptos::logging::warn!("Failed to load banners: {}", err);
                        view! {
                            <ErrorView message=Some("Could not load banners.".to_string()) />
                        }.into_any()
                    },
                    None => view! {
                        <LoadingView message=Some("Fetching banners...".to_string()) />
                    }.into_any(),
                }}
            </Suspense>

            {move || editing.get().map(|banner| view! {
                <BannerEditor
                    banner=banner
                    on_done=move |changed: bool| {
                        editing.set(None);
                        if changed {
                            reload.update(|n| *n += 1);
                        }
                    }
                />
            })}
        </div>
    }
}

#[component]
fn BannerEditor<F>(banner: Banner, on_done: F) -> impl IntoView
where
    F: Fn(bool) + 'static + Copy + Send + Sync,
{
    let toaster = ToasterInjection::expect_context();
    let draft = RwSignal::new(banner);
    let title = RwSignal::new(draft.get_untracked().title);
    let is_active = RwSignal::new(draft.get_untracked().is_active);
    let new_kind = RwSignal::new("title".to_string());
    let new_value = RwSignal::new(String::new());
    let new_kind_model: Model<String> = new_kind.into();
    let saving = RwSignal::new(false);

    let add_element = move |_| {
        let Some(element) =
            BannerElement::from_parts(&new_kind.get_untracked(), new_value.get_untracked())
        else {
            return;
        };
        draft.update(|b| b.elements.push(element));
        new_value.set(String::new());
    };

    let save = move |_| {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let mut banner = draft.get_untracked();
        banner.title = title.get_untracked();
        banner.is_active = is_active.get_untracked();
        spawn_local(async move {
            match save_banner(banner).await {
                Ok(()) => {
                    dispatch_message(
                        toaster,
                        ToastIntent::Success,
                        "Banner",
                        "Banner saved.".to_string(),
                    );
                    on_done(true);
                }
                Err(err) => {
                    leptos::logging::warn!("Banner save failed: {}", err);
                    dispatch_message(
                        toaster,
                        ToastIntent::Error,
                        "Banner",
                        "Saving the banner failed.".to_string(),
                    );
                    saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="banner-editor">
            <h2>"Edit banner"</h2>
            <Label>"Title"</Label>
            <Input value=title />

            <Label>"Active"</Label>
            <Button on_click=move |_| is_active.update(|a| *a = !*a)>
                {move || if is_active.get() { "Active" } else { "Inactive" }}
            </Button>

            <h3>"Elements"</h3>
            <div class="banner-editor__elements">
                {move || draft.get().elements.into_iter().enumerate().map(|(idx, element)| {
                    view! {
                        <div class="banner-editor__element">
                            <span class="banner-editor__element-kind">{element.kind_label()}</span>
                            <span class="banner-editor__element-value">{element.value().to_string()}</span>
                            <Button on_click=move |_| draft.update(|b| { b.elements.remove(idx); })>
                                "Remove"
                            </Button>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="banner-editor__add">
                <Select value=new_kind_model>
                    {BannerElement::KINDS.into_iter().map(|kind| view! {
                        <option value=kind>{kind}</option>
                    }).collect_view()}
                </Select>
                <Input value=new_value placeholder="Element value" />
                <Button on_click=add_element>"Add element"</Button>
            </div>

            <div class="banner-editor__footer">
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    {move || if saving.get() { "Saving..." } else { "Save banner" }}
                </Button>
                <Button on_click=move |_| on_done(false)>"Cancel"</Button>
            </div>
        </div>
    }
}
