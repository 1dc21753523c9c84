use leptos::{prelude::*, task::spawn_local};
use shared_types::SearchHit;

use crate::server::search_places;

/// The outside-click listener must span the whole search session, not just
/// the moments a result list is showing; a click-away during a pending or
/// failed search still has to revert the text.
fn search_session_active(editing: bool, searching: bool, has_results: bool) -> bool {
    editing || searching || has_results
}

/// Geocoding typeahead over the platform's search endpoint.
///
/// `current_text` is the controller's authoritative display text: the box
/// follows it while not being edited, and reverts to it when the user
/// clicks away without selecting a result. Selecting a hit hands the whole
/// `SearchHit` (position already in lat/lng order) to `on_select`.
#[component]
pub fn GeocodeSearchBox<F>(current_text: Signal<String>, on_select: F) -> impl IntoView
where
    F: Fn(SearchHit) + 'static + Copy + Send + Sync,
{
    let search_text = RwSignal::new(current_text.get_untracked());
    let results = RwSignal::new(Vec::<SearchHit>::new());
    let is_searching = RwSignal::new(false);
    let is_editing = RwSignal::new(false);
    // Monotonic tag per outgoing search; only the newest completion lands.
    let query_generation = RwSignal::new(0u64);
    let container_ref = NodeRef::<leptos::html::Div>::new();

    let run_search = move |query: String| {
        let generation = query_generation.get_untracked() + 1;
        query_generation.set(generation);

        // Empty input clears the list locally; no request goes out.
        if query.trim().is_empty() {
            results.set(Vec::new());
            is_searching.set(false);
            return;
        }

        is_searching.set(true);
        results.set(Vec::new());
        spawn_local(async move {
            let outcome = search_places(query).await;
            if query_generation.get_untracked() != generation {
                return;
            }
            is_searching.set(false);
            match outcome {
                Ok(hits) => results.set(hits),
                Err(e) => {
                    leptos::logging::warn!("Geocoding search failed: {}", e);
                    results.set(Vec::new());
                }
            }
        });
    };

    let handle_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        search_text.set(value.clone());
        run_search(value);
    };

    let select_hit = move |hit: SearchHit| {
        search_text.set(hit.name.clone());
        results.set(Vec::new());
        on_select(hit);
    };

    let dismiss = move || {
        results.set(Vec::new());
        is_searching.set(false);
        // Resynchronize with the controller's value; the user walked away
        // without picking anything.
        search_text.set(current_text.get_untracked());
    };

    // One-way sync from the controller while the box is not being edited.
    Effect::new(move |_| {
        let authoritative = current_text.get();
        if !is_editing.get_untracked() {
            search_text.set(authoritative);
        }
    });

    // Pointer-down anywhere outside the container dismisses the result
    // list. The document listener is held while a search session is active
    // and released when the session ends or the component unmounts.
    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        type ListenerSlot = Rc<RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>>>;
        let listener: ListenerSlot = Rc::new(RefCell::new(None));

        let release = {
            let listener = Rc::clone(&listener);
            move || {
                if let Some(closure) = listener.borrow_mut().take() {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let _ = document.remove_event_listener_with_callback(
                            "pointerdown",
                            closure.as_ref().unchecked_ref(),
                        );
                    }
                }
            }
        };

        Effect::new({
            let listener = Rc::clone(&listener);
            let release = release.clone();
            move |_| {
                let active = search_session_active(
                    is_editing.get(),
                    is_searching.get(),
                    !results.get().is_empty(),
                );
                if !active {
                    release();
                    return;
                }
                if listener.borrow().is_some() {
                    return;
                }
                let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                    return;
                };
                let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
                    let inside = container_ref
                        .get_untracked()
                        .zip(ev.target())
                        .map(|(container, target)| {
                            target
                                .dyn_into::<web_sys::Node>()
                                .map(|node| container.contains(Some(&node)))
                                .unwrap_or(false)
                        })
                        .unwrap_or(false);
                    if !inside {
                        dismiss();
                    }
                }) as Box<dyn FnMut(web_sys::Event)>);
                if document
                    .add_event_listener_with_callback(
                        "pointerdown",
                        closure.as_ref().unchecked_ref(),
                    )
                    .is_ok()
                {
                    *listener.borrow_mut() = Some(closure);
                }
            }
        });

        // `on_cleanup` demands `Send + Sync`; the listener slot is wasm-only
        // single-threaded state, so a SendWrapper bridges the bound.
        let release = send_wrapper::SendWrapper::new(release);
        on_cleanup(move || release.take()());
    }

    view! {
        <div class="geocode-search" node_ref=container_ref>
            <input
                type="text"
                class="geocode-search__input"
                placeholder="Search for an address..."
                prop:value=move || search_text.get()
                on:input=handle_input
                on:focus=move |_| is_editing.set(true)
                on:blur=move |_| is_editing.set(false)
            />

            {move || {
                if is_searching.get() {
                    view! {
                        <div class="geocode-search__loading">"Searching..."</div>
                    }
                        .into_any()
                } else {
                    let hits = results.get();
                    if hits.is_empty() {
                        view! { <></> }.into_any()
                    } else {
                        view! {
                            <div class="geocode-search__results">
                                {hits
                                    .into_iter()
                                    .map(|hit| {
                                        let detail = hit.detail_line();
                                        let name = hit.name.clone();
                                        view! {
                                            <div
                                                class="geocode-search__result"
                                                on:mousedown=move |_| select_hit(hit.clone())
                                            >
                                                <span class="geocode-search__result-name">{name}</span>
                                                <span class="geocode-search__result-detail">{detail}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::search_session_active;

    #[test]
    fn listener_spans_pending_and_failed_searches() {
        // Focused but idle, request in flight, and results showing all hold
        // the listener; only a fully idle box releases it.
        assert!(search_session_active(true, false, false));
        assert!(search_session_active(false, true, false));
        assert!(search_session_active(false, false, true));
        assert!(!search_session_active(false, false, false));
    }
}
