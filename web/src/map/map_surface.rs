use leptos::prelude::*;
use leptos_leaflet::prelude::*;
use shared_types::{BoundingBox, Position as GeoPosition};

use crate::config::AppConfig;
use crate::state::Notice;

/// Click/drag filter. Implausible or out-of-area points never reach the
/// controller; the caller dispatches the returned notice instead.
fn gate(pos: GeoPosition, bounds: BoundingBox) -> Result<GeoPosition, Notice> {
    if !pos.is_plausible() || !bounds.contains(&pos) {
        return Err(Notice::OutsideServiceArea);
    }
    Ok(pos)
}

/// Leaflet surface for the location editor: one draggable marker, clicks
/// and drag-ends funneled into the same `on_position` path, and a
/// recenter whenever the authoritative position changes.
///
/// A rejected drag-end snaps the marker back to the authoritative position
/// so the marker never rests outside the service area.
#[component]
pub fn MapSurface<F>(
    config: AppConfig,
    position: Signal<GeoPosition>,
    on_position: F,
) -> impl IntoView
where
    F: Fn(GeoPosition) + 'static + Copy + Send + Sync,
{
    let tile_url = config.tile_url_template.clone();
    let zoom = config.map_zoom;

    let center: Memo<Position> = Memo::new(move |_| {
        let GeoPosition { lat, lng } = position.get();
        Position::new(lat, lng)
    });

    let map = JsRwSignal::new_local(None::<leptos_leaflet::leaflet::Map>);

    // Recenter on programmatic position changes without touching the zoom.
    Effect::new(move |_| {
        let new_pos = center.get();
        if let Some(map) = map.get_untracked() {
            map.set_view(&new_pos.as_lat_lng(), map.get_zoom());
        }
    });

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use leptos_leaflet::leaflet::{LatLng, Marker, MarkerOptions, MouseEvent};
        use thaw::ToasterInjection;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        use crate::components::toast::dispatch_notice;

        let toaster = ToasterInjection::expect_context();
        let click_bounds = config.click_bounds;

        let marker_slot: Rc<RefCell<Option<Marker>>> = Rc::new(RefCell::new(None));

        // Marker setup once the map instance exists.
        Effect::new({
            let marker_slot = Rc::clone(&marker_slot);
            move |_| {
                let Some(map_instance) = map.read_only().get() else {
                    return;
                };
                if marker_slot.borrow().is_some() {
                    return;
                }

                let GeoPosition { lat, lng } = position.get_untracked();
                let options = MarkerOptions::new();
                options.set_draggable(true);
                let marker = Marker::new_with_options(&LatLng::new(lat, lng), &options);
                marker.add_to(&map_instance);

                let drag_marker = marker.clone();
                let drag_closure = Closure::wrap(Box::new(move || {
                    let latlng = drag_marker.get_lat_lng();
                    match gate(GeoPosition::new(latlng.lat(), latlng.lng()), click_bounds) {
                        Ok(pos) => on_position(pos),
                        Err(notice) => {
                            // Leaflet already moved the marker; put it back
                            // under the authoritative position.
                            let GeoPosition { lat, lng } = position.get_untracked();
                            drag_marker.set_lat_lng(&LatLng::new(lat, lng));
                            dispatch_notice(toaster, notice);
                        }
                    }
                }) as Box<dyn FnMut()>);
                marker.on("dragend", drag_closure.as_ref().unchecked_ref());
                drag_closure.forget();

                let click_closure = Closure::wrap(Box::new(move |ev: MouseEvent| {
                    let latlng = ev.lat_lng();
                    match gate(GeoPosition::new(latlng.lat(), latlng.lng()), click_bounds) {
                        Ok(pos) => on_position(pos),
                        Err(notice) => dispatch_notice(toaster, notice),
                    }
                }) as Box<dyn FnMut(MouseEvent)>);
                map_instance.on("click", click_closure.as_ref().unchecked_ref());
                click_closure.forget();

                *marker_slot.borrow_mut() = Some(marker);
            }
        });

        // Keep the marker under the authoritative position.
        Effect::new({
            let marker_slot = Rc::clone(&marker_slot);
            move |_| {
                let GeoPosition { lat, lng } = position.get();
                if let Some(marker) = marker_slot.borrow().as_ref() {
                    marker.set_lat_lng(&LatLng::new(lat, lng));
                }
            }
        });
    }

    view! {
        <MapContainer
            style="height: 60vh"
            center=center.get()
            zoom=zoom
            set_view=true
            map=map.write_only()
        >
            <TileLayer
                url=tile_url
                attribution="&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
            />
        </MapContainer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: BoundingBox = BoundingBox {
        south: 52.25,
        west: 12.9,
        north: 52.75,
        east: 13.85,
    };

    #[test]
    fn in_area_position_passes_through() {
        let pos = GeoPosition::new(52.50, 13.40);
        assert_eq!(gate(pos, BOUNDS), Ok(pos));
    }

    #[test]
    fn out_of_area_position_is_rejected_with_notice() {
        let munich = GeoPosition::new(48.14, 11.58);
        assert_eq!(gate(munich, BOUNDS), Err(Notice::OutsideServiceArea));
    }

    #[test]
    fn implausible_coordinates_are_rejected() {
        assert_eq!(
            gate(GeoPosition::new(120.0, 13.4), BOUNDS),
            Err(Notice::OutsideServiceArea)
        );
        assert_eq!(
            gate(GeoPosition::new(52.5, -400.0), BOUNDS),
            Err(Notice::OutsideServiceArea)
        );
    }

    #[test]
    fn boundary_positions_are_inside() {
        assert!(gate(GeoPosition::new(BOUNDS.south, BOUNDS.west), BOUNDS).is_ok());
        assert!(gate(GeoPosition::new(BOUNDS.north, BOUNDS.east), BOUNDS).is_ok());
    }
}
