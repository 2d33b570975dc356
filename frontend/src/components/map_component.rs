use gloo_console::error;
use leaflet::{LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::JsValue;
use web_sys::{
    js_sys::{Object, Reflect},
    HtmlElement, Node,
};
use workout_tracker_lib::{
    config::PopupConfig,
    render::MarkerView,
    surface::{MapSurface, PanRequest},
    Coordinates, TrackerConfig,
};
use yew::prelude::*;

/// Leaflet map living in `container`, centered on the user's position.
pub struct LeafletMap {
    map: Map,
    popup: PopupConfig,
}

impl LeafletMap {
    pub fn new(container: &HtmlElement, at: Coordinates, config: &TrackerConfig, on_click: Callback<Coordinates>) -> Self {
        let map = Map::new_with_element(container, &MapOptions::default());
        map.set_view(&lat_lng(at), config.zoom_level);
        add_tile_layer(&map, config);

        map.on_mouse_click(Box::new(move |event: MouseEvent| {
            let clicked = event.lat_lng();
            on_click.emit(Coordinates::new(clicked.lat(), clicked.lng()));
        }));
        map.invalidate_size(false);

        Self {
            map,
            popup: config.popup.clone(),
        }
    }
}

impl MapSurface for LeafletMap {
    fn add_marker(&mut self, marker: &MarkerView) {
        let opts = PopupOptions::default();
        opts.set_max_width(self.popup.max_width);
        opts.set_min_width(self.popup.min_width);
        opts.set_auto_close(self.popup.auto_close);
        opts.set_close_on_click(self.popup.close_on_click);
        opts.set_class_name(marker.popup_class.clone());

        let popup = Popup::new(&opts, None);
        popup.set_content(&marker.popup_text.as_str().into());

        let pin = Marker::new(&lat_lng(marker.coordinates));
        pin.add_to(&self.map);
        pin.bind_popup(&popup);
        pin.open_popup();
    }

    fn center_on(&mut self, request: PanRequest) {
        let pan = Object::new();
        set_option(&pan, "duration", &request.pan_duration_secs.into());

        let options = Object::new();
        set_option(&options, "animate", &request.animate.into());
        set_option(&options, "pan", &pan);

        self.map.set_view_with_options(&lat_lng(request.center), request.zoom, &options);
    }
}

/// Wraps the map container so Yew can mount it.
pub fn render_map(container: &HtmlElement) -> Html {
    let node: &Node = container;
    Html::VRef(node.clone())
}

fn lat_lng(at: Coordinates) -> LatLng {
    LatLng::new(at.latitude, at.longitude)
}

fn set_option(target: &Object, key: &str, value: &JsValue) {
    if let Err(err) = Reflect::set(target, &key.into(), value) {
        error!(format!("Failed to set map option {key}"), err);
    }
}

fn add_tile_layer(map: &Map, config: &TrackerConfig) {
    let opts = TileLayerOptions::new();
    opts.set_update_when_idle(true);
    opts.set_attribution(config.attribution.clone());
    TileLayer::new_options(&config.tile_url, &opts).add_to(map);
}
