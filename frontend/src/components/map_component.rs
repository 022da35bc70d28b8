use std::collections::HashMap;

use gloo_console::{error, info};
use gloo_utils::{document, window};
use leaflet::{LatLng, Map, MapOptions, Marker, MouseEvent, Popup, PopupOptions, TileLayer, TileLayerOptions};
use wasm_bindgen::{JsCast, prelude::Closure};
use web_sys::{Element, HtmlElement, Node};
use workout_tracker_lib::workout::{Coordinate, Workout};
use yew::prelude::*;

pub enum MapMsg {
    Located(Coordinate),
    LocateFailed,
}

pub struct MapComponent {
    map: Map,
    container: HtmlElement,
    markers: HashMap<String, Marker>,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub workouts: Vec<Workout>,
    pub on_map_click: Callback<Coordinate>,
}

impl MapComponent {
    fn render_map(&self) -> Html {
        let node: &Node = &self.container.clone().into();
        Html::VRef(node.clone())
    }

    fn subscribe_clicks(&self, ctx: &Context<Self>) {
        let on_map_click = ctx.props().on_map_click.clone();
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let latlng = event.lat_lng();
            on_map_click.emit(Coordinate::new(latlng.lat(), latlng.lng()));
        });
        self.map.on("click", closure.as_ref());
        closure.forget();
    }
}

impl Component for MapComponent {
    type Message = MapMsg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        let container: Element = document().create_element("div").unwrap();
        let container: HtmlElement = container.dyn_into().unwrap();
        container.set_class_name("map");

        let leaflet_map = Map::new_with_element(&container, &MapOptions::default());

        Self {
            map: leaflet_map,
            container,
            markers: HashMap::new(),
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.subscribe_clicks(ctx);
            request_position(
                ctx.link().callback(MapMsg::Located),
                ctx.link().callback(|()| MapMsg::LocateFailed),
            );
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MapMsg::Located(position) => {
                info!(format!("Centering map at {:.4}, {:.4}", position.lat, position.lng));
                self.map.set_view(&LatLng::new(position.lat, position.lng), 13.0);
                add_tile_layer(&self.map);
            }
            // One shot, no retry. The map stays uninitialized.
            MapMsg::LocateFailed => {
                error!("Geolocation request failed");
                let _ = window().alert_with_message("Could not get your position!");
            }
        }
        false
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.map.invalidate_size(false);

        // Place a marker for every workout that does not have one yet
        for workout in &ctx.props().workouts {
            if !self.markers.contains_key(&workout.workout_id) {
                let marker = place_marker(&self.map, workout);
                self.markers.insert(workout.workout_id.clone(), marker);
            }
        }

        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="map">
                {self.render_map()}
            </div>
        }
    }
}

fn place_marker(map: &Map, workout: &Workout) -> Marker {
    info!(format!("Placing {} marker for workout {}", workout.type_tag(), workout.workout_id));

    let marker = Marker::new(&LatLng::new(workout.position.lat, workout.position.lng));
    marker.add_to(map);

    let opts = PopupOptions::new();
    opts.set_max_width(250.0);
    opts.set_min_width(100.0);
    opts.set_auto_close(false);
    opts.set_close_on_click(false);
    opts.set_class_name(format!("{}-popup", workout.type_tag()));

    let popup = Popup::new(&opts, None);
    popup.set_content(&workout.title().into());

    marker.bind_popup(&popup);
    marker.open_popup();

    marker
}

fn add_tile_layer(map: &Map) {
    let opts = TileLayerOptions::new();
    opts.set_update_when_idle(true);
    opts.set_attribution(
        "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors".into(),
    );
    TileLayer::new_options("https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png", &opts).add_to(map);
}

// One-shot position fix. Either callback fires at most once; the closures
// are handed over to the browser and leaked.
fn request_position(on_found: Callback<Coordinate>, on_error: Callback<()>) {
    let Ok(geolocation) = window().navigator().geolocation() else {
        on_error.emit(());
        return;
    };

    let found = Closure::<dyn FnMut(web_sys::Position)>::new(move |position: web_sys::Position| {
        let coords = position.coords();
        on_found.emit(Coordinate::new(coords.latitude(), coords.longitude()));
    });
    let failed = on_error.clone();
    let errored = Closure::<dyn FnMut(web_sys::PositionError)>::new(move |_: web_sys::PositionError| {
        failed.emit(());
    });

    if geolocation
        .get_current_position_with_error_callback(
            found.as_ref().unchecked_ref(),
            Some(errored.as_ref().unchecked_ref()),
        )
        .is_err()
    {
        on_error.emit(());
        return;
    }

    found.forget();
    errored.forget();
}
