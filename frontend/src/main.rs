use crate::components::{
    map_component::{render_map, LeafletMap},
    workout_form::WorkoutForm,
    workout_list::{RowBuffer, WorkoutList},
};
use gloo_console::{error, info};
use gloo_timers::callback::Timeout;
use gloo_utils::document;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};
use workout_tracker_lib::{form::FormField, Coordinates, TrackerError, WorkoutKind, WorkoutTracker};
use yew::prelude::*;

use util::{BrowserAlerts, DomTarget};

mod components;
mod geolocation;
mod util;

type Tracker = WorkoutTracker<LeafletMap, RowBuffer, BrowserAlerts>;

enum MainMsg {
    Located(Coordinates),
    LocationFailed(TrackerError),
    MapClicked(Coordinates),
    TypeChanged(WorkoutKind),
    Input(FormField, String),
    Submit,
    Cancel,
    ListClicked(DomTarget),
    FormRevealed,
}

struct Model {
    tracker: Tracker,
    map_container: HtmlElement,
    distance_input: NodeRef,
    focus_distance: bool,
    form_settling: Option<Timeout>,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let container: HtmlElement = match document().create_element("div") {
            Ok(container) => container.unchecked_into(),
            Err(err) => wasm_bindgen::throw_val(err),
        };
        container.set_id("map");
        container.set_class_name("map");

        Self {
            tracker: WorkoutTracker::new(util::load_config(), RowBuffer::default(), BrowserAlerts),
            map_container: container,
            distance_input: NodeRef::default(),
            focus_distance: false,
            form_settling: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            geolocation::request_position(ctx.link().callback(|position: Result<Coordinates, TrackerError>| match position {
                Ok(at) => MainMsg::Located(at),
                Err(err) => MainMsg::LocationFailed(err),
            }));
        }

        if self.focus_distance {
            self.focus_distance = false;
            if let Some(input) = self.distance_input.cast::<HtmlInputElement>() {
                if let Err(err) = input.focus() {
                    error!("Failed to focus distance input", err);
                }
            }
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::Located(at) => {
                info!(format!("Located at {}, {}", at.latitude, at.longitude));
                let map = LeafletMap::new(
                    &self.map_container,
                    at,
                    self.tracker.config(),
                    ctx.link().callback(MainMsg::MapClicked),
                );
                self.tracker.attach_map(map);
            }
            MainMsg::LocationFailed(err) => {
                error!(format!("Location failed: {err}"));
                self.tracker.on_location_failed(err);
            }
            MainMsg::MapClicked(at) => {
                if let Err(err) = self.tracker.on_map_click(at) {
                    error!(err.to_string());
                    return false;
                }
                self.focus_distance = true;
            }
            MainMsg::TypeChanged(kind) => self.tracker.on_type_change(kind),
            MainMsg::Input(field, value) => self.tracker.on_input(field, value),
            MainMsg::Submit => match self.tracker.on_submit() {
                Ok(id) => {
                    info!(format!("Added workout {id}"));
                    let link = ctx.link().clone();
                    let delay = self.tracker.config().form_reveal_delay_ms;
                    self.form_settling = Some(Timeout::new(delay, move || link.send_message(MainMsg::FormRevealed)));
                }
                // Already alerted
                Err(TrackerError::InvalidWorkoutInput { .. }) => return false,
                Err(err) => {
                    error!(err.to_string());
                    return false;
                }
            },
            MainMsg::Cancel => self.tracker.on_cancel(),
            MainMsg::ListClicked(target) => {
                self.tracker.on_list_click(&target);
                return false;
            }
            MainMsg::FormRevealed => self.form_settling = None,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let form = self.tracker.form();

        html! {
            <>
                <div class="sidebar">
                    if let Some(reason) = self.tracker.degraded_reason() {
                        <p class="map-status">{ reason.to_owned() }</p>
                    }
                    <ul class="workouts" onclick={link.callback(|e: MouseEvent| MainMsg::ListClicked(DomTarget::from_event(&e)))}>
                        <WorkoutForm
                            open={form.is_open()}
                            settling={self.form_settling.is_some()}
                            draft={form.draft().clone()}
                            secondary={form.secondary_field()}
                            distance_ref={self.distance_input.clone()}
                            on_type_change={link.callback(MainMsg::TypeChanged)}
                            on_input={link.callback(|(field, value): (FormField, String)| MainMsg::Input(field, value))}
                            on_submit={link.callback(|()| MainMsg::Submit)}
                            on_cancel={link.callback(|()| MainMsg::Cancel)}
                        />
                        <WorkoutList rows={self.tracker.list().rows().to_vec()} />
                    </ul>
                </div>
                { render_map(&self.map_container) }
            </>
        }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
