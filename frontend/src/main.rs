use crate::components::{
    map_component::MapComponent,
    workout_form::WorkoutForm,
    workout_panel::WorkoutPanel,
};
use gloo_console::info;
use gloo_utils::window;
use workout_tracker_lib::draft::{build_workout, DraftError, WorkoutDraft, WorkoutType};
use workout_tracker_lib::workout::{Coordinate, Workout};
use yew::prelude::*;

mod components;

enum MainMsg {
    MapClicked(Coordinate),
    TypeChanged(WorkoutType),
    FormSubmitted(WorkoutDraft),
}

struct Model {
    workouts: Vec<Workout>,
    pending_click: Option<Coordinate>,
    selected_type: WorkoutType,
    form_visible: bool,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            workouts: Vec::new(),
            pending_click: None,
            selected_type: WorkoutType::default(),
            form_visible: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::MapClicked(position) => {
                info!(format!("Map clicked at {:.4}, {:.4}", position.lat, position.lng));
                self.pending_click = Some(position);
                self.form_visible = true;
            }
            MainMsg::TypeChanged(workout_type) => {
                self.selected_type = workout_type;
            }
            MainMsg::FormSubmitted(draft) => match build_workout(&draft, self.pending_click) {
                Ok(workout) => {
                    info!(format!("Logged {} workout {}", workout.type_tag(), workout.workout_id));
                    self.workouts.push(workout);
                    // Hiding the form also clears its inputs
                    self.form_visible = false;
                }
                // The form only shows up after a map click, so a submission
                // with no pending location is a stray event
                Err(DraftError::NoPendingLocation) => {}
                Err(err) => {
                    let _ = window().alert_with_message(&err.to_string());
                }
            },
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! { <>
            <WorkoutPanel workouts={self.workouts.clone()} />
            <WorkoutForm
                visible={self.form_visible}
                selected_type={self.selected_type}
                on_submit={link.callback(MainMsg::FormSubmitted)}
                on_type_change={link.callback(MainMsg::TypeChanged)}
            />
            <MapComponent
                workouts={self.workouts.clone()}
                on_map_click={link.callback(MainMsg::MapClicked)}
            />
        </> }
    }
}

fn main() {
    yew::Renderer::<Model>::new().render();
}
