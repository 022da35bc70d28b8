use workout_tracker_lib::workout::Workout;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct PanelProps {
    pub workouts: Vec<Workout>,
}

#[function_component]
pub fn WorkoutPanel(props: &PanelProps) -> Html {
    html! {
        <div class="panel component-container">
            <h1>{"Workout log"}</h1>
            if props.workouts.is_empty() {
                <label>{"Click anywhere on the map to log a workout."}</label>
            }
            <ul class="workouts">
                { for props.workouts.iter().map(render_entry) }
            </ul>
        </div>
    }
}

fn render_entry(workout: &Workout) -> Html {
    html! {
        <li class={classes!("workout", format!("workout--{}", workout.type_tag()))} key={workout.workout_id.clone()}>
            <h2 class="workout__title">{workout.title()}</h2>
            <div class="workout__details">
                {format!("{} km in {} min", workout.distance_km, workout.duration_min)}
            </div>
            <div class="workout__details">{workout.summary()}</div>
        </li>
    }
}
