use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::draft::{AuxField, WorkoutDraft, WorkoutType};
use yew::prelude::*;

/// The workout entry form. Two states: hidden (initial) and visible, driven
/// by the `visible` prop. Becoming visible focuses the distance field;
/// becoming hidden clears all inputs.
pub struct WorkoutForm {
    distance_ref: NodeRef,
    duration_ref: NodeRef,
    cadence_ref: NodeRef,
    elevation_ref: NodeRef,
}

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub visible: bool,
    pub selected_type: WorkoutType,
    pub on_submit: Callback<WorkoutDraft>,
    pub on_type_change: Callback<WorkoutType>,
}

impl WorkoutForm {
    fn focus_distance(&self) {
        if let Some(input) = self.distance_ref.cast::<HtmlInputElement>() {
            let _ = input.focus();
        }
    }

    fn clear_inputs(&self) {
        for node_ref in [&self.distance_ref, &self.duration_ref, &self.cadence_ref, &self.elevation_ref] {
            if let Some(input) = node_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
        }
    }
}

impl Component for WorkoutForm {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            distance_ref: NodeRef::default(),
            duration_ref: NodeRef::default(),
            cadence_ref: NodeRef::default(),
            elevation_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let visible = ctx.props().visible;
        if visible && !old_props.visible {
            self.focus_distance();
        }
        if !visible && old_props.visible {
            self.clear_inputs();
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let aux = props.selected_type.aux_field();

        let onsubmit = {
            let on_submit = props.on_submit.clone();
            let workout_type = props.selected_type;
            let distance_ref = self.distance_ref.clone();
            let duration_ref = self.duration_ref.clone();
            let cadence_ref = self.cadence_ref.clone();
            let elevation_ref = self.elevation_ref.clone();
            Callback::from(move |event: SubmitEvent| {
                event.prevent_default();
                on_submit.emit(WorkoutDraft {
                    workout_type,
                    distance: input_value(&distance_ref),
                    duration: input_value(&duration_ref),
                    cadence: input_value(&cadence_ref),
                    elevation: input_value(&elevation_ref),
                });
            })
        };

        let onchange = {
            let on_type_change = props.on_type_change.clone();
            Callback::from(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                if let Ok(workout_type) = select.value().parse() {
                    on_type_change.emit(workout_type);
                }
            })
        };

        html! {
            <form class={classes!("form", (!props.visible).then_some("hidden"))} {onsubmit}>
                <div class="form__row">
                    <label class="form__label">{"Type"}</label>
                    <select class="form__input form__input--type" {onchange}>
                        <option value="running" selected={props.selected_type == WorkoutType::Running}>{"Running"}</option>
                        <option value="cycling" selected={props.selected_type == WorkoutType::Cycling}>{"Cycling"}</option>
                    </select>
                </div>
                <div class="form__row">
                    <label class="form__label">{"Distance"}</label>
                    <input class="form__input form__input--distance" placeholder="km" ref={self.distance_ref.clone()} />
                </div>
                <div class="form__row">
                    <label class="form__label">{"Duration"}</label>
                    <input class="form__input form__input--duration" placeholder="min" ref={self.duration_ref.clone()} />
                </div>
                <div class={classes!("form__row", (aux != AuxField::Cadence).then_some("form__row--hidden"))}>
                    <label class="form__label">{"Cadence"}</label>
                    <input class="form__input form__input--cadence" placeholder="step/min" ref={self.cadence_ref.clone()} />
                </div>
                <div class={classes!("form__row", (aux != AuxField::Elevation).then_some("form__row--hidden"))}>
                    <label class="form__label">{"Elev Gain"}</label>
                    <input class="form__input form__input--elevation" placeholder="meters" ref={self.elevation_ref.clone()} />
                </div>
                <button class="form__btn">{"OK"}</button>
            </form>
        }
    }
}

fn input_value(node_ref: &NodeRef) -> String {
    node_ref
        .cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}
