pub mod map_component;
pub mod workout_form;
pub mod workout_panel;
