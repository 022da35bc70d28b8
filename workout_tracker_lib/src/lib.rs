pub mod draft;
pub mod workout;
