use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::workout::{Coordinate, Workout};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    #[default]
    Running,
    Cycling,
}

/// Which of the two auxiliary form rows is visible. Exactly one per type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuxField {
    Cadence,
    Elevation,
}

impl WorkoutType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Running => Self::Cycling,
            Self::Cycling => Self::Running,
        }
    }

    pub fn aux_field(self) -> AuxField {
        match self {
            Self::Running => AuxField::Cadence,
            Self::Cycling => AuxField::Elevation,
        }
    }
}

impl FromStr for WorkoutType {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "running" => Ok(Self::Running),
            "cycling" => Ok(Self::Cycling),
            _ => Err("unknown workout type"),
        }
    }
}

/// The raw form field values exactly as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutDraft {
    pub workout_type: WorkoutType,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    /// The display text is the user-facing alert message.
    #[error("Inputs have to be positive numbers")]
    InvalidNumbers,
    #[error("no map location has been picked yet")]
    NoPendingLocation,
}

pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|value| value.is_finite())
}

pub fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|value| *value > 0.0)
}

// Unparsable input (including the empty string) becomes NaN so the
// finiteness check rejects it.
fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// The submission pipeline: parse the draft, validate every numeric field as
/// finite and strictly positive, and build the matching workout variant at
/// the pending map click. With no pending click nothing is created.
pub fn build_workout(draft: &WorkoutDraft, pending_click: Option<Coordinate>) -> Result<Workout, DraftError> {
    let position = pending_click.ok_or(DraftError::NoPendingLocation)?;

    let distance = parse_number(&draft.distance);
    let duration = parse_number(&draft.duration);

    match draft.workout_type {
        WorkoutType::Running => {
            let cadence = parse_number(&draft.cadence);
            if !all_finite(&[distance, duration, cadence]) || !all_positive(&[distance, duration, cadence]) {
                return Err(DraftError::InvalidNumbers);
            }
            Ok(Workout::running(position, distance, duration, cadence))
        }
        WorkoutType::Cycling => {
            let elevation = parse_number(&draft.elevation);
            if !all_finite(&[distance, duration, elevation]) || !all_positive(&[distance, duration, elevation]) {
                return Err(DraftError::InvalidNumbers);
            }
            Ok(Workout::cycling(position, distance, duration, elevation))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::WorkoutKind;

    const CLICK: Coordinate = Coordinate { lat: 51.5, lng: -0.12 };

    fn draft(workout_type: WorkoutType, distance: &str, duration: &str, aux: &str) -> WorkoutDraft {
        let mut draft = WorkoutDraft {
            workout_type,
            distance: distance.into(),
            duration: duration.into(),
            ..WorkoutDraft::default()
        };
        match workout_type {
            WorkoutType::Running => draft.cadence = aux.into(),
            WorkoutType::Cycling => draft.elevation = aux.into(),
        }
        draft
    }

    #[test]
    fn running_submission_builds_a_running_workout() {
        let mut workouts = Vec::new();

        let workout = build_workout(&draft(WorkoutType::Running, "5", "25", "180"), Some(CLICK)).unwrap();
        workouts.push(workout.clone());

        assert_eq!(workouts.len(), 1);
        assert_eq!(workout.position, CLICK);
        assert_eq!(workout.type_tag(), "running");
        match workout.kind {
            WorkoutKind::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                assert_eq!(cadence_spm, 180.0);
                assert_eq!(pace_min_per_km, 5.0);
            }
            WorkoutKind::Cycling { .. } => panic!("expected a running workout"),
        }
    }

    #[test]
    fn cycling_submission_builds_a_cycling_workout() {
        let workout = build_workout(&draft(WorkoutType::Cycling, "27", "95", "523"), Some(CLICK)).unwrap();

        assert_eq!(workout.type_tag(), "cycling");
        match workout.kind {
            WorkoutKind::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => {
                assert_eq!(elevation_gain_m, 523.0);
                assert_eq!(speed_km_per_h, 27.0 / 95.0);
            }
            WorkoutKind::Running { .. } => panic!("expected a cycling workout"),
        }
    }

    #[test]
    fn submission_without_a_map_click_creates_nothing() {
        let result = build_workout(&draft(WorkoutType::Running, "5", "25", "180"), None);

        assert_eq!(result, Err(DraftError::NoPendingLocation));
    }

    #[test]
    fn zero_distance_is_rejected() {
        let result = build_workout(&draft(WorkoutType::Running, "0", "25", "180"), Some(CLICK));

        assert_eq!(result, Err(DraftError::InvalidNumbers));
    }

    #[test]
    fn non_numeric_input_is_rejected() {
        let result = build_workout(&draft(WorkoutType::Running, "five", "25", "180"), Some(CLICK));

        assert_eq!(result, Err(DraftError::InvalidNumbers));
    }

    #[test]
    fn empty_fields_are_rejected() {
        let result = build_workout(&draft(WorkoutType::Cycling, "", "", ""), Some(CLICK));

        assert_eq!(result, Err(DraftError::InvalidNumbers));
    }

    #[test]
    fn negative_duration_is_rejected() {
        let result = build_workout(&draft(WorkoutType::Cycling, "27", "-95", "523"), Some(CLICK));

        assert_eq!(result, Err(DraftError::InvalidNumbers));
    }

    #[test]
    fn non_positive_elevation_is_rejected() {
        for elevation in ["0", "-120"] {
            let result = build_workout(&draft(WorkoutType::Cycling, "27", "95", elevation), Some(CLICK));
            assert_eq!(result, Err(DraftError::InvalidNumbers));
        }
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let workout = build_workout(&draft(WorkoutType::Running, " 5 ", " 25", "180 "), Some(CLICK)).unwrap();

        assert_eq!(workout.distance_km, 5.0);
        assert_eq!(workout.duration_min, 25.0);
    }

    #[test]
    fn invalid_input_alert_text() {
        assert_eq!(DraftError::InvalidNumbers.to_string(), "Inputs have to be positive numbers");
    }

    #[test]
    fn predicates_reject_edge_values() {
        assert!(all_finite(&[1.0, 0.5]));
        assert!(!all_finite(&[1.0, f64::NAN]));
        assert!(!all_finite(&[f64::INFINITY]));
        assert!(all_positive(&[0.1, 42.0]));
        assert!(!all_positive(&[0.0]));
        assert!(!all_positive(&[1.0, -2.0]));
    }

    #[test]
    fn exactly_one_aux_field_per_type() {
        for workout_type in [WorkoutType::Running, WorkoutType::Cycling] {
            let cadence = workout_type.aux_field() == AuxField::Cadence;
            let elevation = workout_type.aux_field() == AuxField::Elevation;
            assert!(cadence ^ elevation);
        }
    }

    #[test]
    fn toggling_flips_the_aux_field() {
        assert_eq!(WorkoutType::Running.toggled(), WorkoutType::Cycling);
        assert_eq!(WorkoutType::Cycling.toggled(), WorkoutType::Running);
        for workout_type in [WorkoutType::Running, WorkoutType::Cycling] {
            assert_ne!(workout_type.aux_field(), workout_type.toggled().aux_field());
        }
    }

    #[test]
    fn select_values_round_trip() {
        assert_eq!("running".parse(), Ok(WorkoutType::Running));
        assert_eq!("cycling".parse(), Ok(WorkoutType::Cycling));
        assert!("hiking".parse::<WorkoutType>().is_err());
        assert_eq!(WorkoutType::Running.as_str(), "running");
        assert_eq!(WorkoutType::Cycling.as_str(), "cycling");
    }
}
