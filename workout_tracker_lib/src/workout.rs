use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Type-specific payload plus the metric derived at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkoutKind {
    Running {
        cadence_spm: f64,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_h: f64,
    },
}

/// One logged exercise session. Immutable once built; inputs are validated
/// upstream (see [`crate::draft::build_workout`]), never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub workout_id: String,
    pub timestamp: DateTime<Utc>,
    pub position: Coordinate,
    pub distance_km: f64,
    pub duration_min: f64,
    #[serde(flatten)]
    pub kind: WorkoutKind,
}

impl Workout {
    pub fn running(position: Coordinate, distance_km: f64, duration_min: f64, cadence_spm: f64) -> Self {
        Self::with_kind(
            position,
            distance_km,
            duration_min,
            WorkoutKind::Running {
                cadence_spm,
                pace_min_per_km: duration_min / distance_km,
            },
        )
    }

    pub fn cycling(position: Coordinate, distance_km: f64, duration_min: f64, elevation_gain_m: f64) -> Self {
        Self::with_kind(
            position,
            distance_km,
            duration_min,
            WorkoutKind::Cycling {
                elevation_gain_m,
                speed_km_per_h: distance_km / duration_min,
            },
        )
    }

    fn with_kind(position: Coordinate, distance_km: f64, duration_min: f64, kind: WorkoutKind) -> Self {
        let timestamp = Utc::now();
        Self {
            workout_id: derive_id(timestamp),
            timestamp,
            position,
            distance_km,
            duration_min,
            kind,
        }
    }

    /// Tag used for the popup and list entry CSS classes.
    pub fn type_tag(&self) -> &'static str {
        match self.kind {
            WorkoutKind::Running { .. } => "running",
            WorkoutKind::Cycling { .. } => "cycling",
        }
    }

    pub fn title(&self) -> String {
        let activity = match self.kind {
            WorkoutKind::Running { .. } => "Running",
            WorkoutKind::Cycling { .. } => "Cycling",
        };
        format!("{} on {}", activity, self.timestamp.format("%B %-d"))
    }

    pub fn summary(&self) -> String {
        match &self.kind {
            WorkoutKind::Running {
                cadence_spm,
                pace_min_per_km,
            } => format!("{pace_min_per_km:.1} min/km at {cadence_spm:.0} spm"),
            WorkoutKind::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => format!("{speed_km_per_h:.1} km/h, {elevation_gain_m:.0} m climbed"),
        }
    }
}

// Last 10 digits of the creation time in milliseconds. A stable display key,
// not a uniqueness guarantee under rapid successive submissions.
fn derive_id(timestamp: DateTime<Utc>) -> String {
    let millis = timestamp.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(10);
    millis[start..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_pace_is_duration_over_distance() {
        let workout = Workout::running(Coordinate::new(51.5, -0.12), 5.0, 25.0, 180.0);

        assert_eq!(workout.position, Coordinate::new(51.5, -0.12));
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
    fn cycling_speed_is_distance_over_duration() {
        let workout = Workout::cycling(Coordinate::new(56.17, 10.19), 27.0, 95.0, 523.0);

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
    fn workout_id_is_a_short_numeric_key() {
        let workout = Workout::running(Coordinate::new(0.0, 0.0), 1.0, 1.0, 1.0);

        assert!(workout.workout_id.len() <= 10);
        assert!(!workout.workout_id.is_empty());
        assert!(workout.workout_id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn title_names_the_activity() {
        let running = Workout::running(Coordinate::new(0.0, 0.0), 1.0, 1.0, 1.0);
        let cycling = Workout::cycling(Coordinate::new(0.0, 0.0), 1.0, 1.0, 1.0);

        assert!(running.title().starts_with("Running on "));
        assert!(cycling.title().starts_with("Cycling on "));
    }
}
