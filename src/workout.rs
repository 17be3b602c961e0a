use chrono::{DateTime, Local};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{Field, ValidationError};
use crate::persistence::StoredWorkout;

/// A latitude/longitude pair, stored as `[lat, lng]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from(v: [f64; 2]) -> Self {
        Coordinates { lat: v[0], lng: v[1] }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Last ten digits of the current epoch millis followed by a random suffix
    pub fn generate() -> Self {
        use rand::Rng;

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let suffix: u16 = rand::thread_rng().gen_range(0..10_000);
        WorkoutId(format!("{:010}{:04}", millis % 10_000_000_000, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkoutId {
    fn from(s: &str) -> Self {
        WorkoutId(s.to_string())
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum_macros::Display)]
pub enum WorkoutKind {
    #[default]
    Running,
    Cycling,
}

impl WorkoutKind {
    pub fn toggle(self) -> Self {
        match self {
            WorkoutKind::Running => WorkoutKind::Cycling,
            WorkoutKind::Cycling => WorkoutKind::Running,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }
}

/// Kind-specific payload of a workout
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    Running { cadence_spm: f64 },
    Cycling { elevation_gain_m: f64 },
}

impl Activity {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Activity::Running { .. } => WorkoutKind::Running,
            Activity::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// Marker popup look, one per workout kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupStyle {
    Running,
    Cycling,
}

impl PopupStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            PopupStyle::Running => "running-popup",
            PopupStyle::Cycling => "cycling-popup",
        }
    }

    pub fn color(self) -> Color {
        match self {
            PopupStyle::Running => Color::Green,
            PopupStyle::Cycling => Color::Rgb(255, 165, 0),
        }
    }
}

impl From<WorkoutKind> for PopupStyle {
    fn from(kind: WorkoutKind) -> Self {
        match kind {
            WorkoutKind::Running => PopupStyle::Running,
            WorkoutKind::Cycling => PopupStyle::Cycling,
        }
    }
}

/// One logged activity. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StoredWorkout", into = "StoredWorkout")]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Local>,
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    activity: Activity,
}

fn check_non_negative(field: Field, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        Err(ValidationError::NotFinite(field))
    } else if value < 0.0 {
        Err(ValidationError::Negative(field))
    } else {
        Ok(())
    }
}

fn check_positive(field: Field, value: f64) -> Result<(), ValidationError> {
    check_non_negative(field, value)?;
    if value == 0.0 {
        return Err(ValidationError::Zero(field));
    }
    Ok(())
}

impl Workout {
    pub fn create_running(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Result<Self, ValidationError> {
        Self::restore(
            WorkoutId::generate(),
            Local::now(),
            coordinates,
            distance_km,
            duration_min,
            Activity::Running { cadence_spm },
        )
    }

    pub fn create_cycling(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self, ValidationError> {
        Self::restore(
            WorkoutId::generate(),
            Local::now(),
            coordinates,
            distance_km,
            duration_min,
            Activity::Cycling { elevation_gain_m },
        )
    }

    /// Build a workout from already-known identity fields, applying every
    /// invariant `create_running`/`create_cycling` apply
    pub fn restore(
        id: WorkoutId,
        created_at: DateTime<Local>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        activity: Activity,
    ) -> Result<Self, ValidationError> {
        if id.as_str().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        if !coordinates.is_valid() {
            return Err(ValidationError::InvalidCoordinates {
                lat: coordinates.lat,
                lng: coordinates.lng,
            });
        }
        check_positive(Field::Distance, distance_km)?;
        check_positive(Field::Duration, duration_min)?;
        match activity {
            Activity::Running { cadence_spm } => check_non_negative(Field::Cadence, cadence_spm)?,
            Activity::Cycling { elevation_gain_m } => {
                check_non_negative(Field::Elevation, elevation_gain_m)?
            }
        }

        Ok(Self {
            id,
            created_at,
            coordinates,
            distance_km,
            duration_min,
            activity,
        })
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn kind(&self) -> WorkoutKind {
        self.activity.kind()
    }

    /// Pace in min/km for running, speed in km/h for cycling
    pub fn derived_metric(&self) -> f64 {
        match self.activity {
            Activity::Running { .. } => self.duration_min / self.distance_km,
            Activity::Cycling { .. } => self.distance_km / (self.duration_min / 60.0),
        }
    }

    pub fn metric_unit(&self) -> &'static str {
        match self.activity {
            Activity::Running { .. } => "min/km",
            Activity::Cycling { .. } => "km/h",
        }
    }

    /// e.g. "Running on April 14"
    pub fn display_label(&self) -> String {
        format!("{} on {}", self.kind(), self.created_at.format("%B %-d"))
    }

    pub fn popup_text(&self) -> String {
        format!("{} {}", self.kind().emoji(), self.display_label())
    }

    pub fn popup_style(&self) -> PopupStyle {
        self.kind().into()
    }
}
