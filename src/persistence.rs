//! Saves and restores the whole workout collection under a single store slot.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{StorageError, ValidationError};
use crate::store::KeyValueStore;
use crate::workout::{Activity, Coordinates, Workout, WorkoutId};

pub const WORKOUTS_KEY: &str = "workouts";

/// On-disk shape of one workout. Derived metrics are never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoredWorkout {
    pub id: WorkoutId,
    pub created_at: DateTime<Local>,
    pub coordinates: Coordinates,
    pub distance_km: f64,
    pub duration_min: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence_spm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
}

/// Either the cadence or the elevation gain must be present, never both
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("record has both cadenceSpm and elevationGainM")]
    AmbiguousKind,
    #[error("record has neither cadenceSpm nor elevationGainM")]
    MissingKind,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl TryFrom<StoredWorkout> for Workout {
    type Error = ShapeError;

    fn try_from(s: StoredWorkout) -> Result<Self, Self::Error> {
        let activity = match (s.cadence_spm, s.elevation_gain_m) {
            (Some(cadence_spm), None) => Activity::Running { cadence_spm },
            (None, Some(elevation_gain_m)) => Activity::Cycling { elevation_gain_m },
            (Some(_), Some(_)) => return Err(ShapeError::AmbiguousKind),
            (None, None) => return Err(ShapeError::MissingKind),
        };

        Ok(Workout::restore(
            s.id,
            s.created_at,
            s.coordinates,
            s.distance_km,
            s.duration_min,
            activity,
        )?)
    }
}

impl From<Workout> for StoredWorkout {
    fn from(w: Workout) -> Self {
        let (cadence_spm, elevation_gain_m) = match w.activity() {
            Activity::Running { cadence_spm } => (Some(cadence_spm), None),
            Activity::Cycling { elevation_gain_m } => (None, Some(elevation_gain_m)),
        };

        StoredWorkout {
            id: w.id().clone(),
            created_at: w.created_at(),
            coordinates: w.coordinates(),
            distance_km: w.distance_km(),
            duration_min: w.duration_min(),
            cadence_spm,
            elevation_gain_m,
        }
    }
}

/// Persistence adapter over any key-value store
#[derive(Debug)]
pub struct WorkoutStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> WorkoutStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Overwrite the slot with the full collection in one write
    pub fn save_all(&mut self, workouts: &[Workout]) -> Result<(), StorageError> {
        let data = serde_json::to_string(workouts)?;
        self.store.set(WORKOUTS_KEY, &data)?;
        tracing::debug!(count = workouts.len(), bytes = data.len(), "Workouts saved");
        Ok(())
    }

    /// Never fails: a missing, unreadable or malformed slot yields an empty collection
    pub fn load_all(&self) -> Vec<Workout> {
        let raw = match self.store.get(WORKOUTS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored workouts");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Workout>>(&raw) {
            Ok(workouts) => {
                tracing::info!(count = workouts.len(), "Workouts loaded");
                workouts
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding corrupt workout storage");
                Vec::new()
            }
        }
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(WORKOUTS_KEY)
    }

    pub fn inner(&self) -> &S {
        &self.store
    }
}
