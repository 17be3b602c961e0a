use assert_matches::assert_matches;
use tempfile::TempDir;

use pacemap::error::StorageError;
use pacemap::persistence::{WorkoutStore, WORKOUTS_KEY};
use pacemap::store::{KeyValueStore, SqliteStore};
use pacemap::workout::{Coordinates, Workout};

fn sample() -> Vec<Workout> {
    vec![
        Workout::create_running(Coordinates::new(39.0, -12.0), 5.2, 24.0, 178.0).unwrap(),
        Workout::create_cycling(Coordinates::new(39.1, -12.1), 27.0, 95.0, 523.0).unwrap(),
    ]
}

#[test]
fn workouts_survive_reopening_the_database() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("workouts.db");
    let workouts = sample();

    {
        let mut store = WorkoutStore::new(SqliteStore::open(&path, None).unwrap());
        store.save_all(&workouts).unwrap();
    }

    let store = WorkoutStore::new(SqliteStore::open(&path, None).unwrap());
    assert_eq!(store.load_all(), workouts);
}

#[test]
fn corrupt_slot_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workouts.db");

    {
        let mut raw = SqliteStore::open(&path, None).unwrap();
        raw.set(WORKOUTS_KEY, "{not json").unwrap();
    }
    let store = WorkoutStore::new(SqliteStore::open(&path, None).unwrap());
    assert!(store.load_all().is_empty());

    let mut raw = SqliteStore::open(&path, None).unwrap();
    raw.set(WORKOUTS_KEY, r#"[{"id":"1","distanceKm":5}]"#).unwrap();
    let store = WorkoutStore::new(raw);
    assert!(store.load_all().is_empty());
}

#[test]
fn quota_rejects_save_and_keeps_previous_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workouts.db");
    let workouts = sample();

    let mut store = WorkoutStore::new(SqliteStore::open(&path, Some(400)).unwrap());
    store.save_all(&workouts[..1]).unwrap();

    let many: Vec<Workout> = workouts.iter().cycle().take(10).cloned().collect();
    assert_matches!(
        store.save_all(&many),
        Err(StorageError::QuotaExceeded { quota: 400, .. })
    );
    assert_eq!(store.load_all(), workouts[..1].to_vec());
}

#[test]
fn reset_twice_leaves_empty_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("workouts.db");

    let mut store = WorkoutStore::new(SqliteStore::open(&path, None).unwrap());
    store.save_all(&sample()).unwrap();

    store.clear().unwrap();
    assert!(store.load_all().is_empty());
    store.clear().unwrap();
    assert!(store.load_all().is_empty());
    assert_eq!(store.inner().get(WORKOUTS_KEY).unwrap(), None);
}
