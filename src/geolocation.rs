use std::sync::mpsc::Sender;
use std::thread;

use crate::error::GeolocationError;
use crate::runtime::AppEvent;
use crate::workout::Coordinates;

/// Resolves the user's current position
pub trait Locator: Send + 'static {
    fn locate(&self) -> Result<Coordinates, GeolocationError>;
}

/// Position supplied up front, from the command line or the config file
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredLocator {
    position: Option<Coordinates>,
}

impl ConfiguredLocator {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self { position }
    }
}

impl Locator for ConfiguredLocator {
    fn locate(&self) -> Result<Coordinates, GeolocationError> {
        match self.position {
            Some(c) if c.is_valid() => Ok(c),
            Some(c) => Err(GeolocationError::InvalidPosition(c.to_string())),
            None => Err(GeolocationError::Unavailable),
        }
    }
}

/// Resolve once on a background thread and deliver the outcome as an event.
/// There is no retry; the receiver decides what a failure means.
pub fn spawn_locate<L: Locator>(locator: L, tx: Sender<AppEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let outcome = locator.locate();
        match &outcome {
            Ok(c) => tracing::info!(lat = c.lat, lng = c.lng, "Position resolved"),
            Err(e) => tracing::warn!(error = %e, "Position unavailable"),
        }
        // The loop may already be gone on shutdown
        let _ = tx.send(AppEvent::Located(outcome));
    })
}

/// Parse "LAT,LNG"
pub fn parse_position(s: &str) -> Result<Coordinates, GeolocationError> {
    let invalid = || GeolocationError::InvalidPosition(s.to_string());
    let (lat, lng) = s.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;
    let c = Coordinates::new(lat, lng);
    if c.is_valid() {
        Ok(c)
    } else {
        Err(invalid())
    }
}
