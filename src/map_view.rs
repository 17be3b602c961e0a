//! Viewport and markers for the terminal world map.
//!
//! The map is drawn on a ratatui canvas where x is longitude and y is
//! latitude. Zoom levels follow slippy-map convention: at zoom `z` the
//! viewport spans `360 / 2^z` degrees of longitude. Terminal cells are
//! roughly twice as tall as wide, which the latitude span accounts for.

use ratatui::layout::Rect;

use crate::workout::{Coordinates, PopupStyle};

pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 18;
/// Ticks an animated recenter takes to reach its target
pub const PAN_STEPS: u8 = 6;
const CELL_ASPECT: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coordinates: Coordinates,
    pub popup_text: String,
    pub popup_style: PopupStyle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pan {
    from: Coordinates,
    to: Coordinates,
    step: u8,
}

/// Visible bounds in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub lng: [f64; 2],
    pub lat: [f64; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    center: Coordinates,
    zoom: u8,
    markers: Vec<Marker>,
    pan: Option<Pan>,
}

impl MapView {
    pub fn initialize(center: Coordinates, zoom: u8) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            markers: Vec::new(),
            pan: None,
        }
    }

    pub fn center(&self) -> Coordinates {
        self.center
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn is_animating(&self) -> bool {
        self.pan.is_some()
    }

    /// Adds one marker; existing markers are never touched
    pub fn place_marker(
        &mut self,
        coordinates: Coordinates,
        popup_text: impl Into<String>,
        popup_style: PopupStyle,
    ) {
        self.markers.push(Marker {
            coordinates,
            popup_text: popup_text.into(),
            popup_style,
        });
    }

    /// Only used when the whole collection is reset
    pub fn clear_markers(&mut self) {
        self.markers.clear();
    }

    pub fn recenter(&mut self, coordinates: Coordinates, zoom: u8, animated: bool) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        let target = clamp_coordinates(coordinates);
        if animated && target != self.center {
            self.pan = Some(Pan {
                from: self.center,
                to: target,
                step: 0,
            });
        } else {
            self.pan = None;
            self.center = target;
        }
    }

    /// Advance a running pan animation. Returns true if the view moved.
    pub fn on_tick(&mut self) -> bool {
        let Some(mut pan) = self.pan else {
            return false;
        };

        pan.step += 1;
        if pan.step >= PAN_STEPS {
            self.center = pan.to;
            self.pan = None;
        } else {
            let t = ease_in_out(pan.step as f64 / PAN_STEPS as f64);
            self.center = Coordinates::new(
                pan.from.lat + (pan.to.lat - pan.from.lat) * t,
                pan.from.lng + (pan.to.lng - pan.from.lng) * t,
            );
            self.pan = Some(pan);
        }
        true
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(1).max(MIN_ZOOM);
    }

    /// Move by a fraction of the current viewport span
    pub fn pan_by(&mut self, area: Rect, dx: f64, dy: f64) {
        let bounds = self.bounds(area);
        let target = Coordinates::new(
            self.center.lat + (bounds.lat[1] - bounds.lat[0]) * dy,
            self.center.lng + (bounds.lng[1] - bounds.lng[0]) * dx,
        );
        self.pan = None;
        self.center = clamp_coordinates(target);
    }

    pub fn lng_span(&self) -> f64 {
        360.0 / 2f64.powi(self.zoom as i32)
    }

    pub fn bounds(&self, area: Rect) -> Bounds {
        let lng_span = self.lng_span();
        let lat_span = if area.width == 0 {
            lng_span
        } else {
            lng_span * (area.height as f64 * CELL_ASPECT) / area.width as f64
        };

        Bounds {
            lng: [self.center.lng - lng_span / 2.0, self.center.lng + lng_span / 2.0],
            lat: [self.center.lat - lat_span / 2.0, self.center.lat + lat_span / 2.0],
        }
    }

    /// Map a terminal cell inside `area` (the canvas without borders) to coordinates
    pub fn coordinates_at(&self, area: Rect, column: u16, row: u16) -> Option<Coordinates> {
        if area.width == 0
            || area.height == 0
            || column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }

        let bounds = self.bounds(area);
        let fx = (column - area.x) as f64 + 0.5;
        let fy = (row - area.y) as f64 + 0.5;
        let lng = bounds.lng[0] + fx * (bounds.lng[1] - bounds.lng[0]) / area.width as f64;
        let lat = bounds.lat[1] - fy * (bounds.lat[1] - bounds.lat[0]) / area.height as f64;

        Some(clamp_coordinates(Coordinates::new(lat, lng)))
    }
}

fn ease_in_out(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Latitude is clamped to the poles; longitude wraps around the antimeridian
pub fn clamp_coordinates(c: Coordinates) -> Coordinates {
    let mut lng = (c.lng + 180.0).rem_euclid(360.0) - 180.0;
    if lng == -180.0 && c.lng > 0.0 {
        lng = 180.0;
    }
    Coordinates::new(c.lat.clamp(-90.0, 90.0), lng)
}

/// OpenStreetMap link for a point at the given zoom
pub fn osm_url(coordinates: Coordinates, zoom: u8) -> String {
    format!(
        "https://www.openstreetmap.org/?mlat={lat:.5}&mlon={lng:.5}#map={zoom}/{lat:.5}/{lng:.5}",
        lat = coordinates.lat,
        lng = coordinates.lng,
        zoom = zoom
    )
}
