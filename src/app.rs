//! Application controller: owns the workout collection and drives the
//! location → map → form → record → list → storage flow.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use webbrowser::Browser;

use crate::config::Config;
use crate::error::{GeolocationError, StorageError, SubmitError};
use crate::form::WorkoutForm;
use crate::map_view::{osm_url, MapView};
use crate::persistence::WorkoutStore;
use crate::store::KeyValueStore;
use crate::ui::{list::ITEM_HEIGHT, ScreenLayout};
use crate::workout::{Coordinates, Workout, WorkoutId};

/// Fraction of the viewport moved by one pan key press
const PAN_FRACTION: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// No map yet; waiting for (or failed to get) a position
    AwaitingLocation,
    FormHidden,
    FormShown,
}

/// A blocking message; any key dismisses it
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub initial_zoom: u8,
    pub focus_zoom: u8,
    pub animate_pan: bool,
}

impl Default for Settings {
    fn default() -> Self {
        (&Config::default()).into()
    }
}

impl From<&Config> for Settings {
    fn from(cfg: &Config) -> Self {
        Self {
            initial_zoom: cfg.initial_zoom,
            focus_zoom: cfg.focus_zoom,
            animate_pan: cfg.animate_pan,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListState {
    pub selected: Option<usize>,
    pub scroll_offset: usize,
}

#[derive(Debug)]
pub struct App<S: KeyValueStore> {
    pub state: AppState,
    pub workouts: Vec<Workout>,
    pub map: Option<MapView>,
    /// Where the open form's workout will be recorded
    pub pending: Option<Coordinates>,
    pub form: WorkoutForm,
    pub list: ListState,
    pub alert: Option<Alert>,
    /// Why the map could not be shown, kept for the placeholder screen
    pub location_error: Option<GeolocationError>,
    pub settings: Settings,
    pub should_quit: bool,
    store: WorkoutStore<S>,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(store: WorkoutStore<S>, settings: Settings) -> Self {
        let workouts = store.load_all();
        Self {
            state: AppState::AwaitingLocation,
            workouts,
            map: None,
            pending: None,
            form: WorkoutForm::default(),
            list: ListState::default(),
            alert: None,
            location_error: None,
            settings,
            should_quit: false,
            store,
        }
    }

    pub fn store(&self) -> &WorkoutStore<S> {
        &self.store
    }

    fn warn(&mut self, title: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(title, message = %message, "Alert raised");
        self.alert = Some(Alert {
            title: title.to_string(),
            message,
        });
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Position lookup finished. Only the first success initializes the map.
    pub fn on_located(&mut self, outcome: Result<Coordinates, GeolocationError>) {
        if self.state != AppState::AwaitingLocation {
            return;
        }

        match outcome {
            Ok(center) => {
                let mut map = MapView::initialize(center, self.settings.initial_zoom);
                for w in &self.workouts {
                    map.place_marker(w.coordinates(), w.popup_text(), w.popup_style());
                }
                tracing::info!(
                    lat = center.lat,
                    lng = center.lng,
                    markers = self.workouts.len(),
                    "Map ready"
                );
                self.map = Some(map);
                self.location_error = None;
                self.state = AppState::FormHidden;
            }
            Err(e) => {
                self.warn(
                    "Warning",
                    format!("Can not get your current position: {e}"),
                );
                self.location_error = Some(e);
            }
        }
    }

    /// Open the form for a workout at `coordinates`. A second click while the
    /// form is open moves the pending location.
    pub fn on_map_click(&mut self, coordinates: Coordinates) -> bool {
        match self.state {
            AppState::AwaitingLocation => false,
            AppState::FormHidden | AppState::FormShown => {
                if self.state == AppState::FormHidden {
                    self.form.focus = Default::default();
                }
                self.pending = Some(coordinates);
                self.state = AppState::FormShown;
                true
            }
        }
    }

    pub fn cancel_form(&mut self) {
        if self.state == AppState::FormShown {
            self.form.clear();
            self.pending = None;
            self.state = AppState::FormHidden;
        }
    }

    /// Validate the form and record a workout. On a validation error the form
    /// stays open with its contents and nothing else changes.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        let (AppState::FormShown, Some(coordinates)) = (self.state, self.pending) else {
            return Err(SubmitError::FormClosed);
        };

        let workout = match self
            .form
            .read()
            .and_then(|input| input.into_workout(coordinates))
        {
            Ok(w) => w,
            Err(e) => {
                self.warn("Invalid input", e.to_string());
                return Err(e.into());
            }
        };

        if let Some(map) = self.map.as_mut() {
            map.place_marker(
                workout.coordinates(),
                workout.popup_text(),
                workout.popup_style(),
            );
        }
        tracing::info!(
            id = %workout.id(),
            kind = %workout.kind(),
            distance_km = workout.distance_km(),
            duration_min = workout.duration_min(),
            "Workout recorded"
        );
        self.workouts.push(workout);

        if let Err(e) = self.store.save_all(&self.workouts) {
            tracing::error!(error = %e, "Failed to save workouts");
            self.warn("Warning", format!("Workouts could not be saved: {e}"));
        }

        self.form.clear();
        self.pending = None;
        self.state = AppState::FormHidden;
        Ok(())
    }

    /// Pan the map to a listed workout. Unknown ids are ignored.
    pub fn move_to_workout(&mut self, id: &WorkoutId) -> bool {
        let Some(workout) = self.workouts.iter().find(|w| w.id() == id) else {
            return false;
        };
        let Some(map) = self.map.as_mut() else {
            return false;
        };
        map.recenter(
            workout.coordinates(),
            self.settings.focus_zoom,
            self.settings.animate_pan,
        );
        true
    }

    pub fn selected_workout(&self) -> Option<&Workout> {
        self.list.selected.and_then(|i| self.workouts.get(i))
    }

    pub fn select_next(&mut self) {
        if self.workouts.is_empty() {
            return;
        }
        let last = self.workouts.len() - 1;
        self.list.selected = Some(match self.list.selected {
            Some(i) => (i + 1).min(last),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.workouts.is_empty() {
            return;
        }
        self.list.selected = Some(match self.list.selected {
            Some(i) => i.saturating_sub(1),
            None => self.workouts.len() - 1,
        });
    }

    pub fn move_to_selected(&mut self) -> bool {
        match self.selected_workout().map(|w| w.id().clone()) {
            Some(id) => self.move_to_workout(&id),
            None => false,
        }
    }

    /// Erase every stored workout and start over with an empty collection
    pub fn reset(&mut self) -> Result<(), StorageError> {
        if let Err(e) = self.store.clear() {
            tracing::error!(error = %e, "Failed to clear stored workouts");
            self.warn("Warning", format!("Workouts could not be cleared: {e}"));
            return Err(e);
        }

        self.workouts = self.store.load_all();
        if let Some(map) = self.map.as_mut() {
            map.clear_markers();
        }
        self.form = WorkoutForm::default();
        self.pending = None;
        self.list = ListState::default();
        self.alert = None;
        if self.state == AppState::FormShown {
            self.state = AppState::FormHidden;
        }
        tracing::info!("Workouts reset");
        Ok(())
    }

    /// Returns true when something on screen changed
    pub fn on_tick(&mut self) -> bool {
        self.map.as_mut().map(|m| m.on_tick()).unwrap_or(false)
    }

    fn open_selected_in_browser(&mut self) {
        let Some(workout) = self.selected_workout() else {
            return;
        };
        let url = osm_url(workout.coordinates(), self.settings.focus_zoom);
        if Browser::is_available() {
            if let Err(e) = webbrowser::open(&url) {
                tracing::warn!(error = %e, url = %url, "Failed to open browser");
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, layout: &ScreenLayout) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            self.dismiss_alert();
            return;
        }

        match self.state {
            AppState::AwaitingLocation => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('R') => {
                    let _ = self.reset();
                }
                _ => {}
            },
            AppState::FormShown => match key.code {
                KeyCode::Esc => self.cancel_form(),
                KeyCode::Enter => {
                    let _ = self.submit();
                }
                KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
                KeyCode::Left | KeyCode::Right
                    if self.form.focus == crate::form::FormField::Kind =>
                {
                    self.form.toggle_kind()
                }
                KeyCode::Backspace => self.form.backspace(),
                KeyCode::Char(c) => self.form.input_char(c),
                _ => {}
            },
            AppState::FormHidden => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Down => self.select_next(),
                KeyCode::Up => self.select_prev(),
                KeyCode::Enter => {
                    self.move_to_selected();
                }
                KeyCode::Char('n') => {
                    if let Some(center) = self.map.as_ref().map(|m| m.center()) {
                        self.on_map_click(center);
                    }
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    if let Some(map) = self.map.as_mut() {
                        map.zoom_in();
                    }
                }
                KeyCode::Char('-') => {
                    if let Some(map) = self.map.as_mut() {
                        map.zoom_out();
                    }
                }
                KeyCode::Char(c @ ('h' | 'j' | 'k' | 'l')) => {
                    let (dx, dy) = match c {
                        'h' => (-PAN_FRACTION, 0.0),
                        'l' => (PAN_FRACTION, 0.0),
                        'k' => (0.0, PAN_FRACTION),
                        _ => (0.0, -PAN_FRACTION),
                    };
                    if let Some(map) = self.map.as_mut() {
                        map.pan_by(layout.map, dx, dy);
                    }
                }
                KeyCode::Char('o') => self.open_selected_in_browser(),
                KeyCode::Char('R') => {
                    let _ = self.reset();
                }
                _ => {}
            },
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, layout: &ScreenLayout) {
        if self.alert.is_some() {
            if let MouseEventKind::Down(_) = mouse.kind {
                self.dismiss_alert();
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = list_index_at(layout, &self.list, mouse.column, mouse.row) {
                    if let Some(id) = self.workouts.get(index).map(|w| w.id().clone()) {
                        self.list.selected = Some(index);
                        self.move_to_workout(&id);
                    }
                    return;
                }
                let clicked = self
                    .map
                    .as_ref()
                    .and_then(|m| m.coordinates_at(layout.map, mouse.column, mouse.row));
                if let Some(coordinates) = clicked {
                    self.on_map_click(coordinates);
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
                if rect_contains(layout.map, mouse.column, mouse.row) =>
            {
                if let Some(map) = self.map.as_mut() {
                    if mouse.kind == MouseEventKind::ScrollUp {
                        map.zoom_in();
                    } else {
                        map.zoom_out();
                    }
                }
            }
            _ => {}
        }
    }
}

fn rect_contains(r: ratatui::layout::Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
}

/// Which list entry, if any, sits under a terminal cell
pub fn list_index_at(
    layout: &ScreenLayout,
    list: &ListState,
    column: u16,
    row: u16,
) -> Option<usize> {
    if !rect_contains(layout.list, column, row) {
        return None;
    }
    Some(((row - layout.list.y) / ITEM_HEIGHT) as usize + list.scroll_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Field, ValidationError};
    use crate::persistence::WORKOUTS_KEY;
    use crate::store::MemoryStore;
    use crate::ui::screen_layout;
    use assert_matches::assert_matches;
    use ratatui::layout::Rect;

    fn here() -> Coordinates {
        Coordinates::new(39.0, -12.0)
    }

    fn ready_app() -> App<MemoryStore> {
        let mut app = App::new(WorkoutStore::new(MemoryStore::new()), Settings::default());
        app.on_located(Ok(here()));
        app
    }

    fn fill(app: &mut App<MemoryStore>, distance: &str, duration: &str, extra: &str) {
        app.form.distance = distance.into();
        app.form.duration = duration.into();
        match app.form.kind {
            crate::workout::WorkoutKind::Running => app.form.cadence = extra.into(),
            crate::workout::WorkoutKind::Cycling => app.form.elevation = extra.into(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn layout(app: &App<MemoryStore>) -> ScreenLayout {
        screen_layout(Rect::new(0, 0, 120, 40), app.state == AppState::FormShown)
    }

    #[test]
    fn starts_awaiting_location() {
        let app = App::new(WorkoutStore::new(MemoryStore::new()), Settings::default());
        assert_eq!(app.state, AppState::AwaitingLocation);
        assert!(app.map.is_none());
        assert!(app.workouts.is_empty());
    }

    #[test]
    fn failed_location_warns_and_stays() {
        let mut app = App::new(WorkoutStore::new(MemoryStore::new()), Settings::default());
        app.on_located(Err(GeolocationError::Unavailable));
        assert_eq!(app.state, AppState::AwaitingLocation);
        assert!(app.map.is_none());
        let alert = app.alert.clone().unwrap();
        assert!(alert.message.starts_with("Can not get your current position"));
        assert_eq!(app.location_error, Some(GeolocationError::Unavailable));
        assert!(!app.on_map_click(here()));
    }

    #[test]
    fn located_initializes_map_with_stored_markers() {
        let mut store = WorkoutStore::new(MemoryStore::new());
        let saved = vec![Workout::create_running(here(), 5.2, 24.0, 178.0).unwrap()];
        store.save_all(&saved).unwrap();

        let mut app = App::new(store, Settings::default());
        assert_eq!(app.workouts, saved);
        app.on_located(Ok(Coordinates::new(10.0, 10.0)));

        assert_eq!(app.state, AppState::FormHidden);
        let map = app.map.as_ref().unwrap();
        assert_eq!(map.center(), Coordinates::new(10.0, 10.0));
        assert_eq!(map.zoom(), Settings::default().initial_zoom);
        assert_eq!(map.markers().len(), 1);
        assert_eq!(map.markers()[0].popup_text, saved[0].popup_text());
    }

    #[test]
    fn map_click_opens_form_with_pending_coordinates() {
        let mut app = ready_app();
        assert!(app.on_map_click(Coordinates::new(1.0, 2.0)));
        assert_eq!(app.state, AppState::FormShown);
        assert_eq!(app.pending, Some(Coordinates::new(1.0, 2.0)));

        app.on_map_click(Coordinates::new(3.0, 4.0));
        assert_eq!(app.pending, Some(Coordinates::new(3.0, 4.0)));
    }

    #[test]
    fn submit_running_records_renders_and_saves() {
        let mut app = ready_app();
        app.on_map_click(here());
        fill(&mut app, "5.2", "24", "178");

        app.submit().unwrap();

        assert_eq!(app.state, AppState::FormHidden);
        assert_eq!(app.pending, None);
        assert_eq!(app.workouts.len(), 1);
        let w = &app.workouts[0];
        assert_eq!(w.kind(), crate::workout::WorkoutKind::Running);
        assert!((w.derived_metric() - 24.0 / 5.2).abs() < 1e-12);
        assert_eq!(w.coordinates(), here());

        let map = app.map.as_ref().unwrap();
        assert_eq!(map.markers().len(), 1);
        assert_eq!(map.markers()[0].popup_style.class_name(), "running-popup");

        assert_eq!(app.store().load_all(), app.workouts);
        assert!(app.form.distance.is_empty());
        assert!(app.form.cadence.is_empty());
    }

    #[test]
    fn submit_cycling_uses_speed() {
        let mut app = ready_app();
        app.on_map_click(here());
        app.form.toggle_kind();
        fill(&mut app, "27", "95", "523");
        app.submit().unwrap();

        let w = &app.workouts[0];
        assert_eq!(w.kind(), crate::workout::WorkoutKind::Cycling);
        assert!((w.derived_metric() - 17.05).abs() < 1e-2);
    }

    #[test]
    fn invalid_submit_keeps_form_open_and_collection_unchanged() {
        let mut app = ready_app();
        app.on_map_click(here());
        fill(&mut app, "-1", "24", "178");

        assert_matches!(
            app.submit(),
            Err(SubmitError::Validation(ValidationError::Negative(Field::Distance)))
        );
        assert_eq!(app.state, AppState::FormShown);
        assert_eq!(app.pending, Some(here()));
        assert!(app.workouts.is_empty());
        assert_eq!(app.form.distance, "-1");
        assert!(app.alert.is_some());
        assert!(app.map.as_ref().unwrap().markers().is_empty());
        assert_eq!(app.store().inner().get(WORKOUTS_KEY).unwrap(), None);
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut app = ready_app();
        app.on_map_click(here());
        fill(&mut app, "5", "0", "170");
        assert_matches!(
            app.submit(),
            Err(SubmitError::Validation(ValidationError::Zero(Field::Duration)))
        );
        assert!(app.workouts.is_empty());
    }

    #[test]
    fn submit_without_open_form_is_rejected() {
        let mut app = ready_app();
        assert_matches!(app.submit(), Err(SubmitError::FormClosed));
    }

    #[test]
    fn cancel_hides_and_clears() {
        let mut app = ready_app();
        app.on_map_click(here());
        fill(&mut app, "5", "", "");
        app.cancel_form();
        assert_eq!(app.state, AppState::FormHidden);
        assert_eq!(app.pending, None);
        assert!(app.form.distance.is_empty());
    }

    #[test]
    fn quota_failure_is_surfaced_but_record_kept() {
        let mut app = App::new(
            WorkoutStore::new(MemoryStore::with_quota(16)),
            Settings::default(),
        );
        app.on_located(Ok(here()));
        app.on_map_click(here());
        fill(&mut app, "5.2", "24", "178");

        app.submit().unwrap();

        assert_eq!(app.workouts.len(), 1);
        assert_eq!(app.state, AppState::FormHidden);
        let alert = app.alert.clone().unwrap();
        assert!(alert.message.contains("could not be saved"));
        assert!(app.store().load_all().is_empty());
    }

    #[test]
    fn move_to_workout_recenters_and_ignores_unknown_ids() {
        let mut app = ready_app();
        app.settings.animate_pan = false;
        app.on_map_click(Coordinates::new(48.85, 2.35));
        fill(&mut app, "10", "50", "170");
        app.submit().unwrap();
        let id = app.workouts[0].id().clone();

        assert!(app.move_to_workout(&id));
        let map = app.map.as_ref().unwrap();
        assert_eq!(map.center(), Coordinates::new(48.85, 2.35));
        assert_eq!(map.zoom(), app.settings.focus_zoom);

        assert!(!app.move_to_workout(&WorkoutId::from("missing")));
    }

    #[test]
    fn reset_twice_is_empty_and_harmless() {
        let mut app = ready_app();
        app.on_map_click(here());
        fill(&mut app, "5.2", "24", "178");
        app.submit().unwrap();

        app.reset().unwrap();
        assert!(app.workouts.is_empty());
        assert!(app.store().load_all().is_empty());
        assert!(app.map.as_ref().unwrap().markers().is_empty());

        app.reset().unwrap();
        assert!(app.workouts.is_empty());
        assert_eq!(app.state, AppState::FormHidden);
    }

    #[test]
    fn list_selection_wraps_within_bounds() {
        let mut app = ready_app();
        app.select_next();
        assert_eq!(app.list.selected, None);

        for _ in 0..2 {
            app.on_map_click(here());
            fill(&mut app, "5", "25", "170");
            app.submit().unwrap();
        }
        app.select_next();
        assert_eq!(app.list.selected, Some(0));
        app.select_next();
        app.select_next();
        assert_eq!(app.list.selected, Some(1));
        app.select_prev();
        app.select_prev();
        assert_eq!(app.list.selected, Some(0));
    }

    #[test]
    fn keys_drive_form_flow() {
        let mut app = ready_app();
        let l = layout(&app);
        app.handle_key(key(KeyCode::Char('n')), &l);
        assert_eq!(app.state, AppState::FormShown);
        assert_eq!(app.pending, Some(here()));

        let l = layout(&app);
        for c in "5.2".chars() {
            app.handle_key(key(KeyCode::Char(c)), &l);
        }
        app.handle_key(key(KeyCode::Tab), &l);
        for c in "24".chars() {
            app.handle_key(key(KeyCode::Char(c)), &l);
        }
        app.handle_key(key(KeyCode::Tab), &l);
        for c in "178".chars() {
            app.handle_key(key(KeyCode::Char(c)), &l);
        }
        app.handle_key(key(KeyCode::Enter), &l);

        assert_eq!(app.state, AppState::FormHidden);
        assert_eq!(app.workouts.len(), 1);
    }

    #[test]
    fn any_key_dismisses_alert_first() {
        let mut app = ready_app();
        app.on_map_click(here());
        let l = layout(&app);
        app.handle_key(key(KeyCode::Enter), &l);
        assert!(app.alert.is_some());
        assert_eq!(app.state, AppState::FormShown);

        app.handle_key(key(KeyCode::Esc), &l);
        assert!(app.alert.is_none());
        assert_eq!(app.state, AppState::FormShown);

        app.handle_key(key(KeyCode::Esc), &l);
        assert_eq!(app.state, AppState::FormHidden);
    }

    #[test]
    fn quit_keys() {
        let mut app = ready_app();
        let l = layout(&app);
        app.handle_key(key(KeyCode::Char('q')), &l);
        assert!(app.should_quit);

        let mut app = ready_app();
        app.on_map_click(here());
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &l,
        );
        assert!(app.should_quit);
    }

    #[test]
    fn mouse_click_on_map_opens_form() {
        let mut app = ready_app();
        let l = layout(&app);
        let column = l.map.x + l.map.width / 2;
        let row = l.map.y + l.map.height / 2;
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            },
            &l,
        );
        assert_eq!(app.state, AppState::FormShown);
        let pending = app.pending.unwrap();
        assert!((pending.lat - 39.0).abs() < 1.0);
        assert!((pending.lng - -12.0).abs() < 1.0);
    }

    #[test]
    fn mouse_click_on_list_entry_moves_map() {
        let mut app = ready_app();
        app.settings.animate_pan = false;
        for at in [Coordinates::new(10.0, 10.0), Coordinates::new(20.0, 20.0)] {
            app.on_map_click(at);
            fill(&mut app, "5", "25", "170");
            app.submit().unwrap();
        }

        let l = layout(&app);
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: l.list.x + 1,
                row: l.list.y + ITEM_HEIGHT,
                modifiers: KeyModifiers::NONE,
            },
            &l,
        );
        assert_eq!(app.list.selected, Some(1));
        assert_eq!(app.map.as_ref().unwrap().center(), Coordinates::new(20.0, 20.0));
        assert_eq!(app.state, AppState::FormHidden);
    }

    #[test]
    fn tick_advances_animated_pan() {
        let mut app = ready_app();
        app.on_map_click(Coordinates::new(20.0, 20.0));
        fill(&mut app, "5", "25", "170");
        app.submit().unwrap();
        app.select_next();
        assert!(app.move_to_selected());
        assert!(app.on_tick());
        while app.on_tick() {}
        assert_eq!(app.map.as_ref().unwrap().center(), Coordinates::new(20.0, 20.0));
    }
}
