use crate::error::{Field, ValidationError};
use crate::workout::{Coordinates, Workout, WorkoutKind};

/// Form rows in display order. `Extra` is cadence for running, elevation gain for cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    Kind,
    #[default]
    Distance,
    Duration,
    Extra,
}

impl FormField {
    const ORDER: [FormField; 4] = [
        FormField::Kind,
        FormField::Distance,
        FormField::Duration,
        FormField::Extra,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Text the user has typed so far. Cadence and elevation keep their own
/// buffers so toggling the kind does not lose input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutForm {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
    pub focus: FormField,
}

/// Coerced form values for the selected kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormInput {
    pub kind: WorkoutKind,
    pub distance_km: f64,
    pub duration_min: f64,
    pub extra: f64,
}

impl FormInput {
    pub fn into_workout(self, coordinates: Coordinates) -> Result<Workout, ValidationError> {
        match self.kind {
            WorkoutKind::Running => Workout::create_running(
                coordinates,
                self.distance_km,
                self.duration_min,
                self.extra,
            ),
            WorkoutKind::Cycling => Workout::create_cycling(
                coordinates,
                self.distance_km,
                self.duration_min,
                self.extra,
            ),
        }
    }
}

fn coerce(field: Field, text: &str) -> Result<f64, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::NotANumber(field));
    }
    text.parse::<f64>().map_err(|_| ValidationError::NotANumber(field))
}

impl WorkoutForm {
    pub fn extra_field(&self) -> Field {
        match self.kind {
            WorkoutKind::Running => Field::Cadence,
            WorkoutKind::Cycling => Field::Elevation,
        }
    }

    pub fn extra_label(&self) -> &'static str {
        match self.kind {
            WorkoutKind::Running => "Cadence",
            WorkoutKind::Cycling => "Elev Gain",
        }
    }

    pub fn extra_placeholder(&self) -> &'static str {
        match self.kind {
            WorkoutKind::Running => "step/min",
            WorkoutKind::Cycling => "meters",
        }
    }

    pub fn extra(&self) -> &str {
        match self.kind {
            WorkoutKind::Running => &self.cadence,
            WorkoutKind::Cycling => &self.elevation,
        }
    }

    /// Swap the cadence and elevation rows
    pub fn toggle_kind(&mut self) {
        self.kind = self.kind.toggle();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Kind => None,
            FormField::Distance => Some(&mut self.distance),
            FormField::Duration => Some(&mut self.duration),
            FormField::Extra => match self.kind {
                WorkoutKind::Running => Some(&mut self.cadence),
                WorkoutKind::Cycling => Some(&mut self.elevation),
            },
        }
    }

    /// Typing on the kind row toggles it with space; elsewhere the char is appended
    pub fn input_char(&mut self, c: char) {
        match self.focused_text_mut() {
            Some(text) => {
                if !c.is_control() {
                    text.push(c);
                }
            }
            None => {
                if c == ' ' {
                    self.toggle_kind();
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    /// Coerce the visible fields to numbers
    pub fn read(&self) -> Result<FormInput, ValidationError> {
        Ok(FormInput {
            kind: self.kind,
            distance_km: coerce(Field::Distance, &self.distance)?,
            duration_min: coerce(Field::Duration, &self.duration)?,
            extra: coerce(self.extra_field(), self.extra())?,
        })
    }

    /// Empty every input; the selected kind is kept like a browser select would
    pub fn clear(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation.clear();
        self.focus = FormField::Distance;
    }
}
