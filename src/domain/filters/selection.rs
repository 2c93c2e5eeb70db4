//! FilterSelection - the user's active constraint along each dimension.

use serde::{Deserialize, Serialize};

use super::{Dimension, GeographyFilter, IntentFilter, ModelFilter, PersonaFilter, TimeRange};

/// One filter per dimension plus the reporting window.
///
/// Owned by the screen and mutated only through the named setters and
/// toggle reducers below; the engine receives it by reference and never
/// changes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub time_range: TimeRange,
    pub model: ModelFilter,
    pub persona: PersonaFilter,
    pub geography: GeographyFilter,
    pub intent: IntentFilter,
}

impl FilterSelection {
    /// The zero state: every dimension unconstrained, default window.
    pub fn zero_state() -> Self {
        Self::default()
    }

    /// True when nothing differs from the zero state.
    pub fn is_zero_state(&self) -> bool {
        self.active_filter_count() == 0
    }

    /// Count of dimensions (time range included) differing from the
    /// zero state. Drives the reset affordance and filter badge.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if !self.model.is_all() {
            count += 1;
        }
        if !self.persona.is_all() {
            count += 1;
        }
        if !self.geography.is_all() {
            count += 1;
        }
        if !self.intent.is_all() {
            count += 1;
        }
        if self.time_range != TimeRange::default() {
            count += 1;
        }
        count
    }

    /// Display labels for the active filters, in canonical dimension
    /// order with the time range last.
    pub fn active_filter_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if !self.model.is_all() {
            labels.push(self.model.display_name().to_string());
        }
        if !self.persona.is_all() {
            labels.push(self.persona.display_name().to_string());
        }
        if !self.geography.is_all() {
            labels.push(self.geography.display_name().to_string());
        }
        if !self.intent.is_all() {
            labels.push(self.intent.display_name().to_string());
        }
        if self.time_range != TimeRange::default() {
            labels.push(self.time_range.display_name().to_string());
        }
        labels
    }

    /// Returns the selection to the zero state.
    pub fn reset(&mut self) {
        *self = Self::zero_state();
    }

    pub fn set_time_range(&mut self, range: TimeRange) {
        self.time_range = range;
    }

    pub fn set_model(&mut self, model: ModelFilter) {
        self.model = model;
    }

    pub fn set_persona(&mut self, persona: PersonaFilter) {
        self.persona = persona;
    }

    pub fn set_geography(&mut self, geography: GeographyFilter) {
        self.geography = geography;
    }

    pub fn set_intent(&mut self, intent: IntentFilter) {
        self.intent = intent;
    }

    /// Legend-click reducer for the model chart: clicking the selected
    /// series clears the dimension back to `All`, clicking another
    /// series selects it.
    pub fn toggle_model(&mut self, model: ModelFilter) {
        self.model = if self.model == model {
            ModelFilter::All
        } else {
            model
        };
    }

    /// Legend-click reducer for the persona chart.
    pub fn toggle_persona(&mut self, persona: PersonaFilter) {
        self.persona = if self.persona == persona {
            PersonaFilter::All
        } else {
            persona
        };
    }

    /// The selected wire id for a dimension, `None` when unconstrained.
    pub fn selected_id(&self, dimension: Dimension) -> Option<&'static str> {
        match dimension {
            Dimension::Model => (!self.model.is_all()).then(|| self.model.id()),
            Dimension::Persona => (!self.persona.is_all()).then(|| self.persona.id()),
            Dimension::Geography => (!self.geography.is_all()).then(|| self.geography.id()),
            Dimension::Intent => (!self.intent.is_all()).then(|| self.intent.id()),
        }
    }
}
