//! Feature input panel: one bounded integer stepper per feature.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::{FeatureSpec, ModelError, PatientRecord, FEATURES};
use crate::tui::styles::ClinicalTheme;

/// Number of side-by-side columns in the form.
pub const FORM_COLUMNS: usize = 2;

/// A single stepper control.
#[derive(Debug, Clone)]
pub struct StepperField {
    pub spec: &'static FeatureSpec,
    pub value: i64,
}

impl StepperField {
    fn new(spec: &'static FeatureSpec) -> Self {
        Self {
            spec,
            value: spec.min,
        }
    }

    /// Set a value, clamped to the field bounds. Returns whether it changed.
    fn set(&mut self, value: i64) -> bool {
        let clamped = self.spec.clamp(value);
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }
}

/// Feature form state
pub struct FeatureFormState {
    pub fields: Vec<StepperField>,
    pub selected_field: usize,
}

impl Default for FeatureFormState {
    fn default() -> Self {
        Self {
            fields: FEATURES.iter().map(StepperField::new).collect(),
            selected_field: 0,
        }
    }
}

impl FeatureFormState {
    /// Move to the next field in feature order
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field in feature order
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Step the selected field up by one. Returns whether the value changed.
    pub fn increment(&mut self) -> bool {
        let field = &mut self.fields[self.selected_field];
        field.set(field.value.saturating_add(1))
    }

    /// Step the selected field down by one. Returns whether the value changed.
    pub fn decrement(&mut self) -> bool {
        let field = &mut self.fields[self.selected_field];
        field.set(field.value.saturating_sub(1))
    }

    pub fn set_min(&mut self) -> bool {
        let field = &mut self.fields[self.selected_field];
        field.set(field.spec.min)
    }

    pub fn set_max(&mut self) -> bool {
        let field = &mut self.fields[self.selected_field];
        field.set(field.spec.max)
    }

    /// Type a digit into the selected field; the value is clamped.
    pub fn input_char(&mut self, c: char) -> bool {
        match c.to_digit(10) {
            Some(d) => self.fields[self.selected_field].set(i64::from(d)),
            None => false,
        }
    }

    /// Return every field to its minimum.
    pub fn reset(&mut self) -> bool {
        let mut changed = false;
        for field in self.fields.iter_mut() {
            changed |= field.set(field.spec.min);
        }
        changed
    }

    /// Assemble the record in feature order.
    ///
    /// # Errors
    /// Returns an error if the form does not hold one in-range value per
    /// feature.
    pub fn to_record(&self) -> Result<PatientRecord, ModelError> {
        let values: Vec<i64> = self.fields.iter().map(|f| f.value).collect();
        PatientRecord::from_values(&values)
    }

    /// Field indices for each column: even indices left, odd right.
    #[must_use]
    pub fn columns(&self) -> [Vec<usize>; FORM_COLUMNS] {
        let mut columns: [Vec<usize>; FORM_COLUMNS] = Default::default();
        for i in 0..self.fields.len() {
            columns[i % FORM_COLUMNS].push(i);
        }
        columns
    }
}

/// Render the feature input panel
pub fn render_feature_form(f: &mut Frame, area: Rect, state: &FeatureFormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (column, indices) in state.columns().iter().enumerate() {
        render_field_column(f, columns[column], state, indices);
    }
}

fn render_field_column(f: &mut Frame, area: Rect, state: &FeatureFormState, indices: &[usize]) {
    let field_height = 4;
    let constraints: Vec<Constraint> = indices
        .iter()
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (slot, &index) in indices.iter().enumerate() {
        let field = &state.fields[index];
        let is_selected = index == state.selected_field;

        let border_style = if is_selected {
            ClinicalTheme::border_focused()
        } else {
            ClinicalTheme::border()
        };
        let label_style = if is_selected {
            ClinicalTheme::focused()
        } else {
            ClinicalTheme::text_secondary()
        };

        let at_min = field.value <= field.spec.min;
        let at_max = field.value >= field.spec.max;
        let step_style = |disabled: bool| {
            if disabled {
                ClinicalTheme::text_muted()
            } else {
                ClinicalTheme::key_hint()
            }
        };

        let content = Paragraph::new(vec![
            Line::from(Span::styled(field.spec.label(), label_style)),
            Line::from(vec![
                Span::styled(" [-] ", step_style(at_min)),
                Span::styled(format!("{:>3}", field.value), ClinicalTheme::text()),
                Span::styled("  [+] ", step_style(at_max)),
                Span::styled(
                    format!("  {}..{}", field.spec.min, field.spec.max),
                    ClinicalTheme::text_muted(),
                ),
            ]),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        f.render_widget(content, chunks[slot]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FEATURE_COUNT;

    #[test]
    fn test_defaults_are_minimums() {
        let state = FeatureFormState::default();
        assert_eq!(state.fields.len(), FEATURE_COUNT);
        for field in state.fields.iter() {
            assert_eq!(field.value, field.spec.min);
        }
    }

    #[test]
    fn test_values_stay_in_bounds_under_any_stepping() {
        let mut state = FeatureFormState::default();

        // Deterministic mixed walk over every field.
        for i in 0..FEATURE_COUNT {
            state.selected_field = i;
            for step in 0..40usize {
                if (step * 7 + i) % 3 == 0 {
                    state.decrement();
                } else {
                    state.increment();
                }
                let field = &state.fields[i];
                assert!(field.spec.contains(field.value), "{} escaped", field.spec.name);
            }
            for _ in 0..10 {
                state.increment();
            }
            assert_eq!(state.fields[i].value, state.fields[i].spec.max);
            for _ in 0..10 {
                state.decrement();
            }
            assert_eq!(state.fields[i].value, state.fields[i].spec.min);
        }
    }

    #[test]
    fn test_stepping_reports_changes() {
        let mut state = FeatureFormState::default();
        assert!(!state.decrement());
        assert!(state.increment());
        assert!(!state.increment()); // Sex max is 1
    }

    #[test]
    fn test_typed_digits_are_clamped() {
        let mut state = FeatureFormState::default();
        state.selected_field = 2; // tumor location 1..4
        assert!(state.input_char('9'));
        assert_eq!(state.fields[2].value, 4);
        assert!(state.input_char('0'));
        assert_eq!(state.fields[2].value, 1);
        assert!(!state.input_char('x'));
    }

    #[test]
    fn test_min_max_and_reset() {
        let mut state = FeatureFormState::default();
        state.selected_field = 9; // mFI-5
        assert!(state.set_max());
        assert_eq!(state.fields[9].value, 5);
        assert!(state.set_min());
        assert!(state.set_max());
        assert!(state.reset());
        assert_eq!(state.fields[9].value, 0);
        assert!(!state.reset());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut state = FeatureFormState::default();
        state.prev_field();
        assert_eq!(state.selected_field, FEATURE_COUNT - 1);
        state.next_field();
        assert_eq!(state.selected_field, 0);
    }

    #[test]
    fn test_columns_interleave() {
        let state = FeatureFormState::default();
        let [left, right] = state.columns();
        assert_eq!(left, vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(right, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_record_follows_feature_order_not_layout() {
        let mut state = FeatureFormState::default();
        for i in 0..FEATURE_COUNT {
            state.selected_field = i;
            state.set_max();
        }
        let record = state.to_record().expect("record");
        let expected: Vec<i64> = FEATURES.iter().map(|f| f.max).collect();
        assert_eq!(record.values().to_vec(), expected);
    }
}
