//! Inline field editing as a small explicit state machine.
//!
//! DESIGN
//! ======
//! `Viewing -> Editing -> (save | cancel) -> Viewing`. The editor is
//! parameterized by the field name and a validator, so every editable cell
//! shares one implementation instead of carrying its own toggle flags. A
//! failed save leaves the editor open with the rejected draft intact.

#[cfg(test)]
#[path = "editable_test.rs"]
mod editable_test;

/// Reason a draft value was refused by a field validator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{field} boş bırakılamaz")]
    Empty { field: &'static str },
}

/// Validator signature: field label plus candidate value.
pub type Validator = fn(&'static str, &str) -> Result<(), FieldError>;

/// Accepts every value, including empty text.
pub fn accept_any(_field: &'static str, _value: &str) -> Result<(), FieldError> {
    Ok(())
}

/// Rejects empty or whitespace-only values.
pub fn non_blank(field: &'static str, value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Empty { field });
    }
    Ok(())
}

/// Current phase of an editable field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditPhase {
    #[default]
    Viewing,
    Editing {
        draft: String,
    },
}

/// One editable field: its label, validator, and current phase.
#[derive(Clone, Debug)]
pub struct EditableField {
    field: &'static str,
    validator: Validator,
    phase: EditPhase,
}

impl EditableField {
    #[must_use]
    pub fn new(field: &'static str, validator: Validator) -> Self {
        Self { field, validator, phase: EditPhase::Viewing }
    }

    #[must_use]
    pub fn field(&self) -> &'static str {
        self.field
    }

    #[must_use]
    pub fn phase(&self) -> &EditPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.phase, EditPhase::Editing { .. })
    }

    /// Draft text while editing.
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        match &self.phase {
            EditPhase::Editing { draft } => Some(draft),
            EditPhase::Viewing => None,
        }
    }

    /// Enter editing, seeding the draft with the committed value. Re-entering
    /// while already editing keeps the existing draft.
    pub fn begin(&mut self, current: &str) {
        if self.is_editing() {
            return;
        }
        self.phase = EditPhase::Editing { draft: current.to_owned() };
    }

    /// Replace the draft text. No-op while viewing.
    pub fn update(&mut self, text: &str) {
        if let EditPhase::Editing { draft } = &mut self.phase {
            text.clone_into(draft);
        }
    }

    /// Validate and commit the draft.
    ///
    /// Returns `Ok(Some(value))` on commit, `Ok(None)` when nothing was being
    /// edited, and `Err` when the validator refuses the draft (the editor
    /// stays open).
    pub fn save(&mut self) -> Result<Option<String>, FieldError> {
        let EditPhase::Editing { draft } = &self.phase else {
            return Ok(None);
        };
        (self.validator)(self.field, draft)?;
        let value = draft.clone();
        self.phase = EditPhase::Viewing;
        Ok(Some(value))
    }

    /// Discard the draft and return to viewing.
    pub fn cancel(&mut self) {
        self.phase = EditPhase::Viewing;
    }
}
