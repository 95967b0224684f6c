//! Add-lab modal: form fields, submit lifecycle and inline error.
//!
//! TRADE-OFFS
//! ==========
//! Only presence of the required fields is checked here. Capacity is parsed
//! with integer-prefix rules and a non-numeric value goes to the service as
//! NaN, which is where it gets rejected.

#[cfg(test)]
#[path = "new_lab_test.rs"]
mod new_lab_test;

use crate::net::api::ApiError;
use crate::net::types::{CreateLabInput, Lab};

/// Inline modal error when the service gave no message of its own.
pub const CREATE_ERROR_FALLBACK: &str = "Erro ao adicionar laboratório. Tente novamente.";

/// Inputs of the add-lab form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewLabField {
    Name,
    Nickname,
    Capacity,
    Location,
}

impl NewLabField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome do Laboratório",
            Self::Nickname => "Código/Apelido",
            Self::Capacity => "Capacidade",
            Self::Location => "Localização (opcional)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Ex: Laboratório de Física",
            Self::Nickname => "Ex: LAB01",
            Self::Capacity => "Ex: 30",
            Self::Location => "Ex: Prédio A, Sala 101",
        }
    }

    pub fn required(self) -> bool {
        !matches!(self, Self::Location)
    }
}

/// Raw text of the form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewLabForm {
    pub name: String,
    pub nickname: String,
    pub capacity: String,
    pub location: String,
}

impl NewLabForm {
    pub fn value(&self, field: NewLabField) -> &str {
        match field {
            NewLabField::Name => &self.name,
            NewLabField::Nickname => &self.nickname,
            NewLabField::Capacity => &self.capacity,
            NewLabField::Location => &self.location,
        }
    }

    pub fn set(&mut self, field: NewLabField, value: String) {
        match field {
            NewLabField::Name => self.name = value,
            NewLabField::Nickname => self.nickname = value,
            NewLabField::Capacity => self.capacity = value,
            NewLabField::Location => self.location = value,
        }
    }

    /// First required field left empty, in form order.
    pub fn missing_required(&self) -> Option<NewLabField> {
        [NewLabField::Name, NewLabField::Nickname, NewLabField::Capacity]
            .into_iter()
            .find(|field| self.value(*field).is_empty())
    }

    /// Request body for the create call. A blank location is omitted.
    pub fn to_input(&self) -> CreateLabInput {
        CreateLabInput {
            name: self.name.clone(),
            nickname: self.nickname.clone(),
            capacity: parse_capacity(&self.capacity),
            location: Some(self.location.clone()).filter(|loc| !loc.is_empty()),
        }
    }
}

/// Parse the leading decimal integer of `raw`, skipping leading whitespace
/// and accepting one sign. Anything without leading digits yields NaN.
pub fn parse_capacity(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let mut value: Option<f64> = None;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(10) else {
            break;
        };
        value = Some(value.unwrap_or(0.0) * 10.0 + f64::from(digit));
    }
    match value {
        Some(v) if negative => -v,
        Some(v) => v,
        None => f64::NAN,
    }
}

/// Why a submit did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("the add-lab form is closed")]
    Closed,
    #[error("a submission is already in flight")]
    InFlight,
    #[error("{} is required", .0.label())]
    MissingField(NewLabField),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddLabState {
    pub open: bool,
    pub form: NewLabForm,
    pub submitting: bool,
    pub error: Option<String>,
}

impl AddLabState {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the modal, discarding typed values and any inline error.
    pub fn close(&mut self) {
        self.open = false;
        self.form = NewLabForm::default();
        self.error = None;
    }

    /// Validate and start a submission, returning the request body.
    pub fn begin_submit(&mut self) -> Result<CreateLabInput, SubmitBlocked> {
        if !self.open {
            return Err(SubmitBlocked::Closed);
        }
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        if let Some(field) = self.form.missing_required() {
            return Err(SubmitBlocked::MissingField(field));
        }
        self.submitting = true;
        self.error = None;
        Ok(self.form.to_input())
    }

    /// Apply the create result. On success the modal resets and closes and
    /// the stored lab is returned for the list; on failure the typed values
    /// stay and the message is shown inline.
    pub fn finish_submit(&mut self, result: Result<Lab, ApiError>) -> Option<Lab> {
        self.submitting = false;
        match result {
            Ok(lab) => {
                self.close();
                Some(lab)
            }
            Err(err) => {
                // Cancelled while in flight: nothing left to show the error in.
                if self.open {
                    let message = err.user_message().unwrap_or(CREATE_ERROR_FALLBACK);
                    self.error = Some(message.to_owned());
                }
                None
            }
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting { "Adicionando..." } else { "Adicionar Lab" }
    }
}
