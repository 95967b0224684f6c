//! Single-lab lookup shown after a lab is chosen.

#[cfg(test)]
#[path = "lab_detail_test.rs"]
mod lab_detail_test;

use crate::net::api::ApiError;
use crate::net::types::Lab;
use crate::state::labs::LOAD_ERROR_MESSAGE;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LabDetailState {
    #[default]
    Loading,
    Loaded(Lab),
    NotFound,
    Failed(String),
}

impl LabDetailState {
    pub fn from_result(result: Result<Lab, ApiError>) -> Self {
        match result {
            Ok(lab) => Self::Loaded(lab),
            Err(ApiError::NotFound) => Self::NotFound,
            Err(err) => Self::Failed(err.user_message().unwrap_or(LOAD_ERROR_MESSAGE).to_owned()),
        }
    }

    /// Status line for every state except `Loaded`.
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Loading => Some("Carregando laboratório..."),
            Self::Loaded(_) => None,
            Self::NotFound => Some("Laboratório não encontrado"),
            Self::Failed(message) => Some(message),
        }
    }
}
