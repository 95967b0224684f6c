//! In-memory `LabService` for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use super::api::{ApiError, LabService};
use super::types::{CreateLabInput, Lab};

pub(crate) fn lab(nickname: &str, name: &str, capacity: u32) -> Lab {
    Lab {
        nickname: nickname.to_owned(),
        name: name.to_owned(),
        capacity,
        location: None,
        description: None,
        active_bookings: None,
        available: None,
    }
}

/// Scripted service: list responses are served in queue order; creates echo
/// the input back like the real service unless a result is forced.
#[derive(Default)]
pub(crate) struct FakeLabService {
    pub list_results: RefCell<VecDeque<Result<Vec<Lab>, ApiError>>>,
    pub forced_create: RefCell<Option<Result<Lab, ApiError>>>,
    pub created_inputs: RefCell<Vec<CreateLabInput>>,
    pub list_calls: Cell<usize>,
}

impl FakeLabService {
    pub fn with_lists(results: Vec<Result<Vec<Lab>, ApiError>>) -> Self {
        Self { list_results: RefCell::new(results.into()), ..Self::default() }
    }
}

impl LabService for FakeLabService {
    async fn list_labs(&self) -> Result<Vec<Lab>, ApiError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.list_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_owned())))
    }

    async fn create_lab(&self, input: &CreateLabInput) -> Result<Lab, ApiError> {
        self.created_inputs.borrow_mut().push(input.clone());
        if let Some(result) = self.forced_create.borrow_mut().take() {
            return result;
        }
        if !input.capacity.is_finite() || input.capacity < 1.0 {
            return Err(ApiError::Status { status: 400, message: Some("Invalid capacity value".to_owned()) });
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mut created = lab(&input.nickname, &input.name, input.capacity as u32);
        created.location = input.location.clone();
        created.active_bookings = Some(0);
        created.available = Some(true);
        Ok(created)
    }

    async fn fetch_lab(&self, nickname: &str) -> Result<Lab, ApiError> {
        let lists = self.list_results.borrow();
        lists
            .iter()
            .filter_map(|result| result.as_ref().ok())
            .flatten()
            .find(|lab| lab.nickname == nickname)
            .cloned()
            .ok_or(ApiError::NotFound)
    }
}
