//! Lab list, load status and selection for the selection view.
//!
//! DESIGN
//! ======
//! Plain data with explicit transitions; the page wraps it in a `RwSignal`
//! and calls these methods from event handlers and fetch completions.
//!
//! Every load takes a ticket from `begin_load`. Only the response holding the
//! newest ticket is applied, so a slow earlier fetch can never overwrite a
//! later one when the user hammers retry.

#[cfg(test)]
#[path = "labs_test.rs"]
mod labs_test;

use crate::net::api::ApiError;
use crate::net::types::Lab;

/// Banner text for any list failure, whatever the cause.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load laboratory data. Please check your connection and try again.";

/// One rendered row of the lab list.
#[derive(Clone, Debug, PartialEq)]
pub struct LabRow {
    pub lab: Lab,
    pub selected: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabsState {
    /// Labs in server response order, plus any created since.
    pub labs: Vec<Lab>,
    /// Nickname of the selected lab; always one of `labs`.
    pub selected: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
    /// Ticket of the most recent load.
    pub load_seq: u64,
}

impl LabsState {
    /// Mark a fetch as started and return its ticket.
    pub fn begin_load(&mut self) -> u64 {
        self.load_seq += 1;
        self.loading = true;
        self.error = None;
        self.load_seq
    }

    /// Apply a fetch result. Returns `false` when a newer load superseded it.
    pub fn finish_load(&mut self, seq: u64, result: Result<Vec<Lab>, ApiError>) -> bool {
        if seq != self.load_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(labs) => {
                self.labs = labs;
                self.error = None;
            }
            Err(_) => {
                self.labs.clear();
                self.error = Some(LOAD_ERROR_MESSAGE.to_owned());
            }
        }
        let still_listed = self
            .selected
            .as_deref()
            .is_some_and(|nickname| self.contains(nickname));
        if !still_listed {
            self.selected = None;
        }
        true
    }

    /// Select a listed lab. Re-selecting keeps it selected; unknown nicknames
    /// are ignored.
    pub fn select(&mut self, nickname: &str) -> bool {
        if !self.contains(nickname) {
            return false;
        }
        self.selected = Some(nickname.to_owned());
        true
    }

    pub fn selected_lab(&self) -> Option<&Lab> {
        let nickname = self.selected.as_deref()?;
        self.labs.iter().find(|lab| lab.nickname == nickname)
    }

    /// Nickname to hand to the proceed callback, if a lab is selected.
    pub fn proceed_target(&self) -> Option<&str> {
        self.selected_lab().map(|lab| lab.nickname.as_str())
    }

    /// Add a freshly created lab at the end of the list.
    pub fn append_lab(&mut self, lab: Lab) {
        self.labs.push(lab);
    }

    pub fn rows(&self) -> Vec<LabRow> {
        self.labs
            .iter()
            .map(|lab| LabRow {
                selected: self.selected.as_deref() == Some(lab.nickname.as_str()),
                lab: lab.clone(),
            })
            .collect()
    }

    /// True when a finished, successful load came back empty.
    pub fn show_empty_notice(&self) -> bool {
        !self.loading && self.error.is_none() && self.labs.is_empty()
    }

    fn contains(&self, nickname: &str) -> bool {
        self.labs.iter().any(|lab| lab.nickname == nickname)
    }
}

/// Badge text for the capacity column.
pub fn capacity_label(lab: &Lab) -> String {
    format!("Cap: {}", lab.capacity)
}

/// Badge text for confirmed bookings, when the service reported them.
pub fn bookings_label(lab: &Lab) -> Option<String> {
    lab.active_bookings.map(|count| format!("{count} reservas ativas"))
}
