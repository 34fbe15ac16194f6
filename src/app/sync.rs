//! List synchronizer: refresh, create, and delete flows.
//!
//! The rendered collection is never patched locally. Every successful or
//! failed mutation is followed by a reconciliation refresh, and the list is
//! only ever replaced by the decoded result of `GET /names`.
//!
//! Each request is registered in `AppState::in_flight` together with its
//! [`Flow`] and armed with a deadline timer. Whichever of response and
//! deadline arrives first completes the flow; the other finds nothing pending
//! and is ignored.

use super::actions::{Action, TimerId};
use super::feedback::Control;
use super::modes::{Focus, InputMode};
use super::state::{AppState, ListView};
use crate::domain::validation::TRIMMED_NOTICE;
use crate::domain::{decode_collection, validate, NameRecord, Result, ValidationError};
use crate::gateway::{ApiRequest, ApiResponse, ErrorKind, GatewayError, RequestId};

/// Why a refresh was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshReason {
    /// First load after the plugin got its permissions.
    Initial,
    /// Explicit refresh key.
    User,
    /// Follow-up to a create or delete.
    ///
    /// Keeps the mutation's banner instead of reporting a count.
    Reconcile,
}

/// A user flow waiting on a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Refresh(RefreshReason),
    Create { name: String },
    Delete { record: NameRecord },
}

impl AppState {
    /// Starts a refresh of the collection.
    ///
    /// User and initial refreshes are ignored while the list is already busy
    /// and clear the banner. Reconciliation refreshes always run.
    pub fn refresh(&mut self, reason: RefreshReason) -> Vec<Action> {
        if reason != RefreshReason::Reconcile {
            if self.feedback.is_busy(Control::List) {
                tracing::debug!(?reason, "refresh already in progress");
                return vec![];
            }
            self.feedback.clear_banner();
        }

        self.feedback.set_busy(Control::List, true);
        let request = ApiRequest::list(self.allocate_request_id());
        tracing::debug!(request_id = %request.id, ?reason, "refreshing names");
        self.issue(request, Flow::Refresh(reason))
    }

    /// Validates the input and starts a create request.
    ///
    /// Invalid input only produces field feedback; nothing is sent.
    ///
    /// # Errors
    ///
    /// Returns an encoding error if the request body cannot be serialized.
    pub fn submit(&mut self) -> Result<(bool, Vec<Action>)> {
        if self.feedback.is_busy(Control::Submit) {
            tracing::debug!("submit ignored, create in progress");
            return Ok((false, vec![]));
        }

        let trimmed = self.input.trim();
        let was_trimmed = !trimmed.is_empty() && trimmed.len() != self.input.len();
        if was_trimmed {
            self.input = trimmed.to_string();
            self.feedback.clear_field();
            self.feedback.show_field_notice(TRIMMED_NOTICE);
        }

        let valid = match validate(&self.input, self.settings.max_name_length) {
            Ok(valid) => valid,
            Err(err) => {
                tracing::debug!(error = %err, "name rejected locally");
                self.feedback.show_field_error(err.to_string());
                return Ok((true, vec![]));
            }
        };

        let request = ApiRequest::create(self.allocate_request_id(), &valid.cleaned)?;
        if !was_trimmed {
            self.feedback.clear_field();
        }

        self.feedback.set_busy(Control::Submit, true);
        tracing::debug!(request_id = %request.id, name = %valid.cleaned, "creating name");
        Ok((true, self.issue(request, Flow::Create { name: valid.cleaned })))
    }

    /// Asks for confirmation before deleting the selected record.
    pub fn request_delete(&mut self) -> bool {
        if self.focus != Focus::List || self.input_mode != InputMode::Normal {
            return false;
        }
        let Some(record) = self.selected_record().cloned() else {
            tracing::debug!("no record selected to delete");
            return false;
        };
        if self.feedback.is_busy(Control::Delete(record.id)) {
            tracing::debug!(id = %record.id, "delete already in progress");
            return false;
        }

        self.input_mode = InputMode::ConfirmDelete(record);
        true
    }

    /// Answers a pending delete confirmation.
    ///
    /// Declining leaves everything as it was.
    pub fn confirm_delete(&mut self, confirmed: bool) -> (bool, Vec<Action>) {
        let InputMode::ConfirmDelete(record) = std::mem::take(&mut self.input_mode) else {
            return (false, vec![]);
        };

        if !confirmed {
            tracing::debug!(id = %record.id, "delete declined");
            return (true, vec![]);
        }
        if self.feedback.is_busy(Control::Delete(record.id)) {
            return (true, vec![]);
        }

        self.feedback.set_busy(Control::Delete(record.id), true);
        let request = ApiRequest::delete(self.allocate_request_id(), record.id);
        tracing::debug!(request_id = %request.id, id = %record.id, "deleting name");
        (true, self.issue(request, Flow::Delete { record }))
    }

    /// Completes the flow waiting on `request`.
    ///
    /// Returns `None` if nothing is waiting on it: the request already hit its
    /// deadline or the id is unknown.
    pub fn complete(
        &mut self,
        request: RequestId,
        result: std::result::Result<ApiResponse, GatewayError>,
    ) -> Option<Vec<Action>> {
        let Some(flow) = self.in_flight.remove(&request) else {
            tracing::debug!(request_id = %request, "ignoring result for settled request");
            return None;
        };

        let actions = match flow {
            Flow::Refresh(reason) => self.finish_refresh(request, reason, result),
            Flow::Create { name } => self.finish_create(&name, result),
            Flow::Delete { record } => self.finish_delete(&record, result),
        };
        Some(actions)
    }

    /// Fails the flow waiting on `request` because its deadline elapsed.
    pub fn expire(&mut self, request: RequestId) -> Option<Vec<Action>> {
        if self.in_flight.contains_key(&request) {
            tracing::warn!(request_id = %request, "request deadline elapsed");
        }
        self.complete(request, Err(GatewayError::TimedOut))
    }

    fn issue(&mut self, request: ApiRequest, flow: Flow) -> Vec<Action> {
        let deadline = Action::ScheduleTimer {
            timer: TimerId::Deadline(request.id),
            after: self.settings.request_timeout,
        };
        self.in_flight.insert(request.id, flow);
        vec![Action::SendRequest(request), deadline]
    }

    fn refresh_in_flight(&self) -> bool {
        self.in_flight
            .values()
            .any(|flow| matches!(flow, Flow::Refresh(_)))
    }

    fn finish_refresh(
        &mut self,
        request: RequestId,
        reason: RefreshReason,
        result: std::result::Result<ApiResponse, GatewayError>,
    ) -> Vec<Action> {
        if !self.refresh_in_flight() {
            self.feedback.set_busy(Control::List, false);
        }

        if self.last_applied_refresh.is_some_and(|last| last > request) {
            tracing::debug!(request_id = %request, "discarding out-of-order refresh result");
            return vec![];
        }
        self.last_applied_refresh = Some(request);

        let decoded = result.and_then(|response| {
            decode_collection(&response.body).map_err(|err| GatewayError::Malformed {
                detail: err.to_string(),
            })
        });

        let mut actions = vec![];
        match decoded {
            Ok(records) => {
                tracing::debug!(count = records.len(), "names loaded");
                let count = records.len();
                self.list = ListView::Loaded(records);
                self.clamp_selection();

                if reason != RefreshReason::Reconcile && count > 0 {
                    let noun = if count == 1 { "name" } else { "names" };
                    actions.extend(self.feedback.show_success(format!("Found {count} {noun}"), true));
                }
            }
            Err(err) => {
                if let GatewayError::Malformed { detail } = &err {
                    tracing::warn!(detail = %detail, "undecodable names payload");
                }
                self.list = ListView::Failed(err.to_string());
                self.clamp_selection();
                actions.extend(
                    self.feedback
                        .show_error(format!("Failed to load names: {err}"), true),
                );
            }
        }
        actions
    }

    fn finish_create(
        &mut self,
        name: &str,
        result: std::result::Result<ApiResponse, GatewayError>,
    ) -> Vec<Action> {
        self.feedback.set_busy(Control::Submit, false);

        match result {
            Ok(_) => {
                tracing::debug!(name = %name, "name created");
                self.input.clear();
                self.feedback.clear_field();
                let mut actions: Vec<Action> = self
                    .feedback
                    .show_success(format!("Successfully added \"{name}\""), true)
                    .into_iter()
                    .collect();
                actions.extend(self.refresh(RefreshReason::Reconcile));
                actions
            }
            Err(err) => {
                let kind = ErrorKind::classify(&err);
                tracing::debug!(name = %name, error = %err, ?kind, "create failed");

                let (field, banner) = match kind {
                    ErrorKind::AlreadyExists => (
                        "This name already exists".to_string(),
                        format!("\"{name}\" already exists"),
                    ),
                    ErrorKind::TooLong => {
                        let message = ValidationError::TooLong {
                            max: self.settings.max_name_length,
                        }
                        .to_string();
                        (message.clone(), format!("Failed to add name: {message}"))
                    }
                    ErrorKind::Empty => {
                        let message = ValidationError::Empty.to_string();
                        (message.clone(), format!("Failed to add name: {message}"))
                    }
                    ErrorKind::NotFound | ErrorKind::Other => {
                        (err.to_string(), format!("Failed to add name: {err}"))
                    }
                };

                self.feedback.show_field_error(field);
                self.feedback.show_error(banner, true).into_iter().collect()
            }
        }
    }

    fn finish_delete(
        &mut self,
        record: &NameRecord,
        result: std::result::Result<ApiResponse, GatewayError>,
    ) -> Vec<Action> {
        self.feedback.set_busy(Control::Delete(record.id), false);
        let name = record.display_name();

        let banner = match result {
            Ok(_) => {
                tracing::debug!(id = %record.id, "name deleted");
                self.feedback
                    .show_success(format!("Successfully deleted \"{name}\""), true)
            }
            Err(err) => {
                let kind = ErrorKind::classify(&err);
                tracing::debug!(id = %record.id, error = %err, ?kind, "delete failed");
                let message = if kind == ErrorKind::NotFound {
                    format!("\"{name}\" was not found; it may already have been deleted")
                } else {
                    format!("Failed to delete \"{name}\": {err}")
                };
                self.feedback.show_error(message, true)
            }
        };

        let mut actions: Vec<Action> = banner.into_iter().collect();
        actions.extend(self.refresh(RefreshReason::Reconcile));
        actions
    }
}
