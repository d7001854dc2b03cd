//! Member-invite submission contract
//!
//! The invite form validates field-by-field and forwards a clean request to
//! the collaborator that actually creates the membership; that call's result
//! is the outcome of the submission. The form performs no I/O of its own.

use thiserror::Error;

/// New-member request, one per submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteRequest {
    /// Team the member is invited into
    pub team_id: String,
    /// Username of the invitee
    pub username: String,
}

impl InviteRequest {
    /// Build a request from raw form values
    pub fn new(team_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            team_id: team_id.into(),
            username: username.into(),
        }
    }

    /// Field-level validation, all failures reported together
    pub fn validate(&self) -> Result<(), InviteError> {
        let mut errors = Vec::new();
        if self.team_id.trim().is_empty() {
            errors.push(FieldError::required("teamId"));
        }
        if self.username.trim().is_empty() {
            errors.push(FieldError::required("username"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(InviteError::Validation(errors))
        }
    }
}

/// A rejected field and the reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the error belongs to
    pub field: &'static str,
    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            message: format!("{} is required", field),
        }
    }
}

/// Why a submission failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InviteError {
    /// The form never left the client
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// The membership collaborator refused the request
    #[error("invite rejected: {0}")]
    Rejected(String),
}

/// Collaborator that performs the membership creation
pub trait InviteSink {
    /// Create the membership described by `request`
    fn create_team_member(&mut self, request: &InviteRequest) -> Result<(), InviteError>;
}

/// Validate and forward a submission
///
/// The sink is reached at most once, and only with a request that passed
/// validation.
pub fn submit_invite(request: &InviteRequest, sink: &mut dyn InviteSink) -> Result<(), InviteError> {
    request.validate()?;
    tracing::debug!(team_id = %request.team_id, username = %request.username, "submitting invite");
    sink.create_team_member(request)
}
