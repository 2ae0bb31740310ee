//! The fixed `{status, message, payload}` wire envelope.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::error::DirectoryError;

pub const STATUS_OK: &str = "200";
pub const STATUS_ERROR: &str = "500";
pub const MESSAGE_SUCCESS: &str = "Success";
pub const MESSAGE_BAD_GROUP: &str = "Invalid Request: Bad Group Name";
pub const MESSAGE_PREAMBLE: &str = "Invalid Request: ";
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    pub status: String,
    pub message: String,
    pub payload: Payload,
}

/// `upn` always holds the raw `groups` query parameter as its single entry,
/// even for multi-group requests; `users` is the flattened UPN list.
#[derive(Debug, Serialize)]
pub struct Payload {
    pub upn: Vec<String>,
    pub users: Vec<String>,
}

impl ResponseEnvelope {
    pub fn success(users: Vec<String>, raw_groups_param: &str) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            message: MESSAGE_SUCCESS.to_string(),
            payload: Payload {
                upn: vec![raw_groups_param.to_string()],
                users,
            },
        }
    }

    /// Failure envelope still carries whatever UPNs resolved before the
    /// fault. The message comes from the error variant, not its text.
    pub fn failure(
        partial_users: Vec<String>,
        raw_groups_param: &str,
        error: &DirectoryError,
    ) -> Self {
        let message = if error.is_group_not_found() {
            MESSAGE_BAD_GROUP.to_string()
        } else {
            format!("{MESSAGE_PREAMBLE}{error}")
        };

        Self {
            status: STATUS_ERROR.to_string(),
            message,
            payload: Payload {
                upn: vec![raw_groups_param.to_string()],
                users: partial_users,
            },
        }
    }

    fn http_status(&self) -> StatusCode {
        if self.status == STATUS_OK {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        // Envelope serialization cannot fail; the fallback keeps the
        // non-test code free of panics.
        let body = serde_json::to_string(&self).unwrap_or_default();
        (
            self.http_status(),
            [(header::CONTENT_TYPE, CONTENT_TYPE_JSON)],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_keeps_raw_group_param_intact() {
        let envelope = ResponseEnvelope::success(
            vec!["alice@x.com".into(), "bob@x.com".into()],
            "Eng,Sales",
        );
        assert_eq!(envelope.status, "200");
        assert_eq!(envelope.message, "Success");
        // Never split into one entry per group.
        assert_eq!(envelope.payload.upn, vec!["Eng,Sales".to_string()]);
        assert_eq!(envelope.payload.users.len(), 2);
    }

    #[test]
    fn group_not_found_uses_fixed_message() {
        let error = DirectoryError::GroupNotFound("Sales".into());
        let envelope = ResponseEnvelope::failure(vec!["alice@x.com".into()], "Eng,Sales", &error);
        assert_eq!(envelope.status, "500");
        assert_eq!(envelope.message, "Invalid Request: Bad Group Name");
        assert_eq!(envelope.payload.users, vec!["alice@x.com".to_string()]);
    }

    #[test]
    fn other_errors_carry_their_description() {
        let error = DirectoryError::TokenRequest("token endpoint returned 401".into());
        let envelope = ResponseEnvelope::failure(Vec::new(), "Eng", &error);
        assert!(envelope.message.starts_with("Invalid Request: "));
        assert!(envelope.message.contains("401"));
        assert!(envelope.payload.users.is_empty());
    }

    #[test]
    fn wire_field_names_are_stable() {
        let envelope = ResponseEnvelope::success(vec!["alice@x.com".into()], "Engineering");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["status"], "200");
        assert_eq!(json["message"], "Success");
        assert_eq!(json["payload"]["upn"][0], "Engineering");
        assert_eq!(json["payload"]["users"][0], "alice@x.com");
    }
}
