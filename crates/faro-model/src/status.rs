use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use utoipa::openapi::{RefOr, Schema};
use utoipa::{PartialSchema, ToSchema, schema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Status {
    pub questionnaire: Value,
    pub sessions: Value,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ToSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentState {
    Ok,
    Error,
}

impl From<StatusCode> for ComponentState {
    fn from(value: StatusCode) -> Self {
        if value.is_success() { Self::Ok } else { Self::Error }
    }
}

/// Health of one server component: an ok/error state, optionally with a
/// structured detail payload that replaces the bare state in responses.
#[derive(Debug, Clone)]
pub struct ComponentStatus {
    state: ComponentState,
    message: Option<Value>,
}

impl PartialSchema for ComponentStatus {
    fn schema() -> RefOr<Schema> {
        schema!(String).into()
    }
}

impl ToSchema for ComponentStatus {}

impl ComponentStatus {
    pub fn new<S: Into<ComponentState>>(state: S, message: Option<Value>) -> Self {
        Self {
            state: state.into(),
            message,
        }
    }

    #[must_use]
    pub fn from_error_text(message: &str) -> Self {
        Self::new(ComponentState::Error, Some(json!(message)))
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.state == ComponentState::Ok
    }

    #[must_use]
    pub fn into_message(self) -> Value {
        match self.message {
            Some(message) => message,
            // This is safe because the serialization can never fail.
            None => serde_json::to_value(self.state).expect("failed to serialize component status"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_payload_wins() {
        let status = ComponentStatus::new(StatusCode::OK, Some(json!({ "questions": 10 })));
        assert!(status.is_ok());
        assert_eq!(status.into_message(), json!({ "questions": 10 }));
    }

    #[test]
    fn test_state_is_the_fallback_message() {
        let status = ComponentStatus::new(StatusCode::OK, None);
        assert_eq!(status.into_message(), json!("ok"));
    }

    #[test]
    fn test_error_text() {
        let status = ComponentStatus::from_error_text("no questions loaded");
        assert!(!status.is_ok());
        assert_eq!(status.into_message(), json!("no questions loaded"));
    }
}
