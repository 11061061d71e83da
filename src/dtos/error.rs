use serde::Deserialize;

/// Backend error body: `{"detail": "..."}` for most failures, or a list of
/// validation-error objects on 422.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

#[derive(Debug, Deserialize)]
pub struct FieldError {
    pub msg: String,
}

impl ErrorDetail {
    /// Flatten either form into one human-readable message.
    pub fn message(&self) -> String {
        match self {
            ErrorDetail::Message(s) => s.clone(),
            ErrorDetail::Fields(fields) => fields
                .iter()
                .map(|f| f.msg.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "Invalid email or password"}"#).unwrap();
        assert_eq!(body.detail.message(), "Invalid email or password");
    }

    #[test]
    fn validation_detail_list() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail": [
                {"loc": ["body", "status"], "msg": "field required", "type": "value_error"},
                {"loc": ["query", "user_id"], "msg": "value is not a valid integer", "type": "type_error"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            body.detail.message(),
            "field required; value is not a valid integer"
        );
    }
}
