use serde::Serialize;

/// `{"data": ...}`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// `{"message": "...", "data": ...}`
#[derive(Debug, Serialize)]
pub struct MessageDataResponse<T> {
    pub message: String,
    pub data: T,
}

/// `{"message": "..."}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{"error": "..."}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

impl<T> MessageDataResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_shapes() {
        let data = serde_json::to_value(DataResponse::new(Vec::<i32>::new())).unwrap();
        assert_eq!(data, json!({ "data": [] }));

        let message_data = serde_json::to_value(MessageDataResponse::new("done", 1)).unwrap();
        assert_eq!(message_data, json!({ "message": "done", "data": 1 }));

        let message = serde_json::to_value(MessageResponse::new("done")).unwrap();
        assert_eq!(message, json!({ "message": "done" }));

        let error = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(error, json!({ "error": "boom" }));
    }
}
