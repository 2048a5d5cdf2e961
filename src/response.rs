use serde::Serialize;

#[derive(Debug, Serialize, Clone)]
pub struct Meta {
    pub total: Option<usize>,
}

impl Meta {
    pub fn new(total: usize) -> Self {
        Self { total: Some(total) }
    }

    pub fn empty() -> Self {
        Self { total: None }
    }
}

/// Envelope printed by the command-line front-end.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }

    pub fn list(message: impl Into<String>, items: T, total: usize) -> Self {
        Self::success(message, items, Some(Meta::new(total)))
    }
}

impl ApiResponse<ErrorData> {
    pub fn error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            data: Some(ErrorData {
                error: error.into(),
            }),
            meta: Some(Meta::empty()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorData {
    pub error: String,
}
