//! Response wrapper shared by every `/api` endpoint:
//! `{success, count?, message?, data?, error?, errors?}`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> Envelope<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            count: None,
            message: None,
            data: Some(data),
            error: None,
            errors: None,
        }
    }

    /// Single record
    pub fn data(data: T) -> Self {
        Self::success(data)
    }

    /// Single record plus a confirmation message
    pub fn with_message(message: &str, data: T) -> Self {
        Self {
            message: Some(message.to_string()),
            ..Self::success(data)
        }
    }
}

impl<T> Envelope<Vec<T>> {
    /// Collection with its length in `count`
    pub fn list(data: Vec<T>) -> Self {
        Self {
            count: Some(data.len()),
            ..Self::success(data)
        }
    }
}

impl Envelope<()> {
    pub fn failure(error: String, errors: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            count: None,
            message: None,
            data: None,
            error: Some(error),
            errors,
        }
    }
}
