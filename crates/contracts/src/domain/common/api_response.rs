use serde::{Deserialize, Serialize};

/// Конверт ответа REST API: `{ success, data?, error? }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// `data` when `success` is set, otherwise the server message.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("Răspuns fără date".to_string()),
            (false, _) => Err(self
                .error
                .unwrap_or_else(|| "Eroare necunoscută".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_result() {
        let ok: ApiResponse<Vec<i32>> = serde_json::from_str(r#"{"success":true,"data":[1,2]}"#).unwrap();
        assert_eq!(ok.into_result(), Ok(vec![1, 2]));

        let err: ApiResponse<Vec<i32>> =
            serde_json::from_str(r#"{"success":false,"error":"Email deja folosit"}"#).unwrap();
        assert_eq!(err.into_result(), Err("Email deja folosit".to_string()));

        let empty: ApiResponse<Vec<i32>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(empty.into_result().is_err());
    }

    #[test]
    fn test_error_skips_data() {
        let json = serde_json::to_value(ApiResponse::<()>::error("x")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "x"}));
    }
}
