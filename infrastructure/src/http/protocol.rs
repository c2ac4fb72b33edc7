//! Wire types for the sentiment service REST API.
//!
//! | Call | Method | Path |
//! |---|---|---|
//! | Token exchange | POST (form) | `/token` |
//! | User info | GET | `/users/me/` |
//! | Predict | POST (JSON) | `/predict` |

use sentiment_domain::PredictionResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TOKEN_PATH: &str = "token";
pub const USER_INFO_PATH: &str = "users/me/";
pub const PREDICT_PATH: &str = "predict";

/// Form body of `POST /token`
#[derive(Debug, Serialize)]
pub struct TokenForm<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Success body of `POST /token`
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// JSON body of `POST /predict`
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub review: &'a str,
}

/// Success body of `POST /predict`
///
/// Both fields are optional on the wire: a missing label becomes `"Unknown"`
/// and a missing or non-numeric confidence becomes `0.0`.
#[derive(Debug, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(default)]
    pub sentiment: Option<Value>,
    #[serde(rename = "Model Confidence Score", default)]
    pub confidence: Option<Value>,
}

impl PredictResponse {
    pub fn into_result(self) -> PredictionResult {
        let label = match self.sentiment {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        };
        let confidence = self.confidence.as_ref().and_then(Value::as_f64);
        PredictionResult::from_parts(label, confidence)
    }
}
