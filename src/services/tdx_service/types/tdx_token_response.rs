use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: i64,
}
