use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub pharmacy_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub password: String,
    pub confirm: String,
}
