use serde::{Deserialize, Serialize};

/// Form to check the validity of a key.
#[derive(Serialize, Deserialize, Debug)]
pub struct CheckKeyForm {
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}
