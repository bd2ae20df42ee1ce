use reqwest::Response;
use serde::Serialize;

use crate::servers::api::connection_info::ConnectionInfo;

/// API Client
pub struct Client {
    connection_info: ConnectionInfo,
    base_path: String,
}

impl Client {
    pub fn new(connection_info: ConnectionInfo) -> Self {
        Self {
            connection_info,
            base_path: "/api/".to_string(),
        }
    }

    pub async fn list_credentials(&self) -> Response {
        self.get_request("keys").await
    }

    pub async fn get_credential(&self, id: i64) -> Response {
        self.get_request(&format!("keys/{id}")).await
    }

    pub async fn add_credential(&self, form: &AddCredentialForm) -> Response {
        self.post_form("keys", form).await
    }

    pub async fn rotate_credential(&self, id: i64) -> Response {
        self.put(&format!("keys/{id}")).await
    }

    pub async fn delete_credential(&self, id: i64) -> Response {
        self.delete(&format!("keys/{id}")).await
    }

    pub async fn check_key(&self, form: &CheckKeyForm) -> Response {
        self.post_form("check", form).await
    }

    /// It requests the protected sample resource, optionally presenting a key
    /// in the `x-api-key` header.
    pub async fn get_secret(&self, api_key: Option<&str>) -> Response {
        let url = format!("http://{}/secret", &self.connection_info.bind_address);

        let request = reqwest::Client::new().get(url);

        let request = match api_key {
            Some(api_key) => request.header("x-api-key", api_key),
            None => request,
        };

        request.send().await.unwrap()
    }

    pub async fn get_request(&self, path: &str) -> Response {
        get(&self.base_url(path)).await
    }

    pub async fn post_form<T: Serialize + ?Sized>(&self, path: &str, form: &T) -> Response {
        reqwest::Client::new().post(self.base_url(path)).json(&form).send().await.unwrap()
    }

    async fn put(&self, path: &str) -> Response {
        reqwest::Client::new().put(self.base_url(path)).send().await.unwrap()
    }

    async fn delete(&self, path: &str) -> Response {
        reqwest::Client::new().delete(self.base_url(path)).send().await.unwrap()
    }

    fn base_url(&self, path: &str) -> String {
        format!("http://{}{}{path}", &self.connection_info.bind_address, &self.base_path)
    }
}

pub async fn get(path: &str) -> Response {
    reqwest::Client::builder().build().unwrap().get(path).send().await.unwrap()
}

#[derive(Serialize, Debug)]
pub struct AddCredentialForm {
    pub name: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct CheckKeyForm {
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}
