use keywarden::servers::apis::v1::context::credential::resources::{CredentialResource, RotatedCredentialResource};
use keywarden::servers::apis::v1::responses::ActionMessage;
use reqwest::Response;

// Resource responses

pub async fn assert_credential_utf8(response: Response) -> CredentialResource {
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json; charset=utf-8"
    );

    response.json::<CredentialResource>().await.unwrap()
}

pub async fn assert_credential_list_utf8(response: Response) -> Vec<CredentialResource> {
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json; charset=utf-8"
    );

    response.json::<Vec<CredentialResource>>().await.unwrap()
}

pub async fn assert_rotated_credential_utf8(response: Response) -> RotatedCredentialResource {
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json; charset=utf-8"
    );

    response.json::<RotatedCredentialResource>().await.unwrap()
}

// OK responses

pub async fn assert_ok_message(response: Response, message: &str) {
    assert_eq!(response.status(), 200);

    let action_message = response.json::<ActionMessage>().await.unwrap();

    assert_eq!(action_message.message, message);
}

// Error responses

pub async fn assert_bad_request(response: Response, reason: &str) {
    assert_eq!(response.status(), 400);
    assert!(response.text().await.unwrap().contains(reason));
}

pub async fn assert_not_found(response: Response) {
    assert_eq!(response.status(), 404);
}

pub async fn assert_credential_missing(response: Response) {
    assert_eq!(response.status(), 401);
    assert!(response.text().await.unwrap().contains("No API key supplied."));
}

pub async fn assert_credential_not_valid(response: Response) {
    assert_eq!(response.status(), 403);
    assert!(response.text().await.unwrap().contains("The API key is not valid."));
}

pub async fn assert_unhandled_rejection(response: Response, reason: &str) {
    assert_eq!(response.status(), 500);

    let reason_text = format!("Unhandled rejection: Err {{ reason: \"{reason}");
    let body = response.text().await.unwrap();

    assert!(
        body.contains(&reason_text),
        ":\n  response: `\"{body}\"`\n  does not contain: `\"{reason_text}\"`."
    );
}
