use keywarden::core::auth;
use keywarden::servers::apis::v1::context::check::resources::{InvalidKeyReport, ValidKeyReport};
use keywarden_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::assert_credential_utf8;
use crate::servers::api::v1::client::{AddCredentialForm, CheckKeyForm, Client};
use crate::servers::api::Started;

#[tokio::test]
async fn should_report_a_registered_key_as_valid_and_disclose_the_record() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let created = assert_credential_utf8(
        client
            .add_credential(&AddCredentialForm {
                name: Some("Payments service".to_string()),
            })
            .await,
    )
    .await;

    let response = client
        .check_key(&CheckKeyForm {
            api_key: Some(created.key.clone()),
        })
        .await;

    assert_eq!(response.status(), 200);

    let report = response.json::<ValidKeyReport>().await.unwrap();

    assert!(report.valid);
    assert_eq!(report.data, created);

    env.stop().await;
}

#[tokio::test]
async fn should_reject_a_request_without_the_api_key_field() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let response = client.check_key(&CheckKeyForm { api_key: None }).await;

    assert_eq!(response.status(), 400);

    let report = response.json::<InvalidKeyReport>().await.unwrap();

    assert!(!report.valid);

    env.stop().await;
}

#[tokio::test]
async fn should_reject_a_request_with_an_empty_api_key() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let response = client
        .check_key(&CheckKeyForm {
            api_key: Some(String::new()),
        })
        .await;

    assert_eq!(response.status(), 400);

    let report = response.json::<InvalidKeyReport>().await.unwrap();

    assert!(!report.valid);

    env.stop().await;
}

#[tokio::test]
async fn should_reject_a_key_that_is_not_registered() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let unregistered_key = auth::generate();

    let response = client
        .check_key(&CheckKeyForm {
            api_key: Some(unregistered_key.to_string()),
        })
        .await;

    assert_eq!(response.status(), 403);

    let report = response.json::<InvalidKeyReport>().await.unwrap();

    assert!(!report.valid);
    assert_eq!(report.reason, "The API key is not valid.");

    env.stop().await;
}

#[tokio::test]
async fn should_reject_the_key_of_a_deleted_credential() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let created = assert_credential_utf8(
        client
            .add_credential(&AddCredentialForm {
                name: Some("Payments service".to_string()),
            })
            .await,
    )
    .await;

    client.delete_credential(created.id).await;

    let response = client.check_key(&CheckKeyForm { api_key: Some(created.key) }).await;

    assert_eq!(response.status(), 403);

    let report = response.json::<InvalidKeyReport>().await.unwrap();

    assert!(!report.valid);

    env.stop().await;
}
