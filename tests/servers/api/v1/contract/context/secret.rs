use keywarden::core::auth;
use keywarden_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_credential_missing, assert_credential_not_valid, assert_credential_utf8, assert_ok_message,
    assert_rotated_credential_utf8,
};
use crate::servers::api::v1::client::{AddCredentialForm, Client};
use crate::servers::api::Started;

#[tokio::test]
async fn should_allow_access_with_a_registered_key() {
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

    let response = client.get_secret(Some(&created.key)).await;

    assert_ok_message(response, "Access granted. The API key is valid.").await;

    env.stop().await;
}

#[tokio::test]
async fn should_deny_access_when_no_key_is_presented() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).get_secret(None).await;

    assert_credential_missing(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_deny_access_with_a_key_that_is_not_registered() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let unregistered_key = auth::generate();

    let response = Client::new(env.get_connection_info())
        .get_secret(Some(&unregistered_key.to_string()))
        .await;

    assert_credential_not_valid(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_deny_access_with_the_previous_key_after_a_rotation() {
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

    let rotated = assert_rotated_credential_utf8(client.rotate_credential(created.id).await).await;

    assert_credential_not_valid(client.get_secret(Some(&created.key)).await).await;
    assert_ok_message(
        client.get_secret(Some(&rotated.credential.key)).await,
        "Access granted. The API key is valid.",
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_deny_access_after_the_credential_is_deleted() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    // Create a credential, reach the protected resource, delete the
    // credential and check that access is denied afterwards.

    let created = assert_credential_utf8(
        client
            .add_credential(&AddCredentialForm {
                name: Some("svc".to_string()),
            })
            .await,
    )
    .await;

    assert_ok_message(
        client.get_secret(Some(&created.key)).await,
        "Access granted. The API key is valid.",
    )
    .await;

    assert_ok_message(client.delete_credential(created.id).await, "API key deleted.").await;

    assert_credential_not_valid(client.get_secret(Some(&created.key)).await).await;

    env.stop().await;
}
