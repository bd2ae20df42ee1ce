use std::str::FromStr;

use keywarden::core::auth::Key;
use keywarden_test_helpers::configuration;
use tracing::level_filters::LevelFilter;

use crate::common::logging::{tracing_stderr_init, INIT};
use crate::servers::api::v1::asserts::{
    assert_bad_request, assert_credential_list_utf8, assert_credential_utf8, assert_not_found, assert_ok_message,
    assert_rotated_credential_utf8, assert_unhandled_rejection,
};
use crate::servers::api::v1::client::{AddCredentialForm, Client};
use crate::servers::api::{force_database_error, Started};

#[tokio::test]
async fn should_allow_creating_a_new_credential_with_a_generated_key() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info())
        .add_credential(&AddCredentialForm {
            name: Some("Payments service".to_string()),
        })
        .await;

    let credential = assert_credential_utf8(response).await;

    assert_eq!(credential.name, "Payments service");
    assert!(Key::from_str(&credential.key).is_ok());

    // The generated key must validate against the keyring
    assert!(env.keyring.validate(&credential.key).await.is_ok());

    env.stop().await;
}

#[tokio::test]
async fn should_generate_a_different_key_for_every_credential() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let first = assert_credential_utf8(
        client
            .add_credential(&AddCredentialForm {
                name: Some("first".to_string()),
            })
            .await,
    )
    .await;

    let second = assert_credential_utf8(
        client
            .add_credential(&AddCredentialForm {
                name: Some("second".to_string()),
            })
            .await,
    )
    .await;

    assert_ne!(first.key, second.key);

    env.stop().await;
}

#[tokio::test]
async fn should_not_allow_creating_a_credential_without_a_name() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let response = client.add_credential(&AddCredentialForm { name: None }).await;

    assert_bad_request(response, "The name is required.").await;

    let response = client
        .add_credential(&AddCredentialForm {
            name: Some(String::new()),
        })
        .await;

    assert_bad_request(response, "The name is required.").await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_getting_a_credential_by_its_id() {
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

    let found = assert_credential_utf8(client.get_credential(created.id).await).await;

    assert_eq!(found, created);

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_a_credential_that_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).get_credential(404).await;

    assert_not_found(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_list_credentials_with_the_most_recently_created_first() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    let first = assert_credential_utf8(
        client
            .add_credential(&AddCredentialForm {
                name: Some("first".to_string()),
            })
            .await,
    )
    .await;

    let second = assert_credential_utf8(
        client
            .add_credential(&AddCredentialForm {
                name: Some("second".to_string()),
            })
            .await,
    )
    .await;

    let credentials = assert_credential_list_utf8(client.list_credentials().await).await;

    assert_eq!(credentials, vec![second, first]);

    env.stop().await;
}

#[tokio::test]
async fn should_return_the_same_listing_when_there_are_no_changes_in_between() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.get_connection_info());

    client
        .add_credential(&AddCredentialForm {
            name: Some("only one".to_string()),
        })
        .await;

    let first_listing = assert_credential_list_utf8(client.list_credentials().await).await;
    let second_listing = assert_credential_list_utf8(client.list_credentials().await).await;

    assert_eq!(first_listing, second_listing);

    env.stop().await;
}

#[tokio::test]
async fn should_allow_rotating_the_key_of_a_credential() {
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

    assert_eq!(rotated.message, "API key updated.");
    assert_eq!(rotated.credential.id, created.id);
    assert_eq!(rotated.credential.name, created.name);
    assert_ne!(rotated.credential.key, created.key);

    // The old key is permanently invalid; the new one validates
    assert!(env.keyring.validate(&created.key).await.is_err());
    assert!(env.keyring.validate(&rotated.credential.key).await.is_ok());

    env.stop().await;
}

#[tokio::test]
async fn should_fail_rotating_a_credential_that_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).rotate_credential(404).await;

    assert_not_found(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_deleting_a_credential() {
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

    let response = client.delete_credential(created.id).await;

    assert_ok_message(response, "API key deleted.").await;

    // The record is gone
    assert_not_found(client.get_credential(created.id).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_deleting_a_credential_that_does_not_exist() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.get_connection_info()).delete_credential(404).await;

    assert_not_found(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_when_the_credential_cannot_be_created() {
    INIT.call_once(|| {
        tracing_stderr_init(LevelFilter::ERROR);
    });

    let env = Started::new(&configuration::ephemeral().into()).await;

    force_database_error(&env.keyring);

    let response = Client::new(env.get_connection_info())
        .add_credential(&AddCredentialForm {
            name: Some("Payments service".to_string()),
        })
        .await;

    assert_unhandled_rejection(response, "failed to create key: ").await;

    env.stop().await;
}
