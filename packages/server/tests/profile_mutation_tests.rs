//! Profile mutation tests: activate/deactivate toggles, detail updates,
//! and the password reset flow against the hosted provider + mailer.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use serde_json::json;
use server_core::domains::identity::Role;

#[tokio::test]
async fn deactivate_without_reason_uses_the_default() {
    let harness = TestHarness::new();
    let id = harness.profile_id(Role::Staff);

    let (status, body) = harness
        .request(
            "POST",
            &format!("/api/profiles/{}/deactivate", id),
            Some("admin-token"),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["is_active"], false);
    assert_eq!(
        body["data"]["deactivation_reason"],
        "Account suspended for review"
    );
}

#[tokio::test]
async fn deactivate_keeps_a_supplied_reason() {
    let harness = TestHarness::new();
    let id = harness.profile_id(Role::Staff);

    let (_, body) = harness
        .request(
            "POST",
            &format!("/api/profiles/{}/deactivate", id),
            Some("admin-token"),
            Some(json!({ "reason": "Left the company" })),
        )
        .await;

    assert_eq!(body["data"]["deactivation_reason"], "Left the company");
}

#[tokio::test]
async fn activate_toggle_is_idempotent() {
    let harness = TestHarness::new();
    let id = harness.profile_id(Role::Staff);
    let uri = format!("/api/profiles/{}/activate", id);

    // Two activations in a row leave the flag set.
    for _ in 0..2 {
        let (status, body) = harness.request("POST", &uri, Some("admin-token"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["is_active"], true);
    }
}

#[tokio::test]
async fn activate_clears_the_deactivation_reason() {
    let harness = TestHarness::new();
    let id = harness.profile_id(Role::Staff);

    harness
        .request(
            "POST",
            &format!("/api/profiles/{}/deactivate", id),
            Some("admin-token"),
            None,
        )
        .await;
    let (_, body) = harness
        .request(
            "POST",
            &format!("/api/profiles/{}/activate", id),
            Some("admin-token"),
            None,
        )
        .await;

    assert_eq!(body["data"]["is_active"], true);
    assert_eq!(body["data"]["deactivation_reason"], serde_json::Value::Null);
}

#[tokio::test]
async fn update_with_empty_patch_is_rejected() {
    let harness = TestHarness::new();
    let id = harness.profile_id(Role::Staff);

    let (status, body) = harness
        .request(
            "PATCH",
            &format!("/api/profiles/{}", id),
            Some("admin-token"),
            Some(json!({})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Nothing to update");
}

#[tokio::test]
async fn update_changes_role_and_display_name() {
    let harness = TestHarness::new();
    let id = harness.profile_id(Role::Staff);

    let (status, body) = harness
        .request(
            "PATCH",
            &format!("/api/profiles/{}", id),
            Some("admin-token"),
            Some(json!({ "display_name": "Dana Front", "role": "reception" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["display_name"], "Dana Front");
    assert_eq!(body["data"]["role"], "reception");
}

#[tokio::test]
async fn reset_password_for_unknown_profile_is_not_found() {
    let harness = TestHarness::new();
    let unknown = uuid::Uuid::new_v4();

    let (status, body) = harness
        .request(
            "POST",
            &format!("/api/profiles/{}/reset-password", unknown),
            Some("admin-token"),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
    assert!(harness.mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn reset_password_mails_a_recovery_link() {
    let harness = TestHarness::new();
    let id = harness.profile_id(Role::Reception);

    let (status, body) = harness
        .request(
            "POST",
            &format!("/api/profiles/{}/reset-password", id),
            Some("admin-token"),
            None,
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Password reset email sent");

    let sent = harness.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "reception@frontdesk.example");
    assert_eq!(
        harness.provider.recovery_requests.lock().unwrap().as_slice(),
        &["reception@frontdesk.example".to_string()]
    );
}
