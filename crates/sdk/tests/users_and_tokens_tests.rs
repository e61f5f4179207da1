//! Integration tests for users and API tokens

mod common;

use chrono::{TimeZone, Utc};
use common::setup;
use serde_json::json;
use unleash_admin_sdk::{ApiToken, ApiTokenType, ApiTokenUpdate, SdkError, User};
use wiremock::matchers::{any, body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_user_lifecycle() {
    let (server, client) = setup().await;
    let user = User::new("jane@example.com", 2)
        .with_name("Jane Doe")
        .with_send_email(true);

    Mock::given(method("POST"))
        .and(path("/api/admin/user-admin"))
        .and(body_json(json!({
            "name": "Jane Doe",
            "username": "",
            "email": "jane@example.com",
            "rootRole": 2,
            "sendEmail": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 17,
            "name": "Jane Doe",
            "email": "jane@example.com",
            "inviteLink": "http://localhost:4242/new-user?token=abc",
            "emailSent": true,
            "rootRole": 2,
            "createdAt": "2023-05-02T10:00:00.000Z"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/user-admin/17"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 17,
            "name": "Jane Doe",
            "email": "jane@example.com",
            "rootRole": 2
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/user-admin/17"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 17,
            "name": "Jane Smith",
            "email": "jane@example.com",
            "rootRole": 2
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/user-admin/17"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let users = client.users();

    let created = users.create_user(&user).await.unwrap();
    assert_eq!(created.data.id, 17);
    assert!(created.data.email_sent);
    assert_eq!(
        created.data.created_at,
        Some(Utc.with_ymd_and_hms(2023, 5, 2, 10, 0, 0).unwrap())
    );

    let fetched = users.get_user_by_id(17).await.unwrap();
    assert_eq!(fetched.data.name, "Jane Doe");
    assert!(fetched.data.invite_link.is_empty());

    let updated = users
        .update_user(17, &user.clone().with_name("Jane Smith"))
        .await
        .unwrap();
    assert_eq!(updated.data.name, "Jane Smith");

    assert!(users.delete_user(17).await.unwrap().data);
}

#[tokio::test]
async fn test_search_users_encodes_query() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/user-admin/search"))
        .and(query_param("q", "jane doe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 17, "name": "Jane Doe", "email": "jane@example.com"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.users().search_users("jane doe").await.unwrap();

    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].id, 17);
}

#[tokio::test]
async fn test_api_token_lifecycle() {
    let (server, client) = setup().await;
    let secret = "default:development.be44368985f7fb3237c584ef86f3d6bdada42ddbd63a019d26955178";
    let expires_at = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/admin/api-tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "tokens": [{
                "secret": secret,
                "username": "ci",
                "type": "client",
                "environment": "development",
                "projects": ["default"]
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/api-tokens"))
        .and(body_json(json!({
            "username": "ci",
            "type": "client",
            "environment": "development",
            "projects": ["default"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "secret": secret,
            "username": "ci",
            "type": "CLIENT",
            "environment": "development",
            "projects": ["default"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("/api/admin/api-tokens/{}", secret)))
        .and(body_json(json!({"expiresAt": "2030-01-01T00:00:00Z"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/admin/api-tokens/{}", secret)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let tokens = client.api_tokens();

    let all = tokens.get_all_api_tokens().await.unwrap();
    assert_eq!(all.data.tokens.len(), 1);
    assert_eq!(all.data.tokens[0].token_type, ApiTokenType::Client);

    let request = ApiToken::new("ci", ApiTokenType::Client)
        .with_environment("development")
        .with_projects(vec!["default".to_string()]);
    let created = tokens.create_api_token(&request).await.unwrap();
    assert_eq!(created.data.secret, secret);

    let update = ApiTokenUpdate { expires_at };
    assert!(tokens.update_api_token(secret, &update).await.unwrap().data);
    assert!(tokens.delete_api_token(secret).await.unwrap().data);
}

#[tokio::test]
async fn test_delete_api_token_without_secret_makes_no_request() {
    let (server, client) = setup().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client.api_tokens().delete_api_token("").await.unwrap_err();

    assert!(matches!(err, SdkError::RequiredParameter { param: "secret" }));
    assert!(err.response().is_none());
}

#[tokio::test]
async fn test_unauthorized_token_is_reported() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/api-tokens"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"name": "AuthenticationRequired", "message": "You must log in"}
        })))
        .mount(&server)
        .await;

    let err = client.api_tokens().get_all_api_tokens().await.unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert_eq!(
        err.to_string(),
        "HTTP error (401): AuthenticationRequired: You must log in"
    );
}

#[tokio::test]
async fn test_user_with_null_names_decodes() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/user-admin/7"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"id":7,"name":null,"username":null,"email":"jane@example.com"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let result = client.users().get_user_by_id(7).await.unwrap();

    assert_eq!(result.data.id, 7);
    assert_eq!(result.data.name, "");
    assert_eq!(result.data.username, "");
    assert_eq!(result.data.email, "jane@example.com");
}
