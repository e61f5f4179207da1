//! Integration tests for feature types and feature tags

mod common;

use common::setup;
use serde_json::json;
use unleash_admin_sdk::{FeatureTag, FeatureType};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_all_feature_types() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/feature-types"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": 1,
            "types": [{"id": "release", "name": "Release"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.feature_types().get_all_feature_types().await.unwrap();

    assert_eq!(result.data.version, 1);
    assert_eq!(
        result.data.types,
        vec![FeatureType {
            id: "release".to_string(),
            name: "Release".to_string(),
            ..FeatureType::default()
        }]
    );
}

#[tokio::test]
async fn test_tag_lifecycle() {
    let (server, client) = setup().await;
    let tags_path = "/api/admin/features/MyToggle/tags";
    let simple = FeatureTag::new("simple", "checkout");
    let team = FeatureTag::new("team", "payments");

    Mock::given(method("GET"))
        .and(path(tags_path))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": 1,
            "tags": [simple]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(tags_path))
        .and(body_json(json!([{"type": "simple", "value": "checkout"}])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "version": 1,
            "tags": [simple]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(tags_path))
        .and(body_json(json!({
            "addedTags": [{"type": "team", "value": "payments"}],
            "removedTags": [{"type": "simple", "value": "checkout"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": 1,
            "tags": [team]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{}/team/payments", tags_path)))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let tags = client.feature_tags();

    let current = tags.get_all_feature_tags("MyToggle").await.unwrap();
    assert_eq!(current.data.tags, vec![simple.clone()]);

    let created = tags
        .create_feature_tags("MyToggle", &[simple.clone()])
        .await
        .unwrap();
    assert_eq!(created.status().as_u16(), 201);

    let updated = tags
        .update_feature_tags("MyToggle", vec![team.clone()], vec![simple])
        .await
        .unwrap();
    assert_eq!(updated.data.tags, vec![team.clone()]);

    assert!(tags.delete_feature_tag("MyToggle", &team).await.unwrap().data);
}

#[tokio::test]
async fn test_replace_feature_tags_sends_bare_list() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/features/MyToggle/tags"))
        .and(body_json(json!([{"type": "simple", "value": "beta"}])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "version": 1,
            "tags": [{"type": "simple", "value": "beta"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .feature_tags()
        .replace_feature_tags("MyToggle", &[FeatureTag::new("simple", "beta")])
        .await
        .unwrap();
    assert_eq!(result.data.tags.len(), 1);
}

#[tokio::test]
async fn test_feature_name_is_escaped_as_one_segment() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/features/team%2Fflag/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": 1, "tags": []})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .feature_tags()
        .get_all_feature_tags("team/flag")
        .await
        .unwrap();
    assert!(result.data.tags.is_empty());
}

#[tokio::test]
async fn test_missing_tags_field_defaults_to_empty() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/features/MyToggle/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"version": 1})))
        .mount(&server)
        .await;

    let result = client
        .feature_tags()
        .get_all_feature_tags("MyToggle")
        .await
        .unwrap();
    assert_eq!(result.data.version, 1);
    assert!(result.data.tags.is_empty());
}
