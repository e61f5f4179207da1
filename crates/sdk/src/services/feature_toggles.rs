//! Feature toggles service
//!
//! Service for managing feature toggles and their per-environment strategies.

use super::require;
use crate::client::{ApiResponse, Client};
use crate::error::SdkResult;
use crate::models::{FeatureStrategy, FeatureToggle};
use reqwest::{Method, StatusCode};

/// Service for feature toggle operations
#[derive(Clone)]
pub struct FeatureTogglesService {
    client: Client,
}

impl FeatureTogglesService {
    /// Create a new feature toggles service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get a feature toggle by name
    pub async fn get_feature_by_name(
        &self,
        project_id: &str,
        feature_name: &str,
    ) -> SdkResult<ApiResponse<FeatureToggle>> {
        require("projectId", project_id)?;
        require("featureName", feature_name)?;
        self.client
            .get(&["admin", "projects", project_id, "features", feature_name])
            .await
    }

    /// List the feature toggles of a project
    pub async fn get_features_by_project(
        &self,
        project_id: &str,
    ) -> SdkResult<ApiResponse<Vec<FeatureToggle>>> {
        require("projectId", project_id)?;
        self.client
            .get(&["admin", "projects", project_id, "features"])
            .await
    }

    /// Create a feature toggle in a project
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use unleash_admin_sdk::{Client, FeatureToggle};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::from_env()?;
    ///
    /// let toggle = FeatureToggle::new("new-checkout", "release")
    ///     .with_description("Rewritten checkout flow");
    /// let created = client.feature_toggles().create_feature("default", &toggle).await?;
    /// println!("Created {}", created.data.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_feature(
        &self,
        project_id: &str,
        feature: &FeatureToggle,
    ) -> SdkResult<ApiResponse<FeatureToggle>> {
        require("projectId", project_id)?;
        self.client
            .post(&["admin", "projects", project_id, "features"], feature)
            .await
    }

    /// Update a feature toggle, addressed by `feature.name`
    pub async fn update_feature(
        &self,
        project_id: &str,
        feature: &FeatureToggle,
    ) -> SdkResult<ApiResponse<FeatureToggle>> {
        require("projectId", project_id)?;
        require("featureName", &feature.name)?;
        self.client
            .put(
                &["admin", "projects", project_id, "features", feature.name.as_str()],
                feature,
            )
            .await
    }

    /// Archive a feature toggle
    ///
    /// `data` is `true` only when the server answers `202 Accepted`.
    pub async fn archive_feature(
        &self,
        project_id: &str,
        feature_name: &str,
    ) -> SdkResult<ApiResponse<bool>> {
        require("projectId", project_id)?;
        require("featureName", feature_name)?;
        let result = self
            .client
            .delete(&["admin", "projects", project_id, "features", feature_name])
            .await?;
        let archived = result.status() == StatusCode::ACCEPTED;
        Ok(result.map(|_| archived))
    }

    /// Add a strategy to a feature toggle in an environment
    pub async fn add_strategy_to_feature(
        &self,
        project_id: &str,
        feature_name: &str,
        environment: &str,
        strategy: &FeatureStrategy,
    ) -> SdkResult<ApiResponse<FeatureStrategy>> {
        require("projectId", project_id)?;
        require("featureName", feature_name)?;
        require("environment", environment)?;
        self.client
            .post(
                &[
                    "admin",
                    "projects",
                    project_id,
                    "features",
                    feature_name,
                    "environments",
                    environment,
                    "strategies",
                ],
                strategy,
            )
            .await
    }

    /// Update a strategy, addressed by `strategy.id`
    pub async fn update_feature_strategy(
        &self,
        project_id: &str,
        feature_name: &str,
        environment: &str,
        strategy: &FeatureStrategy,
    ) -> SdkResult<ApiResponse<FeatureStrategy>> {
        require("projectId", project_id)?;
        require("featureName", feature_name)?;
        require("environment", environment)?;
        let strategy_id = strategy.id.as_deref().unwrap_or_default();
        require("strategyId", strategy_id)?;
        self.client
            .put(
                &[
                    "admin",
                    "projects",
                    project_id,
                    "features",
                    feature_name,
                    "environments",
                    environment,
                    "strategies",
                    strategy_id,
                ],
                strategy,
            )
            .await
    }

    /// Remove a strategy from a feature toggle in an environment
    pub async fn delete_strategy_from_feature(
        &self,
        project_id: &str,
        feature_name: &str,
        environment: &str,
        strategy_id: &str,
    ) -> SdkResult<ApiResponse<bool>> {
        require("projectId", project_id)?;
        require("featureName", feature_name)?;
        require("environment", environment)?;
        require("strategyId", strategy_id)?;
        let result = self
            .client
            .delete(&[
                "admin",
                "projects",
                project_id,
                "features",
                feature_name,
                "environments",
                environment,
                "strategies",
                strategy_id,
            ])
            .await?;
        Ok(result.map(|_| true))
    }

    /// Turn a feature toggle on or off in an environment
    pub async fn enable_feature_on_environment(
        &self,
        project_id: &str,
        feature_name: &str,
        environment: &str,
        enabled: bool,
    ) -> SdkResult<ApiResponse<bool>> {
        require("projectId", project_id)?;
        require("featureName", feature_name)?;
        require("environment", environment)?;
        let state = if enabled { "on" } else { "off" };
        let result = self
            .client
            .send_raw(
                Method::POST,
                &[
                    "admin",
                    "projects",
                    project_id,
                    "features",
                    feature_name,
                    "environments",
                    environment,
                    state,
                ],
                Option::<&()>::None,
            )
            .await?;
        Ok(result.map(|_| true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use crate::test_support::MockTransport;
    use std::sync::Arc;

    fn service(transport: Arc<MockTransport>) -> FeatureTogglesService {
        Client::builder()
            .base_url("http://localhost:4242/api/")
            .auth_token("token")
            .transport(transport)
            .build()
            .unwrap()
            .feature_toggles()
    }

    #[tokio::test]
    async fn test_update_strategy_requires_id() {
        let transport = MockTransport::new();
        let toggles = service(transport.clone());

        let err = toggles
            .update_feature_strategy("default", "checkout", "production", &FeatureStrategy::new("default"))
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::RequiredParameter { param: "strategyId" }));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_archive_reports_accepted_only() {
        let transport = MockTransport::new();
        transport.push_response(202, "");
        transport.push_response(200, "");
        let toggles = service(transport);

        assert!(toggles.archive_feature("default", "checkout").await.unwrap().data);
        assert!(!toggles.archive_feature("default", "checkout").await.unwrap().data);
    }

    #[tokio::test]
    async fn test_enable_and_disable_paths() {
        let transport = MockTransport::new();
        transport.push_response(200, "");
        transport.push_response(200, "");
        let toggles = service(transport.clone());

        toggles
            .enable_feature_on_environment("default", "checkout", "production", true)
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().unwrap().url().path(),
            "/api/admin/projects/default/features/checkout/environments/production/on"
        );

        toggles
            .enable_feature_on_environment("default", "checkout", "production", false)
            .await
            .unwrap();
        let request = transport.last_request().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert!(request.body().is_none());
        assert_eq!(
            request.url().path(),
            "/api/admin/projects/default/features/checkout/environments/production/off"
        );
    }
}
