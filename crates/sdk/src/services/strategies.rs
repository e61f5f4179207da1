//! Strategies service
//!
//! Service for the global strategy definitions that toggles refer to by name.

use super::require;
use crate::client::{ApiResponse, Client};
use crate::error::SdkResult;
use crate::models::{AllStrategiesResponse, Strategy};
use reqwest::Method;

/// Service for strategy operations
#[derive(Clone)]
pub struct StrategiesService {
    client: Client,
}

impl StrategiesService {
    /// Create a new strategies service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all strategies
    pub async fn get_all_strategies(&self) -> SdkResult<ApiResponse<AllStrategiesResponse>> {
        self.client.get(&["admin", "strategies"]).await
    }

    /// Get a strategy by name
    pub async fn get_strategy_by_name(
        &self,
        strategy_name: &str,
    ) -> SdkResult<ApiResponse<Strategy>> {
        require("strategyName", strategy_name)?;
        self.client
            .get(&["admin", "strategies", strategy_name])
            .await
    }

    /// Create a strategy
    pub async fn create_strategy(&self, strategy: &Strategy) -> SdkResult<ApiResponse<Strategy>> {
        self.client.post(&["admin", "strategies"], strategy).await
    }

    /// Update a strategy, addressed by `strategy.name`
    pub async fn update_strategy(&self, strategy: &Strategy) -> SdkResult<ApiResponse<Strategy>> {
        require("strategyName", &strategy.name)?;
        self.client
            .put(&["admin", "strategies", strategy.name.as_str()], strategy)
            .await
    }

    /// Mark a strategy as deprecated
    pub async fn deprecate_strategy(&self, strategy_name: &str) -> SdkResult<ApiResponse<bool>> {
        self.lifecycle(strategy_name, "deprecate").await
    }

    /// Reactivate a deprecated strategy
    pub async fn reactivate_strategy(&self, strategy_name: &str) -> SdkResult<ApiResponse<bool>> {
        self.lifecycle(strategy_name, "reactivate").await
    }

    async fn lifecycle(&self, strategy_name: &str, action: &str) -> SdkResult<ApiResponse<bool>> {
        require("strategyName", strategy_name)?;
        let result = self
            .client
            .send_raw(
                Method::POST,
                &["admin", "strategies", strategy_name, action],
                Option::<&()>::None,
            )
            .await?;
        Ok(result.map(|_| true))
    }
}
