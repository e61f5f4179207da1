//! API tokens service
//!
//! Service for the tokens that client, frontend and admin SDKs use.

use super::require;
use crate::client::{ApiResponse, Client};
use crate::error::SdkResult;
use crate::models::{AllApiTokensResponse, ApiToken, ApiTokenUpdate};
use reqwest::Method;

/// Service for API token operations
#[derive(Clone)]
pub struct ApiTokensService {
    client: Client,
}

impl ApiTokensService {
    /// Create a new API tokens service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all API tokens
    pub async fn get_all_api_tokens(&self) -> SdkResult<ApiResponse<AllApiTokensResponse>> {
        self.client.get(&["admin", "api-tokens"]).await
    }

    /// Create an API token
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use unleash_admin_sdk::{ApiToken, ApiTokenType, Client};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::from_env()?;
    ///
    /// let request = ApiToken::new("checkout-service", ApiTokenType::Client)
    ///     .with_environment("production")
    ///     .with_projects(vec!["default".to_string()]);
    /// let token = client.api_tokens().create_api_token(&request).await?;
    /// println!("issued token for {}", token.data.username);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_api_token(&self, token: &ApiToken) -> SdkResult<ApiResponse<ApiToken>> {
        self.client.post(&["admin", "api-tokens"], token).await
    }

    /// Change the expiry of a token
    pub async fn update_api_token(
        &self,
        secret: &str,
        update: &ApiTokenUpdate,
    ) -> SdkResult<ApiResponse<bool>> {
        require("secret", secret)?;
        let result = self
            .client
            .send_raw(Method::PUT, &["admin", "api-tokens", secret], Some(update))
            .await?;
        Ok(result.map(|_| true))
    }

    /// Revoke a token
    pub async fn delete_api_token(&self, secret: &str) -> SdkResult<ApiResponse<bool>> {
        require("secret", secret)?;
        let result = self.client.delete(&["admin", "api-tokens", secret]).await?;
        Ok(result.map(|_| true))
    }
}
