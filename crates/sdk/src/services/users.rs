//! Users service
//!
//! Service for administrative user accounts.

use super::{require, require_id};
use crate::client::{ApiResponse, Client};
use crate::error::SdkResult;
use crate::models::{User, UserDetails, UserSearchQuery};

/// Service for user operations
#[derive(Clone)]
pub struct UsersService {
    client: Client,
}

impl UsersService {
    /// Create a new users service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Get a user by id
    pub async fn get_user_by_id(&self, user_id: u64) -> SdkResult<ApiResponse<UserDetails>> {
        require_id("userId", user_id)?;
        let id = user_id.to_string();
        self.client
            .get(&["admin", "user-admin", id.as_str()])
            .await
    }

    /// Create a user
    pub async fn create_user(&self, user: &User) -> SdkResult<ApiResponse<UserDetails>> {
        self.client.post(&["admin", "user-admin"], user).await
    }

    /// Update a user
    pub async fn update_user(
        &self,
        user_id: u64,
        user: &User,
    ) -> SdkResult<ApiResponse<UserDetails>> {
        require_id("userId", user_id)?;
        let id = user_id.to_string();
        self.client
            .put(&["admin", "user-admin", id.as_str()], user)
            .await
    }

    /// Delete a user
    pub async fn delete_user(&self, user_id: u64) -> SdkResult<ApiResponse<bool>> {
        require_id("userId", user_id)?;
        let id = user_id.to_string();
        let result = self
            .client
            .delete(&["admin", "user-admin", id.as_str()])
            .await?;
        Ok(result.map(|_| true))
    }

    /// Search users by name, username or email
    ///
    /// The query is sent as the `q` parameter and escaped by the SDK.
    pub async fn search_users(&self, query: &str) -> SdkResult<ApiResponse<Vec<UserDetails>>> {
        require("query", query)?;
        let query = UserSearchQuery {
            q: query.to_string(),
        };
        self.client
            .get_with_query(&["admin", "user-admin", "search"], &query)
            .await
    }
}
