//! Projects service
//!
//! Service for managing projects and project role assignments.

use super::{require, require_id};
use crate::client::{ApiResponse, Client};
use crate::error::SdkResult;
use crate::models::{
    AllProjectsResponse, CreateProjectResponse, Project, ProjectDetails, UserRoleResponse,
};
use reqwest::{Method, StatusCode};

/// Service for project operations
#[derive(Clone)]
pub struct ProjectsService {
    client: Client,
}

impl ProjectsService {
    /// Create a new projects service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all projects
    pub async fn list_projects(&self) -> SdkResult<ApiResponse<AllProjectsResponse>> {
        self.client.get(&["admin", "projects"]).await
    }

    /// Get a project by its identifier
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use unleash_admin_sdk::Client;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::builder()
    ///     .base_url("https://unleash.example.com/api")
    ///     .auth_token("*:*.admin-token")
    ///     .build()?;
    ///
    /// let project = client.projects().get_project_by_id("default").await?;
    /// println!("{} has {} environments", project.data.name, project.data.environments.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_project_by_id(
        &self,
        project_id: &str,
    ) -> SdkResult<ApiResponse<ProjectDetails>> {
        require("projectId", project_id)?;
        self.client.get(&["admin", "projects", project_id]).await
    }

    /// Create a project
    pub async fn create_project(
        &self,
        project: &Project,
    ) -> SdkResult<ApiResponse<CreateProjectResponse>> {
        self.client.post(&["admin", "projects"], project).await
    }

    /// Update a project
    pub async fn update_project(
        &self,
        project_id: &str,
        project: &Project,
    ) -> SdkResult<ApiResponse<CreateProjectResponse>> {
        require("projectId", project_id)?;
        self.client
            .put(&["admin", "projects", project_id], project)
            .await
    }

    /// Delete a project
    ///
    /// The server acknowledges with `204 No Content`; any other success
    /// status is read as an error envelope.
    pub async fn delete_project(&self, project_id: &str) -> SdkResult<ApiResponse<bool>> {
        require("projectId", project_id)?;
        let result = self.client.delete(&["admin", "projects", project_id]).await?;
        Client::expect_status(&result.response, StatusCode::NO_CONTENT)?;
        Ok(result.map(|_| true))
    }

    /// Grant a user a role in a project
    pub async fn add_user_role(
        &self,
        user_id: u64,
        project_id: &str,
        role_id: u64,
    ) -> SdkResult<ApiResponse<UserRoleResponse>> {
        self.role_request(Method::PUT, project_id, user_id, role_id)
            .await
    }

    /// Change the role of a user in a project
    pub async fn update_user_role(
        &self,
        project_id: &str,
        user_id: u64,
        role_id: u64,
    ) -> SdkResult<ApiResponse<UserRoleResponse>> {
        self.role_request(Method::POST, project_id, user_id, role_id)
            .await
    }

    /// Remove a role from a user in a project
    pub async fn delete_user_role(
        &self,
        project_id: &str,
        user_id: u64,
        role_id: u64,
    ) -> SdkResult<ApiResponse<bool>> {
        validate_role_ids(project_id, user_id, role_id)?;
        let user = user_id.to_string();
        let role = role_id.to_string();
        let segments = role_segments(project_id, &user, &role);
        let result = self.client.delete(&segments).await?;
        Client::expect_status(&result.response, StatusCode::OK)?;
        Ok(result.map(|_| true))
    }

    async fn role_request(
        &self,
        method: Method,
        project_id: &str,
        user_id: u64,
        role_id: u64,
    ) -> SdkResult<ApiResponse<UserRoleResponse>> {
        validate_role_ids(project_id, user_id, role_id)?;
        let user = user_id.to_string();
        let role = role_id.to_string();
        let segments = role_segments(project_id, &user, &role);
        let request = self
            .client
            .build_request(method, &segments, Option::<&()>::None)?;

        // the role endpoints answer with an empty body; the assignment is
        // echoed back from the request itself
        let result = self.client.execute_raw(request).await?;
        Client::expect_status(&result.response, StatusCode::OK)?;
        Ok(result.map(|_| UserRoleResponse {
            user_id,
            project_id: project_id.to_string(),
            role_id,
        }))
    }
}

fn role_segments<'a>(project_id: &'a str, user: &'a str, role: &'a str) -> [&'a str; 7] {
    ["admin", "projects", project_id, "users", user, "roles", role]
}

fn validate_role_ids(project_id: &str, user_id: u64, role_id: u64) -> SdkResult<()> {
    require("projectId", project_id)?;
    require_id("userId", user_id)?;
    require_id("roleId", role_id)
}
