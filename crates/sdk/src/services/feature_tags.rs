//! Feature tags service
//!
//! Service for the tags attached to a feature toggle.

use super::require;
use crate::client::{ApiResponse, Client};
use crate::error::SdkResult;
use crate::models::{FeatureTag, FeatureTagsResponse, FeatureTagsUpdate};

/// Service for feature tag operations
#[derive(Clone)]
pub struct FeatureTagsService {
    client: Client,
}

impl FeatureTagsService {
    /// Create a new feature tags service
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List the tags of a feature toggle
    pub async fn get_all_feature_tags(
        &self,
        feature_name: &str,
    ) -> SdkResult<ApiResponse<FeatureTagsResponse>> {
        require("featureName", feature_name)?;
        self.client
            .get(&["admin", "features", feature_name, "tags"])
            .await
    }

    /// Attach tags to a feature toggle
    pub async fn create_feature_tags(
        &self,
        feature_name: &str,
        tags: &[FeatureTag],
    ) -> SdkResult<ApiResponse<FeatureTagsResponse>> {
        require("featureName", feature_name)?;
        self.client
            .post(&["admin", "features", feature_name, "tags"], tags)
            .await
    }

    /// Replace the full tag set of a feature toggle
    pub async fn replace_feature_tags(
        &self,
        feature_name: &str,
        tags: &[FeatureTag],
    ) -> SdkResult<ApiResponse<FeatureTagsResponse>> {
        require("featureName", feature_name)?;
        self.client
            .put(&["admin", "features", feature_name, "tags"], tags)
            .await
    }

    /// Add and remove tags in one call
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use unleash_admin_sdk::{Client, FeatureTag};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::from_env()?;
    ///
    /// let tags = client
    ///     .feature_tags()
    ///     .update_feature_tags(
    ///         "new-checkout",
    ///         vec![FeatureTag::new("simple", "team-payments")],
    ///         vec![FeatureTag::new("simple", "team-web")],
    ///     )
    ///     .await?;
    /// println!("{} tags", tags.data.tags.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_feature_tags(
        &self,
        feature_name: &str,
        added_tags: Vec<FeatureTag>,
        removed_tags: Vec<FeatureTag>,
    ) -> SdkResult<ApiResponse<FeatureTagsResponse>> {
        require("featureName", feature_name)?;
        let update = FeatureTagsUpdate {
            added_tags,
            removed_tags,
        };
        self.client
            .put(&["admin", "features", feature_name, "tags"], &update)
            .await
    }

    /// Detach one tag from a feature toggle
    pub async fn delete_feature_tag(
        &self,
        feature_name: &str,
        tag: &FeatureTag,
    ) -> SdkResult<ApiResponse<bool>> {
        require("featureName", feature_name)?;
        require("tagType", &tag.tag_type)?;
        require("tagValue", &tag.value)?;
        let result = self
            .client
            .delete(&[
                "admin",
                "features",
                feature_name,
                "tags",
                tag.tag_type.as_str(),
                tag.value.as_str(),
            ])
            .await?;
        Ok(result.map(|_| true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockTransport;

    #[tokio::test]
    async fn test_delete_tag_requires_type_and_value() {
        let transport = MockTransport::new();
        let tags = Client::builder()
            .base_url("http://localhost:4242/api")
            .auth_token("token")
            .transport(transport.clone())
            .build()
            .unwrap()
            .feature_tags();

        let err = tags
            .delete_feature_tag("MyToggle", &FeatureTag::new("simple", ""))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "parameter tagValue is required");
        assert_eq!(transport.call_count(), 0);
    }
}
