//! Variants service

use super::require;
use crate::client::{ApiResponse, Client};
use crate::error::SdkResult;
use crate::models::{Variant, VariantsResponse};

/// Service for toggle variant operations
#[derive(Clone)]
pub struct VariantsService {
    client: Client,
}

impl VariantsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Overwrite all variants of a feature toggle
    ///
    /// Weights of `variable` variants are redistributed by the server.
    pub async fn add_variants_for_feature_toggle(
        &self,
        project_id: &str,
        feature_name: &str,
        variants: &[Variant],
    ) -> SdkResult<ApiResponse<VariantsResponse>> {
        require("projectId", project_id)?;
        require("featureName", feature_name)?;
        self.client
            .put(
                &[
                    "admin",
                    "projects",
                    project_id,
                    "features",
                    feature_name,
                    "variants",
                ],
                variants,
            )
            .await
    }
}
