//! SDK data models
//!
//! This module provides the data structures used in API requests and responses.
//! Response types tolerate missing fields: anything the server omits falls back
//! to its default value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Project Models
// ============================================================================

/// Project details as returned by `GET admin/projects/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDetails {
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Description
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Health score (0-100)
    pub health: i32,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Names of the environments enabled for the project
    #[serde(deserialize_with = "environment_names")]
    pub environments: Vec<String>,
    /// Feature toggles that belong to the project
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub features: Vec<FeatureToggle>,
}

/// Older servers list project environments as plain names, newer ones as
/// `{"environment": "<name>"}` objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum EnvironmentRef {
    Name(String),
    Object { environment: String },
}

fn environment_names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let refs = Option::<Vec<EnvironmentRef>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(refs
        .into_iter()
        .map(|env| match env {
            EnvironmentRef::Name(name) => name,
            EnvironmentRef::Object { environment } => environment,
        })
        .collect())
}

/// The server sends `null` for unset strings and lists; decode it as empty.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Project create/update payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    /// Project identifier, used in URLs
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Description
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

impl Project {
    /// Create a new project payload
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Project entry in the project list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectSummary {
    /// Project identifier
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Description
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Number of feature toggles in the project
    pub feature_count: u32,
    /// Number of project members
    pub member_count: u32,
    /// Health score (0-100)
    pub health: i32,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Response of `GET admin/projects`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllProjectsResponse {
    /// Schema version
    pub version: u32,
    /// All projects visible to the token
    #[serde(deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectSummary>,
}

/// Response of project create and update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateProjectResponse {
    /// Project identifier
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Description
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Role assignment of a user within a project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRoleResponse {
    /// User identifier
    pub user_id: u64,
    /// Project identifier
    #[serde(deserialize_with = "null_as_default")]
    pub project_id: String,
    /// Role identifier
    pub role_id: u64,
}

// ============================================================================
// Feature Toggle Models
// ============================================================================

/// A feature toggle definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureToggle {
    /// Toggle name, unique across projects
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Description
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Owning project
    #[serde(deserialize_with = "null_as_default")]
    pub project: String,
    /// Feature type, e.g. `release` or `experiment`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub feature_type: String,
    /// Whether the toggle is archived
    pub archived: bool,
    /// Whether the toggle is marked stale
    pub stale: bool,
    /// Whether SDKs emit impression events for this toggle
    pub impression_data: bool,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last time an SDK reported evaluating the toggle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<DateTime<Utc>>,
    /// Per-environment activation state
    #[serde(deserialize_with = "null_as_default")]
    pub environments: Vec<Environment>,
    /// Variants
    #[serde(deserialize_with = "null_as_default")]
    pub variants: Vec<Variant>,
}

impl FeatureToggle {
    /// Create a new toggle payload
    pub fn new(name: impl Into<String>, feature_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            feature_type: feature_type.into(),
            ..Self::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Enable impression data
    pub fn with_impression_data(mut self, enabled: bool) -> Self {
        self.impression_data = enabled;
        self
    }
}

/// Activation state of a toggle in one environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Environment {
    /// Environment name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Environment type, e.g. `development` or `production`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub environment_type: String,
    /// Whether the toggle is enabled in this environment
    pub enabled: bool,
    /// Activation strategies
    #[serde(deserialize_with = "null_as_default")]
    pub strategies: Vec<FeatureStrategy>,
}

/// An activation strategy attached to a toggle in an environment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureStrategy {
    /// Server assigned identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Strategy name, e.g. `flexibleRollout`
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Constraints that must all hold
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub constraints: Vec<Constraint>,
    /// Strategy parameters; their shape depends on the strategy
    #[serde(skip_serializing_if = "Map::is_empty", deserialize_with = "null_as_default")]
    pub parameters: Map<String, Value>,
    /// Evaluation order within the environment
    pub sort_order: i32,
}

impl FeatureStrategy {
    /// Create a new strategy payload
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the identifier, needed for updates
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a parameter
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Add a constraint
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Set the sort order
    pub fn with_sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }
}

/// A context constraint on a strategy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Constraint {
    /// Context field the constraint looks at, e.g. `userId`
    #[serde(deserialize_with = "null_as_default")]
    pub context_name: String,
    /// Operator, e.g. `IN` or `STR_STARTS_WITH`
    #[serde(deserialize_with = "null_as_default")]
    pub operator: String,
    /// Values for list operators
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub values: Vec<String>,
    /// Value for single-value operators
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Compare strings case-insensitively
    pub case_insensitive: bool,
    /// Negate the result
    pub inverted: bool,
}

impl Constraint {
    /// Create an `IN` constraint
    pub fn one_of(context_name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            context_name: context_name.into(),
            operator: "IN".to_string(),
            values,
            ..Self::default()
        }
    }
}

// ============================================================================
// Variant Models
// ============================================================================

/// A weighted payload variant of a toggle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Variant {
    /// Variant name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Weight, out of 1000 across all variants
    pub weight: u32,
    /// `variable` or `fix`
    #[serde(deserialize_with = "null_as_default")]
    pub weight_type: String,
    /// Context field used for stickiness
    #[serde(deserialize_with = "null_as_default")]
    pub stickiness: String,
    /// Context-based overrides
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub overrides: Vec<VariantOverride>,
    /// Payload handed to SDKs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<VariantPayload>,
}

impl Variant {
    /// Create a variable-weight variant with default stickiness
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
            weight_type: "variable".to_string(),
            stickiness: "default".to_string(),
            overrides: Vec::new(),
            payload: None,
        }
    }

    /// Attach a payload
    pub fn with_payload(mut self, payload_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.payload = Some(VariantPayload {
            payload_type: payload_type.into(),
            value: value.into(),
        });
        self
    }

    /// Add an override
    pub fn with_override(mut self, context_name: impl Into<String>, values: Vec<String>) -> Self {
        self.overrides.push(VariantOverride {
            context_name: context_name.into(),
            values,
        });
        self
    }
}

/// Forces a variant for matching context values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariantOverride {
    /// Context field
    #[serde(deserialize_with = "null_as_default")]
    pub context_name: String,
    /// Matching values
    #[serde(deserialize_with = "null_as_default")]
    pub values: Vec<String>,
}

/// Variant payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantPayload {
    /// `string`, `json` or `csv`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub payload_type: String,
    /// Payload value
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

/// Response of the variants endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantsResponse {
    /// Schema version
    pub version: u32,
    /// Variants now set on the toggle
    #[serde(deserialize_with = "null_as_default")]
    pub variants: Vec<Variant>,
}

// ============================================================================
// Feature Type and Tag Models
// ============================================================================

/// A feature type with its expected lifetime
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureType {
    /// Identifier, e.g. `release`
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub id: String,
    /// Display name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Description
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Days after which a toggle of this type is considered stale
    pub lifetime_days: u32,
}

/// Response of `GET admin/feature-types`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllFeatureTypesResponse {
    /// Schema version
    pub version: u32,
    /// Feature types
    #[serde(deserialize_with = "null_as_default")]
    pub types: Vec<FeatureType>,
}

/// A tag on a feature toggle
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureTag {
    /// Tag type, e.g. `simple`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub tag_type: String,
    /// Tag value
    #[serde(deserialize_with = "null_as_default")]
    pub value: String,
}

impl FeatureTag {
    /// Create a tag
    pub fn new(tag_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag_type: tag_type.into(),
            value: value.into(),
        }
    }
}

/// Tags currently attached to a toggle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureTagsResponse {
    /// Schema version
    pub version: u32,
    /// Tags
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<FeatureTag>,
}

/// Incremental tag change
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureTagsUpdate {
    /// Tags to attach
    #[serde(deserialize_with = "null_as_default")]
    pub added_tags: Vec<FeatureTag>,
    /// Tags to detach
    #[serde(deserialize_with = "null_as_default")]
    pub removed_tags: Vec<FeatureTag>,
}

// ============================================================================
// Strategy Models
// ============================================================================

/// A reusable strategy definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Strategy {
    /// Identifier
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub id: String,
    /// Strategy name, used in URLs
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Human readable name
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub display_name: String,
    /// Description
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Whether the strategy can be edited (built-ins cannot)
    pub editable: bool,
    /// Whether the strategy is deprecated
    pub deprecated: bool,
    /// Parameter schema
    #[serde(deserialize_with = "null_as_default")]
    pub parameters: Vec<StrategyParameter>,
}

impl Strategy {
    /// Create a new strategy definition
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Add a parameter to the schema
    pub fn with_parameter(mut self, parameter: StrategyParameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// One parameter in a strategy's schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParameter {
    /// Parameter name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Description
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Whether the parameter must be supplied
    pub required: bool,
    /// `string`, `percentage`, `list`, `number` or `boolean`
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub parameter_type: String,
}

/// Response of `GET admin/strategies`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllStrategiesResponse {
    /// Schema version
    pub version: u32,
    /// Strategies
    #[serde(deserialize_with = "null_as_default")]
    pub strategies: Vec<Strategy>,
}

// ============================================================================
// User Models
// ============================================================================

/// An administrative user account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDetails {
    /// User identifier
    pub id: u64,
    /// Full name
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub name: String,
    /// Username
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub username: String,
    /// Email address
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub email: String,
    /// Avatar URL
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub image_url: String,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Invitation link, only present right after creation
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub invite_link: String,
    /// Whether a welcome email was sent
    pub email_sent: bool,
    /// Root role identifier
    pub root_role: u64,
}

/// User create/update payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Full name
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Username
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    /// Email address
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    /// Root role identifier
    pub root_role: u64,
    /// Send a welcome email
    pub send_email: bool,
}

impl User {
    /// Create a user payload with the given root role
    pub fn new(email: impl Into<String>, root_role: u64) -> Self {
        Self {
            email: email.into(),
            root_role,
            ..Self::default()
        }
    }

    /// Set the full name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Send a welcome email on creation
    pub fn with_send_email(mut self, send_email: bool) -> Self {
        self.send_email = send_email;
        self
    }
}

/// Query string of the user search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct UserSearchQuery {
    /// Free-text search term
    pub q: String,
}

// ============================================================================
// API Token Models
// ============================================================================

/// Kind of API token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiTokenType {
    /// Server-side SDK token
    #[default]
    #[serde(alias = "CLIENT")]
    Client,
    /// Admin API token
    #[serde(alias = "ADMIN")]
    Admin,
    /// Frontend/proxy token
    #[serde(alias = "FRONTEND")]
    Frontend,
}

/// An API token
///
/// The secret is sensitive; the SDK neither persists nor masks it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiToken {
    /// Token secret, assigned by the server
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub secret: String,
    /// Name the token was issued to
    #[serde(deserialize_with = "null_as_default")]
    pub username: String,
    /// Token kind
    #[serde(rename = "type")]
    pub token_type: ApiTokenType,
    /// Environment the token is scoped to
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub environment: String,
    /// Projects the token is scoped to; `*` means all
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub projects: Vec<String>,
    /// Expiry timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiToken {
    /// Create a token request
    pub fn new(username: impl Into<String>, token_type: ApiTokenType) -> Self {
        Self {
            username: username.into(),
            token_type,
            ..Self::default()
        }
    }

    /// Scope the token to an environment
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Scope the token to projects
    pub fn with_projects(mut self, projects: Vec<String>) -> Self {
        self.projects = projects;
        self
    }

    /// Set the expiry
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

/// Response of `GET admin/api-tokens`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllApiTokensResponse {
    /// Tokens
    #[serde(deserialize_with = "null_as_default")]
    pub tokens: Vec<ApiToken>,
}

/// Token update payload; only the expiry can change
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTokenUpdate {
    /// New expiry timestamp
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// Error Models
// ============================================================================

/// Error envelope some endpoints return
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Error details
    pub error: ErrorDetail,
}

/// Error name and message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    /// Error name, e.g. `NotFoundError`
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Human readable message
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}
