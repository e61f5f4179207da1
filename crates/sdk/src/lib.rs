//! # Unleash Admin SDK
//!
//! Typed Rust client for the Unleash feature-flag admin API.
//!
//! The SDK manages flag *metadata*; it does not evaluate flags. It covers:
//!
//! - **Projects**: CRUD and project role assignments
//! - **Feature toggles**: CRUD, archiving, strategies and per-environment state
//! - **Feature types and tags**
//! - **Strategies**: global strategy definitions and their lifecycle
//! - **Variants**
//! - **Users** and **API tokens**
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use unleash_admin_sdk::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .base_url("https://unleash.example.com/api")
//!         .auth_token("*:*.admin-token")
//!         .build()?;
//!
//!     let toggles = client.feature_toggles().get_features_by_project("default").await?;
//!     for toggle in toggles.data {
//!         println!("{} ({})", toggle.name, toggle.feature_type);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! The SDK can be configured through environment variables:
//!
//! - `UNLEASH_API_URL`: API endpoint URL
//! - `UNLEASH_AUTH_TOKEN`: token sent verbatim in the `Authorization` header
//! - `UNLEASH_TIMEOUT`: request timeout in seconds
//! - `UNLEASH_DEBUG`: log request and response bodies at debug level
//!
//! ## Error Handling
//!
//! Every operation returns `SdkResult<ApiResponse<T>>`. Errors raised after
//! the server answered keep the response, so status and headers stay
//! available:
//!
//! ```rust,no_run
//! use unleash_admin_sdk::{Client, SdkError};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = Client::from_env()?;
//! match client.projects().get_project_by_id("payments").await {
//!     Ok(project) => println!("Found: {}", project.data.name),
//!     Err(e) if e.is_not_found() => println!("No such project"),
//!     Err(SdkError::RequiredParameter { param }) => println!("missing {}", param),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Custom transports
//!
//! Requests go through an [`HttpTransport`]. Supply your own with
//! [`ClientBuilder::transport`] to add instrumentation or to test without a
//! network.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod transport;

#[cfg(test)]
mod test_support;

// Re-exports
pub use client::{ApiResponse, Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{SdkError, SdkResult};
pub use models::*;
pub use transport::{ApiRequest, HttpTransport, ReqwestTransport, Response};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{ApiResponse, Client, ClientBuilder};
    pub use crate::config::ClientConfig;
    pub use crate::error::{SdkError, SdkResult};
    pub use crate::models::*;
    pub use crate::services::*;
    pub use crate::transport::{HttpTransport, Response};
}

/// SDK version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default `User-Agent` header value
pub const USER_AGENT: &str = concat!("unleash-admin-sdk/", env!("CARGO_PKG_VERSION"));
