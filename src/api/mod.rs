//! Control-plane API client
//!
//! Only the handful of v3 endpoints the shipped commands need. Every call
//! returns the warnings the server attached to the response alongside the
//! decoded body.

mod http;
mod types;

pub use http::{HttpClient, fetch_root_info};
pub use types::{AppLimits, Application, OrgQuota, RootInfo, RouteLimits, ServiceLimits};

use crate::error::Result;
use std::collections::BTreeMap;

/// Warnings returned by the server, in the order it sent them.
pub type Warnings = Vec<String>;

pub trait ControlPlaneClient {
    /// Organization quotas, optionally filtered by name.
    fn get_organization_quotas(&self, names: &[String]) -> Result<(Vec<OrgQuota>, Warnings)>;

    fn get_applications(&self, names: &[String], space_guid: &str) -> Result<(Vec<Application>, Warnings)>;

    /// Merge `variables` into the app's environment. A `None` value removes the variable.
    fn update_application_environment_variables(
        &self,
        app_guid: &str,
        variables: &BTreeMap<String, Option<String>>,
    ) -> Result<Warnings>;
}
