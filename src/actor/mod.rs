//! Domain operations built on the API client.
//!
//! Actor functions turn API payloads into the shapes commands display and
//! pass the server's warnings back with every result, failed or not.

mod application;
mod organization_quota;

pub use application::EnvironmentVariable;
pub use organization_quota::{NullInt, OrganizationQuota};

use crate::api::{ControlPlaneClient, Warnings};
use crate::error::Result;

/// A result paired with the warnings collected before it was decided.
pub type Outcome<T> = (Result<T>, Warnings);

pub struct Actor<'a> {
    client: &'a dyn ControlPlaneClient,
}

impl<'a> Actor<'a> {
    pub fn new(client: &'a dyn ControlPlaneClient) -> Self {
        Self { client }
    }
}
