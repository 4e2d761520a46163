use super::{Actor, Outcome};
use crate::api::{OrgQuota, Warnings};
use crate::error::CliError;

/// A limit where `None` means unlimited.
pub type NullInt = Option<i64>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationQuota {
    pub guid: String,
    pub name: String,

    pub total_memory: NullInt,
    pub instance_memory: NullInt,
    pub total_app_instances: NullInt,

    pub total_service_instances: NullInt,
    pub paid_service_plans: bool,

    pub total_routes: NullInt,
    pub total_route_ports: NullInt,
}

impl From<OrgQuota> for OrganizationQuota {
    fn from(quota: OrgQuota) -> Self {
        Self {
            guid: quota.guid,
            name: quota.name,
            total_memory: quota.apps.total_memory_in_mb,
            instance_memory: quota.apps.per_process_memory_in_mb,
            total_app_instances: quota.apps.total_instances,
            total_service_instances: quota.services.total_service_instances,
            paid_service_plans: quota.services.paid_services_allowed,
            total_routes: quota.routes.total_routes,
            total_route_ports: quota.routes.total_reserved_ports,
        }
    }
}

impl Actor<'_> {
    pub fn get_organization_quotas(&self) -> Outcome<Vec<OrganizationQuota>> {
        match self.client.get_organization_quotas(&[]) {
            Ok((quotas, warnings)) => (
                Ok(quotas.into_iter().map(OrganizationQuota::from).collect()),
                warnings,
            ),
            Err(e) => (Err(e), Warnings::new()),
        }
    }

    pub fn get_organization_quota_by_name(&self, name: &str) -> Outcome<OrganizationQuota> {
        let (quotas, warnings) = match self.client.get_organization_quotas(&[name.to_string()]) {
            Ok(reply) => reply,
            Err(e) => return (Err(e), Warnings::new()),
        };

        let quota = quotas
            .into_iter()
            .next()
            .map(OrganizationQuota::from)
            .ok_or_else(|| CliError::OrganizationQuotaNotFound {
                name: name.to_string(),
            });
        (quota, warnings)
    }
}
