use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppLimits {
    pub total_memory_in_mb: Option<i64>,
    pub per_process_memory_in_mb: Option<i64>,
    pub total_instances: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceLimits {
    pub paid_services_allowed: bool,
    pub total_service_instances: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RouteLimits {
    pub total_routes: Option<i64>,
    pub total_reserved_ports: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrgQuota {
    pub guid: String,
    pub name: String,
    pub apps: AppLimits,
    pub services: ServiceLimits,
    pub routes: RouteLimits,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Application {
    pub guid: String,
    pub name: String,
}

/// Paginated list envelope. Only the first page is read.
#[derive(Debug, Deserialize)]
pub(super) struct Page<T> {
    pub resources: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct RootDocument {
    pub links: RootLinks,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct RootLinks {
    pub cloud_controller_v3: Option<Link>,
    pub app_ssh: Option<Link>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct Link {
    pub href: String,
    pub meta: LinkMeta,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct LinkMeta {
    pub version: String,
}

/// What the API root advertises about the deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootInfo {
    pub api_version: String,
    pub ssh_endpoint: String,
}

impl From<RootDocument> for RootInfo {
    fn from(doc: RootDocument) -> Self {
        Self {
            api_version: doc
                .links
                .cloud_controller_v3
                .map(|link| link.meta.version)
                .unwrap_or_default(),
            ssh_endpoint: doc.links.app_ssh.map(|link| link.href).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct ErrorDocument {
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct ErrorEntry {
    pub detail: String,
}
