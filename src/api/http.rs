use super::types::{ErrorDocument, Page, RootDocument};
use super::{Application, ControlPlaneClient, OrgQuota, RootInfo, Warnings};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::project_identity;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const WARNINGS_HEADER: &str = "X-Cf-Warnings";

/// Blocking client for the targeted API, authenticated with the stored token.
pub struct HttpClient {
    client: Client,
    target: String,
    token: String,
}

fn build_client(skip_ssl_validation: bool) -> Result<Client> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(project_identity::USER_AGENT)
        .danger_accept_invalid_certs(skip_ssl_validation)
        .build()
        .map_err(|e| CliError::Other(format!("Failed to build HTTP client: {}", e)))
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self> {
        let target = config.target();
        if target.is_empty() {
            return Err(CliError::NoApiTarget);
        }
        let token = config.access_token();
        if token.is_empty() {
            return Err(CliError::NotLoggedIn);
        }

        Ok(Self {
            client: build_client(config.skip_ssl_validation())?,
            target: target.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.target, path)
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> Result<(T, Warnings)> {
        let (body, warnings) = self.send_raw(request, url)?;
        Ok((serde_json::from_str(&body)?, warnings))
    }

    fn send_raw(&self, request: RequestBuilder, url: &str) -> Result<(String, Warnings)> {
        tracing::debug!(url, "sending request");
        let response = request
            .bearer_auth(&self.token)
            .send()
            .map_err(|e| request_failed(url, e))?;

        let status = response.status();
        let warnings = parse_warnings(response.headers());
        let body = response.text().map_err(|e| request_failed(url, e))?;
        tracing::debug!(url, status = status.as_u16(), "received response");

        check_status(status, &body)?;
        Ok((body, warnings))
    }
}

impl ControlPlaneClient for HttpClient {
    fn get_organization_quotas(&self, names: &[String]) -> Result<(Vec<OrgQuota>, Warnings)> {
        let url = self.url("/v3/organization_quotas");
        let mut request = self.client.get(&url);
        if !names.is_empty() {
            request = request.query(&[("names", names.join(","))]);
        }
        let (page, warnings): (Page<OrgQuota>, _) = self.send(request, &url)?;
        Ok((page.resources, warnings))
    }

    fn get_applications(&self, names: &[String], space_guid: &str) -> Result<(Vec<Application>, Warnings)> {
        let url = self.url("/v3/apps");
        let request = self
            .client
            .get(&url)
            .query(&[("names", names.join(",")), ("space_guids", space_guid.to_string())]);
        let (page, warnings): (Page<Application>, _) = self.send(request, &url)?;
        Ok((page.resources, warnings))
    }

    fn update_application_environment_variables(
        &self,
        app_guid: &str,
        variables: &BTreeMap<String, Option<String>>,
    ) -> Result<Warnings> {
        let url = self.url(&format!("/v3/apps/{}/environment_variables", app_guid));
        let body = serde_json::json!({ "var": variables });
        let request = self
            .client
            .patch(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_string());
        let (_, warnings) = self.send_raw(request, &url)?;
        Ok(warnings)
    }
}

/// Read the unauthenticated API root of `target`.
pub fn fetch_root_info(target: &str, skip_ssl_validation: bool) -> Result<RootInfo> {
    let url = format!("{}/", target.trim_end_matches('/'));
    let response = build_client(skip_ssl_validation)?
        .get(&url)
        .send()
        .map_err(|e| request_failed(&url, e))?;

    let status = response.status();
    let body = response.text().map_err(|e| request_failed(&url, e))?;
    check_status(status, &body)?;

    let doc: RootDocument = serde_json::from_str(&body)?;
    Ok(doc.into())
}

fn request_failed(url: &str, err: reqwest::Error) -> CliError {
    CliError::RequestFailed {
        url: url.to_string(),
        reason: err.to_string(),
    }
}

fn check_status(status: StatusCode, body: &str) -> Result<()> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(CliError::InvalidAuthToken);
    }
    if !status.is_success() {
        return Err(CliError::Api {
            status: status.as_u16(),
            detail: error_detail(body),
        });
    }
    Ok(())
}

pub(super) fn parse_warnings(headers: &HeaderMap) -> Warnings {
    headers
        .get_all(WARNINGS_HEADER)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|warning| !warning.is_empty())
        .map(str::to_string)
        .collect()
}

/// First `detail` of a JSON error document, or the raw body.
pub(super) fn error_detail(body: &str) -> String {
    serde_json::from_str::<ErrorDocument>(body)
        .ok()
        .and_then(|doc| doc.errors.into_iter().map(|e| e.detail).find(|d| !d.is_empty()))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn warnings_are_split_and_trimmed() {
        let mut headers = HeaderMap::new();
        headers.append(WARNINGS_HEADER, HeaderValue::from_static("first, second"));
        headers.append(WARNINGS_HEADER, HeaderValue::from_static("third,"));

        assert_eq!(parse_warnings(&headers), vec!["first", "second", "third"]);
        assert!(parse_warnings(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn error_detail_prefers_the_json_detail() {
        let body = r#"{"errors":[{"detail":"App not staged","title":"CF-Unstaged","code":1}]}"#;
        assert_eq!(error_detail(body), "App not staged");
        assert_eq!(error_detail("  gateway timeout \n"), "gateway timeout");
    }

    #[test]
    fn status_mapping() {
        assert!(check_status(StatusCode::OK, "").is_ok());
        assert!(matches!(
            check_status(StatusCode::UNAUTHORIZED, ""),
            Err(CliError::InvalidAuthToken)
        ));
        assert!(matches!(
            check_status(StatusCode::NOT_FOUND, r#"{"errors":[{"detail":"gone"}]}"#),
            Err(CliError::Api { status: 404, ref detail }) if detail == "gone"
        ));
    }

    #[test]
    fn root_document_conversion() {
        let doc: RootDocument = serde_json::from_str(
            r#"{"links":{
                "cloud_controller_v3":{"href":"https://api.example.com/v3","meta":{"version":"3.150.0"}},
                "app_ssh":{"href":"ssh.example.com:2222","meta":{"host_key_fingerprint":"aa"}}
            }}"#,
        )
        .unwrap();
        let info = RootInfo::from(doc);

        assert_eq!(info.api_version, "3.150.0");
        assert_eq!(info.ssh_endpoint, "ssh.example.com:2222");
    }
}
