//! Organization quota commands
//!
//! `org-quotas` lists every organization quota, `org-quota` shows one.

use super::{Wiring, display_warnings, wired};
use crate::actor::{Actor, NullInt, OrganizationQuota};
use crate::api::HttpClient;
use crate::cli::lifecycle::{CommandHandler, Lifecycle, Session};
use crate::error::Result;
use clap::Args;

const COLUMNS: [&str; 8] = [
    "name",
    "total memory",
    "instance memory",
    "routes",
    "service instances",
    "paid service plans",
    "app instances",
    "route ports",
];

#[derive(Args, Default)]
pub struct OrgQuotasCommand {
    #[arg(skip)]
    wiring: Option<Wiring>,
}

impl CommandHandler for OrgQuotasCommand {
    fn lifecycle(&mut self) -> Option<&mut dyn Lifecycle> {
        Some(self)
    }
}

impl Lifecycle for OrgQuotasCommand {
    fn setup(&mut self, session: &Session<'_>) -> Result<()> {
        self.wiring = Some(Wiring::from_session(session));
        Ok(())
    }

    fn execute(&mut self, _args: &[String]) -> Result<()> {
        let Wiring { config, ui } = wired(&self.wiring)?;
        let client = HttpClient::new(config)?;

        ui.display_text("Getting org quotas...", &[]);
        ui.display_newline();

        let (quotas, warnings) = Actor::new(&client).get_organization_quotas();
        display_warnings(ui.as_ref(), &warnings);
        let quotas = quotas?;

        if quotas.is_empty() {
            ui.display_text("No organization quotas found.", &[]);
        } else {
            ui.display_text(&quota_table(&quotas), &[]);
        }
        Ok(())
    }
}

#[derive(Args, Default)]
pub struct OrgQuotaCommand {
    /// Name of the organization quota
    #[arg(value_name = "QUOTA_NAME")]
    quota_name: String,

    #[arg(skip)]
    wiring: Option<Wiring>,
}

impl CommandHandler for OrgQuotaCommand {
    fn lifecycle(&mut self) -> Option<&mut dyn Lifecycle> {
        Some(self)
    }
}

impl Lifecycle for OrgQuotaCommand {
    fn setup(&mut self, session: &Session<'_>) -> Result<()> {
        self.wiring = Some(Wiring::from_session(session));
        Ok(())
    }

    fn execute(&mut self, _args: &[String]) -> Result<()> {
        let Wiring { config, ui } = wired(&self.wiring)?;
        let client = HttpClient::new(config)?;

        ui.display_text(
            "Getting org quota {{QuotaName}}...",
            &[("QuotaName", self.quota_name.clone())],
        );
        ui.display_newline();

        let (quota, warnings) = Actor::new(&client).get_organization_quota_by_name(&self.quota_name);
        display_warnings(ui.as_ref(), &warnings);
        let quota = quota?;

        ui.display_text(&quota_details(&quota), &[]);
        Ok(())
    }
}

fn quota_cells(quota: &OrganizationQuota) -> [String; 8] {
    [
        quota.name.clone(),
        memory(quota.total_memory),
        memory(quota.instance_memory),
        count(quota.total_routes),
        count(quota.total_service_instances),
        if quota.paid_service_plans {
            "allowed".to_string()
        } else {
            "disallowed".to_string()
        },
        count(quota.total_app_instances),
        count(quota.total_route_ports),
    ]
}

fn quota_table(quotas: &[OrganizationQuota]) -> String {
    let rows: Vec<[String; 8]> = std::iter::once(COLUMNS.map(str::to_string))
        .chain(quotas.iter().map(quota_cells))
        .collect();

    let mut widths = [0usize; 8];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join("   ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn quota_details(quota: &OrganizationQuota) -> String {
    let cells = quota_cells(quota);
    let width = COLUMNS[1..].iter().map(|label| label.len() + 1).max().unwrap_or(0);

    COLUMNS[1..]
        .iter()
        .zip(&cells[1..])
        .map(|(label, value)| format!("{:<width$}   {}", format!("{}:", label), value, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn memory(limit: NullInt) -> String {
    match limit {
        None => "unlimited".to_string(),
        Some(mb) if mb >= 1024 && mb % 1024 == 0 => format!("{}G", mb / 1024),
        Some(mb) => format!("{}M", mb),
    }
}

fn count(limit: NullInt) -> String {
    limit.map_or_else(|| "unlimited".to_string(), |value| value.to_string())
}
