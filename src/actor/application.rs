use super::{Actor, Outcome};
use crate::api::{Application, Warnings};
use crate::error::CliError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentVariable {
    pub name: String,
    pub value: String,
}

impl Actor<'_> {
    pub fn get_application_by_name(&self, name: &str, space_guid: &str) -> Outcome<Application> {
        let (apps, warnings) = match self.client.get_applications(&[name.to_string()], space_guid) {
            Ok(reply) => reply,
            Err(e) => return (Err(e), Warnings::new()),
        };

        let app = apps
            .into_iter()
            .next()
            .ok_or_else(|| CliError::ApplicationNotFound {
                name: name.to_string(),
            });
        (app, warnings)
    }

    pub fn set_environment_variable_by_application_name(
        &self,
        app_name: &str,
        space_guid: &str,
        variable: &EnvironmentVariable,
    ) -> Outcome<()> {
        let (app, mut warnings) = self.get_application_by_name(app_name, space_guid);
        let app = match app {
            Ok(app) => app,
            Err(e) => return (Err(e), warnings),
        };

        let mut variables = BTreeMap::new();
        variables.insert(variable.name.clone(), Some(variable.value.clone()));
        match self
            .client
            .update_application_environment_variables(&app.guid, &variables)
        {
            Ok(more) => {
                warnings.extend(more);
                (Ok(()), warnings)
            }
            Err(e) => (Err(e), warnings),
        }
    }
}
