//! config-show command - Show the resolved configuration
//!
//! Prints the settings as resolved from the environment and any flag
//! overrides. Credentials are reported only as set/unset.

use mup_core::Settings;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

#[derive(Debug, Serialize)]
struct ConfigShowOutput {
    endpoint: String,
    region: String,
    verify_ssl: bool,
    access_key_set: bool,
    secret_key_set: bool,
}

impl ConfigShowOutput {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            endpoint: settings.endpoint.clone(),
            region: settings.region.clone(),
            verify_ssl: settings.verify_ssl,
            access_key_set: !settings.access_key.is_empty(),
            secret_key_set: !settings.secret_key.is_empty(),
        }
    }
}

/// Execute the config-show command
pub fn execute(settings: Settings, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);
    let output = ConfigShowOutput::from_settings(&settings);

    if formatter.is_json() {
        formatter.json(&output);
    } else {
        formatter.println(&format!("Endpoint   : {}", output.endpoint));
        formatter.println(&format!("Region     : {}", output.region));
        formatter.println(&format!("Verify SSL : {}", output.verify_ssl));
        formatter.println(&format!(
            "Access key : {}",
            if output.access_key_set { "set" } else { "unset" }
        ));
        formatter.println(&format!(
            "Secret key : {}",
            if output.secret_key_set { "set" } else { "unset" }
        ));
    }

    ExitCode::Success
}
