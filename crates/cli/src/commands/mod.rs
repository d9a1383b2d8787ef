//! CLI command definitions and execution
//!
//! This module contains all CLI commands and their implementations.
//! Settings are resolved once here, then passed by value to the command
//! that was invoked.

use clap::{Args, Parser, Subcommand};

use mup_core::{Overrides, Settings};

use crate::exit_code::ExitCode;
use crate::output::OutputConfig;

mod buckets;
mod config_show;
mod ensure_bucket;
mod ls;
mod upload_file;

#[cfg(test)]
mod test_util;

/// mup - MinIO/S3 uploader CLI
///
/// Manages buckets and objects on MinIO and other S3-compatible object
/// stores. Connection settings come from S3_* environment variables and can
/// be overridden per invocation with the connection flags.
///
/// Use `mup help <command>` for detailed help on a subcommand.
#[derive(Parser, Debug)]
#[command(name = "mup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human-readable or JSON
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, default_value = "false")]
    pub no_color: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    #[command(flatten)]
    pub connect: ConnectArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Connection overrides shared by every subcommand
///
/// Each flag overrides the matching S3_* environment variable only when it
/// is explicitly supplied.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectArgs {
    /// Endpoint URL (overrides S3_ENDPOINT)
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Access key ID (overrides S3_ACCESS_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub access_key: Option<String>,

    /// Secret access key (overrides S3_SECRET_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub secret_key: Option<String>,

    /// Region name (overrides S3_REGION)
    #[arg(long, global = true, value_name = "REGION")]
    pub region: Option<String>,

    /// Verify TLS certificates (overrides S3_VERIFY_SSL)
    #[arg(long, global = true, value_name = "true|false")]
    pub verify_ssl: Option<bool>,
}

impl ConnectArgs {
    /// Convert the parsed flags into settings overrides
    pub fn overrides(&self) -> Overrides {
        Overrides {
            endpoint: self.endpoint.clone(),
            access_key: self.access_key.clone(),
            secret_key: self.secret_key.clone(),
            region: self.region.clone(),
            verify_ssl: self.verify_ssl,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved configuration (secrets reported as set/unset)
    ConfigShow,

    /// Create a bucket if it does not already exist
    EnsureBucket(ensure_bucket::EnsureBucketArgs),

    /// Upload a single local file to a bucket
    UploadFile(upload_file::UploadFileArgs),

    /// List objects in a bucket under a prefix
    Ls(ls::LsArgs),

    /// List all buckets visible to the credentials
    Buckets,
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let output_config = OutputConfig {
        json: cli.json,
        no_color: cli.no_color,
        quiet: cli.quiet,
    };

    // Resolve settings once: environment first, then explicit flag overrides.
    let settings = Settings::from_env().with_overrides(&cli.connect.overrides());

    match cli.command {
        Commands::ConfigShow => config_show::execute(settings, output_config),
        Commands::EnsureBucket(args) => ensure_bucket::execute(args, settings, output_config).await,
        Commands::UploadFile(args) => upload_file::execute(args, settings, output_config).await,
        Commands::Ls(args) => ls::execute(args, settings, output_config).await,
        Commands::Buckets => buckets::execute(settings, output_config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_connect_flags_default_to_none() {
        let cli = Cli::parse_from(["mup", "buckets"]);
        let overrides = cli.connect.overrides();
        assert!(overrides.endpoint.is_none());
        assert!(overrides.access_key.is_none());
        assert!(overrides.secret_key.is_none());
        assert!(overrides.region.is_none());
        assert!(overrides.verify_ssl.is_none());
    }

    #[test]
    fn test_connect_flags_parse_after_subcommand() {
        let cli = Cli::parse_from([
            "mup",
            "ls",
            "mybucket",
            "--endpoint",
            "http://minio:9000",
            "--verify-ssl",
            "false",
        ]);
        let overrides = cli.connect.overrides();
        assert_eq!(overrides.endpoint.as_deref(), Some("http://minio:9000"));
        assert_eq!(overrides.verify_ssl, Some(false));
    }

    #[test]
    fn test_verify_ssl_rejects_non_boolean() {
        let result = Cli::try_parse_from(["mup", "buckets", "--verify-ssl", "maybe"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_ls_prefix_defaults_to_empty() {
        let cli = Cli::parse_from(["mup", "ls", "mybucket"]);
        match cli.command {
            Commands::Ls(args) => {
                assert_eq!(args.bucket, "mybucket");
                assert_eq!(args.prefix, "");
            }
            _ => panic!("expected ls"),
        }
    }

    #[test]
    fn test_upload_file_key_flag() {
        let cli = Cli::parse_from(["mup", "upload-file", "b", "/tmp/a.txt", "--key", "foo"]);
        match cli.command {
            Commands::UploadFile(args) => {
                assert_eq!(args.bucket, "b");
                assert_eq!(args.key.as_deref(), Some("foo"));
            }
            _ => panic!("expected upload-file"),
        }
    }
}
