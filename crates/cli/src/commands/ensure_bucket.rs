//! ensure-bucket command - Create a bucket if missing
//!
//! Probes the bucket with head-bucket and issues a create call when the
//! probe does not confirm existence.

use clap::Args;
use mup_core::{ObjectStore, Settings};
use mup_s3::S3Client;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Create a bucket if it does not already exist
#[derive(Args, Debug)]
pub struct EnsureBucketArgs {
    /// Bucket name
    pub bucket: String,
}

#[derive(Debug, Serialize)]
struct EnsureBucketOutput {
    status: &'static str,
    bucket: String,
}

/// Execute the ensure-bucket command
pub async fn execute(
    args: EnsureBucketArgs,
    settings: Settings,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match S3Client::new(&settings).await {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&format!("Failed to create S3 client: {e}"));
            return e.into();
        }
    };

    run(&client, &args.bucket, &formatter).await
}

async fn run(store: &impl ObjectStore, bucket: &str, formatter: &Formatter) -> ExitCode {
    let exists = match store.bucket_exists(bucket).await {
        Ok(exists) => exists,
        Err(e) => {
            // Any probe failure counts as a missing bucket and gets one
            // create attempt; the failure is logged, not swallowed.
            tracing::warn!("bucket existence probe failed, attempting create: {e}");
            false
        }
    };

    if exists {
        if formatter.is_json() {
            formatter.json(&EnsureBucketOutput {
                status: "exists",
                bucket: bucket.to_string(),
            });
        } else {
            formatter.success(&format!("Bucket '{bucket}' already exists."));
        }
        return ExitCode::Success;
    }

    match store.create_bucket(bucket).await {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&EnsureBucketOutput {
                    status: "created",
                    bucket: bucket.to_string(),
                });
            } else {
                formatter.success(&format!("Bucket '{bucket}' created."));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to create bucket '{bucket}': {e}"));
            e.into()
        }
    }
}
