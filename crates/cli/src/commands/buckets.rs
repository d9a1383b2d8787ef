//! buckets command - List all buckets
//!
//! Prints each bucket's name and creation timestamp, one per line.

use mup_core::{BucketInfo, ObjectStore, Settings};
use mup_s3::S3Client;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

#[derive(Debug, Serialize)]
struct BucketsOutput {
    buckets: Vec<BucketInfo>,
}

/// Execute the buckets command
pub async fn execute(settings: Settings, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match S3Client::new(&settings).await {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&format!("Failed to create S3 client: {e}"));
            return e.into();
        }
    };

    run(&client, &formatter).await
}

async fn run(store: &impl ObjectStore, formatter: &Formatter) -> ExitCode {
    match store.list_buckets().await {
        Ok(buckets) => {
            if formatter.is_json() {
                formatter.json(&BucketsOutput { buckets });
            } else {
                for bucket in &buckets {
                    formatter.println(&format_bucket_line(bucket));
                }
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to list buckets: {e}"));
            e.into()
        }
    }
}

fn format_bucket_line(bucket: &BucketInfo) -> String {
    let created = bucket
        .created
        .map(|d| d.strftime("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("{}\t{}", bucket.name, created)
}
