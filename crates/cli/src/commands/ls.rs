//! ls command - List objects under a prefix
//!
//! Pages through list-objects-v2 sequentially and prints each object's key
//! and size in store-returned order, followed by a count.

use clap::Args;
use mup_core::{ObjectInfo, ObjectStore, Result, Settings};
use mup_s3::S3Client;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// List objects in a bucket under a prefix
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Bucket name
    pub bucket: String,

    /// Key prefix to filter by (empty means no filter)
    #[arg(long, default_value = "")]
    pub prefix: String,
}

#[derive(Debug, Serialize)]
struct LsOutput {
    objects: Vec<ObjectInfo>,
    count: usize,
}

/// Execute the ls command
pub async fn execute(args: LsArgs, settings: Settings, output_config: OutputConfig) -> ExitCode {
    let formatter = Formatter::new(output_config);

    let client = match S3Client::new(&settings).await {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&format!("Failed to create S3 client: {e}"));
            return e.into();
        }
    };

    match collect_objects(&client, &args.bucket, &args.prefix).await {
        Ok(objects) => {
            if formatter.is_json() {
                let count = objects.len();
                formatter.json(&LsOutput { objects, count });
            } else {
                for object in &objects {
                    formatter.println(&format!("{}\t{}", object.key, object.size_bytes));
                }
                formatter.println(&format!("{} objects", objects.len()));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to list objects: {e}"));
            e.into()
        }
    }
}

/// Fetch every page under the prefix, one page at a time
async fn collect_objects(
    store: &impl ObjectStore,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<ObjectInfo>> {
    let mut objects = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let page = store
            .list_objects(bucket, prefix, continuation_token.take())
            .await?;

        objects.extend(page.objects);

        if !page.truncated {
            break;
        }
        continuation_token = page.continuation_token;
    }

    Ok(objects)
}
