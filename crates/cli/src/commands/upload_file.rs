//! upload-file command - Upload a single local file
//!
//! Resolves the local path, derives a content type from the file extension,
//! and performs one whole-file put with that content type attached.

use std::path::{Path, PathBuf};

use clap::Args;
use mup_core::{Error, ObjectStore, Result, Settings};
use mup_s3::S3Client;
use serde::Serialize;

use crate::exit_code::ExitCode;
use crate::output::{Formatter, OutputConfig};

/// Upload a single local file to a bucket
#[derive(Args, Debug)]
pub struct UploadFileArgs {
    /// Target bucket
    pub bucket: String,

    /// Local file path
    pub path: PathBuf,

    /// Object key (default: the file's base name)
    #[arg(long)]
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
struct UploadFileOutput {
    uri: String,
    content_type: String,
    size_bytes: usize,
}

/// Execute the upload-file command
pub async fn execute(
    args: UploadFileArgs,
    settings: Settings,
    output_config: OutputConfig,
) -> ExitCode {
    let formatter = Formatter::new(output_config);

    // The local path is checked before any client or API work.
    let local = match resolve_local_file(&args.path) {
        Ok(p) => p,
        Err(e) => {
            formatter.error(&e.to_string());
            return e.into();
        }
    };

    let key = match args.key {
        Some(key) => key,
        None => match local.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => {
                formatter.error(&format!("Cannot derive a key from: {}", local.display()));
                return ExitCode::UsageError;
            }
        },
    };

    let content_type = guess_content_type(&local);

    let data = match tokio::fs::read(&local).await {
        Ok(data) => data,
        Err(e) => {
            formatter.error(&format!("Failed to read {}: {e}", local.display()));
            return ExitCode::GeneralError;
        }
    };

    let client = match S3Client::new(&settings).await {
        Ok(c) => c,
        Err(e) => {
            formatter.error(&format!("Failed to create S3 client: {e}"));
            return e.into();
        }
    };

    run(&client, &args.bucket, &key, data, &content_type, &formatter).await
}

async fn run(
    store: &impl ObjectStore,
    bucket: &str,
    key: &str,
    data: Vec<u8>,
    content_type: &str,
    formatter: &Formatter,
) -> ExitCode {
    let size_bytes = data.len();

    match store.put_object(bucket, key, data, content_type).await {
        Ok(()) => {
            if formatter.is_json() {
                formatter.json(&UploadFileOutput {
                    uri: format!("s3://{bucket}/{key}"),
                    content_type: content_type.to_string(),
                    size_bytes,
                });
            } else {
                formatter.success(&format!("Uploaded s3://{bucket}/{key} ({content_type})"));
            }
            ExitCode::Success
        }
        Err(e) => {
            formatter.error(&format!("Failed to upload s3://{bucket}/{key}: {e}"));
            e.into()
        }
    }
}

/// Resolve the path to an absolute path, requiring a regular file
fn resolve_local_file(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(Error::NotAFile(path.display().to_string()));
    }
    Ok(path.canonicalize()?)
}

/// Derive a content type from the file extension
fn guess_content_type(path: &Path) -> String {
    mime_guess::from_path(path).first_or_octet_stream().to_string()
}
