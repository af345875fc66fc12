//! upload-file command
//!
//! Uploads one local file as an object. The whole file is read into memory
//! before transfer; this is a small-object workflow, not a streamed upload.

use std::path::Path;

use clap::Args;

use bkt_core::{Error, ObjectStore as _, Result, content_type_for, format_bytes};
use bkt_s3::S3Client;

use super::CommandContext;
use crate::output::Formatter;

/// Upload a local file as an object
#[derive(Args, Debug)]
pub struct UploadFileArgs {
    /// Destination bucket
    #[arg(long)]
    pub bucket: String,

    /// Local file to upload
    #[arg(long)]
    pub file: std::path::PathBuf,

    /// Destination key; defaults to the file's base name
    #[arg(long)]
    pub key: Option<String>,
}

/// Execute the upload-file command
pub async fn run(args: UploadFileArgs, ctx: &CommandContext) -> Result<()> {
    let formatter = Formatter::new();

    let key = match &args.key {
        Some(key) => key.clone(),
        None => derive_key(&args.file)?,
    };
    let content_type = content_type_for(&args.file);

    let client = S3Client::new(&ctx.region, &ctx.credentials);

    let data = std::fs::read(&args.file)?;
    let size = data.len() as u64;

    client
        .put_object(&args.bucket, &key, data, content_type)
        .await?;

    formatter.println(&format!(
        "{} -> {}/{} ({})",
        args.file.display(),
        args.bucket,
        key,
        format_bytes(size)
    ));

    Ok(())
}

/// Derive the destination key from the source file's base name
fn derive_key(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| Error::usage(format!("cannot derive an object key from '{}'", path.display())))
}
