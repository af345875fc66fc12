//! download-file command
//!
//! Streams one object's body into a local file.

use std::path::PathBuf;

use clap::Args;

use bkt_core::{Error, ObjectStore as _, Result, format_bytes};
use bkt_s3::S3Client;

use super::CommandContext;
use crate::output::Formatter;

/// Download an object to a local file
#[derive(Args, Debug)]
pub struct DownloadFileArgs {
    /// Source bucket
    #[arg(long)]
    pub bucket: String,

    /// Object key to download
    #[arg(long)]
    pub key: String,

    /// Local output path; defaults to the key's base name
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Execute the download-file command
pub async fn run(args: DownloadFileArgs, ctx: &CommandContext) -> Result<()> {
    let formatter = Formatter::new();

    let output = match &args.output {
        Some(path) => path.clone(),
        None => derive_output(&args.key)?,
    };

    let client = S3Client::new(&ctx.region, &ctx.credentials);

    let written = client
        .download_object(&args.bucket, &args.key, &output)
        .await?;

    formatter.println(&format!(
        "{}/{} -> {} ({})",
        args.bucket,
        args.key,
        output.display(),
        format_bytes(written)
    ));

    Ok(())
}

/// Derive the local output path from the key's base name
fn derive_output(key: &str) -> Result<PathBuf> {
    key.rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| Error::usage(format!("cannot derive an output path from key '{key}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_output_uses_key_base_name() {
        assert_eq!(derive_output("k.bin").unwrap(), PathBuf::from("k.bin"));
        assert_eq!(derive_output("path/to/k.bin").unwrap(), PathBuf::from("k.bin"));
    }

    #[test]
    fn test_derive_output_rejects_directory_like_keys() {
        assert!(derive_output("path/to/").is_err());
        assert!(derive_output("").is_err());
    }
}
