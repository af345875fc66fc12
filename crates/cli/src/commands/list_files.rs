//! list-files command
//!
//! Lists objects in a bucket, optionally filtered by a key prefix.

use clap::Args;

use bkt_core::{ObjectStore as _, ObjectSummary, Result};
use bkt_s3::S3Client;

use super::CommandContext;
use crate::output::Formatter;

/// List objects in a bucket
#[derive(Args, Debug)]
pub struct ListFilesArgs {
    /// Bucket to list
    #[arg(long)]
    pub bucket: String,

    /// Only list keys starting with this prefix
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Execute the list-files command
pub async fn run(args: ListFilesArgs, ctx: &CommandContext) -> Result<()> {
    let formatter = Formatter::new();
    let client = S3Client::new(&ctx.region, &ctx.credentials);

    let objects = client
        .list_objects(&args.bucket, args.prefix.as_deref())
        .await?;

    if objects.is_empty() {
        formatter.println("No objects found.");
        return Ok(());
    }

    for (index, object) in objects.iter().enumerate() {
        formatter.println(&render_object_line(index, object));
    }

    Ok(())
}

/// Render one listing line: 1-based index, key, size, last-modified
fn render_object_line(index: usize, object: &ObjectSummary) -> String {
    let modified = object
        .last_modified
        .map(|t| t.strftime("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:>3}. {}  ({})  {}",
        index + 1,
        object.key,
        object.size_human,
        modified
    )
}
