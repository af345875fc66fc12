//! delete-file command
//!
//! Deletes one object by key, with no existence check beforehand.

use clap::Args;

use bkt_core::{ObjectStore as _, Result};
use bkt_s3::S3Client;

use super::CommandContext;
use crate::output::Formatter;

/// Delete an object
#[derive(Args, Debug)]
pub struct DeleteFileArgs {
    /// Bucket holding the object
    #[arg(long)]
    pub bucket: String,

    /// Object key to delete
    #[arg(long)]
    pub key: String,
}

/// Execute the delete-file command
pub async fn run(args: DeleteFileArgs, ctx: &CommandContext) -> Result<()> {
    let formatter = Formatter::new();
    let client = S3Client::new(&ctx.region, &ctx.credentials);

    client.delete_object(&args.bucket, &args.key).await?;

    formatter.success(&format!("Object '{}/{}' removed.", args.bucket, args.key));

    Ok(())
}
