//! delete-bucket command
//!
//! Deletes a bucket by name, with no confirmation and no emptying of its
//! contents first; deleting a non-empty bucket fails at the service.

use clap::Args;

use bkt_core::{ObjectStore as _, Result};
use bkt_s3::S3Client;

use super::CommandContext;
use crate::output::Formatter;

/// Delete a bucket
#[derive(Args, Debug)]
pub struct DeleteBucketArgs {
    /// Bucket name
    #[arg(long)]
    pub name: String,
}

/// Execute the delete-bucket command
pub async fn run(args: DeleteBucketArgs, ctx: &CommandContext) -> Result<()> {
    let formatter = Formatter::new();
    let client = S3Client::new(&ctx.region, &ctx.credentials);

    client.delete_bucket(&args.name).await?;

    formatter.success(&format!("Bucket '{}' removed successfully.", args.name));

    Ok(())
}
