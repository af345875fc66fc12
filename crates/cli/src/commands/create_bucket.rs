//! create-bucket command

use clap::Args;

use bkt_core::{ObjectStore as _, Result};
use bkt_s3::S3Client;

use super::CommandContext;
use crate::output::Formatter;

/// Create a bucket
#[derive(Args, Debug)]
pub struct CreateBucketArgs {
    /// Bucket name
    #[arg(long)]
    pub name: String,
}

/// Execute the create-bucket command
pub async fn run(args: CreateBucketArgs, ctx: &CommandContext) -> Result<()> {
    let formatter = Formatter::new();
    let client = S3Client::new(&ctx.region, &ctx.credentials);

    client.create_bucket(&args.name).await?;

    formatter.success(&format!("Bucket '{}' created successfully.", args.name));

    Ok(())
}
