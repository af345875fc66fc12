//! get-bucket-region command
//!
//! Resolves the region a bucket lives in. The bucket-location API needs a
//! stable query region, so the lookup client is always bound to the default
//! region and `--region` has no effect here.

use clap::Args;

use bkt_core::{DEFAULT_REGION, ObjectStore as _, Result};
use bkt_s3::S3Client;

use super::CommandContext;
use crate::output::Formatter;

/// Look up the region a bucket lives in
#[derive(Args, Debug)]
pub struct GetBucketRegionArgs {
    /// Bucket name
    #[arg(long)]
    pub name: String,
}

/// Execute the get-bucket-region command
pub async fn run(args: GetBucketRegionArgs, ctx: &CommandContext) -> Result<()> {
    let formatter = Formatter::new();
    let client = S3Client::new(DEFAULT_REGION, &ctx.credentials);

    let region = client.bucket_region(&args.name).await?;

    formatter.println(&region);

    Ok(())
}
