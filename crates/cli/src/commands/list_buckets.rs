//! list-buckets command
//!
//! Lists every bucket visible to the credentials. The listing API is
//! region-agnostic, so `--region` only affects which endpoint answers, never
//! the result set.

use bkt_core::{ObjectStore as _, Result};
use bkt_s3::S3Client;

use super::CommandContext;
use crate::output::Formatter;

/// Execute the list-buckets command
pub async fn run(ctx: &CommandContext) -> Result<()> {
    let formatter = Formatter::new();
    let client = S3Client::new(&ctx.region, &ctx.credentials);

    let buckets = client.list_buckets().await?;

    if buckets.is_empty() {
        formatter.println("No buckets found.");
        return Ok(());
    }

    for (index, bucket) in buckets.iter().enumerate() {
        let created = bucket
            .created
            .map(|t| t.strftime("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| "-".to_string());
        formatter.println(&format!("{:>3}. {}  {}", index + 1, bucket.name, created));
    }

    Ok(())
}
