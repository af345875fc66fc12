//! CLI command definitions and execution
//!
//! This module contains all CLI commands and their implementations. Each
//! handler validates its options, binds a fresh storage client, issues one
//! service call, and returns a Result; a single translator here maps failures
//! to stderr and exit code 1.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bkt_core::{CredentialBundle, DEFAULT_REGION, Environment, Result};

use crate::exit_code::ExitCode;
use crate::output::Formatter;

mod create_bucket;
mod delete_bucket;
mod delete_file;
mod download_file;
mod get_bucket_region;
mod list_buckets;
mod list_files;
mod upload_file;

/// bkt - Object storage CLI
///
/// A command-line client for bucket lifecycle and object
/// upload/download/delete/listing against S3 object storage.
#[derive(Parser, Debug)]
#[command(name = "bkt")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Region to operate in
    #[arg(long, global = true, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Extra env file loaded over the default `.env`
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Print version
    #[arg(
        short = 'v',
        long = "version",
        action = clap::ArgAction::Version,
        value_parser = clap::value_parser!(bool)
    )]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all buckets visible to the credentials
    ListBuckets,

    /// Look up the region a bucket lives in
    GetBucketRegion(get_bucket_region::GetBucketRegionArgs),

    /// Create a bucket
    CreateBucket(create_bucket::CreateBucketArgs),

    /// Delete a bucket
    DeleteBucket(delete_bucket::DeleteBucketArgs),

    /// List objects in a bucket
    ListFiles(list_files::ListFilesArgs),

    /// Upload a local file as an object
    UploadFile(upload_file::UploadFileArgs),

    /// Download an object to a local file
    DownloadFile(download_file::DownloadFileArgs),

    /// Delete an object
    DeleteFile(delete_file::DeleteFileArgs),
}

impl Commands {
    /// Command name as typed on the command line, used to prefix errors
    const fn name(&self) -> &'static str {
        match self {
            Commands::ListBuckets => "list-buckets",
            Commands::GetBucketRegion(_) => "get-bucket-region",
            Commands::CreateBucket(_) => "create-bucket",
            Commands::DeleteBucket(_) => "delete-bucket",
            Commands::ListFiles(_) => "list-files",
            Commands::UploadFile(_) => "upload-file",
            Commands::DownloadFile(_) => "download-file",
            Commands::DeleteFile(_) => "delete-file",
        }
    }
}

/// Resolved state shared by every handler
pub struct CommandContext {
    /// Region from `--region`
    pub region: String,

    /// Credentials resolved from the environment snapshot
    pub credentials: CredentialBundle,
}

/// Execute the CLI command and return an exit code
pub async fn execute(cli: Cli) -> ExitCode {
    let environment = Environment::capture(cli.env_file.as_deref());
    let ctx = CommandContext {
        region: cli.region,
        credentials: CredentialBundle::resolve(&environment),
    };

    let name = cli.command.name();
    tracing::debug!(command = name, region = %ctx.region, "dispatching");

    let result: Result<()> = match cli.command {
        Commands::ListBuckets => list_buckets::run(&ctx).await,
        Commands::GetBucketRegion(args) => get_bucket_region::run(args, &ctx).await,
        Commands::CreateBucket(args) => create_bucket::run(args, &ctx).await,
        Commands::DeleteBucket(args) => delete_bucket::run(args, &ctx).await,
        Commands::ListFiles(args) => list_files::run(args, &ctx).await,
        Commands::UploadFile(args) => upload_file::run(args, &ctx).await,
        Commands::DownloadFile(args) => download_file::run(args, &ctx).await,
        Commands::DeleteFile(args) => delete_file::run(args, &ctx).await,
    };

    match result {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            Formatter::new().error(&format!("{name}: {err}"));
            ExitCode::Failure
        }
    }
}
