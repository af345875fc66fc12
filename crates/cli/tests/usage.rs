//! Usage-level tests for the bkt binary
//!
//! These drive the compiled binary directly and only exercise paths that end
//! before any request is sent: argument validation, help/version, and local
//! filesystem failures. No storage service is needed.

use std::process::{Command, Output};

use tempfile::TempDir;

/// Run bkt with the given arguments inside an isolated working directory
fn run_bkt(args: &[&str], workdir: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bkt"))
        .args(args)
        .current_dir(workdir)
        .env_remove("AWS_ACCESS_KEY_ID")
        .env_remove("AWS_SECRET_ACCESS_KEY")
        .env_remove("AWS_SESSION_TOKEN")
        .output()
        .expect("failed to execute bkt")
}

fn workdir() -> TempDir {
    TempDir::new().expect("failed to create temp dir")
}

mod argument_validation {
    use super::*;

    #[test]
    fn test_no_command_exits_one() {
        let dir = workdir();
        let output = run_bkt(&[], dir.path());
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn test_unknown_command_exits_one() {
        let dir = workdir();
        let output = run_bkt(&["sync-everything"], dir.path());
        assert_eq!(output.status.code(), Some(1));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("sync-everything"), "stderr: {stderr}");
    }

    #[test]
    fn test_create_bucket_requires_name() {
        let dir = workdir();
        let output = run_bkt(&["create-bucket"], dir.path());
        assert_eq!(output.status.code(), Some(1));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("--name"), "stderr: {stderr}");
    }

    #[test]
    fn test_delete_bucket_requires_name() {
        let dir = workdir();
        let output = run_bkt(&["delete-bucket"], dir.path());
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn test_list_files_requires_bucket() {
        let dir = workdir();
        let output = run_bkt(&["list-files", "--prefix", "logs/"], dir.path());
        assert_eq!(output.status.code(), Some(1));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("--bucket"), "stderr: {stderr}");
    }

    #[test]
    fn test_upload_file_requires_bucket_and_file() {
        let dir = workdir();

        let output = run_bkt(&["upload-file", "--bucket", "b"], dir.path());
        assert_eq!(output.status.code(), Some(1));

        let output = run_bkt(&["upload-file", "--file", "a.txt"], dir.path());
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn test_download_file_requires_bucket_and_key() {
        let dir = workdir();

        let output = run_bkt(&["download-file", "--bucket", "b"], dir.path());
        assert_eq!(output.status.code(), Some(1));

        let output = run_bkt(&["download-file", "--key", "k"], dir.path());
        assert_eq!(output.status.code(), Some(1));
    }

    #[test]
    fn test_delete_file_requires_key() {
        let dir = workdir();
        let output = run_bkt(&["delete-file", "--bucket", "b"], dir.path());
        assert_eq!(output.status.code(), Some(1));
    }
}

mod help_and_version {
    use super::*;

    #[test]
    fn test_help_exits_zero_and_lists_commands() {
        let dir = workdir();
        let output = run_bkt(&["--help"], dir.path());
        assert_eq!(output.status.code(), Some(0));

        let stdout = String::from_utf8_lossy(&output.stdout);
        for command in [
            "list-buckets",
            "get-bucket-region",
            "create-bucket",
            "delete-bucket",
            "list-files",
            "upload-file",
            "download-file",
            "delete-file",
        ] {
            assert!(stdout.contains(command), "missing {command} in: {stdout}");
        }
    }

    #[test]
    fn test_short_help_exits_zero() {
        let dir = workdir();
        let output = run_bkt(&["-h"], dir.path());
        assert_eq!(output.status.code(), Some(0));
    }

    #[test]
    fn test_version_exits_zero() {
        let dir = workdir();

        let output = run_bkt(&["--version"], dir.path());
        assert_eq!(output.status.code(), Some(0));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "stdout: {stdout}");

        let output = run_bkt(&["-v"], dir.path());
        assert_eq!(output.status.code(), Some(0));
    }
}

mod local_failures {
    use super::*;

    #[test]
    fn test_upload_missing_source_file_exits_one() {
        let dir = workdir();
        let output = run_bkt(
            &["upload-file", "--bucket", "b", "--file", "no-such-file.txt"],
            dir.path(),
        );
        assert_eq!(output.status.code(), Some(1));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("upload-file"), "stderr: {stderr}");
    }

    #[test]
    fn test_download_directory_like_key_without_output_exits_one() {
        let dir = workdir();
        let output = run_bkt(
            &["download-file", "--bucket", "b", "--key", "path/to/"],
            dir.path(),
        );
        assert_eq!(output.status.code(), Some(1));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("download-file"), "stderr: {stderr}");
        assert!(stderr.contains("output path"), "stderr: {stderr}");
    }
}
