//! Environment snapshot
//!
//! Commands never read ambient process state directly. Each invocation builds
//! one immutable `Environment` up front by layering dotenv-format files under
//! and over the process environment, and everything downstream (credential
//! resolution in particular) reads from that snapshot.

use std::collections::HashMap;
use std::path::Path;

/// File loaded from the working directory on every invocation
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Immutable key-value snapshot for one invocation.
///
/// Precedence, lowest to highest: the default `.env` file, the process
/// environment, then an explicit `--env-file` whose entries win outright.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Capture the environment for this invocation.
    ///
    /// `extra_file` is the explicit `--env-file` path, loaded in addition to
    /// the default file and applied last.
    pub fn capture(extra_file: Option<&Path>) -> Self {
        Self::capture_from(Path::new(DEFAULT_ENV_FILE), extra_file)
    }

    fn capture_from(default_file: &Path, extra_file: Option<&Path>) -> Self {
        let mut vars = HashMap::new();

        // Default file first: process variables loaded next take precedence
        // over anything it defines.
        merge_file(&mut vars, default_file);

        for (key, value) in std::env::vars() {
            vars.insert(key, value);
        }

        // Explicit file wins over everything loaded so far.
        if let Some(path) = extra_file {
            merge_file(&mut vars, path);
        }

        Self { vars }
    }

    /// Build an environment from in-memory pairs
    pub fn from_vars<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Look up a variable in the snapshot
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Number of variables in the snapshot
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot holds no variables
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// Merge a dotenv-format file into `vars`, last write winning.
///
/// A missing or unreadable file is skipped; credentials that never turn up
/// surface later as an authentication error from the service.
fn merge_file(vars: &mut HashMap<String, String>, path: &Path) {
    match dotenvy::from_path_iter(path) {
        Ok(entries) => {
            let mut loaded = 0usize;
            for entry in entries {
                match entry {
                    Ok((key, value)) => {
                        vars.insert(key, value);
                        loaded += 1;
                    }
                    Err(err) => {
                        tracing::debug!("skipping malformed entry in {}: {err}", path.display());
                    }
                }
            }
            tracing::debug!("loaded {loaded} entries from {}", path.display());
        }
        Err(err) => {
            tracing::debug!("env file {} not loaded: {err}", path.display());
        }
    }
}
