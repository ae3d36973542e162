//! Policy file loading
//!
//! Everything that can make a run unsafe to start (unreadable or malformed
//! YAML, unknown permission names) is reported here, before any API call.
//! A missing `repository` key is *not* an error at this stage; the runners
//! skip such entries individually.

use crate::error::{PolicyError, PolicyResult};
use crate::policy::types::{EntrySource, ManifestDocument, PolicyDocument, PolicyEntry};
use crate::policy::Permission;
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where a command reads its entries from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicySource {
    /// Directory of per-repository files
    Directory(PathBuf),
    /// Single aggregate manifest
    Manifest(PathBuf),
}

impl PolicySource {
    pub fn load(&self) -> PolicyResult<Vec<PolicyEntry>> {
        match self {
            PolicySource::Directory(dir) => load_policy_dir(dir),
            PolicySource::Manifest(path) => load_manifest(path),
        }
    }
}

/// Load every `*.yml` / `*.yaml` file in `dir`, ordered by file name.
///
/// Each file must carry a valid `permission`.
pub fn load_policy_dir(dir: &Path) -> PolicyResult<Vec<PolicyEntry>> {
    let listing = std::fs::read_dir(dir).map_err(|source| PolicyError::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for dir_entry in listing {
        let dir_entry = dir_entry.map_err(|source| PolicyError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir_entry.path();
        if path.is_file() && is_yaml(&path) {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        warn!(dir = %dir.display(), "No policy files found");
    }

    let mut entries = Vec::with_capacity(files.len());
    for path in files {
        let contents = std::fs::read_to_string(&path).map_err(|source| PolicyError::Read {
            path: path.clone(),
            source,
        })?;
        entries.push(parse_policy_file(&path, &contents)?);
    }

    debug!(dir = %dir.display(), count = entries.len(), "Loaded policy directory");
    Ok(entries)
}

/// Parse one per-repository policy file
pub fn parse_policy_file(path: &Path, contents: &str) -> PolicyResult<PolicyEntry> {
    let doc: PolicyDocument =
        serde_yaml::from_str(contents).map_err(|source| PolicyError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let raw = doc.permission.ok_or_else(|| PolicyError::MissingPermission {
        path: path.to_path_buf(),
    })?;
    let permission = parse_permission(path, &raw)?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(PolicyEntry::new(
        EntrySource::File(name),
        doc.repository,
        doc.teams.unwrap_or_default(),
        Some(permission),
    ))
}

/// Load the aggregate manifest. It must exist and list at least one entry.
pub fn load_manifest(path: &Path) -> PolicyResult<Vec<PolicyEntry>> {
    if !path.exists() {
        return Err(PolicyError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|source| PolicyError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest(path, &contents)
}

/// Parse the aggregate manifest; `permission` is optional per entry but
/// validated when present.
pub fn parse_manifest(path: &Path, contents: &str) -> PolicyResult<Vec<PolicyEntry>> {
    // An empty file is a manifest without repos, not a parse error
    let doc: ManifestDocument = if contents.trim().is_empty() {
        ManifestDocument::default()
    } else {
        serde_yaml::from_str::<Option<ManifestDocument>>(contents)
            .map_err(|source| PolicyError::Parse {
                path: path.to_path_buf(),
                source,
            })?
            .unwrap_or_default()
    };

    let repos = doc.repos.unwrap_or_default();
    if repos.is_empty() {
        return Err(PolicyError::EmptyManifest {
            path: path.to_path_buf(),
        });
    }

    let mut entries = Vec::with_capacity(repos.len());
    for (idx, item) in repos.into_iter().enumerate() {
        let item = match item {
            Value::Mapping(_) => {
                serde_yaml::from_value::<PolicyDocument>(item).map_err(|source| {
                    PolicyError::Parse {
                        path: path.to_path_buf(),
                        source,
                    }
                })?
            }
            Value::Null => PolicyDocument::default(),
            other => {
                debug!(path = %path.display(), index = idx, item = ?other, "Manifest item is not a mapping");
                PolicyDocument::default()
            }
        };
        let permission = item
            .permission
            .map(|raw| parse_permission(path, &raw))
            .transpose()?;
        entries.push(PolicyEntry::new(
            EntrySource::ManifestIndex(idx),
            item.repository,
            item.teams.unwrap_or_default(),
            permission,
        ));
    }

    debug!(path = %path.display(), count = entries.len(), "Loaded manifest");
    Ok(entries)
}

fn parse_permission(path: &Path, raw: &str) -> PolicyResult<Permission> {
    raw.parse::<Permission>()
        .inspect_err(|_| debug!(path = %path.display(), "Rejected permission"))
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}
