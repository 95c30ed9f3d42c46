//! Recursive discovery of convertible images below a root directory.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;
use crate::utils::{OptimizerResult, ensure_readable_dir, normalize_extension};

/// Collects every regular file (or symlink to one) under `root` whose
/// extension matches one of `extensions`, compared case-insensitively.
///
/// Fails with a filesystem error when `root` is missing or unreadable.
/// Unreadable entries below the root are logged and skipped. Each file is
/// returned once; the list is sorted but callers should not depend on order.
pub fn discover_images(root: &Path, extensions: &[String]) -> OptimizerResult<Vec<PathBuf>> {
    ensure_readable_dir(root)?;

    let allowed: BTreeSet<String> = extensions.iter()
        .map(|e| normalize_extension(e))
        .filter(|e| !e.is_empty())
        .collect();

    info!("Scanning {} for: {}", root.display(), allowed.iter().cloned().collect::<Vec<_>>().join(", "));

    let mut found = BTreeSet::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        // Symlinked files count; symlinked directories are not descended into
        if !entry.path().is_file() {
            continue;
        }

        let matches = entry.path()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| allowed.contains(&normalize_extension(e)))
            .unwrap_or(false);

        if matches {
            found.insert(entry.into_path());
        }
    }

    debug!("Discovered {} candidate images", found.len());
    Ok(found.into_iter().collect())
}
