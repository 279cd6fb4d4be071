//! Output file naming.
//!
//! Names are `"{base} - {label}.{ext}"`; when that is taken, `" (2)"`,
//! `" (3)"`, ... is inserted before the extension.

use std::path::{Path, PathBuf};

/// Path for a segment, with an optional collision counter.
pub fn segment_path(
    output_dir: &Path,
    base_name: &str,
    label: &str,
    extension: &str,
    counter: Option<u32>,
) -> PathBuf {
    let name = match counter {
        Some(n) => format!("{} - {} ({}).{}", base_name, label, n, extension),
        None => format!("{} - {}.{}", base_name, label, extension),
    };
    output_dir.join(name)
}

/// First free segment path according to `exists`.
///
/// The check is not atomic: another writer may claim the returned path
/// before it is used. Only one run may write to a directory at a time.
pub fn resolve_collision(
    output_dir: &Path,
    base_name: &str,
    label: &str,
    extension: &str,
    exists: impl Fn(&Path) -> bool,
) -> PathBuf {
    let candidate = segment_path(output_dir, base_name, label, extension, None);
    if !exists(&candidate) {
        return candidate;
    }

    (2u32..)
        .map(|n| segment_path(output_dir, base_name, label, extension, Some(n)))
        .find(|p| !exists(p))
        .unwrap_or(candidate)
}
