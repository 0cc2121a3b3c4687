use std::path::{Path, PathBuf};
use wingman_core::paths::WINGMAN_DIR;

/// Resolve the data root holding the JSON files and `.wingman/`.
///
/// Priority:
/// 1. `WINGMANEM_ROOT` (passed in as `explicit`)
/// 2. Walk upward from `cwd` looking for `.wingman/`
/// 3. Fall back to `cwd`
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_marked_ancestor(&cwd).unwrap_or(cwd)
}

fn find_marked_ancestor(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(WINGMAN_DIR).is_dir())
        .map(Path::to_path_buf)
}
