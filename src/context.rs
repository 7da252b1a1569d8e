//! Project root validation and path resolution
//!
//! A project root is accepted when it is absolute, does not live under a
//! system directory, exists, and is a directory. The system-directory check
//! is a denylist and only advisory; the store additionally confines every
//! resolved path to the canonical root (see [`ensure_within_root`]) and may
//! restrict roots to an allowlist (see `ServerConfig::allowed_roots`).

use crate::error::RootError;
use crate::models::DocumentType;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Name of the per-project document directory
pub const STORE_DIR_NAME: &str = ".soloflow";

/// Editor rule file managed by `init`, relative to the project root
pub const RULES_FILE: &str = ".cursor/rules/soloflow.mdc";

const FORBIDDEN_UNIX_PREFIXES: &[&str] = &[
    "/etc", "/var", "/usr", "/bin", "/sbin", "/dev", "/proc", "/sys",
];

const FORBIDDEN_WINDOWS_PREFIXES: &[&str] = &[
    r"C:\Windows",
    r"C:\System32",
    r"C:\Program Files",
    r"C:\Program Files (x86)",
];

/// `<root>/.soloflow`
pub fn store_directory(root: &Path) -> PathBuf {
    root.join(STORE_DIR_NAME)
}

/// `<root>/.soloflow/<type>.md`
pub fn document_path(root: &Path, doc_type: DocumentType) -> PathBuf {
    store_directory(root).join(doc_type.file_name())
}

/// `<root>/.cursor/rules/soloflow.mdc`
pub fn rules_path(root: &Path) -> PathBuf {
    RULES_FILE.split('/').fold(root.to_path_buf(), |p, part| p.join(part))
}

/// Validate a project root and return its canonical form
pub fn validate_root(root: &Path) -> Result<PathBuf, RootError> {
    if !root.is_absolute() {
        return Err(RootError::NotAbsolute(root.to_path_buf()));
    }

    let resolved = match fs::canonicalize(root) {
        Ok(path) => strip_verbatim(path),
        Err(e) if e.kind() == ErrorKind::NotFound => normalize_lexically(root),
        Err(e) => return Err(RootError::Inspect(root.to_path_buf(), e)),
    };

    if is_forbidden(&resolved) {
        return Err(RootError::ForbiddenSystemPath(resolved));
    }

    let metadata = match fs::metadata(&resolved) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(RootError::NotFound(resolved)),
        Err(e) => return Err(RootError::Inspect(resolved, e)),
    };

    if !metadata.is_dir() {
        return Err(RootError::NotADirectory(resolved));
    }

    Ok(resolved)
}

/// Reject `path` if it resolves (through symlinks) outside `canonical_root`.
///
/// Paths that do not exist yet cannot escape and are accepted.
pub fn ensure_within_root(canonical_root: &Path, path: &Path) -> Result<(), RootError> {
    if fs::symlink_metadata(path).is_err() {
        return Ok(());
    }

    let resolved = match fs::canonicalize(path) {
        Ok(p) => strip_verbatim(p),
        // Dangling symlink: its target is wherever it points, treat as escape
        Err(_) => return Err(RootError::EscapesRoot(path.to_path_buf())),
    };

    if resolved.starts_with(canonical_root) {
        Ok(())
    } else {
        Err(RootError::EscapesRoot(resolved))
    }
}

/// Whether `path` equals or lies under a denylisted system directory
pub fn is_forbidden(path: &Path) -> bool {
    if FORBIDDEN_UNIX_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        return true;
    }

    let text = path.to_string_lossy();
    FORBIDDEN_WINDOWS_PREFIXES
        .iter()
        .any(|prefix| has_windows_prefix(&text, prefix))
}

fn has_windows_prefix(text: &str, prefix: &str) -> bool {
    let Some(head) = text.get(..prefix.len()) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(prefix) {
        return false;
    }
    matches!(text[prefix.len()..].chars().next(), None | Some('\\') | Some('/'))
}

/// Resolve `.` and `..` without touching the filesystem
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Drop the `\\?\` prefix Windows adds to canonical paths
fn strip_verbatim(path: PathBuf) -> PathBuf {
    match path.to_str().and_then(|s| s.strip_prefix(r"\\?\")) {
        Some(stripped) => PathBuf::from(stripped),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_resolver() {
        let root = Path::new("/home/user/proj");
        assert_eq!(store_directory(root), PathBuf::from("/home/user/proj/.soloflow"));
        assert_eq!(
            document_path(root, DocumentType::Tasks),
            PathBuf::from("/home/user/proj/.soloflow/tasks.md")
        );
        assert_eq!(
            rules_path(root),
            PathBuf::from("/home/user/proj/.cursor/rules/soloflow.mdc")
        );
    }

    #[test]
    fn test_relative_root_rejected() {
        let err = validate_root(Path::new("relative/dir")).unwrap_err();
        assert!(matches!(err, RootError::NotAbsolute(_)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_system_paths_rejected() {
        for path in ["/etc", "/etc/", "/usr/local", "/proc/self", "/var/does/not/exist"] {
            let err = validate_root(Path::new(path)).unwrap_err();
            assert!(
                matches!(err, RootError::ForbiddenSystemPath(_)),
                "{} was not rejected as a system path: {:?}",
                path,
                err
            );
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_dot_dot_cannot_dodge_denylist() {
        let err = validate_root(Path::new("/nonexistent-root/../etc")).unwrap_err();
        assert!(matches!(err, RootError::ForbiddenSystemPath(_)));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_symlink_into_system_dir_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("sneaky");
        std::os::unix::fs::symlink("/etc", &link).unwrap();

        let err = validate_root(&link).unwrap_err();
        assert!(matches!(err, RootError::ForbiddenSystemPath(_)));
    }

    #[test]
    fn test_prefix_match_is_per_component() {
        assert!(is_forbidden(Path::new("/etc")));
        assert!(is_forbidden(Path::new("/etc/nginx")));
        assert!(!is_forbidden(Path::new("/etcetera")));
        assert!(!is_forbidden(Path::new("/home/etc")));
        assert!(is_forbidden(Path::new(r"C:\Windows\Temp")));
        assert!(is_forbidden(Path::new(r"c:\program files (x86)")));
        assert!(!is_forbidden(Path::new(r"C:\WindowsApps")));
    }

    #[test]
    fn test_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        let err = validate_root(&missing).unwrap_err();
        assert!(matches!(err, RootError::NotFound(_)));
    }

    #[test]
    fn test_file_root() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        let err = validate_root(&file).unwrap_err();
        assert!(matches!(err, RootError::NotADirectory(_)));
    }

    #[test]
    fn test_valid_root_is_canonical() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a");
        std::fs::create_dir(&nested).unwrap();

        let with_dots = nested.join("..").join("a").join(".");
        let resolved = validate_root(&with_dots).unwrap();
        assert_eq!(resolved, std::fs::canonicalize(&nested).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_ensure_within_root() {
        let temp_dir = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let root = std::fs::canonicalize(temp_dir.path()).unwrap();

        // Not existing yet: fine
        assert!(ensure_within_root(&root, &root.join(".soloflow")).is_ok());

        std::fs::create_dir(root.join("inside")).unwrap();
        assert!(ensure_within_root(&root, &root.join("inside")).is_ok());

        std::os::unix::fs::symlink(outside.path(), root.join(".soloflow")).unwrap();
        let err = ensure_within_root(&root, &root.join(".soloflow")).unwrap_err();
        assert!(matches!(err, RootError::EscapesRoot(_)));
    }
}
