//! Document service - list/read/update/init over `<root>/.soloflow/`
//!
//! Shared by the MCP tools and the CLI. Every operation validates its inputs
//! (root first, then document type, then content) before touching the
//! filesystem, and re-derives all paths from its arguments.

use crate::context::{self, RULES_FILE};
use crate::error::{DocumentError, RootError};
use crate::models::{
    extract_title, DocumentSummary, DocumentType, InitReport, ReadResult, UpdateResult,
};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Editor rule template written by `init`
const RULES_TEMPLATE: &str = include_str!("../resources/soloflow.mdc");

type Result<T> = std::result::Result<T, DocumentError>;

/// Access layer for the per-project document store
///
/// Cheap to clone; clones share the per-document write locks.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    allowed_roots: Arc<Vec<PathBuf>>,
    write_locks: Arc<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>>,
}

impl DocumentStore {
    /// Store that accepts any root passing the system-path checks
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that only accepts roots equal to or below one of `roots`
    ///
    /// An empty list disables the restriction.
    pub fn with_allowed_roots(roots: Vec<PathBuf>) -> Self {
        let roots = roots
            .into_iter()
            .map(|r| fs::canonicalize(&r).unwrap_or(r))
            .collect();
        Self {
            allowed_roots: Arc::new(roots),
            write_locks: Arc::default(),
        }
    }

    pub fn allowed_roots(&self) -> &[PathBuf] {
        &self.allowed_roots
    }

    /// List the documents present in the store, ordered by document type
    pub fn list(&self, root: impl AsRef<Path>) -> Result<Vec<DocumentSummary>> {
        let root = self.validate_root(root.as_ref())?;
        let store_dir = context::store_directory(&root);

        if !store_dir.is_dir() {
            return Ok(Vec::new());
        }
        context::ensure_within_root(&root, &store_dir)?;

        let entries =
            fs::read_dir(&store_dir).map_err(|e| DocumentError::io("list", &store_dir, e))?;

        let mut documents = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DocumentError::io("list", &store_dir, e))?;
            let path = entry.path();

            if path.extension().map_or(true, |ext| ext != "md") || !path.is_file() {
                continue;
            }
            let Some(doc_type) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<DocumentType>().ok())
            else {
                tracing::debug!(path = %path.display(), "ignoring unrecognized markdown file");
                continue;
            };

            if let Err(e) = context::ensure_within_root(&root, &path) {
                tracing::warn!(path = %path.display(), error = %e, "skipping document outside the project root");
                continue;
            }

            let last_updated = match fs::metadata(&path).and_then(|m| m.modified()) {
                Ok(modified) => DateTime::<Utc>::from(modified),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable document");
                    continue;
                }
            };

            documents.push(DocumentSummary {
                doc_type,
                name: doc_type.file_name(),
                title: read_title(&path),
                last_updated,
            });
        }

        documents.sort_by_key(|d| d.doc_type);
        Ok(documents)
    }

    /// Read a document; `raw` is `None` when it has never been written
    pub fn read(&self, root: impl AsRef<Path>, doc_type: &str) -> Result<ReadResult> {
        let root = self.validate_root(root.as_ref())?;
        let doc_type: DocumentType = doc_type.parse()?;
        let path = context::document_path(&root, doc_type);

        context::ensure_within_root(&root, &context::store_directory(&root))?;
        context::ensure_within_root(&root, &path)?;

        match fs::read_to_string(&path) {
            Ok(content) => Ok(ReadResult { raw: Some(content) }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ReadResult { raw: None }),
            Err(e) => Err(DocumentError::io("read", &path, e)),
        }
    }

    /// Replace a document with `content`
    ///
    /// The new content is written to a temporary file next to the target and
    /// renamed over it, so readers see either the old or the new document.
    /// Concurrent updates of the same document through this store are
    /// serialized; the last one wins.
    pub fn update(
        &self,
        root: impl AsRef<Path>,
        doc_type: &str,
        content: &str,
    ) -> Result<UpdateResult> {
        let root = self.validate_root(root.as_ref())?;
        let doc_type: DocumentType = doc_type.parse()?;
        if content.trim().is_empty() {
            return Err(DocumentError::EmptyContent);
        }

        let store_dir = context::store_directory(&root);
        let path = context::document_path(&root, doc_type);
        check_within_root(&root, &path)?;
        create_dir_within(&root, &store_dir)?;

        let lock = self.lock_for(&path);
        let written = {
            let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            replace_atomically(&store_dir, &path, content)
        };
        self.release_lock(&path, lock);
        written?;

        tracing::info!(doc_type = %doc_type, path = %path.display(), bytes = content.len(), "document updated");
        Ok(UpdateResult { ok: true })
    }

    /// Create the store directory and the editor rule file, never overwriting
    pub fn init(&self, root: impl AsRef<Path>) -> Result<InitReport> {
        let root = self.validate_root(root.as_ref())?;
        let store_dir = context::store_directory(&root);
        let rules_path = context::rules_path(&root);

        // Nothing is created until both targets are known to stay inside the root
        check_within_root(&root, &store_dir)?;
        check_within_root(&root, &rules_path)?;

        create_dir_within(&root, &store_dir)?;
        if let Some(rules_dir) = rules_path.parent() {
            create_dir_within(&root, rules_dir)?;
        }

        let mut created_files = Vec::new();
        let mut skipped_files = Vec::new();

        if write_new_file(&rules_path, RULES_TEMPLATE)? {
            created_files.push(RULES_FILE.to_string());
        } else {
            skipped_files.push(RULES_FILE.to_string());
        }

        tracing::info!(
            root = %root.display(),
            created = created_files.len(),
            skipped = skipped_files.len(),
            "project initialized"
        );
        Ok(InitReport::new(created_files, skipped_files))
    }

    fn validate_root(&self, root: &Path) -> Result<PathBuf> {
        let canonical = context::validate_root(root)?;

        if !self.allowed_roots.is_empty()
            && !self
                .allowed_roots
                .iter()
                .any(|allowed| canonical.starts_with(allowed))
        {
            return Err(RootError::OutsideAllowedRoots(canonical).into());
        }

        Ok(canonical)
    }

    fn lock_for(&self, path: &Path) -> Arc<Mutex<()>> {
        let mut locks = self
            .write_locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(locks.entry(path.to_path_buf()).or_default())
    }

    /// Drop the map entry for `path` once no other writer holds or awaits it
    fn release_lock(&self, path: &Path, lock: Arc<Mutex<()>>) {
        let mut locks = self
            .write_locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // Clones are only handed out under the map lock: map + `lock` means idle
        if Arc::strong_count(&lock) == 2 {
            locks.remove(path);
        }
    }
}

/// First-line title of a document; any read failure means no title
fn read_title(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut first_line = String::new();
    BufReader::new(file).read_line(&mut first_line).ok()?;
    extract_title(&first_line)
}

/// Check `path` and each of its existing ancestors below `root`, outermost first
fn check_within_root(root: &Path, path: &Path) -> Result<()> {
    let mut ancestors: Vec<&Path> = path
        .ancestors()
        .take_while(|ancestor| *ancestor != root && ancestor.starts_with(root))
        .collect();
    ancestors.reverse();
    for ancestor in ancestors {
        context::ensure_within_root(root, ancestor)?;
    }
    Ok(())
}

/// Create `dir` below `root` once no existing component resolves outside it
fn create_dir_within(root: &Path, dir: &Path) -> Result<()> {
    check_within_root(root, dir)?;
    fs::create_dir_all(dir).map_err(|e| DocumentError::io("create directory", dir, e))?;
    context::ensure_within_root(root, dir)?;
    Ok(())
}

/// Write `content` to a temp file in `store_dir` and rename it over `path`
fn replace_atomically(store_dir: &Path, path: &Path, content: &str) -> Result<()> {
    let mut temp = tempfile::NamedTempFile::new_in(store_dir)
        .map_err(|e| DocumentError::io("create temporary file in", store_dir, e))?;
    temp.write_all(content.as_bytes())
        .and_then(|_| temp.as_file().sync_all())
        .and_then(|_| carry_permissions(temp.as_file(), path))
        .map_err(|e| DocumentError::io("write", path, e))?;
    temp.persist(path)
        .map_err(|e| DocumentError::io("replace", path, e.error))?;
    Ok(())
}

/// Give the replacement file the target's permissions, or regular file
/// permissions when the target is new (temp files start owner-only).
fn carry_permissions(file: &File, target: &Path) -> std::io::Result<()> {
    match fs::metadata(target) {
        Ok(metadata) => file.set_permissions(metadata.permissions()),
        #[cfg(unix)]
        Err(_) => {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o644))
        }
        #[cfg(not(unix))]
        Err(_) => Ok(()),
    }
}

/// Write `content` to `path` only if nothing exists there yet.
///
/// Returns `false` when the file was already present.
fn write_new_file(path: &Path, content: &str) -> Result<bool> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(content.as_bytes())
                .map_err(|e| DocumentError::io("write", path, e))?;
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(DocumentError::io("create", path, e)),
    }
}
