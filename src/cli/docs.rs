//! Document store commands: init, list, read, update
//!
//! Same operations as the MCP tools, printed for a terminal.

use crate::services::DocumentStore;
use crate::Result;
use anyhow::Context;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Create `.soloflow/` and the editor rule file
pub fn run_init(store: &DocumentStore, root: &Path) -> Result<()> {
    println!("{}", "🚀 Initializing SoloFlow project...".cyan());

    let report = store.init(root)?;
    for line in report.message.lines() {
        println!("{}", line);
    }
    Ok(())
}

/// Print the documents in the store
pub fn run_list(store: &DocumentStore, root: &Path) -> Result<()> {
    let documents = store.list(root)?;

    if documents.is_empty() {
        println!("{}", "No documents found. Run 'soloflow-mcp init' first.".yellow());
        return Ok(());
    }

    println!("{}", "📋 Documents:".green().bold());
    for doc in &documents {
        let title = doc.title.as_deref().unwrap_or("(untitled)");
        println!(
            "   • {:<22} {} {}",
            doc.doc_type.as_str().cyan(),
            title,
            format!("[{}]", doc.last_updated.format("%Y-%m-%d %H:%M")).dimmed()
        );
    }
    Ok(())
}

/// Print one document
pub fn run_read(store: &DocumentStore, root: &Path, doc_type: &str) -> Result<()> {
    match store.read(root, doc_type)?.raw {
        Some(content) => print!("{}", content),
        None => println!("{}", format!("Document not found: {}", doc_type).yellow()),
    }
    Ok(())
}

/// Replace one document with `--content` text or the contents of `--file`
pub fn run_update(
    store: &DocumentStore,
    root: &Path,
    doc_type: &str,
    content: Option<String>,
    file: Option<PathBuf>,
) -> Result<()> {
    let content = resolve_content(content, file)?;
    store.update(root, doc_type, &content)?;
    println!("{}", format!("✓ Updated {}", doc_type).green());
    Ok(())
}

fn resolve_content(content: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (content, file) {
        (Some(content), None) => Ok(content),
        (None, Some(file)) => fs::read_to_string(&file)
            .with_context(|| format!("Failed to read {}", file.display())),
        (Some(_), Some(_)) => anyhow::bail!("Use either --content or --file, not both"),
        (None, None) => anyhow::bail!("Either --content or --file is required"),
    }
}
