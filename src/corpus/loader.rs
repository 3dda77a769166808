use crate::utils::hex_encode;
use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// A loaded input file
#[derive(Debug, Clone)]
pub struct Document {
    /// Path the document was read from
    pub name: PathBuf,
    /// Contents (hex text when loaded with `hex`)
    pub bytes: Vec<u8>,
}

impl AsRef<[u8]> for Document {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// A file that was found but not loaded
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Options for [`load_documents`]
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Hex-encode contents, two digits per byte
    pub hex: bool,
    /// Files larger than this are skipped (bytes)
    pub max_file_size: u64,
    /// Include hidden files when walking directories
    pub hidden: bool,
    /// Keep only walked files matching one of these globs (all when empty)
    pub globs: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            hex: false,
            max_file_size: 64 * 1024 * 1024,
            hidden: false,
            globs: Vec::new(),
        }
    }
}

/// Documents in input order plus the files left out
#[derive(Debug, Default)]
pub struct LoadedCorpus {
    pub documents: Vec<Document>,
    pub skipped: Vec<SkippedFile>,
}

/// Load every file named by `paths`
///
/// Explicit file paths are kept in the order given. A directory expands in
/// place to its files, sorted by path. Files are read in parallel.
pub fn load_documents(paths: &[PathBuf], options: &LoadOptions) -> Result<LoadedCorpus> {
    let globs = build_glob_set(&options.globs)?;
    let mut skipped = Vec::new();
    let mut files = Vec::new();

    for path in paths {
        let meta = fs::metadata(path)
            .with_context(|| format!("Cannot access {}", path.display()))?;
        if meta.is_dir() {
            walk_directory(path, options, globs.as_ref(), &mut files, &mut skipped);
        } else {
            files.push(path.clone());
        }
    }

    // collect() on an indexed parallel iterator keeps input order
    let outcomes: Vec<Result<Document, SkippedFile>> = files
        .into_par_iter()
        .map(|path| read_document(path, options))
        .collect();

    let mut documents = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            Ok(doc) => documents.push(doc),
            Err(skip) => skipped.push(skip),
        }
    }

    Ok(LoadedCorpus { documents, skipped })
}

fn build_glob_set(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .with_context(|| format!("Invalid glob pattern: {}", pattern))?;
        builder.add(glob);
    }
    Ok(Some(builder.build().context("Failed to compile glob patterns")?))
}

fn walk_directory(
    root: &Path,
    options: &LoadOptions,
    globs: Option<&GlobSet>,
    files: &mut Vec<PathBuf>,
    skipped: &mut Vec<SkippedFile>,
) {
    let walker = WalkBuilder::new(root)
        .hidden(!options.hidden)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .filter_entry(|entry| entry.file_name() != ".git")
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                skipped.push(SkippedFile {
                    path: root.to_path_buf(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        if let Some(globs) = globs {
            let rel = path.strip_prefix(root).unwrap_or(path);
            if !globs.is_match(rel) {
                continue;
            }
        }
        files.push(path.to_path_buf());
    }
}

fn read_document(path: PathBuf, options: &LoadOptions) -> Result<Document, SkippedFile> {
    let skip = |reason: String| SkippedFile {
        path: path.clone(),
        reason,
    };

    let size = fs::metadata(&path).map_err(|e| skip(e.to_string()))?.len();
    if size > options.max_file_size {
        return Err(skip(format!(
            "larger than {} bytes ({} bytes)",
            options.max_file_size, size
        )));
    }

    let raw = fs::read(&path).map_err(|e| skip(e.to_string()))?;
    let bytes = if options.hex { hex_encode(&raw) } else { raw };

    Ok(Document { name: path, bytes })
}
