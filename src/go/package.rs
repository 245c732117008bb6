//! Loading a directory of Go files as packages.

use crate::go::errors::SourceError;
use crate::go::node::GoNode;
use crate::go::parser::SourceFile;
use crate::pool::with_parser;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Also load `_test.go` files.
    pub include_tests: bool,
}

/// Files sharing one `package` clause, in path order.
#[derive(Debug)]
pub struct GoPackage {
    name: String,
    files: Vec<SourceFile>,
}

impl GoPackage {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    pub fn into_files(self) -> Vec<SourceFile> {
        self.files
    }

    /// One query root per file.
    pub fn roots(&self) -> Vec<GoNode<'_>> {
        self.files.iter().map(SourceFile::root).collect()
    }
}

/// Parse one Go file through the pooled parser.
pub fn load_file(path: &Path) -> Result<SourceFile, SourceError> {
    let file = with_parser(|parser| parser.parse_file(path))??;
    if file.has_errors() {
        tracing::warn!(
            path = %path.display(),
            errors = file.error_nodes().len(),
            "file has syntax errors"
        );
    }
    Ok(file)
}

/// Parse every `.go` file directly inside `dir`, grouped by package name.
///
/// Subdirectories are separate packages and are not descended into. Files
/// without a `package` clause are skipped with a warning.
pub fn load_packages(
    dir: &Path,
    options: LoadOptions,
) -> Result<BTreeMap<String, GoPackage>, SourceError> {
    if !dir.is_dir() {
        return Err(SourceError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut packages: BTreeMap<String, GoPackage> = BTreeMap::new();
    for path in go_files(dir, options)? {
        let file = load_file(&path)?;
        let Some(name) = file.package_name().map(str::to_string) else {
            tracing::warn!(path = %path.display(), "no package clause, skipping");
            continue;
        };
        packages
            .entry(name.clone())
            .or_insert_with(|| GoPackage {
                name,
                files: Vec::new(),
            })
            .files
            .push(file);
    }

    tracing::debug!(dir = %dir.display(), packages = packages.len(), "loaded packages");
    Ok(packages)
}

fn go_files(dir: &Path, options: LoadOptions) -> Result<Vec<PathBuf>, SourceError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| SourceError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|s| s.to_str()) != Some("go")
        {
            continue;
        }
        let is_test = path
            .file_name()
            .and_then(|s| s.to_str())
            .is_some_and(|name| name.ends_with("_test.go"));
        if is_test && !options.include_tests {
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}
