use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Filter applied to file names while walking the tree.
pub struct ConcatOptions {
    pub suffix: String,
}

impl Default for ConcatOptions {
    fn default() -> Self {
        Self {
            suffix: ".js".to_owned(),
        }
    }
}

/// Counts reported back to the caller after a completed run.
#[derive(Debug, Default)]
pub struct ConcatSummary {
    pub files: usize,
    pub unreadable: usize,
}

/// Walk `root` and append one block per matching file to `output`.
///
/// A block is the header line `//<name>` followed by the file content and one
/// trailing newline. A candidate that cannot be read is annotated inline in
/// the output and never aborts the run. The caller is expected to have
/// validated that `root` is a directory.
pub fn concatenate(root: &Path, output: &Path, opts: &ConcatOptions) -> Result<ConcatSummary> {
    let file = File::create(output)
        .with_context(|| format!("creating output file {}", output.display()))?;
    let mut out = BufWriter::new(file);

    let mut summary = ConcatSummary::default();
    walk_directory(root, &mut out, opts, &mut summary)?;

    out.flush()
        .with_context(|| format!("writing output file {}", output.display()))?;
    Ok(summary)
}

fn walk_directory(
    dir: &Path,
    out: &mut impl Write,
    opts: &ConcatOptions,
    summary: &mut ConcatSummary,
) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("skipping unreadable directory {}: {}", dir.display(), err);
            return Ok(());
        }
    };

    let mut files: Vec<PathBuf> = Vec::new();
    let mut subdirs: Vec<PathBuf> = Vec::new();
    for entry in entries.filter_map(|e| e.ok()) {
        match entry.file_type() {
            // Symlinked directories are not followed; symlinked files stay
            // candidates and surface as read errors when dangling.
            Ok(kind) if kind.is_dir() => subdirs.push(entry.path()),
            Ok(_) => files.push(entry.path()),
            Err(err) => warn!("skipping {}: {}", entry.path().display(), err),
        }
    }

    // Name-sorted, files before subdirectories: output order is stable across
    // platforms and repeated runs.
    files.sort();
    subdirs.sort();

    for path in files {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .into_owned();
        if !name.ends_with(&opts.suffix) {
            continue;
        }
        append_block(&path, &name, out, summary)?;
    }

    for path in subdirs {
        walk_directory(&path, out, opts, summary)?;
    }

    Ok(())
}

fn append_block(
    path: &Path,
    name: &str,
    out: &mut impl Write,
    summary: &mut ConcatSummary,
) -> Result<()> {
    writeln!(out, "//{}", name).context("writing output")?;
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!("bundled {}", path.display());
            summary.files += 1;
            out.write_all(content.as_bytes()).context("writing output")?;
            out.write_all(b"\n").context("writing output")?;
        }
        Err(err) => {
            warn!("cannot read {}: {}", path.display(), err);
            summary.unreadable += 1;
            writeln!(out, "// Impossibile leggere {}: {}", name, err).context("writing output")?;
        }
    }
    Ok(())
}
