// SPDX-License-Identifier: PMPL-1.0-or-later

//! Writing every bundle to disk, one file per language and format

use super::{BundleDocument, OutputFormat};
use crate::i18n::Language;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Write `strings-<code>.<ext>` for every language and format into `dir`.
///
/// The directory is created if needed; existing files are overwritten.
pub fn export_bundles(dir: &Path, formats: &[OutputFormat]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut written = Vec::new();
    for lang in Language::all() {
        let doc = BundleDocument::new(*lang);
        for format in formats {
            let path = dir.join(format!("strings-{}.{}", lang.code(), format.extension()));
            let content = format.render_bundle(&doc)?;
            fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
            log::info!("exported {} bundle to {}", lang, path.display());
            written.push(path);
        }
    }
    Ok(written)
}
