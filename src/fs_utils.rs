use std::{
    ffi::OsString,
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};

/// Extensions offered by the open dialog's image filter.
pub const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Splits a file name into stem and suffix, where the suffix keeps its leading dot.
/// Names without an extension, and dotfiles such as `.jpg`, have an empty suffix.
pub fn split_name(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();
    (stem, suffix)
}

/// `{stem}-{label}{suffix}` for the source path, e.g. `photo-Lanczos.jpg`.
pub fn suggested_file_name(source: &Path, label: &str) -> String {
    let (stem, suffix) = split_name(source);
    format!("{stem}-{label}{suffix}")
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Sibling path used while a save is in flight, so a failed write never truncates `path`.
pub fn partial_path(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("{} has no file name", path.display()))?;
    let mut partial = OsString::from(".");
    partial.push(file_name);
    partial.push(".partial");
    Ok(path.with_file_name(partial))
}

/// Writes through `write` into a temporary sibling file, then renames it over `path`.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<fs::File>) -> Result<()>,
{
    let temp_path = partial_path(path)?;
    let result = (|| -> Result<()> {
        let file = fs::File::create(&temp_path)
            .with_context(|| format!("Unable to create {}", temp_path.display()))?;
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer
            .flush()
            .with_context(|| format!("Unable to write {}", temp_path.display()))?;
        Ok(())
    })();

    if let Err(err) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err).with_context(|| {
            format!(
                "Unable to move {} to {}",
                temp_path.display(),
                path.display()
            )
        });
    }
    Ok(())
}
