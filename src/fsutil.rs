//! Filesystem helpers: destructive directory reset and recursive copies.

use crate::error::Result;
use log::debug;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Deletes `dir` with all of its contents if present, then recreates it empty.
pub fn reset_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        debug!("Removing existing directory '{}'", dir.display());
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Drops `.` components so `./src/x` and `src/x` compare equal.
pub fn normalize_relative(path: &Path) -> PathBuf {
    path.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}

/// Copies a single file or symlink, creating parent directories as needed.
pub fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        if fs::symlink_metadata(source)?.file_type().is_symlink() {
            let link = fs::read_link(source)?;
            if fs::symlink_metadata(dest).is_ok() {
                fs::remove_file(dest)?;
            }
            std::os::unix::fs::symlink(link, dest)?;
            return Ok(());
        }
    }

    fs::copy(source, dest)?;
    Ok(())
}

/// Recursively copies `source` (file or directory) to `dest`, keeping the
/// entries for which `keep` returns true. `keep` receives source-relative
/// paths; a rejected directory is not descended into.
///
/// Returns the destination paths of the copied files.
pub fn copy_tree<F>(source: &Path, dest: &Path, mut keep: F) -> Result<Vec<PathBuf>>
where
    F: FnMut(&Path) -> bool,
{
    let mut copied = Vec::new();
    let walker = WalkDir::new(source).follow_links(false).into_iter().filter_entry(|entry| {
        match entry.path().strip_prefix(source) {
            Ok(relative) if relative.as_os_str().is_empty() => true,
            Ok(relative) => {
                let kept = keep(relative);
                if !kept {
                    debug!("Skipping '{}'", relative.display());
                }
                kept
            }
            Err(_) => false,
        }
    });

    for entry in walker {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let target = if relative.as_os_str().is_empty() {
            dest.to_path_buf()
        } else {
            dest.join(relative)
        };

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            debug!("Copying '{}' to '{}'", entry.path().display(), target.display());
            copy_file(entry.path(), &target)?;
            copied.push(target);
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_relative() {
        assert_eq!(normalize_relative(Path::new("./src/x")), PathBuf::from("src/x"));
        assert_eq!(normalize_relative(Path::new("src/./x")), PathBuf::from("src/x"));
    }

    #[test]
    fn test_reset_dir_clears_contents() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("out");
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("nested/stale.txt"), "stale").unwrap();

        reset_dir(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[test]
    fn test_copy_tree_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("a.txt");
        fs::write(&file, "a").unwrap();
        let dest = temp_dir.path().join("out/b.txt");

        let copied = copy_tree(&file, &dest, |_| true).unwrap();

        assert_eq!(copied, vec![dest.clone()]);
        assert_eq!(fs::read_to_string(dest).unwrap(), "a");
    }

    #[test]
    fn test_copy_tree_filter_prunes_directories() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src");
        fs::create_dir_all(src.join("keep")).unwrap();
        fs::create_dir_all(src.join("drop")).unwrap();
        fs::write(src.join("keep/k.txt"), "k").unwrap();
        fs::write(src.join("drop/d.txt"), "d").unwrap();
        let dest = temp_dir.path().join("dest");

        copy_tree(&src, &dest, |p| !p.starts_with("drop")).unwrap();

        assert!(dest.join("keep/k.txt").exists());
        assert!(!dest.join("drop").exists());
    }
}
