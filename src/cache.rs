//! On-disk citation cache.
//!
//! Maps the raw citation token, exactly as it appeared in the input, to the
//! BibTeX text fetched for it. The whole file is a single JSON object that is
//! read on [`Cache::open`] and rewritten on [`Cache::flush`]. Entries never
//! expire; they only go away through [`Cache::remove`].

use log::{info, warn};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{Cit2BibError, Result};

const CACHE_FILE_NAME: &str = ".cit2bib.cache";

#[derive(Debug)]
pub struct Cache {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    dirty: bool,
}

impl Cache {
    /// Location of the cache when none is given explicitly: `CIT2BIB_CACHE`,
    /// otherwise `$HOME/.cit2bib.cache`.
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os("CIT2BIB_CACHE") {
            return Ok(PathBuf::from(path));
        }
        std::env::var_os("HOME")
            .map(|home| Path::new(&home).join(CACHE_FILE_NAME))
            .ok_or(Cit2BibError::NoHomeDirectory)
    }

    /// Open the cache stored at `path`. A missing file yields an empty cache.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries: BTreeMap<String, String> = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|source| {
                Cit2BibError::CorruptCache {
                    path: path.display().to_string(),
                    source,
                }
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        info!("Opened cache {:?} with {} entries", path, entries.len());
        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn insert(&mut self, token: impl Into<String>, bibtex: impl Into<String>) {
        self.entries.insert(token.into(), bibtex.into());
        self.dirty = true;
    }

    /// Evict `token`, returning the text that was cached for it.
    pub fn remove(&mut self, token: &str) -> Option<String> {
        let removed = self.entries.remove(token);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write pending changes to disk. The file is replaced atomically so a
    /// crash mid-write leaves the previous contents intact.
    pub fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, &self.entries)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        tmp.persist(&self.path).map_err(|e| e.error)?;

        self.dirty = false;
        info!("Wrote {} cache entries to {:?}", self.entries.len(), self.path);
        Ok(())
    }

    /// Flush and release the cache.
    pub fn close(mut self) -> Result<()> {
        self.flush()
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.flush() {
                warn!("Failed to write cache {:?}: {}", self.path, e);
            }
        }
    }
}
