use log::info;
use std::io::Write;

use crate::cache::Cache;
use crate::entry::finalize_entry;
use crate::error::Result;
use crate::extract::{extract_tokens, InputMode};
use crate::registry::Registry;
use crate::resolve::resolve;

/// Options for one run over an input document.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub mode: InputMode,
    /// Evict each token from the cache before resolving it.
    pub clear_cache: bool,
}

/// Resolve every citation token in `input` and write the entries to `out`
/// in token order. Unresolved tokens are skipped. Returns the number of
/// entries written.
pub fn convert<R, W>(
    input: &str,
    options: RunOptions,
    cache: &mut Cache,
    registry: &R,
    out: &mut W,
) -> Result<usize>
where
    R: Registry + ?Sized,
    W: Write + ?Sized,
{
    let mut written = 0;
    for rid in extract_tokens(input, options.mode) {
        info!("Reference ID: {}", rid);
        if options.clear_cache && cache.remove(&rid).is_some() {
            info!("Evicted {} from cache", rid);
        }
        if let Some(bibtex) = resolve(cache, registry, &rid) {
            out.write_all(finalize_entry(&bibtex, &rid).as_bytes())?;
            written += 1;
        }
    }
    out.flush()?;
    Ok(written)
}
