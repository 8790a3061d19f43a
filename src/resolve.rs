use log::info;

use crate::cache::Cache;
use crate::error::Result;
use crate::identifier::Identifier;
use crate::registry::Registry;

/// Look up the BibTeX entry for an already classified identifier.
///
/// PMIDs go through the ID converter first; an unknown PMID short-circuits
/// to `Ok(None)` without a DOI request.
pub fn fetch<R: Registry + ?Sized>(registry: &R, identifier: &Identifier) -> Result<Option<String>> {
    let doi = match identifier {
        Identifier::Pmid(pmid) => match registry.pm2doi(pmid)? {
            Some(doi) => doi,
            None => {
                info!("No DOI recorded for PMID {}", pmid);
                return Ok(None);
            }
        },
        other => match other.direct_doi() {
            Some(doi) => doi,
            None => return Ok(None),
        },
    };
    registry.doi2bib(&doi)
}

/// Classify `token` and fetch its entry, bypassing the cache.
///
/// Lookup errors are logged and reported as absence, like a plain miss.
pub fn classify_and_fetch<R: Registry + ?Sized>(registry: &R, token: &str) -> Option<String> {
    let result = match Identifier::classify(token) {
        Some(identifier) => {
            info!("{} detected: {}", identifier.kind(), token);
            fetch(registry, &identifier)
        }
        None => Ok(None),
    };

    match result {
        Ok(Some(bibtex)) => Some(bibtex),
        Ok(None) => {
            info!("No bibliography entry found for {}", token);
            None
        }
        Err(e) => {
            info!("Lookup for {} failed: {}", token, e);
            info!("No bibliography entry found for {}", token);
            None
        }
    }
}

/// Cache-aside resolution of a citation token.
///
/// A cached value is returned as-is; on a miss the entry is fetched and
/// stored only if one was found, so failed lookups are retried next run.
pub fn resolve<R: Registry + ?Sized>(cache: &mut Cache, registry: &R, token: &str) -> Option<String> {
    if let Some(bibtex) = cache.get(token) {
        info!("Cache hit for {}", token);
        return Some(bibtex.to_string());
    }
    let bibtex = classify_and_fetch(registry, token)?;
    cache.insert(token, bibtex.clone());
    Some(bibtex)
}
