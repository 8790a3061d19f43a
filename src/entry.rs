use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BIBTEX_KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(@[a-z]+\{)([^,]+)").expect("Invalid BibTeX key regex pattern"));

/// Replace the key of every `@type{key,` header with `token`, so that
/// `\cite{token}` in the document resolves against the fetched entry.
pub fn rekey(bibtex: &str, token: &str) -> String {
    BIBTEX_KEY_REGEX
        .replace_all(bibtex, |caps: &Captures| format!("{}{}", &caps[1], token))
        .into_owned()
}

/// Undo the URL-encoding of `/` that DOI-derived keys and URLs carry.
pub fn unescape_slashes(bibtex: &str) -> String {
    bibtex.replace("%2F", "/")
}

/// Turn a fetched entry into output text for `token`: rekeyed, `%2F`
/// decoded, trailing whitespace collapsed to a single newline.
pub fn finalize_entry(bibtex: &str, token: &str) -> String {
    let mut entry = unescape_slashes(&rekey(bibtex, token));
    entry.truncate(entry.trim_end().len());
    entry.push('\n');
    entry
}
