use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// The suffix may not contain `%`, `"`, `#`, `?` or whitespace and must end alphanumeric.
static DOI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"^(doi:)?(10[.][0-9]{2,}(?:[.][0-9]+)*/[^%"#?\s]+[a-zA-Z0-9])$"##)
        .expect("Invalid DOI regex pattern")
});
// Anchored at the start only: trailing text after the id is tolerated.
static ARXIV_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(arXiv:)?([0-9]+\.[0-9]+)(v[0-9])?").expect("Invalid arXiv regex pattern")
});
static PMID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(PMID:)?([0-9]{6,})$").expect("Invalid PMID regex pattern")
});

/// DOI prefix under which arXiv registers its preprints.
pub const ARXIV_DOI_PREFIX: &str = "10.48550/arxiv.";

/// A citation token recognised as one of the supported identifier schemes.
///
/// The wrapped string is the canonical identifier with any scheme prefix
/// (`doi:`, `arXiv:`, `PMID:`) and arXiv version suffix removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Doi(String),
    Arxiv(String),
    Pmid(String),
}

impl Identifier {
    /// Classify a raw citation token.
    ///
    /// Patterns are tried in the order DOI, arXiv, PMID and the first match
    /// wins. Returns `None` for tokens matching none of them.
    pub fn classify(token: &str) -> Option<Self> {
        if let Some(captures) = DOI_REGEX.captures(token) {
            return Some(Identifier::Doi(captures[2].to_string()));
        }
        if let Some(captures) = ARXIV_REGEX.captures(token) {
            return Some(Identifier::Arxiv(captures[2].to_string()));
        }
        if let Some(captures) = PMID_REGEX.captures(token) {
            return Some(Identifier::Pmid(captures[2].to_string()));
        }
        None
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Identifier::Doi(_) => "DOI",
            Identifier::Arxiv(_) => "ARXIV",
            Identifier::Pmid(_) => "PMID",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Identifier::Doi(v) | Identifier::Arxiv(v) | Identifier::Pmid(v) => v,
        }
    }

    /// The DOI this identifier resolves through, if it is known without a lookup.
    ///
    /// arXiv ids map onto DataCite's `10.48550/arxiv.<id>` DOIs; PMIDs need
    /// a registry round trip and return `None`.
    pub fn direct_doi(&self) -> Option<String> {
        match self {
            Identifier::Doi(doi) => Some(doi.clone()),
            Identifier::Arxiv(id) => Some(format!("{}{}", ARXIV_DOI_PREFIX, id)),
            Identifier::Pmid(_) => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.value())
    }
}
