use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{Cit2BibError, Result};

pub const DEFAULT_DOI_BASE_URL: &str = "https://doi.org";
pub const DEFAULT_IDCONV_URL: &str = "https://www.pubmedcentral.nih.gov/utils/idconv/v1.0/";

const BIBTEX_CONTENT_TYPE: &str = "application/x-bibtex; charset=utf-8";

/// External lookups needed to turn an identifier into a BibTeX entry.
///
/// `Ok(None)` means the registry answered and has nothing for the id;
/// `Err` covers everything else (transport failures, server errors,
/// unreadable payloads).
pub trait Registry {
    /// Fetch the BibTeX entry registered for `doi`.
    fn doi2bib(&self, doi: &str) -> Result<Option<String>>;

    /// Map a PubMed id onto its DOI.
    fn pm2doi(&self, pmid: &str) -> Result<Option<String>>;
}

/// `Registry` backed by doi.org content negotiation and the PMC ID converter.
pub struct HttpRegistry {
    client: Client,
    doi_base_url: String,
    idconv_url: String,
}

impl HttpRegistry {
    pub fn new(doi_base_url: impl Into<String>, idconv_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("cit2bib/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            doi_base_url: doi_base_url.into().trim_end_matches('/').to_string(),
            idconv_url: idconv_url.into(),
        })
    }

    /// Build a registry from `DOI_BASE_URL` / `IDCONV_BASE_URL`, falling back
    /// to the public endpoints.
    pub fn from_env() -> Result<Self> {
        let doi_base_url =
            std::env::var("DOI_BASE_URL").unwrap_or_else(|_| DEFAULT_DOI_BASE_URL.to_string());
        let idconv_url =
            std::env::var("IDCONV_BASE_URL").unwrap_or_else(|_| DEFAULT_IDCONV_URL.to_string());
        Self::new(doi_base_url, idconv_url)
    }
}

impl Registry for HttpRegistry {
    fn doi2bib(&self, doi: &str) -> Result<Option<String>> {
        let url = format!("{}/{}", self.doi_base_url, doi);
        info!("Fetching BibTeX for DOI {}", doi);
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, BIBTEX_CONTENT_TYPE)
            .send()?;

        let status = response.status();
        if status.is_success() {
            return Ok(Some(response.text()?));
        }
        if status.is_server_error() {
            return Err(Cit2BibError::ApiError(format!(
                "doi.org returned status {} for {}",
                status, doi
            )));
        }
        if status != StatusCode::NOT_FOUND {
            debug!("doi.org returned status {} for {}", status, doi);
        }
        Ok(None)
    }

    fn pm2doi(&self, pmid: &str) -> Result<Option<String>> {
        info!("Converting PMID {} to DOI", pmid);
        let response = self
            .client
            .get(&self.idconv_url)
            .query(&[("format", "json"), ("ids", pmid)])
            .send()?;

        if !response.status().is_success() {
            debug!("ID converter returned status {} for PMID {}", response.status(), pmid);
            return Ok(None);
        }

        let json: Value = response
            .json()
            .map_err(|e| Cit2BibError::MalformedResponse {
                endpoint: self.idconv_url.clone(),
                reason: e.to_string(),
            })?;
        debug!("ID converter response for {}: {}", pmid, json);

        Ok(doi_from_idconv(&json))
    }
}

/// Pull `records[0].doi` out of an ID-converter response.
pub fn doi_from_idconv(json: &Value) -> Option<String> {
    json.get("records")
        .and_then(|r| r.as_array())
        .and_then(|records| records.first())
        .and_then(|record| record.get("doi"))
        .and_then(|doi| doi.as_str())
        .map(|doi| doi.to_string())
}
