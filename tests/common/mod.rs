#![allow(dead_code)]

use cit2bib::error::{Cit2BibError, Result};
use cit2bib::Registry;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory registry that records every lookup it receives.
#[derive(Default)]
pub struct MockRegistry {
    pub bibs: HashMap<String, String>,
    pub pmids: HashMap<String, String>,
    /// Answer every DOI with a stub entry instead of consulting `bibs`.
    pub any_doi: bool,
    /// Fail every DOI lookup as a transient error.
    pub fail_doi: bool,
    pub doi_calls: RefCell<Vec<String>>,
    pub pmid_calls: RefCell<Vec<String>>,
}

impl MockRegistry {
    pub fn with_bib(mut self, doi: &str, bibtex: &str) -> Self {
        self.bibs.insert(doi.to_string(), bibtex.to_string());
        self
    }

    pub fn with_pmid(mut self, pmid: &str, doi: &str) -> Self {
        self.pmids.insert(pmid.to_string(), doi.to_string());
        self
    }

    pub fn doi_calls(&self) -> Vec<String> {
        self.doi_calls.borrow().clone()
    }

    pub fn pmid_calls(&self) -> Vec<String> {
        self.pmid_calls.borrow().clone()
    }
}

impl Registry for MockRegistry {
    fn doi2bib(&self, doi: &str) -> Result<Option<String>> {
        self.doi_calls.borrow_mut().push(doi.to_string());
        if self.fail_doi {
            return Err(Cit2BibError::ApiError("doi.org returned status 503".to_string()));
        }
        if self.any_doi {
            return Ok(Some(format!("@article{{stub, doi={{{}}}}}\n", doi)));
        }
        Ok(self.bibs.get(doi).cloned())
    }

    fn pm2doi(&self, pmid: &str) -> Result<Option<String>> {
        self.pmid_calls.borrow_mut().push(pmid.to_string());
        Ok(self.pmids.get(pmid).cloned())
    }
}
