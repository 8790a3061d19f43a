//! Turn DOI, arXiv and PubMed citation ids into BibTeX entries.
//!
//! Tokens are pulled from plain text, `\cite{}` commands or a biblatex log,
//! classified, looked up on doi.org (through the PMC ID converter for
//! PMIDs) and cached on disk keyed by the original token.

pub mod cache;
pub mod entry;
pub mod error;
pub mod extract;
pub mod identifier;
pub mod pipeline;
pub mod registry;
pub mod resolve;

pub use cache::Cache;
pub use error::Cit2BibError;
pub use extract::InputMode;
pub use identifier::Identifier;
pub use pipeline::{convert, RunOptions};
pub use registry::{HttpRegistry, Registry};
