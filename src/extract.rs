use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static CITE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\cite\{([^}]+)\}").expect("Invalid citation regex pattern"));

/// First line of biblatex's warning for a key missing from the data source.
pub const BIBLATEX_MISSING_ENTRY: &str =
    "Package biblatex Warning: The following entry could not be found";

/// How citation tokens are pulled out of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Every whitespace-separated word is a token.
    #[default]
    Whitespace,
    /// The contents of each `\cite{...}` in a TeX source.
    Tex,
    /// Keys biblatex reported as missing in a LaTeX log.
    LatexLog,
}

impl InputMode {
    /// `--texfile` wins over `--latex_log`; neither means whitespace mode.
    pub fn from_flags(texfile: bool, latex_log: bool) -> Self {
        if texfile {
            InputMode::Tex
        } else if latex_log {
            InputMode::LatexLog
        } else {
            InputMode::Whitespace
        }
    }
}

/// Extract citation tokens from `input` in document order.
pub fn extract_tokens(input: &str, mode: InputMode) -> Vec<String> {
    match mode {
        InputMode::Whitespace => split_whitespace(input),
        InputMode::Tex => tex_citations(input),
        InputMode::LatexLog => latex_log_missing_entries(input),
    }
}

pub fn split_whitespace(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Contents of every `\cite{...}`. A multi-key `\cite{a,b}` is kept as the
/// single token `a,b`.
pub fn tex_citations(input: &str) -> Vec<String> {
    CITE_REGEX
        .captures_iter(input)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Keys from biblatex "entry could not be found" warnings.
///
/// The warning spans three lines: the header, a "in the data source" line,
/// and a line whose second field is the missing key.
pub fn latex_log_missing_entries(input: &str) -> Vec<String> {
    let mut reference_ids = Vec::new();
    let mut lines = input.lines();

    while let Some(line) = lines.next() {
        if line.trim_end_matches('\r') != BIBLATEX_MISSING_ENTRY {
            continue;
        }
        // details line
        if lines.next().is_none() {
            warn!("Log ends inside a biblatex missing-entry warning");
            break;
        }
        match lines.next() {
            Some(key_line) => match key_line.split_whitespace().nth(1) {
                Some(rid) => reference_ids.push(rid.to_string()),
                None => warn!("No entry key on biblatex warning line: {:?}", key_line),
            },
            None => {
                warn!("Log ends inside a biblatex missing-entry warning");
                break;
            }
        }
    }

    reference_ids
}
