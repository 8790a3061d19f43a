use cit2bib::extract::{
    extract_tokens, latex_log_missing_entries, tex_citations, InputMode, BIBLATEX_MISSING_ENTRY,
};

#[test]
fn test_whitespace_mode() {
    let tokens = extract_tokens("10.1000/xyz\n 2104.08653\t12345678  \n", InputMode::Whitespace);
    assert_eq!(tokens, vec!["10.1000/xyz", "2104.08653", "12345678"]);
}

#[test]
fn test_whitespace_mode_empty_input() {
    assert!(extract_tokens("  \n\t", InputMode::Whitespace).is_empty());
}

#[test]
fn test_tex_mode_in_document_order() {
    let tex = r"As shown in \cite{10.1/foo}, and later \cite{10.1/bar}.";
    assert_eq!(extract_tokens(tex, InputMode::Tex), vec!["10.1/foo", "10.1/bar"]);
}

#[test]
fn test_tex_mode_keeps_multi_key_cite_together() {
    let tex = r"\cite{a,b} and \citep{ignored} and \cite{c}";
    assert_eq!(tex_citations(tex), vec!["a,b", "c"]);
}

#[test]
fn test_latex_log_mode() {
    let log = format!(
        "This is pdfTeX\n\
         {header}\n\
         (biblatex)                in the data source(s):\n\
         (biblatex)                10.1000/missing\n\
         (biblatex)                Please verify the spelling.\n\
         Some other line\n\
         {header}\r\n\
         (biblatex)                in the data source(s):\r\n\
         (biblatex)                2104.08653\r\n",
        header = BIBLATEX_MISSING_ENTRY
    );
    assert_eq!(
        extract_tokens(&log, InputMode::LatexLog),
        vec!["10.1000/missing", "2104.08653"]
    );
}

#[test]
fn test_latex_log_truncated_warning() {
    let log = format!("{}\n(biblatex) in the data source(s):\n", BIBLATEX_MISSING_ENTRY);
    assert!(latex_log_missing_entries(&log).is_empty());
}

#[test]
fn test_latex_log_key_line_without_key() {
    let log = format!("{}\ndetails\nlonely\n", BIBLATEX_MISSING_ENTRY);
    assert!(latex_log_missing_entries(&log).is_empty());
}

#[test]
fn test_input_mode_from_flags() {
    assert_eq!(InputMode::from_flags(false, false), InputMode::Whitespace);
    assert_eq!(InputMode::from_flags(true, false), InputMode::Tex);
    assert_eq!(InputMode::from_flags(false, true), InputMode::LatexLog);
    assert_eq!(InputMode::from_flags(true, true), InputMode::Tex);
}
