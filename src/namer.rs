use log::debug;

use crate::error::{NamerError, Result};
use crate::sanitize::{sanitize_input, words};

pub const DEFAULT_EXTENSION: &str = "dart";
pub const DEFAULT_SEPARATOR: &str = "_";

// Offered by the interactive session; flag mode accepts any value.
pub const EXTENSIONS: [&str; 6] = ["dart", "go", "cs", "js", "ts", "py"];
pub const SEPARATORS: [&str; 4] = ["_", "-", "camel", ""];
pub const CAMEL: &str = "camel";

pub const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinStyle {
    Separator(String),
    /// First word untouched, later words capitalised, no separator.
    Camel,
}

impl JoinStyle {
    /// Map an interactive separator choice. `camel` is only special here;
    /// on the command line it is an ordinary separator string.
    pub fn from_choice(choice: &str) -> Self {
        if choice == CAMEL {
            JoinStyle::Camel
        } else {
            JoinStyle::Separator(choice.to_string())
        }
    }

    fn join(&self, words: &[&str]) -> String {
        match self {
            JoinStyle::Separator(sep) => words.join(sep),
            JoinStyle::Camel => words
                .iter()
                .enumerate()
                .map(|(i, w)| if i == 0 { (*w).to_string() } else { capitalize(w) })
                .collect(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub text: String,
    pub extension: String,
    pub join: JoinStyle,
    pub keep_numbers: bool,
}

impl GenerationRequest {
    pub fn new(text: impl Into<String>, extension: impl Into<String>, join: JoinStyle, keep_numbers: bool) -> Self {
        Self { text: text.into(), extension: extension.into(), join, keep_numbers }
    }
}

/// Build `<stem>.<extension>` for a request. An input with no surviving
/// words yields `.<extension>`.
pub fn generate(req: &GenerationRequest) -> Result<String> {
    let clean = sanitize_input(&req.text, req.keep_numbers);
    let parts = words(&clean);
    debug!("sanitized {:?} into words {:?}", req.text, parts);
    let stem = req.join.join(&parts);
    let filename = format!("{}.{}", stem, req.extension);
    if !is_valid_filename(&filename) {
        return Err(NamerError::InvalidFilename { filename });
    }
    debug!("generated filename {:?}", filename);
    Ok(filename)
}

pub fn is_valid_filename(filename: &str) -> bool {
    !filename.contains(FORBIDDEN_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str, ext: &str, sep: &str, keep: bool) -> Result<String> {
        generate(&GenerationRequest::new(text, ext, JoinStyle::Separator(sep.to_string()), keep))
    }

    fn camel(text: &str, ext: &str, keep: bool) -> Result<String> {
        generate(&GenerationRequest::new(text, ext, JoinStyle::Camel, keep))
    }

    #[test]
    fn scenarios() {
        assert_eq!(plain("Auth Service", "go", "_", false).unwrap(), "auth_service.go");
        assert_eq!(plain("Data 2024", "cs", "_", true).unwrap(), "data_2024.cs");
        assert_eq!(plain("Data 2024", "cs", "_", false).unwrap(), "data.cs");
        assert_eq!(plain("  multiple   spaces  ", "dart", "-", false).unwrap(), "multiple-spaces.dart");
        assert_eq!(camel("hello world again", "dart", false).unwrap(), "helloWorldAgain.dart");
    }

    #[test]
    fn empty_stem_is_not_an_error() {
        assert_eq!(plain("", "dart", "_", false).unwrap(), ".dart");
        assert_eq!(plain("!!! ???", "go", "-", false).unwrap(), ".go");
        assert_eq!(camel("123", "ts", false).unwrap(), ".ts");
    }

    #[test]
    fn separator_placement() {
        assert_eq!(plain("a b c", "py", "", false).unwrap(), "abc.py");
        let name = plain("one two three four", "py", "_", false).unwrap();
        let stem = name.trim_end_matches(".py");
        assert_eq!(stem.matches('_').count(), 3);
        assert!(!stem.starts_with('_') && !stem.ends_with('_'));
    }

    #[test]
    fn camel_in_flag_mode_is_a_literal_separator() {
        assert_eq!(plain("a b", "go", "camel", false).unwrap(), "acamelb.go");
    }

    #[test]
    fn camel_capitalises_all_but_first_word() {
        assert_eq!(camel("Single", "go", false).unwrap(), "single.go");
        assert_eq!(camel("version 2 beta", "go", true).unwrap(), "version2Beta.go");
        let name = camel("alpha beta gamma", "js", false).unwrap();
        assert!(name.starts_with('a'));
        assert_eq!(name.chars().filter(|c| c.is_ascii_uppercase()).count(), 2);
    }

    #[test]
    fn deterministic() {
        let req = GenerationRequest::new("Some Input 42", "rs", JoinStyle::Separator("-".into()), true);
        assert_eq!(generate(&req).unwrap(), generate(&req.clone()).unwrap());
    }

    #[test]
    fn forbidden_separator_or_extension_is_rejected() {
        match plain("a b", "go", "/", false) {
            Err(NamerError::InvalidFilename { filename }) => assert_eq!(filename, "a/b.go"),
            other => panic!("expected InvalidFilename, got {:?}", other),
        }
        assert!(matches!(plain("a", "g?o", "_", false), Err(NamerError::InvalidFilename { .. })));
    }

    #[test]
    fn validator_blacklist() {
        for c in FORBIDDEN_CHARS {
            assert!(!is_valid_filename(&format!("name{}.go", c)));
        }
        assert!(is_valid_filename("auth_service.go"));
        assert!(is_valid_filename(".dart"));
    }

    #[test]
    fn from_choice() {
        assert_eq!(JoinStyle::from_choice("camel"), JoinStyle::Camel);
        assert_eq!(JoinStyle::from_choice(""), JoinStyle::Separator(String::new()));
    }
}
