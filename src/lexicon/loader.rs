//! Word list loading utilities
//!
//! Reads raw dictionary tokens from a file. Filtering happens in `Lexicon::build`,
//! so the loader only splits text into tokens.

use std::fs;
use std::io;
use std::path::Path;

/// Load whitespace-separated tokens from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use nearagrams::lexicon::{Lexicon, loader::load_from_file};
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// let lexicon = Lexicon::build(&words);
/// println!("Loaded {} words", lexicon.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_text(&content);
    log::info!("read {} tokens from {}", words.len(), path.display());
    Ok(words)
}

/// Split raw text into tokens
///
/// # Examples
/// ```
/// use nearagrams::lexicon::loader::words_from_text;
///
/// assert_eq!(words_from_text("cat  act\ncats\n"), vec!["cat", "act", "cats"]);
/// ```
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn splits_on_any_whitespace() {
        let words = words_from_text("stare\r\ntears\t rates\n\n aster");
        assert_eq!(words, vec!["stare", "tears", "rates", "aster"]);
    }

    #[test]
    fn keeps_tokens_unfiltered() {
        // Capitalised entries are the lexicon's job to drop
        let words = words_from_text("Aaron aardvark");
        assert_eq!(words, vec!["Aaron", "aardvark"]);
    }

    #[test]
    fn empty_text_has_no_words() {
        assert!(words_from_text("  \n\t").is_empty());
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir()
            .join(format!("nearagrams-loader-{}.txt", std::process::id()));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "cat\nact\ncats").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["cat", "act", "cats"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_from_file("/definitely/not/a/real/word/list.txt");
        assert!(result.is_err());
    }
}
