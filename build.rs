//! Embeds `data/words.txt` as the default dictionary
//!
//! Emits `$OUT_DIR/words.rs` with `DEFAULT_WORDS` and `DEFAULT_WORDS_COUNT`, included
//! by `src/lexicon/embedded.rs`.

use std::fmt::Write as _;
use std::path::PathBuf;
use std::{env, fs};

const WORD_FILE: &str = "data/words.txt";

fn main() {
    println!("cargo:rerun-if-changed={WORD_FILE}");

    let text = fs::read_to_string(WORD_FILE)
        .unwrap_or_else(|e| panic!("Failed to read {WORD_FILE}: {e}"));
    let source = render(&text);

    let out = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let target = out.join("words.rs");
    fs::write(&target, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", target.display()));
}

/// Render the word list as Rust source, keeping the file's line grouping
fn render(text: &str) -> String {
    let mut source = String::from("// Generated from data/words.txt\n\n");
    source.push_str("/// Default dictionary, lowercase words of three letters or more\n");
    source.push_str("pub const DEFAULT_WORDS: &[&str] = &[\n");

    let mut count = 0usize;
    for line in text.lines() {
        let words: Vec<String> = line.split_whitespace().map(|w| format!("{w:?},")).collect();
        if words.is_empty() {
            continue;
        }
        count += words.len();
        writeln!(source, "    {}", words.join(" ")).unwrap();
    }

    source.push_str("];\n\n");
    writeln!(
        source,
        "/// Number of entries in `DEFAULT_WORDS`\npub const DEFAULT_WORDS_COUNT: usize = {count};"
    )
    .unwrap();
    source
}
