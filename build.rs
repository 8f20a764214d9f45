//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LISTS: [(&str, &str, &str, &str); 3] = [
    (
        "data/english.txt",
        "english.rs",
        "ENGLISH",
        "North American English word list",
    ),
    (
        "data/english_world.txt",
        "english_world.rs",
        "ENGLISH_WORLD",
        "International English additions to the North American list",
    ),
    (
        "data/spanish.txt",
        "spanish.rs",
        "SPANISH",
        "Spanish word list (accents stripped, Ñ kept)",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (input, output, const_name, doc_comment) in LISTS {
        generate_word_list(
            input,
            &Path::new(&out_dir).join(output),
            const_name,
            doc_comment,
        );

        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
