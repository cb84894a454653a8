//! Build script to generate the embedded dictionary
//!
//! Reads the tab-separated dictionary and generates a const array of entries.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const DICTIONARY_PATH: &str = "data/dictionary.tsv";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_dictionary(
        DICTIONARY_PATH,
        &Path::new(&out_dir).join("dictionary.rs"),
    );

    println!("cargo:rerun-if-changed={DICTIONARY_PATH}");
}

fn generate_dictionary(input_path: &str, output_path: &Path) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut rows = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let (word, difficulty, definition, synonyms) = match fields.as_slice() {
            [word, difficulty, definition] => (*word, *difficulty, *definition, ""),
            [word, difficulty, definition, synonyms] => (*word, *difficulty, *definition, *synonyms),
            _ => panic!("{input_path}:{}: expected 3 or 4 tab-separated fields", index + 1),
        };
        assert!(
            word.chars().all(|c| c.is_ascii_alphabetic()),
            "{input_path}:{}: '{word}' is not alphabetic",
            index + 1
        );

        let synonyms: Vec<&str> = synonyms
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        rows.push((
            word.to_ascii_uppercase(),
            difficulty.trim().to_string(),
            definition.trim().to_string(),
            synonyms,
        ));
    }

    let count = rows.len();
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Embedded dictionary: (word, difficulty, definition, synonyms)").unwrap();
    writeln!(
        output,
        "pub const DICTIONARY: &[(&str, &str, &str, &[&str])] = &["
    )
    .unwrap();

    for (word, difficulty, definition, synonyms) in rows {
        writeln!(
            output,
            "    ({word:?}, {difficulty:?}, {definition:?}, &{synonyms:?}),"
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in DICTIONARY").unwrap();
    writeln!(output, "pub const DICTIONARY_COUNT: usize = {count};").unwrap();
}
