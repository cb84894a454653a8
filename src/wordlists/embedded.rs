//! Embedded dictionary
//!
//! Generated by the build script from `data/dictionary.tsv`.

include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));
