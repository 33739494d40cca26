//! Maintenance tools for a Chinese vocabulary dataset stored as JSON.
//!
//! - [`dataset`]: appending word records and normalizing pinyin casing
//! - [`archive`]: zlib packing and unpacking of the dictionary file
//! - [`rename`]: concurrent bulk renaming of tone recordings
//!
//! All file paths default to the layout described by [`common::DataLayout`].

pub mod archive;
pub mod common;
pub mod dataset;
pub mod rename;
pub mod utils;
