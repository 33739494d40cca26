pub mod archive;
pub mod lowercase;
pub mod rename;
pub mod words;
