use std::path::Path;
use zidian::dataset::normalize_pinyin_file;
use crate::errors::CliError;

pub fn handle_lowercase(dictionary_file: &Path) -> Result<(), CliError> {
    println!("Normalizing pinyin in {:?}...", dictionary_file);
    let report = normalize_pinyin_file(dictionary_file)?;
    println!(
        "Done. {} of {} records changed.",
        report.changed, report.total
    );
    Ok(())
}
