use std::path::Path;
use zidian::archive::{pack_file, unpack_file};
use crate::errors::CliError;
use crate::ui::printer::print_archive_summary;

pub fn handle_pack(input: &Path, output: &Path, level: u32) -> Result<(), CliError> {
    let summary = pack_file(input, output, level)?;
    print_archive_summary("Packed", input, output, &summary);
    Ok(())
}

pub fn handle_unpack(input: &Path, output: &Path) -> Result<(), CliError> {
    let summary = unpack_file(input, output)?;
    print_archive_summary("Unpacked", input, output, &summary);
    Ok(())
}
