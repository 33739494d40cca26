use std::fs;
use tempfile::tempdir;
use zidian::archive::{pack_file_default, unpack_file};
use zidian::common::DataLayout;
use zidian::dataset::{WordRecord, append_word, normalize_pinyin_file};
use zidian::rename::rename_directory;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Lay out a throwaway data directory shaped like `files/`.
    let dir = tempdir()?;
    let layout = DataLayout::new(dir.path());
    fs::write(layout.words_file(), "[]")?;
    fs::write(
        layout.dictionary_file(),
        r#"[{"traditional": "你好", "simplified": "你好", "english": "hello", "pinyin": "Nǐ Hǎo"}]"#,
    )?;
    fs::create_dir_all(layout.tones_dir())?;
    fs::write(layout.tones_dir().join("ni3_.mp3"), b"fake audio")?;
    fs::write(layout.tones_dir().join("hao3_.mp3"), b"fake audio")?;
    println!("Data directory: {:?}", layout.root());

    // --- Append a word ---
    let total = append_word(
        &layout.words_file(),
        WordRecord::from_input("你好, 你们", "hello, you all"),
    )?;
    println!("\nwords.json now holds {} entries:", total);
    println!("{}", fs::read_to_string(layout.words_file())?);

    // --- Normalize pinyin ---
    let report = normalize_pinyin_file(&layout.dictionary_file())?;
    println!("\nLowercased pinyin in {} of {} records.", report.changed, report.total);

    // --- Pack and unpack the dictionary ---
    let packed = pack_file_default(&layout.dictionary_file(), &layout.dictionary_archive())?;
    println!(
        "\nPacked dictionary: {} -> {} bytes",
        packed.input_bytes, packed.output_bytes
    );
    let restored = dir.path().join("restored.json");
    unpack_file(&layout.dictionary_archive(), &restored)?;
    assert_eq!(fs::read(&restored)?, fs::read(layout.dictionary_file())?);
    println!("Round trip verified.");

    // --- Rename tone recordings ---
    let report = rename_directory(&layout.tones_dir(), None)?;
    println!(
        "\nRenamed {} files ({} failed, {} skipped).",
        report.succeeded(),
        report.failed(),
        report.skipped
    );
    for task in &report.renamed {
        println!("  - {:?} -> {:?}", task.source.file_name(), task.target.file_name());
    }

    Ok(())
}
