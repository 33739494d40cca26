use std::path::PathBuf;
use clap::{Parser, Subcommand};
use zidian::common::constants::DEFAULT_DATA_DIR;

#[derive(Parser, Debug)]
#[command(author, version, about = "Maintenance tools for the vocabulary dataset", long_about = None)]
pub struct Cli {
    /// 数据目录，所有默认路径都相对于它
    #[arg(long, global = true, value_name = "DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 交互式地向生词表追加词条 (Ctrl-C 退出)
    AddWords {
        /// 生词表文件 (默认: <DATA_DIR>/words.json)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// 将词典中所有拼音转为小写
    LowercasePinyin {
        /// 词典文件 (默认: <DATA_DIR>/dictionary.json)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
    /// 使用 zlib 压缩词典文件
    Pack {
        /// 输入文件 (默认: <DATA_DIR>/dictionary.json)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// 输出文件 (默认: <DATA_DIR>/dictionary.json.zlib)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// 压缩级别 0-9
        #[arg(short, long, default_value_t = zidian::common::constants::DEFAULT_COMPRESSION_LEVEL,
              value_parser = clap::value_parser!(u32).range(0..=9))]
        level: u32,
    },
    /// 解压 zlib 压缩的词典文件
    Unpack {
        /// 输入文件 (默认: <DATA_DIR>/dictionary.json.zlib)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// 输出文件 (默认: <DATA_DIR>/dictionary.json)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
    /// 将音频文件名中的 `_.mp3` 改为 `.mp3`
    #[command(visible_alias = "rename")]
    RenameTones {
        /// 音频目录 (默认: <DATA_DIR>/tones2)
        #[arg(value_name = "DIR")]
        dir: Option<PathBuf>,

        /// 工作线程数 (默认: 可用的 CPU 数)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        jobs: Option<u64>,

        /// 只显示将要执行的重命名，不修改任何文件
        #[arg(long)]
        dry_run: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["zidian", "rename-tones"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("files"));
        match cli.command {
            Commands::RenameTones { dir, jobs, dry_run } => {
                assert!(dir.is_none());
                assert!(jobs.is_none());
                assert!(!dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_invalid_numbers() {
        assert!(Cli::try_parse_from(["zidian", "pack", "--level", "10"]).is_err());
        assert!(Cli::try_parse_from(["zidian", "rename-tones", "--jobs", "0"]).is_err());
    }

    #[test]
    fn test_global_data_dir_after_subcommand() {
        let cli = Cli::try_parse_from(["zidian", "pack", "--data-dir", "/tmp/d"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("/tmp/d"));
    }
}
