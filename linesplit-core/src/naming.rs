//! Output naming
//!
//! Part `n` of `dir/report.log` is `dir/report_part_n.txt`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Derives part paths from an input path
#[derive(Debug, Clone)]
pub struct PartNamer {
    dir: PathBuf,
    stem: OsString,
}

impl PartNamer {
    /// Name parts after `input`, placing them in `output_dir` or, when that
    /// is `None`, next to the input
    pub fn new(input: &Path, output_dir: Option<&Path>) -> Self {
        let dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        };
        let stem = input
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_default();

        Self { dir, stem }
    }

    /// Path of the part with 1-based `index`
    pub fn part_path(&self, index: usize) -> PathBuf {
        let mut name = self.stem.clone();
        name.push(format!("_part_{index}.txt"));
        self.dir.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_extension() {
        let namer = PartNamer::new(Path::new("input.txt"), None);
        assert_eq!(namer.part_path(1), PathBuf::from("input_part_1.txt"));
        assert_eq!(namer.part_path(12), PathBuf::from("input_part_12.txt"));
    }

    #[test]
    fn test_no_extension() {
        let namer = PartNamer::new(Path::new("README"), None);
        assert_eq!(namer.part_path(3), PathBuf::from("README_part_3.txt"));
    }

    #[test]
    fn test_only_last_extension_stripped() {
        let namer = PartNamer::new(Path::new("archive.tar.gz"), None);
        assert_eq!(namer.part_path(1), PathBuf::from("archive.tar_part_1.txt"));
    }

    #[test]
    fn test_dotfile_kept_whole() {
        let namer = PartNamer::new(Path::new(".history"), None);
        assert_eq!(namer.part_path(1), PathBuf::from(".history_part_1.txt"));
    }

    #[test]
    fn test_parts_live_next_to_input() {
        let namer = PartNamer::new(Path::new("data/logs/server.log"), None);
        assert_eq!(
            namer.part_path(2),
            PathBuf::from("data/logs/server_part_2.txt")
        );
    }

    #[test]
    fn test_output_dir_overrides_parent() {
        let namer = PartNamer::new(Path::new("data/server.log"), Some(Path::new("out")));
        assert_eq!(namer.part_path(1), PathBuf::from("out/server_part_1.txt"));
    }

    #[test]
    fn test_no_zero_padding() {
        let namer = PartNamer::new(Path::new("big.csv"), None);
        assert_eq!(namer.part_path(100), PathBuf::from("big_part_100.txt"));
    }
}
