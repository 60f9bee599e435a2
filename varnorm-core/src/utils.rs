use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

///
/// Get a reader for either a gzip'd or non-gzip'd file
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Get a reader for a file path, or stdin when the path is `-`
///
pub fn get_dynamic_reader_w_stdin(file_path_str: &str) -> Result<BufReader<Box<dyn Read>>> {
    if file_path_str == "-" {
        Ok(BufReader::new(Box::new(std::io::stdin()) as Box<dyn Read>))
    } else {
        let file_path = Path::new(file_path_str);
        get_dynamic_reader(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::{BufRead, Write};

    #[rstest]
    fn test_plain_and_gzip_readers_agree() {
        let tempdir = tempfile::tempdir().unwrap();
        let plain = tempdir.path().join("seq.fa");
        let gz = tempdir.path().join("seq.fa.gz");

        std::fs::write(&plain, ">chr1\nACGT\n").unwrap();
        let mut encoder = GzEncoder::new(File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(b">chr1\nACGT\n").unwrap();
        encoder.finish().unwrap();

        let plain_lines: Vec<String> = get_dynamic_reader(&plain).unwrap().lines().map(|l| l.unwrap()).collect();
        let gz_lines: Vec<String> = get_dynamic_reader(&gz).unwrap().lines().map(|l| l.unwrap()).collect();

        assert_eq!(plain_lines, vec![">chr1".to_string(), "ACGT".to_string()]);
        assert_eq!(plain_lines, gz_lines);
    }

    #[rstest]
    fn test_missing_file() {
        assert!(get_dynamic_reader(Path::new("does/not/exist.fa")).is_err());
    }
}
