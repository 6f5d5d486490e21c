use crate::model::MatsimError;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// byte sink for one output file, gzip-compressed when the target
/// filename ends in `.gz`. bytes go to a sibling `.tmp` file which
/// [`commit`] renames into place, so an aborted run never leaves a
/// truncated file under the final name.
pub(crate) enum XmlSink {
    Plain(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl Write for XmlSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            XmlSink::Plain(w) => w.write(buf),
            XmlSink::Gzip(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            XmlSink::Plain(w) => w.flush(),
            XmlSink::Gzip(w) => w.flush(),
        }
    }
}

impl XmlSink {
    pub fn finish(self) -> std::io::Result<()> {
        match self {
            XmlSink::Plain(mut w) => w.flush(),
            XmlSink::Gzip(encoder) => encoder.finish().and_then(|mut w| w.flush()),
        }
    }
}

pub(crate) fn is_gzipped(path: &Path) -> bool {
    path.extension().map(|e| e == "gz").unwrap_or(false)
}

pub(crate) fn tmp_path(path: &Path) -> PathBuf {
    let mut filename = path.as_os_str().to_owned();
    filename.push(".tmp");
    PathBuf::from(filename)
}

pub(crate) fn open_sink(path: &Path) -> Result<(XmlSink, PathBuf), MatsimError> {
    let tmp = tmp_path(path);
    let file = File::create(&tmp).map_err(|e| MatsimError::FileError {
        path: tmp.clone(),
        source: e,
    })?;
    let buffer = BufWriter::new(file);
    let sink = if is_gzipped(path) {
        XmlSink::Gzip(GzEncoder::new(buffer, Compression::default()))
    } else {
        XmlSink::Plain(buffer)
    };
    Ok((sink, tmp))
}

pub(crate) fn commit(tmp: &Path, path: &Path) -> Result<(), MatsimError> {
    std::fs::rename(tmp, path).map_err(|e| MatsimError::FileError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// formats a second-of-day or offset value in the HH:MM:SS form matsim
/// uses for all times in its files
pub fn format_time(seconds: u32) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    format!("{h:02}:{m:02}:{s:02}")
}

/// formats a numeric attribute the way matsim writes it, always with a
/// decimal point
pub(crate) fn fmt_number(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00:00");
        assert_eq!(format_time(10), "00:00:10");
        assert_eq!(format_time(32400), "09:00:00");
        assert_eq!(format_time(46500), "12:55:00");
        assert_eq!(format_time(3661), "01:01:01");
    }

    #[test]
    fn test_fmt_number_keeps_decimal_point() {
        assert_eq!(fmt_number(10000.0), "10000.0");
        assert_eq!(fmt_number(100.0), "100.0");
        assert_eq!(fmt_number(544106.781992937), "544106.781992937");
    }

    #[test]
    fn test_gz_detection() {
        assert!(is_gzipped(Path::new("network.xml.gz")));
        assert!(!is_gzipped(Path::new("network.xml")));
    }
}
