use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;

use crate::model::RawMarker;
use crate::source::{MarkerSource, SourceError};

/// Local marker table: `cell_type<TAB>marker<TAB>description`, optionally
/// gzip-compressed.
#[derive(Debug, Clone)]
pub struct TsvMarkerSource {
    path: PathBuf,
}

impl TsvMarkerSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MarkerSource for TsvMarkerSource {
    fn name(&self) -> &str {
        "tsv"
    }

    fn fetch(&self, cell_type: &str) -> Result<Vec<RawMarker>, SourceError> {
        let reader = open_maybe_gz(&self.path)?;
        read_markers(reader, cell_type)
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, SourceError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_markers<R: BufRead>(
    mut reader: R,
    cell_type: &str,
) -> Result<Vec<RawMarker>, SourceError> {
    let query = normalize_cell_type(cell_type);
    let mut buf = String::new();
    let mut markers = Vec::new();
    let mut line_no = 0usize;
    let mut first_row = true;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let cols: Vec<&str> = line.split('\t').collect();
        if std::mem::take(&mut first_row) && cols[0].trim().eq_ignore_ascii_case("cell_type") {
            continue;
        }
        if cols.len() < 2 {
            return Err(SourceError::Parse(format!(
                "marker table line {} has <2 columns",
                line_no
            )));
        }
        if normalize_cell_type(cols[0]) != query {
            continue;
        }
        let marker = cols[1].trim();
        if marker.is_empty() {
            tracing::warn!(line = line_no, "marker table row has empty marker; skipping");
            continue;
        }
        let description = cols.get(2).map(|s| s.trim()).unwrap_or("");
        markers.push(RawMarker::new(marker, description));
    }

    Ok(markers)
}

fn normalize_cell_type(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

#[cfg(test)]
#[path = "../../tests/src_inline/source/tsv.rs"]
mod tests;
