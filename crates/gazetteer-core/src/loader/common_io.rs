// crates/gazetteer-core/src/loader/common_io.rs
use crate::error::{GazetteerError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

/// Opens a dump file for buffered, forward-only reading.
///
/// With the `compact` feature a `.gz` extension selects a streaming gzip
/// decoder, so `cities1000.txt.gz` can be read without unpacking it first.
pub fn open_stream(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|source| GazetteerError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            return Ok(Box::new(BufReader::new(GzDecoder::new(file))));
        }
    }

    Ok(Box::new(BufReader::new(file)))
}

#[cfg(feature = "compact")]
fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
