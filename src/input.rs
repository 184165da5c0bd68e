//! Input source handling: plain files, gzip files and remote URLs.
//!
//! Every source ends up as a `Box<dyn BufRead>`, so the tally never
//! cares where its lines come from. Gzip is detected by the `.gz`
//! suffix; `http://` and `https://` paths are fetched with `ureq` when
//! the `url` feature is enabled.

use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a sequence text source for line-oriented reading.
///
/// # Arguments
///
/// * `path` - A local file path, a `.gz`-compressed local file path,
///   or (with the `url` feature) an `http://`/`https://` URL
///
/// # Returns
///
/// * `Ok(reader)` - A buffered reader over the decompressed text
/// * `Err(io::Error)` - If the source cannot be opened
pub fn reader_from_path(path: &Path) -> io::Result<Box<dyn BufRead>>
{
    #[cfg(feature = "url")]
    if let Some(url) = path.to_str().filter(|s| is_url(s))
    {
        return reader_from_url(url);
    }

    let file = File::open(path)?;
    match path.extension().and_then(|ext| ext.to_str())
    {
        Some("gz") => Ok(Box::new(BufReader::new(MultiGzDecoder::new(file)))),
        _ => Ok(Box::new(BufReader::new(file))),
    }
}

#[cfg(feature = "url")]
fn is_url(path: &str) -> bool
{
    path.starts_with("http://") || path.starts_with("https://")
}

/// Stream a remote sequence file over HTTP(S).
///
/// The response body is read sequentially; a `.gz` URL is decompressed
/// on the fly like a local one.
#[cfg(feature = "url")]
fn reader_from_url(url: &str) -> io::Result<Box<dyn BufRead>>
{
    let agent = ureq::Agent::new_with_defaults();
    let response = agent.get(url).call().map_err(|e| {
        io::Error::new(
            io::ErrorKind::ConnectionRefused,
            format!("HTTP GET request failed: {}", e),
        )
    })?;
    let body = response.into_body().into_reader();

    if url.ends_with(".gz")
    {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(body))))
    }
    else
    {
        Ok(Box::new(BufReader::new(body)))
    }
}
