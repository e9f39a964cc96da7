// src/source.rs
//
// Where catalog text comes from, and the seam the Loader fetches through.
// Tests swap in their own `Fetch`; the app uses `NetFetch`.

use std::{fmt, fs, io, path::PathBuf};

use thiserror::Error;
use url::Url;

use crate::core::net::{self, HttpTarget, NetError};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unusable source {text:?}: {reason}")]
    BadSource { text: String, reason: String },
    #[error(transparent)]
    Net(#[from] NetError),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Http(HttpTarget),
    File(PathBuf),
}

impl Source {
    /// `http://host[:port]/path?query` → Http; anything without a scheme → File.
    pub fn parse(text: &str) -> Result<Self, FetchError> {
        let text = text.trim();
        let bad = |reason: &str| FetchError::BadSource { text: s!(text), reason: s!(reason) };

        if text.is_empty() {
            return Err(bad("empty"));
        }
        if !text.contains("://") {
            return Ok(Source::File(PathBuf::from(text)));
        }

        let url = Url::parse(text).map_err(|e| bad(&e.to_string()))?;
        if url.scheme() != "http" {
            return Err(bad("only plain http:// is supported"));
        }
        let host = url.host_str().ok_or_else(|| bad("missing host"))?;
        let port = url.port_or_known_default().unwrap_or(80);
        let mut path = s!(url.path());
        if let Some(q) = url.query() {
            path.push('?');
            path.push_str(q);
        }
        Ok(Source::Http(HttpTarget { host: s!(host), port, path }))
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Http(t) => write!(f, "http://{}:{}{}", t.host, t.port, t.path),
            Source::File(p) => write!(f, "{}", p.display()),
        }
    }
}

pub trait Fetch {
    /// Full body text of `source`, or why it couldn't be had.
    fn fetch(&self, source: &Source) -> Result<String, FetchError>;
}

/// Plain HTTP (cache-busted) or local disk.
pub struct NetFetch;

impl Fetch for NetFetch {
    fn fetch(&self, source: &Source) -> Result<String, FetchError> {
        match source {
            Source::Http(target) => {
                let resp = net::http_get(target)?;
                if !resp.is_success() {
                    return Err(FetchError::Status(resp.status));
                }
                Ok(resp.body)
            }
            Source::File(path) => fs::read(path)
                .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
                .map_err(|source| FetchError::Io { path: path.clone(), source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_http_with_port_and_query() {
        let src = Source::parse("http://localhost:8080/data/items.json?v=3").unwrap();
        assert_eq!(
            src,
            Source::Http(HttpTarget { host: s!("localhost"), port: 8080, path: s!("/data/items.json?v=3") })
        );
    }

    #[test]
    fn parse_defaults_port_80() {
        match Source::parse("http://example.com/items.csv").unwrap() {
            Source::Http(t) => assert_eq!(t.port, 80),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn bare_paths_are_files() {
        assert_eq!(Source::parse(" items.csv ").unwrap(), Source::File(PathBuf::from("items.csv")));
    }

    #[test]
    fn https_and_empty_rejected() {
        assert!(matches!(Source::parse("https://example.com/x"), Err(FetchError::BadSource { .. })));
        assert!(matches!(Source::parse("   "), Err(FetchError::BadSource { .. })));
    }

    #[test]
    fn invalid_utf8_file_is_read_lossily() {
        let mut p = std::env::temp_dir();
        p.push("arc_items_src_latin1.csv");
        fs::write(&p, b"name\nCaf\xe9 Sign\n").unwrap();
        let text = NetFetch.fetch(&Source::File(p)).unwrap();
        assert_eq!(text, "name\nCaf\u{fffd} Sign\n");
    }

    #[test]
    fn missing_file_is_io_error() {
        let src = Source::File(PathBuf::from("definitely/not/here.json"));
        assert!(matches!(NetFetch.fetch(&src), Err(FetchError::Io { .. })));
    }
}
