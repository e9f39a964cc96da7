// src/core/net.rs
//
// HTTP/1.0 GET over TCP (std-only). HTTP/1.0 + `Connection: close` means the
// server ends the body with EOF, so there is no chunked decoding to do.
// Every request asks intermediaries not to serve a cached copy.

use std::{
    io::{self, Read, Write},
    net::TcpStream,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use thiserror::Error;

use crate::config::consts::{CACHE_BUST_PARAM, NET_TIMEOUT_SECS, USER_AGENT};

#[derive(Debug, Error)]
pub enum NetError {
    #[error("connect {host}:{port}: {source}")]
    Connect { host: String, port: u16, source: io::Error },
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("malformed HTTP response")]
    Malformed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTarget {
    pub host: String,
    pub port: u16,
    /// Path + query, starting with `/`
    pub path: String,
}

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Append a uniquifying query parameter so no cache can answer for us.
pub fn bust_cache(path: &str, stamp: u128) -> String {
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}{CACHE_BUST_PARAM}={stamp}")
}

fn stamp_now() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Full request text: cache-busted path plus no-cache headers.
pub fn request(target: &HttpTarget, stamp: u128) -> String {
    format!(
        "GET {} HTTP/1.0\r\nHost: {}\r\nUser-Agent: {}\r\nCache-Control: no-cache, no-store\r\nPragma: no-cache\r\nConnection: close\r\n\r\n",
        bust_cache(&target.path, stamp),
        target.host,
        USER_AGENT
    )
}

pub fn http_get(target: &HttpTarget) -> Result<HttpResponse, NetError> {
    let mut s = TcpStream::connect((target.host.as_str(), target.port)).map_err(|source| {
        NetError::Connect { host: target.host.clone(), port: target.port, source }
    })?;
    s.set_read_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;
    s.set_write_timeout(Some(Duration::from_secs(NET_TIMEOUT_SECS)))?;

    let req = request(target, stamp_now());
    logd!("Net: GET {}:{}{}", target.host, target.port, target.path);
    s.write_all(req.as_bytes())?;
    s.flush()?;

    let mut buf = Vec::new();
    s.read_to_end(&mut buf)?;
    parse_response(&buf)
}

/// Split a raw HTTP/1.x response into status code and body.
pub fn parse_response(raw: &[u8]) -> Result<HttpResponse, NetError> {
    let head_end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or(NetError::Malformed)?;
    let head = String::from_utf8_lossy(&raw[..head_end]);
    let status_line = head.split("\r\n").next().unwrap_or("");
    let status = parse_status(status_line).ok_or(NetError::Malformed)?;
    let body = String::from_utf8_lossy(&raw[head_end + 4..]).into_owned();
    Ok(HttpResponse { status, body })
}

fn parse_status(line: &str) -> Option<u16> {
    let mut parts = line.split_whitespace();
    let proto = parts.next()?;
    if !proto.starts_with("HTTP/") {
        return None;
    }
    parts.next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bust_cache_appends_param() {
        assert_eq!(bust_cache("/items.json", 42), "/items.json?_=42");
        assert_eq!(bust_cache("/items.json?v=2", 42), "/items.json?v=2&_=42");
    }

    #[test]
    fn request_asks_for_a_fresh_copy() {
        let target = HttpTarget { host: s!("localhost"), port: 8080, path: s!("/items.json?v=2") };
        let req = request(&target, 7);
        assert!(req.starts_with("GET /items.json?v=2&_=7 HTTP/1.0\r\n"));
        assert!(req.contains("\r\nCache-Control: no-cache, no-store\r\n"));
        assert!(req.contains("\r\nPragma: no-cache\r\n"));
        assert!(req.contains("\r\nHost: localhost\r\n"));
        assert!(req.ends_with("\r\n\r\n"));
    }

    #[test]
    fn parses_status_and_body() {
        let raw = b"HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\n\r\nnope";
        let resp = parse_response(raw).unwrap();
        assert_eq!(resp.status, 404);
        assert!(!resp.is_success());
        assert_eq!(resp.body, "nope");
    }

    #[test]
    fn body_may_contain_blank_lines() {
        let raw = b"HTTP/1.0 200 OK\r\n\r\na,b\r\n\r\nc,d";
        let resp = parse_response(raw).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.body, "a,b\r\n\r\nc,d");
    }

    #[test]
    fn garbage_is_malformed() {
        assert!(matches!(parse_response(b"hello"), Err(NetError::Malformed)));
        assert!(matches!(parse_response(b"SPDY 200\r\n\r\n"), Err(NetError::Malformed)));
    }
}
