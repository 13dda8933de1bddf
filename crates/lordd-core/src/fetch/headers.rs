//! Response header line handling for the download size.

/// What a single raw header line tells us about the advertised body size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderLine {
    /// Start of a new response (e.g. after a redirect); forget any earlier size.
    Status,
    /// `Content-Length` with a parseable value.
    ContentLength(u64),
    Other,
}

/// Classify one header line as delivered by libcurl (may include trailing CRLF).
pub(crate) fn classify_header_line(line: &str) -> HeaderLine {
    let line = line.trim();
    if line.starts_with("HTTP/") {
        return HeaderLine::Status;
    }
    if let Some((name, value)) = line.split_once(':') {
        if name.trim().eq_ignore_ascii_case("content-length") {
            if let Ok(n) = value.trim().parse::<u64>() {
                return HeaderLine::ContentLength(n);
            }
        }
    }
    HeaderLine::Other
}
