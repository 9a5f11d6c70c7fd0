//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/');

/// Route path for a category archive, percent-encoded.
/// The server decodes the segment back to the exact category name.
pub fn category_path(name: &str) -> String {
    format!("/category/{}", utf8_percent_encode(name, PATH_SEGMENT))
}

/// Route path for an article page
pub fn article_path(id: &str) -> String {
    format!("/article/{}", utf8_percent_encode(id, PATH_SEGMENT))
}

/// Extract the hostname from an absolute URL, without a URL parser.
/// Returns `None` when the string has no scheme separator.
pub fn host_of(url: &str) -> Option<&str> {
    let rest = url.split_once("://")?.1;
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    // Strip userinfo and port
    let host = host.rsplit_once('@').map_or(host, |(_, h)| h);
    let host = host.split_once(':').map_or(host, |(h, _)| h);
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
