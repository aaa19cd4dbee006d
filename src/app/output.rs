//! Console lines for flagged IPs.

use std::io::{self, Write};

use crate::models::LookupResult;

/// Marker appended to lines served from the cache.
const CACHED_MARKER: &str = " (cached)";

/// Formats `<ip>, <score>%, <country>, <isp>, <domain>`, with ` (cached)`
/// appended for cache hits.
pub fn format_result_line(ip: &str, result: &LookupResult, cached: bool) -> String {
    format!(
        "{}, {}%, {}, {}, {}{}",
        ip,
        result.score,
        result.country,
        result.isp,
        result.domain,
        if cached { CACHED_MARKER } else { "" }
    )
}

pub fn write_result_line<W: Write>(
    out: &mut W,
    ip: &str,
    result: &LookupResult,
    cached: bool,
) -> io::Result<()> {
    writeln!(out, "{}", format_result_line(ip, result, cached))
}
