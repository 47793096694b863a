//! Emphasis scanner for `**bold**` markers.

use super::TextSpan;

const MARKER: &str = "**";

/// Split a line into plain and emphasized spans.
///
/// Pairs are matched left to right without overlap; the closing marker is the
/// first one after the opening marker. A marker with no partner is literal text.
pub(super) fn scan_emphasis(line: &str) -> Vec<TextSpan<'_>> {
    let mut spans = Vec::new();
    let mut cursor = 0;
    while let Some(open) = line[cursor..].find(MARKER).map(|i| cursor + i) {
        let inner_start = open + MARKER.len();
        let Some(close) = line[inner_start..].find(MARKER).map(|i| inner_start + i) else {
            break;
        };
        if open > cursor {
            spans.push(TextSpan::plain(&line[cursor..open]));
        }
        spans.push(TextSpan::emphasized(&line[inner_start..close]));
        cursor = close + MARKER.len();
    }
    if cursor < line.len() {
        spans.push(TextSpan::plain(&line[cursor..]));
    }
    spans
}
