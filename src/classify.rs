//! Line classification against the fixed allocator-call marker table.
//!
//! Classification is a tagged-variant lookup rather than cascading
//! string checks: the marker table is declared once, in priority
//! order, and the first marker found anywhere in the line decides the
//! category.

/// Category of a recognized trace-log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// A dynamic allocation request carrying the requested size.
    Allocate,
    /// Release of a previously allocated block.
    Free,
    /// A grow/shrink request for an existing allocation.
    Resize,
}

/// Marker substrings emitted by the debug allocator, in match
/// priority order. Matching is case-sensitive and positional within
/// the line is irrelevant.
pub const MARKERS: &[(&str, LineKind)] = &[
    ("MALLOC CALL:", LineKind::Allocate),
    ("DL FREE CALL:", LineKind::Free),
    ("DL REALLOC CALL:", LineKind::Resize),
];

/// Classify one log line. Returns the kind of the first marker (in
/// table order) contained in the line, or `None` for lines the
/// allocator did not emit.
pub fn classify(line: &str) -> Option<LineKind> {
    MARKERS
        .iter()
        .find(|(marker, _)| line.contains(marker))
        .map(|&(_, kind)| kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("MALLOC CALL: region 0x10 -> 0x20" => Some(LineKind::Allocate); "allocate marker")]
    #[test_case("DL FREE CALL: 0xdeadbeef" => Some(LineKind::Free); "free marker")]
    #[test_case("DL REALLOC CALL: 0xdeadbeef" => Some(LineKind::Resize); "resize marker")]
    #[test_case("heap initialised" => None; "unrelated text")]
    #[test_case("" => None; "empty line")]
    #[test_case("malloc call: 0x10" => None; "markers are case sensitive")]
    #[test_case("prefix MALLOC CALL: 0x10" => Some(LineKind::Allocate); "marker mid-line")]
    fn classifies_by_marker(line: &str) -> Option<LineKind> {
        classify(line)
    }

    #[test]
    fn first_marker_in_table_order_wins() {
        let line = "MALLOC CALL: reusing block from DL FREE CALL: 0x8";
        assert_eq!(classify(line), Some(LineKind::Allocate));

        let line = "DL FREE CALL: scheduled before MALLOC CALL: 0x8";
        assert_eq!(
            classify(line),
            Some(LineKind::Allocate),
            "priority is table order, not position in the line"
        );
    }
}
