//! Tokenizer shared by validation and parsing.
//!
//! The pipeline is:
//!
//! 1. Replace every `\` with `/`.
//! 2. Split on `/`.
//! 3. If the normalized input starts with `/orbit`, drop a segment equal to
//!    `orbitdb` at position 0 or 1. Later occurrences are ordinary segments.
//! 4. Drop segments that are empty or a single space.

use crate::{PROTOCOL, PROTOCOL_PREFIX};

/// Replace Windows-style separators with forward slashes.
pub fn normalize(raw: &str) -> String {
    raw.replace('\\', "/")
}

/// Split a raw address into its meaningful segments, in order.
///
/// The first segment is the candidate root; the rest form the path.
///
/// ```
/// use orbit_address::segments::split;
///
/// assert_eq!(split("/orbitdb//Qm1/my/db/"), vec!["Qm1", "my", "db"]);
/// assert_eq!(split(r"\orbitdb\Qm1\db"), vec!["Qm1", "db"]);
/// ```
pub fn split(raw: &str) -> Vec<String> {
    let normalized = normalize(raw);
    let prefixed = normalized.starts_with(PROTOCOL_PREFIX);

    let segments: Vec<String> = normalized
        .split('/')
        .enumerate()
        .filter(|(i, segment)| !(prefixed && *i <= 1 && *segment == PROTOCOL))
        .map(|(_, segment)| segment)
        .filter(|segment| !is_blank(segment))
        .map(str::to_owned)
        .collect();

    tracing::trace!(input = raw, ?segments, "tokenized address");
    segments
}

fn is_blank(segment: &str) -> bool {
    segment.is_empty() || segment == " "
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_replaces_backslashes() {
        assert_eq!(normalize(r"\orbitdb\root\a\b"), "/orbitdb/root/a/b");
        assert_eq!(normalize("/already/fine"), "/already/fine");
    }

    #[test]
    fn strips_leading_protocol() {
        assert_eq!(split("/orbitdb/root/db"), vec!["root", "db"]);
    }

    #[test]
    fn no_prefix_keeps_everything() {
        assert_eq!(split("root/a/b"), vec!["root", "a", "b"]);
    }

    #[test]
    fn protocol_without_leading_slash_is_not_stripped() {
        assert_eq!(split("orbitdb/root/db"), vec!["orbitdb", "root", "db"]);
    }

    #[test]
    fn protocol_at_position_two_is_kept() {
        assert_eq!(split("a/orbitdb/root/b"), vec!["a", "orbitdb", "root", "b"]);
        assert_eq!(
            split("/orbitdb/root/orbitdb/b"),
            vec!["root", "orbitdb", "b"]
        );
    }

    #[test]
    fn lookalike_protocol_is_kept() {
        assert_eq!(split("/orbitdbx/root"), vec!["orbitdbx", "root"]);
    }

    #[test]
    fn collapses_repeated_slashes() {
        assert_eq!(split("//orbitdb///root//a///b//"), vec!["orbitdb", "root", "a", "b"]);
        assert_eq!(split("/orbitdb///root//a///b//"), vec!["root", "a", "b"]);
    }

    #[test]
    fn drops_single_space_segments_only() {
        assert_eq!(split("/orbitdb/ /root/ /db"), vec!["root", "db"]);
        assert_eq!(split("/orbitdb/root/  /db"), vec!["root", "  ", "db"]);
    }

    #[test]
    fn backslashes_enable_prefix_strip() {
        assert_eq!(split(r"\orbitdb\root\my\db"), vec!["root", "my", "db"]);
    }

    #[test]
    fn empty_inputs_yield_no_segments() {
        assert!(split("").is_empty());
        assert!(split("///").is_empty());
        assert!(split("/orbitdb").is_empty());
        assert!(split("/orbitdb/").is_empty());
    }
}
