//! Tolerant parser for the per-process detail record (`/proc/<pid>/stat`).
//!
//! The record is one line of whitespace-separated fields at fixed
//! positions. The second field is the command name wrapped in parentheses,
//! and that name may itself contain spaces or parentheses, so it is located
//! by the first `(` and the last `)` rather than by splitting.

/// Fewer fields than this and the tick, size and RSS positions cannot be
/// trusted.
pub const MIN_STAT_FIELDS: usize = 24;

const COMMAND: usize = 1;
const USER_TICKS: usize = 13;
const SYSTEM_TICKS: usize = 14;
const VIRTUAL_SIZE: usize = 22;
const RESIDENT_PAGES: usize = 23;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatFields {
    pub command: String,
    pub user_ticks: u64,
    pub system_ticks: u64,
    pub virtual_size_bytes: u64,
    pub resident_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatRecord {
    Complete(StatFields),
    /// The record had only `fields` fields.
    Incomplete { fields: usize },
}

impl StatRecord {
    pub fn parse(line: &str) -> Self {
        let fields = split_fields(line);
        if fields.len() < MIN_STAT_FIELDS {
            return StatRecord::Incomplete {
                fields: fields.len(),
            };
        }

        StatRecord::Complete(StatFields {
            command: strip_parens(fields[COMMAND]).to_string(),
            user_ticks: parse_counter(fields[USER_TICKS]),
            system_ticks: parse_counter(fields[SYSTEM_TICKS]),
            virtual_size_bytes: parse_counter(fields[VIRTUAL_SIZE]),
            resident_pages: parse_counter(fields[RESIDENT_PAGES]),
        })
    }
}

fn split_fields(line: &str) -> Vec<&str> {
    let line = line.trim_end();
    if let (Some(open), Some(close)) = (line.find('('), line.rfind(')'))
        && open < close
    {
        let mut fields: Vec<&str> = line[..open].split_whitespace().collect();
        fields.push(&line[open..=close]);
        fields.extend(line[close + 1..].split_whitespace());
        return fields;
    }
    line.split_whitespace().collect()
}

/// Strips exactly one pair of enclosing parentheses, if present.
pub fn strip_parens(raw: &str) -> &str {
    raw.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(raw)
}

fn parse_counter(field: &str) -> u64 {
    field.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SYSTEMD: &str = "1 (systemd) S 0 1 1 0 -1 4194560 48721 1829473 108 1377 \
        163 2489 3409 1587 20 0 1 0 14 172924928 3337 18446744073709551615 1 1 0 0 0 0 \
        671173123 4096 1260 0 0 0 17 3 0 0 0 0 0\n";

    #[test]
    fn parses_fixed_positions() {
        let StatRecord::Complete(fields) = StatRecord::parse(SYSTEMD) else {
            panic!("expected a complete record");
        };
        assert_eq!(fields.command, "systemd");
        assert_eq!(fields.user_ticks, 163);
        assert_eq!(fields.system_ticks, 2489);
        assert_eq!(fields.virtual_size_bytes, 172_924_928);
        assert_eq!(fields.resident_pages, 3337);
    }

    #[test]
    fn bash_loses_exactly_one_layer_of_parentheses() {
        assert_eq!(strip_parens("(bash)"), "bash");
        assert_eq!(strip_parens("((sd-pam))"), "(sd-pam)");
        assert_eq!(strip_parens("bash"), "bash");
        assert_eq!(strip_parens("(bash"), "(bash");
    }

    #[test]
    fn command_with_spaces_does_not_shift_fields() {
        let line = SYSTEMD.replacen("(systemd)", "(Web Content)", 1);
        let StatRecord::Complete(fields) = StatRecord::parse(&line) else {
            panic!("expected a complete record");
        };
        assert_eq!(fields.command, "Web Content");
        assert_eq!(fields.user_ticks, 163);
        assert_eq!(fields.resident_pages, 3337);
    }

    #[test]
    fn command_with_inner_parentheses_keeps_them() {
        let line = SYSTEMD.replacen("(systemd)", "(x) y (z)", 1);
        let StatRecord::Complete(fields) = StatRecord::parse(&line) else {
            panic!("expected a complete record");
        };
        assert_eq!(fields.command, "x) y (z");
        assert_eq!(fields.system_ticks, 2489);
    }

    #[test]
    fn short_record_is_incomplete() {
        assert_eq!(
            StatRecord::parse("42 (bash) S 1 42 42 0"),
            StatRecord::Incomplete { fields: 7 }
        );
        assert_eq!(StatRecord::parse(""), StatRecord::Incomplete { fields: 0 });
    }

    #[test]
    fn exactly_minimum_field_count_is_complete() {
        let line = (0..MIN_STAT_FIELDS)
            .map(|i| if i == 1 { "(a)".to_string() } else { i.to_string() })
            .collect::<Vec<_>>()
            .join(" ");
        assert!(matches!(StatRecord::parse(&line), StatRecord::Complete(_)));
    }

    #[test]
    fn garbled_counters_read_as_zero() {
        let line = SYSTEMD.replacen(" 163 ", " abc ", 1);
        let StatRecord::Complete(fields) = StatRecord::parse(&line) else {
            panic!("expected a complete record");
        };
        assert_eq!(fields.user_ticks, 0);
        assert_eq!(fields.system_ticks, 2489);
    }
}
