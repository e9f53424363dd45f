//! Text input reader.
//!
//! ## Instance Format
//!
//! ```text
//! 3          <- n
//! 0 1 2      <- proposer 0
//! 0 1 2      <- proposer 1
//! 0 1 2      <- proposer 2
//! 1 0 2      <- receiver 0
//! 0 1 2      <- receiver 1
//! 0 1 2      <- receiver 2
//! ```
//!
//! Blank lines are ignored anywhere. Tokens are separated by ASCII
//! whitespace. Anything other than blank lines after the last receiver list
//! is an error.
//!
//! All validation happens here and in [`Instance::new`]; the engine never
//! sees a malformed table.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::ParseError;
use crate::types::{Instance, Pair};

/// Upper bound on rows reserved before any of them has been read.
const MAX_PREALLOCATED_ROWS: usize = 1024;

/// Read an instance from a buffered reader.
pub fn read_instance<R: BufRead>(reader: R) -> Result<Instance, ParseError> {
    let mut lines = Lines::new(reader);

    let (line, text) = lines.next_line()?.ok_or(ParseError::MissingSize)?;
    let n = parse_size(line, &text)?;

    let expected = n.checked_mul(2).ok_or_else(|| ParseError::InvalidSize {
        line,
        token: text.trim().to_owned(),
    })?;
    // n is untrusted until the rows arrive
    let capacity = n.min(MAX_PREALLOCATED_ROWS);
    let mut tables: [Vec<Vec<usize>>; 2] = [Vec::with_capacity(capacity), Vec::with_capacity(capacity)];
    for index in 0..expected {
        let (line, text) = lines.next_line()?.ok_or(ParseError::UnexpectedEof {
            expected,
            found: index,
        })?;
        tables[index / n.max(1)].push(parse_row(line, &text, n)?);
    }

    if let Some((line, _)) = lines.next_line()? {
        return Err(ParseError::TrailingData { line });
    }

    let [proposers, receivers] = tables;
    let instance = Instance::new(proposers, receivers)?;
    debug!(n, "parsed instance");
    Ok(instance)
}

/// Read an instance from a file.
pub fn read_instance_from_path<P: AsRef<Path>>(path: P) -> Result<Instance, ParseError> {
    let file = File::open(path)?;
    read_instance(BufReader::new(file))
}

/// Read an instance from a string slice.
pub fn parse_instance(s: &str) -> Result<Instance, ParseError> {
    read_instance(s.as_bytes())
}

/// Read a matching written by [`write_matching`](crate::io::write_matching):
/// one `"proposer receiver"` pair per line.
///
/// Only the shape is checked; use [`verify`](crate::engine::verify) to check
/// the pairs against an instance.
pub fn read_matching<R: Read>(reader: R) -> Result<Vec<Pair>, ParseError> {
    let mut lines = Lines::new(BufReader::new(reader));
    let mut pairs = Vec::new();

    while let Some((line, text)) = lines.next_line()? {
        let row = parse_row(line, &text, 2)?;
        pairs.push(Pair::new(row[0], row[1]));
    }

    Ok(pairs)
}

fn parse_size(line: usize, text: &str) -> Result<usize, ParseError> {
    let token = text.trim();
    token.parse().map_err(|_| ParseError::InvalidSize {
        line,
        token: token.to_owned(),
    })
}

/// Parse one whitespace-separated row of exactly `expected` identities.
fn parse_row(line: usize, text: &str, expected: usize) -> Result<Vec<usize>, ParseError> {
    let row = text
        .split_ascii_whitespace()
        .map(|token| {
            token.parse::<usize>().map_err(|_| ParseError::InvalidToken {
                line,
                token: token.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if row.len() != expected {
        return Err(ParseError::WrongLength {
            line,
            expected,
            found: row.len(),
        });
    }
    Ok(row)
}

/// Non-blank lines with their 1-based line numbers.
struct Lines<R> {
    rdr: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            line: 0,
        }
    }

    /// Next non-blank line, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<(usize, String)>, ParseError> {
        loop {
            self.buf.clear();
            if self.rdr.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;

            if !self.buf.trim().is_empty() {
                return Ok(Some((self.line, self.buf.clone())));
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PreferenceError;
    use crate::types::Side;

    const SMALL_INSTANCE: &str = "3\n0 1 2\n0 1 2\n0 1 2\n1 0 2\n0 1 2\n0 1 2\n";

    #[test]
    fn test_parse_instance() {
        let instance = parse_instance(SMALL_INSTANCE).unwrap();

        assert_eq!(instance.size(), 3);
        assert_eq!(instance.proposer_prefs(), &[vec![0, 1, 2], vec![0, 1, 2], vec![0, 1, 2]]);
        assert_eq!(instance.receiver_prefs()[0], vec![1, 0, 2]);
    }

    #[test]
    fn test_parse_tolerates_blank_lines_and_spacing() {
        let text = "\n2\n\n0   1\n1\t0\n\n 0 1 \n1 0\n\n\n";
        let instance = parse_instance(text).unwrap();

        assert_eq!(instance.size(), 2);
        assert_eq!(instance.proposer_prefs()[1], vec![1, 0]);
        assert_eq!(instance.receiver_prefs()[0], vec![0, 1]);
    }

    #[test]
    fn test_parse_empty_instance() {
        let instance = parse_instance("0\n").unwrap();
        assert!(instance.is_empty());
    }

    #[test]
    fn test_parse_missing_size() {
        assert!(matches!(parse_instance(""), Err(ParseError::MissingSize)));
        assert!(matches!(parse_instance("\n \n"), Err(ParseError::MissingSize)));
    }

    #[test]
    fn test_parse_invalid_size() {
        match parse_instance("three\n") {
            Err(ParseError::InvalidSize { line, token }) => {
                assert_eq!(line, 1);
                assert_eq!(token, "three");
            }
            other => panic!("Expected InvalidSize, got {:?}", other),
        }
        assert!(matches!(parse_instance("2 2\n"), Err(ParseError::InvalidSize { .. })));
    }

    #[test]
    fn test_parse_size_too_large_for_two_tables() {
        let text = format!("{}\n0\n", usize::MAX);
        match parse_instance(&text) {
            Err(ParseError::InvalidSize { line, token }) => {
                assert_eq!(line, 1);
                assert_eq!(token, usize::MAX.to_string());
            }
            other => panic!("Expected InvalidSize, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_huge_size_with_few_rows() {
        let huge = usize::MAX / 4 + 1;

        // Short row against the claimed size
        match parse_instance(&format!("{}\n0\n", huge)) {
            Err(ParseError::WrongLength { line, expected, found }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, huge);
                assert_eq!(found, 1);
            }
            other => panic!("Expected WrongLength, got {:?}", other),
        }

        // No rows at all
        match parse_instance(&format!("{}\n", huge)) {
            Err(ParseError::UnexpectedEof { expected, found }) => {
                assert_eq!(expected, huge * 2);
                assert_eq!(found, 0);
            }
            other => panic!("Expected UnexpectedEof, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_token() {
        match parse_instance("2\n0 1\n1 x\n0 1\n1 0\n") {
            Err(ParseError::InvalidToken { line, token }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "x");
            }
            other => panic!("Expected InvalidToken, got {:?}", other),
        }

        // Negative identities are not valid tokens
        assert!(matches!(
            parse_instance("2\n0 1\n1 0\n-1 0\n1 0\n"),
            Err(ParseError::InvalidToken { line: 4, .. })
        ));
    }

    #[test]
    fn test_parse_wrong_length() {
        match parse_instance("2\n0 1\n1 0 1\n0 1\n1 0\n") {
            Err(ParseError::WrongLength { line, expected, found }) => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("Expected WrongLength, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unexpected_eof() {
        match parse_instance("2\n0 1\n1 0\n0 1\n") {
            Err(ParseError::UnexpectedEof { expected, found }) => {
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("Expected UnexpectedEof, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_trailing_data() {
        assert!(matches!(
            parse_instance("1\n0\n0\n0\n"),
            Err(ParseError::TrailingData { line: 4 })
        ));
    }

    #[test]
    fn test_parse_invalid_preference_list() {
        match parse_instance("2\n0 1\n1 0\n0 0\n1 0\n") {
            Err(ParseError::Preference(err)) => assert_eq!(
                err,
                PreferenceError::Duplicate {
                    side: Side::Receiver,
                    agent: 0,
                    identity: 0,
                }
            ),
            other => panic!("Expected Preference error, got {:?}", other),
        }

        assert!(matches!(
            parse_instance("2\n0 2\n1 0\n0 1\n1 0\n"),
            Err(ParseError::Preference(PreferenceError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_read_matching() {
        let pairs = read_matching("1 0\n0 1\n\n2 2\n".as_bytes()).unwrap();
        assert_eq!(pairs, vec![Pair::new(1, 0), Pair::new(0, 1), Pair::new(2, 2)]);

        assert!(matches!(
            read_matching("1 0 4\n".as_bytes()),
            Err(ParseError::WrongLength { line: 1, expected: 2, found: 3 })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_instance_from_path("/nonexistent/stable-match/input.txt").unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
