//! Line-oriented driver.
//!
//! Input is two sections, each a count line followed by that many names:
//!
//! ```text
//! 4
//! gdz.ru
//! maps.me
//! m.gdz.ru
//! com
//! 2
//! gdz.com
//! gdz.it
//! ```
//!
//! The first section is the blocklist, the second the queries. One verdict
//! token is written per query, in input order.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::checker::DomainChecker;
use crate::config::CheckerOptions;
use crate::error::Result;
use crate::parser::LineReader;
use crate::types::RunSummary;

/// Read a blocklist and queries from `input`, write verdicts to `output`.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    options: &CheckerOptions,
) -> Result<RunSummary> {
    options.validate()?;
    let mut reader = LineReader::new(input);

    let blocklist = reader.read_domain_section()?;
    let blocklist_entries = blocklist.len();
    let checker = DomainChecker::from_names(blocklist, options);
    let retained = checker.index().len();
    info!(blocklist_entries, retained, "blocklist loaded");

    let queries = reader.read_domain_section()?;
    let mut blocked = 0;
    for query in &queries {
        let verdict = checker.check(query);
        if verdict.is_blocked() {
            blocked += 1;
        }
        writeln!(output, "{}", options.token(verdict))?;
    }
    output.flush()?;

    let summary = RunSummary {
        blocklist_entries,
        retained,
        queries: queries.len(),
        blocked,
    };
    debug!(?summary, "run finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlocklistError;
    use std::io::Cursor;

    const SCENARIO: &str = "4\ngdz.ru\nmaps.me\nm.gdz.ru\ncom\n8\naaaa\n.\n\n \n.com\ngdz.com\ngdz.it\naaaa.ssss.gdz.ru\n";

    #[test]
    fn test_run_scenario() {
        let mut out = Vec::new();
        let summary = run(Cursor::new(SCENARIO), &mut out, &CheckerOptions::default()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Good\nGood\nGood\nGood\nBad\nBad\nGood\nBad\n"
        );
        assert_eq!(
            summary,
            RunSummary {
                blocklist_entries: 4,
                retained: 3,
                queries: 8,
                blocked: 3,
            }
        );
    }

    #[test]
    fn test_run_custom_tokens() {
        let input = "1\ncom\n2\na.com\ncompany\n";
        let options = CheckerOptions::new().with_tokens("blocked", "allowed");
        let mut out = Vec::new();
        run(Cursor::new(input), &mut out, &options).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "blocked\nallowed\n");
    }

    #[test]
    fn test_run_empty_blocklist() {
        let mut out = Vec::new();
        let summary = run(
            Cursor::new("0\n2\ngdz.ru\n\n"),
            &mut out,
            &CheckerOptions::default(),
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Good\nGood\n");
        assert_eq!(summary.retained, 0);
        assert_eq!(summary.blocked, 0);
    }

    #[test]
    fn test_run_invalid_utf8_query_gets_verdict() {
        let input: &[u8] = b"1\ncom\n3\n\xff.com\na.com\nx.\xfe\n";
        let mut out = Vec::new();
        let summary = run(Cursor::new(input), &mut out, &CheckerOptions::default()).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Bad\nBad\nGood\n");
        assert_eq!(summary.queries, 3);
        assert_eq!(summary.blocked, 2);
    }

    #[test]
    fn test_run_invalid_utf8_blocklist_entry() {
        let input: &[u8] = b"1\n\xff.ru\n2\nm.\xff.ru\nru\n";
        let mut out = Vec::new();
        run(Cursor::new(input), &mut out, &CheckerOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Bad\nGood\n");
    }

    #[test]
    fn test_run_truncated_queries() {
        let mut out = Vec::new();
        let result = run(
            Cursor::new("1\ncom\n3\na.com\n"),
            &mut out,
            &CheckerOptions::default(),
        );
        assert!(matches!(
            result,
            Err(BlocklistError::UnexpectedEof {
                expected: 3,
                found: 1
            })
        ));
        // Nothing is printed before all queries are read
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_invalid_options() {
        let options = CheckerOptions::new().with_tokens("", "Good");
        let result = run(Cursor::new("0\n0\n"), Vec::new(), &options);
        assert!(matches!(result, Err(BlocklistError::ConfigError(_))));
    }
}
