use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{BlocklistError, Result};

/// Regex pattern for count lines: a leading ASCII decimal number, anything after it is ignored
static COUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[[:space:]]*\+?([0-9]+)").expect("COUNT_PATTERN: hardcoded regex is invalid")
});

/// Line-oriented reader that tracks 1-based line numbers for error reporting.
pub struct LineReader<R> {
    inner: R,
    line_num: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    /// Wrap a buffered reader
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line_num: 0,
            buf: Vec::new(),
        }
    }

    /// Read the next line without its terminator. `None` at end of input.
    ///
    /// Lines are read as bytes; invalid UTF-8 is replaced with U+FFFD so a
    /// malformed name still gets a verdict.
    pub fn next_line(&mut self) -> Result<Option<Cow<'_, str>>> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line_num += 1;

        // Strip only the line terminator; names are otherwise verbatim
        if self.buf.ends_with(b"\n") {
            self.buf.pop();
            if self.buf.ends_with(b"\r") {
                self.buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&self.buf)))
    }

    /// Read a count line.
    pub fn read_count(&mut self) -> Result<usize> {
        let line_num = self.line_num + 1;
        let line = self.next_line()?.ok_or(BlocklistError::UnexpectedEof {
            expected: 1,
            found: 0,
        })?;
        parse_count(&line, line_num)
    }

    /// Read exactly `count` domain names, one per line.
    pub fn read_domains(&mut self, count: usize) -> Result<Vec<String>> {
        // Don't trust the count for preallocation
        let mut domains = Vec::with_capacity(count.min(4096));
        while domains.len() < count {
            match self.next_line()? {
                Some(line) => domains.push(line.into_owned()),
                None => {
                    return Err(BlocklistError::UnexpectedEof {
                        expected: count,
                        found: domains.len(),
                    })
                }
            }
        }
        Ok(domains)
    }

    /// Read a count line followed by that many domain names.
    pub fn read_domain_section(&mut self) -> Result<Vec<String>> {
        let count = self.read_count()?;
        self.read_domains(count)
    }
}

/// Parse the count from a single line.
pub fn parse_count(line: &str, line_num: usize) -> Result<usize> {
    let invalid = || BlocklistError::InvalidCount {
        line: line_num,
        value: line.to_string(),
    };
    let captures = COUNT_PATTERN.captures(line).ok_or_else(invalid)?;
    captures
        .get(1)
        .ok_or_else(invalid)?
        .as_str()
        .parse::<usize>()
        .map_err(|_| invalid())
}

/// Read a count line from `reader`.
pub fn read_count<R: BufRead>(reader: R) -> Result<usize> {
    LineReader::new(reader).read_count()
}

/// Read exactly `count` domain names from `reader`.
pub fn read_domains<R: BufRead>(reader: R, count: usize) -> Result<Vec<String>> {
    LineReader::new(reader).read_domains(count)
}

/// Read a count line followed by that many domain names.
pub fn read_domain_section<R: BufRead>(reader: R) -> Result<Vec<String>> {
    LineReader::new(reader).read_domain_section()
}

/// Read one domain section from a file.
pub fn read_domains_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = fs::File::open(path).map_err(|e| {
        BlocklistError::ConfigError(format!(
            "Failed to open domain list '{}': {}",
            path.display(),
            e
        ))
    })?;
    read_domain_section(BufReader::new(file))
}
