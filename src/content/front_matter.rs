// SPDX-License-Identifier: MPL-2.0
//! `+++`-delimited TOML front matter.

use crate::error::{ContentError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DELIMITER: &str = "+++";

/// Article metadata declared at the top of the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    /// Publication date, written as `"YYYY-MM-DD"`.
    pub published: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub draft: bool,
}

/// Front matter plus the body that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'a> {
    pub front_matter: FrontMatter,
    pub body: &'a str,
    /// Zero-based file line on which the body starts.
    pub body_line: usize,
}

/// Separates and parses the front matter block of `source`.
pub fn split(source: &str) -> Result<Split<'_>> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = source.split_inclusive('\n');

    let header_start = match lines.next() {
        Some(first) if first.trim_end() == DELIMITER => first.len(),
        _ => return Err(ContentError::MissingFrontMatter.into()),
    };
    let mut offset = header_start;
    let mut line_no = 1;

    for line in lines {
        if line.trim_end() == DELIMITER {
            let header = &source[header_start..offset];
            let front_matter: FrontMatter = toml::from_str(header)
                .map_err(|err| ContentError::InvalidFrontMatter(err.message().trim().to_string()))?;
            return Ok(Split {
                front_matter,
                body: &source[offset + line.len()..],
                body_line: line_no + 1,
            });
        }
        offset += line.len();
        line_no += 1;
    }

    Err(ContentError::UnterminatedFrontMatter.into())
}
