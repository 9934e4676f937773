// SPDX-License-Identifier: MPL-2.0
//! Heading extraction and anchor slugs.

use crate::toc::TocEntry;
use std::collections::HashMap;

/// Shallowest heading level listed in the table of contents (`##`).
pub const MIN_TOC_DEPTH: u8 = 2;
/// Deepest heading level listed in the table of contents (`####`).
pub const MAX_TOC_DEPTH: u8 = 4;

/// A heading found in an article body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub id: String,
    pub title: String,
    pub depth: u8,
    /// Zero-based line within the body.
    pub line: usize,
}

/// Produces unique GitHub-style anchor ids.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for `text`; repeats get `-1`, `-2`, … suffixes.
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        let mut candidate = base.clone();
        loop {
            let count = self.seen.entry(candidate.clone()).or_insert(0);
            if *count == 0 {
                *count = 1;
                return candidate;
            }
            let suffix = *count;
            *count += 1;
            candidate = format!("{base}-{suffix}");
        }
    }
}

/// Lowercases, drops punctuation and turns spaces into hyphens.
pub fn slugify(text: &str) -> String {
    text.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '-' | '_' => Some(c),
            c if c.is_alphanumeric() => Some(c),
            _ => None,
        })
        .collect()
}

/// Extracts `##`..`####` ATX headings outside fenced code blocks.
pub fn extract_headings(body: &str) -> Vec<Heading> {
    let mut slugger = Slugger::new();
    let mut fence: Option<(char, usize)> = None;
    let mut headings = Vec::new();

    for (line_no, line) in body.lines().enumerate() {
        let Some(trimmed) = strip_indent(line) else {
            continue;
        };

        if let Some(marker) = fence_marker(trimmed) {
            match fence {
                None => fence = Some(marker),
                Some((ch, len)) if marker.0 == ch && marker.1 >= len => fence = None,
                Some(_) => {}
            }
            continue;
        }
        if fence.is_some() {
            continue;
        }

        if let Some((depth, title)) = parse_atx(trimmed) {
            if (MIN_TOC_DEPTH..=MAX_TOC_DEPTH).contains(&depth) && !title.is_empty() {
                headings.push(Heading {
                    id: slugger.slug(&title),
                    title,
                    depth,
                    line: line_no,
                });
            }
        }
    }

    headings
}

/// Nests headings under the nearest shallower heading before them.
pub fn build_toc(headings: &[Heading]) -> Vec<TocEntry> {
    let mut roots = Vec::new();
    let mut open: Vec<TocEntry> = Vec::new();

    for heading in headings {
        while let Some(done) = open.pop_if(|top| top.depth >= heading.depth) {
            attach(&mut open, &mut roots, done);
        }
        open.push(TocEntry::new(&heading.id, &heading.title, heading.depth));
    }
    while let Some(done) = open.pop() {
        attach(&mut open, &mut roots, done);
    }

    roots
}

fn attach(open: &mut [TocEntry], roots: &mut Vec<TocEntry>, entry: TocEntry) {
    match open.last_mut() {
        Some(parent) => parent.children.push(entry),
        None => roots.push(entry),
    }
}

/// Strips up to three leading spaces; more makes an indented code block.
fn strip_indent(line: &str) -> Option<&str> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    (indent <= 3).then(|| &line[indent..])
}

fn fence_marker(line: &str) -> Option<(char, usize)> {
    let ch = line.chars().next().filter(|c| *c == '`' || *c == '~')?;
    let len = line.chars().take_while(|c| *c == ch).count();
    (len >= 3).then_some((ch, len))
}

fn parse_atx(line: &str) -> Option<(u8, String)> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &line[hashes..];
    if !(rest.is_empty() || rest.starts_with([' ', '\t'])) {
        return None;
    }
    let mut title = rest.trim();
    // Optional closing sequence: `## Title ##`.
    let without_closing = title.trim_end_matches('#');
    if without_closing.is_empty() || without_closing.ends_with([' ', '\t']) {
        title = without_closing.trim_end();
    }
    let depth = u8::try_from(hashes).ok()?;
    Some((depth, strip_inline_markup(title)))
}

/// Reduces inline markup to the text it renders: code spans, emphasis,
/// links and images keep only their visible text.
fn strip_inline_markup(title: &str) -> String {
    let chars: Vec<char> = title.chars().collect();
    strip_chars(&chars).trim().to_string()
}

fn strip_chars(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '`' | '*' => i += 1,
            '!' if chars.get(i + 1) == Some(&'[') => match link_span(&chars[i + 1..]) {
                Some((text, used)) => {
                    out.push_str(&strip_chars(text));
                    i += 1 + used;
                }
                None => {
                    out.push('!');
                    i += 1;
                }
            },
            '[' => match link_span(&chars[i..]) {
                Some((text, used)) => {
                    out.push_str(&strip_chars(text));
                    i += used;
                }
                None => {
                    out.push('[');
                    i += 1;
                }
            },
            '_' => {
                let run = chars[i..].iter().take_while(|c| **c == '_').count();
                let before = i.checked_sub(1).map(|j| chars[j]);
                let after = chars.get(i + run).copied();
                // Intraword underscores are literal, as in `snake_case`.
                if before.is_some_and(char::is_alphanumeric)
                    && after.is_some_and(char::is_alphanumeric)
                {
                    out.extend(std::iter::repeat_n('_', run));
                }
                i += run;
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// Matches `[text](target)` at the start of `chars`, returning the text and
/// the number of chars consumed.
fn link_span(chars: &[char]) -> Option<(&[char], usize)> {
    let close = chars.iter().position(|c| *c == ']')?;
    if chars.get(close + 1) != Some(&'(') {
        return None;
    }
    let target_len = chars[close + 2..].iter().position(|c| *c == ')')?;
    Some((&chars[1..close], close + 2 + target_len + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(entries: &[TocEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn slugify_matches_github_rules() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("  What's new in v2.0?  "), "whats-new-in-v20");
        assert_eq!(slugify("snake_case and-dash"), "snake_case-and-dash");
    }

    #[test]
    fn slugger_deduplicates() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Setup"), "setup");
        assert_eq!(slugger.slug("Setup"), "setup-1");
        assert_eq!(slugger.slug("Setup"), "setup-2");
        assert_eq!(slugger.slug("Setup 1"), "setup-1-1");
    }

    #[test]
    fn extracts_levels_two_to_four_only() {
        let body = "# Title\n## Intro\n### Detail\n#### Deep\n##### Too deep\n";
        let headings = extract_headings(body);
        let depths: Vec<u8> = headings.iter().map(|h| h.depth).collect();
        assert_eq!(depths, vec![2, 3, 4]);
        assert_eq!(headings[0].line, 1);
    }

    #[test]
    fn ignores_headings_inside_fences() {
        let body = "## Real\n```sh\n## not a heading\n~~~\n```\n## Also real\n";
        let titles: Vec<String> = extract_headings(body).into_iter().map(|h| h.title).collect();
        assert_eq!(titles, vec!["Real", "Also real"]);
    }

    #[test]
    fn requires_space_after_hashes() {
        assert!(extract_headings("##NoSpace\n").is_empty());
        assert!(extract_headings("    ## indented code\n").is_empty());
    }

    #[test]
    fn strips_closing_sequence_and_markup() {
        let headings = extract_headings("## The `Player` API ##\n");
        assert_eq!(headings[0].title, "The Player API");
        assert_eq!(headings[0].id, "the-player-api");
    }

    #[test]
    fn links_keep_their_text() {
        let headings = extract_headings("## Using `useEffect` with [React](https://react.dev)\n");
        assert_eq!(headings[0].title, "Using useEffect with React");
        assert_eq!(headings[0].id, "using-useeffect-with-react");
    }

    #[test]
    fn images_and_underscore_emphasis_are_stripped() {
        let headings = extract_headings("## ![Logo](logo.png) The __quick__ _snake_case_ guide\n");
        assert_eq!(headings[0].title, "Logo The quick snake_case guide");
        assert_eq!(headings[0].id, "logo-the-quick-snake_case-guide");
    }

    #[test]
    fn unterminated_brackets_stay_literal() {
        let headings = extract_headings("## Arrays [0] and [link](broken\n");
        assert_eq!(headings[0].title, "Arrays [0] and [link](broken");
        assert_eq!(headings[0].id, "arrays-0-and-linkbroken");
    }

    #[test]
    fn build_toc_nests_deeper_headings() {
        let body = "## A\n### A1\n#### A1x\n### A2\n## B\n#### B-deep\n";
        let toc = build_toc(&extract_headings(body));

        assert_eq!(ids(&toc), vec!["a", "b"]);
        assert_eq!(ids(&toc[0].children), vec!["a1", "a2"]);
        assert_eq!(ids(&toc[0].children[0].children), vec!["a1x"]);
        assert_eq!(ids(&toc[1].children), vec!["b-deep"]);
    }

    #[test]
    fn build_toc_starting_deep_keeps_roots() {
        let body = "### Early\n## Later\n";
        let toc = build_toc(&extract_headings(body));
        assert_eq!(ids(&toc), vec!["early", "later"]);
    }
}
