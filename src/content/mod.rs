// SPDX-License-Identifier: MPL-2.0
//! Article loading.
//!
//! Articles are Markdown files (`.md` or `.mdx`) that open with a `+++`
//! TOML front matter block. Loading an article extracts its headings into
//! the table of contents the scroll-spy consumes; rendering the body is
//! left to the host.

pub mod front_matter;
pub mod headings;
pub mod layout;

pub use front_matter::FrontMatter;
pub use headings::{build_toc, extract_headings, slugify, Heading, Slugger};
pub use layout::{LineLayout, DEFAULT_LINE_HEIGHT_PX};

use crate::error::Result;
use crate::toc::TocEntry;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// File extensions recognized as articles.
pub const ARTICLE_EXTENSIONS: &[&str] = &["md", "mdx"];

/// A parsed article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    slug: String,
    front_matter: FrontMatter,
    headings: Vec<Heading>,
    toc: Vec<TocEntry>,
    body: String,
    body_line: usize,
}

impl Article {
    /// Parses an article from its source text.
    pub fn parse(slug: impl Into<String>, source: &str) -> Result<Self> {
        let split = front_matter::split(source)?;
        let headings = extract_headings(split.body);
        let toc = build_toc(&headings);
        Ok(Self {
            slug: slug.into(),
            front_matter: split.front_matter,
            headings,
            toc,
            body: split.body.to_string(),
            body_line: split.body_line,
        })
    }

    /// Reads and parses an article file; the slug is the file stem.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::parse(slug, &source)
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn front_matter(&self) -> &FrontMatter {
        &self.front_matter
    }

    pub fn title(&self) -> &str {
        &self.front_matter.title
    }

    pub fn published(&self) -> NaiveDate {
        self.front_matter.published
    }

    pub fn is_draft(&self) -> bool {
        self.front_matter.draft
    }

    /// Headings in document order.
    pub fn headings(&self) -> &[Heading] {
        &self.headings
    }

    /// Nested table of contents.
    pub fn toc(&self) -> &[TocEntry] {
        &self.toc
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Zero-based file line on which the body starts.
    pub fn body_line(&self) -> usize {
        self.body_line
    }
}

/// Published articles of one directory, newest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleLibrary {
    articles: Vec<Article>,
    skipped: Vec<PathBuf>,
}

impl ArticleLibrary {
    /// Loads every article in `dir`.
    ///
    /// Drafts are left out. Files that fail to parse are skipped with a
    /// warning and listed in [`ArticleLibrary::skipped`]. Returns an error
    /// only when the directory itself cannot be read.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut articles = Vec::new();
        let mut skipped = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || !is_article(&path) {
                continue;
            }
            match Article::load(&path) {
                Ok(article) if article.is_draft() => {
                    tracing::debug!(path = %path.display(), "skipping draft");
                }
                Ok(article) => articles.push(article),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "skipping unreadable article");
                    skipped.push(path);
                }
            }
        }

        articles.sort_by(|a, b| {
            b.published()
                .cmp(&a.published())
                .then_with(|| a.slug.cmp(&b.slug))
        });
        skipped.sort();
        tracing::debug!(count = articles.len(), dir = %dir.display(), "articles loaded");

        Ok(Self { articles, skipped })
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    /// Files that looked like articles but failed to parse.
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Whether `path` has an article extension (case-insensitive).
pub fn is_article(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ARTICLE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}
