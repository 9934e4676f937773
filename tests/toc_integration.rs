// SPDX-License-Identifier: MPL-2.0
//! Articles on disk through the scroll-spy.

use folio::content::{Article, ArticleLibrary, LineLayout};
use folio::toc::{self, Active, Effect, Message, ScrollSpy, ScrollSpyOptions, TocEntry};
use folio::domain::ui::ActivationOffset;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

const ARTICLE: &str = "\
+++
title = \"Building a player\"
published = \"2024-06-01\"
summary = \"Notes\"
+++
Intro paragraph.

## Events
Body.

### Priority
More.

```rust
## not a heading
```

## Events
Repeated title.

## Wrap-up!
End.
";

#[test]
fn article_headings_become_nested_unique_toc() {
    let article = Article::parse("player", ARTICLE).expect("valid article");
    let toc = article.toc();

    let top: Vec<&str> = toc.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(top, vec!["events", "events-1", "wrap-up"]);
    assert_eq!(toc[0].children[0].id, "priority");
    assert_eq!(toc[0].children[0].depth, 3);
}

#[test]
fn reference_scenario_selects_b() {
    let toc = vec![
        TocEntry::new("a", "A", 2),
        TocEntry::new("b", "B", 2),
        TocEntry::new("c", "C", 3),
    ];
    let layout: HashMap<String, f64> = [("a", 100.0), ("b", 500.0), ("c", 900.0)]
        .into_iter()
        .map(|(id, top)| (id.to_string(), top))
        .collect();
    let options = ScrollSpyOptions {
        top_offset: ActivationOffset::new(150.0),
        show_intro: false,
    };
    let mut spy = ScrollSpy::new(toc, options, &layout);

    assert_eq!(spy.handle(Message::Scrolled, &layout), Effect::RequestFrame);
    spy.handle(Message::Frame { scroll_y: 400.0 }, &layout);
    assert_eq!(spy.active_id(), Some("b"));
}

#[test]
fn click_navigation_on_loaded_article() {
    let article = Article::parse("player", ARTICLE).expect("valid article");
    let layout = LineLayout::new(&article, 20.0);
    let mut spy = ScrollSpy::new(article.toc().to_vec(), ScrollSpyOptions::default(), &layout);

    let Effect::ScrollTo { top, .. } = spy.handle(Message::EntryClicked("wrap-up".into()), &layout)
    else {
        panic!("expected a scroll target");
    };

    // Animate toward the target in steps; the highlight never leaves the target.
    let steps = 8;
    for i in 1..=steps {
        let scroll_y = top * f64::from(i) / f64::from(steps);
        spy.handle(Message::Scrolled, &layout);
        spy.handle(Message::Frame { scroll_y }, &layout);
        assert_eq!(spy.active_id(), Some("wrap-up"));
    }
    assert!(!spy.is_pinned());
}

#[test]
fn missing_headings_are_skipped() {
    let article = Article::parse("player", ARTICLE).expect("valid article");
    let layout: HashMap<String, f64> = [("events-1".to_string(), 300.0)].into_iter().collect();
    let measured = toc::measure(article.toc(), &layout);
    assert_eq!(measured.len(), 1);

    let spy = ScrollSpy::new(article.toc().to_vec(), ScrollSpyOptions::default(), &layout);
    assert_eq!(spy.active(), Some(&Active::Heading("events-1".into())));
}

#[test]
fn library_lists_published_articles() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("player.md"), ARTICLE).expect("write");
    fs::write(
        dir.path().join("draft.md"),
        "+++\ntitle = \"Draft\"\npublished = \"2030-01-01\"\ndraft = true\n+++\n",
    )
    .expect("write");

    let library = ArticleLibrary::load_dir(dir.path()).expect("readable dir");
    assert_eq!(library.len(), 1);
    let article = library.get("player").expect("player article");
    assert_eq!(article.front_matter().summary.as_deref(), Some("Notes"));
}
