// SPDX-License-Identifier: MPL-2.0
use folio::config::{self, Config};
use folio::content::{Article, ArticleLibrary, LineLayout, DEFAULT_LINE_HEIGHT_PX};
use folio::error::{Error, Result};
use folio::toc::{self, Active, ScrollSpy, TocEntry};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "\
Usage: folio [--config PATH] <command>

Commands:
  articles <dir>                                   List published articles, newest first
  toc <file>                                       Print an article's table of contents
  spy <file> --scroll-y <px> [--line-height <px>]  Show the active heading at a scroll position
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(pico_args::Arguments::from_env()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if matches!(err, Error::Cli(_)) {
                eprint!("\n{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(mut args: pico_args::Arguments) -> Result<()> {
    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let config = load_config(config_path);

    let command: Option<String> = args.subcommand()?;
    match command.as_deref() {
        Some("articles") => {
            let dir: PathBuf = args.free_from_str()?;
            finish(args)?;
            list_articles(&dir)
        }
        Some("toc") => {
            let file: PathBuf = args.free_from_str()?;
            finish(args)?;
            print_toc(&file)
        }
        Some("spy") => {
            let scroll_y: f64 = args.value_from_str("--scroll-y")?;
            let line_height: f64 = args
                .opt_value_from_str("--line-height")?
                .unwrap_or(DEFAULT_LINE_HEIGHT_PX);
            let file: PathBuf = args.free_from_str()?;
            finish(args)?;
            spy(&config, &file, scroll_y, line_height)
        }
        Some(other) => Err(Error::Cli(format!("unknown command `{other}`"))),
        None => Err(Error::Cli("missing command".to_string())),
    }
}

fn finish(args: pico_args::Arguments) -> Result<()> {
    let rest = args.finish();
    if rest.is_empty() {
        Ok(())
    } else {
        Err(Error::Cli(format!("unexpected arguments: {rest:?}")))
    }
}

fn load_config(path: Option<PathBuf>) -> Config {
    match path {
        Some(path) => config::load_from_path(&path).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "falling back to default config");
            Config::default()
        }),
        None => config::load().0,
    }
}

fn list_articles(dir: &Path) -> Result<()> {
    let library = ArticleLibrary::load_dir(dir)?;
    for article in library.articles() {
        println!(
            "{}  {:<32}  {} ({} headings)",
            article.published(),
            article.slug(),
            article.title(),
            article.headings().len()
        );
    }
    for path in library.skipped() {
        eprintln!("skipped: {}", path.display());
    }
    Ok(())
}

fn print_toc(file: &Path) -> Result<()> {
    let article = Article::load(file)?;
    println!("{}", article.title());
    print_entries(article.toc(), 1);
    Ok(())
}

fn print_entries(entries: &[TocEntry], level: usize) {
    for entry in entries {
        println!("{}- {} (#{})", "  ".repeat(level), entry.title, entry.id);
        print_entries(&entry.children, level + 1);
    }
}

fn spy(config: &Config, file: &Path, scroll_y: f64, line_height: f64) -> Result<()> {
    let article = Article::load(file)?;
    let layout = LineLayout::new(&article, line_height);
    let mut spy = ScrollSpy::new(article.toc().to_vec(), config.toc.options(), &layout);

    spy.handle(toc::Message::Scrolled, &layout);
    spy.handle(toc::Message::Frame { scroll_y }, &layout);

    match spy.active() {
        Some(Active::Heading(id)) => {
            let title = toc::flatten(article.toc())
                .into_iter()
                .find(|entry| entry.id == *id)
                .map_or(id.as_str(), |entry| entry.title.as_str());
            println!("{id}\t{title}");
        }
        Some(Active::Intro) => println!("(intro)"),
        None => println!("(no headings)"),
    }
    Ok(())
}
