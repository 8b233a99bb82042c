// src/cli.rs
use std::{env, error::Error};

use crate::{
    browser::{search_url, BrowserManager, ChromeSource},
    config::options::AppOptions,
    progress::StderrProgress,
    session::Session,
    source::ThreadWaiter,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Url(String),
    Query(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub target: Target,
    /// Raw filename input; sanitized at export
    pub filename: String,
    pub options: AppOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Scrape(CliArgs),
}

pub fn help_text() -> &'static str {
    include_str!("cli_help.txt")
}

/// Entry point for the `cli` binary.
pub fn run() -> Result<(), Box<dyn Error>> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", help_text());
            Ok(())
        }
        Command::Scrape(args) => scrape_and_export(&args),
    }
}

fn scrape_and_export(args: &CliArgs) -> Result<(), Box<dyn Error>> {
    let url = match &args.target {
        Target::Url(u) => u.clone(),
        Target::Query(q) => search_url(q)?,
    };

    let mut session = Session::open(&url);
    if !session.can_scrape() {
        return Err(format!("Not a Google Maps search page: {url}").into());
    }

    let opts = &args.options;
    logf!("CLI: scrape url={} opts={:?}", url, opts.scrape);

    let manager = BrowserManager::launch(opts.browser.clone())?;
    let mut feed = ChromeSource::open(&manager, &url)?;
    let mut progress = StderrProgress;

    let outcome = session.scrape(&mut feed, &mut ThreadWaiter, &opts.scrape, Some(&mut progress))?;
    eprintln!(
        "Collected {} listing(s) in {} pass(es) ({:?})",
        outcome.listings.len(),
        outcome.passes,
        outcome.stop
    );

    if !session.can_export() {
        eprintln!("No listings found; nothing exported.");
        return Ok(());
    }

    let path = session.export(&args.filename, &opts.export)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Parse arguments (program name already skipped).
pub fn parse_args<I>(args: I) -> Result<Command, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut target: Option<Target> = None;
    let mut filename = s!();
    let mut options = AppOptions::default();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                target = Some(Target::Url(v));
            }
            "-q" | "--query" => {
                let v = args.next().ok_or("Missing value for --query")?;
                target = Some(Target::Query(v));
            }
            "-o" | "--out" => filename = args.next().ok_or("Missing value for --out")?,
            "--dir" => {
                let v = args.next().ok_or("Missing value for --dir")?;
                options.export.set_out_dir(&v);
            }
            "--delay-ms" => {
                options.scrape.delay_ms = args.next().ok_or("Missing value for --delay-ms")?.parse()?;
            }
            "--stall-limit" => {
                let v: u32 = args.next().ok_or("Missing value for --stall-limit")?.parse()?;
                if v == 0 { return Err("--stall-limit must be at least 1".into()); }
                options.scrape.stall_limit = v;
            }
            "--dedup" => options.scrape.dedup = true,
            "--escape-quotes" => options.export.escape_quotes = true,
            "--headed" => options.browser.headless = false,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    let target = target.ok_or("Specify --url <URL> or --query <TEXT>")?;
    Ok(Command::Scrape(CliArgs { target, filename, options }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s!(*s)).collect()
    }

    #[test]
    fn parses_full_flag_set() {
        let cmd = parse_args(args(&[
            "-q", "pizza soho", "-o", "My Results", "--dir", "exports",
            "--delay-ms", "500", "--stall-limit", "3", "--dedup", "--escape-quotes", "--headed",
        ]))
        .unwrap();
        let Command::Scrape(a) = cmd else { panic!("expected scrape") };
        assert_eq!(a.target, Target::Query(s!("pizza soho")));
        assert_eq!(a.filename, "My Results");
        assert_eq!(a.options.export.out_dir(), std::path::Path::new("exports"));
        assert_eq!(a.options.scrape.delay_ms, 500);
        assert_eq!(a.options.scrape.stall_limit, 3);
        assert!(a.options.scrape.dedup);
        assert!(a.options.export.escape_quotes);
        assert!(!a.options.browser.headless);
    }

    #[test]
    fn defaults_apply_without_flags() {
        let Command::Scrape(a) = parse_args(args(&["--url", "https://www.google.com/maps/search/x"])).unwrap()
        else { panic!("expected scrape") };
        assert_eq!(a.filename, "");
        assert_eq!(a.options, AppOptions::default());
    }

    #[test]
    fn target_is_required() {
        assert!(parse_args(args(&["--dedup"])).is_err());
    }

    #[test]
    fn unknown_and_bad_values_are_errors() {
        assert!(parse_args(args(&["--frobnicate"])).is_err());
        assert!(parse_args(args(&["--url", "u", "--delay-ms", "soon"])).is_err());
        assert!(parse_args(args(&["--url", "u", "--stall-limit", "0"])).is_err());
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse_args(args(&["-h", "--frobnicate"])).unwrap(), Command::Help);
        assert!(help_text().contains("--stall-limit"));
    }
}
