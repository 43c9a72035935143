use std::collections::BTreeMap;

use anstream::println;
use camino::Utf8PathBuf;
use clap::Args;
use mvnup_updates::{UpdatePolicy, UpdateSelector};
use mvnup_version::{SegmentLevel, Version};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::output_format::OutputFormat;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

type Result<T> = miette::Result<T, Error>;

#[derive(Args, Debug)]
pub struct UpdatesArgs {
    /// The version in use now
    #[arg(long, value_name = "VERSION")]
    pub current: Version,

    /// File listing one candidate version per line
    #[arg(long, value_name = "FILE")]
    pub candidates_file: Option<Utf8PathBuf>,

    /// Candidate versions
    pub candidates: Vec<Version>,

    #[arg(long, value_name = "BOOL")]
    pub allow_major_updates: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub allow_minor_updates: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub allow_incremental_updates: Option<bool>,

    #[arg(long, value_name = "BOOL")]
    pub allow_snapshots: Option<bool>,

    /// Only report updates whose first change is at this segment or a less significant one
    #[arg(long, value_name = "LEVEL")]
    pub scope: Option<SegmentLevel>,

    /// Output format for the report
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl UpdatesArgs {
    fn policy(&self, settings: &Settings) -> UpdatePolicy {
        let defaults = settings.policy();
        UpdatePolicy {
            allow_major_updates: self
                .allow_major_updates
                .unwrap_or(defaults.allow_major_updates),
            allow_minor_updates: self
                .allow_minor_updates
                .unwrap_or(defaults.allow_minor_updates),
            allow_incremental_updates: self
                .allow_incremental_updates
                .unwrap_or(defaults.allow_incremental_updates),
            allow_snapshots: self.allow_snapshots.unwrap_or(defaults.allow_snapshots),
        }
    }

    fn candidates(&self) -> Result<Vec<Version>> {
        let mut candidates = Vec::new();
        if let Some(path) = &self.candidates_file {
            let contents = fs_err::read_to_string(path)?;
            candidates.extend(
                contents
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#'))
                    .map(Version::parse),
            );
        }
        candidates.extend(self.candidates.iter().cloned());
        debug!(count = candidates.len(), "Loaded candidates");
        Ok(candidates)
    }
}

#[derive(Serialize)]
#[cfg_attr(test, derive(Debug))]
struct UpdateReport<'a> {
    current: &'a Version,
    restriction: Option<String>,
    oldest: Option<&'a Version>,
    newest: Option<&'a Version>,
    all: Vec<&'a Version>,
    newest_snapshot: Option<&'a Version>,
    by_level: BTreeMap<SegmentLevel, Vec<&'a Version>>,
}

impl<'a> UpdateReport<'a> {
    fn new(selector: &'a UpdateSelector<'a>, scope: Option<SegmentLevel>) -> Self {
        Self {
            current: selector.current(),
            restriction: selector.restriction().map(ToString::to_string),
            oldest: selector.oldest_update(scope),
            newest: selector.newest_update(scope),
            all: selector.all_updates(scope),
            newest_snapshot: selector.newest_snapshot(scope),
            by_level: selector.updates_by_level(),
        }
    }
}

pub(crate) fn updates(settings: &Settings, args: UpdatesArgs) -> Result<()> {
    let candidates = args.candidates()?;
    let policy = args.policy(settings);

    let selector = match UpdateSelector::with_comparator(
        args.current.clone(),
        &candidates,
        policy,
        settings.comparison_method.comparator(),
    ) {
        Ok(selector) => selector,
        Err(err) => {
            warn!("Skipping {}: {err}", args.current);
            if args.format == OutputFormat::Json {
                println!("null");
            }
            return Ok(());
        }
    };

    let report = UpdateReport::new(&selector, args.scope);
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }
    Ok(())
}

fn print_report(report: &UpdateReport<'_>) {
    let Some(newest) = report.newest else {
        println!("No updates available for {}", report.current.cyan());
        if let Some(snapshot) = report.newest_snapshot {
            println!("Newest snapshot: {}", snapshot.yellow());
        }
        return;
    };

    println!("Current version: {}", report.current.cyan());
    if let Some(restriction) = &report.restriction {
        println!("Allowed range: {restriction}");
    }
    if let Some(oldest) = report.oldest {
        println!("Oldest update: {}", oldest.green());
    }
    println!("Newest update: {}", newest.green());
    println!("All updates: {}", join(&report.all));
    if let Some(snapshot) = report.newest_snapshot {
        println!("Newest snapshot: {}", snapshot.yellow());
    }
    for (level, updates) in &report.by_level {
        println!("  {level:<15}{}", join(updates));
    }
}

fn join(versions: &[&Version]) -> String {
    versions
        .iter()
        .map(|version| version.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
