use anstream::println;
use mvnup_updates::{RangeError, VersionRange};
use mvnup_version::Version;
use owo_colors::OwoColorize;
use tracing::{info, warn};

use crate::config::Settings;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(help("Ranges look like [1.0,2.0), (,1.0], [1.0] or (,1.0],[1.2,)"))]
    Range(#[from] RangeError),
}

type Result<T> = miette::Result<T, Error>;

pub(crate) fn filter(settings: &Settings, range: &str, candidates: &[Version]) -> Result<()> {
    let range = VersionRange::parse(range)?;
    if let Some(recommended) = range.recommended() {
        info!(%recommended, "A bare version does not restrict the candidates");
    }

    let matching = range.filter(candidates, settings.comparison_method.comparator());
    if matching.is_empty() {
        warn!("No candidates fall inside {range}");
    }
    for version in matching {
        println!("{}", version.cyan());
    }
    Ok(())
}
