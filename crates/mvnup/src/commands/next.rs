use anstream::println;
use mvnup_version::{SegmentLevel, Version, VersionError};
use owo_colors::OwoColorize;

use crate::config::Settings;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(help(
        "The segment has to exist, and a qualifier there has to be one of alpha, beta or milestone"
    ))]
    Increment(#[from] VersionError),
}

type Result<T> = miette::Result<T, Error>;

pub(crate) fn next(settings: &Settings, version: &Version, segment: SegmentLevel) -> Result<()> {
    let comparator = settings.comparison_method.comparator();
    let next = comparator.increment(version, segment)?;
    println!("{}", next.cyan());
    Ok(())
}
