use std::cmp::Ordering;

use anstream::println;
use mvnup_version::Version;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::config::Settings;

pub(crate) fn compare(settings: &Settings, a: &Version, b: &Version) {
    let comparator = settings.comparison_method.comparator();

    let symbol = match comparator.compare(a, b) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    if let Some(level) = comparator.segment_level(a, b) {
        debug!(%level, "Versions first differ");
    }

    println!("{} {} {}", a.cyan(), symbol.bold(), b.cyan());
}
