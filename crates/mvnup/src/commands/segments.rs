use anstream::println;
use mvnup_version::{SegmentLevel, Version};
use owo_colors::OwoColorize;

use crate::config::Settings;

pub(crate) fn segments(settings: &Settings, version: &Version) {
    let comparator = settings.comparison_method.comparator();
    let count = comparator.segment_count(version);

    println!(
        "{} has {} segment{}",
        version.cyan(),
        count,
        if count == 1 { "" } else { "s" }
    );
    for (index, segment) in version.segments().iter().enumerate() {
        let level = SegmentLevel::from_index(index);
        println!("  {level:<15}{segment}");
    }
    if version.is_snapshot() {
        println!("snapshot of {}", version.base_version().cyan());
    }
}
