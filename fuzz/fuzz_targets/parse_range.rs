#![no_main]

use libfuzzer_sys::fuzz_target;
use mvnup_updates::VersionRange;

fuzz_target!(|data: &str| {
    if let Ok(range) = VersionRange::parse(data) {
        let _reparsed = VersionRange::parse(&range.to_string());
    }
});
