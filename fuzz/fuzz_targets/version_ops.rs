#![no_main]

use libfuzzer_sys::fuzz_target;
use mvnup_version::{ComparisonMethod, SegmentLevel, Version};

fuzz_target!(|data: (&str, &str)| {
    let (a, b) = (Version::parse(data.0), Version::parse(data.1));

    for method in [ComparisonMethod::Maven, ComparisonMethod::Mercury] {
        let comparator = method.comparator();
        let ordering = comparator.compare(&a, &b);
        assert_eq!(ordering.reverse(), comparator.compare(&b, &a));
        assert_eq!(
            comparator.segment_level(&a, &b).is_none(),
            ordering.is_eq()
        );

        for level in SegmentLevel::ALL {
            let _next = comparator.increment(&a, level);
        }
    }
});
