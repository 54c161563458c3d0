#![no_main]

use std::cmp::Ordering;

use libfuzzer_sys::fuzz_target;
use verso_version::{ComparisonOperator, Version, satisfies};

fuzz_target!(|data: &str| {
    let (left, right) = data.split_once('\n').unwrap_or((data, data));

    if let Ok(version) = Version::new(left) {
        assert_eq!(version.cmp(&version), Ordering::Equal);
    }

    if let (Ok(a), Ok(b)) = (Version::new(left), Version::new(right)) {
        assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    assert!(satisfies(left, "==", left));
    for operator in ComparisonOperator::all() {
        let _holds = satisfies(left, operator.as_str(), right);
    }
});
