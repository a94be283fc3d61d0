//! Domain-specific assertion macros for dharm harnesses.
//!
//! These wrap `pretty_assertions` and report the input cell alongside the
//! mismatch so a failing corpus entry is easy to find.

/// Assert that a cell converts to the expected start/end under the given
/// fillers (default fillers when omitted).
///
/// ```rust
/// assert_span!("1990-Feb", "1990-02-00", "NaN");
/// ```
#[macro_export]
macro_rules! assert_span {
    ($input:expr, $start:expr, $end:expr) => {
        $crate::assert_span!($input, $start, $end, &dharm_core::Fillers::default())
    };
    ($input:expr, $start:expr, $end:expr, $fillers:expr) => {{
        let input: &str = $input;
        let actual = dharm_core::convert(input, $fillers);
        let expected = dharm_core::DateSpan::new($start, $end);
        pretty_assertions::assert_eq!(actual, expected, "input: {:?}", input);
    }};
}

/// Assert that a cell is reported as unrecognised.
#[macro_export]
macro_rules! assert_alert {
    ($input:expr) => {{
        let input: &str = $input;
        let actual = dharm_core::convert(input, &dharm_core::Fillers::default());
        if !actual.is_alert() {
            panic!(
                "assert_alert! failed: {:?} converted to {} via {:?}",
                input,
                actual,
                dharm_core::classify(input)
            );
        }
    }};
}

/// Assert which table entry governs a cell.
///
/// ```rust
/// assert_pattern!("1990-10-10", PatternId::YearMonthDay);
/// ```
#[macro_export]
macro_rules! assert_pattern {
    ($input:expr, $id:expr) => {{
        let input: &str = $input;
        let expected: dharm_core::PatternId = $id;
        match dharm_core::classify(input) {
            Some(actual) if actual == expected => {}
            Some(actual) => panic!(
                "assert_pattern! failed for {:?}:\n  expected: {}\n  actual:   {}",
                input, expected, actual
            ),
            None => panic!(
                "assert_pattern! failed: {:?} matched nothing, expected {}",
                input, expected
            ),
        }
    }};
}
