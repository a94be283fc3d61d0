//! The ordered date pattern table.
//!
//! Shapes are not mutually exclusive (`1990-10-10` satisfies both the padded
//! and the loose full-date pattern), so the position of each entry in
//! [`PatternId::ALL`] is its priority: the first full match wins.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::{DateSpan, Fillers};
use crate::vocabulary::{abbreviated_month, named_month, season_months};

// Regex fragments. Kept as macros so `concat!` can assemble whole-string
// patterns at compile time.
macro_rules! century_year { () => { "(?:19|20)[0-9]{2}" } }
macro_rules! any_year { () => { "[0-9]{4}" } }
macro_rules! month { () => { "0[1-9]|1[0-2]" } }
macro_rules! day { () => { "0[1-9]|[12][0-9]|3[01]" } }
macro_rules! loose_month { () => { "[1-9]|1[0-2]" } }
macro_rules! loose_day { () => { "[1-9]|[12][0-9]|3[01]" } }
macro_rules! month_abbr {
    () => { "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec" };
}
macro_rules! month_name {
    () => {
        "January|February|March|April|May|June|July|August|September|October|November|December"
    };
}
macro_rules! season { () => { "Spring|Summer|Automn|Winter" } }

/// One entry of the pattern table, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternId {
    /// `1990`
    Year,
    /// `1990-05`
    YearMonth,
    /// `1990-05-05`
    YearMonthDay,
    /// `1990-Feb`
    YearMonthAbbr,
    /// `1990-5-5`
    LooseYearMonthDay,
    /// `(1990/1991)-(05/06)-(05/06)`
    RangedYearMonthDay,
    /// `1990-5`
    LooseYearMonth,
    /// `(1990/1991)`
    YearRange,
    /// `1990-(05/06)`
    YearMonthRange,
    /// `(1990/1991)-(05/06)`
    RangedYearMonth,
    /// `(1990/1991)-(05/06)-05`
    RangedYearMonthSharedDay,
    /// `1990-5/6`
    YearLooseMonthRange,
    /// `(1990/1991)-05-05`
    YearRangeSharedMonthDay,
    /// `1990-Summer`
    YearSeason,
    /// `1990-June-July`
    YearMonthNameRange,
    /// `(1990/1991)-Summer`
    YearRangeSeason,
    /// `1990-05-(05/06)`
    YearMonthDayRange,
    /// `1990/1991`
    BareYearRange,
}

impl PatternId {
    /// Every entry, in the order the normalizer tries them.
    pub const ALL: [PatternId; 18] = [
        PatternId::Year,
        PatternId::YearMonth,
        PatternId::YearMonthDay,
        PatternId::YearMonthAbbr,
        PatternId::LooseYearMonthDay,
        PatternId::RangedYearMonthDay,
        PatternId::LooseYearMonth,
        PatternId::YearRange,
        PatternId::YearMonthRange,
        PatternId::RangedYearMonth,
        PatternId::RangedYearMonthSharedDay,
        PatternId::YearLooseMonthRange,
        PatternId::YearRangeSharedMonthDay,
        PatternId::YearSeason,
        PatternId::YearMonthNameRange,
        PatternId::YearRangeSeason,
        PatternId::YearMonthDayRange,
        PatternId::BareYearRange,
    ];

    /// Stable table name, `pattern01`..`pattern18`.
    pub fn name(self) -> &'static str {
        match self {
            PatternId::Year => "pattern01",
            PatternId::YearMonth => "pattern02",
            PatternId::YearMonthDay => "pattern03",
            PatternId::YearMonthAbbr => "pattern04",
            PatternId::LooseYearMonthDay => "pattern05",
            PatternId::RangedYearMonthDay => "pattern06",
            PatternId::LooseYearMonth => "pattern07",
            PatternId::YearRange => "pattern08",
            PatternId::YearMonthRange => "pattern09",
            PatternId::RangedYearMonth => "pattern10",
            PatternId::RangedYearMonthSharedDay => "pattern11",
            PatternId::YearLooseMonthRange => "pattern12",
            PatternId::YearRangeSharedMonthDay => "pattern13",
            PatternId::YearSeason => "pattern14",
            PatternId::YearMonthNameRange => "pattern15",
            PatternId::YearRangeSeason => "pattern16",
            PatternId::YearMonthDayRange => "pattern17",
            PatternId::BareYearRange => "pattern18",
        }
    }

    /// A representative input this entry is meant to recognise.
    pub fn example(self) -> &'static str {
        match self {
            PatternId::Year => "1990",
            PatternId::YearMonth => "1990-05",
            PatternId::YearMonthDay => "1990-05-05",
            PatternId::YearMonthAbbr => "1990-Feb",
            PatternId::LooseYearMonthDay => "1990-5-5",
            PatternId::RangedYearMonthDay => "(1990/1991)-(05/06)-(05/06)",
            PatternId::LooseYearMonth => "1990-5",
            PatternId::YearRange => "(1990/1991)",
            PatternId::YearMonthRange => "1990-(05/06)",
            PatternId::RangedYearMonth => "(1990/1991)-(05/06)",
            PatternId::RangedYearMonthSharedDay => "(1990/1991)-(05/06)-05",
            PatternId::YearLooseMonthRange => "1990-5/6",
            PatternId::YearRangeSharedMonthDay => "(1990/1991)-05-05",
            PatternId::YearSeason => "1990-Summer",
            PatternId::YearMonthNameRange => "1990-June-July",
            PatternId::YearRangeSeason => "(1990/1991)-Summer",
            PatternId::YearMonthDayRange => "1990-05-(05/06)",
            PatternId::BareYearRange => "1990/1991",
        }
    }

    /// Whole-string regex source for this entry.
    pub fn source(self) -> &'static str {
        match self {
            PatternId::Year => concat!("^(?P<year>", century_year!(), ")$"),
            PatternId::YearMonth => {
                concat!("^(?P<year>", century_year!(), ")-(?P<month>", month!(), ")$")
            }
            PatternId::YearMonthDay => concat!(
                "^(?P<year>", century_year!(), ")",
                "-(?P<month>", month!(), ")",
                "-(?P<day>", day!(), ")$"
            ),
            PatternId::YearMonthAbbr => {
                concat!("^(?P<year>", century_year!(), ")-(?P<abbr>", month_abbr!(), ")$")
            }
            PatternId::LooseYearMonthDay => concat!(
                "^(?P<year>", century_year!(), ")",
                "-(?P<month>", loose_month!(), ")",
                "-(?P<day>", loose_day!(), ")$"
            ),
            PatternId::RangedYearMonthDay => concat!(
                r"^\((?P<year>", century_year!(), ")/(?P<year_end>", century_year!(), r")\)",
                r"-\((?P<month>", month!(), ")/(?P<month_end>", month!(), r")\)",
                r"-\((?P<day>", day!(), ")/(?P<day_end>", day!(), r")\)$"
            ),
            // `10` is left out: `1990-10` already belongs to YearMonth.
            PatternId::LooseYearMonth => {
                concat!("^(?P<year>", century_year!(), ")-(?P<month>[1-9]|1[12])$")
            }
            PatternId::YearRange => concat!(
                r"^\((?P<year>", century_year!(), ")/(?P<year_end>", century_year!(), r")\)$"
            ),
            PatternId::YearMonthRange => concat!(
                "^(?P<year>", century_year!(), ")",
                r"-\((?P<month>", month!(), ")/(?P<month_end>", month!(), r")\)$"
            ),
            PatternId::RangedYearMonth => concat!(
                r"^\((?P<year>", century_year!(), ")/(?P<year_end>", century_year!(), r")\)",
                r"-\((?P<month>", month!(), ")/(?P<month_end>", month!(), r")\)$"
            ),
            PatternId::RangedYearMonthSharedDay => concat!(
                r"^\((?P<year>", century_year!(), ")/(?P<year_end>", century_year!(), r")\)",
                r"-\((?P<month>", month!(), ")/(?P<month_end>", month!(), r")\)",
                "-(?P<day>", day!(), ")$"
            ),
            PatternId::YearLooseMonthRange => concat!(
                "^(?P<year>", century_year!(), ")",
                "-(?P<month>", loose_month!(), ")/(?P<month_end>", loose_month!(), ")$"
            ),
            PatternId::YearRangeSharedMonthDay => concat!(
                r"^\((?P<year>", century_year!(), ")/(?P<year_end>", century_year!(), r")\)",
                "-(?P<month>", month!(), ")",
                "-(?P<day>", day!(), ")$"
            ),
            PatternId::YearSeason => {
                concat!("^(?P<year>", any_year!(), ")-(?P<season>", season!(), ")$")
            }
            PatternId::YearMonthNameRange => concat!(
                "^(?P<year>", any_year!(), ")",
                "-(?P<month>", month_name!(), ")",
                "-(?P<month_end>", month_name!(), ")$"
            ),
            PatternId::YearRangeSeason => concat!(
                r"^\((?P<year>", any_year!(), ")/(?P<year_end>", any_year!(), r")\)",
                "-(?P<season>", season!(), ")$"
            ),
            PatternId::YearMonthDayRange => concat!(
                "^(?P<year>", any_year!(), ")",
                "-(?P<month>", month!(), ")",
                r"-\((?P<day>", day!(), ")/(?P<day_end>", day!(), r")\)$"
            ),
            PatternId::BareYearRange => {
                concat!("^(?P<year>", any_year!(), ")/(?P<year_end>", any_year!(), ")$")
            }
        }
    }

    /// Build the start/end pair from a match of [`source`](Self::source).
    ///
    /// # Panics
    ///
    /// If `caps` did not come from this entry's regex.
    pub fn format(self, caps: &Captures<'_>, fill: &Fillers) -> DateSpan {
        let (m, d) = (fill.month.as_str(), fill.day.as_str());
        let year = &caps["year"];

        match self {
            PatternId::Year => DateSpan::single(ymd(year, m, d), fill),
            PatternId::YearMonth => DateSpan::single(ymd(year, &caps["month"], d), fill),
            PatternId::YearMonthDay => {
                DateSpan::single(ymd(year, &caps["month"], &caps["day"]), fill)
            }
            PatternId::YearMonthAbbr => {
                DateSpan::single(ymd(year, &abbreviated_month(&caps["abbr"]), d), fill)
            }
            PatternId::LooseYearMonthDay => DateSpan::single(
                ymd(year, &pad(&caps["month"]), &pad(&caps["day"])),
                fill,
            ),
            PatternId::RangedYearMonthDay => DateSpan::new(
                ymd(year, &caps["month"], &caps["day"]),
                ymd(&caps["year_end"], &caps["month_end"], &caps["day_end"]),
            ),
            PatternId::LooseYearMonth => DateSpan::single(ymd(year, &pad(&caps["month"]), d), fill),
            PatternId::YearRange | PatternId::BareYearRange => {
                DateSpan::new(ymd(year, m, d), ymd(&caps["year_end"], m, d))
            }
            PatternId::YearMonthRange => DateSpan::new(
                ymd(year, &caps["month"], d),
                ymd(year, &caps["month_end"], d),
            ),
            PatternId::RangedYearMonth => DateSpan::new(
                ymd(year, &caps["month"], d),
                ymd(&caps["year_end"], &caps["month_end"], d),
            ),
            PatternId::RangedYearMonthSharedDay => DateSpan::new(
                ymd(year, &caps["month"], &caps["day"]),
                ymd(&caps["year_end"], &caps["month_end"], &caps["day"]),
            ),
            PatternId::YearLooseMonthRange => DateSpan::new(
                ymd(year, &pad(&caps["month"]), d),
                ymd(year, &pad(&caps["month_end"]), d),
            ),
            PatternId::YearRangeSharedMonthDay => DateSpan::new(
                ymd(year, &caps["month"], &caps["day"]),
                ymd(&caps["year_end"], &caps["month"], &caps["day"]),
            ),
            PatternId::YearSeason => {
                let (first, last) = season_months(&caps["season"]);
                DateSpan::new(ymd(year, &first, d), ymd(year, &last, d))
            }
            PatternId::YearMonthNameRange => DateSpan::new(
                ymd(year, &named_month(&caps["month"]), d),
                ymd(year, &named_month(&caps["month_end"]), d),
            ),
            PatternId::YearRangeSeason => {
                let (first, last) = season_months(&caps["season"]);
                DateSpan::new(ymd(year, &first, d), ymd(&caps["year_end"], &last, d))
            }
            PatternId::YearMonthDayRange => DateSpan::new(
                ymd(year, &caps["month"], &caps["day"]),
                ymd(year, &caps["month"], &caps["day_end"]),
            ),
        }
    }
}

impl std::fmt::Display for PatternId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn ymd(year: &str, month: &str, day: &str) -> String {
    format!("{year}-{month}-{day}")
}

/// Zero-fill a one- or two-digit capture to two characters.
fn pad(digits: &str) -> String {
    format!("{digits:0>2}")
}

/// A table entry paired with its compiled regex.
#[derive(Debug)]
pub struct PatternRule {
    id: PatternId,
    regex: Regex,
}

impl PatternRule {
    fn compile(id: PatternId) -> Self {
        let regex = Regex::new(id.source())
            .unwrap_or_else(|e| panic!("built-in pattern {id} must compile: {e}"));
        Self { id, regex }
    }

    pub fn id(&self) -> PatternId {
        self.id
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Captures for a whole-string match of `input`, if any.
    pub fn captures<'h>(&self, input: &'h str) -> Option<Captures<'h>> {
        self.regex.captures(input)
    }
}

static TABLE: LazyLock<Vec<PatternRule>> =
    LazyLock::new(|| PatternId::ALL.iter().copied().map(PatternRule::compile).collect());

/// The compiled table, in priority order.
pub fn patterns() -> &'static [PatternRule] {
    &TABLE
}
