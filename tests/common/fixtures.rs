//! Static date-cell corpora used across harnesses.

/// Cells every entry of the table should recognise, with the expected
/// start/end under default fillers. Includes shapes beyond the documented
/// examples: boundary days, the 20xx century, and loose two-digit parts.
pub const CORPUS_RECOGNISED: &[(&str, &str, &str)] = &[
    ("2024", "2024-00-00", "NaN"),
    ("1999-12", "1999-12-00", "NaN"),
    ("2001-02-31", "2001-02-31", "NaN"),
    ("2010-Dec", "2010-12-00", "NaN"),
    ("1987-12-31", "1987-12-31", "NaN"),
    ("1987-9-30", "1987-09-30", "NaN"),
    ("(1998/2003)-(11/02)-(30/01)", "1998-11-30", "2003-02-01"),
    ("2005-12", "2005-12-00", "NaN"),
    ("2005-9", "2005-09-00", "NaN"),
    ("(2019/2020)", "2019-00-00", "2020-00-00"),
    ("2011-(03/10)", "2011-03-00", "2011-10-00"),
    ("(1970/1971)-(10/03)", "1970-10-00", "1971-03-00"),
    ("(1970/1971)-(10/03)-15", "1970-10-15", "1971-03-15"),
    ("1983-10/12", "1983-10-00", "1983-12-00"),
    ("(1983/1984)-07-21", "1983-07-21", "1984-07-21"),
    ("1850-Automn", "1850-10-00", "1850-12-00"),
    ("2002-Winter", "2002-01-00", "2002-03-00"),
    ("1993-March-May", "1993-03-00", "1993-05-00"),
    ("1993-December-January", "1993-12-00", "1993-01-00"),
    ("(1895/1896)-Spring", "1895-04-00", "1896-06-00"),
    ("2015-06-(01/30)", "2015-06-01", "2015-06-30"),
    ("1751/1752", "1751-00-00", "1752-00-00"),
];

/// Cells no entry should recognise.
pub const CORPUS_UNRECOGNISED: &[&str] = &[
    "",
    "growing season",
    "not a date",
    "1990/1991-growing season",
    "1890",
    "(1890/1891)",
    "19900",
    "1990-13",
    "1990-00",
    "1990-05-32",
    "1990-10-",
    "1990-feb",
    "1990-FEB",
    "1990-Sept",
    "1990-Autumn",
    "1990-summer",
    "1990-june-july",
    "1990-June",
    "1990/05/05",
    "05/05/1990",
    "1990-05-05T10:00:00",
    " 1990",
    "1990 ",
    "1990\n",
    "(1990/1991",
    "1990-(5/6)",
    "1990-05-(5/6)",
];
