//! Academic terms, registrar semester codes, and semester date windows.
//!
//! Registrar codes are six digits, `<academic year><term>`: the academic year
//! starts in the fall, so Fall 2024 is `202410` while Spring 2025 is `202420`
//! and Summer 2025 is `202430`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Spring,
    Summer,
    Fall,
}

impl Term {
    fn name(self) -> &'static str {
        match self {
            Term::Spring => "Spring",
            Term::Summer => "Summer",
            Term::Fall => "Fall",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Term::Fall => "10",
            Term::Spring => "20",
            Term::Summer => "30",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Term {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Spring" => Ok(Term::Spring),
            "Summer" => Ok(Term::Summer),
            "Fall" => Ok(Term::Fall),
            other => Err(ScheduleError::InvalidSemester(format!("unknown term '{}'", other))),
        }
    }
}

/// Display styles for [`Semester::format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SemesterFormat {
    /// `"Spring 2024"`
    #[default]
    Long,
    /// `"S24"`
    Short,
    /// `"Spr 2024"`, `"Sum 2024"`, `"Fall 2024"`
    Abbreviated,
}

/// A term in a calendar year. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Semester {
    pub year: i32,
    pub term: Term,
}

impl Semester {
    pub fn new(term: Term, year: i32) -> Self {
        Semester { year, term }
    }

    /// The semester a date falls in: January–May is Spring, June–July Summer,
    /// August–December Fall.
    pub fn containing(date: NaiveDate) -> Self {
        let term = match date.month() {
            1..=5 => Term::Spring,
            6 | 7 => Term::Summer,
            _ => Term::Fall,
        };
        Semester::new(term, date.year())
    }

    /// Registrar code, e.g. `"202410"` for Fall 2024 and `"202420"` for Spring 2025.
    pub fn to_code(&self) -> String {
        let academic_year = match self.term {
            Term::Fall => self.year,
            Term::Spring | Term::Summer => self.year - 1,
        };
        format!("{}{}", academic_year, self.term.code())
    }

    /// Inverse of [`Semester::to_code`].
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidSemester` unless `code` is six digits ending
    /// in `10`, `20` or `30`.
    pub fn from_code(code: &str) -> Result<Self> {
        if code.len() != 6 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ScheduleError::InvalidSemester(format!("bad semester code '{}'", code)));
        }
        let year: i32 = code[..4]
            .parse()
            .map_err(|_| ScheduleError::InvalidSemester(format!("bad semester code '{}'", code)))?;

        match &code[4..] {
            "10" => Ok(Semester::new(Term::Fall, year)),
            "20" => Ok(Semester::new(Term::Spring, year + 1)),
            "30" => Ok(Semester::new(Term::Summer, year + 1)),
            _ => Err(ScheduleError::InvalidSemester(format!("unknown term in code '{}'", code))),
        }
    }

    /// First and last day of classes.
    ///
    /// Spring runs Jan 15 – May 15, Summer Jun 1 – Jul 31, Fall Aug 15 – Dec 15.
    pub fn date_range(&self) -> Result<(NaiveDate, NaiveDate)> {
        let ((sm, sd), (em, ed)) = match self.term {
            Term::Spring => ((1, 15), (5, 15)),
            Term::Summer => ((6, 1), (7, 31)),
            Term::Fall => ((8, 15), (12, 15)),
        };
        let date = |m, d| {
            NaiveDate::from_ymd_opt(self.year, m, d)
                .ok_or_else(|| ScheduleError::InvalidSemester(format!("year {} out of range", self.year)))
        };
        Ok((date(sm, sd)?, date(em, ed)?))
    }

    pub fn format(&self, style: SemesterFormat) -> String {
        match style {
            SemesterFormat::Long => self.to_string(),
            SemesterFormat::Short => {
                let initial = &self.term.name()[..1];
                format!("{}{:02}", initial, self.year.rem_euclid(100))
            }
            SemesterFormat::Abbreviated => {
                let abbr = match self.term {
                    Term::Spring => "Spr",
                    Term::Summer => "Sum",
                    Term::Fall => "Fall",
                };
                format!("{} {}", abbr, self.year)
            }
        }
    }

    /// Position on a single timeline of terms, for counting.
    fn ordinal(&self, include_summer: bool) -> i64 {
        let year = i64::from(self.year);
        if include_summer {
            let slot = match self.term {
                Term::Spring => 0,
                Term::Summer => 1,
                Term::Fall => 2,
            };
            year * 3 + slot
        } else {
            let slot = match self.term {
                Term::Spring | Term::Summer => 0,
                Term::Fall => 1,
            };
            year * 2 + slot
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.term, self.year)
    }
}

impl FromStr for Semester {
    type Err = ScheduleError;

    /// Parses `"Fall 2024"`: a capitalised term, whitespace, four-digit year.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let (term, year) = match (parts.next(), parts.next(), parts.next()) {
            (Some(term), Some(year), None) => (term, year),
            _ => return Err(ScheduleError::InvalidSemester(s.to_string())),
        };
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ScheduleError::InvalidSemester(s.to_string()));
        }
        let year = year
            .parse()
            .map_err(|_| ScheduleError::InvalidSemester(s.to_string()))?;
        Ok(Semester::new(term.parse()?, year))
    }
}

/// Every semester from `start_year` through `end_year`, chronologically:
/// Spring, optionally Summer, then Fall of each year.
pub fn generate_semesters(start_year: i32, end_year: i32, include_summer: bool) -> Vec<Semester> {
    let mut semesters = Vec::new();
    for year in start_year..=end_year {
        semesters.push(Semester::new(Term::Spring, year));
        if include_summer {
            semesters.push(Semester::new(Term::Summer, year));
        }
        semesters.push(Semester::new(Term::Fall, year));
    }
    semesters
}

/// Semesters from `first` through `last`, both inclusive, in order. Summers are
/// listed only with `include_summer`; a Summer endpoint is still a valid bound.
pub fn semesters_between(first: Semester, last: Semester, include_summer: bool) -> Vec<Semester> {
    generate_semesters(first.year, last.year, include_summer)
        .into_iter()
        .filter(|s| *s >= first && *s <= last)
        .collect()
}

/// Number of semesters from enrollment through graduation, both inclusive.
///
/// Without summers, a Summer endpoint counts with the preceding Spring. Never
/// less than 1.
pub fn semester_count(enrollment: Semester, graduation: Semester, include_summer: bool) -> u32 {
    let span = graduation.ordinal(include_summer) - enrollment.ordinal(include_summer) + 1;
    u32::try_from(span.max(1)).unwrap_or(1)
}
