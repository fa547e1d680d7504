//! Calendar date keys
//!
//! A date key names one day's puzzle, formatted `YYYY-MM-DD`.

use chrono::{Local, NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Time zone used to decide which calendar day it is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TimeZoneChoice {
    /// Same day for every player worldwide
    #[default]
    Utc,
    /// The machine's local calendar day
    Local,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(NaiveDate);

impl DateKey {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's key in the given zone
    #[must_use]
    pub fn today(zone: TimeZoneChoice) -> Self {
        match zone {
            TimeZoneChoice::Utc => Self(Utc::now().date_naive()),
            TimeZoneChoice::Local => Self(Local::now().date_naive()),
        }
    }

    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DateKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self)
    }
}
