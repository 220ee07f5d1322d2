//! # World Cup Finals Dataset
//!
//! The fixed table of World Cup finals (winner, runner-up, year) and the
//! code → display name table used to label them. [`Finals`] is built once at
//! startup and shared read-only afterwards.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// A single final as it appears in the raw table, keyed by ISO-3166 alpha-3 codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFinal {
    pub year: u16,
    pub winner: &'static str,
    pub runner_up: &'static str,
}

const fn fin(year: u16, winner: &'static str, runner_up: &'static str) -> RawFinal {
    RawFinal {
        year,
        winner,
        runner_up,
    }
}

const FINALS_DATA: &[RawFinal] = &[
    fin(1930, "URY", "ARG"),
    fin(1934, "ITA", "CZE"),
    fin(1938, "ITA", "HUN"),
    fin(1950, "URY", "BRA"),
    fin(1954, "DEU", "HUN"),
    fin(1958, "BRA", "SWE"),
    fin(1962, "BRA", "CZE"),
    fin(1966, "GBR", "DEU"),
    fin(1970, "BRA", "ITA"),
    fin(1974, "DEU", "NLD"),
    fin(1978, "ARG", "NLD"),
    fin(1982, "ITA", "DEU"),
    fin(1986, "ARG", "DEU"),
    fin(1990, "DEU", "ARG"),
    fin(1994, "BRA", "ITA"),
    fin(1998, "FRA", "BRA"),
    fin(2002, "BRA", "DEU"),
    fin(2006, "ITA", "FRA"),
    fin(2010, "ESP", "NLD"),
    fin(2014, "DEU", "ARG"),
    fin(2018, "FRA", "CRO"),
    fin(2022, "ARG", "FRA"),
];

const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("URY", "Uruguay"),
    ("ITA", "Italy"),
    ("DEU", "Germany"),
    ("BRA", "Brazil"),
    ("GBR", "England"),
    ("ARG", "Argentina"),
    ("CZE", "Czechoslovakia"),
    ("HUN", "Hungary"),
    ("SWE", "Sweden"),
    ("NLD", "Netherlands"),
    ("FRA", "France"),
    ("ESP", "Spain"),
    ("CRO", "Croatia"),
];

// Build a code -> name map once for O(1) lookup.
static COUNTRY_INDEX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| COUNTRY_NAMES.iter().copied().collect());

/// Returns the raw table of finals in chronological order.
pub fn raw_finals() -> &'static [RawFinal] {
    FINALS_DATA
}

/// Looks up the display name for a country code.
pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRY_INDEX.get(code).copied()
}

/// Errors raised while assembling a [`Finals`] table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("{year}: no country name for code {code:?}")]
    UnknownCountryCode { year: u16, code: String },
    #[error("year {0} appears more than once")]
    DuplicateYear(u16),
    #[error("the table has no finals")]
    Empty,
}

/// Errors from lookups against a [`Finals`] table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no World Cup final in {0}")]
    YearNotFound(u16),
}

/// One team in a final, carrying both its map key and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    pub code: String,
    pub name: String,
}

/// A final with the derived full-name columns resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalRecord {
    pub year: u16,
    pub winner: Country,
    pub runner_up: Country,
}

/// The immutable table of finals, sorted by year.
#[derive(Debug, Clone)]
pub struct Finals {
    records: Vec<FinalRecord>,
}

impl Finals {
    /// Builds a table from raw rows, resolving every code through `names`.
    ///
    /// Every code must have a name, every year must be unique and there must be
    /// at least one final; otherwise the table is rejected here rather than at
    /// lookup time.
    pub fn new<'a>(
        rows: &[RawFinal],
        names: impl Fn(&str) -> Option<&'a str>,
    ) -> Result<Self, DatasetError> {
        let resolve = |year: u16, code: &str| -> Result<Country, DatasetError> {
            let name = names(code).ok_or_else(|| DatasetError::UnknownCountryCode {
                year,
                code: code.to_string(),
            })?;
            Ok(Country {
                code: code.to_string(),
                name: name.to_string(),
            })
        };

        let mut records = Vec::with_capacity(rows.len());
        for row in rows {
            records.push(FinalRecord {
                year: row.year,
                winner: resolve(row.year, row.winner)?,
                runner_up: resolve(row.year, row.runner_up)?,
            });
        }
        records.sort_by_key(|r| r.year);
        if let Some(w) = records.windows(2).find(|w| w[0].year == w[1].year) {
            return Err(DatasetError::DuplicateYear(w[0].year));
        }
        let finals = Self { records };
        if finals.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(finals)
    }

    /// The built-in table of every final from 1930 to 2022.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::new(raw_finals(), country_name)
    }

    pub fn records(&self) -> &[FinalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, year: u16) -> Result<&FinalRecord, LookupError> {
        self.records
            .binary_search_by_key(&year, |r| r.year)
            .map(|i| &self.records[i])
            .map_err(|_| LookupError::YearNotFound(year))
    }

    /// Valid years in ascending order.
    pub fn years(&self) -> impl Iterator<Item = u16> + '_ {
        self.records.iter().map(|r| r.year)
    }

    pub fn earliest_year(&self) -> Option<u16> {
        self.records.first().map(|r| r.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_has_every_final() {
        let finals = Finals::builtin().unwrap();
        assert_eq!(finals.len(), 22);
        assert_eq!(finals.earliest_year(), Some(1930));
        assert_eq!(finals.years().last(), Some(2022));
        assert!(finals.years().collect::<Vec<_>>().is_sorted());
    }

    #[test]
    fn every_code_has_a_name() {
        for row in raw_finals() {
            assert!(country_name(row.winner).is_some(), "{}", row.winner);
            assert!(country_name(row.runner_up).is_some(), "{}", row.runner_up);
        }
    }

    #[test]
    fn derived_name_columns() {
        let finals = Finals::builtin().unwrap();
        let r = finals.get(1966).unwrap();
        assert_eq!(r.winner.code, "GBR");
        assert_eq!(r.winner.name, "England");
        assert_eq!(r.runner_up.name, "Germany");
    }

    #[test]
    fn missing_year_is_not_found() {
        let finals = Finals::builtin().unwrap();
        assert_eq!(finals.get(1999), Err(LookupError::YearNotFound(1999)));
        assert_eq!(finals.get(1942), Err(LookupError::YearNotFound(1942)));
    }

    #[test]
    fn unknown_code_is_rejected() {
        let rows = [fin(1930, "URY", "XXX")];
        let err = Finals::new(&rows, country_name).unwrap_err();
        assert_eq!(
            err,
            DatasetError::UnknownCountryCode {
                year: 1930,
                code: "XXX".to_string()
            }
        );
    }

    #[test]
    fn duplicate_year_is_rejected() {
        let rows = [fin(1930, "URY", "ARG"), fin(1930, "ITA", "ARG")];
        assert_eq!(
            Finals::new(&rows, country_name).unwrap_err(),
            DatasetError::DuplicateYear(1930)
        );
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(
            Finals::new(&[], country_name).unwrap_err(),
            DatasetError::Empty
        );
    }
}
