//! Per-year holiday cache.
//!
//! Entries are inserted on first use and never removed. Two threads may
//! race to load the same year; both call the provider, the first insert
//! wins and every caller gets that same set back.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::Result;
use crate::holidays::{HolidayProvider, HolidaySet};

/// Memoized holiday lookup for a single country.
#[derive(Debug)]
pub struct HolidayCache<P> {
    provider: P,
    country: String,
    years: RwLock<HashMap<i32, Arc<HolidaySet>>>,
}

impl<P: HolidayProvider> HolidayCache<P> {
    pub fn new(provider: P, country: impl Into<String>) -> Self {
        Self {
            provider,
            country: country.into(),
            years: RwLock::new(HashMap::new()),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// Holiday set for `year`, loading it from the provider on first use.
    ///
    /// A provider failure is returned as is and nothing is cached, so a
    /// later call retries the lookup.
    pub fn holidays(&self, year: i32) -> Result<Arc<HolidaySet>> {
        if let Some(set) = self
            .years
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
        {
            return Ok(Arc::clone(set));
        }

        let loaded = self.provider.holidays_for(&self.country, year)?;
        debug!(country = %self.country, year, count = loaded.len(), "Loaded holiday set");

        let mut years = self.years.write().unwrap_or_else(PoisonError::into_inner);
        let set = years.entry(year).or_insert_with(|| Arc::new(loaded));
        Ok(Arc::clone(set))
    }

    /// Whether `date` is a holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.holidays(date.year())?.contains(&date))
    }

    /// Whether `year` has already been loaded.
    pub fn is_cached(&self, year: i32) -> bool {
        self.years
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&year)
    }

    /// Number of years currently cached.
    pub fn cached_years(&self) -> usize {
        self.years
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
