//! Filtering and pagination over a snapshot.
//!
//! A [`TrademarkFilter`] holds the optional search criteria. It expands into an
//! ordered list of [`Predicate`]s that are AND-ed together; a record lacking
//! the field a predicate tests never matches it.

use crate::domain::model::TrademarkRecord;
use chrono::NaiveDate;

pub const DEFAULT_SKIP: usize = 0;
pub const DEFAULT_LIMIT: usize = 10;

/// Optional search criteria. Empty strings count as "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrademarkFilter {
    pub status: Option<String>,
    pub product_name: Option<String>,
    pub application_number: Option<String>,
    pub application_date_from: Option<NaiveDate>,
    pub application_date_to: Option<NaiveDate>,
}

/// A single test applied to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Case-insensitive equality on `registerStatus`. Holds the lowercased needle.
    StatusEquals(String),
    /// Case-insensitive substring match on `productName`. Holds the lowercased needle.
    ProductNameContains(String),
    /// Exact, case-sensitive match on `applicationNumber`.
    ApplicationNumberEquals(String),
    /// `applicationDate >= bound`.
    AppliedOnOrAfter(NaiveDate),
    /// `applicationDate <= bound`.
    AppliedOnOrBefore(NaiveDate),
}

impl Predicate {
    pub fn matches(&self, record: &TrademarkRecord) -> bool {
        match self {
            Self::StatusEquals(needle) => record
                .register_status
                .as_deref()
                .is_some_and(|status| status.to_lowercase() == *needle),
            Self::ProductNameContains(needle) => record
                .product_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(needle.as_str())),
            Self::ApplicationNumberEquals(number) => record.application_number == *number,
            Self::AppliedOnOrAfter(bound) => record.application_date.is_some_and(|d| d >= *bound),
            Self::AppliedOnOrBefore(bound) => record.application_date.is_some_and(|d| d <= *bound),
        }
    }
}

fn supplied(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|s| !s.is_empty())
}

impl TrademarkFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_product_name(mut self, product_name: impl Into<String>) -> Self {
        self.product_name = Some(product_name.into());
        self
    }

    pub fn with_application_number(mut self, application_number: impl Into<String>) -> Self {
        self.application_number = Some(application_number.into());
        self
    }

    pub fn with_date_from(mut self, from: NaiveDate) -> Self {
        self.application_date_from = Some(from);
        self
    }

    pub fn with_date_to(mut self, to: NaiveDate) -> Self {
        self.application_date_to = Some(to);
        self
    }

    /// Expand the supplied criteria into predicates, in evaluation order.
    pub fn predicates(&self) -> Vec<Predicate> {
        let mut predicates = Vec::new();

        if let Some(status) = supplied(&self.status) {
            predicates.push(Predicate::StatusEquals(status.to_lowercase()));
        }
        if let Some(name) = supplied(&self.product_name) {
            predicates.push(Predicate::ProductNameContains(name.to_lowercase()));
        }
        if let Some(number) = supplied(&self.application_number) {
            predicates.push(Predicate::ApplicationNumberEquals(number.to_string()));
        }
        if let Some(from) = self.application_date_from {
            predicates.push(Predicate::AppliedOnOrAfter(from));
        }
        if let Some(to) = self.application_date_to {
            predicates.push(Predicate::AppliedOnOrBefore(to));
        }

        predicates
    }

}

/// A `skip`/`limit` window over the filtered results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub skip: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub filter: TrademarkFilter,
    pub pagination: Pagination,
}

impl SearchQuery {
    pub fn new(filter: TrademarkFilter, pagination: Pagination) -> Self {
        Self { filter, pagination }
    }
}

/// Records matching every supplied criterion, in snapshot order.
pub fn filter_records<'a>(
    records: &'a [TrademarkRecord],
    filter: &TrademarkFilter,
) -> impl Iterator<Item = &'a TrademarkRecord> + 'a {
    let predicates = filter.predicates();
    records
        .iter()
        .filter(move |record| predicates.iter().all(|p| p.matches(record)))
}

pub fn count_matches(records: &[TrademarkRecord], filter: &TrademarkFilter) -> usize {
    filter_records(records, filter).count()
}

/// Filter, then cut the `[skip, skip + limit)` window. Out-of-range `skip` gives an empty page.
pub fn query(
    records: &[TrademarkRecord],
    filter: &TrademarkFilter,
    pagination: Pagination,
) -> Vec<TrademarkRecord> {
    filter_records(records, filter)
        .skip(pagination.skip)
        .take(pagination.limit)
        .cloned()
        .collect()
}
