use crate::core::loader;
use crate::core::query::{self, SearchQuery, TrademarkFilter};
use crate::core::snapshot::SnapshotStore;
use crate::domain::model::{LoadSummary, RawRecord, Snapshot, TrademarkRecord};
use crate::domain::ports::RecordSource;

/// A page of results plus the size of the full filtered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub items: Vec<TrademarkRecord>,
    pub total: usize,
}

/// Owns the published snapshot and answers queries against it.
///
/// Shared behind an `Arc` by the HTTP layer; all methods take `&self`.
#[derive(Debug, Default)]
pub struct TrademarkService {
    snapshot: SnapshotStore,
}

impl TrademarkService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a service whose snapshot is already published.
    pub fn with_records(records: Vec<TrademarkRecord>) -> Self {
        let service = Self::new();
        service.snapshot.replace(records);
        service
    }

    /// Validate `raw_records` and publish them as the new snapshot.
    pub fn reload(&self, raw_records: &[RawRecord]) -> LoadSummary {
        let report = loader::load(raw_records);
        let summary = LoadSummary::from(&report);
        self.snapshot.replace(report.records);
        summary
    }

    /// Reload from a source. A source failure publishes an empty snapshot.
    pub async fn reload_from(&self, source: &dyn RecordSource) -> LoadSummary {
        match source.fetch().await {
            Ok(raw_records) => self.reload(&raw_records),
            Err(e) => {
                tracing::warn!(
                    "Trademark data from {} unavailable, serving an empty dataset: {}",
                    source.describe(),
                    e
                );
                self.reload(&[])
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.current()
    }

    pub fn len(&self) -> usize {
        self.snapshot.current().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<TrademarkRecord> {
        let snapshot = self.snapshot.current();
        query::query(&snapshot, &query.filter, query.pagination)
    }

    pub fn count(&self, filter: &TrademarkFilter) -> usize {
        let snapshot = self.snapshot.current();
        query::count_matches(&snapshot, filter)
    }

    /// Page and total computed against the same snapshot.
    pub fn search_page(&self, query: &SearchQuery) -> SearchPage {
        let snapshot = self.snapshot.current();
        SearchPage {
            items: query::query(&snapshot, &query.filter, query.pagination),
            total: query::count_matches(&snapshot, &query.filter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::Pagination;
    use crate::utils::error::{Result, TrademarkError};
    use async_trait::async_trait;
    use serde_json::json;

    struct FailingSource;

    #[async_trait]
    impl RecordSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<RawRecord>> {
            Err(TrademarkError::source_unavailable("boom"))
        }

        fn describe(&self) -> String {
            "failing source".to_string()
        }
    }

    struct StaticSource(Vec<RawRecord>);

    #[async_trait]
    impl RecordSource for StaticSource {
        async fn fetch(&self) -> Result<Vec<RawRecord>> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "static source".to_string()
        }
    }

    #[test]
    fn test_reload_replaces_snapshot() {
        let service = TrademarkService::new();
        assert!(service.is_empty());

        let summary = service.reload(&[
            json!({"applicationNumber": "A1"}),
            json!({"applicationNumber": null}),
        ]);
        assert_eq!(summary, LoadSummary { loaded: 1, skipped: 1 });
        assert_eq!(service.len(), 1);

        service.reload(&[json!({"applicationNumber": "B1"}), json!({"applicationNumber": "B2"})]);
        let numbers: Vec<String> = service
            .snapshot()
            .iter()
            .map(|r| r.application_number.clone())
            .collect();
        assert_eq!(numbers, vec!["B1", "B2"]);
    }

    #[test]
    fn test_reload_is_idempotent() {
        let raw = vec![
            json!({"applicationNumber": "A1", "applicationDate": "20200101"}),
            json!({"applicationNumber": "A2", "registerStatus": "출원"}),
        ];
        let service = TrademarkService::new();
        service.reload(&raw);
        let first = service.snapshot();
        service.reload(&raw);
        assert_eq!(*first, *service.snapshot());
    }

    #[tokio::test]
    async fn test_reload_from_failing_source_publishes_empty_snapshot() {
        let service = TrademarkService::with_records(vec![TrademarkRecord::new("OLD")]);

        let summary = service.reload_from(&FailingSource).await;

        assert_eq!(summary, LoadSummary::default());
        assert!(service.is_empty());
    }

    #[tokio::test]
    async fn test_reload_from_source() {
        let service = TrademarkService::new();
        let source = StaticSource(vec![json!({"applicationNumber": "A1"})]);

        let summary = service.reload_from(&source).await;

        assert_eq!(summary.loaded, 1);
        assert_eq!(service.snapshot()[0].application_number, "A1");
    }

    #[test]
    fn test_search_page_reports_total() {
        let records: Vec<TrademarkRecord> = (0..15)
            .map(|i| TrademarkRecord::new(format!("N{}", i)))
            .collect();
        let service = TrademarkService::with_records(records);

        let page = service.search_page(&SearchQuery::new(
            TrademarkFilter::new(),
            Pagination::new(10, 10),
        ));

        assert_eq!(page.items.len(), 5);
        assert_eq!(page.total, 15);
        assert_eq!(service.count(&TrademarkFilter::new().with_application_number("N3")), 1);
    }
}
