//! Shared fixtures for the scenario tests.
#![allow(dead_code)]

use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use market_movements::{
    RegulatoryDataset, Session,
    data::{DatasetSource, FetchError, decode_dataset},
};

/// The single-category document used across the dashboard scenarios.
pub const IMMIGRATION_DOC: &str = r#"{
    "immigrationRestrictions": {
        "title": "Immigration Restrictions (2017)",
        "period": "2017",
        "impacts": [
            {
                "index": "S&P 500",
                "movement": { "min": 0.5, "max": 1.2 },
                "direction": "positive",
                "timing": "6-8 months",
                "volume": "1.5x average"
            }
        ],
        "cpiImpacts": {
            "primarySectors": [
                {
                    "name": "Agricultural Products",
                    "range": { "min": 0.4, "max": 0.8 },
                    "drivers": ["Labor cost increases"]
                }
            ],
            "netContribution": { "min": 0.2, "max": 0.3 },
            "duration": "6-8 months"
        }
    }
}"#;

/// Two categories, the second without CPI data and with a deflationary net.
pub const TWO_CATEGORY_DOC: &str = r#"{
    "tariffs": {
        "title": "Steel Tariffs (2018)",
        "impacts": [
            { "index": "Dow Jones", "movement": { "min": -2.1, "max": -0.8 }, "direction": "negative", "timing": "1-2 weeks", "volume": "2x average" },
            { "index": "XLI", "movement": { "min": -3.0, "max": -1.5 }, "direction": "negative", "timing": "2-4 weeks", "volume": "1.8x average" }
        ],
        "cpiImpacts": {
            "primarySectors": [
                { "name": "Durable Goods", "range": { "min": 0.1, "max": 0.4 }, "drivers": ["Input costs", "Supply chain"] },
                { "name": "Autos", "range": { "min": 0.2, "max": 0.5 }, "drivers": [] }
            ],
            "netContribution": { "min": -0.1, "max": 0.2 },
            "duration": "12 months"
        }
    },
    "deregulation": {
        "title": "Bank Deregulation (2018)",
        "impacts": [
            { "index": "KBE", "movement": { "min": 1.0, "max": 2.5 }, "direction": "positive", "timing": "3 months", "volume": "1.2x average" }
        ]
    }
}"#;

/// Serves a fixed document and counts how often it was asked.
pub struct StaticSource {
    body: &'static str,
    pub calls: AtomicUsize,
}

impl StaticSource {
    pub fn new(body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            body,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetSource for StaticSource {
    async fn fetch(&self) -> Result<RegulatoryDataset, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        decode_dataset(self.body)
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Always fails with the given error.
pub struct FailingSource(pub FetchError);

#[async_trait]
impl DatasetSource for FailingSource {
    async fn fetch(&self) -> Result<RegulatoryDataset, FetchError> {
        Err(self.0.clone())
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

/// Never resolves.
pub struct PendingSource;

#[async_trait]
impl DatasetSource for PendingSource {
    async fn fetch(&self) -> Result<RegulatoryDataset, FetchError> {
        futures::future::pending().await
    }

    fn describe(&self) -> String {
        "pending".to_string()
    }
}

/// Polls the session until the fetch outcome has been picked up.
pub fn settle(session: &mut Session) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !session.poll() {
        assert!(Instant::now() < deadline, "fetch never settled");
        thread::sleep(Duration::from_millis(5));
    }
}

pub fn loaded_session(body: &'static str) -> Session {
    let mut session = Session::mount(StaticSource::new(body));
    settle(&mut session);
    session
}
