//! Presentation layer state
//!
//! [`Dashboard`] holds the last fetched analysis and the active type filter.
//! Filtering works on the held list and never triggers a new fetch; the
//! view is a pure projection of the current state.

pub mod filter;
pub mod view;

pub use filter::{filter_reports, TypeFilter, ALL_TYPES};
pub use view::{AccuracyMeter, AlertCard, BoardView};

use crate::client::AnalysisClient;
use crate::error::Result;
use scamguard_core::AnalyzedReport;
use tracing::{error, info};

/// Outcome of the most recent analysis request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    /// Request in flight (or not issued yet)
    #[default]
    Loading,
    /// Full analysis received
    Loaded(Vec<AnalyzedReport>),
    /// Request failed; holds the error description
    Failed(String),
}

/// Application state of the report dashboard
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    state: LoadState,
    filter: TypeFilter,
}

impl Dashboard {
    /// Create a dashboard in the loading state with no filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Current load state
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Active type filter
    pub fn filter(&self) -> &TypeFilter {
        &self.filter
    }

    /// Fetch a fresh analysis and replace the held list.
    ///
    /// A failure replaces the whole list; partial results are never kept.
    pub async fn refresh(&mut self, client: &dyn AnalysisClient) {
        self.state = LoadState::Loading;
        let result = client.fetch_analysis().await;
        self.apply(result);
    }

    /// Store the outcome of an analysis request
    pub fn apply(&mut self, result: Result<Vec<AnalyzedReport>>) {
        self.state = match result {
            Ok(reports) => {
                info!("Dashboard loaded {} analyzed reports", reports.len());
                LoadState::Loaded(reports)
            }
            Err(e) => {
                error!("Error fetching/analyzing alerts: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
    }

    /// Change the active filter; the held list is kept as is
    pub fn set_filter(&mut self, filter: TypeFilter) {
        self.filter = filter;
    }

    /// Held reports passing the active filter
    pub fn visible_reports(&self) -> Vec<&AnalyzedReport> {
        match &self.state {
            LoadState::Loaded(reports) => filter_reports(reports, &self.filter),
            _ => Vec::new(),
        }
    }

    /// Distinct report types of the held list, in first-seen order
    pub fn report_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        if let LoadState::Loaded(reports) = &self.state {
            for report in reports {
                if !types.contains(&report.report_type()) {
                    types.push(report.report_type());
                }
            }
        }
        types
    }

    /// Accuracy figure of the first held report, if any
    pub fn accuracy(&self) -> Option<AccuracyMeter> {
        match &self.state {
            LoadState::Loaded(reports) => reports.first().map(|first| AccuracyMeter {
                accuracy: first.system_accuracy,
            }),
            _ => None,
        }
    }

    /// Project the current state into what the report list shows
    pub fn view(&self) -> BoardView {
        match &self.state {
            LoadState::Loading => BoardView::Loading,
            LoadState::Failed(_) => BoardView::Error,
            LoadState::Loaded(_) => {
                let cards: Vec<AlertCard> = self
                    .visible_reports()
                    .into_iter()
                    .map(AlertCard::from)
                    .collect();
                if cards.is_empty() {
                    BoardView::Empty
                } else {
                    BoardView::Cards(cards)
                }
            }
        }
    }
}
