//! Latest-request report holder.
//!
//! A caller that re-requests reports as its inputs change (another chain,
//! another account) may see responses complete out of order. Each request
//! takes a ticket carrying a generation number and its parameters; a result
//! is applied only if its ticket is still the newest one issued.

use super::schema::Report;
use crate::utils::error::ReportError;
use log::{debug, warn};
use std::sync::{Arc, Mutex, MutexGuard};

/// Parameters a report was requested for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReportParams {
    pub chain_id: u64,
    /// Lower-cased account address
    pub account: String,
}

impl ReportParams {
    pub fn new(chain_id: u64, account: &str) -> Self {
        Self {
            chain_id,
            account: account.to_lowercase(),
        }
    }
}

/// Handle for one in-flight request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    params: ReportParams,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn params(&self) -> &ReportParams {
        &self.params
    }
}

/// Outcome of offering a finished request to the slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer request was issued; the result was dropped
    Stale,
    /// The request failed; the current report is left untouched
    Failed,
}

#[derive(Debug, Default)]
struct SlotState {
    generation: u64,
    params: Option<ReportParams>,
    report: Option<(ReportParams, Report)>,
}

/// Shared holder of the newest applied report
#[derive(Debug, Clone, Default)]
pub struct ReportSlot {
    state: Arc<Mutex<SlotState>>,
}

impl ReportSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request, superseding every earlier ticket
    pub fn begin(&self, params: ReportParams) -> RequestTicket {
        let mut state = self.lock();
        state.generation += 1;
        state.params = Some(params.clone());

        debug!(
            "Report request #{} for {} on chain {}",
            state.generation, params.account, params.chain_id
        );

        RequestTicket {
            generation: state.generation,
            params,
        }
    }

    /// Offer the result of a finished request
    ///
    /// Stale tickets are discarded whether they succeeded or failed. A failure
    /// for the current ticket never clears the report already held.
    pub fn complete(
        &self,
        ticket: RequestTicket,
        result: Result<Report, ReportError>,
    ) -> ApplyOutcome {
        let mut state = self.lock();

        let current = state.generation == ticket.generation
            && state.params.as_ref() == Some(&ticket.params);
        if !current {
            debug!(
                "Discarding stale report request #{} (latest #{})",
                ticket.generation, state.generation
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(report) => {
                state.report = Some((ticket.params, report));
                ApplyOutcome::Applied
            }
            Err(e) => {
                warn!("Report request #{} failed: {}", ticket.generation, e);
                ApplyOutcome::Failed
            }
        }
    }

    /// Newest applied report, if it matches the newest requested parameters
    pub fn current(&self) -> Option<Report> {
        let state = self.lock();
        match (&state.params, &state.report) {
            (Some(wanted), Some((params, report))) if wanted == params => Some(report.clone()),
            _ => None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        // State is only ever replaced wholesale, so a poisoned lock is still consistent
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
