//! Exhaustive depth-first search over day-to-facility assignments.
//!
//! Brute-force complete enumeration: every facility is a candidate on
//! every day it has a recorded value, so the search visits up to
//! `facilities^window_days` leaves. No bound-and-cut pruning is applied;
//! this is a correctness baseline, not a scalable algorithm.

use super::table::WeeklyTable;
use super::types::SearchParams;

/// Best complete assignment seen so far.
#[derive(Debug, Clone)]
struct Best {
    sequence: Vec<u32>,
    cost: f64,
}

/// Backtracking state owned by a single `run` call.
///
/// The partial buffer is mutated and restored around every recursive
/// branch; the best record is an explicit accumulator, never shared
/// outside the call.
#[derive(Debug)]
struct SearchState {
    partial: Vec<u32>,
    best: Option<Best>,
}

/// Cost of visiting `candidate` given the facility visited the day before.
pub(crate) fn day_cost(kwh: f64, previous: Option<u32>, candidate: u32, params: &SearchParams) -> f64 {
    if previous.is_some_and(|prev| prev != candidate) {
        kwh + params.switch_penalty
    } else {
        kwh
    }
}

/// Runs the search and returns the optimal facility-id sequence with its
/// total cost, or `None` when no complete assignment exists.
///
/// Candidates are enumerated in table entry order and the best is only
/// replaced on a strictly lower cost, so ties go to the first complete
/// assignment found and the result is deterministic for identical inputs.
pub(crate) fn run(table: &WeeklyTable, params: &SearchParams) -> Option<(Vec<u32>, f64)> {
    let mut state = SearchState {
        partial: Vec::with_capacity(params.window_days),
        best: None,
    };
    descend(table, params, 1, None, 0.0, &mut state);
    state.best.map(|b| (b.sequence, b.cost))
}

fn descend(
    table: &WeeklyTable,
    params: &SearchParams,
    day: usize,
    previous: Option<u32>,
    cost_so_far: f64,
    state: &mut SearchState,
) {
    if state.partial.len() == params.window_days {
        let improved = state.best.as_ref().is_none_or(|b| cost_so_far < b.cost);
        if improved {
            // Deep copy: the partial buffer keeps mutating after this point
            state.best = Some(Best {
                sequence: state.partial.clone(),
                cost: cost_so_far,
            });
        }
        return;
    }

    for entry in table.entries() {
        // A facility with no recorded value for this day drops out of the
        // day's candidate set (short-history policy).
        let Some(&kwh) = entry.kwh.get(day - 1) else {
            continue;
        };
        let cost = day_cost(kwh, previous, entry.facility_id, params);

        state.partial.push(entry.facility_id);
        descend(
            table,
            params,
            day + 1,
            Some(entry.facility_id),
            cost_so_far + cost,
            state,
        );
        state.partial.pop();
    }
}
