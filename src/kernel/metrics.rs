use average::{Estimate, Mean};

use super::ProcessTable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub completed: usize,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
}

impl Metrics {
    /// Averages over processes with a recorded completion. Returns `None`
    /// when nothing completed.
    pub fn calculate(table: &ProcessTable) -> Option<Metrics> {
        let completed: Vec<_> = table.iter().filter(|pcb| pcb.is_completed()).collect();
        if completed.is_empty() {
            return None;
        }

        let waiting: Mean = completed
            .iter()
            .filter_map(|pcb| pcb.waiting_time)
            .map(|ticks| ticks as f64)
            .collect();
        let turnaround: Mean = completed
            .iter()
            .filter_map(|pcb| pcb.turnaround_time)
            .map(|ticks| ticks as f64)
            .collect();

        Some(Metrics {
            completed: completed.len(),
            average_waiting_time: waiting.estimate(),
            average_turnaround_time: turnaround.estimate(),
        })
    }
}
