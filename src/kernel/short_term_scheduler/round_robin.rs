use std::collections::VecDeque;

use crate::kernel::{Admission, Cpu, LongTermScheduler, ProcessTable, Ticks};

/// Preemptive Round Robin with a fixed quantum.
///
/// A process is considered for admission once, at or after its arrival.
/// Admitted processes keep their memory from admission until their last
/// slice completes, even while waiting in the ready queue. Arrivals that
/// land during a slice are queued ahead of the preempted process.
pub(super) fn schedule(
    table: &mut ProcessTable,
    lts: &mut LongTermScheduler,
    cpu: &mut Cpu,
    quantum: Ticks,
) {
    let total = table.len();
    let mut ready_queue: VecDeque<usize> = VecDeque::with_capacity(total);
    let mut added = vec![false; total];
    let mut settled = 0;

    while settled < total {
        settled += admit_arrivals(table, lts, cpu, &mut added, &mut ready_queue);
        if settled == total {
            break;
        }

        let Some(idx) = ready_queue.pop_front() else {
            // Every added process is queued or settled, so an empty queue
            // with work left means someone has yet to arrive.
            match table.next_arrival_after(cpu.now(), |idx, _| !added[idx]) {
                Some(arrival) => cpu.advance_to(arrival),
                None => {
                    debug_assert!(false, "unsettled processes but none pending arrival");
                    break;
                }
            }
            continue;
        };

        cpu.execute(table.get_mut(idx), quantum);

        settled += admit_arrivals(table, lts, cpu, &mut added, &mut ready_queue);

        let pcb = table.get_mut(idx);
        if pcb.is_completed() {
            lts.release(pcb);
            settled += 1;
        } else {
            ready_queue.push_back(idx);
        }
    }

    debug_assert_eq!(table.count_settled(), total);
}

/// Offers admission to every process that has arrived and not yet been
/// considered. Returns how many were skipped.
fn admit_arrivals(
    table: &mut ProcessTable,
    lts: &mut LongTermScheduler,
    cpu: &mut Cpu,
    added: &mut [bool],
    ready_queue: &mut VecDeque<usize>,
) -> usize {
    let mut skipped = 0;

    for idx in 0..table.len() {
        let pcb = table.get_mut(idx);
        if added[idx] || pcb.get_arrival_time() > cpu.now() {
            continue;
        }

        added[idx] = true;
        match lts.try_admit(pcb) {
            Admission::Admitted => ready_queue.push_back(idx),
            Admission::Denied => {
                cpu.record_skip(pcb);
                skipped += 1;
            }
        }
    }

    skipped
}
