use crate::kernel::{Admission, Cpu, LongTermScheduler, ProcessTable};

/// Non-preemptive, in registration order. A process that cannot be admitted
/// is skipped; nothing is sorted by arrival.
pub(super) fn schedule(table: &mut ProcessTable, lts: &mut LongTermScheduler, cpu: &mut Cpu) {
    for idx in 0..table.len() {
        let pcb = table.get_mut(idx);

        if lts.try_admit(pcb) == Admission::Denied {
            cpu.record_skip(pcb);
            continue;
        }

        cpu.advance_to(pcb.get_arrival_time());
        cpu.execute_to_completion(pcb);
        lts.release(pcb);
    }
}
