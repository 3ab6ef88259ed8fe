use crate::kernel::{Admission, Cpu, LongTermScheduler, ProcessTable, Ticks};

/// Non-preemptive shortest job first.
///
/// Each pass picks, among unsettled processes that have arrived, the one
/// with the smallest burst time. Ties go to the lowest table index. A
/// process denied admission is settled as skipped without moving the clock.
///
/// Every iteration either settles a process or moves the clock forward to
/// a pending arrival, so the loop ends after at most `2 * n` iterations.
pub(super) fn schedule(table: &mut ProcessTable, lts: &mut LongTermScheduler, cpu: &mut Cpu) {
    let total = table.len();
    let mut settled = 0;

    while settled < total {
        let Some(idx) = shortest_arrived(table, cpu.now()) else {
            match table.next_arrival_after(cpu.now(), |_, pcb| !pcb.is_settled()) {
                Some(arrival) => cpu.advance_to(arrival),
                None => {
                    debug_assert!(false, "unsettled processes but none pending arrival");
                    break;
                }
            }
            continue;
        };

        let pcb = table.get_mut(idx);
        settled += 1;

        if lts.try_admit(pcb) == Admission::Denied {
            cpu.record_skip(pcb);
            continue;
        }

        cpu.execute_to_completion(pcb);
        lts.release(pcb);
    }

    debug_assert_eq!(table.count_settled(), total);
}

fn shortest_arrived(table: &ProcessTable, now: Ticks) -> Option<usize> {
    let mut shortest: Option<(usize, Ticks)> = None;

    for (idx, pcb) in table.iter().enumerate() {
        if pcb.is_settled() || pcb.get_arrival_time() > now {
            continue;
        }

        if shortest.map_or(true, |(_, burst)| pcb.get_burst_time() < burst) {
            shortest = Some((idx, pcb.get_burst_time()));
        }
    }

    shortest.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::io::ProgramInfo;
    use crate::kernel::Memory;

    fn run(programs: Vec<ProgramInfo>, capacity: u64) -> (ProcessTable, LongTermScheduler, Cpu) {
        let mut table = ProcessTable::from_programs(programs).unwrap();
        let mut lts = LongTermScheduler::new(Memory::with_capacity(capacity));
        let mut cpu = Cpu::new();
        schedule(&mut table, &mut lts, &mut cpu);
        (table, lts, cpu)
    }

    fn order(cpu: Cpu) -> Vec<(u32, u64, u64)> {
        let (slices, _) = cpu.into_trace();
        slices.iter().map(|s| (s.pid, s.start, s.end)).collect()
    }

    #[test]
    fn test_sjf_tie_break_lowest_index() {
        let (_, _, cpu) = run(
            vec![
                ProgramInfo::new(7, "First", 4, 0, 1, 10),
                ProgramInfo::new(3, "Second", 4, 0, 1, 10),
            ],
            100,
        );

        assert_eq!(order(cpu), vec![(7, 0, 4), (3, 4, 8)]);
    }

    #[test]
    fn test_sjf_picks_shortest_arrived() {
        let (table, lts, cpu) = run(
            vec![
                ProgramInfo::new(1, "Word Processor", 10, 0, 3, 15),
                ProgramInfo::new(2, "Web Browser", 6, 3, 5, 30),
                ProgramInfo::new(3, "File Manager", 2, 5, 2, 5),
                ProgramInfo::new(4, "Compiler", 8, 6, 4, 20),
                ProgramInfo::new(5, "Media Player", 4, 10, 1, 25),
            ],
            100,
        );

        assert_eq!(
            order(cpu),
            vec![(1, 0, 10), (3, 10, 12), (5, 12, 16), (2, 16, 22), (4, 22, 30)]
        );
        assert_eq!(table.get(1).waiting_time, Some(13));
        assert_eq!(table.get(3).turnaround_time, Some(24));
        assert_eq!(lts.status().used, 0);
    }

    #[test]
    fn test_sjf_idles_until_first_arrival() {
        let (table, _, cpu) = run(
            vec![
                ProgramInfo::new(1, "A", 3, 5, 1, 10),
                ProgramInfo::new(2, "B", 1, 12, 1, 10),
            ],
            100,
        );

        assert_eq!(table.get(0).start_time, Some(5));
        assert_eq!(table.get(1).start_time, Some(12));
        assert_eq!(order(cpu), vec![(1, 5, 8), (2, 12, 13)]);
    }

    #[test]
    fn test_sjf_skip_is_not_a_completion() {
        let (table, _, cpu) = run(
            vec![
                ProgramInfo::new(1, "Huge", 1, 0, 1, 500),
                ProgramInfo::new(2, "Small", 5, 0, 1, 10),
            ],
            100,
        );

        let huge = table.get(0);
        assert!(huge.is_skipped());
        assert_eq!(huge.completion_time, None);
        assert_eq!(huge.start_time, None);

        assert_eq!(table.get(1).start_time, Some(0));
        let (_, skipped) = cpu.into_trace();
        assert_eq!(skipped[0].pid, 1);
        assert_eq!(skipped[0].at, 0);
    }

    #[test]
    fn test_sjf_empty_table() {
        let (_, lts, cpu) = run(Vec::new(), 100);
        assert_eq!(cpu.now(), 0);
        assert_eq!(lts.status().used, 0);
    }
}
