use std::io::{self, Write};

use crate::kernel::{MemoryStatus, ProcessTable, RunReport, Ticks};

pub fn write_processes<W: Write>(out: &mut W, processes: &ProcessTable) -> io::Result<()> {
    writeln!(out, "PID\tName\t\tBurst\tArrival\tPriority\tMemory")?;
    for pcb in processes.iter() {
        let info = pcb.info();
        writeln!(
            out,
            "{}\t{:<15}{}\t{}\t{}\t\t{}MB",
            info.id, info.name, info.burst_time, info.arrival_time, info.priority, info.memory_requirement
        )?;
    }

    Ok(())
}

pub fn write_memory_status<W: Write>(out: &mut W, status: &MemoryStatus) -> io::Result<()> {
    writeln!(
        out,
        "Total Memory: {} MB, Used: {} MB, Available: {} MB",
        status.capacity, status.used, status.available
    )
}

pub fn write_run_report<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {} ---", report.algorithm)?;

    write_trace(out, report)?;

    writeln!(out, "... ID | Name            | Start | Completion | Waiting | Turnaround")?;
    writeln!(out, "...----|-----------------|-------|------------|---------|-----------")?;
    for outcome in &report.outcomes {
        if outcome.skipped {
            writeln!(out, "... {:02} | {:<15} | skipped (insufficient memory)", outcome.pid, outcome.name)?;
            continue;
        }

        writeln!(
            out,
            "... {:02} | {:<15} | {:>5} | {:>10} | {:>7} | {:>10}",
            outcome.pid,
            outcome.name,
            ticks(outcome.start_time),
            ticks(outcome.completion_time),
            ticks(outcome.waiting_time),
            ticks(outcome.turnaround_time)
        )?;
    }

    match &report.metrics {
        Some(metrics) => {
            writeln!(out, "Average Waiting Time: {:.2}", metrics.average_waiting_time)?;
            writeln!(out, "Average Turnaround Time: {:.2}", metrics.average_turnaround_time)?;
        }
        None => writeln!(out, "No processes completed.")?,
    }

    Ok(())
}

/// Gantt-style trace with skip notices placed at the tick they happened.
/// A notice at the same tick a slice starts is printed before that slice.
fn write_trace<W: Write>(out: &mut W, report: &RunReport) -> io::Result<()> {
    let mut slices = report.slices.iter().peekable();
    let mut skipped = report.skipped.iter().peekable();
    let mut line_open = false;

    loop {
        let skip_next = match (slices.peek(), skipped.peek()) {
            (Some(slice), Some(notice)) => notice.at <= slice.start,
            (None, Some(_)) => true,
            (Some(_), None) => false,
            (None, None) => break,
        };

        if skip_next {
            if let Some(notice) = skipped.next() {
                if line_open {
                    writeln!(out, "|")?;
                    line_open = false;
                }
                writeln!(out, "Process {} skipped (Insufficient memory)", notice.pid)?;
            }
        } else if let Some(slice) = slices.next() {
            write!(out, "| {} [{} - {}] ", slice.name, slice.start, slice.end)?;
            line_open = true;
        }
    }

    if line_open || report.slices.is_empty() {
        writeln!(out, "|")?;
    }

    Ok(())
}

fn ticks(value: Option<Ticks>) -> String {
    value.map_or_else(|| "-".to_string(), |ticks| ticks.to_string())
}
