use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::ProgramInfo;

use crate::kernel::SimError;

const PROC_CARD: &str = "// PROC";

/// Reads process cards from the file at `path`.
pub fn load_programs(path: &Path) -> Result<Vec<ProgramInfo>, SimError> {
    let file = File::open(path)?;
    parse_programs(BufReader::new(file))
}

/// Parses a process file. Each process is one control card:
///
/// ```text
/// // PROC <id> <burst> <arrival> <priority> <memory> <name...>
/// ```
///
/// Blank lines and any other `//` line are ignored.
pub fn parse_programs<R: BufRead>(reader: R) -> Result<Vec<ProgramInfo>, SimError> {
    let mut programs = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let line_num = idx + 1;

        if let Some(card) = line.strip_prefix(PROC_CARD) {
            programs.push(parse_proc_card(card, line_num)?);
        } else if !line.is_empty() && !line.starts_with("//") {
            return Err(SimError::Parse {
                line: line_num,
                reason: format!("unexpected content: {}", line),
            });
        }
    }

    Ok(programs)
}

fn parse_proc_card(card: &str, line: usize) -> Result<ProgramInfo, SimError> {
    let mut fields = card.split_whitespace();

    let mut next_number = |field: &str| -> Result<u64, SimError> {
        let value = fields.next().ok_or_else(|| SimError::Parse {
            line,
            reason: format!("PROC card is missing {}", field),
        })?;

        value.parse::<u64>().map_err(|err| SimError::Parse {
            line,
            reason: format!("PROC card {} is not a number ({}): {}", field, value, err),
        })
    };

    let id = next_number("id")?;
    let burst_time = next_number("burst time")?;
    let arrival_time = next_number("arrival time")?;
    let priority = next_number("priority")?;
    let memory_requirement = next_number("memory")?;

    let id = u32::try_from(id).map_err(|_| SimError::Parse {
        line,
        reason: format!("process id {} is out of range", id),
    })?;
    let priority = u32::try_from(priority).map_err(|_| SimError::Parse {
        line,
        reason: format!("priority {} is out of range", priority),
    })?;

    let name = fields.collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return Err(SimError::Parse {
            line,
            reason: "PROC card is missing name".to_string(),
        });
    }

    Ok(ProgramInfo::new(id, &name, burst_time, arrival_time, priority, memory_requirement))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::kernel::{Driver, Memory};

    #[test]
    fn test_parse_programs() {
        let input = "\
// Sample workload
// PROC 1 10 0 3 15 Word Processor

// PROC 2 6 3 5 30 Web Browser
";
        let programs = parse_programs(input.as_bytes()).unwrap();

        assert_eq!(
            programs,
            vec![
                ProgramInfo::new(1, "Word Processor", 10, 0, 3, 15),
                ProgramInfo::new(2, "Web Browser", 6, 3, 5, 30),
            ]
        );
    }

    #[test]
    fn test_parse_programs_missing_value() {
        let result = parse_programs("// PROC 4 13".as_bytes());
        assert!(matches!(
            result,
            Err(SimError::Parse { line: 1, ref reason }) if reason.contains("missing arrival time")
        ));
    }

    #[test]
    fn test_parse_programs_not_a_number() {
        let input = "// PROC 1 2 3 4 5 A\n// PROC 2 NOT 0 1 1 B";
        let result = parse_programs(input.as_bytes());
        assert!(matches!(
            result,
            Err(SimError::Parse { line: 2, ref reason }) if reason.contains("burst time is not a number")
        ));
    }

    #[test]
    fn test_parse_programs_missing_name() {
        let result = parse_programs("// PROC 1 2 3 4 5".as_bytes());
        assert!(matches!(result, Err(SimError::Parse { line: 1, .. })));
    }

    #[test]
    fn test_parse_programs_rejects_stray_lines() {
        let result = parse_programs("// PROC 1 2 3 4 5 A\ngarbage".as_bytes());
        assert!(matches!(result, Err(SimError::Parse { line: 2, .. })));
    }

    #[test]
    fn test_parse_bundled_process_file() {
        let programs = parse_programs(include_str!("../../data/processes.txt").as_bytes()).unwrap();
        assert_eq!(programs, crate::io::sample_programs());
    }

    #[test]
    fn test_parse_programs_huge_arrival_rejected_at_registration() {
        let programs = parse_programs("// PROC 1 2 18446744073709551615 1 1 Late".as_bytes()).unwrap();
        let result = Driver::new(programs, Memory::new());
        assert!(matches!(result, Err(SimError::InvalidProcess { id: 1, .. })));
    }

    #[test]
    fn test_load_programs_missing_file() {
        let result = load_programs(Path::new("does/not/exist.txt"));
        assert!(matches!(result, Err(SimError::Io(_))));
    }
}
