use super::ProgramInfo;

/// The built-in desktop workload.
pub fn sample_programs() -> Vec<ProgramInfo> {
    vec![
        ProgramInfo::new(1, "Word Processor", 10, 0, 3, 15),
        ProgramInfo::new(2, "Web Browser", 6, 3, 5, 30),
        ProgramInfo::new(3, "File Manager", 2, 5, 2, 5),
        ProgramInfo::new(4, "Compiler", 8, 6, 4, 20),
        ProgramInfo::new(5, "Media Player", 4, 10, 1, 25),
    ]
}
