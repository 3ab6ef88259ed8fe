//! Command-line configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::kernel::{SchedulingAlgorithm, SimError, MEMORY_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Fcfs,
    Sjf,
    #[value(name = "rr")]
    RoundRobin,
    Priority,
}

/// CPU scheduling and memory admission simulator
#[derive(Parser, Debug)]
#[command(name = "process-scheduling-simulator")]
#[command(about = "Simulates FCFS, SJF and Round Robin scheduling with memory admission")]
pub struct SimulatorArgs {
    /// Total memory available to processes (in MB)
    #[arg(long, default_value_t = MEMORY_SIZE)]
    pub memory: u64,

    /// Load processes from a process file instead of the sample set
    #[arg(long, conflicts_with = "random")]
    pub program_file: Option<PathBuf>,

    /// Generate this many random processes instead of the sample set
    #[arg(long)]
    pub random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Run one algorithm and exit instead of starting the menu
    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,

    /// Round Robin quantum in ticks
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    pub quantum: i64,

    /// Log scheduling decisions
    #[arg(short, long)]
    pub verbose: bool,
}

impl SimulatorArgs {
    pub fn scheduling_algorithm(&self) -> Result<Option<SchedulingAlgorithm>, SimError> {
        let algorithm = match self.algorithm {
            None => return Ok(None),
            Some(AlgorithmArg::Fcfs) => SchedulingAlgorithm::Fcfs,
            Some(AlgorithmArg::Sjf) => SchedulingAlgorithm::Sjf,
            Some(AlgorithmArg::RoundRobin) => SchedulingAlgorithm::round_robin(self.quantum)?,
            Some(AlgorithmArg::Priority) => SchedulingAlgorithm::Priority,
        };

        Ok(Some(algorithm))
    }
}
