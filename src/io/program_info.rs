use crate::kernel::{SimError, Ticks};

/// Largest accepted burst or arrival time. With at most `MAX_PROCESSES`
/// processes the simulated clock stays far below `Ticks::MAX`.
pub const MAX_TICKS: Ticks = u32::MAX as Ticks;

/// Static demand of a process, as supplied by a loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramInfo {
    pub id: u32,
    pub name: String,
    pub burst_time: Ticks,
    pub arrival_time: Ticks,
    /// Lower value = higher priority.
    pub priority: u32,
    pub memory_requirement: u64,
}

impl ProgramInfo {
    pub fn new(
        id: u32,
        name: &str,
        burst_time: Ticks,
        arrival_time: Ticks,
        priority: u32,
        memory_requirement: u64,
    ) -> ProgramInfo {
        ProgramInfo {
            id,
            name: name.to_string(),
            burst_time,
            arrival_time,
            priority,
            memory_requirement,
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.burst_time == 0 {
            return Err(SimError::InvalidProcess {
                id: self.id,
                reason: "burst time must be positive",
            });
        }

        if self.burst_time > MAX_TICKS {
            return Err(SimError::InvalidProcess {
                id: self.id,
                reason: "burst time is too large",
            });
        }

        if self.arrival_time > MAX_TICKS {
            return Err(SimError::InvalidProcess {
                id: self.id,
                reason: "arrival time is too large",
            });
        }

        if self.memory_requirement == 0 {
            return Err(SimError::InvalidProcess {
                id: self.id,
                reason: "memory requirement must be positive",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_info_validate_ok() {
        let info = ProgramInfo::new(1, "Shell", 3, 0, 1, 10);
        assert!(info.validate().is_ok());
    }

    #[test]
    fn test_program_info_validate_zero_burst() {
        let info = ProgramInfo::new(7, "Idle", 0, 0, 1, 10);
        assert!(matches!(
            info.validate(),
            Err(SimError::InvalidProcess { id: 7, reason: "burst time must be positive" })
        ));
    }

    #[test]
    fn test_program_info_validate_tick_limits() {
        let info = ProgramInfo::new(2, "Late", 2, u64::MAX, 1, 1);
        assert!(matches!(
            info.validate(),
            Err(SimError::InvalidProcess { id: 2, reason: "arrival time is too large" })
        ));

        let info = ProgramInfo::new(3, "Endless", MAX_TICKS + 1, 0, 1, 1);
        assert!(matches!(
            info.validate(),
            Err(SimError::InvalidProcess { id: 3, reason: "burst time is too large" })
        ));

        assert!(ProgramInfo::new(4, "Edge", MAX_TICKS, MAX_TICKS, 1, 1).validate().is_ok());
    }

    #[test]
    fn test_program_info_validate_zero_memory() {
        let info = ProgramInfo::new(8, "Ghost", 4, 0, 1, 0);
        assert!(matches!(info.validate(), Err(SimError::InvalidProcess { id: 8, .. })));
    }
}
