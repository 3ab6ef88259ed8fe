use std::io::{BufRead, Write};

use super::report;

use crate::kernel::{Driver, SchedulingAlgorithm};

/// Interactive front end over a `Driver`. Reads choices line by line from
/// `input` and writes everything to `output`.
pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Menu<R, W> {
        Menu { input, output }
    }

    /// Loops until the user exits or input runs out.
    pub fn run(&mut self, driver: &mut Driver) -> anyhow::Result<()> {
        loop {
            self.print_options()?;

            let Some(choice) = self.prompt("Choice: ")? else {
                return Ok(());
            };

            match choice.parse::<u32>() {
                Ok(1) => report::write_processes(&mut self.output, driver.processes())?,
                Ok(2) => self.run_algorithm(driver, SchedulingAlgorithm::Fcfs)?,
                Ok(3) => self.run_algorithm(driver, SchedulingAlgorithm::Sjf)?,
                Ok(4) => {
                    let Some(quantum) = self.prompt("Enter quantum: ")? else {
                        return Ok(());
                    };

                    let algorithm = quantum
                        .parse::<i64>()
                        .map_err(|_| anyhow::anyhow!("quantum must be an integer, got {:?}", quantum))
                        .and_then(|quantum| SchedulingAlgorithm::round_robin(quantum).map_err(anyhow::Error::from));

                    match algorithm {
                        Ok(algorithm) => self.run_algorithm(driver, algorithm)?,
                        Err(err) => writeln!(self.output, "Error: {}", err)?,
                    }
                }
                Ok(5) => self.run_algorithm(driver, SchedulingAlgorithm::Priority)?,
                Ok(6) => report::write_memory_status(&mut self.output, &driver.memory_status())?,
                Ok(7) => return Ok(()),
                _ => writeln!(self.output, "Invalid option!")?,
            }
        }
    }

    fn run_algorithm(&mut self, driver: &mut Driver, algorithm: SchedulingAlgorithm) -> anyhow::Result<()> {
        match driver.run(algorithm) {
            Ok(run_report) => report::write_run_report(&mut self.output, &run_report)?,
            Err(err) => {
                log::error!("{} failed: {}", algorithm, err);
                writeln!(self.output, "Error: {}", err)?;
            }
        }

        Ok(())
    }

    fn print_options(&mut self) -> std::io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Process Scheduler ---")?;
        writeln!(self.output, "1. View Processes")?;
        writeln!(self.output, "2. First Come First Serve(FCFS)")?;
        writeln!(self.output, "3. Shortest Job First(SJF)")?;
        writeln!(self.output, "4. Round Robin")?;
        writeln!(self.output, "5. Priority Scheduling")?;
        writeln!(self.output, "6. Memory Status")?;
        writeln!(self.output, "7. Exit")
    }

    /// Returns the trimmed next line, or `None` at end of input.
    fn prompt(&mut self, message: &str) -> std::io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::io::sample_programs;
    use crate::kernel::Memory;

    fn session(input: &str) -> String {
        let mut driver = Driver::new(sample_programs(), Memory::new()).unwrap();
        let mut output = Vec::new();
        Menu::new(input.as_bytes(), &mut output).run(&mut driver).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_exit() {
        let text = session("7\n");
        assert!(text.contains("--- Process Scheduler ---"));
        assert_eq!(text.matches("Choice: ").count(), 1);
    }

    #[test]
    fn test_menu_end_of_input() {
        let text = session("");
        assert!(text.ends_with("Choice: "));
    }

    #[test]
    fn test_menu_invalid_option() {
        let text = session("9\nabc\n7\n");
        assert_eq!(text.matches("Invalid option!").count(), 2);
    }

    #[test]
    fn test_menu_round_robin() {
        let text = session("4\n4\n7\n");
        assert!(text.contains("--- Round Robin Scheduling (Q = 4) ---"));
        assert!(text.contains("| Word Processor [0 - 4] "));
    }

    #[test]
    fn test_menu_round_robin_invalid_quantum() {
        let text = session("4\n0\n4\n-2\n4\nx\n7\n");
        assert!(text.contains("Error: invalid quantum 0"));
        assert!(text.contains("Error: invalid quantum -2"));
        assert!(text.contains("Error: quantum must be an integer"));
        assert!(!text.contains("Round Robin Scheduling"));
    }

    #[test]
    fn test_menu_priority_not_implemented() {
        let text = session("5\n7\n");
        assert!(text.contains("Error: priority scheduling is not implemented"));
    }

    #[test]
    fn test_menu_view_and_memory_status() {
        let text = session("1\n2\n6\n7\n");
        assert!(text.contains("Web Browser"));
        assert!(text.contains("--- FCFS Scheduling ---"));
        assert!(text.contains("Total Memory: 100 MB, Used: 0 MB, Available: 100 MB"));
    }
}
