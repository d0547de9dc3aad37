//! Printing answers and the run summary

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.quiet) {
            (Ok(answer), true) => println!("{}", answer),
            (Err(e), true) => eprintln!("Error: {}", e),
            (Ok(_), false) => println!("{}", format_result(result)),
            (Err(_), false) => eprintln!("{}", format_result(result)),
        }
    }

    /// Solved/failed counts, total parse and solve time, and the speedup over wall clock
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results.iter().map(|r| r.solve_duration).sum();
        let elapsed = self.start_time.elapsed();

        println!();
        println!("--- Summary ---");
        println!("Solvers: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!("Elapsed wall-clock time: {}", format_std_duration(elapsed));
        if !elapsed.is_zero() {
            let compute = total_parse_time + total_solve_time;
            let compute_secs = compute.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            println!("Speedup factor: {:.2}x", compute_secs / elapsed.as_secs_f64());
        }
    }
}

/// `YYYY/DD Part P: answer (parse: …, solve: …)`
///
/// Multi-line answers (letters drawn on a grid) start on their own line.
fn format_result(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match &result.answer {
        Ok(answer) => {
            let parse = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            let solve = format_duration(result.solve_duration);
            let sep = if answer.contains('\n') { "\n" } else { " " };
            format!("{prefix}:{sep}{answer} ({parse}solve: {solve})")
        }
        Err(e) => format!("{prefix}: Error - {e}"),
    }
}

fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };
    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }
    format_micros(micros as u128)
}

fn format_std_duration(d: std::time::Duration) -> String {
    format_micros(d.as_micros())
}

fn format_micros(micros: u128) -> String {
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecutorError;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-40)), "-40µs");
    }

    #[test]
    fn test_format_result() {
        let mut result = SolverResult {
            year: 2021,
            day: 1,
            part: 2,
            answer: Ok("5".to_string()),
            parse_duration: Some(TimeDelta::microseconds(12)),
            solve_duration: TimeDelta::microseconds(3),
        };
        assert_eq!(format_result(&result), "2021/01 Part 2: 5 (parse: 12µs, solve: 3µs)");

        result.parse_duration = None;
        result.answer = Ok("#.\n.#".to_string());
        assert_eq!(format_result(&result), "2021/01 Part 2:\n#.\n.# (solve: 3µs)");

        result.answer = Err(ExecutorError::ChannelSend.into());
        assert_eq!(format_result(&result), "2021/01 Part 2: Error - Channel send error");
    }
}
