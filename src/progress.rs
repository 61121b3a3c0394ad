//! Progress display module
//!
//! Styled console output, the per-line echo of generated words and the
//! final statistics summary.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║   ███╗   ███╗ ██████╗ ██████╗ ██████╗ ██╗  ██╗               ║
║   ████╗ ████║██╔═══██╗██╔══██╗██╔══██╗██║  ██║               ║
║   ██╔████╔██║██║   ██║██████╔╝██████╔╝███████║               ║
║   ██║╚██╔╝██║██║   ██║██╔══██╗██╔═══╝ ██╔══██║               ║
║   ██║ ╚═╝ ██║╚██████╔╝██║  ██║██║     ██║  ██║               ║
║   ╚═╝     ╚═╝ ╚═════╝ ╚═╝  ╚═╝╚═╝     ╚═╝  ╚═╝               ║
║                                                              ║
║               Mutation Wordlist Generator                    ║
║                                              v1.0.0          ║
╚══════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!("  {} {}", "✔".green(), text.green());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".green(), text);
}

/// Create a styled progress bar
pub fn create_progress_bar(total: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);

    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {pos}/{len} ({percent}%) {msg}")
    {
        pb.set_style(style.progress_chars("█▓░"));
    }

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Where generated words are shown while they are written
pub enum LineDisplay<W: Write> {
    /// Print every emitted word, optionally sleeping after each one
    Echo { out: W, pacing: Option<Duration> },
    /// Advance a progress bar once per candidate
    Bar(ProgressBar),
    /// Show nothing
    Hidden,
}

impl<W: Write> LineDisplay<W> {
    pub fn echo(out: W, pacing: Option<Duration>) -> Self {
        Self::Echo { out, pacing }
    }

    pub fn bar(total_candidates: u64) -> Self {
        Self::Bar(create_progress_bar(total_candidates, "Generating..."))
    }

    /// Show a word that was written to the output
    pub fn emit(&mut self, line: &str) -> io::Result<()> {
        match self {
            Self::Echo { out, pacing } => {
                writeln!(out, "{}", line)?;
                if let Some(delay) = pacing {
                    out.flush()?;
                    std::thread::sleep(*delay);
                }
            }
            Self::Bar(pb) => pb.inc(1),
            Self::Hidden => {}
        }
        Ok(())
    }

    /// Account for a candidate that was skipped as a duplicate
    pub fn skip(&mut self) {
        if let Self::Bar(pb) = self {
            pb.inc(1);
        }
    }

    pub fn finish(&mut self) -> io::Result<()> {
        match self {
            Self::Echo { out, .. } => out.flush(),
            Self::Bar(pb) => {
                pb.finish_with_message("Complete".green().to_string());
                Ok(())
            }
            Self::Hidden => Ok(()),
        }
    }
}

/// Generation statistics
#[derive(Debug, Clone)]
pub struct GenerationStats {
    pub variants: u64,
    pub unique_lines: u64,
    pub duplicate_lines: u64,
    pub bytes_written: u64,
    pub start_time: Instant,
}

impl GenerationStats {
    pub fn new() -> Self {
        Self {
            variants: 0,
            unique_lines: 0,
            duplicate_lines: 0,
            bytes_written: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn lines_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.unique_lines as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print final statistics
    pub fn print_summary(&self, output: &Path) {
        println!();
        println!("{}", "═".repeat(60).green());
        println!("{}", "                   GENERATION COMPLETE".green().bold());
        println!("{}", "═".repeat(60).green());
        println!();

        println!("  {} {}", "Variants:       ".green(), format_number(self.variants));
        println!("  {} {}", "Duplicates:     ".yellow(), format_number(self.duplicate_lines));
        println!(
            "  {} {}",
            "Total words:    ".green().bold(),
            format_number(self.unique_lines).green().bold()
        );
        println!("  {} {}", "Data written:   ".green(), ByteSize(self.bytes_written));
        println!();
        println!("  {} {}", "Duration:       ".green(), format_duration(self.elapsed()));
        println!("  {} {:.2} words/sec", "Throughput:     ".green(), self.lines_per_second());
        println!("  {} {}", "File saved:     ".green(), output.display());
        println!();
        println!("{}", "═".repeat(60).green());
    }
}

impl Default for GenerationStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m");
    }

    #[test]
    fn test_echo_writes_each_line() {
        let mut display = LineDisplay::echo(Vec::new(), None);
        display.emit("cat").unwrap();
        display.skip();
        display.emit("cat1").unwrap();
        display.finish().unwrap();

        match display {
            LineDisplay::Echo { out, .. } => assert_eq!(out, b"cat\ncat1\n"),
            _ => panic!("expected echo display"),
        }
    }

    #[test]
    fn test_echo_with_pacing() {
        let mut display = LineDisplay::echo(Vec::new(), Some(Duration::from_micros(10)));
        display.emit("x").unwrap();

        match display {
            LineDisplay::Echo { out, .. } => assert_eq!(out, b"x\n"),
            _ => panic!("expected echo display"),
        }
    }

    #[test]
    fn test_bar_counts_emitted_and_skipped() {
        let pb = ProgressBar::hidden();
        pb.set_length(3);
        let mut display: LineDisplay<Vec<u8>> = LineDisplay::Bar(pb.clone());

        display.emit("a").unwrap();
        display.skip();
        display.emit("b").unwrap();

        assert_eq!(pb.position(), 3);
    }
}
