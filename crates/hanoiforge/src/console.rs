//! Colorful console output for solver and batch events.
//!
//! Provides a custom `tracing` layer that formats HanoiForge events with
//! colors. Output goes to stderr so that reports written to stdout stay
//! clean.
//!
//! ## Log Levels
//!
//! - **INFO**: Solver lifecycle events and the batch summary
//! - **WARN**: Rejected input tokens and a missing config file
//! - **ERROR**: Solver failures and the reason the `hanoi` binary exits
//! - **DEBUG**: Each processed token and moves rejected in `full_assert` mode

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes console output at INFO level.
///
/// Safe to call multiple times - only the first call has effect.
/// `RUST_LOG` overrides the default level.
pub fn init() {
    init_with_level(LevelFilter::INFO);
}

/// Initializes console output with DEBUG as the default level.
pub fn init_verbose() {
    init_with_level(LevelFilter::DEBUG);
}

fn init_with_level(level: LevelFilter) {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(HanoiConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(
        stderr,
        "{} {}",
        "HanoiForge".bright_cyan().bold(),
        format!("v{VERSION}").bright_white()
    );
    let _ = stderr.flush();
}

/// A tracing layer that formats HanoiForge events with colors.
pub struct HanoiConsoleLayer;

impl<S: Subscriber> Layer<S> for HanoiConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !accepts_target(metadata.target()) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

// Library crates and the `hanoi` binary.
fn accepts_target(target: &str) -> bool {
    target.starts_with("hanoiforge") || target == "hanoi" || target.starts_with("hanoi::")
}

#[derive(Debug, Default)]
struct EventVisitor {
    message: Option<String>,
    solver: Option<String>,
    token: Option<String>,
    error: Option<String>,
    path: Option<String>,
    disk_count: Option<u64>,
    move_count: Option<u64>,
    duration_us: Option<u64>,
    moves_per_second: Option<u64>,
    solved: Option<u64>,
    failed: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "message" => self.message = Some(s),
            "solver" => self.solver = Some(s.trim_matches('"').to_string()),
            "token" => self.token = Some(s.trim_matches('"').to_string()),
            "error" => self.error = Some(s),
            "path" => self.path = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "disk_count" => self.disk_count = Some(value),
            "move_count" => self.move_count = Some(value),
            "duration_us" => self.duration_us = Some(value),
            "moves_per_second" => self.moves_per_second = Some(value),
            "solved" => self.solved = Some(value),
            "failed" => self.failed = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "solver" => self.solver = Some(value.to_string()),
            "token" => self.token = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.message.as_deref().unwrap_or("") {
        "Solving started" => format_solve_start(v),
        "Solving ended" => format_solve_end(v),
        "Processing input" => format_processing(v),
        "Input rejected" => format_rejected(v),
        "Solver panicked" | "Solve failed" => format_panicked(v),
        "Rejected move" => format_rejected_move(v),
        "Batch finished" => format_batch_finished(v),
        _ => format_other(v, level),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    let solver = v.solver.as_deref().unwrap_or("Unknown");
    let disks = v.disk_count.unwrap_or(0);

    format!(
        "{} {} {} solving │ {} disks",
        format_elapsed(),
        "▶".bright_green().bold(),
        solver.white().bold(),
        disks.bright_yellow()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let solver = v.solver.as_deref().unwrap_or("Unknown");
    let moves = v.move_count.unwrap_or(0);
    let duration = v.duration_us.unwrap_or(0);

    let mut output = format!(
        "{} {} {} solved │ {} moves │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        solver.white().bold(),
        moves
            .to_formatted_string(&Locale::en)
            .bright_magenta()
            .bold(),
        format_duration_us(duration).yellow()
    );

    if let Some(speed) = v.moves_per_second {
        output.push_str(&format!(
            " │ {} moves/s",
            speed.to_formatted_string(&Locale::en).bright_magenta()
        ));
    }

    output
}

fn format_processing(v: &EventVisitor) -> String {
    format!(
        "{} {} n = {}",
        format_elapsed(),
        "●".bright_blue(),
        v.token.as_deref().unwrap_or("").white().bold()
    )
}

fn format_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} n = {} │ {}",
        format_elapsed(),
        "✗".bright_yellow().bold(),
        v.token.as_deref().unwrap_or("").white().bold(),
        v.error.as_deref().unwrap_or("").yellow()
    )
}

fn format_panicked(v: &EventVisitor) -> String {
    format!(
        "{} {} n = {} │ {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        v.token.as_deref().unwrap_or("").white().bold(),
        v.error.as_deref().unwrap_or("").bright_red()
    )
}

fn format_rejected_move(v: &EventVisitor) -> String {
    format!(
        "{} {} {}",
        format_elapsed(),
        "!".bright_red().bold(),
        v.error.as_deref().unwrap_or("illegal move").red()
    )
}

fn format_batch_finished(v: &EventVisitor) -> String {
    let solved = v.solved.unwrap_or(0);
    let failed = v.failed.unwrap_or(0);

    let failed_text = failed.to_formatted_string(&Locale::en);
    let failed_colored = if failed == 0 {
        failed_text.bright_green().to_string()
    } else {
        failed_text.bright_red().bold().to_string()
    };

    format!(
        "{} {} Batch finished │ {} solved │ {} failed",
        format_elapsed(),
        "◆".bright_cyan().bold(),
        solved.to_formatted_string(&Locale::en).bright_green(),
        failed_colored
    )
}

// Events without a dedicated line. DEBUG and TRACE stay quiet.
fn format_other(v: &EventVisitor, level: Level) -> String {
    let Some(message) = v.message.as_deref() else {
        return String::new();
    };

    let marker = if level == Level::ERROR {
        "✗".bright_red().bold().to_string()
    } else if level == Level::WARN {
        "!".bright_yellow().bold().to_string()
    } else if level == Level::INFO {
        "●".bright_blue().to_string()
    } else {
        return String::new();
    };

    let mut output = format!("{} {} {}", format_elapsed(), marker, message.white().bold());
    if let Some(ref path) = v.path {
        output.push_str(&format!(" │ {}", path.yellow()));
    }
    if let Some(ref error) = v.error {
        let error = if level == Level::ERROR {
            error.bright_red().to_string()
        } else {
            error.yellow().to_string()
        };
        output.push_str(&format!(" │ {}", error));
    }
    output
}

fn format_duration_us(us: u64) -> String {
    if us < 1_000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1_000.0)
    } else {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests;
