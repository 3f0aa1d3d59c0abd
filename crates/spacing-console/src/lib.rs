//! Colorful console output for solver runs.
//!
//! Provides a custom `tracing` layer that formats spacing solver events
//! with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Solve start/end
//! - **DEBUG**: Feasibility checks
//! - **TRACE**: Individual ball moves

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVE: &str = "spacing_solver=info";

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Honors `RUST_LOG`, defaulting to `spacing_solver=info`.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SpacingConsoleLayer)
            .try_init();
    });
}

// Returns seconds since `init`.
fn elapsed_secs() -> f64 {
    EPOCH.get().map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

/// A tracing layer that formats solver events with colors.
pub struct SpacingConsoleLayer;

impl<S: Subscriber> Layer<S> for SpacingConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Only handle solver events
        if !metadata.target().starts_with("spacing_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    check: Option<String>,
    reason: Option<String>,
    detail: Option<String>,
    row_len: Option<u64>,
    ball_count: Option<u64>,
    moves: Option<u64>,
    ball: Option<u64>,
    from: Option<u64>,
    to: Option<i64>,
    feasible: Option<bool>,
    passed: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "row_len" => self.row_len = Some(value),
            "ball_count" => self.ball_count = Some(value),
            "moves" => self.moves = Some(value),
            "ball" => self.ball = Some(value),
            "from" => self.from = Some(value),
            "to" => self.to = Some(value as i64),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        match field.name() {
            "to" => self.to = Some(value),
            _ if value >= 0 => self.record_u64(field, value as u64),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "feasible" => self.feasible = Some(value),
            "passed" => self.passed = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "check" => self.check = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            "detail" => self.detail = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match (v.event.as_deref(), v.check.as_deref()) {
        (Some("solve_start"), _) => format_solve_start(v),
        (Some("solve_end"), _) => format_solve_end(v),
        (Some("ball_move"), _) => format_ball_move(v, level),
        (None, Some(check)) => format_check(check, v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_solve_start(v: &EventVisitor) -> String {
    let cells = v.row_len.unwrap_or(0);
    let balls = v.ball_count.unwrap_or(0);

    format!(
        "{} {} Solving │ {} cells │ {} balls",
        format_elapsed(),
        "▶".bright_green().bold(),
        cells.to_formatted_string(&Locale::en).bright_yellow(),
        balls.to_formatted_string(&Locale::en).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    if v.feasible.unwrap_or(false) {
        let moves = v.moves.unwrap_or(0);
        format!(
            "{} {} Solved │ {} moves │ {}",
            format_elapsed(),
            "■".bright_cyan().bold(),
            moves
                .to_formatted_string(&Locale::en)
                .bright_magenta()
                .bold(),
            "FEASIBLE".bright_green().bold()
        )
    } else {
        let mut output = format!(
            "{} {} Solved │ {}",
            format_elapsed(),
            "■".bright_cyan().bold(),
            "INFEASIBLE".bright_red().bold()
        );
        if let Some(ref detail) = v.detail {
            output.push_str(&format!(" │ {}", detail.yellow()));
        } else if let Some(ref reason) = v.reason {
            output.push_str(&format!(" │ {}", reason.yellow()));
        }
        output
    }
}

fn format_check(check: &str, v: &EventVisitor) -> String {
    let status = if v.passed.unwrap_or(false) {
        "ok".bright_green().to_string()
    } else {
        "failed".bright_red().to_string()
    };

    format!(
        "{} {} {} check {}",
        format_elapsed(),
        "·".bright_blue(),
        check.white(),
        status
    )
}

fn format_ball_move(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{}     ball {:>3} │ {:>4} → {:<4}",
        format_elapsed(),
        v.ball.unwrap_or(0),
        v.from.unwrap_or(0),
        v.to.unwrap_or(0)
    )
    .bright_black()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_event_is_silent() {
        let v = EventVisitor {
            event: Some("other".to_string()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_feasible_solve_end() {
        let v = EventVisitor {
            event: Some("solve_end".to_string()),
            feasible: Some(true),
            moves: Some(1234),
            ..Default::default()
        };
        let output = format_event(&v, Level::INFO);
        assert!(output.contains("1,234"));
        assert!(output.contains("FEASIBLE"));
    }

    #[test]
    fn test_infeasible_solve_end_shows_detail() {
        let v = EventVisitor {
            event: Some("solve_end".to_string()),
            feasible: Some(false),
            reason: Some("insufficient_space".to_string()),
            detail: Some("6 cells needed".to_string()),
            ..Default::default()
        };
        let output = format_event(&v, Level::INFO);
        assert!(output.contains("INFEASIBLE"));
        assert!(output.contains("6 cells needed"));
    }

    #[test]
    fn test_ball_move_only_at_trace() {
        let v = EventVisitor {
            event: Some("ball_move".to_string()),
            ball: Some(0),
            from: Some(0),
            to: Some(-1),
            ..Default::default()
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(format_event(&v, Level::TRACE).contains("-1"));
    }

    #[test]
    fn test_check_line() {
        let v = EventVisitor {
            check: Some("space".to_string()),
            passed: Some(false),
            ..Default::default()
        };
        let output = format_event(&v, Level::DEBUG);
        assert!(output.contains("space"));
        assert!(output.contains("failed"));
    }

    #[test]
    fn test_init_is_idempotent() {
        init();
        init();
    }
}
