use super::*;

fn visitor(message: &str) -> EventVisitor {
    EventVisitor {
        message: Some(message.to_string()),
        ..EventVisitor::default()
    }
}

#[test]
fn test_solve_end_formats_move_count() {
    let v = EventVisitor {
        solver: Some("Iterative".to_string()),
        move_count: Some(1_048_575),
        duration_us: Some(2_500),
        moves_per_second: Some(419_430_000),
        ..visitor("Solving ended")
    };

    let output = format_event(&v, Level::INFO);
    assert!(output.contains("Iterative"));
    assert!(output.contains("1,048,575"));
    assert!(output.contains("2.50ms"));
    assert!(output.contains("419,430,000"));
    assert!(output.contains("moves/s"));
}

#[test]
fn test_rejected_input_shows_token_and_error() {
    let v = EventVisitor {
        token: Some("abc".to_string()),
        error: Some("Input is not a positive integer.".to_string()),
        ..visitor("Input rejected")
    };

    let output = format_event(&v, Level::WARN);
    assert!(output.contains("abc"));
    assert!(output.contains("Input is not a positive integer."));
}

#[test]
fn test_batch_finished_counts() {
    let v = EventVisitor {
        solved: Some(1_200),
        failed: Some(3),
        ..visitor("Batch finished")
    };

    let output = format_event(&v, Level::INFO);
    assert!(output.contains("1,200"));
    assert!(output.contains('3'));
}

#[test]
fn test_unlisted_debug_message_is_silent() {
    assert!(format_event(&visitor("No disk to move"), Level::TRACE).is_empty());
    assert!(format_event(&visitor("something else"), Level::DEBUG).is_empty());
    assert!(format_event(&EventVisitor::default(), Level::ERROR).is_empty());
}

#[test]
fn test_unlisted_error_shows_message_and_error() {
    let v = EventVisitor {
        error: Some("cannot open /nonexistent/in.txt: No such file or directory".to_string()),
        ..visitor("hanoi failed")
    };

    let output = format_event(&v, Level::ERROR);
    assert!(output.contains("hanoi failed"));
    assert!(output.contains("cannot open /nonexistent/in.txt"));
}

#[test]
fn test_unlisted_warning_shows_path() {
    let v = EventVisitor {
        path: Some("hanoi.toml".to_string()),
        ..visitor("Config file not found, using defaults")
    };

    let output = format_event(&v, Level::WARN);
    assert!(output.contains("Config file not found, using defaults"));
    assert!(output.contains("hanoi.toml"));
}

#[test]
fn test_accepts_binary_and_library_targets() {
    assert!(accepts_target("hanoi"));
    assert!(accepts_target("hanoi::args"));
    assert!(accepts_target("hanoiforge_runner::batch"));
    assert!(accepts_target("hanoiforge_solver::solver"));
    assert!(!accepts_target("hanoid"));
    assert!(!accepts_target("tokio::runtime"));
}

#[test]
fn test_format_duration_us() {
    assert_eq!(format_duration_us(12), "12µs");
    assert_eq!(format_duration_us(1_500), "1.50ms");
    assert_eq!(format_duration_us(3_250_000), "3.25s");
}

#[test]
fn test_init_twice() {
    init();
    init_verbose();
}
