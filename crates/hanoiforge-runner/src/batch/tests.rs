//! Tests for batch processing.

use super::*;
use hanoiforge_config::RunnerConfig;
use std::io::Cursor;

fn run(input: &str) -> (BatchSummary, String) {
    let runner = Runner::new(RunnerConfig::default()).unwrap();
    let mut output = Vec::new();
    let summary = runner.run_batch(Cursor::new(input), &mut output).unwrap();
    (summary, String::from_utf8(output).unwrap())
}

#[test]
fn test_blank_lines_skipped() {
    let (summary, output) = run("\n   \n\t\n");
    assert_eq!(summary, BatchSummary::default());
    assert!(output.is_empty());
}

#[test]
fn test_bad_line_does_not_stop_batch() {
    let (summary, output) = run("abc\n2\n0\n21\n1\n");

    assert_eq!(summary.solved, 2);
    assert_eq!(summary.failed, 3);
    assert_eq!(summary.total(), 5);

    let headers: Vec<&str> = output.lines().filter(|l| l.starts_with("n = ")).collect();
    assert_eq!(headers, vec!["n = abc", "n = 2", "n = 0", "n = 21", "n = 1"]);

    assert!(output.contains("\t\tInput is not a positive integer.\n"));
    assert!(output.contains("\t\tNo disks present in tower.\n"));
    assert!(output.contains("\t\tN>20, too many disks.\n"));
}

#[test]
fn test_reports_in_input_order() {
    let (_, output) = run("2\n1\n");
    let two = output.find("n = 2").unwrap();
    let one = output.find("n = 1").unwrap();
    assert!(two < one);
}

#[test]
fn test_missing_trailing_newline() {
    let (summary, _) = run("3");
    assert_eq!(summary.solved, 1);
}

#[test]
fn test_invalid_utf8_line_is_rejected_and_batch_continues() {
    let runner = Runner::new(RunnerConfig::default()).unwrap();
    let mut output = Vec::new();
    let summary = runner
        .run_batch(Cursor::new(&b"1\n\xff\xfe\n2\n"[..]), &mut output)
        .unwrap();

    assert_eq!(summary.solved, 2);
    assert_eq!(summary.failed, 1);

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("\t\tInput is not a positive integer.\n"));
    assert!(output.contains("n = 2\n"));
}

#[test]
fn test_crlf_line_endings() {
    let (summary, output) = run("3\r\n\r\n1\r\n");
    assert_eq!(summary.solved, 2);
    assert!(output.contains("n = 3\n"));
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_propagates() {
    let runner = Runner::new(RunnerConfig::default()).unwrap();
    let result = runner.run_batch(Cursor::new("1\n"), FailingWriter);
    assert!(matches!(result, Err(BatchError::Io(_))));
}
