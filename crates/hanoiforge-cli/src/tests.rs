use super::*;
use std::path::PathBuf;

fn args(input: PathBuf, output: PathBuf) -> Args {
    Args {
        input,
        output,
        config: None,
        verbose: false,
        tokens: Vec::new(),
    }
}

#[test]
fn test_input_file_to_nested_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let output = dir.path().join("out").join("output.txt");
    fs::write(&input, "1\nabc\n").unwrap();

    let summary = run(&args(input, output.clone())).unwrap();
    assert_eq!(summary.solved, 1);
    assert_eq!(summary.failed, 1);

    let text = fs::read_to_string(output).unwrap();
    assert!(text.contains("n = 1\n"));
    assert!(text.contains("n = abc\n"));
}

#[test]
fn test_tokens_replace_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");
    let mut args = args(dir.path().join("missing.txt"), output.clone());
    args.tokens = vec!["2".to_string(), "0".to_string()];

    let summary = run(&args).unwrap();
    assert_eq!(summary.total(), 2);
    assert!(fs::read_to_string(output)
        .unwrap()
        .contains("\t\tNo disks present in tower.\n"));
}

#[test]
fn test_missing_input_file_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.txt");
    fs::write(&output, "PREVIOUS REPORT").unwrap();

    let args = args(dir.path().join("missing.txt"), output.clone());
    assert!(matches!(run(&args), Err(CliError::Open { .. })));
    assert_eq!(fs::read_to_string(output).unwrap(), "PREVIOUS REPORT");
}

#[test]
fn test_bad_config_keeps_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("hanoi.toml");
    fs::write(&config, "max_disks = [").unwrap();
    let output = dir.path().join("output.txt");
    fs::write(&output, "PREVIOUS REPORT").unwrap();

    let mut args = args(dir.path().join("input.txt"), output.clone());
    args.config = Some(config);
    assert!(matches!(run(&args), Err(CliError::Config(ConfigError::Toml(_)))));
    assert_eq!(fs::read_to_string(output).unwrap(), "PREVIOUS REPORT");
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("hanoi.toml");
    fs::write(&config, "max_disks = 2\n").unwrap();

    let output = dir.path().join("output.txt");
    let mut args = args(dir.path().join("unused.txt"), output.clone());
    args.config = Some(config);
    args.tokens = vec!["3".to_string()];

    run(&args).unwrap();
    assert!(fs::read_to_string(output).unwrap().contains("N>2, too many disks."));
}

#[test]
fn test_missing_config_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(Some(dir.path().join("absent.toml").as_path())).unwrap();
    assert_eq!(config, RunnerConfig::default());
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("hanoi.toml");
    fs::write(&config, "max_disks = 0\n").unwrap();

    let mut args = args(dir.path().join("input.txt"), dir.path().join("output.txt"));
    args.config = Some(config);
    assert!(matches!(run(&args), Err(CliError::Config(_))));
}

#[test]
fn test_parse_defaults() {
    let args = Args::parse_from(["hanoi"]);
    assert_eq!(args.input, PathBuf::from("input_output/input.txt"));
    assert_eq!(args.output, PathBuf::from("input_output/output.txt"));
    assert!(!args.writes_stdout());

    let args = Args::parse_from(["hanoi", "--output", "-", "-v", "3", "5"]);
    assert!(args.writes_stdout());
    assert!(args.verbose);
    assert_eq!(args.tokens, vec!["3", "5"]);
}
