use std::process::{Command, Output};

fn run_tkix(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tkix"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to launch tkix binary")
}

#[test]
fn help_describes_the_game_and_its_options() {
    let output = run_tkix(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Trap both ends of the bouncing TKix inside a box"));
    for flag in ["--seed", "--tick-millis", "--width", "--height", "--vsync", "--show-fps"] {
        assert!(stdout.contains(flag), "help is missing {flag}");
    }
}

#[test]
fn zero_tick_interval_exits_before_opening_a_window() {
    let output = run_tkix(&["--tick-millis", "0"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid launch options"), "{stderr}");
    assert!(
        stderr.contains("tick interval must be at least one millisecond"),
        "{stderr}"
    );
}

#[test]
fn malformed_seed_is_a_usage_error() {
    let output = run_tkix(&["--seed", "not-a-number"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--seed"));
}
