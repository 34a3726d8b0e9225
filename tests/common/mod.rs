use assert_cmd::Command;
use assert_cmd::cargo_bin;

/// The stall binary with short timings so tests finish quickly.
pub fn stall(unit_delay_ms: u64, timeout_ms: u64) -> Command {
    let mut cmd = Command::new(cargo_bin!("warung"));
    cmd.arg("--unit-delay-ms")
        .arg(unit_delay_ms.to_string())
        .arg("--timeout-ms")
        .arg(timeout_ms.to_string());
    cmd
}
