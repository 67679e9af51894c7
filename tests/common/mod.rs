use assert_cmd::Command;
use assert_fs::TempDir;

pub const BIN_NAME: &str = "budget_tracker_cli";
pub const HEADER: &str = "date,category,description,amount,type";

/// Runs the binary in script mode with `dir` as the working directory, so the
/// fixed `data.csv` lands inside the temporary folder.
pub fn script_command(dir: &TempDir) -> Command {
    let mut cmd = piped_command(dir);
    cmd.env("BUDGET_TRACKER_CLI_SCRIPT", "1");
    cmd
}

/// Runs the binary with stdin piped and no script switch set.
pub fn piped_command(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.current_dir(dir.path())
        .env_remove("BUDGET_TRACKER_CLI_SCRIPT")
        .env_remove("RUST_LOG");
    cmd
}
