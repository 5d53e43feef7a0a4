//! Helpers to run the `wattle` binary from integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;
use std::time::Duration;

use wait_timeout::ChildExt;

/// The output of a single run of the binary.
#[derive(Debug)]
pub(crate) struct Run {
    pub(crate) success: bool,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

impl Run {
    /// The number of solutions which were printed.
    pub(crate) fn num_solutions(&self) -> usize {
        self.stdout
            .lines()
            .filter(|line| *line == "----------")
            .count()
    }
}

pub(crate) fn instance(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("instances")
        .join(name)
}

/// Runs the binary with the given arguments, writing its output to files named after `test_name`.
pub(crate) fn run_wattle<'a>(test_name: &str, args: impl IntoIterator<Item = &'a str>) -> Run {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let solver = PathBuf::from(env!("CARGO_BIN_EXE_wattle"));
    let output_dir = Path::new(env!("CARGO_TARGET_TMPDIR"));
    let log_file_path = output_dir.join(format!("{test_name}.log"));
    let err_file_path = output_dir.join(format!("{test_name}.err"));

    let mut child = Command::new(solver)
        .args(args)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    let run = Run {
        success: status.success(),
        stdout: std::fs::read_to_string(&log_file_path).expect("Failed to read log file."),
        stderr: std::fs::read_to_string(&err_file_path).expect("Failed to read error file."),
    };

    std::fs::remove_file(log_file_path).expect("Failed to remove log file.");
    std::fs::remove_file(err_file_path).expect("Failed to remove error file.");

    run
}
