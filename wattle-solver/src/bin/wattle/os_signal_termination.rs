use std::ffi::c_int;
use std::sync::Arc;

use wattle_solver::termination::CancellationFlag;

/// The signals after which the search is cancelled.
const TERMINATION_SIGNALS: &[c_int] = &[signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM];

/// Creates a [`CancellationFlag`] which is raised when the process receives SIGINT or SIGTERM.
pub(crate) fn install() -> std::io::Result<CancellationFlag> {
    let cancellation = CancellationFlag::new();

    for &signal in TERMINATION_SIGNALS {
        let _ = signal_hook::flag::register(signal, Arc::clone(cancellation.flag()))?;
    }

    Ok(cancellation)
}
