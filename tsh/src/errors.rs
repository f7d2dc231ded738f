use tracing::debug;

/// Display an error in a user-friendly format without a backtrace dump.
/// The full chain still goes to the log file for diagnostics.
pub fn display_user_error(err: &anyhow::Error) {
    debug!("fatal: {err:?}");
    eprintln!("tsh: {err}");
    for cause in err.chain().skip(1) {
        eprintln!("tsh:   caused by: {cause}");
    }
}
