use super::{record_history, Outcome, ShellProxy};
use tracing::warn;
use tsh_store::{read_debug_codes, HistoryLog, SongStore};
use tsh_types::Context;

pub fn description() -> &'static str {
    "Show recent loop completion codes (0 exit, 1 no change, 2 file change)"
}

/// Built-in debug command implementation
/// Prints the completion codes the loop has recorded, oldest first.
pub fn command(
    ctx: &Context,
    _store: &SongStore,
    history: &mut HistoryLog,
    _proxy: &mut dyn ShellProxy,
) -> Outcome {
    match read_debug_codes(&ctx.debug_path) {
        Ok(codes) if codes.is_empty() => println!("No completion codes recorded yet"),
        Ok(codes) => {
            for code in codes {
                println!("{code}");
            }
        }
        Err(err) => warn!("failed to read debug file: {err}"),
    }
    record_history(ctx, history, "debug");
    Outcome::NoChange
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedProxy;
    use tsh_store::append_completion_code;
    use tsh_types::CompletionCode;

    #[test]
    fn test_debug_reads_codes_and_records_history() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::in_dir(dir.path());
        append_completion_code(&ctx.debug_path, CompletionCode::Mutated, ctx.debug_cutoff)
            .unwrap();
        let store = SongStore::new();
        let mut history = HistoryLog::new(ctx.history_cutoff);
        let mut proxy = ScriptedProxy::new(&[]);

        assert_eq!(
            command(&ctx, &store, &mut history, &mut proxy),
            Outcome::NoChange
        );
        assert_eq!(history.entries(), ["debug"]);
    }
}
