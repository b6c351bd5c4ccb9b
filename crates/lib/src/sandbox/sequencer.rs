use super::Store;
use crate::{errors::SageError, types::ExecutedStatement};
use tracing::{debug, warn};

/// Executes `statements` in order against `store`.
///
/// Blank statements are skipped and never become the retained result. Each
/// successful statement replaces the previous one as the last statement, so only
/// the final non-empty statement's outcome is returned. The first failure aborts
/// the sequence; mutations made by earlier statements are not rolled back.
///
/// Returns `Ok(None)` when every statement is blank.
pub async fn run_statements<S: AsRef<str>>(
    store: &Store,
    statements: &[S],
) -> Result<Option<ExecutedStatement>, SageError> {
    let mut last = None;

    for (index, raw) in statements.iter().enumerate() {
        let text = raw.as_ref().trim();
        if text.is_empty() {
            debug!(index, "Skipping blank statement.");
            continue;
        }

        let outcome = store.execute_statement(text).await.inspect_err(|e| {
            warn!(index, "Statement failed, aborting sequence: {e}");
        })?;
        last = Some(ExecutedStatement {
            text: text.to_string(),
            outcome,
        });
    }

    Ok(last)
}
