//! Player-facing summary for one effect.

use crate::action::ActionResult;

/// Fallback when no action result matches the effect's outcome.
pub const NO_EFFECT_MESSAGE: &str = "It had no effect.";

/// Builds the effect message from the results that match `success`.
///
/// One matching result speaks for itself; several are summarized by count.
pub fn synthesize_message(results: &[ActionResult], success: bool) -> String {
    let mut pool = results.iter().filter(|result| result.success == success);
    match (pool.next(), pool.count()) {
        (None, _) => NO_EFFECT_MESSAGE.to_string(),
        (Some(only), 0) => only.message.clone(),
        (Some(_), rest) if success => format!("{} effects applied", rest + 1),
        (Some(_), rest) => format!("{} actions failed", rest + 1),
    }
}
