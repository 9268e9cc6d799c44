use leptos::Owner;

/// Runs `f` inside `owner`, the reactive scope captured before an `.await`.
/// Returns None and logs when the scope was disposed in the meantime
/// (e.g. the review modal was closed while a save was still pending).
pub fn with_owner_safe<F, R>(owner: Option<Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match owner {
        Some(owner) => match leptos::try_with_owner(owner, f) {
            Ok(value) => Some(value),
            Err(_) => {
                leptos::logging::warn!("[OWNER] Owner disposed before {} finished", log_context);
                None
            }
        },
        None => {
            leptos::logging::log!("[OWNER] No Leptos owner in context: {}", log_context);
            None
        }
    }
}
