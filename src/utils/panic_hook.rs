use leptos::logging::log;
use std::panic;

/// Chains a hook after `console_error_panic_hook` that explains Leptos owner
/// disposal panics, which show up when a save completes after the modal closed.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") {
            log!("[PANIC] Leptos owner disposal detected. Usual causes:");
            log!("[PANIC] 1. The review modal unmounted while a save was still pending");
            log!("[PANIC] 2. A criteria dialog callback ran after its dialog was removed");

            let _ = js_sys::eval(
                "console.log('[PANIC] Open dialogs:', document.querySelectorAll('.dialog').length)",
            );
        }
    }));
}

/// Call once from the client entry point.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
    log!("[PANIC_HOOK] Custom panic hook set up successfully");
}
