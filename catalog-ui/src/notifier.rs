use species_core::{NotificationPort, Toast};
use tracing::{Level, event};

/// Delivers notifications as tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&self, toast: Toast) {
        if toast.is_destructive() {
            event!(Level::WARN, title = %toast.title, "{}", toast.description)
        } else {
            event!(Level::INFO, title = %toast.title, "{}", toast.description)
        }
    }
}
