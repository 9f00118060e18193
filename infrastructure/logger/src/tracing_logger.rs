use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing`, tagged with the component that
/// emitted them (`shopping_cart`, `product`, ...).
pub struct TracingLogger {
    component: &'static str,
}

impl TracingLogger {
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "shop_online", component = self.component, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "shop_online", component = self.component, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "shop_online", component = self.component, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "shop_online", component = self.component, "{}", message);
    }
}
