use crate::errors::LarderResult;
use crate::models::ExpiryAlert;

/// Generic notification channel. Delivery (push/local, icons, colors) is
/// owned by the platform layer, not this core.
pub trait INotifier: Send + Sync {
    fn notify(&self, alert: &ExpiryAlert) -> LarderResult<()>;
}
