/// Transient user-facing notification surface.
pub trait Notifier: Send + Sync {
    fn report_error(&self, message: &str);
}
