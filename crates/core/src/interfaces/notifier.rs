//! User-facing messages and persisted global state

/// Messages shown to the user
pub trait Notifier: Send + Sync {
    fn show_error(&self, message: &str);

    fn show_info(&self, message: &str);
}

/// Boolean flags that survive restarts
pub trait GlobalState: Send + Sync {
    fn get_flag(&self, key: &str) -> Option<bool>;

    fn set_flag(&self, key: &str, value: bool) -> crate::Result<()>;
}
