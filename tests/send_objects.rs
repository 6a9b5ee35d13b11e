#[allow(dead_code)]
fn needs_send<T: Send>() {}

#[allow(dead_code)]
fn needs_sync<T: Sync>() {}

#[test]
fn config_send_sync() {
    // ensures that options can be built on one thread and used on another
    needs_send::<scroll_watch::WatchConfig>();
    needs_sync::<scroll_watch::WatchConfig>();
    needs_send::<scroll_watch::VisibleBy>();
    needs_sync::<scroll_watch::VisibleBy>();
}

#[test]
fn errors_send_sync() {
    needs_send::<scroll_watch::WatchError>();
    needs_sync::<scroll_watch::WatchError>();
}
