use std::sync::Mutex;

// Shared lock for tests that touch GREETER_SCENARIOS or other process-wide variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());
