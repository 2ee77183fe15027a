//! Timing of page builds.

//! `time_guard!` is only enabled if the `TIME_GUARD` env var is set
//! to a truthy value or `enabled_set(true)` was called in the
//! thread. `PageTimer` is always on, its result ends up in the page
//! footer.

use std::{time::{Instant, Duration}, fmt::Debug, cell::Cell, os::unix::prelude::OsStrExt};

fn time_guard_env_get() -> bool {
    match std::env::var_os("TIME_GUARD") {
        Some(v) => match v.as_bytes() {
            b"0" | b"" | b"off" | b"false" | b"no" => false,
            _ => true
        }
        None => false
    }
}

thread_local!{
    pub static ENABLED: Cell<bool> = Cell::new(time_guard_env_get());
}

/// Enable `time_guard!`.
pub fn enabled_set(on: bool) {
    ENABLED.with(|cell| cell.set(on))
}

pub fn enabled() -> bool {
    ENABLED.with(|old| old.get())
}


pub enum TimeGuard<S: Debug> {
    Disabled,
    Enabled {
        name: S,
        start: Instant
    },
}

impl<S: Debug> Drop for TimeGuard<S> {
    fn drop(&mut self) {
        match self {
            TimeGuard::Disabled => (),
            TimeGuard::Enabled { name, start } => {
                let elapsed = start.elapsed();
                eprintln!("{:?}: {:#?}", name, elapsed);
            },
        }
    }
}

#[macro_export]
macro_rules! time_guard {
    ($namestr:expr) => {
        let _guard = if $crate::time_guard::enabled() {
            $crate::time_guard::TimeGuard::Enabled {
                name: $namestr,
                start: std::time::Instant::now()
            }
        } else {
            $crate::time_guard::TimeGuard::Disabled
        };
    }
}


/// Wall clock start of a page, read once when the page is closed.
#[derive(Debug, Clone, Copy)]
pub struct PageTimer {
    start: Instant,
}

impl PageTimer {
    pub fn start() -> Self {
        PageTimer { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Milliseconds with one decimal, as shown in the page footer.
pub fn format_millis(d: Duration) -> String {
    format!("{:.1}", d.as_secs_f64() * 1000.)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_format_millis() {
        assert_eq!(format_millis(Duration::from_micros(1200)), "1.2");
        assert_eq!(format_millis(Duration::from_millis(0)), "0.0");
        assert_eq!(format_millis(Duration::from_millis(1500)), "1500.0");
    }

    #[test]
    fn t_enabled_set() {
        enabled_set(true);
        assert!(enabled());
        enabled_set(false);
        assert!(!enabled());
    }
}
