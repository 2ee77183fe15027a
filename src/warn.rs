//! Printing diagnostics to stderr. Stdout carries the HTTP response
//! in CGI mode, so nothing here may ever print there.

use std::{cell::Cell, os::unix::prelude::OsStrExt};

#[macro_export]
macro_rules! warn {
    ($formatstr:expr $(,$arg:expr)*) => { {
        use std::io::Write;
        let mut outp = std::io::BufWriter::new(std::io::stderr().lock());
        let _ = write!(&mut outp, "W: ");
        let _ = write!(&mut outp, $formatstr $(,$arg)*);
        let _ = writeln!(&mut outp, " at {:?} line {}", file!(), line!());
        let _ = outp.flush();
    } }
}


fn trace_env_get() -> bool {
    match std::env::var_os("SIMPLEWEB_TRACE") {
        Some(v) => match v.as_bytes() {
            b"0" | b"" | b"off" | b"false" | b"no" => false,
            _ => true
        }
        None => false
    }
}

thread_local!{
    pub static TRACE_ENABLED: Cell<bool> = Cell::new(trace_env_get());
}

/// Enable `trace_binding!` for the current thread.
pub fn trace_enabled_set(on: bool) {
    TRACE_ENABLED.with(|cell| cell.set(on))
}

pub fn trace_enabled() -> bool {
    TRACE_ENABLED.with(|cell| cell.get())
}

/// Report which request value a control got bound to. Only prints if
/// `SIMPLEWEB_TRACE` is set or `trace_enabled_set(true)` was called.
#[macro_export]
macro_rules! trace_binding {
    ($kind:expr, $id:expr, $raw:expr) => {
        if $crate::warn::trace_enabled() {
            eprintln!("T: {} {} <- {:?}", $id, $kind, $raw);
        }
    }
}

