use std::io;

use tracing_subscriber::fmt;

use crate::Level;

// Every formatter writes to stderr; stdout carries the JSON table only.

pub(crate) fn least_verbose(level: Level) -> bool {
    let format = fmt::format().without_time().with_target(false).compact();
    fmt()
        .with_max_level(level)
        .event_format(format)
        .with_writer(io::stderr)
        .try_init()
        .is_ok()
}

pub(crate) fn verbose(level: Level) -> bool {
    fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init()
        .is_ok()
}

pub(crate) fn very_verbose(level: Level) -> bool {
    fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .try_init()
        .is_ok()
}
