//! Bridge: the `Logger` abstraction and its backends vary independently.
//!
//! New backends implement `LoggerBackend`; `Logger` never changes.

use std::io::{self, Write};

use crate::error::Result;

pub trait LoggerBackend {
    fn process_log_line(&mut self, line: &str) -> io::Result<()>;
}

/// Writes where a UDP sender would.
pub struct UdpLoggerBackend<W: Write> {
    sink: W,
}

impl<W: Write> UdpLoggerBackend<W> {
    pub fn new(sink: W) -> Self {
        UdpLoggerBackend { sink }
    }
}

impl<W: Write> LoggerBackend for UdpLoggerBackend<W> {
    fn process_log_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.sink, "UDP logger: {line}")
    }
}

pub struct FileLoggerBackend<W: Write> {
    sink: W,
}

impl<W: Write> FileLoggerBackend<W> {
    pub fn new(sink: W) -> Self {
        FileLoggerBackend { sink }
    }
}

impl<W: Write> LoggerBackend for FileLoggerBackend<W> {
    fn process_log_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.sink, "File logger: {line}")
    }
}

pub struct Logger<'a> {
    backend: Box<dyn LoggerBackend + 'a>,
    lines_logged: usize,
}

impl<'a> Logger<'a> {
    pub fn new(backend: Box<dyn LoggerBackend + 'a>) -> Self {
        Logger {
            backend,
            lines_logged: 0,
        }
    }

    pub fn log_line(&mut self, line: &str) -> io::Result<()> {
        self.backend.process_log_line(line)?;
        self.lines_logged += 1;
        Ok(())
    }

    pub fn lines_logged(&self) -> usize {
        self.lines_logged
    }

    /// Swap the backend without touching callers.
    pub fn set_backend(&mut self, backend: Box<dyn LoggerBackend + 'a>) {
        self.backend = backend;
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    {
        let mut logger = Logger::new(Box::new(FileLoggerBackend::new(&mut *out)));
        logger.log_line("Hello World!")?;
    }

    // Same abstraction, different implementation.
    let mut logger = Logger::new(Box::new(UdpLoggerBackend::new(&mut *out)));
    logger.log_line("Hello again, over UDP!")?;
    Ok(())
}
