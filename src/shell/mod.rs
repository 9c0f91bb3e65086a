//! Line-oriented interactive shell.
//!
//! The [`Session`] owns the only [`AddressBook`] and feeds each input line
//! through the command table until an exit command or end of input.

pub mod commands;

pub use commands::{dispatch, lookup, Arity, CommandSpec, Reply, COMMANDS, HELP};

use crate::config::Config;
use crate::models::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// A read-eval-print session over arbitrary input and output streams.
pub struct Session<R, W> {
    book: AddressBook,
    config: Config,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty address book.
    pub fn new(config: Config, input: R, output: W) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            input,
            output,
        }
    }

    /// Run until an exit command or end of input.
    ///
    /// # Errors
    ///
    /// Only I/O failures on the underlying streams are returned. Input that
    /// is not valid UTF-8 is rejected line by line, not treated as an error.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Session started");
        let mut buf = Vec::new();

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                break;
            }

            // Undecodable bytes become U+FFFD, which no field accepts.
            let line = String::from_utf8_lossy(&buf);
            match dispatch(&mut self.book, line.trim()) {
                Reply::Continue(text) => self.print(&text)?,
                Reply::Exit(text) => {
                    self.print(&text)?;
                    break;
                }
            }
        }

        info!(contacts = self.book.count(), "Session finished");
        Ok(())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text.trim_end_matches('\n'))
    }

    /// The session's address book.
    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Consume the session, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}
