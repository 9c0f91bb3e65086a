//! Command table for the interactive shell.
//!
//! Every command is a [`CommandSpec`]: its name, how many arguments it takes,
//! the hint shown when the count is wrong, and a plain function handler that
//! receives the book and the already tokenized arguments.

use crate::error::{BookError, BookResult};
use crate::models::AddressBook;
use crate::operations;
use tracing::debug;

/// What the shell should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading commands
    Continue(String),
    /// Print the text and end the session
    Exit(String),
}

/// Number of arguments a command accepts (the command word excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    AtLeast(usize),
}

impl Arity {
    fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

type Handler = fn(&mut AddressBook, &[&str]) -> BookResult<Reply>;

/// One entry of the command table.
pub struct CommandSpec {
    pub name: &'static str,
    pub arity: Arity,
    pub usage: &'static str,
    handler: Handler,
}

/// All commands understood by the shell.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "hello",
        arity: Arity::AtLeast(0),
        usage: "",
        handler: |_, _| Ok(Reply::Continue("How can I help you?".to_string())),
    },
    CommandSpec {
        name: "add",
        arity: Arity::Exact(2),
        usage: "write name and phone.",
        handler: |book, args| {
            operations::add_contact(book, args[0], args[1]).map(Reply::Continue)
        },
    },
    CommandSpec {
        name: "change",
        arity: Arity::Exact(3),
        usage: "write name, old phone and new phone.",
        handler: |book, args| {
            operations::change_phone(book, args[0], args[1], args[2]).map(Reply::Continue)
        },
    },
    CommandSpec {
        name: "phone",
        arity: Arity::Exact(1),
        usage: "write name.",
        handler: |book, args| operations::get_phone(book, args[0]).map(Reply::Continue),
    },
    CommandSpec {
        name: "delete",
        arity: Arity::Exact(2),
        usage: "write name and phone.",
        handler: |book, args| {
            operations::delete_phone(book, args[0], args[1]).map(Reply::Continue)
        },
    },
    CommandSpec {
        name: "birth",
        arity: Arity::Exact(2),
        usage: "write name and birthday.",
        handler: |book, args| {
            operations::add_birthday(book, args[0], args[1]).map(Reply::Continue)
        },
    },
    CommandSpec {
        name: "days",
        arity: Arity::Exact(1),
        usage: "write name.",
        handler: |book, args| {
            operations::happy_birthday(book, args[0])
                .map(|days| Reply::Continue(days.to_string()))
        },
    },
    CommandSpec {
        name: "iteration",
        arity: Arity::Exact(1),
        usage: "write number.",
        handler: |book, args| operations::list_first(book, args[0]).map(Reply::Continue),
    },
    CommandSpec {
        name: "show all",
        arity: Arity::AtLeast(0),
        usage: "",
        handler: |book, _| Ok(Reply::Continue(operations::show_all(book))),
    },
    CommandSpec {
        name: "good bye",
        arity: Arity::AtLeast(0),
        usage: "",
        handler: |_, _| Ok(Reply::Exit("Good bye!".to_string())),
    },
    CommandSpec {
        name: "close",
        arity: Arity::AtLeast(0),
        usage: "",
        handler: |_, _| Ok(Reply::Exit("Good bye!".to_string())),
    },
    CommandSpec {
        name: "exit",
        arity: Arity::AtLeast(0),
        usage: "",
        handler: |_, _| Ok(Reply::Exit("Good bye!".to_string())),
    },
];

/// Line printed for anything that is not a known command.
pub const HELP: &str = "Invalid command. Use 'hello', 'add', 'change', 'phone', 'delete', \
                        'birth', 'days', 'iteration', 'show all', 'good bye', 'close', \
                        or 'exit'";

/// Find the command a line starts with, returning it and its arguments.
///
/// The command word is matched case-insensitively. Two-word commands such as
/// `show all` are tried before single-word ones.
pub fn lookup(line: &str) -> Option<(&'static CommandSpec, Vec<&str>)> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let find = |name: &str| COMMANDS.iter().find(|spec| spec.name == name);

    if tokens.len() >= 2 {
        let two_words = format!("{} {}", tokens[0], tokens[1]).to_lowercase();
        if let Some(spec) = find(&two_words) {
            return Some((spec, tokens[2..].to_vec()));
        }
    }

    find(&tokens[0].to_lowercase()).map(|spec| (spec, tokens[1..].to_vec()))
}

/// Run one input line against the book.
///
/// Failures never escape: they come back as the user-facing error message.
pub fn dispatch(book: &mut AddressBook, line: &str) -> Reply {
    let Some((spec, args)) = lookup(line) else {
        debug!(line, "Unknown command");
        return Reply::Continue(HELP.to_string());
    };

    let result = if spec.arity.accepts(args.len()) {
        (spec.handler)(book, &args)
    } else {
        Err(BookError::MissingArgs(spec.usage.to_string()))
    };

    result.unwrap_or_else(|e| Reply::Continue(e.user_message()))
}
