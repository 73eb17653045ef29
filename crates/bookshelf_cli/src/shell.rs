//! Interactive numbered-menu loop over a [`BookStore`].
//!
//! # Invariants
//! - Input and store errors abandon the current action only; the loop keeps
//!   running and redisplays the menu.
//! - End of input behaves like choosing "exit".

use bookshelf_core::{
    parse_id, parse_title, parse_year, BookStatus, BookStore, InputError, SearchField, StoreError,
};
use log::warn;
use std::io::{self, BufRead, Write};

const MENU: &str = "\nMenu:
1. Add a book
2. Delete a book
3. Search books
4. List all books
5. Update book status
6. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    Delete,
    Search,
    ListAll,
    UpdateStatus,
    Exit,
}

impl MenuChoice {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Delete),
            "3" => Some(Self::Search),
            "4" => Some(Self::ListAll),
            "5" => Some(Self::UpdateStatus),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Why a menu action stopped early.
#[derive(Debug)]
enum ActionError {
    Input(InputError),
    Store(StoreError),
    EndOfInput,
    Io(io::Error),
}

impl From<InputError> for ActionError {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}

impl From<StoreError> for ActionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<io::Error> for ActionError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

type ActionResult = Result<(), ActionError>;

pub struct Shell<'s, R, W> {
    store: &'s mut BookStore,
    input: R,
    output: W,
}

impl<'s, R: BufRead, W: Write> Shell<'s, R, W> {
    pub fn new(store: &'s mut BookStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Runs until "exit" or end of input. Only terminal I/O failures escape.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(raw) = self.prompt("Choose an action: ")? else {
                return self.say("Exiting.");
            };

            let result = match MenuChoice::parse(&raw) {
                Some(MenuChoice::Exit) => return self.say("Exiting."),
                Some(MenuChoice::Add) => self.add_book(),
                Some(MenuChoice::Delete) => self.delete_book(),
                Some(MenuChoice::Search) => self.search_books(),
                Some(MenuChoice::ListAll) => self.list_all(),
                Some(MenuChoice::UpdateStatus) => self.update_status(),
                None => {
                    self.report(&format!("invalid choice `{}`; try again", raw.trim()))?;
                    continue;
                }
            };

            match result {
                Ok(()) => {}
                Err(ActionError::Input(err)) => self.report(&err.to_string())?,
                Err(ActionError::Store(err)) => {
                    warn!("event=action_failed module=shell status=error error={err}");
                    self.report(&err.to_string())?;
                }
                Err(ActionError::EndOfInput) => return self.say("Exiting."),
                Err(ActionError::Io(err)) => return Err(err),
            }
        }
    }

    fn add_book(&mut self) -> ActionResult {
        let title = parse_title(&self.ask("Title: ")?)?;
        let author = self.ask("Author: ")?.trim().to_string();
        let year = parse_year(&self.ask("Year: ")?)?;

        let book = self.store.add_book(title, author, year)?;
        writeln!(self.output, "Book added with id {}.", book.id)?;
        Ok(())
    }

    fn delete_book(&mut self) -> ActionResult {
        let id = parse_id(&self.ask("Book id: ")?)?;

        let removed = self.store.delete_book(id)?;
        writeln!(self.output, "Book {} deleted.", removed.id)?;
        Ok(())
    }

    fn search_books(&mut self) -> ActionResult {
        let field: SearchField = self.ask("Search by (title, author, year): ")?.parse()?;
        let query = self.ask("Search value: ")?;

        let hits = self.store.search_books(query.trim(), field);
        match self.store.list_books(Some(hits.as_slice())) {
            Some(table) => write!(self.output, "{table}")?,
            None => writeln!(self.output, "No matching books.")?,
        }
        Ok(())
    }

    fn list_all(&mut self) -> ActionResult {
        match self.store.list_books(None) {
            Some(table) => write!(self.output, "{table}")?,
            None => writeln!(self.output, "The library is empty.")?,
        }
        Ok(())
    }

    fn update_status(&mut self) -> ActionResult {
        let id = parse_id(&self.ask("Book id: ")?)?;
        let status: BookStatus = self.ask("New status (available/checked out): ")?.parse()?;

        let book = self.store.update_status(id, status)?;
        writeln!(
            self.output,
            "Status of book {} updated to {}.",
            book.id, book.status
        )?;
        Ok(())
    }

    /// Like [`Self::prompt`], but end of input abandons the action.
    fn ask(&mut self, label: &str) -> Result<String, ActionError> {
        self.prompt(label)?.ok_or(ActionError::EndOfInput)
    }

    /// Writes `label` and reads one line without its line ending.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn report(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "[ERROR] {message}")
    }

    fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }
}
