//! Interactive command loop
//!
//! The loop has two states: it waits for a command, dispatches it to the
//! store, prints the outcome and waits again, until `exit` (or end of input)
//! terminates it. Store failures are printed and never end the loop.

use crate::render;
use blogmgr_core::model::normalize_tag;
use blogmgr_store::BlogStore;
use std::io::{self, BufRead, Write};

/// One command word typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    List,
    View,
    Search,
    Exit,
    Invalid,
}

impl Command {
    /// Case-insensitive match on the trimmed command word
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "create" => Command::Create,
            "list" => Command::List,
            "view" => Command::View,
            "search" => Command::Search,
            "exit" => Command::Exit,
            _ => Command::Invalid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    AwaitingCommand,
    Terminated,
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until `exit` or end of input, then release the store
    ///
    /// Only I/O failures on the terminal itself are returned as errors.
    pub fn run(mut self, mut store: BlogStore) -> io::Result<W> {
        writeln!(self.output, "Blog Post Management System")?;
        writeln!(self.output, "Commands: create, list, view, search, exit")?;

        let mut state = LoopState::AwaitingCommand;
        while state == LoopState::AwaitingCommand {
            state = self.step(&mut store)?;
        }

        if let Err(e) = store.close() {
            render::error(&mut self.output, "closing database", &e)?;
        }
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(self.output)
    }

    fn step(&mut self, store: &mut BlogStore) -> io::Result<LoopState> {
        let Some(line) = self.prompt("\nEnter command: ")? else {
            return Ok(LoopState::Terminated);
        };

        match Command::parse(&line) {
            Command::Create => self.create(store),
            Command::List => self.list(store),
            Command::View => self.view(store),
            Command::Search => self.search(store),
            Command::Exit => Ok(LoopState::Terminated),
            Command::Invalid => {
                writeln!(self.output, "Invalid command. Please try again.")?;
                Ok(LoopState::AwaitingCommand)
            }
        }
    }

    fn create(&mut self, store: &mut BlogStore) -> io::Result<LoopState> {
        let Some(title) = self.prompt("Enter post title: ")? else {
            return Ok(LoopState::Terminated);
        };
        let Some(content) = self.prompt("Enter post content: ")? else {
            return Ok(LoopState::Terminated);
        };
        let Some(tags) = self.prompt("Enter comma-separated tags: ")? else {
            return Ok(LoopState::Terminated);
        };

        match store.create_post(&title, &content, &tags) {
            Ok(post) => render::created(&mut self.output, &post)?,
            Err(e) => {
                tracing::debug!(err_code = e.code(), "create command failed");
                render::error(&mut self.output, "creating post", &e)?
            }
        }
        Ok(LoopState::AwaitingCommand)
    }

    fn list(&mut self, store: &BlogStore) -> io::Result<LoopState> {
        match store.list_posts() {
            Ok(posts) => render::post_list(&mut self.output, &posts)?,
            Err(e) => render::error(&mut self.output, "listing posts", &e)?,
        }
        Ok(LoopState::AwaitingCommand)
    }

    fn view(&mut self, store: &BlogStore) -> io::Result<LoopState> {
        let Some(title) = self.prompt("Enter post title to view: ")? else {
            return Ok(LoopState::Terminated);
        };

        match store.view_post(&title) {
            Ok(Some(post)) => render::post(&mut self.output, &post)?,
            Ok(None) => render::not_found(&mut self.output, &title)?,
            Err(e) => render::error(&mut self.output, "viewing post", &e)?,
        }
        Ok(LoopState::AwaitingCommand)
    }

    fn search(&mut self, store: &BlogStore) -> io::Result<LoopState> {
        let Some(raw) = self.prompt("Enter tag to search: ")? else {
            return Ok(LoopState::Terminated);
        };
        let tag = normalize_tag(&raw).unwrap_or_default();

        match store.search_by_tag(&tag) {
            Ok(titles) => render::search_results(&mut self.output, &tag, &titles)?,
            Err(e) => render::error(&mut self.output, "searching by tag", &e)?,
        }
        Ok(LoopState::AwaitingCommand)
    }

    /// Print `label`, read one line and trim it; `None` at end of input
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a
    /// garbled line reaches dispatch like any other input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}
