use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use dialoguer::{Confirm, Input};
use tokio::task;

use crate::error::{Error, Result};

/// Interactive boundary between the menu loop and the user. Core logic only
/// ever reads and writes lines through this type, so it runs against a
/// scripted source in tests.
#[derive(Debug, Clone)]
pub enum Prompt {
    /// Console-based interactive prompts using dialoguer
    Console,
    /// Scripted input with a captured transcript, for tests
    Scripted(Script),
}

/// Queued input lines plus everything the program said back.
#[derive(Debug, Clone, Default)]
pub struct Script {
    input: Arc<Mutex<VecDeque<String>>>,
    output: Arc<Mutex<Vec<String>>>,
}

impl Script {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: Arc::new(Mutex::new(lines.into_iter().map(Into::into).collect())),
            output: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every line the program wrote, in order.
    pub fn transcript(&self) -> Vec<String> {
        self.output.lock().unwrap().clone()
    }

    fn next_line(&self) -> Option<String> {
        self.input.lock().unwrap().pop_front()
    }

    fn record(&self, line: &str) {
        self.output.lock().unwrap().push(line.to_string());
    }
}

impl Prompt {
    pub fn scripted<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Scripted(Script::new(lines))
    }

    /// Read one line of input for `field`.
    pub async fn input(&self, field: &str) -> Result<String> {
        match self {
            Prompt::Console => {
                let prompt = field.to_string();
                let result = task::spawn_blocking(move || {
                    Input::<String>::new()
                        .with_prompt(prompt)
                        .allow_empty(true)
                        .interact_text()
                })
                .await
                .map_err(join_error)?;

                result.map_err(|err| Error::Prompt {
                    message: err.to_string(),
                })
            }
            Prompt::Scripted(script) => script.next_line().ok_or_else(|| Error::Prompt {
                message: format!("script ran out of input at '{field}'"),
            }),
        }
    }

    /// Ask a yes/no question.
    pub async fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        match self {
            Prompt::Console => {
                let prompt = message.to_string();
                let result = task::spawn_blocking(move || {
                    Confirm::new()
                        .with_prompt(prompt)
                        .default(default)
                        .interact()
                })
                .await
                .map_err(join_error)?;

                result.map_err(|err| Error::Prompt {
                    message: err.to_string(),
                })
            }
            Prompt::Scripted(script) => match script.next_line() {
                Some(line) => Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes")),
                None => Ok(default),
            },
        }
    }

    /// Write one line to the user.
    pub fn say(&self, line: &str) {
        match self {
            Prompt::Console => println!("{line}"),
            Prompt::Scripted(script) => script.record(line),
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::Console
    }
}

fn join_error(err: task::JoinError) -> Error {
    Error::Io {
        source: io::Error::other(err.to_string()),
    }
}
