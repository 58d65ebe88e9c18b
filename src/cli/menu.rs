use crate::config::Settings;
use crate::error::{Error, Result};
use crate::report;
use crate::store::StoreClient;
use crate::utils::{normalize_extension, split_name};

use super::prompts::Prompt;

const DEFAULT_EXTENSION: &str = ".txt";

/// Menu controller: loops over the textual menu and dispatches to the store
/// operations and the report builder until the user exits.
pub struct Menu {
    client: StoreClient,
    prompt: Prompt,
    settings: Settings,
    /// One-shot flag so the debug notice prints at most once per process.
    debug_notified: bool,
}

impl Menu {
    pub fn new(client: StoreClient, prompt: Prompt, settings: Settings) -> Self {
        Self {
            client,
            prompt,
            settings,
            debug_notified: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.prompt.say("");
            self.prompt.say("Menu:");
            self.prompt.say("1. Delete a file");
            self.prompt.say("2. Create a new file");
            self.prompt.say("3. Perform list operations");
            self.prompt.say("4. Exit");

            let choice = self.prompt.input("Enter your choice").await?;
            match choice.trim() {
                "1" => {
                    let result = self.delete_file().await;
                    self.report_outcome(result)?;
                }
                "2" => {
                    let result = self.create_file().await;
                    self.report_outcome(result)?;
                }
                "3" => {
                    self.notify_debug();
                    let result =
                        report::run_report(&self.client, &self.prompt, &self.settings).await;
                    self.report_outcome(result)?;
                }
                "4" => {
                    self.prompt.say("Goodbye!");
                    return Ok(());
                }
                _ => self.prompt.say("Invalid choice. Please try again."),
            }
        }
    }

    /// Operation errors are printed and the loop continues; only prompt
    /// plumbing failures take the menu down.
    fn report_outcome(&self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(e @ Error::Prompt { .. }) => Err(e),
            Err(e) => {
                self.prompt.say(&format!("{e}"));
                Ok(())
            }
        }
    }

    fn notify_debug(&mut self) {
        if !self.debug_notified {
            if self.settings.debug {
                self.prompt.say("[DEBUG]: Debug mode is enabled.");
            }
            self.debug_notified = true;
        }
    }

    async fn delete_file(&self) -> Result<()> {
        let files = self.client.list_files().await?;
        if files.is_empty() {
            self.prompt.say(&format!(
                "No files in the '{}' directory.",
                self.settings.dir_name()
            ));
            return Ok(());
        }

        self.prompt.say("Files in the current directory:");
        for (idx, name) in files.iter().enumerate() {
            self.prompt.say(&format!("{}. {}", idx + 1, name));
        }

        let raw = self
            .prompt
            .input("Enter the number of the file you want to delete")
            .await?;
        // Negative and zero selections parse fine but are out of range.
        let Ok(choice) = raw.trim().parse::<i64>() else {
            self.prompt.say("Please enter a valid number.");
            return Ok(());
        };
        if choice < 1 || choice as usize > files.len() {
            self.prompt.say("Invalid choice.");
            return Ok(());
        }

        let name = &files[choice as usize - 1];
        self.client.delete_file(name).await?;
        self.prompt.say(&format!("File '{name}' has been deleted."));
        Ok(())
    }

    async fn create_file(&self) -> Result<()> {
        self.client.ensure_root().await?;

        loop {
            let requested = self
                .prompt
                .input("Enter the name of the new file (with or without desired extension)")
                .await?;
            let requested = requested.trim();
            if requested.is_empty() {
                self.prompt.say("File name cannot be empty.");
                continue;
            }

            let (base, ext) = split_name(requested);
            let ext = if ext.is_empty() {
                self.prompt.say(&format!(
                    "No extension provided. Defaulting to '{base}{DEFAULT_EXTENSION}'."
                ));
                let keep = self
                    .prompt
                    .confirm(
                        &format!("Do you want to save it as '{base}{DEFAULT_EXTENSION}'?"),
                        true,
                    )
                    .await?;
                if keep {
                    DEFAULT_EXTENSION.to_string()
                } else {
                    let wanted = self
                        .prompt
                        .input("Enter the desired extension (e.g., '.log', '.csv')")
                        .await?;
                    normalize_extension(&wanted)
                }
            } else {
                ext.to_string()
            };

            let name = format!("{base}{ext}");
            match self.client.create_file(&name).await {
                Ok(()) => {
                    self.prompt.say(&format!("File '{name}' has been created."));
                    return Ok(());
                }
                Err(Error::FileExists { .. }) => {
                    self.prompt.say(&format!(
                        "A file with the name '{name}' already exists. Please choose another name."
                    ));
                }
                Err(e) => return Err(e),
            }
        }
    }
}
