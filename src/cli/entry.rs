use clap::{Args as ClapArgs, Parser};

use crate::config::{DEFAULT_OUTPUT_DIR, Settings};
use crate::error::Result;
use crate::store::StoreClient;

use super::menu::Menu;
use super::prompts::Prompt;

#[derive(Parser, Debug, Clone)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage an outputs directory and build numeric list reports"
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalOptions,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct GlobalOptions {
    /// Directory holding created files and the results report
    #[arg(long = "output-dir", value_name = "PATH", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: std::path::PathBuf,

    /// Disable the debug-mode console notices
    #[arg(long = "no-debug")]
    pub no_debug: bool,
}

pub async fn run(args: Args) -> Result<()> {
    run_with_prompt(args, None).await
}

pub async fn run_with_prompt(args: Args, prompt: Option<Prompt>) -> Result<()> {
    let prompt = prompt.unwrap_or_default();
    let settings = Settings::from_options(&args.global);
    let client = StoreClient::new(&settings)?;

    Menu::new(client, prompt, settings).run().await
}
