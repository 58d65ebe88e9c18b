pub mod entry;
pub mod menu;
pub mod prompts;

pub use entry::{Args, GlobalOptions, run, run_with_prompt};
pub use menu::Menu;
pub use prompts::{Prompt, Script};
