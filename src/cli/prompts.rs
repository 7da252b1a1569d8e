//! `prompts` command: print the prompt catalogue grouped by category

use crate::prompts::{self, CATEGORIES};
use crate::Result;
use colored::Colorize;

pub fn run() -> Result<()> {
    println!("{}", "📝 Available prompts:".green().bold());

    for category in CATEGORIES {
        println!(
            "\n{} {}",
            category.title.bold(),
            format!("- {}", category.description).dimmed()
        );

        for prompt in prompts::in_category(category.key) {
            println!("\n   {} {}", prompt.path().cyan(), format!("({})", prompt.title).dimmed());
            println!("     {}", prompt.description);
            for arg in prompt.arguments {
                let marker = if arg.required {
                    "required".red().to_string()
                } else {
                    format!("default: {}", arg.default).dimmed().to_string()
                };
                println!("     - {}: {} [{}]", arg.name.yellow(), arg.description, marker);
            }
        }
    }
    Ok(())
}
