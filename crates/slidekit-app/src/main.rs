//! Slidekit showcase entry point (native).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use slidekit_app::{render_story, ShowcaseApp};
use slidekit_core::{SliderResult, StoryBook};

#[derive(Parser)]
#[command(name = "slidekit", about = "Slidekit slider showcase")]
struct Cli {
    /// Load stories from a JSON file instead of the built-in presets.
    #[arg(long)]
    stories: Option<PathBuf>,

    /// Print the named story's markup as HTML and exit.
    #[arg(long, value_name = "STORY")]
    render: Option<String>,
}

fn load_book(path: Option<&PathBuf>) -> SliderResult<StoryBook> {
    match path {
        Some(path) => StoryBook::load(path),
        None => Ok(StoryBook::builtin()),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let book = match load_book(cli.stories.as_ref()) {
        Ok(book) => book,
        Err(e) => {
            log::error!("Failed to load stories: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(name) = cli.render {
        return match render_story(&book, &name) {
            Ok(html) => {
                println!("{html}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{}", e);
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    log::info!("Starting Slidekit showcase with {} stories", book.len());
    match ShowcaseApp::new(book).run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Showcase exited with error: {}", e);
            ExitCode::FAILURE
        }
    }
}
