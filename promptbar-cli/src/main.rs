mod config;
mod constants;

use crate::config::{get_storage, load_config, resolve_model};
use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use promptbar_core::file_storage::FileStorage;
use promptbar_core::gate::{InitializationGate, SeedingState};
use promptbar_core::model::Model;
use promptbar_core::prompt::Prompt;
use promptbar_core::promptbar::Promptbar;
use promptbar_core::seeding::SeedOutcome;
use std::collections::HashMap;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version,
display_name = "promptbar",
bin_name = "promptbar",
about = "Keep and reuse chat prompts from the terminal",
long_about = "Keep and reuse chat prompts from the terminal. \
Built-in prompts are added the first time promptbar runs.")]
struct Args {
    #[arg(short = 'p', long)]
    storage_path: Option<String>,

    /// Model bound to new prompts, e.g. gpt-4. Defaults to the configured model.
    #[arg(short = 'm', long)]
    model: Option<String>,

    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Runs first-start seeding and reports whether it happened.
    Init,
    /// Adds any missing built-in prompts.
    AddDefaults,
    List {
        #[arg(short = 's', long)]
        search: Option<String>,
        #[arg(short = 'u', long)]
        unfiled: bool,
    },
    New,
    Edit {
        #[arg(short = 'i', long)]
        id: String,
        #[arg(short = 'n', long)]
        name: Option<String>,
        #[arg(short = 'd', long)]
        description: Option<String>,
        #[arg(short = 'c', long)]
        content: Option<String>,
    },
    Delete {
        #[arg(short = 'i', long)]
        id: String,
    },
    /// Moves a prompt into a folder, or out of its folder when `--folder` is omitted.
    Move {
        #[arg(short = 'i', long)]
        id: String,
        #[arg(short = 'f', long)]
        folder: Option<String>,
    },
    Render {
        #[arg(short = 'i', long)]
        id: String,
        /// Variable values as `name=value`.
        #[arg(short = 'a', long)]
        args: Vec<String>,
        #[arg(short = 'c', long)]
        copy: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "error,promptbar=debug,promptbar_core=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    let config = load_config();
    let storage = get_storage(&config, args.storage_path);
    let model = resolve_model(&config, args.model)?;
    debug!(
        path = %storage.base_path.display(),
        model = ?model.as_ref().map(|m| m.id),
        "starting"
    );

    let Startup { mut promptbar, state, seeded } = startup(storage, model)?;

    match args.cmd {
        Commands::Init => println!("{}", init_message(state, seeded.as_ref())),
        cmd => {
            if let Some(outcome) = seeded {
                eprintln!("{}", outcome.message());
            }
            run(&mut promptbar, cmd)?;
        }
    }

    Ok(())
}

struct Startup {
    promptbar: Promptbar<FileStorage>,
    state: SeedingState,
    seeded: Option<SeedOutcome>,
}

/// Reads the gate once, loads the prompts, then runs first-start seeding.
fn startup(storage: FileStorage, model: Option<Model>) -> anyhow::Result<Startup> {
    let state = SeedingState::load(&InitializationGate::new(&storage))
        .context("failed to read the initialization flag")?;
    let mut promptbar = Promptbar::open(storage, model).context("failed to load prompts")?;
    let seeded = promptbar.initialize(state)?;

    Ok(Startup { promptbar, state, seeded })
}

fn init_message(state: SeedingState, seeded: Option<&SeedOutcome>) -> String {
    match seeded {
        Some(outcome) => outcome.message(),
        None if state.has_run => "Already initialized".to_string(),
        None => "No default model configured, default prompts were not added".to_string(),
    }
}

fn run(promptbar: &mut Promptbar<FileStorage>, cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Init => {}
        Commands::AddDefaults => match promptbar.add_default_prompts()? {
            Some(outcome) => println!("{}", outcome.message()),
            None => bail!("no default model configured"),
        },
        Commands::List { search, unfiled } => {
            promptbar.set_search_term(search.unwrap_or_default());
            let prompts = if unfiled {
                promptbar.unfiled_prompts()
            } else {
                promptbar.filtered_prompts()
            };
            for prompt in prompts {
                print_prompt(prompt);
            }
        }
        Commands::New => match promptbar.create_prompt()? {
            Some(prompt) => println!("{}", prompt.id),
            None => bail!("no default model configured"),
        },
        Commands::Edit { id, name, description, content } => {
            let mut prompt = find(promptbar, &id)?;
            if let Some(name) = name {
                prompt.name = name;
            }
            if let Some(description) = description {
                prompt.description = description;
            }
            if let Some(content) = content {
                prompt.content = content;
            }
            promptbar.update_prompt(prompt)?;
        }
        Commands::Delete { id } => {
            if !promptbar.delete_prompt(&id)? {
                bail!("prompt '{}' not found", id);
            }
        }
        Commands::Move { id, folder } => {
            if !promptbar.move_to_folder(&id, folder)? {
                bail!("prompt '{}' not found", id);
            }
        }
        Commands::Render { id, args, copy } => {
            let prompt = find(promptbar, &id)?;
            let values = parse_variables(&args)?;
            let rendered = prompt.template()?.render(&values)?;

            if copy {
                let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
                clipboard.set_text(rendered).context("failed to copy to clipboard")?;
            } else {
                println!("{}", rendered);
            }
        }
    }

    Ok(())
}

fn find(promptbar: &Promptbar<FileStorage>, id: &str) -> anyhow::Result<Prompt> {
    promptbar
        .get(id)
        .cloned()
        .with_context(|| format!("prompt '{}' not found", id))
}

fn print_prompt(prompt: &Prompt) {
    match &prompt.folder_id {
        Some(folder) => println!("{}\t{}\t[{}]", prompt.id, prompt.name, folder),
        None => println!("{}\t{}", prompt.id, prompt.name),
    }
}

fn parse_variables(args: &[String]) -> anyhow::Result<HashMap<String, String>> {
    args.iter()
        .map(|arg| match arg.split_once('=') {
            Some((name, value)) => Ok((name.trim().to_string(), value.to_string())),
            None => bail!("expected name=value, got '{}'", arg),
        })
        .collect()
}
