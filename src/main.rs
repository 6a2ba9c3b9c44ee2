//! RSVP Board entry point
//!
//! The browser build is driven from JavaScript through `rsvp_board::web`.
//! Natively this is a small command-line front end over file-backed slots.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::io::{self, BufRead, Write};
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::{Parser, Subcommand};

    use rsvp_board::persistence::FileStorage;
    use rsvp_board::{Board, BoardConfig, Status};

    /// Track RSVPs across Yes / Maybe / No / No Response
    #[derive(Parser)]
    #[command(name = "rsvp-board")]
    #[command(about = "Track RSVPs across Yes / Maybe / No / No Response")]
    struct Cli {
        /// Directory holding the board and snapshot slots
        #[arg(long, default_value = ".rsvp-board")]
        data_dir: PathBuf,

        /// JSON board configuration
        #[arg(long)]
        config: Option<PathBuf>,

        /// Skip confirmation prompts
        #[arg(short, long, global = true)]
        yes: bool,

        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// Print the board and counts
        Show,
        /// Add a name to No Response
        Add { name: String },
        /// Move a name between columns
        Move {
            name: String,
            #[arg(value_parser = parse_status)]
            from: Status,
            #[arg(value_parser = parse_status)]
            to: Status,
        },
        /// Rename a name in place
        Rename {
            old: String,
            #[arg(value_parser = parse_status)]
            status: Status,
            new: String,
        },
        /// Remove a name from a column
        Remove {
            name: String,
            #[arg(value_parser = parse_status)]
            status: Status,
        },
        /// Replace the board with the example list
        Reset,
        /// Remove every name
        Clear,
        /// Write the board as CSV
        Export {
            /// Output file (stdout if omitted)
            #[arg(short, long)]
            out: Option<PathBuf>,
        },
        /// Replace the board from a CSV file
        Import { file: PathBuf },
        /// Save the board as the snapshot
        Save,
        /// Replace the board with the snapshot
        Load,
    }

    fn parse_status(s: &str) -> std::result::Result<Status, String> {
        Status::from_label(s).ok_or_else(|| {
            let valid: Vec<_> = Status::ALL.iter().map(|s| format!("\"{s}\"")).collect();
            format!("expected one of {}", valid.join(", "))
        })
    }

    fn confirm(skip: bool, prompt: &str) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        print!("{prompt} [y/N] ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
    }

    fn show(board: &Board<FileStorage>) {
        let metrics = board.metrics();
        println!("{} attendees", metrics.unique_count);
        for status in Status::ALL {
            let names = board.roster().list(status);
            println!("{} ({}): {}", status, metrics.count(status), names.join(", "));
        }
        println!("Total: {}", metrics.total);
    }

    pub fn run() -> Result<()> {
        let cli = Cli::parse();

        let config = match &cli.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                BoardConfig::from_json(&json)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => BoardConfig::default(),
        };
        let mut board = Board::open(FileStorage::new(&cli.data_dir), config);

        match cli.command {
            Commands::Show => {}
            Commands::Add { name } => {
                board.add(&name)?;
            }
            Commands::Move { name, from, to } => {
                board.move_name(&name, from, to);
            }
            Commands::Rename { old, status, new } => {
                board.rename(&old, status, &new)?;
            }
            Commands::Remove { name, status } => {
                if confirm(cli.yes, &format!("Remove \"{name}\" from the board?"))? {
                    board.remove(&name, status);
                }
            }
            Commands::Reset => {
                board.reset();
            }
            Commands::Clear => {
                if confirm(cli.yes, "Clear all names from the board?")? {
                    board.clear();
                }
            }
            Commands::Export { out } => {
                let csv = board.export_csv()?;
                match out {
                    Some(path) => {
                        std::fs::write(&path, csv)
                            .with_context(|| format!("writing {}", path.display()))?;
                        log::info!("Exported to {}", path.display());
                    }
                    None => println!("{csv}"),
                }
                return Ok(());
            }
            Commands::Import { file } => {
                let bytes = std::fs::read(&file)
                    .with_context(|| format!("reading {}", file.display()))?;
                let pending = board.stage_import_bytes(&bytes)?;
                let prompt = format!(
                    "Import {} names? This will replace all current names.",
                    pending.metrics().total
                );
                if confirm(cli.yes, &prompt)? {
                    board.commit_import(pending);
                }
            }
            Commands::Save => {
                let prompt =
                    "Save current board state? This will overwrite any previously saved state.";
                if confirm(cli.yes, prompt)? {
                    board.save_snapshot();
                    println!("Board state saved successfully!");
                }
            }
            Commands::Load => {
                if confirm(cli.yes, "Load saved state? This will replace all current names.")? {
                    board.load_snapshot();
                }
            }
        }

        show(&board);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is rsvp_board::web::start, this is just to satisfy the compiler
}
