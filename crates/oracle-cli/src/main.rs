//! CLI frontend for Inner Oracle.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use commands::Output;

#[derive(Parser)]
#[command(
    name = "oracle",
    about = "Inner Oracle: tarot, runes, I Ching, numerology and shadow work",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print the reading and its interpretation request as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Append an offline interpretation to the reading
    #[arg(short, long, global = true)]
    interpret: bool,

    /// Record the reading in this journal file
    #[arg(long, global = true)]
    record: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a tarot spread from the Major Arcana
    Tarot {
        /// Spread: single, three, five, celtic
        #[arg(short, long, default_value = "three")]
        spread: String,

        /// Question to focus the reading
        #[arg(short, long)]
        question: Option<String>,
    },

    /// Cast Elder Futhark runes
    Runes {
        /// Spread: single, three, five
        #[arg(short, long, default_value = "three")]
        spread: String,

        /// Question to focus the reading
        #[arg(short, long)]
        question: Option<String>,
    },

    /// Cast an I Ching hexagram with three coins
    Iching {
        /// Question to focus the reading
        #[arg(short, long)]
        question: Option<String>,
    },

    /// Compute a numerology profile
    Numerology {
        /// Full name
        name: String,

        /// Birth date (YYYY-MM-DD)
        date: String,
    },

    /// Draw a birth chart
    Chart {
        /// Birth date (YYYY-MM-DD)
        date: String,

        /// Birth time (HH:MM)
        #[arg(short, long)]
        time: Option<String>,

        /// Name for the chart
        #[arg(short, long, default_value = "")]
        name: String,

        /// Birth place
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Show the daily oracle: card, prompt and moon phase
    Daily {
        /// Date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Ask the spirit board a yes-or-no question
    Ouija {
        /// The question
        question: String,
    },

    /// Pick a shadow-work journal prompt
    Prompt {
        /// Limit to one theme
        #[arg(short, long)]
        theme: Option<String>,

        /// List the available themes instead
        #[arg(long)]
        themes: bool,
    },

    /// Look up a symbol's meaning
    Lookup {
        /// Catalog: tarot, runes, hexagrams, zodiac or numerology
        domain: String,

        /// Name of the card, rune, hexagram, sign or number
        name: String,
    },

    /// Write to or read the journal
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },
}

#[derive(Subcommand)]
enum JournalAction {
    /// Answer a shadow-work prompt
    Add {
        /// Journal file
        #[arg(short, long)]
        file: PathBuf,

        /// What you wrote
        #[arg(long)]
        text: String,

        /// The prompt answered (default: a random prompt)
        #[arg(short, long)]
        prompt: Option<String>,

        /// Theme to pick the random prompt from
        #[arg(long)]
        theme: Option<String>,
    },

    /// Record a dream
    Dream {
        /// Journal file
        #[arg(short, long)]
        file: PathBuf,

        /// The dream itself
        #[arg(long)]
        content: String,

        /// Short title
        #[arg(long, default_value = "")]
        title: String,

        /// Peaceful, Anxious, Vivid, Dark, Strange, Joyful, Prophetic or Recurring
        #[arg(short, long, default_value = "Vivid")]
        mood: String,

        /// Symbols noticed
        #[arg(short, long, default_value = "")]
        symbols: String,
    },

    /// Reflect on the daily oracle
    Reflect {
        /// Journal file
        #[arg(short, long)]
        file: PathBuf,

        /// What you wrote
        #[arg(long)]
        text: String,

        /// Date of the oracle (default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Interpret a saved shadow or dream entry and keep the insight
    Interpret {
        /// Journal file
        #[arg(short, long)]
        file: PathBuf,

        /// Entry id, as listed by `journal show`
        id: Uuid,
    },

    /// Show the journal
    Show {
        /// Journal file
        #[arg(short, long)]
        file: PathBuf,

        /// Show a single entry
        #[arg(long)]
        id: Option<Uuid>,

        /// Print markdown instead of a table
        #[arg(short, long)]
        markdown: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let out = Output {
        seed: cli.seed,
        json: cli.json,
        interpret: cli.interpret,
        record: cli.record,
    };

    let result = match cli.command {
        Commands::Tarot { spread, question } => {
            commands::tarot::run(&out, &spread, question.as_deref())
        }
        Commands::Runes { spread, question } => {
            commands::runes::run(&out, &spread, question.as_deref())
        }
        Commands::Iching { question } => commands::iching::run(&out, question.as_deref()),
        Commands::Numerology { name, date } => commands::numerology::run(&out, &name, &date),
        Commands::Chart {
            date,
            time,
            name,
            location,
        } => commands::chart::run(&out, &name, &date, time.as_deref(), location.as_deref()),
        Commands::Daily { date } => commands::daily::run(&out, date.as_deref()),
        Commands::Ouija { question } => commands::ouija::run(&out, &question),
        Commands::Prompt { theme, themes } => commands::prompt::run(&out, theme.as_deref(), themes),
        Commands::Lookup { domain, name } => commands::lookup::run(&out, &domain, &name),
        Commands::Journal { action } => match action {
            JournalAction::Add {
                file,
                text,
                prompt,
                theme,
            } => commands::journal::add(&out, &file, &text, prompt.as_deref(), theme.as_deref()),
            JournalAction::Dream {
                file,
                content,
                title,
                mood,
                symbols,
            } => commands::journal::dream(&out, &file, &title, &content, &mood, &symbols),
            JournalAction::Reflect { file, text, date } => {
                commands::journal::reflect(&file, &text, date.as_deref())
            }
            JournalAction::Interpret { file, id } => commands::journal::interpret(&file, id),
            JournalAction::Show { file, id, markdown } => {
                commands::journal::show(&file, id, markdown)
            }
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
