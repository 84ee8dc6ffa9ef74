use biorhythm_core::*;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "biorhythm")]
#[command(about = "Biorhythm calendar assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the assistant over stdin/stdout (default)
    Chat {
        /// User identity for this conversation
        #[arg(long)]
        user: Option<String>,

        /// Name used in the greeting
        #[arg(long)]
        name: Option<String>,
    },

    /// Print a single reading without a conversation
    Compute {
        /// Birth date (DD.MM.YYYY or YYYY-MM-DD)
        #[arg(long)]
        birth: String,

        /// Target date (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date_arg)]
        on: Option<NaiveDate>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_date_arg(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_query_date(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize logging
    biorhythm_core::logging::init_with_level(&config.logging.level);

    let clock = match cli.today {
        Some(date) => {
            tracing::debug!(%date, "Using fixed clock");
            HostClock::Fixed(FixedClock::new(date))
        }
        None => HostClock::System(SystemClock),
    };

    match cli.command {
        Some(Commands::Chat { user, name }) => cmd_chat(&config, clock, user, name),
        Some(Commands::Compute { birth, on, json }) => cmd_compute(&clock, &birth, on, json),
        None => cmd_chat(&config, clock, None, None),
    }
}

/// Either the wall clock or a date pinned with `--today`
enum HostClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for HostClock {
    fn today(&self) -> NaiveDate {
        match self {
            HostClock::System(c) => c.today(),
            HostClock::Fixed(c) => c.today(),
        }
    }
}

/// Prints each reply followed by a blank line
struct StdoutTransport<W: Write> {
    out: W,
}

impl<W: Write> Transport for StdoutTransport<W> {
    fn send_text(&mut self, _user: &UserId, text: &str) -> Result<()> {
        writeln!(self.out, "{}\n", text)?;
        self.out.flush()?;
        Ok(())
    }
}

fn cmd_chat(
    config: &Config,
    clock: HostClock,
    user: Option<String>,
    name: Option<String>,
) -> Result<()> {
    let user = UserId::new(user.unwrap_or_else(|| config.chat.user_id.clone()));
    let mut assistant = Assistant::new(
        InMemorySessionStore::new(),
        clock,
        config.chat.default_name.clone(),
    );
    let mut transport = StdoutTransport {
        out: io::stdout().lock(),
    };

    tracing::info!(user = %user, "Chat session started");

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(event) = parse_message(&line) else {
            continue;
        };

        // The terminal has no profile, so the greeting name comes from --name
        let event = match event {
            Event::Start { display_name: None } => Event::Start {
                display_name: name.clone(),
            },
            other => other,
        };

        assistant.dispatch(&user, event, &mut transport);
    }

    tracing::info!(user = %user, "Chat session ended");
    Ok(())
}

fn cmd_compute(clock: &HostClock, birth: &str, on: Option<NaiveDate>, json: bool) -> Result<()> {
    let birth = parse_birth_date(birth)?;
    let target = on.unwrap_or_else(|| clock.today());
    let reading = compute(birth, target)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else {
        println!("{}", render(target, &reading));
    }

    Ok(())
}
