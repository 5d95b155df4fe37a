use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use forme::config::Greeting;
use forme::input::{FieldInput, ParameterUpdate};
use forme::params::{EXPORT_FILENAME, RenderParameters};
use forme::randomize::randomize;
use forme::render::{self, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, RenderError};
use rand::SeedableRng;
use rand::rngs::StdRng;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {0}")]
    Status(u16),
    #[error("render failed: {0}")]
    Render(#[from] RenderError),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "forme-cli", about = "Render polygon patterns and query the forme service")]
struct Cli {
    #[arg(long, env = "FORME_BASE_URL", default_value = "http://127.0.0.1:8080")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a pattern locally and write it as PNG.
    Render(RenderCommand),
    /// Fetch the greeting from a running service.
    Home {
        #[arg(long, default_value_t = 5)]
        timeout_secs: u64,
    },
}

/// Numeric flags are read like precise text entry: unparseable values fall
/// back to the field default instead of failing.
#[derive(Args, Debug, Default)]
struct RenderCommand {
    #[arg(long)]
    sides: Option<String>,
    #[arg(long)]
    repetitions: Option<String>,
    #[arg(long)]
    rotation: Option<String>,
    #[arg(long)]
    size: Option<String>,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    background: Option<String>,
    #[arg(long, default_value_t = DEFAULT_SURFACE_WIDTH)]
    width: u32,
    #[arg(long, default_value_t = DEFAULT_SURFACE_HEIGHT)]
    height: u32,
    /// Start from random parameters; explicit flags still win.
    #[arg(long)]
    random: bool,
    /// Seed for `--random`, for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = EXPORT_FILENAME)]
    out: PathBuf,
}

impl RenderCommand {
    fn update(&self) -> ParameterUpdate {
        let precise = |raw: &Option<String>| raw.clone().map(FieldInput::Precise);
        ParameterUpdate {
            sides: precise(&self.sides),
            repetitions: precise(&self.repetitions),
            rotation: precise(&self.rotation),
            size: precise(&self.size),
            color: self.color.clone(),
            background_color: self.background.clone(),
        }
    }

    fn params(&self) -> RenderParameters {
        let base = RenderParameters::default();
        let base = if self.random {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            randomize(&base, &mut rng)
        } else {
            base
        };
        self.update().apply(&base)
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(cmd) => run_render(&cmd),
        Command::Home { timeout_secs } => run_home(&cli.base_url, Duration::from_secs(timeout_secs)).await,
    }
}

fn run_render(cmd: &RenderCommand) -> Result<(), CliError> {
    let params = cmd.params();
    let bytes = render::render_png(&params, cmd.width, cmd.height)?;
    std::fs::write(&cmd.out, bytes)?;
    println!("{}", serde_json::to_string(&params)?);
    eprintln!("wrote {}", cmd.out.display());
    Ok(())
}

async fn run_home(base_url: &str, timeout: Duration) -> Result<(), CliError> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let url = format!("{}/api/home", base_url.trim_end_matches('/'));
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Status(status.as_u16()));
    }
    let greeting: Greeting = response.json().await?;
    print!("{}", format_greeting(&greeting));
    Ok(())
}

fn format_greeting(greeting: &Greeting) -> String {
    let mut out = format!("{}\n", greeting.message);
    for person in &greeting.people {
        out.push_str(person);
        out.push('\n');
    }
    out
}
