//! Treasure hunt reviewer CLI

mod storage;

use clap::{Parser, Subcommand};
use hunt_review_core::assignment::{toggle_assignment, AssignmentOutcome, REJECTED_MESSAGE};
use hunt_review_core::auth::{self, LOGIN_FALLBACK_MESSAGE};
use hunt_review_core::dashboard::{self, load_dashboard};
use hunt_review_core::hunt_detail::{self, load_hunt_detail, resolve_comment, submit_comment};
use hunt_review_core::models::{Credentials, TestCase};
use hunt_review_core::{
    ClientConfig, ClientError, ClientResult, HttpReviewApi, Hunt, HuntId, SessionStore,
};
use std::path::PathBuf;
use storage::FileStorage;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

type Api = HttpReviewApi<FileStorage>;

const GENERIC_FAILURE: &str = "Request failed. Please try again later.";

#[derive(Parser)]
#[command(name = "hunt-review")]
#[command(about = "Review treasure hunts from the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL
    #[arg(long, global = true, env = "HUNT_API_BASE_URL")]
    api_url: Option<String>,

    /// Where session tokens are kept between runs
    #[arg(
        long,
        global = true,
        env = "HUNT_REVIEW_SESSION",
        default_value = ".hunt-review-session.json"
    )]
    session_file: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session tokens
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Show the backend URL and whether a session is stored
    Status,

    /// List available and assigned hunts
    Hunts,

    /// Toggle your assignment on a hunt
    Assign { hunt_id: HuntId },

    /// Show a hunt with its challenges and comments
    Show { hunt_id: HuntId },

    /// Leave a comment on a hunt
    Comment { hunt_id: HuntId, text: String },

    /// Resolve (delete) a comment
    Resolve { comment_id: i64 },
}

impl Commands {
    /// Message shown when the backend gives none
    fn fallback(&self) -> &'static str {
        match self {
            Commands::Login { .. } => LOGIN_FALLBACK_MESSAGE,
            Commands::Hunts => dashboard::FETCH_FAILED_MESSAGE,
            Commands::Show { .. } => hunt_detail::FETCH_FAILED_MESSAGE,
            Commands::Assign { .. } => REJECTED_MESSAGE,
            _ => GENERIC_FAILURE,
        }
    }

    fn needs_session(&self) -> bool {
        !matches!(self, Commands::Login { .. } | Commands::Logout | Commands::Status)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = log_level(cli.verbose);
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str())),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set subscriber: {}", e);
    }

    let config = match cli.api_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::default(),
    };
    let session = SessionStore::new(FileStorage::new(cli.session_file));
    let api = HttpReviewApi::new(config, session);

    if cli.command.needs_session() && !api.session().is_authenticated() {
        eprintln!("Not signed in. Run `hunt-review login` first.");
        std::process::exit(1);
    }

    let fallback = cli.command.fallback();
    if let Err(e) = run(&api, cli.command).await {
        eprintln!("{}", e.user_message(fallback));
        std::process::exit(1);
    }
}

fn log_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

async fn run(api: &Api, command: Commands) -> ClientResult<()> {
    match command {
        Commands::Login { email, password } => cmd_login(api, Credentials { email, password }).await,
        Commands::Logout => {
            api.session().logout()?;
            println!("Signed out");
            Ok(())
        }
        Commands::Status => {
            cmd_status(api);
            Ok(())
        }
        Commands::Hunts => cmd_hunts(api).await,
        Commands::Assign { hunt_id } => cmd_assign(api, hunt_id).await,
        Commands::Show { hunt_id } => cmd_show(api, hunt_id).await,
        Commands::Comment { hunt_id, text } => {
            match submit_comment(api, hunt_id, &text).await? {
                Some(comment) => println!("Comment #{} added to hunt #{}", comment.id, hunt_id),
                None => println!("Nothing to submit: the comment is blank"),
            }
            Ok(())
        }
        Commands::Resolve { comment_id } => {
            resolve_comment(api, comment_id).await?;
            println!("Comment #{} resolved", comment_id);
            Ok(())
        }
    }
}

async fn cmd_login(api: &Api, credentials: Credentials) -> ClientResult<()> {
    let response = auth::login(api, api.session(), &credentials).await?;
    let user = response.data.first().map(|u| u.username.as_str()).unwrap_or_default();
    println!("Signed in as {}", user);
    tracing::info!("session stored in {}", api.session().storage().path().display());
    Ok(())
}

fn cmd_status(api: &Api) {
    println!("API:     {}", api.config().api_base_url);
    println!("Session: {}", api.session().storage().path().display());
    if api.session().is_authenticated() {
        println!("Status:  signed in");
    } else {
        println!("Status:  signed out");
    }
}

async fn cmd_hunts(api: &Api) -> ClientResult<()> {
    let data = load_dashboard(api).await?;

    print_column("Available", &data.available, "No available hunts found.");
    println!();
    print_column("Assigned", &data.assigned, "No assigned hunts found.");
    Ok(())
}

fn print_column(title: &str, hunts: &[Hunt], empty: &str) {
    println!("{}\n{}", title, "=".repeat(50));
    if hunts.is_empty() {
        println!("{}", empty);
    }
    for hunt in hunts {
        println!("{}", hunt_line(hunt));
    }
}

fn hunt_line(hunt: &Hunt) -> String {
    format!(
        "#{:<6} {:<32} {:<14} {}",
        hunt.id,
        hunt.title,
        hunt.status,
        hunt.reviewer_label()
    )
}

async fn cmd_assign(api: &Api, hunt_id: HuntId) -> ClientResult<()> {
    assignment_result(toggle_assignment(api, hunt_id).await?)?;
    println!("Assignment toggled for hunt #{}", hunt_id);
    Ok(())
}

/// A rejected toggle fails the command like any other non-2xx answer
fn assignment_result(outcome: AssignmentOutcome) -> ClientResult<()> {
    match outcome {
        AssignmentOutcome::Toggled => Ok(()),
        AssignmentOutcome::Rejected { status } => Err(ClientError::Status {
            status,
            message: None,
        }),
    }
}

async fn cmd_show(api: &Api, hunt_id: HuntId) -> ClientResult<()> {
    let detail = load_hunt_detail(api, hunt_id).await?;
    let hunt = &detail.hunt;

    println!("\n{}\n{}", hunt.title, "=".repeat(50));
    println!("ID:        {}", hunt.id);
    println!("Status:    {}", hunt.status);
    println!("Organizer: {}", detail.organizer.email);
    println!("Reviewer:  {}", hunt.reviewer_label());
    println!("Start:     {}", hunt.start_label());
    println!("End:       {}", hunt.end_label());
    if let Some(location) = hunt.location {
        println!("Location:  {}", location.label());
    }
    println!("\n{}", hunt.description);

    println!("\nChallenges\n{}", "-".repeat(50));
    if detail.challenges.is_empty() {
        println!("No challenges found for this hunt.");
    }
    for challenge in &detail.challenges {
        println!("\n{} ({})", challenge.title, challenge.summary());
        println!("  {}", challenge.description);
        if let Some(uri) = &challenge.external_game_uri {
            println!("  Game: {}", uri);
        }
        if !challenge.test_cases.is_empty() {
            println!("  {:<20} {:<20} {}", "Input", "Expected Output", "Order");
        }
        for case in &challenge.test_cases {
            println!("  {}", test_case_line(case));
        }
        for code in &challenge.challenge_codes {
            println!("  Challenge code ({}):\n{}", code.language, indent(&code.code));
        }
        for solution in &challenge.optimal_solutions {
            println!("  Optimal solution ({}):\n{}", solution.language, indent(&solution.code));
        }
    }

    println!("\nComments\n{}", "-".repeat(50));
    if detail.comments.is_empty() {
        println!("No comments yet.");
    }
    for comment in detail.comments.comments() {
        println!("#{:<6} {}", comment.id, comment.content);
    }
    Ok(())
}

fn test_case_line(case: &TestCase) -> String {
    format!("{:<20} {:<20} {}", case.input, case.expected_output, case.order)
}

fn indent(code: &str) -> String {
    code.lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
