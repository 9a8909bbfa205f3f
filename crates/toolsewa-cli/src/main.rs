use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "toolsewa")]
#[command(about = "ToolSewa - everyday calculators and document tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all available tools by category
    Tools,
    /// Log in with an email address (mock identity, no password)
    Login { email: String },
    /// Log out and return to anonymous use
    Logout,
    /// Show the current account and usage state
    Status,
    /// Show the activity history (requires login)
    History,
    /// GST calculator
    Gst {
        /// Amount in rupees
        #[arg(long)]
        amount: f64,
        /// GST rate in percent
        #[arg(long, default_value_t = 18.0)]
        rate: f64,
        /// Treat the amount as GST-inclusive and back the tax out
        #[arg(long)]
        inclusive: bool,
    },
    /// In-hand salary calculator (new regime)
    Salary {
        /// Annual CTC in rupees
        #[arg(long)]
        ctc: f64,
    },
    /// Gratuity calculator
    Gratuity {
        /// Monthly basic salary plus DA
        #[arg(long)]
        salary: f64,
        /// Completed years of service
        #[arg(long)]
        years: f64,
    },
    /// EPF maturity projection
    Pf {
        /// Current monthly basic pay
        #[arg(long)]
        basic: f64,
        #[arg(long, default_value_t = 25)]
        age: u32,
        #[arg(long, default_value_t = 58)]
        retire_age: u32,
        /// Annual interest rate in percent
        #[arg(long, default_value_t = 8.15)]
        interest: f64,
        /// Expected annual increment in percent
        #[arg(long, default_value_t = 5.0)]
        increase: f64,
    },
    /// Render a sample GST invoice to stdout
    InvoiceDemo,
    /// Render a sample resume to stdout
    ResumeDemo,
    /// Ask the AI assistant
    Ask { prompt: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "toolsewa=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let app = commands::App::load()?;

    match cli.command {
        Commands::Tools => commands::list_tools(),
        Commands::Login { email } => commands::login(&app, &email)?,
        Commands::Logout => commands::logout(&app)?,
        Commands::Status => commands::status(&app),
        Commands::History => commands::history(&app),
        Commands::Gst {
            amount,
            rate,
            inclusive,
        } => commands::gst(&app, amount, rate, inclusive)?,
        Commands::Salary { ctc } => commands::salary(&app, ctc)?,
        Commands::Gratuity { salary, years } => commands::gratuity(&app, salary, years)?,
        Commands::Pf {
            basic,
            age,
            retire_age,
            interest,
            increase,
        } => commands::provident_fund(&app, basic, age, retire_age, interest, increase)?,
        Commands::InvoiceDemo => commands::invoice_demo(&app)?,
        Commands::ResumeDemo => commands::resume_demo(&app)?,
        Commands::Ask { prompt } => commands::ask(&app, &prompt).await?,
    }

    Ok(())
}
