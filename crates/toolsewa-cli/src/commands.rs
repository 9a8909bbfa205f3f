//! Command implementations for the ToolSewa CLI.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;

use toolsewa_application::assistant::AssistantService;
use toolsewa_application::bootstrap::load_session;
use toolsewa_application::documents::DocumentService;
use toolsewa_application::session_usecase::SessionUseCase;
use toolsewa_application::tools::{ToolOutcome, ToolRunner};
use toolsewa_core::catalog::{self, ToolCategory};
use toolsewa_core::document::{
    EducationEntry, ExperienceEntry, Invoice, InvoiceItem, PersonalDetails, Resume,
};
use toolsewa_core::tools::gratuity::GratuityInput;
use toolsewa_core::tools::gst::{GstInput, GstMode};
use toolsewa_core::tools::provident_fund::EpfInput;
use toolsewa_core::tools::salary::SalaryInput;
use toolsewa_core::tools::format_inr;
use toolsewa_infrastructure::{ConfigService, HttpCompletionClient, PlainTextRenderer};

const LOGIN_HINT: &str =
    "Free limit reached. Log in with `toolsewa login <email>` to continue without limits.";

/// The wired application: session handle plus the services built over it.
pub struct App {
    session: Arc<SessionUseCase>,
    runner: ToolRunner,
    documents: DocumentService,
    assistant: AssistantService,
}

impl App {
    /// Loads state from the default location and wires every service.
    pub fn load() -> Result<Self> {
        let session = load_session(None)?;
        let config = ConfigService::new(None)?.load();

        let runner = ToolRunner::new(Arc::clone(&session));
        let documents = DocumentService::new(
            Arc::clone(&session),
            Arc::new(PlainTextRenderer::new()),
        );
        let assistant = AssistantService::new(
            Arc::clone(&session),
            Arc::new(HttpCompletionClient::new(config.completion)),
        );

        Ok(Self {
            session,
            runner,
            documents,
            assistant,
        })
    }
}

/// Prints the tool catalog grouped by category.
pub fn list_tools() {
    for category in ToolCategory::ALL {
        println!("{} ({})", category.label(), category.slug());
        for tool in catalog::tools_in_category(category) {
            let marker = if tool.is_popular { "*" } else { " " };
            println!(
                "  {marker} {} {:<24} {}",
                tool.icon.glyph(),
                tool.name,
                tool.description
            );
        }
        println!();
    }
}

pub fn login(app: &App, email: &str) -> Result<()> {
    let account = app.session.login_with_email(email)?;
    println!("Logged in as {} <{}>", account.display_name, account.email);
    Ok(())
}

pub fn logout(app: &App) -> Result<()> {
    app.session.logout()?;
    println!("Logged out. Anonymous usage counter reset.");
    Ok(())
}

pub fn status(app: &App) {
    match app.session.current_account() {
        Some(account) => {
            println!("Account : {} <{}>", account.display_name, account.email);
            println!("Joined  : {}", account.joined_at.format("%Y-%m-%d"));
            println!("Usage   : unlimited");
        }
        None => {
            println!("Account : anonymous");
            println!("Usage   : {} of 2 free uses consumed", app.session.usage_count());
        }
    }
}

pub fn history(app: &App) {
    if app.session.current_account().is_none() {
        println!("History is only recorded for logged-in users.");
        return;
    }
    let log = app.session.activity();
    if log.is_empty() {
        println!("No activity yet.");
        return;
    }
    for record in log {
        println!(
            "{}  {:<22} {}",
            record.recorded_at.format("%Y-%m-%d %H:%M"),
            record.tool_name,
            record.result_summary
        );
    }
}

pub fn gst(app: &App, amount: f64, rate: f64, inclusive: bool) -> Result<()> {
    let input = GstInput {
        amount,
        rate,
        mode: if inclusive {
            GstMode::Inclusive
        } else {
            GstMode::Exclusive
        },
    };
    match app.runner.run_gst(&input)? {
        ToolOutcome::Completed(breakdown) => {
            println!("Net Amount : ₹ {:.2}", breakdown.net);
            println!("GST ({rate}%) : ₹ {:.2}", breakdown.gst);
            println!("Total      : ₹ {:.2}", breakdown.total);
        }
        ToolOutcome::LoginRequired => println!("{LOGIN_HINT}"),
    }
    Ok(())
}

pub fn salary(app: &App, ctc: f64) -> Result<()> {
    let input = SalaryInput { annual_ctc: ctc };
    match app.runner.run_salary(&input)? {
        ToolOutcome::Completed(breakdown) => {
            println!(
                "Monthly In-Hand : ₹ {}",
                format_inr(breakdown.in_hand_monthly)
            );
            println!("Tax / Year      : ₹ {}", format_inr(breakdown.tax_yearly));
            println!("PF / Year       : ₹ {}", format_inr(breakdown.pf_yearly));
        }
        ToolOutcome::LoginRequired => println!("{LOGIN_HINT}"),
    }
    Ok(())
}

pub fn gratuity(app: &App, salary: f64, years: f64) -> Result<()> {
    let input = GratuityInput {
        monthly_salary: salary,
        years_of_service: years,
    };
    match app.runner.run_gratuity(&input)? {
        ToolOutcome::Completed(result) => {
            println!("Estimated Gratuity Payable: ₹ {}", format_inr(result.amount));
        }
        ToolOutcome::LoginRequired => println!("{LOGIN_HINT}"),
    }
    Ok(())
}

pub fn provident_fund(
    app: &App,
    basic: f64,
    age: u32,
    retire_age: u32,
    interest: f64,
    increase: f64,
) -> Result<()> {
    let input = EpfInput {
        monthly_basic: basic,
        current_age: age,
        retirement_age: retire_age,
        interest_rate: interest,
        annual_increase: increase,
    };
    match app.runner.run_provident_fund(&input)? {
        ToolOutcome::Completed(projection) => {
            println!("Maturity Amount : ₹ {}", format_inr(projection.maturity));
            println!("Employee Share  : ₹ {}", format_inr(projection.employee_share));
            println!("Employer Share  : ₹ {}", format_inr(projection.employer_share));
            println!("Interest Earned : ₹ {}", format_inr(projection.interest_earned));
        }
        ToolOutcome::LoginRequired => println!("{LOGIN_HINT}"),
    }
    Ok(())
}

pub fn invoice_demo(app: &App) -> Result<()> {
    let invoice = Invoice {
        business: "Sharma Traders, Pune\nGSTIN 27AAAAA0000A1Z5".to_string(),
        client: "Acme Pvt Ltd, Mumbai".to_string(),
        invoice_date: Utc::now().date_naive(),
        items: vec![
            InvoiceItem {
                description: "Service Charge".to_string(),
                quantity: 1.0,
                unit_price: 1_000.0,
                gst_rate: 18.0,
            },
            InvoiceItem {
                description: "Consulting".to_string(),
                quantity: 4.0,
                unit_price: 2_500.0,
                gst_rate: 18.0,
            },
        ],
    };
    match app.documents.generate_invoice(&invoice)? {
        ToolOutcome::Completed(bytes) => print!("{}", String::from_utf8_lossy(&bytes)),
        ToolOutcome::LoginRequired => println!("{LOGIN_HINT}"),
    }
    Ok(())
}

pub fn resume_demo(app: &App) -> Result<()> {
    let resume = Resume {
        personal: PersonalDetails {
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "98765 43210".to_string(),
            location: "Pune".to_string(),
            summary: "Backend engineer with five years of experience in billing systems."
                .to_string(),
        },
        education: vec![EducationEntry {
            degree: "B.Tech Computer Science".to_string(),
            college: "COEP".to_string(),
            year: "2019".to_string(),
        }],
        experience: vec![ExperienceEntry {
            role: "Software Engineer".to_string(),
            company: "Acme".to_string(),
            duration: "2019-2024".to_string(),
            details: "Built GST billing and reconciliation services.".to_string(),
        }],
        skills: "Rust, SQL, Docker".to_string(),
    };
    match app.documents.generate_resume(&resume)? {
        ToolOutcome::Completed(bytes) => print!("{}", String::from_utf8_lossy(&bytes)),
        ToolOutcome::LoginRequired => println!("{LOGIN_HINT}"),
    }
    Ok(())
}

pub async fn ask(app: &App, prompt: &str) -> Result<()> {
    match app.assistant.ask(prompt).await? {
        ToolOutcome::Completed(reply) => println!("{reply}"),
        ToolOutcome::LoginRequired => println!("{LOGIN_HINT}"),
    }
    Ok(())
}
