use anyhow::{Context, bail};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use staffdesk_auth::create_session_token;
use staffdesk_cli::report;
use staffdesk_config::JwtConfig;
use staffdesk_core::{Permission, Role};
use staffdesk_models::{ReviewRecord, VacationRequest, VacationStatus};

#[derive(Parser)]
#[command(name = "staffdesk-cli")]
#[command(about = "Staffdesk CLI - Inspect access tables and approval workflows", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "snake_case")]
enum StatusArg {
    Pending,
    ApprovedByChief,
    Approved,
    Rejected,
}

impl From<StatusArg> for VacationStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Pending => VacationStatus::Pending,
            StatusArg::ApprovedByChief => VacationStatus::ApprovedByChief,
            StatusArg::Approved => VacationStatus::Approved,
            StatusArg::Rejected => VacationStatus::Rejected,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the permissions held by a role
    Permissions {
        /// Role slug, e.g. chief_instructor
        role: Role,
    },
    /// List the roles holding a permission
    WhoCan {
        /// Permission name, e.g. APPROVE_AS_CHIEF
        permission: Permission,
    },
    /// Check whether a role may open a dashboard route
    Route {
        /// Role slug (unknown slugs are accepted and denied)
        role: String,
        /// Dashboard path, e.g. /dashboard/vacations
        path: String,
    },
    /// Evaluate the approval workflow for a request snapshot
    Workflow {
        /// Persisted request status
        #[arg(short = 's', long, value_enum)]
        status: StatusArg,

        /// Name recorded for the chief review
        #[arg(long)]
        chief_reviewer: Option<String>,

        /// Comment left by the chief reviewer
        #[arg(long)]
        chief_comment: Option<String>,

        /// Name recorded for the principal review
        #[arg(long)]
        principal_reviewer: Option<String>,

        /// Comment left by the principal
        #[arg(long)]
        principal_comment: Option<String>,

        /// The request skips chief review
        #[arg(long)]
        no_chief: bool,

        /// Also show the review this role may perform
        #[arg(long)]
        viewer: Option<Role>,
    },
    /// Sign a development session token with JWT_SECRET
    IssueToken {
        /// Role slug embedded in the token
        #[arg(short = 'r', long)]
        role: String,

        /// Display name
        #[arg(short = 'n', long)]
        name: String,

        /// Subject (user id); a random UUID when omitted
        #[arg(long)]
        sub: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Permissions { role } => print!("{}", report::render_role_permissions(role)),
        Commands::WhoCan { permission } => {
            print!("{}", report::render_roles_with_permission(permission))
        }
        Commands::Route { role, path } => print!("{}", report::render_route_access(&role, &path)),
        Commands::Workflow {
            status,
            chief_reviewer,
            chief_comment,
            principal_reviewer,
            principal_comment,
            no_chief,
            viewer,
        } => {
            let request = build_request(
                status.into(),
                chief_reviewer,
                chief_comment,
                principal_reviewer,
                principal_comment,
                no_chief,
            )?;
            print!("{}", report::render_workflow(&request, viewer));
        }
        Commands::IssueToken { role, name, sub } => handle_issue_token(&role, &name, sub)?,
    }

    Ok(())
}

fn build_request(
    status: VacationStatus,
    chief_reviewer: Option<String>,
    chief_comment: Option<String>,
    principal_reviewer: Option<String>,
    principal_comment: Option<String>,
    no_chief: bool,
) -> anyhow::Result<VacationRequest> {
    if chief_comment.is_some() && chief_reviewer.is_none() {
        bail!("--chief-comment requires --chief-reviewer");
    }
    if principal_comment.is_some() && principal_reviewer.is_none() {
        bail!("--principal-comment requires --principal-reviewer");
    }

    let mut request = VacationRequest::new(status);
    if no_chief {
        request = request.without_chief();
    }
    if let Some(name) = chief_reviewer {
        request = request.with_chief_review(ReviewRecord::new(name, Utc::now()), chief_comment);
    }
    if let Some(name) = principal_reviewer {
        request =
            request.with_principal_review(ReviewRecord::new(name, Utc::now()), principal_comment);
    }

    Ok(request)
}

fn handle_issue_token(role: &str, name: &str, sub: Option<String>) -> anyhow::Result<()> {
    if role.parse::<Role>().is_err() {
        eprintln!("⚠️  '{role}' is not a known role; the token will authorize nothing");
    }

    let config = JwtConfig::from_env();
    let sub = sub.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let token = create_session_token(&sub, name, role, &config)
        .map_err(|err| err.error)
        .context("failed to sign session token")?;

    println!("{token}");
    Ok(())
}
