mod api;
mod render;
mod watch;


use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use schema::bulk::{BulkUploadForm, is_spreadsheet};
use schema::lead::{CloseConversationRequest, ConversationOutcome};
use schema::validate::{FormMode, LeadForm, validate_category, validate_follow_up, validate_login, validate_register};
use schema::{ApiError, AssignLeadsRequest, FormErrors, LeadFilter, LeadStatus, ParseError, Priority, Role};
use schema::filter::{AssignmentFilter, WorkerFilter};
use time::Date;

use crate::api::{ApiClient, Upload};
use crate::watch::LeadDelta;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid cookie header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("{0}")]
    Invalid(String),
    #[error("failed to read {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("login succeeded but the response set no session cookie")]
    MissingSessionCookie,
}

impl From<FormErrors> for CliError {
    fn from(errors: FormErrors) -> Self {
        let joined: Vec<String> = errors.iter().map(|(field, message)| format!("{field}: {message}")).collect();
        Self::Invalid(joined.join("; "))
    }
}

#[derive(Parser, Debug)]
#[command(name = "leadflow", about = "LeadFlow lead-management CLI")]
struct Cli {
    #[arg(long, env = "LEADFLOW_API_BASE_URL", default_value = schema::endpoints::DEFAULT_API_BASE_URL)]
    base_url: String,

    /// Cookie header printed by `leadflow login`.
    #[arg(long, env = "LEADFLOW_COOKIE", hide_env_values = true)]
    cookie: Option<String>,

    /// Print raw JSON instead of tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print the cookie to export as `LEADFLOW_COOKIE`.
    Login {
        #[arg(long, default_value = "manager")]
        role: Role,
        #[arg(long)]
        email: String,
        #[arg(long, env = "LEADFLOW_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Register a worker account.
    Register {
        #[arg(long)]
        email: String,
        #[arg(long, env = "LEADFLOW_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        avatar: String,
    },
    Whoami,
    Leads(LeadsCommand),
    Categories(CategoriesCommand),
    Workers(WorkersCommand),
}

#[derive(Args, Debug)]
struct LeadsCommand {
    #[command(subcommand)]
    command: LeadsSubcommand,
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    /// Match name, position, or email.
    #[arg(long)]
    search: Option<String>,
    /// `all`, `assigned`, or `unassigned`.
    #[arg(long, value_parser = parse_assignment)]
    assignment: Option<AssignmentFilter>,
    /// Assignee display name.
    #[arg(long)]
    worker: Option<String>,
    /// Latest follow-up on this date (`YYYY-MM-DD`).
    #[arg(long, value_parser = parse_date)]
    follow_up_on: Option<Date>,
}

impl FilterArgs {
    fn to_filter(&self) -> LeadFilter {
        let mut filter = LeadFilter {
            search: self.search.clone().unwrap_or_default(),
            worker: self.worker.as_deref().map_or(WorkerFilter::All, WorkerFilter::from_choice),
            follow_up_on: self.follow_up_on,
            ..LeadFilter::default()
        };
        if let Some(assignment) = self.assignment {
            filter.set_assignment(assignment);
        }
        filter
    }
}

/// Lead fields shared by `create` and `update`. Unset flags keep the current value.
#[derive(Args, Debug, Default)]
struct LeadFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    /// Category id.
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    position: Option<String>,
    #[arg(long)]
    source: Option<String>,
    #[arg(long)]
    notes: Option<String>,
    #[arg(long)]
    priority: Option<Priority>,
    #[arg(long)]
    status: Option<LeadStatus>,
    /// Attachment (pdf, doc, docx, xls, xlsx; at most 5 MB).
    #[arg(long)]
    document: Option<String>,
}

impl LeadFields {
    fn apply(&self, form: &mut LeadForm) {
        let text = [
            (&self.name, &mut form.name),
            (&self.email, &mut form.email),
            (&self.phone, &mut form.phone),
            (&self.category, &mut form.category),
            (&self.position, &mut form.position),
            (&self.source, &mut form.lead_source),
            (&self.notes, &mut form.notes),
        ];
        for (value, slot) in text {
            if let Some(value) = value {
                slot.clone_from(value);
            }
        }
        if let Some(priority) = self.priority {
            form.priority = priority;
        }
        if let Some(status) = self.status {
            form.status = status;
        }
    }

    async fn document(&self) -> Result<Option<Upload>, CliError> {
        match &self.document {
            Some(path) => Ok(Some(Upload::read(path).await?)),
            None => Ok(None),
        }
    }
}

#[derive(Subcommand, Debug)]
enum LeadsSubcommand {
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[command(flatten)]
        filter: FilterArgs,
    },
    Get {
        id: String,
    },
    Create {
        #[command(flatten)]
        fields: LeadFields,
    },
    Update {
        id: String,
        #[command(flatten)]
        fields: LeadFields,
        #[arg(long, value_parser = parse_date)]
        last_contact: Option<Date>,
        /// Comma-separated `YYYY-MM-DD` list replacing the scheduled follow-ups.
        #[arg(long)]
        follow_up_dates: Option<String>,
    },
    Delete {
        id: String,
    },
    /// Schedule the next follow-up (worker only).
    FollowUp {
        id: String,
        #[arg(long)]
        date: String,
        #[arg(long)]
        conclusion: String,
    },
    /// End the conversation (worker only).
    Close {
        id: String,
        #[arg(long)]
        outcome: ConversationOutcome,
        #[arg(long)]
        conclusion: String,
    },
    /// Re-fetch a page on an interval and print changes.
    Watch {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = schema::REFRESH_INTERVAL.as_secs())]
        interval_secs: u64,
        /// Stop after this many polls.
        #[arg(long)]
        polls: Option<u32>,
    },
    /// Import an `.xlsx` spreadsheet.
    BulkUpload {
        file: String,
        /// Default category id.
        #[arg(long)]
        category: String,
        /// Worker id to assign every imported lead to.
        #[arg(long)]
        assign_to: Option<String>,
    },
    /// Assign leads of a category to a worker.
    Assign {
        #[arg(long)]
        category: String,
        #[arg(long)]
        worker: String,
        #[arg(long = "lead", required = true)]
        leads: Vec<String>,
        #[arg(long, default_value = "medium")]
        priority: Priority,
        #[arg(long)]
        due: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[derive(Args, Debug)]
struct CategoriesCommand {
    #[command(subcommand)]
    command: CategoriesSubcommand,
}

#[derive(Subcommand, Debug)]
enum CategoriesSubcommand {
    List,
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "#4f46e5")]
        color: String,
    },
    Update {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "#4f46e5")]
        color: String,
    },
    Delete {
        id: String,
    },
}

#[derive(Args, Debug)]
struct WorkersCommand {
    #[command(subcommand)]
    command: WorkersSubcommand,
}

#[derive(Subcommand, Debug)]
enum WorkersSubcommand {
    List,
}

fn parse_date(raw: &str) -> Result<Date, ParseError> {
    schema::format::parse_input_date(raw)
}

fn parse_assignment(raw: &str) -> Result<AssignmentFilter, String> {
    AssignmentFilter::from_label(raw).ok_or_else(|| format!("expected all, assigned, or unassigned, got `{raw}`"))
}

fn today() -> Date {
    time::OffsetDateTime::now_utc().date()
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let client = ApiClient::new(&cli.base_url, cli.cookie.as_deref())?;
    let json = cli.json;

    match cli.command {
        Command::Login { role, email, password } => run_login(&client, role, &email, &password).await,
        Command::Register { email, password, first_name, last_name, avatar } => {
            let body = validate_register(&email, &password, &first_name, &last_name, &avatar)
                .map_err(|m| CliError::Invalid(m.to_owned()))?;
            client.register(&body).await?;
            println!("Registration successful!");
            Ok(())
        }
        Command::Whoami => {
            let user = client.current_user().await?;
            if json {
                print_json(&user)
            } else {
                println!("{}", render::whoami(&user));
                Ok(())
            }
        }
        Command::Leads(leads) => run_leads(&client, leads.command, json).await,
        Command::Categories(categories) => run_categories(&client, categories.command, json).await,
        Command::Workers(workers) => match workers.command {
            WorkersSubcommand::List => {
                let list = client.workers().await?;
                if json { print_json(&list) } else { print_text(&render::worker_table(&list)) }
            }
        },
    }
}

async fn run_login(client: &ApiClient, role: Role, email: &str, password: &str) -> Result<(), CliError> {
    let body = validate_login(email, password).map_err(|m| CliError::Invalid(m.to_owned()))?;
    let cookie = client.login(role, &body).await?;
    tracing::info!(%role, "login successful");
    println!("export LEADFLOW_COOKIE='{cookie}'");
    Ok(())
}

async fn run_leads(client: &ApiClient, command: LeadsSubcommand, json: bool) -> Result<(), CliError> {
    match command {
        LeadsSubcommand::List { page, filter } => {
            let fetched = client.lead_page(page).await?;
            let filter = filter.to_filter();
            let rows: Vec<_> = filter.apply(&fetched.leads).into_iter().cloned().collect();
            if json {
                let ids: Vec<&str> = rows.iter().map(|l| l.id.as_str()).collect();
                return print_json(&ids);
            }
            print_text(&render::lead_table(&rows))?;
            println!("{}", render::pagination_line(fetched.pagination, rows.len()));
            Ok(())
        }
        LeadsSubcommand::Get { id } => {
            let lead = client.lead(&id).await?;
            print_text(&render::lead_detail(&lead))
        }
        LeadsSubcommand::Create { fields } => {
            let mut form = LeadForm::default();
            fields.apply(&mut form);
            form.validate(FormMode::Create)?;
            let document = fields.document().await?;
            client.create_lead(form.multipart_fields(FormMode::Create), document.as_ref()).await?;
            println!("Lead saved successfully!");
            Ok(())
        }
        LeadsSubcommand::Update { id, fields, last_contact, follow_up_dates } => {
            let current = client.lead(&id).await?;
            let form = update_form(&current, &fields, last_contact, follow_up_dates.as_deref())?;
            let document = fields.document().await?;
            client.update_lead(&id, form.multipart_fields(FormMode::Update), document.as_ref()).await?;
            println!("Lead updated successfully!");
            Ok(())
        }
        LeadsSubcommand::Delete { id } => {
            client.delete_lead(&id).await?;
            println!("Lead deleted successfully!");
            Ok(())
        }
        LeadsSubcommand::FollowUp { id, date, conclusion } => {
            let body = validate_follow_up(&date, &conclusion, today())?;
            client.follow_up(&id, &body).await?;
            println!("Follow-up added successfully!");
            Ok(())
        }
        LeadsSubcommand::Close { id, outcome, conclusion } => {
            if conclusion.trim().is_empty() {
                return Err(CliError::Invalid("conclusion: Conclusion is required".to_owned()));
            }
            client.follow_up(&id, &CloseConversationRequest::new(outcome, &conclusion)).await?;
            println!("Conversation ended successfully!");
            Ok(())
        }
        LeadsSubcommand::Watch { page, interval_secs, polls } => run_watch(client, page, interval_secs, polls).await,
        LeadsSubcommand::BulkUpload { file, category, assign_to } => {
            let upload = Upload::read(&file).await?;
            if !is_spreadsheet(&upload.meta.file_name, &upload.meta.mime) {
                return Err(CliError::Invalid("Please upload a valid Excel (.xlsx) file.".to_owned()));
            }
            let form = BulkUploadForm { has_file: true, category, assignee: assign_to.unwrap_or_default() };
            form.validate().map_err(|m| CliError::Invalid(m.to_owned()))?;
            client.bulk_upload(&upload, form.multipart_fields()).await?;
            println!("Leads uploaded successfully!");
            Ok(())
        }
        LeadsSubcommand::Assign { category, worker, leads, priority, due, notes } => {
            let body = AssignLeadsRequest { category, worker_id: worker, lead_ids: leads, priority, due_date: due, notes };
            body.validate()?;
            client.assign(&body).await?;
            println!("Assignment created successfully!");
            Ok(())
        }
    }
}

/// Merge flags into the stored lead and validate for update.
fn update_form(
    current: &schema::Lead,
    fields: &LeadFields,
    last_contact: Option<Date>,
    follow_up_dates: Option<&str>,
) -> Result<LeadForm, CliError> {
    let mut form = LeadForm::from_lead(current);
    fields.apply(&mut form);
    if let Some(day) = last_contact {
        form.last_contact = Some(day);
    }
    if let Some(raw) = follow_up_dates {
        form.follow_up_dates = schema::validate::parse_follow_up_list(raw)?;
    }
    form.validate(FormMode::Update)?;
    Ok(form)
}

async fn run_watch(client: &ApiClient, page: u32, interval_secs: u64, polls: Option<u32>) -> Result<(), CliError> {
    let previous = std::cell::RefCell::new(None::<Vec<schema::Lead>>);
    let previous = &previous;
    let interval = Duration::from_secs(interval_secs.max(1));
    tracing::info!(page, interval_secs = interval.as_secs(), "watching leads");
    let ran = watch::run(interval, polls, move |_| async move {
        let fetched = client.lead_page(page).await?;
        let mut slot = previous.borrow_mut();
        match slot.as_deref() {
            None => print_text(&render::lead_table(&fetched.leads))?,
            Some(before) => {
                let delta = LeadDelta::between(before, &fetched.leads);
                if delta.is_empty() {
                    tracing::debug!(page, "no lead changes");
                }
                for line in delta.lines() {
                    println!("{line}");
                }
            }
        }
        *slot = Some(fetched.leads);
        Ok(())
    })
    .await;
    tracing::info!(polls = ran, "watch finished");
    Ok(())
}

async fn run_categories(client: &ApiClient, command: CategoriesSubcommand, json: bool) -> Result<(), CliError> {
    match command {
        CategoriesSubcommand::List => {
            let list = client.categories().await?;
            if json { print_json(&list) } else { print_text(&render::category_table(&list)) }
        }
        CategoriesSubcommand::Create { title, description, color } => {
            let body = validate_category(&title, &description, &color)?;
            client.create_category(&body).await?;
            println!("Category created");
            Ok(())
        }
        CategoriesSubcommand::Update { id, title, description, color } => {
            let body = validate_category(&title, &description, &color)?;
            client.update_category(&id, &body).await?;
            println!("Category updated");
            Ok(())
        }
        CategoriesSubcommand::Delete { id } => {
            client.delete_category(&id).await?;
            println!("Category deleted");
            Ok(())
        }
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn print_text(text: &str) -> Result<(), CliError> {
    print!("{text}");
    Ok(())
}
