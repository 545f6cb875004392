use super::render::{
    render_attendee_list, render_config, render_messages, render_stats, render_verdict,
};
use super::setup::{
    get_grouped_help, Cli, Commands, ExportFormatArg, FormVariant, FormatFieldArg,
    StatusDirectionArg, ValidateArgs,
};
use checkin::api::{
    CheckinApi, CmdMessage, CmdResult, ConfigAction, ExportFormat, FormatField, StatusDirection,
};
use checkin::config::CheckinConfig;
use checkin::error::{CheckinError, Result};
use checkin::forms::{FormRules, RegistrationForm};
use checkin::source::fs::JsonFileSource;
use checkin::source::memory::InMemorySource;
use checkin::source::RecordSource;
use chrono::Utc;
use clap::Parser;
use directories::ProjectDirs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "CHECKIN_LOG";

type Api = CheckinApi<Box<dyn RecordSource>>;

struct AppContext {
    config: CheckinConfig,
    config_dir: PathBuf,
}

impl AppContext {
    fn api(&self, input: Option<&Path>) -> Api {
        let source: Box<dyn RecordSource> = match input {
            Some(path) => Box::new(JsonFileSource::new(path)),
            None => Box::new(InMemorySource::default()),
        };
        CheckinApi::new(source, self.config.clone(), self.config_dir.clone())
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        print!("{}", get_grouped_help());
        return Ok(());
    };

    let ctx = init_context(cli.config)?;

    match command {
        Commands::Validate(args) => handle_validate(&ctx, args),
        Commands::Format { field, value } => handle_format(&ctx, field, &value),
        Commands::Status { direction, value } => handle_status(&ctx, direction, &value),
        Commands::List { input } => handle_list(&ctx, &input),
        Commands::Export {
            format,
            input,
            output,
        } => handle_export(&ctx, format, &input, output),
        Commands::Stats { input, recent } => handle_stats(&ctx, &input, recent),
        Commands::Search { input, term } => handle_search(&ctx, &input, &term),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

/// Logs go to stderr so stdout stays clean for exports piped elsewhere.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn init_context(config_dir: Option<PathBuf>) -> Result<AppContext> {
    let config_dir = match config_dir {
        Some(dir) => dir,
        None => ProjectDirs::from("com", "checkin", "checkin")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| CheckinError::Config("Could not determine config dir".into()))?,
    };
    let config = CheckinConfig::load(&config_dir)?;
    debug!(dir = %config_dir.display(), "loaded config");

    Ok(AppContext { config, config_dir })
}

fn print_result_messages(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
}

fn handle_validate(ctx: &AppContext, args: ValidateArgs) -> Result<()> {
    let rules = match args.form {
        FormVariant::Basic => FormRules::basic(),
        FormVariant::Identity => FormRules::identity(),
        FormVariant::Profile => FormRules::profile(),
    };
    let form = RegistrationForm {
        first_name: args.first_name,
        last_name: args.last_name,
        phone: args.phone,
        email: args.email,
        sports: args.sports,
        cedula: args.cedula,
        age: args.age,
        sector: args.sector,
        birth_date: args.birth_date,
        profession: args.profession,
        gender: None,
    };
    let today = Utc::now()
        .with_timezone(&ctx.config.utc_offset()?)
        .date_naive();

    let result = ctx.api(None).validate_form(&form, &rules, today)?;
    let verdict = result.verdict.clone().unwrap_or_default();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print!("{}", render_verdict(&verdict));
        print_result_messages(&result);
    }

    if verdict.is_valid() {
        Ok(())
    } else {
        Err(CheckinError::Validation(verdict))
    }
}

fn handle_format(ctx: &AppContext, field: FormatFieldArg, value: &str) -> Result<()> {
    let field = match field {
        FormatFieldArg::Phone => FormatField::Phone,
        FormatFieldArg::Cedula => FormatField::Cedula,
    };
    let result = ctx.api(None).format_value(field, value)?;
    print_result_messages(&result);
    Ok(())
}

fn handle_status(ctx: &AppContext, direction: StatusDirectionArg, value: &str) -> Result<()> {
    let direction = match direction {
        StatusDirectionArg::ToBackend => StatusDirection::ToBackend,
        StatusDirectionArg::ToPresentation => StatusDirection::ToPresentation,
    };
    let result = ctx.api(None).convert_status(direction, value)?;
    print_result_messages(&result);
    Ok(())
}

fn handle_list(ctx: &AppContext, input: &Path) -> Result<()> {
    let result = ctx.api(Some(input)).list()?;
    print!("{}", render_attendee_list(&result.attendees, Utc::now()));
    print_result_messages(&result);
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    format: ExportFormatArg,
    input: &Path,
    output: Option<PathBuf>,
) -> Result<()> {
    let format = match format {
        ExportFormatArg::Csv => ExportFormat::Csv,
        ExportFormatArg::Html => ExportFormat::Html,
    };
    let result = ctx.api(Some(input)).export(format, Utc::now())?;
    let Some(artifact) = &result.artifact else {
        print_result_messages(&result);
        return Ok(());
    };

    let target = output.unwrap_or_else(|| PathBuf::from(&artifact.filename));
    if target.as_os_str() == "-" {
        std::io::stdout().write_all(&artifact.bytes)?;
        return Ok(());
    }

    std::fs::write(&target, &artifact.bytes)?;
    debug!(path = %target.display(), mime = artifact.mime, "wrote export");
    let mut messages = result.messages.clone();
    messages.push(CmdMessage::success(format!(
        "Exported to {}",
        target.display()
    )));
    print!("{}", render_messages(&messages));
    Ok(())
}

fn handle_stats(ctx: &AppContext, input: &Path, recent: usize) -> Result<()> {
    let result = ctx.api(Some(input)).stats(recent)?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    if !result.attendees.is_empty() {
        println!();
        println!("Últimos check-ins:");
        print!("{}", render_attendee_list(&result.attendees, Utc::now()));
    }
    print_result_messages(&result);
    Ok(())
}

fn handle_search(ctx: &AppContext, input: &Path, term: &str) -> Result<()> {
    let result = ctx.api(Some(input)).search(term)?;
    if !result.attendees.is_empty() {
        print!("{}", render_attendee_list(&result.attendees, Utc::now()));
    }
    print_result_messages(&result);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api(None).manage_config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print!("{}", render_config(config));
    }
    print_result_messages(&result);
    if result.has_errors() {
        return Err(CheckinError::Config("configuration not changed".into()));
    }
    Ok(())
}
