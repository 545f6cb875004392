use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2026-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "checkin", bin_name = "checkin", version = get_version())]
#[command(
    about = "Validate registrations and export check-in reports",
    long_about = None
)]
pub struct Cli {
    // grouped help when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub config: Option<PathBuf>,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Fields,
    Records,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Fields => "Field Commands:",
            CommandGroup::Records => "Record Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "validate" | "format" | "status" => Some(CommandGroup::Fields),
            "list" | "export" | "stats" | "search" => Some(CommandGroup::Records),
            "config" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Fields,
            CommandGroup::Records,
            CommandGroup::Misc,
        ]
    }
}

/// Top-level help with subcommands grouped by what they operate on.
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("checkin {version}\n"));
    output.push_str("Validate registrations and export check-in reports\n");
    output.push('\n');
    output.push_str("Usage: checkin [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose       Verbose output (debug logs on stderr)\n");
    output.push_str("      --config <DIR>  Directory holding config.json\n");
    output.push_str("  -h, --help          Print help\n");
    output.push_str("  -V, --version       Print version\n");

    output
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate registration fields
    #[command(display_order = 1)]
    Validate(ValidateArgs),

    /// Apply the keystroke formatter to a phone or cédula
    #[command(display_order = 2)]
    Format {
        #[arg(value_enum)]
        field: FormatFieldArg,

        value: String,
    },

    /// Convert a status between backend and display vocabularies
    #[command(display_order = 3)]
    Status {
        #[arg(value_enum)]
        direction: StatusDirectionArg,

        value: String,
    },

    /// List attendees from a records file
    #[command(alias = "ls", display_order = 10)]
    List {
        /// JSON records file (bare array or {success, data} envelope)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Export attendees as CSV or a printable HTML report
    #[command(display_order = 11)]
    Export {
        #[arg(value_enum)]
        format: ExportFormatArg,

        /// JSON records file (bare array or {success, data} envelope)
        #[arg(short, long)]
        input: PathBuf,

        /// Output path (defaults to the configured file name, "-" for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show check-in statistics
    #[command(display_order = 12)]
    Stats {
        #[arg(short, long)]
        input: PathBuf,

        /// How many recent check-ins to show
        #[arg(long, default_value_t = 5)]
        recent: usize,
    },

    /// Search attendees by name, email, phone or id
    #[command(display_order = 13)]
    Search {
        #[arg(short, long)]
        input: PathBuf,

        term: String,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g., event-name)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Which field set to check
    #[arg(long, value_enum, default_value_t = FormVariant::Basic)]
    pub form: FormVariant,

    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// Sport picked (repeatable)
    #[arg(long = "sport")]
    pub sports: Vec<String>,

    #[arg(long, default_value = "")]
    pub cedula: String,

    #[arg(long, default_value = "")]
    pub age: String,

    #[arg(long, default_value = "")]
    pub sector: String,

    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub birth_date: String,

    #[arg(long, default_value = "")]
    pub profession: String,

    /// Print the verdict as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FormVariant {
    #[default]
    Basic,
    Identity,
    Profile,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatFieldArg {
    Phone,
    Cedula,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StatusDirectionArg {
    ToBackend,
    ToPresentation,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Html,
}
