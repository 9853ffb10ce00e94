mod error_formatter;
mod formatter;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formatter::Formatter;
use roster::{Catalog, MemberCall, Registry};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Closed enumerations with strict lookup.")]
#[command(
    long_about = "Roster declares closed enumerations: fixed, ordered sets of named members with one scalar value each.\nThe CLI loads every .roster file in a workspace and answers lookups against the declared enumerations."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all enumerations with their member counts
    ///
    /// Scans the workspace for .roster files and displays every declared
    /// enumeration.
    List {
        /// Workspace root directory containing .roster files
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Show the members of an enumeration in declaration order
    Show {
        /// Name of the enumeration
        enumeration: String,
        /// Workspace root directory containing .roster files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the value of a member
    ValueOf {
        /// Name of the enumeration
        enumeration: String,
        /// Name of the member
        member: String,
        /// Workspace root directory containing .roster files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
        /// Print JSON instead of the value literal
        #[arg(long)]
        json: bool,
    },
    /// Print the name of the first member with a value
    ///
    /// The value is a literal and is compared strictly: 0 matches only
    /// integer zero, '"0"' only the text "0".
    NameOf {
        /// Name of the enumeration
        enumeration: String,
        /// Value literal (examples: 0, -3, 1.5, true, '"text"')
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Workspace root directory containing .roster files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
    },
    /// Print whether a member is defined (never fails for unknown members)
    Defined {
        /// Name of the enumeration
        enumeration: String,
        /// Name of the member
        member: String,
        /// Workspace root directory containing .roster files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
    },
    /// Resolve a member call such as Animal.Horse()
    Get {
        /// Call to resolve (format: Type.Member(), Type.Member or Type::Member)
        call: String,
        /// Workspace root directory containing .roster files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "roster=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::List { root } => list_command(root),
        Commands::Show {
            enumeration,
            workdir,
            json,
        } => show_command(workdir, enumeration, *json),
        Commands::ValueOf {
            enumeration,
            member,
            workdir,
            json,
        } => value_of_command(workdir, enumeration, member, *json),
        Commands::NameOf {
            enumeration,
            value,
            workdir,
        } => name_of_command(workdir, enumeration, value),
        Commands::Defined {
            enumeration,
            member,
            workdir,
        } => defined_command(workdir, enumeration, member),
        Commands::Get {
            call,
            workdir,
            json,
        } => get_command(workdir, call, *json),
    };

    if let Err(e) = result {
        if let Some(roster_err) = e.downcast_ref::<roster::RosterError>() {
            eprintln!("{}", error_formatter::format_error(roster_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn list_command(root: &Path) -> Result<()> {
    let mut catalog = Catalog::new();

    println!("Loading workspace from {}...", root.display());
    let file_count = load_workspace(&mut catalog, root)?;

    let stats: Vec<(String, usize, String)> = catalog
        .iter()
        .map(|enumeration| {
            (
                enumeration.type_name().to_string(),
                enumeration.len(),
                enumeration.source().unwrap_or("<input>").to_string(),
            )
        })
        .collect();

    println!();
    let formatter = Formatter::default();
    print!("{}", formatter.format_workspace_summary(file_count, &stats));

    Ok(())
}

fn show_command(workdir: &Path, name: &str, json: bool) -> Result<()> {
    let catalog = open_workspace(workdir)?;
    let enumeration = catalog.enumeration(name)?;

    let formatter = Formatter::default();
    if json {
        println!("{}", formatter.enumeration_json(enumeration)?);
    } else {
        print!("{}", formatter.format_enumeration(enumeration));
    }

    Ok(())
}

fn value_of_command(workdir: &Path, name: &str, member: &str, json: bool) -> Result<()> {
    let catalog = open_workspace(workdir)?;
    let enumeration = catalog.enumeration(name)?;
    let value = enumeration.value_of(member)?;

    if json {
        let formatter = Formatter::default();
        println!(
            "{}",
            formatter.member_json(enumeration.type_name(), member, value)?
        );
    } else {
        println!("{}", value.to_literal());
    }

    Ok(())
}

fn name_of_command(workdir: &Path, name: &str, value: &str) -> Result<()> {
    let catalog = open_workspace(workdir)?;
    let enumeration = catalog.enumeration(name)?;
    let value = roster::parse_value(value)?;

    println!("{}", enumeration.name_of(&value)?);

    Ok(())
}

fn defined_command(workdir: &Path, name: &str, member: &str) -> Result<()> {
    let catalog = open_workspace(workdir)?;
    let enumeration = catalog.enumeration(name)?;

    println!("{}", enumeration.is_defined(member));

    Ok(())
}

fn get_command(workdir: &Path, call: &str, json: bool) -> Result<()> {
    let catalog = open_workspace(workdir)?;
    let call: MemberCall = call.parse()?;
    let registry = Registry::new();
    let instance = catalog.resolve(&registry, &call)?;

    let formatter = Formatter::default();
    if json {
        println!(
            "{}",
            formatter.member_json(instance.type_name(), instance.name(), instance.value())?
        );
    } else {
        println!(
            "{}.{} = {}",
            instance.type_name(),
            instance,
            instance.value().to_literal()
        );
    }

    Ok(())
}

fn open_workspace(workdir: &Path) -> Result<Catalog> {
    let mut catalog = Catalog::new();
    load_workspace(&mut catalog, workdir)?;
    Ok(catalog)
}

/// Load all .roster files from the workspace directory, returning how many
/// files were read
fn load_workspace(catalog: &mut Catalog, workdir: &Path) -> Result<usize> {
    let mut file_count = 0;
    for entry in WalkDir::new(workdir).sort_by_file_name() {
        let entry = entry?;
        if entry.path().extension().and_then(|s| s.to_str()) == Some("roster") {
            let path = entry.path();
            let source_id = path.to_string_lossy().to_string();
            debug!(file = %source_id, "loading declarations");
            catalog.add_source(&fs::read_to_string(path)?, &source_id)?;
            file_count += 1;
        }
    }

    Ok(file_count)
}
