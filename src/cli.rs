//! Command-line interface implementation for packsmith.
//! Provides argument parsing and help text formatting using clap.

use crate::layout::PACKAGE_TYPE;
use clap::{error::ErrorKind, Args, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for packsmith.
#[derive(Parser, Debug)]
#[command(version, about = "packsmith: application package scaffolding tool", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to an explicit configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// One subcommand per generatable artifact, plus `new` for full packages.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new package skeleton
    New(NewArgs),
    /// Create a new controller
    MakeController(MakeArgs),
    /// Create a new resource
    MakeResource(MakeArgs),
    /// Create a new service provider
    MakeProvider(MakeArgs),
    /// Create a new module service provider
    MakeModuleProvider(MakeArgs),
    /// Create a new admin controller
    MakeAdminController(MakeArgs),
    /// Create the admin routes file
    MakeAdminRoute(MakeAdminRouteArgs),
    /// Create a new model
    MakeModel(MakeArgs),
    /// Create a new model proxy
    MakeModelProxy(MakeArgs),
    /// Create a new migration
    MakeMigration(MakeArgs),
    /// Create a new seeder
    MakeSeeder(MakeArgs),
    /// Create a new middleware
    MakeMiddleware(MakeArgs),
    /// Create a new form request
    MakeRequest(MakeArgs),
    /// Create a new event
    MakeEvent(MakeArgs),
    /// Create a new listener
    MakeListener(MakeArgs),
    /// Create a new mailable
    MakeMail(MakeArgs),
    /// Create a new console command
    MakeCommand(MakeArgs),
    /// Create a new repository
    MakeRepository(MakeArgs),
    /// Create a new contract
    MakeContract(MakeArgs),
    /// Create a new notification
    MakeNotification(MakeArgs),
}

/// Shared arguments of the per-kind make commands.
#[derive(Args, Debug)]
pub struct MakeArgs {
    /// Target artifact name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Owning package name
    #[arg(value_name = "PACKAGE")]
    pub package: String,

    /// Force overwrite of an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments of make-admin-route; the routes file has a fixed name, so no
/// NAME argument is taken.
#[derive(Args, Debug)]
pub struct MakeAdminRouteArgs {
    /// Owning package name
    #[arg(value_name = "PACKAGE")]
    pub package: String,

    /// Force overwrite of an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments of the package-level `new` command.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Package name; may carry a vendor segment, e.g. `shop/Invoices`
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Only create the folder skeleton, no files or classes
    #[arg(long)]
    pub plain: bool,

    /// Replace the package if it already exists
    #[arg(long)]
    pub force: bool,

    /// Package type whose layout tables apply
    #[arg(long = "type", value_name = "TYPE", default_value = PACKAGE_TYPE)]
    pub package_type: String,
}

/// Parses command line arguments and returns the Cli structure.
///
/// # Exits
/// * With status code 1 and the full help text if no subcommand was given
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if matches!(
                e.kind(),
                ErrorKind::MissingSubcommand
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) {
                Cli::command().print_help().unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
