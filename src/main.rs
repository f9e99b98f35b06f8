//! packsmith's main application entry point and command dispatch.
//! Parses command-line arguments, loads the configuration and routes each
//! subcommand to the matching generator.

use packsmith::{
    artifact::{self, MakeArtifact},
    cli::{get_args, Cli, Command, MakeArgs},
    config::{get_config, Config},
    error::{default_error_handler, Result},
    kind::ArtifactKind,
    logger::init_logger,
    names::class_basename,
    package::PackageGenerator,
    registry::DirectoryRegistry,
};

fn main() {
    let cli = get_args();

    init_logger(cli.verbose);

    if let Err(err) = run(cli) {
        default_error_handler(err);
    }
}

/// Routes the parsed subcommand to its generator.
fn run(cli: Cli) -> Result<()> {
    let config = get_config(cli.config.as_deref())?;

    match cli.command {
        Command::New(args) => {
            let registry = DirectoryRegistry::new(&config.packages_root);
            PackageGenerator::new(&config, &registry, args.name)
                .plain(args.plain)
                .force(args.force)
                .package_type(args.package_type)
                .generate()
        }
        Command::MakeController(args) => make(&config, ArtifactKind::Controller, args),
        Command::MakeResource(args) => make(&config, ArtifactKind::Resource, args),
        Command::MakeProvider(args) => make(&config, ArtifactKind::Provider, args),
        Command::MakeModuleProvider(args) => make(&config, ArtifactKind::ModuleProvider, args),
        Command::MakeAdminController(args) => make(&config, ArtifactKind::AdminController, args),
        Command::MakeAdminRoute(args) => {
            // The routes file is named after its controller class; derive it
            // from the package since the command takes no NAME argument.
            let name = format!("{}Controller", class_basename(&args.package));
            artifact::make(
                &config,
                &MakeArtifact {
                    kind: ArtifactKind::AdminRoute,
                    name: &name,
                    package: &args.package,
                    force: args.force,
                },
            )
            .map(|_| ())
        }
        Command::MakeModel(args) => make(&config, ArtifactKind::Model, args),
        Command::MakeModelProxy(args) => make(&config, ArtifactKind::ModelProxy, args),
        Command::MakeMigration(args) => make(&config, ArtifactKind::Migration, args),
        Command::MakeSeeder(args) => make(&config, ArtifactKind::Seeder, args),
        Command::MakeMiddleware(args) => make(&config, ArtifactKind::Middleware, args),
        Command::MakeRequest(args) => make(&config, ArtifactKind::Request, args),
        Command::MakeEvent(args) => make(&config, ArtifactKind::Event, args),
        Command::MakeListener(args) => make(&config, ArtifactKind::Listener, args),
        Command::MakeMail(args) => make(&config, ArtifactKind::Mail, args),
        Command::MakeCommand(args) => make(&config, ArtifactKind::Command, args),
        Command::MakeRepository(args) => make(&config, ArtifactKind::Repository, args),
        Command::MakeContract(args) => make(&config, ArtifactKind::Contract, args),
        Command::MakeNotification(args) => make(&config, ArtifactKind::Notification, args),
    }
}

fn make(config: &Config, kind: ArtifactKind, args: MakeArgs) -> Result<()> {
    artifact::make(
        config,
        &MakeArtifact { kind, name: &args.name, package: &args.package, force: args.force },
    )
    .map(|_| ())
}
