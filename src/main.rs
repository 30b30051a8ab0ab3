//! svcat - a CLI for inspecting Service Catalog resources
//!
//! Looks up bindings and, on request, traverses the provenance chain that
//! produced them: binding -> instance -> service class/plan -> broker.

use anyhow::Result;
use clap::{Parser, Subcommand};

use svcat::cli;
use svcat::config::ConfigLoader;
use svcat::output::OutputOptions;
use svcat::store::KubeCatalogStore;

/// svcat - inspect Service Catalog resources and their provenance
#[derive(Parser, Debug)]
#[command(name = "svcat")]
#[command(about = "Inspect Service Catalog resources and trace binding provenance", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Show details of a specific resource
    Describe {
        #[command(subcommand)]
        resource: DescribeResource,
    },
    /// Binding operations
    #[command(aliases = ["bindings", "bnd"])]
    Binding {
        #[command(subcommand)]
        subcommand: BindingSubcommand,
    },
}

/// Resources that can be described
#[derive(Subcommand, Debug)]
enum DescribeResource {
    /// Show details of a specific binding
    #[command(aliases = ["bindings", "bnd"])]
    Binding {
        /// Name of the binding
        name: String,
        /// The namespace in which to get the binding
        #[arg(long, short = 'n')]
        namespace: Option<String>,
        /// Traverse from binding -> instance -> class/plan -> broker
        #[arg(long, short = 't')]
        traverse: bool,
    },
}

/// Binding subcommands
#[derive(Subcommand, Debug)]
enum BindingSubcommand {
    /// Get a specific binding
    Get {
        /// Name of the binding
        name: String,
        /// The namespace from which to get the binding
        #[arg(long, short = 'n')]
        namespace: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    cli::init_logging(args.debug);

    let config = ConfigLoader::load().unwrap_or_else(|_| ConfigLoader::load_defaults());
    let opts = OutputOptions {
        no_headers: config.output.no_headers,
    };

    tracing::debug!("Initializing Kubernetes client");
    let client = svcat::kube::create_client().await?;
    let store = KubeCatalogStore::new(client);

    let mut out = std::io::stdout().lock();
    match args.command {
        Command::Describe {
            resource:
                DescribeResource::Binding {
                    name,
                    namespace,
                    traverse,
                },
        } => {
            let namespace = namespace.unwrap_or_else(|| config.default_namespace.clone());
            cli::describe_binding(&store, &mut out, &opts, &namespace, &name, traverse).await
        }
        Command::Binding {
            subcommand: BindingSubcommand::Get { name, namespace },
        } => {
            let namespace = namespace.unwrap_or_else(|| config.default_namespace.clone());
            cli::get_binding(&store, &mut out, &opts, &namespace, &name).await
        }
    }
}
