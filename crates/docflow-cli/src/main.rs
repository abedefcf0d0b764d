mod cmd;
mod output;

use clap::{Parser, Subcommand};
use docflow_core::types::DocFilter;

#[derive(Parser)]
#[command(
    name = "docflow",
    about = "SDLC documentation workflow explorer — phases, stages, use cases, and the dependency graph",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the workflow: all phases and their stages
    Workflow {
        /// Only show stages producing this class of documentation (all, internal, external)
        #[arg(long, default_value = "all")]
        filter: DocFilter,
    },

    /// Show one stage in full detail
    Stage {
        /// Stage id, e.g. 2a
        id: String,
    },

    /// Show documentation use cases
    Usecases {
        /// Show a single use case by category name
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the documentation structure guide
    Structure {
        /// Show the document templates instead of the category guide
        #[arg(long)]
        templates: bool,
        /// Show the best-practices list instead of the category guide
        #[arg(long)]
        practices: bool,
        /// Show the maintenance schedule instead of the category guide
        #[arg(long)]
        schedule: bool,
    },

    /// Show the derived stage dependency graph
    Graph {
        /// Only print the edge list
        #[arg(long)]
        edges_only: bool,
    },

    /// Analyze the graph: fan-out, high-risk stages, documentation bottlenecks
    Analyze,

    /// Launch the web UI
    Ui {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "0")]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Ui { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Workflow { filter } => cmd::workflow::run(filter, cli.json),
        Commands::Stage { id } => cmd::stage::run(&id, cli.json),
        Commands::Usecases { category } => cmd::usecases::run(category.as_deref(), cli.json),
        Commands::Structure {
            templates,
            practices,
            schedule,
        } => cmd::structure::run(templates, practices, schedule, cli.json),
        Commands::Graph { edges_only } => cmd::graph::run(edges_only, cli.json),
        Commands::Analyze => cmd::analyze::run(cli.json),
        Commands::Ui { port, no_open } => cmd::ui::run(port, no_open),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
