use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use soloflow_mcp::cli;
use soloflow_mcp::{Result, ServerConfig};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "soloflow-mcp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Project document store for AI assistants, served over MCP", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (default: <config dir>/soloflow/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the MCP server over stdin/stdout (default)
    Stdio,

    /// Run the MCP server over HTTP
    Http {
        /// Address to bind (default from config: 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (default from config: 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Create .soloflow/ and .cursor/rules/soloflow.mdc in a project
    Init {
        /// Absolute path to the project root
        root: PathBuf,
    },

    /// List the documents of a project
    List {
        /// Absolute path to the project root
        root: PathBuf,
    },

    /// Print one document
    Read {
        /// Absolute path to the project root
        root: PathBuf,

        /// Document type (overview, requirements, tasks, ...)
        #[arg(value_name = "TYPE")]
        doc_type: String,
    },

    /// Create or replace one document
    Update {
        /// Absolute path to the project root
        root: PathBuf,

        /// Document type (overview, requirements, tasks, ...)
        #[arg(value_name = "TYPE")]
        doc_type: String,

        /// New document content
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        content: Option<String>,

        /// Read the new content from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// List the available prompts
    Prompts,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: failed to create tokio runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

async fn run_async(cli: Cli) -> Result<()> {
    let config = ServerConfig::load(cli.config.as_deref())?;
    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    soloflow_mcp::logging::init_tracing(log_level);

    let store = config.document_store();

    match cli.command.unwrap_or(Commands::Stdio) {
        Commands::Stdio => cli::server::run_stdio(&config).await?,
        Commands::Http { host, port } => cli::server::run_http(&config, host, port).await?,
        Commands::Init { root } => cli::docs::run_init(&store, &root)?,
        Commands::List { root } => cli::docs::run_list(&store, &root)?,
        Commands::Read { root, doc_type } => cli::docs::run_read(&store, &root, &doc_type)?,
        Commands::Update {
            root,
            doc_type,
            content,
            file,
        } => cli::docs::run_update(&store, &root, &doc_type, content, file)?,
        Commands::Prompts => cli::prompts::run()?,
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "soloflow-mcp", &mut io::stdout());
        }
    }

    Ok(())
}
