use anyhow::{bail, Context, Result};
use astquery::config::{load_from_path, CompiledFilter, FilterSpec, Pipeline};
use astquery::go::{load_file, load_packages, GoKind, GoNode, LoadOptions, SourceFile};
use astquery::SyntaxNode;
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "astquery")]
#[command(about = "Find declarations, methods and call sites in Go packages", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging (otherwise RUST_LOG is honoured)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find nodes matching a single filter
    Find {
        /// Go package directory or a single .go file
        path: PathBuf,

        /// Comma-separated names to match exactly (requires --kind)
        #[arg(long, value_delimiter = ',')]
        set: Option<Vec<String>>,

        /// Regular expression searched in each name (requires --kind)
        #[arg(long)]
        pattern: Option<String>,

        /// Node kind for --set and --pattern (see `astquery kinds`)
        #[arg(short, long, conflicts_with = "method")]
        kind: Option<String>,

        /// Receiver type name of the methods to find
        #[arg(short, long)]
        method: Option<String>,

        /// With --method, only exported methods
        #[arg(long, requires = "method")]
        exported_only: bool,

        /// Also load _test.go files
        #[arg(long)]
        include_tests: bool,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the queries defined in a TOML query file
    Run {
        /// Go package directory or a single .go file
        path: PathBuf,

        /// Query file
        #[arg(short, long)]
        queries: PathBuf,

        /// Run only the query with this id
        #[arg(long)]
        only: Option<String>,

        /// Also load _test.go files
        #[arg(long)]
        include_tests: bool,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,
    },

    /// List node kinds accepted by --kind and query files
    Kinds,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Find {
            path,
            set,
            pattern,
            kind,
            method,
            exported_only,
            include_tests,
            json,
        } => {
            let spec = filter_spec(set, pattern, kind, method, exported_only)?;
            cmd_find(&path, &spec, include_tests, json)
        }

        Commands::Run {
            path,
            queries,
            only,
            include_tests,
            json,
        } => cmd_run(&path, &queries, only.as_deref(), include_tests, json),

        Commands::Kinds => {
            for kind in GoKind::ALL {
                println!("{kind}");
            }
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("astquery=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("astquery=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build the single filter described by `find`'s flags.
fn filter_spec(
    set: Option<Vec<String>>,
    pattern: Option<String>,
    kind: Option<String>,
    method: Option<String>,
    exported_only: bool,
) -> Result<FilterSpec> {
    let require_kind = |flag: &str| match &kind {
        Some(kind) => Ok(kind.clone()),
        None => bail!("{flag} requires --kind (see `astquery kinds`)"),
    };

    match (set, pattern, method) {
        (Some(names), None, None) => Ok(FilterSpec::Set {
            names,
            kind: require_kind("--set")?,
        }),
        (None, Some(pattern), None) => Ok(FilterSpec::Pattern {
            pattern,
            kind: require_kind("--pattern")?,
        }),
        (None, None, Some(receiver)) => Ok(FilterSpec::Method {
            receiver,
            exported_only,
        }),
        _ => bail!("exactly one of --set, --pattern or --method is required"),
    }
}

/// One reported match.
#[derive(Debug, Serialize)]
struct Record {
    file: String,
    line: usize,
    column: usize,
    kind: String,
    name: Option<String>,
}

impl Record {
    fn new(file: &SourceFile, node: &GoNode<'_>) -> Self {
        let position = node.position();
        Record {
            file: file.path().display().to_string(),
            line: position.line,
            column: position.column,
            kind: node.kind().to_string(),
            name: node.name().map(str::to_string),
        }
    }
}

#[derive(Debug, Serialize)]
struct QueryReport {
    id: String,
    matches: Vec<Record>,
}

/// Files to query: one file, or every package in a directory.
fn load_sources(path: &Path, include_tests: bool) -> Result<Vec<SourceFile>> {
    if path.is_file() {
        return Ok(vec![load_file(path)?]);
    }

    let options = LoadOptions { include_tests };
    let packages = load_packages(path, options)
        .with_context(|| format!("failed to load Go packages from {}", path.display()))?;
    Ok(packages
        .into_values()
        .flat_map(|package| package.into_files())
        .collect())
}

fn run_pipeline(files: &[SourceFile], pipeline: &Pipeline) -> Vec<Record> {
    files
        .iter()
        .flat_map(|file| {
            pipeline
                .run([file.root()])
                .into_iter()
                .map(move |node| Record::new(file, &node))
        })
        .collect()
}

fn cmd_find(path: &Path, spec: &FilterSpec, include_tests: bool, json: bool) -> Result<()> {
    let filter: CompiledFilter = spec.compile().context("invalid filter")?;
    let files = load_sources(path, include_tests)?;
    let records = run_pipeline(&files, &Pipeline::new("find", vec![filter]));

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        print_records(&records);
        println!("{}", format!("{} match(es)", records.len()).dimmed());
    }
    Ok(())
}

fn cmd_run(
    path: &Path,
    queries: &Path,
    only: Option<&str>,
    include_tests: bool,
    json: bool,
) -> Result<()> {
    let config = load_from_path(queries)?;
    let definitions: Vec<_> = match only {
        Some(id) => match config.get(id) {
            Some(definition) => vec![definition],
            None => bail!("no query with id '{id}' in {}", queries.display()),
        },
        None => config.queries.iter().collect(),
    };

    let files = load_sources(path, include_tests)?;
    let mut reports = Vec::new();
    for definition in definitions {
        let pipeline = definition
            .compile()
            .with_context(|| format!("query '{}' is invalid", definition.id))?;
        reports.push(QueryReport {
            id: definition.id.clone(),
            matches: run_pipeline(&files, &pipeline),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    for report in &reports {
        println!("{} {}", "Query:".bold(), report.id.cyan());
        print_records(&report.matches);
        println!("{}", format!("{} match(es)", report.matches.len()).dimmed());
        println!();
    }
    Ok(())
}

fn print_records(records: &[Record]) {
    for record in records {
        let location = format!("{}:{}:{}", record.file, record.line, record.column);
        println!(
            "  {}  {}  {}",
            location.cyan(),
            record.kind.dimmed(),
            record.name.as_deref().unwrap_or("-").bold()
        );
    }
}
