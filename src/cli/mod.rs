//! Command line access to the configured ontology.

use std::{io::Write, path::PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::{
    config::{Config, OntologySource},
    logger,
    ontology::{graph, OntologyMapping, OntologyService},
    Result,
};

#[derive(Debug, Parser)]
#[command(name = "aif-ontology", version, about = "Query a domain ontology mapping")]
pub struct Cli {
    /// YAML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Ontology definition file, overriding the configured source.
    #[arg(long, global = true)]
    pub definition: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List entity type short names.
    Entities,
    /// Resolve a name to its ontology resource.
    Resolve {
        #[arg(value_enum)]
        kind: LookupKind,
        name: String,
    },
    /// Print the argument types of a relation.
    Arguments { relation: String },
    /// Write the ontology schema as N-Triples.
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LookupKind {
    Entity,
    Relation,
    Event,
    EventArgument,
}

/// Parses arguments, initializes logging and runs the command against stdout.
///
/// # Errors
///
/// Propagates configuration, loading and lookup failures.
pub fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    logger::init(&config.logger)?;
    let stdout = std::io::stdout();
    run(&cli, &config, &mut stdout.lock())
}

/// Reads the configuration file, if any, and applies command line overrides.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::default(),
    };
    if let Some(path) = &cli.definition {
        config.ontology.source = OntologySource::Definition { path: path.clone() };
    }
    Ok(config)
}

pub fn run(cli: &Cli, config: &Config, out: &mut impl Write) -> Result<()> {
    let service = OntologyService::from_config(&config.ontology)?;
    let mapping = service.mapping();
    debug!(command = ?cli.command, "cli_command");

    match &cli.command {
        Command::Entities => {
            for name in mapping.entity_short_names() {
                writeln!(out, "{name}")?;
            }
        }
        Command::Resolve { kind, name } => {
            let resource = match kind {
                LookupKind::Entity => mapping.entity_type(name)?,
                LookupKind::Relation => mapping.relation_type(name)?,
                LookupKind::Event => mapping.event_type(name)?,
                LookupKind::EventArgument => mapping.event_argument_type(name)?,
            };
            writeln!(out, "{resource}")?;
        }
        Command::Arguments { relation } => {
            let relation = mapping.relation_type(relation)?;
            let arguments = mapping.relation_argument_types(&relation)?;
            writeln!(out, "{}\t{}", arguments.first, arguments.second)?;
        }
        Command::Export => {
            write!(out, "{}", graph::to_ntriples(&graph::to_graph(service.schema())))?;
        }
    }
    Ok(())
}
