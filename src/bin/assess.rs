//! Terminal walkthrough of the scoping assessment.
//!
//! Loads the catalog from the configured guidance backend, then reads
//! commands from stdin while applying resolution results as they arrive.

use std::fmt;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};

use ai_risk_assessment::adapters::guidance_api::{GuidanceApiClient, GuidanceApiConfig};
use ai_risk_assessment::application::{AssessmentDriver, LoadCatalogHandler};
use ai_risk_assessment::config::AppConfig;
use ai_risk_assessment::domain::catalog::Catalog;
use ai_risk_assessment::domain::foundation::{DisciplineId, ScopeId};
use ai_risk_assessment::domain::selection::{ResolutionApplied, SelectionStatus};
use ai_risk_assessment::telemetry::init_tracing;

const HELP: &str = "commands: scope <id> | discipline <id> | reset | show | quit";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.guidance.validate(&config.server.environment)?;

    let client = Arc::new(GuidanceApiClient::new(GuidanceApiConfig::from(
        &config.guidance,
    ))?);
    let catalog = LoadCatalogHandler::new(client.clone()).handle().await;
    let mut driver = AssessmentDriver::new(client);

    if catalog.is_empty() {
        println!("No scopes available from {}.", config.guidance.base_url);
    }
    print_catalog(&catalog);
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => run(command, &catalog, &mut driver),
                    Err(error) => println!("{error}\n{HELP}"),
                }
            }
            Some(applied) = driver.next_resolution(), if driver.has_pending() => {
                if applied != ResolutionApplied::Discarded {
                    render(&catalog, &driver);
                }
            }
        }
    }

    Ok(())
}

/// A parsed stdin command.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Scope(ScopeId),
    Discipline(DisciplineId),
    Reset,
    Show,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ParseError(String);

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Command {
    fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or_default().to_lowercase();
        let argument = words.next();

        match (verb.as_str(), argument) {
            ("scope", Some(raw)) => raw
                .parse()
                .map(Command::Scope)
                .map_err(|_| ParseError(format!("not a scope id: {raw}"))),
            ("discipline", Some(raw)) => raw
                .parse()
                .map(Command::Discipline)
                .map_err(|_| ParseError(format!("not a discipline id: {raw}"))),
            ("scope" | "discipline", None) => Err(ParseError(format!("{verb} needs an id"))),
            ("reset", _) => Ok(Command::Reset),
            ("show", _) => Ok(Command::Show),
            ("quit" | "exit", _) => Ok(Command::Quit),
            _ => Err(ParseError(format!("unknown command: {}", line.trim()))),
        }
    }
}

fn run(command: Command, catalog: &Catalog, driver: &mut AssessmentDriver) {
    match command {
        Command::Scope(id) => {
            if catalog.scope(id).is_none() {
                println!("unknown scope {id}");
                return;
            }
            driver.choose_scope(id);
            print_disciplines(catalog);
        }
        Command::Discipline(id) => {
            if catalog.discipline(&id).is_none() {
                println!("unknown discipline {id}");
                return;
            }
            if let Err(error) = driver.choose_discipline(id) {
                println!("[{}] {error}", error.code());
                return;
            }
        }
        Command::Reset => driver.reset(),
        Command::Show | Command::Quit => {}
    }
    render(catalog, driver);
}

fn print_catalog(catalog: &Catalog) {
    for scope in catalog.scopes() {
        println!("  [{}] {} - {}", scope.id, scope.name, scope.description);
        println!("      e.g. {}", scope.example);
    }
}

fn print_disciplines(catalog: &Catalog) {
    for discipline in catalog.disciplines() {
        println!("  [{}] {} - {}", discipline.id, discipline.name, discipline.description);
    }
}

fn render(catalog: &Catalog, driver: &AssessmentDriver) {
    let selection = driver.selection();
    match selection.status() {
        SelectionStatus::AwaitingScope => println!("Choose a scope."),
        SelectionStatus::AwaitingDiscipline => println!("Choose a discipline."),
        SelectionStatus::Resolving => println!("Resolving recommendation..."),
        SelectionStatus::Unavailable => {
            println!("Recommendation unavailable. Choose a discipline to try again.")
        }
        SelectionStatus::Ready => {
            let Some(recommendation) = selection.recommendation() else {
                return;
            };
            let pair = recommendation.pair();
            let scope = catalog
                .scope(pair.scope)
                .map_or_else(|| pair.scope.to_string(), |s| s.name.clone());
            let discipline = catalog
                .discipline(&pair.discipline)
                .map_or_else(|| pair.discipline.to_string(), |d| d.name.clone());

            println!("{discipline} recommendations for {scope}");
            println!("{}", recommendation.text());
            println!("Implementation steps:");
            for (number, step) in recommendation.steps().iter().enumerate() {
                println!("  {}. {step}", number + 1);
            }
        }
    }
}
