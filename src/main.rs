use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use skillgenome::models::ExtractionReport;
use skillgenome::{Config, ExtractionContext, OntologySource, SkillExtractor, SqliteOntology};

#[derive(Parser, Debug)]
#[command(name = "skillgenome")]
#[command(version = "0.1.0")]
#[command(about = "Extract known skills from resumes and other documents")]
struct Args {
    /// SQLite database holding the skill ontology (overrides DATABASE_PATH)
    #[arg(long, global = true)]
    database: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract skills from documents, or from stdin when no files are given
    Extract {
        files: Vec<PathBuf>,

        /// Output format (json, text, markdown)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Skip the noun-phrase pass
        #[arg(long)]
        no_nlp: bool,

        /// Skip the keyphrase pass
        #[arg(long)]
        no_keyphrase: bool,
    },
    /// List the skills in the ontology
    Ontology,
}

#[derive(Serialize)]
struct DocumentResult {
    source: String,
    #[serde(flatten)]
    report: ExtractionReport,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("skillgenome=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = Config::from_env()?;
    if let Some(database) = args.database {
        config.database_path = database;
    }

    let ontology = SqliteOntology::from_config(&config)?;

    match args.command {
        Command::Ontology => {
            let skills = ontology.load()?;
            for skill in &skills {
                println!("{}", skill);
            }
            tracing::info!("{} skills in {}", skills.len(), ontology.path().display());
        }
        Command::Extract {
            files,
            format,
            output,
            no_nlp,
            no_keyphrase,
        } => {
            let mut context = ExtractionContext::from_config(&config);
            if no_nlp {
                context = context.without_nlp();
            }
            if no_keyphrase {
                context = context.without_keyphrase();
            }

            let extractor = SkillExtractor::new(ontology, Arc::new(context))
                .with_keyphrase_params(config.keyphrase_params());

            let results = extract_documents(&extractor, &files).await?;
            write_output(&results, &format, output.as_deref())?;
        }
    }

    Ok(())
}

async fn extract_documents(
    extractor: &SkillExtractor<SqliteOntology>,
    files: &[PathBuf],
) -> anyhow::Result<Vec<DocumentResult>> {
    if files.is_empty() {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        let report = extractor
            .extract_report(&skillgenome::text::normalize(&raw), &raw)
            .await?;
        return Ok(vec![DocumentResult {
            source: "<stdin>".to_string(),
            report,
        }]);
    }

    let pb = if files.len() > 1 {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents")?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        let raw = std::fs::read_to_string(path)?;
        let report = extractor
            .extract_report(&skillgenome::text::normalize(&raw), &raw)
            .await?;
        results.push(DocumentResult {
            source: path.display().to_string(),
            report,
        });
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(results)
}

fn write_output(results: &[DocumentResult], format: &str, path: Option<&str>) -> anyhow::Result<()> {
    let output = match format {
        "json" => serde_json::to_string_pretty(results)?,
        "markdown" => format_markdown(results),
        _ => format_text(results),
    };

    if let Some(path) = path {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn ranked(report: &ExtractionReport) -> Vec<&skillgenome::SkillFinding> {
    let mut findings: Vec<_> = report.findings.iter().collect();
    findings.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| a.skill.cmp(&b.skill))
    });
    findings
}

fn format_text(results: &[DocumentResult]) -> String {
    let mut output = String::new();

    for result in results {
        output.push_str(&format!("\n=== Skills: {} ===\n\n", result.source));
        output.push_str(&format!("Ontology size: {}\n", result.report.ontology_size));

        for pass in &result.report.passes {
            output.push_str(&format!(
                "  {} pass: {} ({} candidates)\n",
                pass.pass, pass.status, pass.candidates
            ));
        }

        if result.report.findings.is_empty() {
            output.push_str("\nNo skills found.\n");
            continue;
        }

        output.push_str("\nSkills:\n");
        for finding in ranked(&result.report) {
            output.push_str(&format!(
                "  - {} (confidence: {:.0}%, {})\n",
                finding.skill,
                finding.confidence * 100.0,
                finding.method
            ));
        }
    }

    output
}

fn format_markdown(results: &[DocumentResult]) -> String {
    let mut output = String::new();

    for result in results {
        output.push_str(&format!("# Skills: {}\n\n", result.source));
        output.push_str(&format!(
            "*Extracted {} from an ontology of {} skills*\n\n",
            result.report.extracted_at.format("%Y-%m-%d %H:%M UTC"),
            result.report.ontology_size
        ));

        output.push_str("| Skill | Confidence | Method |\n");
        output.push_str("|-------|------------|--------|\n");
        for finding in ranked(&result.report) {
            output.push_str(&format!(
                "| {} | {:.0}% | `{}` |\n",
                finding.skill,
                finding.confidence * 100.0,
                finding.method
            ));
        }

        output.push_str("\n## Passes\n\n");
        for pass in &result.report.passes {
            output.push_str(&format!(
                "- **{}**: {} ({} candidates)\n",
                pass.pass, pass.status, pass.candidates
            ));
        }
        output.push('\n');
    }

    output
}
