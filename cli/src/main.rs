use anyhow::Result;
use bridge_core::persist::load_catalog;
use bridge_core::tokenizer::tokenize;
use bridge_core::{train, EngineConfig, Strategy, VectorSpaceRecommender};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "bridge")]
#[command(about = "Recommend catalog courses for missing skills", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct EngineArgs {
    /// Catalog file (.json/.jsonl) or directory
    #[arg(long, default_value = "./data/catalog.jsonl")]
    catalog: String,
    /// JSON engine config file
    #[arg(long)]
    config: Option<String>,
    /// Override the relevance threshold
    #[arg(long)]
    threshold: Option<f64>,
    /// Override the number of courses per skill
    #[arg(long)]
    top_k: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend courses for one or more skills
    Recommend {
        #[command(flatten)]
        engine: EngineArgs,
        /// Matching strategy: vector_space or keyword
        #[arg(long, env = "BRIDGE_STRATEGY")]
        strategy: Option<Strategy>,
        /// Print JSON instead of a listing
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Skills to look up
        #[arg(required = true)]
        skills: Vec<String>,
    },
    /// Show the expansion, terms, weights and raw scores for a piece of text
    Inspect {
        #[command(flatten)]
        engine: EngineArgs,
        /// Number of scored courses to show
        #[arg(long, default_value_t = 5)]
        limit: usize,
        text: String,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend { engine, strategy, json, skills } => {
            let mut config = resolve_config(&engine)?;
            if let Some(strategy) = strategy {
                config.strategy = strategy;
            }
            run_recommend(&engine.catalog, &config, &skills, json)
        }
        Commands::Inspect { engine, limit, text } => {
            let config = resolve_config(&engine)?;
            run_inspect(&engine.catalog, &config, &text, limit)
        }
    }
}

fn resolve_config(args: &EngineArgs) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(t) = args.threshold {
        config.relevance_threshold = t;
    }
    if let Some(k) = args.top_k {
        config.top_k = k;
    }
    config.validate()?;
    Ok(config)
}

fn run_recommend(catalog: &str, config: &EngineConfig, skills: &[String], json: bool) -> Result<()> {
    let records = load_catalog(catalog)?;
    let engine = train(records, config)?;
    let recommendations = engine.recommend(skills);
    tracing::info!(skills = skills.len(), matched = recommendations.len(), "recommendations computed");

    if json {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }
    if recommendations.is_empty() {
        println!("No courses cleared the relevance threshold.");
    }
    for rec in &recommendations {
        println!("{}", rec.skill);
        for course in &rec.courses {
            println!("  {:<12} {}", course.id, course.title);
        }
    }
    Ok(())
}

fn run_inspect(catalog: &str, config: &EngineConfig, text: &str, limit: usize) -> Result<()> {
    let records = load_catalog(catalog)?;
    let recommender = VectorSpaceRecommender::new(records, config)?;
    let model = recommender.model();

    let expanded = recommender.taxonomy().expand(text);
    println!("expanded: {expanded}");
    println!("terms:    {}", tokenize(&expanded).join(" | "));

    let mut weights: Vec<(String, f64)> = model.vectorize(&expanded).into_iter().collect();
    weights.sort_by(|a, b| b.1.total_cmp(&a.1));
    println!("weights:");
    for (term, weight) in &weights {
        println!("  {weight:>8.4}  df={:<3} {term}", model.document_frequency().get(term));
    }

    println!("scores (threshold {}):", config.relevance_threshold);
    for scored in recommender.rank(text).into_iter().take(limit) {
        let mark = if scored.score > config.relevance_threshold { '*' } else { ' ' };
        println!("  {mark} {:.4}  {:<12} {}", scored.score, scored.record.id, scored.record.title);
    }
    Ok(())
}
