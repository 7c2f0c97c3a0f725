use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::info;
use relabel::rewrite::rewrite;
use relabel::rules::RuleSet;
use relabel::{rules_util, store};
use std::{fs, path::PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Canonicalize category labels in a JSON link catalog", long_about = None)]
struct Args {
    #[clap(flatten)]
    verbose: Option<Verbosity>,

    #[arg(default_value = "links.json")]
    file: PathBuf,

    #[arg(short, long)]
    out_file: Option<PathBuf>,

    #[arg(short, long)]
    rules_file: Option<PathBuf>,
}

fn init_logger(args: &Args) {
    env_logger::Builder::new()
        .filter_level(
            args.verbose
                .as_ref()
                .map(|v| v.log_level_filter())
                .unwrap_or_else(|| log::LevelFilter::Error),
        )
        .format_module_path(false)
        .format_target(false)
        .init();
}

fn load_rules(args: &Args) -> Result<RuleSet> {
    let rules_file = match &args.rules_file {
        Some(rules_file) => rules_file,
        None => return Ok(RuleSet::default()),
    };

    let rules_file_display = rules_file.display();
    let rules_ctx = |op| format!("Unable to {} rules_file: {}", op, &rules_file_display);

    info!("Reading rules file: {}", rules_file_display);
    let rules_str = fs::read_to_string(rules_file).with_context(|| rules_ctx("read"))?;

    info!("Parsing rules file");
    let rules = rules_util::from_yaml_str(&rules_str).with_context(|| rules_ctx("parse"))?;
    Ok(rules)
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logger(&args);
    let rules = load_rules(&args)?;

    let mut document = store::load(&args.file)
        .with_context(|| format!("Unable to load catalog file: {}", args.file.display()))?;

    let stats = rewrite(&mut document, &rules)
        .with_context(|| format!("Unable to rewrite catalog file: {}", args.file.display()))?;

    let out_path = args.out_file.as_ref().unwrap_or(&args.file);
    store::save(&document, out_path)
        .with_context(|| format!("Unable to save catalog file: {}", out_path.display()))?;

    println!(
        "Update complete. Replaced {} label(s), saved to {}.",
        stats.labels_replaced,
        out_path.display()
    );

    Ok(())
}
