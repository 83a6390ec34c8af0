//! yh: CLI for the Yahtzee scoring rules.
//!
//! Subcommands:
//! - rules   list the rule table
//! - score   score a hand against one or all rules
//! - claim   run claims against a fresh score sheet

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, warn};

use yh_core::{ClaimOutcome, ClaimSheet, RuleId, RuleKind, RuleSet, RulesConfig, ScoringRule};
use yh_logging::{ClaimEventV1, NdjsonWriter};

#[derive(Parser)]
#[command(name = "yh")]
#[command(about = "Yahtzee scoring rules", version)]
struct Args {
    /// Rule payouts (YAML). Defaults to the standard values.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every rule with its kind and description
    Rules {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Score a hand (e.g. `yh score 2 2 3 3 3` or `yh score 2,2,3,3,3`)
    Score {
        /// Five dice, 1-6
        #[arg(required = true, num_args = 1.., value_delimiter = ',')]
        dice: Vec<u8>,

        /// Only score this rule
        #[arg(short, long)]
        rule: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Claim rules in order on a fresh sheet (e.g. `yh claim yahtzee=4,4,4,4,4 chance=1,2,3,4,6`)
    Claim {
        /// RULE=D,D,D,D,D
        #[arg(required = true, value_parser = parse_claim)]
        claims: Vec<(String, Vec<u8>)>,

        /// Append one NDJSON event per claim to this file
        #[arg(long)]
        log: Option<PathBuf>,
    },
}

fn parse_claim(s: &str) -> Result<(String, Vec<u8>), String> {
    let (rule, dice) = s
        .split_once('=')
        .ok_or_else(|| format!("expected RULE=D,D,D,D,D, got `{s}`"))?;
    let dice = dice
        .split(',')
        .map(|d| {
            d.trim()
                .parse::<u8>()
                .map_err(|_| format!("invalid die `{d}` in `{s}`"))
        })
        .collect::<Result<Vec<u8>, String>>()?;
    Ok((rule.trim().to_string(), dice))
}

fn load_rules(config: Option<&Path>) -> Result<RuleSet> {
    let Some(path) = config else {
        return Ok(RuleSet::standard().clone());
    };
    let cfg = RulesConfig::load(path)
        .with_context(|| format!("loading config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validating config {}", path.display()))?;
    debug!(?cfg, "loaded rules config");
    Ok(RuleSet::from_config(&cfg))
}

#[derive(Serialize)]
struct RuleRow<'a> {
    rule: RuleId,
    kind: RuleKind,
    description: &'a str,
    max_score: u32,
}

fn cmd_rules(rules: &RuleSet, json: bool) -> Result<()> {
    if json {
        let rows: Vec<RuleRow<'_>> = rules
            .iter()
            .map(|(rule, def)| RuleRow {
                rule,
                kind: def.kind(),
                description: def.description(),
                max_score: def.max_score(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    for (id, rule) in rules.iter() {
        println!("{:<15} {:<17} {}", id, rule.kind(), rule.description());
    }
    Ok(())
}

#[derive(Serialize)]
struct ScoreRow {
    rule: RuleId,
    score: u32,
}

#[derive(Serialize)]
struct ScoreReport<'a> {
    dice: &'a [u8],
    scores: Vec<ScoreRow>,
}

fn cmd_score(rules: &RuleSet, dice: &[u8], rule: Option<&str>, json: bool) -> Result<()> {
    let selected: Vec<(RuleId, &ScoringRule)> = match rule {
        Some(name) => vec![rules.by_name(name)?],
        None => rules.iter().collect(),
    };

    let mut scores = Vec::with_capacity(selected.len());
    for (id, r) in selected {
        let score = r
            .evaluate(dice)
            .with_context(|| format!("scoring {id} on {dice:?}"))?;
        scores.push(ScoreRow { rule: id, score });
    }

    if json {
        let report = ScoreReport { dice, scores };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for row in &scores {
            println!("{:<15} {:>3}", row.rule, row.score);
        }
    }
    Ok(())
}

fn cmd_claim(rules: &RuleSet, claims: &[(String, Vec<u8>)], log: Option<&Path>) -> Result<()> {
    let mut writer = match log {
        Some(path) => Some(
            NdjsonWriter::open_append(path)
                .with_context(|| format!("opening claim log {}", path.display()))?,
        ),
        None => None,
    };

    let mut sheet = ClaimSheet::new(rules);
    let mut rejected = 0usize;

    for (name, dice) in claims {
        let id: RuleId = name.parse()?;
        let event = match sheet.claim(id, dice) {
            Ok(ClaimOutcome::Claimed(score)) => {
                println!("{id:<15} {dice:?} -> claimed {score}");
                ClaimEventV1::new(id.name(), dice, "claimed").with_score(score)
            }
            Ok(ClaimOutcome::AlreadyClaimed(score)) => {
                println!("{id:<15} {dice:?} -> already claimed ({score})");
                ClaimEventV1::new(id.name(), dice, "already_claimed").with_score(score)
            }
            Err(e) => {
                warn!(rule = %id, ?dice, error = %e, "claim rejected");
                eprintln!("{id:<15} {dice:?} -> rejected: {e}");
                rejected += 1;
                ClaimEventV1::new(id.name(), dice, "invalid_hand").with_error(&e)
            }
        };
        if let Some(w) = writer.as_mut() {
            w.write_event(&event)?;
        }
    }
    if let Some(w) = writer.as_mut() {
        w.flush()?;
    }

    println!();
    for row in sheet.rows() {
        println!("{:<15} {}", row.id(), row.label());
    }

    if rejected > 0 {
        bail!("{rejected} claim(s) rejected");
    }
    Ok(())
}

fn main() -> Result<()> {
    yh_logging::init_tracing("yh=warn,yh_core=warn");
    let args = Args::parse();
    let rules = load_rules(args.config.as_deref())?;

    match args.command {
        Command::Rules { json } => cmd_rules(&rules, json),
        Command::Score { dice, rule, json } => cmd_score(&rules, &dice, rule.as_deref(), json),
        Command::Claim { claims, log } => cmd_claim(&rules, &claims, log.as_deref()),
    }
}
