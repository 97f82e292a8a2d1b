use std::io;

use clap::{Parser, Subcommand};
use lumir_base::{LetterClass, ReductionPolicy, decode, reduce};
use lumir_engine::{NumerologyReport, compute};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

/// Names shorter than this (after trimming) are rejected.
const MIN_NAME_CHARS: usize = 2;

#[derive(Parser)]
#[command(name = "lumir", about = "Lumir numerology CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full numerology report for a person
    Report {
        /// Date of birth (DD/MM/YYYY)
        #[arg(long)]
        dob: String,
        /// Full name, Vietnamese diacritics allowed
        #[arg(long)]
        name: String,
        /// Reference date for personal year/day (DD/MM/YYYY, default: today in Vietnam)
        #[arg(long)]
        date: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Letter-by-letter breakdown of a name
    Decode {
        /// Full name
        #[arg(long)]
        name: String,
    },
    /// Reduce a number by repeated digit summing
    Reduce {
        /// Non-negative integer
        n: u32,
        /// Policy: single, 11-22 or 11-22-33
        #[arg(long, default_value = "11-22-33")]
        policy: String,
    },
}

#[derive(Serialize)]
struct InputEcho<'a> {
    full_name: &'a str,
    date_of_birth: &'a str,
    current_date: Option<&'a str>,
}

/// Output shape of the numerology service: the request echoed back next to
/// the indices.
#[derive(Serialize)]
struct ReportEnvelope<'a> {
    input: InputEcho<'a>,
    pwi_indices: &'a NumerologyReport,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn validate_name(name: &str) -> Result<&str, String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("name must not be empty".to_string());
    }
    if trimmed.chars().count() < MIN_NAME_CHARS {
        return Err(format!("name must have at least {MIN_NAME_CHARS} characters"));
    }
    Ok(trimmed)
}

fn require_name(name: &str) -> &str {
    validate_name(name).unwrap_or_else(|e| {
        eprintln!("Invalid name: {e}");
        std::process::exit(1);
    })
}

fn require_policy(label: &str) -> ReductionPolicy {
    ReductionPolicy::from_label(label).unwrap_or_else(|| {
        eprintln!("Invalid policy: {label}");
        eprintln!("Valid: single, 11-22, 11-22-33");
        std::process::exit(1);
    })
}

fn join_numbers(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_report(r: &NumerologyReport) {
    println!("Date of birth:               {}", r.day_of_birth);
    println!("Reference date:              {}", r.current_date);
    println!("Life path:                   {}", r.life_path);
    println!("Life purpose:                {}", r.life_purpose);
    println!("Balance:                     {}", r.balance);
    println!("Soul:                        {}", r.soul);
    println!("Personality:                 {}", r.personality);
    println!("Birth day:                   {}", r.birth_day);
    println!("Subconscious strength:       {}", r.subconscious_strength);
    println!("Maturity:                    {}", r.maturity);
    println!("Missing aspects:             [{}]", join_numbers(&r.missing_aspects));
    println!("Shadow challenge code:       {}", r.shadow_challenge_code.label());
    println!("Passion:                     [{}]", join_numbers(&r.passion));
    println!(
        "Societal adaptability index: {}",
        r.societal_adaptability_index.label()
    );
    println!("Emotional response style:    {}", r.emotional_response_style);
    println!("Life path / purpose link:    {}", r.lifepath_life_purpose_link);
    println!("Soul / personality link:     {}", r.soul_personality_link);
    let m = r.milestone_phase;
    println!(
        "Milestone phase:             {} {} {} {}",
        m.milestone_1, m.milestone_2, m.milestone_3, m.milestone_4
    );
    let c = r.challenge;
    println!(
        "Challenge:                   {} {} {} {}",
        c.challenge_1, c.challenge_2, c.challenge_3, c.challenge_4
    );
    println!("Rational thinking:           {}", r.rational_thinking);
    println!("Age milestones:              [{}]", join_numbers(&r.age_milestones));
    println!(
        "Personal year / day:         {} / {}",
        r.alignment_signals.personal_year, r.alignment_signals.personal_day
    );
}

fn print_breakdown(name: &str) {
    let profile = decode(name);
    if profile.is_empty() {
        println!("No word parts");
        return;
    }
    println!("Name: {}", profile.cleaned());
    for (i, word) in profile.words().iter().enumerate() {
        println!("Word {}: {}", i + 1, word.text());
        for letter in word.letters() {
            println!("  {}  {}  {}", letter.ch, letter.code, letter.class.name());
        }
        println!(
            "  vowels: {}  consonants: {}",
            word.class_sum(LetterClass::Vowel),
            word.class_sum(LetterClass::Consonant)
        );
    }
    let codes: Vec<u32> = profile.flat_codes().iter().map(|&c| c as u32).collect();
    println!("Flat codes: [{}]", join_numbers(&codes));
    println!("Total: {}", profile.code_sum());
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Report {
            dob,
            name,
            date,
            json,
        } => {
            let name = require_name(&name);
            info!(dob = %dob, "computing report");
            let report = compute(&dob, name, date.as_deref()).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            if json {
                let envelope = ReportEnvelope {
                    input: InputEcho {
                        full_name: name,
                        date_of_birth: &dob,
                        current_date: date.as_deref(),
                    },
                    pwi_indices: &report,
                };
                match serde_json::to_string_pretty(&envelope) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Failed to serialize report: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_report(&report);
            }
        }

        Commands::Decode { name } => {
            let name = require_name(&name);
            print_breakdown(name);
        }

        Commands::Reduce { n, policy } => {
            let policy = require_policy(&policy);
            println!("{}", reduce(n, policy));
        }
    }
}
