use anyhow::{Context, Result};
use clap::CommandFactory;
use clap::{Parser, Subcommand};
use mailsyntax_lib::{Policy, ValidationReport, check_email};

use std::io::{self, BufRead};

#[derive(Parser)]
#[command(name = "mailsyntax-cli")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Commands>,

    /// lit des adresses depuis stdin (une par ligne)
    #[arg(long)]
    stdin: bool,

    /// write report to file (JSON/NDJSON/CSV selon --format)
    #[arg(long)]
    out: Option<String>,

    /// accepte un domaine à label unique (user@com)
    #[arg(long = "allow-tld")]
    allow_tld: bool,

    /// accepte les caractères non-ASCII (local-part et labels)
    #[arg(long)]
    international: bool,

    /// longueur maximale du local-part
    #[arg(long = "max-local-part", default_value_t = mailsyntax_lib::MAX_LOCAL_PART_LENGTH)]
    max_local_part: usize,

    /// longueur maximale de l'adresse complète
    #[arg(long = "max-length", default_value_t = mailsyntax_lib::MAX_ADDRESS_LENGTH)]
    max_length: usize,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    format: String,
}

#[derive(Subcommand)]
enum Commands {
    Validate {
        /// accepte un domaine à label unique (prend le pas sur l'option globale)
        #[arg(long = "allow-tld")]
        allow_tld: bool,
        /// accepte les caractères non-ASCII (prend le pas sur l'option globale)
        #[arg(long)]
        international: bool,
        email: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut policy = Policy {
        allow_top_level_domains: cli.allow_tld,
        allow_international: cli.international,
        max_local_part_length: cli.max_local_part,
        max_address_length: cli.max_length,
    };
    let mut rows: Vec<ValidationReport> = Vec::new();

    if cli.stdin {
        for line in io::stdin().lock().lines() {
            let email = line.context("read stdin")?;
            rows.push(check_email(&email, &policy));
        }
    } else if let Some(Commands::Validate {
        allow_tld,
        international,
        email,
    }) = cli.cmd
    {
        // les drapeaux de la sous-commande s'ajoutent aux globaux
        if allow_tld {
            policy.allow_top_level_domains = true;
        }
        if international {
            policy.allow_international = true;
        }
        rows.push(check_email(&email, &policy));
    } else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    // sortie
    match cli.format.as_str() {
        "human" => {
            for r in &rows {
                if r.ok {
                    println!("[OK]    {}", r.original);
                } else {
                    println!(
                        "[INVALID] {} :: {}",
                        r.original,
                        r.reason.as_deref().unwrap_or("invalid")
                    );
                }
            }
        }
        "json" => {
            #[cfg(feature = "with-serde")]
            {
                let s = serde_json::to_string_pretty(&rows)?;
                if let Some(path) = cli.out {
                    write_all_atomically(&path, s.as_bytes())?;
                } else {
                    println!("{s}");
                }
            }
            #[cfg(not(feature = "with-serde"))]
            {
                eprintln!("format=json nécessite la feature 'with-serde'");
                std::process::exit(1);
            }
        }
        "ndjson" => {
            #[cfg(feature = "with-serde")]
            {
                if let Some(path) = &cli.out {
                    let mut buf = Vec::new();
                    for r in &rows {
                        let line = serde_json::to_string(r)?;
                        buf.extend_from_slice(line.as_bytes());
                        buf.push(b'\n');
                    }
                    write_all_atomically(path, &buf)?;
                } else {
                    for r in &rows {
                        println!("{}", serde_json::to_string(r)?);
                    }
                }
            }
            #[cfg(not(feature = "with-serde"))]
            {
                eprintln!("format=ndjson nécessite la feature 'with-serde'");
                std::process::exit(1);
            }
        }
        "csv" => {
            #[cfg(feature = "with-csv")]
            {
                if let Some(path) = &cli.out {
                    let mut wtr = csv::Writer::from_writer(Vec::new());
                    for r in &rows {
                        write_csv_record(&mut wtr, r)?;
                    }
                    let data = wtr.into_inner()?;
                    write_all_atomically(path, &data)?;
                } else {
                    let mut wtr = csv::Writer::from_writer(std::io::stdout());
                    for r in &rows {
                        write_csv_record(&mut wtr, r)?;
                    }
                    wtr.flush()?;
                }
            }
            #[cfg(not(feature = "with-csv"))]
            {
                eprintln!("format=csv nécessite la feature 'with-csv'");
                std::process::exit(1);
            }
        }
        other => {
            eprintln!("unknown --format '{}', use: human|json|ndjson|csv", other);
            std::process::exit(1);
        }
    }

    // codes de sortie : 0 OK, 2 invalids, 1 fatal
    let any_invalid = rows.iter().any(|r| !r.ok);
    if any_invalid {
        std::process::exit(2);
    }
    Ok(())
}

#[cfg(feature = "with-csv")]
fn write_csv_record<W: std::io::Write>(
    wtr: &mut csv::Writer<W>,
    r: &ValidationReport,
) -> Result<()> {
    wtr.write_record([
        r.original.as_str(),
        if r.ok { "true" } else { "false" },
        r.reason.as_deref().unwrap_or(""),
    ])?;
    Ok(())
}

#[cfg(any(feature = "with-serde", feature = "with-csv"))]
fn write_all_atomically(path: &str, bytes: &[u8]) -> Result<()> {
    use std::io::Write;
    let tmp = format!("{}.tmp", path);
    {
        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(bytes)?;
        f.sync_all()?;
    }
    std::fs::rename(&tmp, path)?;
    Ok(())
}
