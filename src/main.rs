// SPDX-License-Identifier: MIT
//
// sitedna — offline operational tooling for the variation engine.
//
// The rendering layer consumes the engine crates directly; this binary is
// what operations runs before and after onboarding domains:
//
//   dna-core    → hashing, selection, collision auditing
//   dna-design  → Design DNA derivation and capacity math
//   dna-content → keyword modules, copy tables, site architecture
//
// Commands:
//
//   sitedna inspect <domain> [keyword] [--advanced] [--json]
//       Derive and print everything a build would derive for one domain:
//       Design DNA, architecture, and sample copy.
//
//   sitedna capacity [basic|advanced]
//       Print the theoretical number of distinct appearances.
//
//   sitedna collisions <context> <domains-file> [--json]
//       Audit a newline-separated domain batch for compound-hash
//       collisions in one context.

use std::env;
use std::fs;
use std::process::ExitCode;

use dna_content::{SiteConfig, architecture};
use dna_core::detect_collisions;
use dna_design::{DesignDna, DesignMode, css_variables};

const USAGE: &str = "usage:
  sitedna inspect <domain> [keyword] [--advanced] [--json]
  sitedna capacity [basic|advanced]
  sitedna collisions <context> <domains-file> [--json]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match command.as_str() {
        "inspect" => inspect(&args[1..]),
        "capacity" => capacity(&args[1..]),
        "collisions" => collisions(&args[1..]),
        _ => {
            eprintln!("unknown command `{command}`\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

/// Consume a `--flag` from the argument list, reporting whether it was there.
fn take_flag(args: &mut Vec<&str>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| *a != flag);
    args.len() != before
}

// ─── inspect ─────────────────────────────────────────────────────────────────

fn inspect(args: &[String]) -> ExitCode {
    let mut args: Vec<&str> = args.iter().map(String::as_str).collect();
    let json = take_flag(&mut args, "--json");
    let advanced = take_flag(&mut args, "--advanced");

    let Some(domain) = args.first().copied() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };
    let keyword = args.get(1).copied().unwrap_or(dna_content::DEFAULT_KEYWORD_ID);
    let mode = if advanced { "advanced" } else { "basic" };

    let config = SiteConfig::new(domain, keyword, mode);
    let dna = config.resolve_dna();
    let bundle = config.bundle();
    let arch = architecture(domain);

    // Copy selection only fails on table-shape defects, which this tool
    // exists to surface — so surface them and fail.
    let rendered = bundle.headline(domain).and_then(|headline| {
        let subheadline = bundle.subheadline(domain)?;
        let faq = bundle.faq(domain, arch.faq_count)?;
        let cta = bundle.cta_hero(domain)?;
        Ok((headline, subheadline, faq, cta))
    });
    let (headline, subheadline, faq, cta) = match rendered {
        Ok(parts) => parts,
        Err(err) => {
            eprintln!("content selection failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    if json {
        let value = serde_json::json!({
            "domain": domain,
            "keyword": bundle.keyword().id,
            "dna": dna,
            "architecture": arch,
            "headline": headline,
            "subheadline": subheadline,
            "faq": faq,
            "cta": cta,
        });
        match serde_json::to_string_pretty(&value) {
            Ok(out) => println!("{out}"),
            Err(err) => {
                eprintln!("serialization failed: {err}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("domain:        {domain}");
    println!("keyword:       {} ({})", bundle.keyword().id, bundle.keyword().label);
    println!("architecture:  {} ({} words target)", arch.name, arch.target_words);
    println!("palette:       {}", dna.palette.name);
    println!("fonts:         {} / {}", dna.fonts.heading, dna.fonts.body);
    println!(
        "layout:        hero={} card={} cta={}",
        dna.hero.name(),
        dna.card.name(),
        dna.cta.name()
    );
    if let Some(adv) = &dna.advanced {
        println!("sections:      {}", adv.section_order);
        println!("spacing:       {} radius={}", adv.spacing_scale, adv.border_radius);
    }
    println!("headline:      {headline}");
    println!("subheadline:   {subheadline}");
    println!("cta:           {cta}");
    println!("faq:           {} entries", faq.len());
    println!("fonts url:     {}", dna.fonts.google_fonts_url());
    println!("\n{}", css_variables(&dna));
    ExitCode::SUCCESS
}

// ─── capacity ────────────────────────────────────────────────────────────────

fn capacity(args: &[String]) -> ExitCode {
    let mode = DesignMode::parse(args.first().map_or("basic", String::as_str));
    let combos = DesignDna::unique_combinations(mode);
    println!("{mode:?} mode: {combos} distinct appearances");
    ExitCode::SUCCESS
}

// ─── collisions ──────────────────────────────────────────────────────────────

fn collisions(args: &[String]) -> ExitCode {
    let mut args: Vec<&str> = args.iter().map(String::as_str).collect();
    let json = take_flag(&mut args, "--json");

    let (Some(context), Some(path)) = (args.first().copied(), args.get(1).copied()) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("cannot read `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };
    let domains: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let report = detect_collisions(&domains, context);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{out}"),
            Err(err) => {
                eprintln!("serialization failed: {err}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("context:           {}", report.context);
    println!("domains:           {}", report.total_domains);
    println!("distinct hashes:   {}", report.distinct_hashes);
    println!("colliding domains: {}", report.colliding_domains);
    println!("collision rate:    {:.4}%", report.collision_rate * 100.0);
    for group in &report.groups {
        println!("  {:016x}: {}", group.hash, group.domains.join(", "));
    }
    ExitCode::SUCCESS
}
