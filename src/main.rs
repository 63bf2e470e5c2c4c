//! FileMyRTI - state catalog and RTI template resolver for the FileMyRTI site.

mod catalog;
mod check;
mod cli;
mod config;
mod export;
mod logger;
mod render;
mod resolver;
mod testimonials;

use anyhow::{Result, bail};
use catalog::{STATE_CATALOG, require_state};
use check::check_catalog;
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use config::SiteConfig;
use export::{StatePage, export_site};
use resolver::{DOCUMENTS, StateMatch, document_url, infer_state, resolve_document_path};
use serde::Serialize;
use std::process::ExitCode;
use testimonials::testimonials_for;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log!("error"; "{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::States => list_states(cli.json),
        Commands::Show { state } => show_state(state, cli.json),
        Commands::Departments { state } => list_departments(&config, state, cli.json),
        Commands::Resolve { name, .. } => resolve(&config, name, cli.json),
        Commands::Testimonials { state, html } => show_testimonials(state, *html, cli.json),
        Commands::Check { strict } => check(*strict, cli.json),
        Commands::Export { .. } => export_site(&config).map(|_| ()),
    }
}

fn list_states(json: bool) -> Result<()> {
    if json {
        return print_json(&STATE_CATALOG.identifiers());
    }
    for state in STATE_CATALOG.records() {
        println!("{:<12} {}", state.identifier, state.display_name);
    }
    Ok(())
}

fn show_state(identifier: &str, json: bool) -> Result<()> {
    let state = require_state(identifier)?;
    if json {
        return print_json(state);
    }

    println!("{} ({})", state.display_name.bold(), state.identifier);
    println!("{}", state.hero.title);
    println!("  {}", state.hero.subtitle.dimmed());
    println!("languages:   {}", state.supported_languages.join(", "));
    println!("commission:  {}", state.regulatory_commission_name);
    println!("fee:         {}", state.application_fee_display);
    if let Some(portal) = &state.rti_portal_url {
        println!("portal:      {portal}");
    }
    println!("departments: {}", state.departments.len());
    let documents = DOCUMENTS.entries_for_state(&state.identifier).count();
    println!("documents:   {documents}");
    for highlight in &state.highlights {
        println!("  - {highlight}");
    }
    Ok(())
}

fn list_departments(config: &SiteConfig, identifier: &str, json: bool) -> Result<()> {
    let state = require_state(identifier)?;
    let page = StatePage::new(state, &config.documents_base());
    if json {
        return print_json(&page.departments);
    }

    if state.sections.is_empty() {
        for link in &page.departments {
            print_link(link.name, link.document_path);
        }
        return Ok(());
    }

    let mut links = page.departments.iter();
    for section in &state.sections {
        println!("{}", section.category.bold());
        for link in links.by_ref().take(section.items.len()) {
            print!("  ");
            print_link(link.name, link.document_path);
        }
    }
    Ok(())
}

fn print_link(name: &str, path: Option<&str>) {
    match path {
        Some(path) => println!("{name} → {path}"),
        None => println!("{name} {}", "(no document)".dimmed()),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Resolution<'a> {
    name: &'a str,
    path: Option<&'static str>,
    url: Option<String>,
    inferred: StateMatch,
    state: &'a str,
}

fn resolve(config: &SiteConfig, name: &str, json: bool) -> Result<()> {
    let path = resolve_document_path(name);
    let inferred = infer_state(name);
    let resolution = Resolution {
        name,
        path,
        url: path.map(|path| document_url(&config.documents_base(), path)),
        inferred,
        state: resolver::infer_state_or_default(name, &config.documents.default_state),
    };
    if json {
        return print_json(&resolution);
    }

    match &resolution.url {
        Some(url) => println!("document: {url}"),
        None => println!("document: {}", "none".dimmed()),
    }
    match inferred.state() {
        Some(state) => println!("state:    {state}"),
        None => println!("state:    {} {}", resolution.state, "(default)".dimmed()),
    }
    Ok(())
}

fn show_testimonials(identifier: &str, html: bool, json: bool) -> Result<()> {
    let state = require_state(identifier)?;
    let section = testimonials_for(&state.identifier);
    if json && !html {
        return print_json(&section);
    }
    let Some(section) = section else {
        log!("testimonials"; "{} has no testimonials", state.display_name);
        return Ok(());
    };

    if html {
        print!("{}", render::testimonials_html(section));
    } else {
        println!("{}", section.heading.bold());
        for item in &section.items {
            println!("\"{}\"", item.quote);
            println!("  {}, {} ({})", item.name, item.role, item.location);
        }
    }
    Ok(())
}

fn check(strict: bool, json: bool) -> Result<()> {
    let reports = check_catalog();
    if json {
        print_json(&reports)?;
    } else {
        for report in &reports {
            let (state, total) = (report.state, report.total);
            let linked = total - report.missing.len();
            let message = format!("{state}: {linked}/{total} departments linked");
            logger::status(report.is_complete(), &message);
            for name in &report.missing {
                println!("    {}", name.dimmed());
            }
        }
    }

    let missing: usize = reports.iter().map(|r| r.missing.len()).sum();
    if strict && missing > 0 {
        bail!("{missing} departments have no registered document");
    }
    if missing > 0 && !json {
        log!("check"; "{missing} departments without a document");
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
