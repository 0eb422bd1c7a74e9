use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use anyhow::Result;
use rewire_core::address::parse_operator_address;
use rewire_core::project::{load_project_config, ProjectLayout};
use rewire_core::replace::replace_in_file;
use rewire_core::scanner::Scanner;

use crate::commands::{abort, print_rule, resolve_project_root, Prompt, RunOutcome};

/// Discover hardcoded addresses under `project_path` and rewrite them all to one new address.
///
/// `new_ip` skips the new-address prompt; confirmation is always asked.
pub fn scan_command(
    project_path: &str,
    new_ip: Option<String>,
    prompt: &mut dyn Prompt,
) -> Result<RunOutcome> {
    let Some(root) = resolve_project_root(project_path)? else {
        return Ok(RunOutcome::Aborted("project path not found".into()));
    };
    let layout = ProjectLayout::new(&root);
    let config = load_project_config(&layout)?;
    let scanner = Scanner::new(config.scan);

    println!("Scanning project at: {}", root.display());
    let report = scanner.scan_project(&root);

    if report.is_empty() {
        println!("No hardcoded IP addresses found in the project.");
        return Ok(RunOutcome::NothingFound);
    }

    println!();
    println!("HARDCODED IP ADDRESSES FOUND:");
    print_rule();

    let mut all_ips: BTreeSet<&str> = BTreeSet::new();
    for (path, ips) in &report {
        println!();
        println!("{}", layout.display_relative(path));
        for ip in ips {
            println!("  - {ip}");
            all_ips.insert(ip.as_str());
        }
    }
    println!();
    println!("Unique addresses found: {}", all_ips.len());

    println!();
    print_rule();
    let answer = match new_ip {
        Some(ip) => ip,
        None => prompt.ask("Enter the NEW IP to replace every address found: ")?,
    };
    if answer.trim().is_empty() {
        return Ok(abort("No IP provided. Operation cancelled."));
    }
    let new_ip = match parse_operator_address(&answer) {
        Ok(ip) => ip,
        Err(err) => return Ok(abort(err.to_string())),
    };

    println!();
    println!("WARNING: this will replace {} address(es) with '{new_ip}'", all_ips.len());
    if !prompt.confirm("Confirm replacement? (s/N): ")? {
        return Ok(abort("Operation cancelled."));
    }

    // Group discovered (file, address) pairs by address for reporting.
    let mut files_by_ip: BTreeMap<&str, Vec<&PathBuf>> = BTreeMap::new();
    for (path, ips) in &report {
        for ip in ips {
            files_by_ip.entry(ip.as_str()).or_default().push(path);
        }
    }

    println!();
    println!("Applying replacements...");
    let mut total_replacements = 0;
    let mut modified: BTreeSet<&PathBuf> = BTreeSet::new();

    for (old_ip, files) in files_by_ip {
        if old_ip == new_ip {
            tracing::debug!(ip = old_ip, "address already matches, skipping");
            continue;
        }
        println!();
        println!("Replacing '{old_ip}' -> '{new_ip}'");
        for path in files {
            let replacements = replace_in_file(path, old_ip, &new_ip);
            if replacements > 0 {
                println!("  {}: {replacements} replacement(s)", layout.display_relative(path));
                total_replacements += replacements;
                modified.insert(path);
            }
        }
    }

    println!();
    print_rule();
    println!("SUMMARY:");
    println!("  Files modified: {}", modified.len());
    println!("  Replacements made: {total_replacements}");
    println!("  New IP configured: {new_ip}");
    println!();
    println!("Done.");

    Ok(RunOutcome::Completed { files_modified: modified.len(), total_replacements, new_ip })
}
