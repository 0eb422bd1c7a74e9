use anyhow::{Context, Result};
use rewire_core::address::parse_operator_address;
use rewire_core::locations::LocationList;
use rewire_core::precise::{apply_locations, detect_current_address, Detection};
use rewire_core::project::{load_project_config, resolve_locations_path, ProjectLayout};

use crate::canonicalize_or_current;
use crate::commands::{abort, print_rule, resolve_project_root, Prompt, RunOutcome};

/// Inputs for a precise run that may come from flags instead of prompts.
#[derive(Debug, Clone, Default)]
pub struct PreciseOptions {
    pub old_ip: Option<String>,
    pub new_ip: Option<String>,
    /// Location list override, relative to the working directory.
    pub locations: Option<String>,
}

/// Rewrite the address at every site named in the project's location list.
pub fn precise_command(
    project_path: &str,
    options: PreciseOptions,
    prompt: &mut dyn Prompt,
) -> Result<RunOutcome> {
    let Some(root) = resolve_project_root(project_path)? else {
        return Ok(RunOutcome::Aborted("project path not found".into()));
    };
    let layout = ProjectLayout::new(&root);
    let config = load_project_config(&layout)?;

    let override_path = options.locations.as_deref().map(canonicalize_or_current).transpose()?;
    let locations_path = resolve_locations_path(&layout, &config, override_path.as_deref());
    let list = LocationList::load(&locations_path).with_context(|| {
        format!("Failed to load location list at {}", locations_path.display())
    })?;

    println!("Known IP locations ({}):", list.len());
    print_rule();
    for record in &list.locations {
        println!("  {}:{}  {}", record.file, record.line, record.pattern);
    }
    println!();

    let from_flags = options.old_ip.is_some() && options.new_ip.is_some();

    let old_input = match options.old_ip {
        Some(ip) => ip,
        None => match detect_current_address(&root, &config.sample_file) {
            Detection::Found(detected) => {
                println!("Detected current IP in {}: {detected}", config.sample_file);
                let answer = prompt.ask(&format!("Current IP [{detected}]: "))?;
                if answer.is_empty() {
                    detected
                } else {
                    answer
                }
            }
            other => {
                let reason = match other {
                    Detection::MissingFile => "file not found".to_string(),
                    Detection::Unreadable(err) => err,
                    _ => "no 192.168.x.x address".to_string(),
                };
                return Ok(abort(format!(
                    "Could not detect the current IP from {} ({reason}). Pass --old-ip explicitly.",
                    config.sample_file
                )));
            }
        },
    };

    let new_input = match options.new_ip {
        Some(ip) => ip,
        None => prompt.ask("New IP: ")?,
    };
    if new_input.trim().is_empty() {
        return Ok(abort("No IP provided. Operation cancelled."));
    }

    let old_ip = match parse_operator_address(&old_input) {
        Ok(ip) => ip,
        Err(err) => return Ok(abort(format!("Current IP: {err}"))),
    };
    let new_ip = match parse_operator_address(&new_input) {
        Ok(ip) => ip,
        Err(err) => return Ok(abort(format!("New IP: {err}"))),
    };

    if old_ip == new_ip {
        println!("The IP is already {new_ip}. Nothing to do.");
        return Ok(RunOutcome::Unchanged);
    }

    if !from_flags {
        println!(
            "WARNING: this will replace '{old_ip}' with '{new_ip}' in {} file(s)",
            list.distinct_files().len()
        );
        if !prompt.confirm("Confirm replacement? (s/N): ")? {
            return Ok(abort("Operation cancelled."));
        }
    }

    println!("Replacing '{old_ip}' -> '{new_ip}'...");
    let report = apply_locations(&root, &list, &old_ip, &new_ip);

    for change in &report.changes {
        if change.replacements > 0 {
            println!("  {}: {} replacement(s)", change.file, change.replacements);
        } else {
            println!("  {}: no occurrences", change.file);
        }
    }
    for missing in &report.missing_files {
        println!("  {missing}: file not found, skipped");
    }
    for failed in &report.failed_files {
        println!("  {failed}: could not be read, skipped");
    }
    for stale in &report.stale_records {
        println!("  {stale}: pattern no longer matches, location list may be outdated");
    }

    println!();
    print_rule();
    println!("SUMMARY:");
    println!("  Files modified: {}", report.modified_files.len());
    for file in &report.modified_files {
        println!("    - {file}");
    }
    println!("  Replacements made: {}", report.total_replacements);
    if !report.missing_files.is_empty() {
        println!("  Files missing: {}", report.missing_files.len());
    }
    if !report.failed_files.is_empty() {
        println!("  Files unreadable: {}", report.failed_files.len());
    }
    println!("  New IP configured: {new_ip}");
    println!();
    println!("Done.");

    Ok(RunOutcome::Completed {
        files_modified: report.modified_files.len(),
        total_replacements: report.total_replacements,
        new_ip,
    })
}
