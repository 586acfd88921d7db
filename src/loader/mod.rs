//! Family-record ingestion
//!
//! One tab-separated file per family group: a header line, then one row per
//! person with positional columns (relationship description, sex, living
//! flag, disease label, age of onset, age of death). A failure on any record
//! aborts the whole file — a group is never assembled with a hole in it.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use uuid::Uuid;

use crate::error::{PedigreeError, Result};
use crate::models::person::Person;
use crate::models::types::{Disease, Sex};
use crate::parser::parse_relationship_text;
use crate::registry::FamilyRegistry;

/// Load one family-group file into a registry
///
/// The group id is the file stem; the first line is a column header and is
/// skipped; blank lines are ignored.
pub fn load_family_file(path: &Path) -> Result<FamilyRegistry> {
    let group = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let content = fs::read_to_string(path)?;

    let mut registry = FamilyRegistry::new(group);
    for line in content.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let person = record_from_line(line)?;
        registry.insert(person);
    }

    info!(
        "group {}: loaded {} record(s)",
        registry.group(),
        registry.len()
    );
    Ok(registry)
}

/// Tab-separated family files in a directory, in lexicographic order
pub fn family_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Load every family file in a directory
pub fn load_family_dir(dir: &Path) -> Result<Vec<FamilyRegistry>> {
    family_files(dir)?
        .iter()
        .map(|path| load_family_file(path))
        .collect()
}

/// Build a person from one tab-separated record line
fn record_from_line(line: &str) -> Result<Person> {
    let mut fields = line.split('\t');
    let relationship = fields.next().unwrap_or("").trim();
    let sex_raw = fields.next().unwrap_or("").trim();
    let living_raw = fields.next().unwrap_or("").trim();
    let disease_raw = fields.next().unwrap_or("").trim();
    let onset_raw = fields.next().unwrap_or("").trim();
    let death_raw = fields.next().unwrap_or("").trim();

    let sex = Sex::from_code(sex_raw).ok_or_else(|| PedigreeError::InvalidField {
        field: "sex",
        value: sex_raw.to_string(),
    })?;

    // A missing living flag means the person is alive
    let is_living = match living_raw {
        "Y" | "y" | "" => true,
        "N" | "n" => false,
        other => {
            return Err(PedigreeError::InvalidField {
                field: "living",
                value: other.to_string(),
            });
        }
    };

    let disease = if disease_raw.is_empty() {
        None
    } else {
        Some(
            Disease::from_label(disease_raw).ok_or_else(|| PedigreeError::InvalidField {
                field: "disease",
                value: disease_raw.to_string(),
            })?,
        )
    };

    let parsed = parse_relationship_text(relationship)?;

    let mut person = Person::new(Uuid::new_v4(), relationship, parsed.steps, sex);
    person.is_living = is_living;
    person.disease = disease;
    person.age_onset = parse_age("age of onset", onset_raw)?;
    person.age_death = parse_age("age of death", death_raw)?;
    person.is_twin = parsed.twin;
    Ok(person)
}

fn parse_age(field: &'static str, raw: &str) -> Result<Option<u32>> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| PedigreeError::InvalidField {
            field,
            value: raw.to_string(),
        })
}
