//! JSON snapshot encoding
//!
//! Wire form of an assembled family graph: one record per person with UUID
//! cross-references for every relation.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;
use crate::registry::FamilyRegistry;

/// One person of an assembled family graph in wire form
#[derive(Debug, Clone, Serialize)]
pub struct PersonEncoding {
    /// Stable person identifier
    pub uuid: Uuid,
    /// Owning family group
    pub family_group: String,
    /// Whether this person is the group's root
    pub is_root: bool,
    /// Sex as the record-file code ("M"/"F")
    pub sex: &'static str,
    /// Whether the person is living
    pub is_living: bool,
    /// Disease classification code, if recorded
    pub disease: Option<u16>,
    /// Age at disease onset, if recorded
    pub age_onset: Option<u32>,
    /// Age at death, if recorded
    pub age_death: Option<u32>,
    /// Generational altitude relative to the root
    pub generation: i32,
    /// Whether the record described the person as a twin
    pub is_twin: bool,
    /// Father's identifier, if resolved
    pub father: Option<Uuid>,
    /// Mother's identifier, if resolved
    pub mother: Option<Uuid>,
    /// Mate's identifier, if resolved
    pub mate: Option<Uuid>,
    /// Children identifiers in attachment order
    pub children: Vec<Uuid>,
    /// Sibling identifiers
    pub siblings: Vec<Uuid>,
}

/// Encode every person of an assembled registry, in arena order
#[must_use]
pub fn encode_registry(registry: &FamilyRegistry) -> Vec<PersonEncoding> {
    registry
        .ids()
        .map(|id| {
            let person = registry.get(id);
            PersonEncoding {
                uuid: person.uuid,
                family_group: registry.group().to_string(),
                is_root: person.is_root,
                sex: person.sex.code(),
                is_living: person.is_living,
                disease: person.disease.map(|disease| disease.code()),
                age_onset: person.age_onset,
                age_death: person.age_death,
                generation: person.generation,
                is_twin: person.is_twin,
                father: person.father.map(|father| registry.get(father).uuid),
                mother: person.mother.map(|mother| registry.get(mother).uuid),
                mate: person.mate.map(|mate| registry.get(mate).uuid),
                children: person
                    .children
                    .iter()
                    .map(|&child| registry.get(child).uuid)
                    .collect(),
                siblings: person
                    .siblings
                    .iter()
                    .map(|&sibling| registry.get(sibling).uuid)
                    .collect(),
            }
        })
        .collect()
}

/// Write the combined snapshot of several assembled groups as one JSON array
pub fn write_json(path: &Path, registries: &[FamilyRegistry]) -> Result<()> {
    let encodings: Vec<PersonEncoding> = registries.iter().flat_map(encode_registry).collect();
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &encodings)?;
    Ok(())
}
