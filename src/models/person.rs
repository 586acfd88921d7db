//! Person entity model
//!
//! This module contains the core Person entity. Relation fields hold arena
//! handles (`PersonId`) into the owning family group's registry rather than
//! references, so the cyclic mate/sibling/parent back-edges stay plain data.

use uuid::Uuid;

use crate::models::step::StepSequence;
use crate::models::types::{Disease, Sex};

/// Arena handle for a person within one family group's registry
///
/// Handles are only meaningful inside the registry that minted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId(pub(crate) u32);

impl PersonId {
    /// Position in the owning registry's arena
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One individual in a family group
#[derive(Debug, Clone)]
pub struct Person {
    /// Stable identifier assigned at load time
    pub uuid: Uuid,
    /// Original relationship description from the record
    pub relationship_to_root: String,
    /// Parsed walk from the family-group root to this person
    pub path: StepSequence,
    /// Whether this person is the family-group root ("self")
    pub is_root: bool,
    /// Sex of the person
    pub sex: Sex,
    /// Whether the person is living
    pub is_living: bool,
    /// Disease or cause-of-death classification, if recorded
    pub disease: Option<Disease>,
    /// Age at disease onset, if recorded
    pub age_onset: Option<u32>,
    /// Age at death, if recorded
    pub age_death: Option<u32>,
    /// Generational altitude relative to the root
    pub generation: i32,
    /// Whether the record described the person as a twin
    pub is_twin: bool,
    /// True once this person has been placed from its own record rather than
    /// only touched as a side effect of placing others
    pub has_full_information: bool,

    // Mutable relations, populated solely by the assembler
    /// Father, if resolved
    pub father: Option<PersonId>,
    /// Mother, if resolved
    pub mother: Option<PersonId>,
    /// Mate, if resolved (always symmetric)
    pub mate: Option<PersonId>,
    /// Children in attachment order, no duplicates
    pub children: Vec<PersonId>,
    /// Siblings, no duplicates, symmetric and transitively closed
    pub siblings: Vec<PersonId>,
}

impl Person {
    /// Create a person from its record description with no relations resolved
    #[must_use]
    pub fn new(
        uuid: Uuid,
        relationship_to_root: impl Into<String>,
        path: StepSequence,
        sex: Sex,
    ) -> Self {
        let is_root = path.is_empty();
        let generation = path.generation();
        Self {
            uuid,
            relationship_to_root: relationship_to_root.into(),
            path,
            is_root,
            sex,
            is_living: true,
            disease: None,
            age_onset: None,
            age_death: None,
            generation,
            is_twin: false,
            has_full_information: false,
            father: None,
            mother: None,
            mate: None,
            children: Vec::new(),
            siblings: Vec::new(),
        }
    }

    /// Handles of all directly adjacent persons (parents, mate, siblings,
    /// children), in that order
    #[must_use]
    pub fn adjacent(&self) -> Vec<PersonId> {
        let mut ids = Vec::with_capacity(3 + self.siblings.len() + self.children.len());
        ids.extend(self.father);
        ids.extend(self.mother);
        ids.extend(self.mate);
        ids.extend(self.siblings.iter().copied());
        ids.extend(self.children.iter().copied());
        ids
    }
}
