//! Per-family-group person storage
//!
//! This module contains the `FamilyRegistry`, an arena of person entities
//! addressed by stable `PersonId` handles. The registry exclusively owns its
//! persons during assembly; downstream encoders receive it read-only once
//! the group has reached its fixpoint.

use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::models::person::{Person, PersonId};

/// Arena of all persons belonging to one family group
#[derive(Debug, Default)]
pub struct FamilyRegistry {
    /// Group identifier (originally the source file stem)
    group: String,
    /// Person arena; a `PersonId` is an index into this vector
    persons: Vec<Person>,
    /// Lookup from stable identifier to arena handle
    by_uuid: FxHashMap<Uuid, PersonId>,
}

impl FamilyRegistry {
    /// Create an empty registry for one family group
    #[must_use]
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            persons: Vec::new(),
            by_uuid: FxHashMap::default(),
        }
    }

    /// Group identifier
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Add a person and return its handle
    pub fn insert(&mut self, person: Person) -> PersonId {
        let id = PersonId(u32::try_from(self.persons.len()).unwrap_or(u32::MAX));
        self.by_uuid.insert(person.uuid, id);
        self.persons.push(person);
        id
    }

    /// Get a person by handle
    #[must_use]
    pub fn get(&self, id: PersonId) -> &Person {
        &self.persons[id.index()]
    }

    /// Get a person mutably by handle
    pub fn get_mut(&mut self, id: PersonId) -> &mut Person {
        &mut self.persons[id.index()]
    }

    /// Look up a person's handle by stable identifier
    #[must_use]
    pub fn lookup(&self, uuid: &Uuid) -> Option<PersonId> {
        self.by_uuid.get(uuid).copied()
    }

    /// Number of persons in the group
    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Whether the group holds no persons
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Iterate all handles in arena order
    pub fn ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        (0..self.persons.len()).map(|i| PersonId(i as u32))
    }

    /// Iterate all persons in arena order
    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    /// Handles of every person with an empty relationship path
    #[must_use]
    pub fn roots(&self) -> Vec<PersonId> {
        self.ids()
            .filter(|&id| self.get(id).path.is_empty())
            .collect()
    }
}
