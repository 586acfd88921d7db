//! Edge-consistency propagation
//!
//! Relation-setting operations invoked by the assembler whenever a new edge
//! is created. Every operation is idempotent: re-adding an existing relation
//! is a no-op, and a slot that already holds a different person is left
//! untouched (edges are only ever added, never removed or overwritten, which
//! keeps attachment monotonic).

use crate::models::person::PersonId;
use crate::models::types::Sex;
use crate::registry::FamilyRegistry;

/// Append `id` unless already present
fn push_unique(list: &mut Vec<PersonId>, id: PersonId) {
    if !list.contains(&id) {
        list.push(id);
    }
}

/// Set `father` as the father of `person`
///
/// Registers `person` among the father's children, mates the father with
/// `person`'s mother when she is already known, and shares the father with
/// every already-known sibling of `person`.
pub fn set_father(registry: &mut FamilyRegistry, person: PersonId, father: PersonId) {
    if person == father {
        return;
    }
    match registry.get(person).father {
        None => registry.get_mut(person).father = Some(father),
        Some(existing) if existing == father => {}
        Some(_) => return,
    }
    push_unique(&mut registry.get_mut(father).children, person);

    if let Some(mother) = registry.get(person).mother {
        set_mate(registry, father, mother);
    }

    // Siblings share both parents once either is discovered
    for sibling in registry.get(person).siblings.clone() {
        if registry.get(sibling).father.is_none() {
            registry.get_mut(sibling).father = Some(father);
        }
        if registry.get(sibling).father == Some(father) {
            push_unique(&mut registry.get_mut(father).children, sibling);
        }
    }
}

/// Set `mother` as the mother of `person`
///
/// Mirror of [`set_father`].
pub fn set_mother(registry: &mut FamilyRegistry, person: PersonId, mother: PersonId) {
    if person == mother {
        return;
    }
    match registry.get(person).mother {
        None => registry.get_mut(person).mother = Some(mother),
        Some(existing) if existing == mother => {}
        Some(_) => return,
    }
    push_unique(&mut registry.get_mut(mother).children, person);

    if let Some(father) = registry.get(person).father {
        set_mate(registry, mother, father);
    }

    for sibling in registry.get(person).siblings.clone() {
        if registry.get(sibling).mother.is_none() {
            registry.get_mut(sibling).mother = Some(mother);
        }
        if registry.get(sibling).mother == Some(mother) {
            push_unique(&mut registry.get_mut(mother).children, sibling);
        }
    }
}

/// Link `person` and `sibling` as siblings
///
/// The whole sibling group reachable from either endpoint is collected with
/// an explicit fixpoint loop, every pair is linked symmetrically, and known
/// parents are shared across the group.
pub fn add_sibling(registry: &mut FamilyRegistry, person: PersonId, sibling: PersonId) {
    if person == sibling {
        return;
    }

    // Fixpoint: pull in siblings-of-members until the set stops growing
    let mut members = vec![person, sibling];
    let mut next = 0;
    while next < members.len() {
        for candidate in registry.get(members[next]).siblings.clone() {
            if !members.contains(&candidate) {
                members.push(candidate);
            }
        }
        next += 1;
    }

    for (i, &a) in members.iter().enumerate() {
        for &b in &members[i + 1..] {
            push_unique(&mut registry.get_mut(a).siblings, b);
            push_unique(&mut registry.get_mut(b).siblings, a);
        }
    }

    let father = members.iter().find_map(|&m| registry.get(m).father);
    let mother = members.iter().find_map(|&m| registry.get(m).mother);
    for &member in &members {
        if let Some(father) = father {
            set_father(registry, member, father);
        }
        if let Some(mother) = mother {
            set_mother(registry, member, mother);
        }
    }
}

/// Register `child` as a child of `parent`
///
/// Sets the child's father or mother slot depending on the parent's sex;
/// when the parent has a known mate, the child is registered under the mate
/// and the mate fills the child's other parent slot.
pub fn add_child(registry: &mut FamilyRegistry, parent: PersonId, child: PersonId) {
    if parent == child {
        return;
    }
    push_unique(&mut registry.get_mut(parent).children, child);
    claim_parent_slot(registry, parent, child);

    if let Some(mate) = registry.get(parent).mate {
        push_unique(&mut registry.get_mut(mate).children, child);
        claim_parent_slot(registry, mate, child);
    }
}

/// Make `person` and `mate` mutual mates
///
/// Both children lists are unioned so a child discovered via either parent
/// becomes visible from both, and each child's missing parent slot is
/// completed from the respective mate.
pub fn set_mate(registry: &mut FamilyRegistry, person: PersonId, mate: PersonId) {
    if person == mate {
        return;
    }
    let forward = registry.get(person).mate;
    let backward = registry.get(mate).mate;
    if forward.is_some_and(|existing| existing != mate)
        || backward.is_some_and(|existing| existing != person)
    {
        return;
    }
    registry.get_mut(person).mate = Some(mate);
    registry.get_mut(mate).mate = Some(person);

    share_children(registry, person, mate);
    share_children(registry, mate, person);
}

/// Propagate consistency outward from a person just placed from its own
/// record
///
/// Re-runs the relation-setting operations toward every directly adjacent
/// node and marks each adjacent node as fully informed. Only invoked once
/// the adjacent nodes provably exist.
pub fn fill_in_surrounding(registry: &mut FamilyRegistry, person: PersonId) {
    registry.get_mut(person).has_full_information = true;

    let entity = registry.get(person);
    let father = entity.father;
    let mother = entity.mother;
    let mate = entity.mate;
    let siblings = entity.siblings.clone();
    let children = entity.children.clone();

    if let Some(father) = father {
        set_father(registry, person, father);
    }
    if let Some(mother) = mother {
        set_mother(registry, person, mother);
    }
    if let Some(mate) = mate {
        set_mate(registry, person, mate);
    }
    for sibling in siblings {
        add_sibling(registry, person, sibling);
    }
    for child in children {
        add_child(registry, person, child);
    }

    // The adjacency may have grown during propagation
    for adjacent in registry.get(person).adjacent() {
        registry.get_mut(adjacent).has_full_information = true;
    }
}

/// Fill the child's father or mother slot from `parent` if still empty
fn claim_parent_slot(registry: &mut FamilyRegistry, parent: PersonId, child: PersonId) {
    match registry.get(parent).sex {
        Sex::Male => {
            if registry.get(child).father.is_none() {
                registry.get_mut(child).father = Some(parent);
            }
        }
        Sex::Female => {
            if registry.get(child).mother.is_none() {
                registry.get_mut(child).mother = Some(parent);
            }
        }
    }
}

/// Make every child of `from` visible from `to`, completing the child's
/// missing parent slot
fn share_children(registry: &mut FamilyRegistry, from: PersonId, to: PersonId) {
    for child in registry.get(from).children.clone() {
        push_unique(&mut registry.get_mut(to).children, child);
        claim_parent_slot(registry, to, child);
    }
}
