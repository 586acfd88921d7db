//! Tree assembly
//!
//! Worklist fixpoint that attaches every non-root person to the tree rooted
//! at the family group's unique "self" record. A person's path may traverse
//! sibling or child slots that only exist once *other* people have been
//! placed, so assembly runs repeated full scans over the remaining
//! candidates instead of a single top-down traversal. Attachment is
//! monotonic (edges are only added), so any scan order converges to the same
//! final graph; a scan that places nobody can never be unstuck and is fatal.

pub mod links;

use log::{debug, info};

use crate::error::{PedigreeError, Result};
use crate::models::person::PersonId;
use crate::models::step::{Step, StepDirection};
use crate::registry::FamilyRegistry;

/// Result of one full scan over the remaining worklist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// Number of candidates attached during the pass
    Placed(usize),
    /// No candidate could be attached; the group cannot reach a fixpoint
    NoProgress,
}

/// Attach every person in the registry to the tree rooted at the unique
/// "self" record, returning the root's handle
///
/// Mutates the registry in place. Fails with `MalformedGroup` when the group
/// does not have exactly one root, and with `UnresolvedPlacement` when a
/// full pass over the worklist places nobody while candidates remain — the
/// group's data references a slot that can never be reached, and no partial
/// graph is returned.
pub fn assemble(registry: &mut FamilyRegistry) -> Result<PersonId> {
    let root = find_root(registry)?;
    registry.get_mut(root).has_full_information = true;

    let mut worklist: Vec<PersonId> = registry.ids().filter(|&id| id != root).collect();
    let mut pass = 0usize;
    while !worklist.is_empty() {
        pass += 1;
        match run_pass(registry, root, &mut worklist) {
            PassOutcome::Placed(placed) => debug!(
                "group {}: pass {pass} placed {placed}, {} remaining",
                registry.group(),
                worklist.len()
            ),
            PassOutcome::NoProgress => {
                return Err(PedigreeError::UnresolvedPlacement {
                    group: registry.group().to_string(),
                    remaining: worklist.len(),
                });
            }
        }
    }

    info!(
        "group {}: assembled {} person(s) in {pass} pass(es)",
        registry.group(),
        registry.len()
    );
    Ok(root)
}

/// Find the single person with an empty relationship path
fn find_root(registry: &FamilyRegistry) -> Result<PersonId> {
    let roots = registry.roots();
    match roots.as_slice() {
        [root] => Ok(*root),
        [] => Err(PedigreeError::MalformedGroup {
            group: registry.group().to_string(),
            reason: "no record with an empty relationship path".to_string(),
        }),
        many => Err(PedigreeError::MalformedGroup {
            group: registry.group().to_string(),
            reason: format!("{} records claim to be the root", many.len()),
        }),
    }
}

/// One full scan: try every remaining candidate once, dropping the placed
/// ones from the worklist
fn run_pass(
    registry: &mut FamilyRegistry,
    root: PersonId,
    worklist: &mut Vec<PersonId>,
) -> PassOutcome {
    let mut placed = 0usize;
    worklist.retain(|&candidate| {
        if try_place(registry, root, candidate) {
            placed += 1;
            false
        } else {
            true
        }
    });
    if placed == 0 {
        PassOutcome::NoProgress
    } else {
        PassOutcome::Placed(placed)
    }
}

/// Walk the candidate's path from the root and attach it at the final hop
///
/// Every step but the last must already resolve to an existing neighbor;
/// the last step attaches the candidate iff its target slot is still free.
/// Returns false when the candidate cannot be placed in this pass.
fn try_place(registry: &mut FamilyRegistry, root: PersonId, candidate: PersonId) -> bool {
    let path = registry.get(candidate).path.clone();
    debug_assert!(!path.is_empty(), "non-root candidates have non-empty paths");

    let mut current = root;
    let last = path.len() - 1;
    for (i, step) in path.iter().enumerate() {
        if i < last {
            match resolve_step(registry, current, step) {
                Some(next) => current = next,
                None => return false,
            }
        } else if !attach(registry, current, candidate, step) {
            return false;
        }
    }

    links::fill_in_surrounding(registry, candidate);
    debug!(
        "group {}: placed `{}`",
        registry.group(),
        registry.get(candidate).relationship_to_root
    );
    true
}

/// Follow one intermediate step from `current`, if the neighbor is resolved
fn resolve_step(registry: &FamilyRegistry, current: PersonId, step: &Step) -> Option<PersonId> {
    let node = registry.get(current);
    match step.direction {
        StepDirection::Father => node.father,
        StepDirection::Mother => node.mother,
        StepDirection::Mate => node.mate,
        StepDirection::Sibling => node.siblings.get(slot(step)).copied(),
        StepDirection::Child => node.children.get(slot(step)).copied(),
    }
}

/// Attach the candidate at `current` via the final step's relation, if the
/// target slot is still free
///
/// An indexed sibling/child step names a specific list position: the
/// candidate attaches only when the append lands exactly there, so a path
/// naming slot 2 waits until slot 1 is filled (and stalls the group if it
/// never is).
fn attach(
    registry: &mut FamilyRegistry,
    current: PersonId,
    candidate: PersonId,
    step: &Step,
) -> bool {
    match step.direction {
        StepDirection::Father if registry.get(current).father.is_none() => {
            links::set_father(registry, current, candidate);
            true
        }
        StepDirection::Mother if registry.get(current).mother.is_none() => {
            links::set_mother(registry, current, candidate);
            true
        }
        StepDirection::Mate if registry.get(current).mate.is_none() => {
            links::set_mate(registry, current, candidate);
            true
        }
        StepDirection::Sibling => {
            let siblings = &registry.get(current).siblings;
            if siblings.contains(&candidate) || siblings.len() != slot(step) {
                return false;
            }
            links::add_sibling(registry, current, candidate);
            true
        }
        StepDirection::Child => {
            let children = &registry.get(current).children;
            if children.contains(&candidate) || children.len() != slot(step) {
                return false;
            }
            links::add_child(registry, current, candidate);
            true
        }
        _ => false,
    }
}

/// 0-based list position for a sibling/child step; an unindexed step reads
/// the first slot
fn slot(step: &Step) -> usize {
    step.index.unwrap_or(1).saturating_sub(1) as usize
}
