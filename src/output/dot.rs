//! Graphviz rendering of an assembled family graph
//!
//! Generation-banked digraph: one rank per generation with ancestors on top,
//! males as boxes and females as ellipses, a point-shaped union node per
//! mate pair with the couple's children hung off it.

use std::collections::HashSet;
use std::fmt::Write as _;

use itertools::Itertools;
use uuid::Uuid;

use crate::models::person::Person;
use crate::models::types::Sex;
use crate::registry::FamilyRegistry;

/// Render the registry as a Graphviz digraph
#[must_use]
pub fn render_dot(registry: &FamilyRegistry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "digraph \"{}\" {{", escape(registry.group()));
    let _ = writeln!(out, "    rankdir=TB;");
    let _ = writeln!(out, "    edge [dir=none];");

    // Bank persons by generation, ancestors first
    let generations = registry
        .ids()
        .into_group_map_by(|&id| registry.get(id).generation);
    for generation in generations.keys().copied().sorted().rev() {
        let _ = writeln!(out, "    // generation {generation}");
        let _ = writeln!(out, "    {{ rank=same;");
        for &id in &generations[&generation] {
            let person = registry.get(id);
            let _ = writeln!(out, "        {};", declare_node(person));
            // the union node between mates sits on the couple's rank
            if let Some(mate) = person.mate {
                let mate_uuid = registry.get(mate).uuid;
                if person.uuid < mate_uuid {
                    let _ = writeln!(
                        out,
                        "        \"{}\" [shape=point];",
                        union_name(person.uuid, mate_uuid)
                    );
                }
            }
        }
        let _ = writeln!(out, "    }}");
    }

    // Mate pairs hang their children off the shared union node
    let mut hung: HashSet<Uuid> = HashSet::new();
    for id in registry.ids() {
        let person = registry.get(id);
        let Some(mate) = person.mate else { continue };
        let mate_uuid = registry.get(mate).uuid;
        if person.uuid >= mate_uuid {
            continue;
        }
        let union = union_name(person.uuid, mate_uuid);
        let _ = writeln!(out, "    \"{}\" -> \"{union}\";", person.uuid);
        let _ = writeln!(out, "    \"{mate_uuid}\" -> \"{union}\";");
        for &child in &person.children {
            let child_uuid = registry.get(child).uuid;
            let _ = writeln!(out, "    \"{union}\" -> \"{child_uuid}\";");
            hung.insert(child_uuid);
        }
    }

    // Children with a single resolved parent connect directly
    for id in registry.ids() {
        let person = registry.get(id);
        if person.mate.is_some() {
            continue;
        }
        for &child in &person.children {
            let child_uuid = registry.get(child).uuid;
            if !hung.contains(&child_uuid) {
                let _ = writeln!(out, "    \"{}\" -> \"{child_uuid}\";", person.uuid);
            }
        }
    }

    out.push_str("}\n");
    out
}

/// Node declaration with sex-coded shape and the record text as label
fn declare_node(person: &Person) -> String {
    let mut label = if person.relationship_to_root.is_empty() {
        "self".to_string()
    } else {
        person.relationship_to_root.clone()
    };
    if let Some(disease) = person.disease {
        label = format!("{label}\\n{}", disease.label());
    }
    let label = escape(&label);
    match person.sex {
        Sex::Male => format!(
            "\"{}\" [shape=box, regular=1, color=\"blue\", label=\"{label}\"]",
            person.uuid
        ),
        Sex::Female => format!(
            "\"{}\" [shape=ellipse, color=\"red\", label=\"{label}\"]",
            person.uuid
        ),
    }
}

/// Stable union-node name for a mate pair, smaller uuid first
fn union_name(a: Uuid, b: Uuid) -> String {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    format!("{lo}_AND_{hi}")
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
