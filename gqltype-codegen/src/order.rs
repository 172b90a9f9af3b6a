//! Declaration ordering policies.
//!
//! Two policies decide the order in which definitions are emitted:
//! - [`KindPriority`] groups definitions by kind, then by name, with the
//!   `Query` and `Mutation` roots always last.
//! - [`DependencyPriority`] places every definition after the definitions
//!   it references directly and rejects direct mutual references.
//!
//! [`OrderingStrategy`] is the serializable configuration value that
//! selects one of them.

use crate::error::CodegenError;
use gqltype_schema::{Definition, DefinitionKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Strategy that produces the emission order of a document's definitions.
pub trait OrderingPolicy {
    /// Orders the definitions.
    ///
    /// # Errors
    /// Returns `CodegenError::CircularDependency` when the policy cannot
    /// order two definitions.
    fn order<'d>(&self, definitions: &'d [Definition]) -> Result<Vec<&'d Definition>, CodegenError>;

    /// Short policy name, used in logs.
    fn name(&self) -> &'static str;
}

/// Orders by kind priority, then case-insensitive name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindPriority {
    kinds: Vec<DefinitionKind>,
}

impl KindPriority {
    /// Creates a kind-priority policy from an explicit kind list.
    ///
    /// Kinds missing from the list sort before every listed kind.
    #[must_use]
    pub fn new(kinds: Vec<DefinitionKind>) -> Self {
        Self { kinds }
    }

    fn rank(&self, kind: DefinitionKind) -> Option<usize> {
        self.kinds.iter().position(|k| *k == kind)
    }
}

impl Default for KindPriority {
    fn default() -> Self {
        Self::new(DefinitionKind::DEFAULT_ORDER.to_vec())
    }
}

impl OrderingPolicy for KindPriority {
    fn order<'d>(&self, definitions: &'d [Definition]) -> Result<Vec<&'d Definition>, CodegenError> {
        let mut ordered: Vec<&Definition> = definitions.iter().collect();
        // Stable: equal keys keep document order.
        ordered.sort_by_cached_key(|def| {
            (
                def.is_root_operation(),
                self.rank(def.kind()),
                def.name().to_lowercase(),
            )
        });
        Ok(ordered)
    }

    fn name(&self) -> &'static str {
        "kind-priority"
    }
}

/// Orders so that every definition follows the ones it references directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DependencyPriority;

impl DependencyPriority {
    /// Direct dependencies of each definition, as indices into `definitions`.
    fn dependency_sets(definitions: &[Definition]) -> Vec<BTreeSet<usize>> {
        let index: HashMap<&str, usize> = definitions
            .iter()
            .enumerate()
            .map(|(idx, def)| (def.name(), idx))
            .collect();

        definitions
            .iter()
            .enumerate()
            .map(|(idx, def)| {
                def.references()
                    .into_iter()
                    .filter_map(|name| index.get(name).copied())
                    .filter(|&dep| dep != idx)
                    .collect()
            })
            .collect()
    }
}

impl OrderingPolicy for DependencyPriority {
    fn order<'d>(&self, definitions: &'d [Definition]) -> Result<Vec<&'d Definition>, CodegenError> {
        let deps = Self::dependency_sets(definitions);

        for (idx, set) in deps.iter().enumerate() {
            if let Some(&other) = set.iter().find(|&&dep| dep > idx && deps[dep].contains(&idx)) {
                return Err(CodegenError::circular(
                    definitions[idx].name(),
                    definitions[other].name(),
                ));
            }
        }

        let mut pending: Vec<usize> = deps.iter().map(BTreeSet::len).collect();
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); definitions.len()];
        for (idx, set) in deps.iter().enumerate() {
            for &dep in set {
                dependents[dep].push(idx);
            }
        }

        let mut ready: BTreeSet<usize> = (0..definitions.len())
            .filter(|&idx| pending[idx] == 0)
            .collect();
        let mut placed = vec![false; definitions.len()];
        let mut ordered = Vec::with_capacity(definitions.len());

        while let Some(idx) = ready.pop_first() {
            placed[idx] = true;
            ordered.push(&definitions[idx]);
            for &dependent in &dependents[idx] {
                pending[dependent] -= 1;
                if pending[dependent] == 0 {
                    ready.insert(dependent);
                }
            }
        }

        if ordered.len() < definitions.len() {
            let cyclic: Vec<&str> = placed
                .iter()
                .enumerate()
                .filter(|&(_, &done)| !done)
                .map(|(idx, _)| definitions[idx].name())
                .collect();
            tracing::warn!(
                "Transitive dependency cycle, emitting in document order: {}",
                cyclic.join(", ")
            );
            ordered.extend(
                placed
                    .iter()
                    .enumerate()
                    .filter(|&(_, &done)| !done)
                    .map(|(idx, _)| &definitions[idx]),
            );
        }

        Ok(ordered)
    }

    fn name(&self) -> &'static str {
        "dependency-priority"
    }
}

/// Configured ordering strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "camelCase")]
pub enum OrderingStrategy {
    /// Group by kind in the given priority, then by name.
    KindPriority {
        /// Kind priority list.
        kinds: Vec<DefinitionKind>,
    },
    /// Dependencies first.
    DependencyPriority,
}

impl OrderingStrategy {
    /// Returns the policy implementing this strategy.
    #[must_use]
    pub fn policy(&self) -> Box<dyn OrderingPolicy> {
        match self {
            Self::KindPriority { kinds } => Box::new(KindPriority::new(kinds.clone())),
            Self::DependencyPriority => Box::new(DependencyPriority),
        }
    }
}

impl Default for OrderingStrategy {
    fn default() -> Self {
        Self::KindPriority {
            kinds: DefinitionKind::DEFAULT_ORDER.to_vec(),
        }
    }
}
