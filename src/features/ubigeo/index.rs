//! In-memory index over the administrative hierarchy.
//!
//! Built once from a [`Dataset`] and never mutated afterwards. Lookups by name
//! expect keys already folded with [`normalize_name`].

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::features::ubigeo::codes::{municipality_key, parent_code, Level};
use crate::features::ubigeo::models::{Dataset, Municipality, Parish, State};
use crate::modules::dataset::DatasetError;
use crate::shared::constants::MUNICIPALITY_PLACEHOLDER_SUFFIX;
use crate::shared::text::normalize_name;
use crate::shared::validation::{MUNICIPALITY_CODE_REGEX, PARISH_CODE_REGEX, STATE_CODE_REGEX};

/// Entity counts of a built index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub states: usize,
    pub municipalities: usize,
    pub parishes: usize,
}

/// Read-only index over a loaded dataset
#[derive(Debug)]
pub struct DatasetIndex {
    dataset: Dataset,
    state_by_code: HashMap<String, usize>,
    state_by_name: HashMap<String, usize>,
    states: Vec<StateIndex>,
    stats: IndexStats,
    available: bool,
}

#[derive(Debug, Default)]
struct StateIndex {
    municipality_by_code: HashMap<String, usize>,
    municipality_by_name: NameIndex,
    municipalities: Vec<MunicipalityIndex>,
}

#[derive(Debug, Default)]
struct MunicipalityIndex {
    parish_by_code: HashMap<String, usize>,
    parish_by_name: NameIndex,
}

/// Primary and alternate names of sibling entities.
///
/// Primary names are consulted first. On duplicate keys the first entity in
/// dataset order is kept.
#[derive(Debug, Default)]
struct NameIndex {
    primary: HashMap<String, usize>,
    alternate: HashMap<String, usize>,
}

impl NameIndex {
    fn insert_entity(
        &mut self,
        name: &str,
        alternate_names: &[String],
        position: usize,
        scope: &str,
    ) {
        if let Some(kept) = insert_first(&mut self.primary, normalize_name(name), position) {
            tracing::warn!(
                "Duplicate name '{}' in {}: keeping entry #{}, ignoring entry #{}",
                name,
                scope,
                kept,
                position
            );
        }

        for alternate in alternate_names {
            match insert_first(&mut self.alternate, normalize_name(alternate), position) {
                Some(kept) if kept != position => tracing::warn!(
                    "Alternate name '{}' in {} shared by entries #{} and #{}: keeping #{}",
                    alternate,
                    scope,
                    kept,
                    position,
                    kept
                ),
                _ => {}
            }
        }
    }

    fn get(&self, normalized: &str) -> Option<usize> {
        self.primary
            .get(normalized)
            .or_else(|| self.alternate.get(normalized))
            .copied()
    }
}

/// Insert `key` unless present. Returns the position already stored, if any.
fn insert_first(map: &mut HashMap<String, usize>, key: String, position: usize) -> Option<usize> {
    match map.entry(key) {
        Entry::Occupied(entry) => Some(*entry.get()),
        Entry::Vacant(entry) => {
            entry.insert(position);
            None
        }
    }
}

impl DatasetIndex {
    /// Build the index, validating code formats, prefix containment and uniqueness.
    pub fn build(dataset: Dataset) -> Result<Self, DatasetError> {
        let mut state_by_code = HashMap::with_capacity(dataset.states.len());
        let mut state_by_name = HashMap::with_capacity(dataset.states.len());
        let mut states = Vec::with_capacity(dataset.states.len());
        let mut stats = IndexStats {
            states: dataset.states.len(),
            ..IndexStats::default()
        };

        for (position, state) in dataset.states.iter().enumerate() {
            if !STATE_CODE_REGEX.is_match(&state.code) {
                return Err(DatasetError::Invalid(format!(
                    "state '{}' has malformed code '{}'",
                    state.name, state.code
                )));
            }
            if state_by_code.insert(state.code.clone(), position).is_some() {
                return Err(DatasetError::Invalid(format!(
                    "duplicate state code '{}'",
                    state.code
                )));
            }
            let name_key = normalize_name(&state.name);
            if let Some(kept) = insert_first(&mut state_by_name, name_key, position) {
                tracing::warn!(
                    "Duplicate state name '{}': keeping entry #{}, ignoring entry #{}",
                    state.name,
                    kept,
                    position
                );
            }

            let state_index = StateIndex::build(state)?;
            stats.municipalities += state.municipalities.len();
            stats.parishes += state
                .municipalities
                .iter()
                .map(|m| m.parishes.len())
                .sum::<usize>();
            states.push(state_index);
        }

        tracing::info!(
            "Dataset index built: states={}, municipalities={}, parishes={}",
            stats.states,
            stats.municipalities,
            stats.parishes
        );

        Ok(Self {
            dataset,
            state_by_code,
            state_by_name,
            states,
            stats,
            available: true,
        })
    }

    /// Index with no data, served when the dataset could not be loaded
    pub fn unavailable() -> Self {
        Self {
            dataset: Dataset::default(),
            state_by_code: HashMap::new(),
            state_by_name: HashMap::new(),
            states: Vec::new(),
            stats: IndexStats::default(),
            available: false,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn states(&self) -> &[State] {
        &self.dataset.states
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    /// False only for the stand-in served after a failed load
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Exact match on the two-digit state code
    pub fn state_by_code(&self, code: &str) -> Option<StateNode<'_>> {
        let position = *self.state_by_code.get(code)?;
        Some(self.state_at(position))
    }

    pub fn state_by_name(&self, normalized: &str) -> Option<StateNode<'_>> {
        let position = *self.state_by_name.get(normalized)?;
        Some(self.state_at(position))
    }

    fn state_at(&self, position: usize) -> StateNode<'_> {
        StateNode {
            state: &self.dataset.states[position],
            index: &self.states[position],
        }
    }
}

impl StateIndex {
    fn build(state: &State) -> Result<Self, DatasetError> {
        let scope = format!("state {}", state.code);
        let mut index = StateIndex {
            municipality_by_code: HashMap::with_capacity(state.municipalities.len()),
            municipality_by_name: NameIndex::default(),
            municipalities: Vec::with_capacity(state.municipalities.len()),
        };

        for (position, municipality) in state.municipalities.iter().enumerate() {
            let key = municipality_key(&municipality.code)
                .filter(|_| MUNICIPALITY_CODE_REGEX.is_match(&municipality.code))
                .ok_or_else(|| {
                    DatasetError::Invalid(format!(
                        "municipality '{}' has malformed code '{}'",
                        municipality.name, municipality.code
                    ))
                })?;

            if parent_code(key, Level::State) != Some(state.code.as_str()) {
                return Err(DatasetError::Invalid(format!(
                    "municipality {} is not under state {}",
                    municipality.code, state.code
                )));
            }
            if index
                .municipality_by_code
                .insert(key.to_string(), position)
                .is_some()
            {
                return Err(DatasetError::Invalid(format!(
                    "duplicate municipality code '{}' in state {}",
                    municipality.code, state.code
                )));
            }

            index.municipality_by_name.insert_entity(
                &municipality.name,
                &municipality.alternate_names,
                position,
                &scope,
            );
            index
                .municipalities
                .push(MunicipalityIndex::build(municipality, key)?);
        }

        Ok(index)
    }
}

impl MunicipalityIndex {
    fn build(municipality: &Municipality, key: &str) -> Result<Self, DatasetError> {
        let scope = format!("municipality {}", municipality.code);
        let mut index = MunicipalityIndex {
            parish_by_code: HashMap::with_capacity(municipality.parishes.len()),
            parish_by_name: NameIndex::default(),
        };

        for (position, parish) in municipality.parishes.iter().enumerate() {
            if !PARISH_CODE_REGEX.is_match(&parish.code)
                || parish.code.ends_with(MUNICIPALITY_PLACEHOLDER_SUFFIX)
            {
                return Err(DatasetError::Invalid(format!(
                    "parish '{}' has malformed code '{}'",
                    parish.name, parish.code
                )));
            }
            if parent_code(&parish.code, Level::Municipality) != Some(key) {
                return Err(DatasetError::Invalid(format!(
                    "parish {} is not under municipality {}",
                    parish.code, municipality.code
                )));
            }
            if index
                .parish_by_code
                .insert(parish.code.clone(), position)
                .is_some()
            {
                return Err(DatasetError::Invalid(format!(
                    "duplicate parish code '{}' in municipality {}",
                    parish.code, municipality.code
                )));
            }

            index
                .parish_by_name
                .insert_entity(&parish.name, &parish.alternate_names, position, &scope);
        }

        Ok(index)
    }
}

/// A state together with its child lookup tables
#[derive(Debug, Clone, Copy)]
pub struct StateNode<'a> {
    pub state: &'a State,
    index: &'a StateIndex,
}

impl<'a> StateNode<'a> {
    /// Municipality by code, given as "0701" or "070100"
    pub fn municipality_by_code(&self, code: &str) -> Option<MunicipalityNode<'a>> {
        let key = municipality_key(code)?;
        let position = *self.index.municipality_by_code.get(key)?;
        Some(self.municipality_at(position))
    }

    pub fn municipality_by_name(&self, normalized: &str) -> Option<MunicipalityNode<'a>> {
        let position = self.index.municipality_by_name.get(normalized)?;
        Some(self.municipality_at(position))
    }

    fn municipality_at(&self, position: usize) -> MunicipalityNode<'a> {
        let state: &'a State = self.state;
        let index: &'a StateIndex = self.index;
        MunicipalityNode {
            municipality: &state.municipalities[position],
            index: &index.municipalities[position],
        }
    }
}

/// A municipality together with its parish lookup tables
#[derive(Debug, Clone, Copy)]
pub struct MunicipalityNode<'a> {
    pub municipality: &'a Municipality,
    index: &'a MunicipalityIndex,
}

impl<'a> MunicipalityNode<'a> {
    /// Exact match on the six-digit parish code
    pub fn parish_by_code(&self, code: &str) -> Option<&'a Parish> {
        let municipality: &'a Municipality = self.municipality;
        let position = *self.index.parish_by_code.get(code)?;
        Some(&municipality.parishes[position])
    }

    pub fn parish_by_name(&self, normalized: &str) -> Option<&'a Parish> {
        let municipality: &'a Municipality = self.municipality;
        let position = self.index.parish_by_name.get(normalized)?;
        Some(&municipality.parishes[position])
    }
}
