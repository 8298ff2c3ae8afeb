//! Data-driven profiles loaded from a JSON catalog
//!
//! Each catalog entry becomes one shared profile whose reference is its id.
//! Stackable entries merge stacks when an element is dropped onto another of
//! the same profile.

use crate::element::{
    CombineOutcome, Element, ElementHandle, ElementProfile, ProfileRef, RuntimeData, UpdateSignal,
};
use crate::io::configuration::{DEFAULT_MAX_STACK, MAX_GRID_DIMENSION};
use crate::io::error::{GridError, Result, file_system_error, invalid_parameter};
use crate::io::resolver::ProfileResolver;
use crate::math::Size;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::rc::Rc;

const fn default_max_stack() -> u32 {
    DEFAULT_MAX_STACK
}

/// Catalog entry describing one element type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSpec {
    /// Unique id, also used as the profile's external reference
    pub id: String,
    /// Footprint width in cells
    pub width: i32,
    /// Footprint height in cells
    pub height: i32,
    /// Largest stack one element may hold; 1 disables stacking
    #[serde(default = "default_max_stack")]
    pub max_stack: u32,
    /// Starting durability of new elements, if they wear
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durability: Option<u32>,
}

impl ProfileSpec {
    /// Create a non-stacking entry
    pub fn new(id: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            max_stack: DEFAULT_MAX_STACK,
            durability: None,
        }
    }

    /// Allow stacks of up to `max_stack` items
    #[must_use]
    pub const fn with_max_stack(mut self, max_stack: u32) -> Self {
        self.max_stack = max_stack;
        self
    }

    /// Give new elements `durability` points of wear
    #[must_use]
    pub const fn with_durability(mut self, durability: u32) -> Self {
        self.durability = Some(durability);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(invalid_parameter("id", &self.id, &"must not be empty"));
        }
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if !(1..=MAX_GRID_DIMENSION).contains(&value) {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        if self.max_stack == 0 {
            return Err(invalid_parameter(
                "max_stack",
                &self.max_stack,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Profile backed by a catalog entry
#[derive(Debug)]
pub struct CatalogProfile {
    spec: ProfileSpec,
    updates: UpdateSignal,
}

impl CatalogProfile {
    /// Create a profile from a validated entry
    ///
    /// # Errors
    ///
    /// Returns an error if the entry has an empty id, a non-positive or
    /// oversized footprint, or a zero stack limit
    pub fn new(spec: ProfileSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self {
            spec,
            updates: UpdateSignal::new(),
        })
    }

    /// The entry this profile was built from
    pub const fn spec(&self) -> &ProfileSpec {
        &self.spec
    }

    /// Whether elements of this profile stack
    pub const fn is_stackable(&self) -> bool {
        self.spec.max_stack > 1
    }
}

impl ElementProfile for CatalogProfile {
    fn size(&self) -> Size {
        Size::new(self.spec.width, self.spec.height)
    }

    fn default_runtime(&self) -> RuntimeData {
        if self.is_stackable() {
            RuntimeData::Stack { count: 1 }
        } else if let Some(max) = self.spec.durability {
            RuntimeData::Durability { current: max, max }
        } else {
            RuntimeData::Empty
        }
    }

    fn combine(&self, existing: &mut Element, incoming: &mut Element) -> CombineOutcome {
        let (Some(held), Some(arriving)) = (
            existing.runtime().stack_count(),
            incoming.runtime().stack_count(),
        ) else {
            return CombineOutcome::Rejected;
        };

        let moved = self.spec.max_stack.saturating_sub(held).min(arriving);
        existing.set_runtime(RuntimeData::Stack {
            count: held + moved,
        });
        incoming.set_runtime(RuntimeData::Stack {
            count: arriving - moved,
        });

        if arriving == moved {
            CombineOutcome::Absorbed
        } else {
            CombineOutcome::Rejected
        }
    }

    fn reference(&self) -> Option<&str> {
        Some(&self.spec.id)
    }

    fn updates(&self) -> &UpdateSignal {
        &self.updates
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    profiles: Vec<ProfileSpec>,
}

/// Set of profiles addressable by id
#[derive(Debug, Default)]
pub struct Catalog {
    profiles: BTreeMap<String, Rc<CatalogProfile>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entries
    ///
    /// # Errors
    ///
    /// Returns an error if an entry is invalid or an id appears twice
    pub fn from_specs(specs: impl IntoIterator<Item = ProfileSpec>) -> Result<Self> {
        let mut catalog = Self::new();
        for spec in specs {
            catalog.add(spec)?;
        }
        Ok(catalog)
    }

    /// Parse a catalog from JSON of the form `{ "profiles": [ ... ] }`
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or an entry is invalid
    pub fn from_json(text: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(text)?;
        Self::from_specs(file.profiles)
    }

    /// Read a catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| file_system_error(path, "read catalog", e))?;
        Self::from_json(&text)
    }

    /// Encode the catalog entries as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFile {
            profiles: self.profiles.values().map(|p| p.spec().clone()).collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Add one entry
    ///
    /// # Errors
    ///
    /// Returns an error if the entry is invalid or its id is already taken
    pub fn add(&mut self, spec: ProfileSpec) -> Result<ProfileRef> {
        if self.profiles.contains_key(&spec.id) {
            return Err(invalid_parameter("id", &spec.id, &"duplicate profile id"));
        }
        let id = spec.id.clone();
        let profile = Rc::new(CatalogProfile::new(spec)?);
        self.profiles.insert(id, Rc::clone(&profile));
        Ok(profile)
    }

    /// Profile registered under `id`
    pub fn get(&self, id: &str) -> Option<ProfileRef> {
        self.profiles
            .get(id)
            .map(|profile| Rc::clone(profile) as ProfileRef)
    }

    /// Concrete profile registered under `id`, for subscribing to updates
    pub fn profile(&self, id: &str) -> Option<&Rc<CatalogProfile>> {
        self.profiles.get(id)
    }

    /// Create a new element of the profile registered under `id`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UnknownProfile`] if no such profile exists
    pub fn spawn(&self, id: &str) -> Result<ElementHandle> {
        self.get(id)
            .map(ElementHandle::from_profile)
            .ok_or_else(|| GridError::UnknownProfile {
                reference: id.to_string(),
            })
    }

    /// Registered ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Number of registered profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profile is registered
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ProfileResolver for Catalog {
    #[allow(clippy::future_not_send)]
    async fn resolve(&self, reference: &str) -> Result<ProfileRef> {
        self.get(reference).ok_or_else(|| GridError::UnknownProfile {
            reference: reference.to_string(),
        })
    }
}
