//! Conversion between live grids and flat, serializable element records
//!
//! Capturing walks the distinct elements of a grid and keeps only those whose
//! profile has an external reference. Restoring resolves each record's
//! profile in snapshot order, one request at a time, and stops at the first
//! failure; records already applied stay in the grid.

use crate::element::{Element, ElementHandle, RuntimeData};
use crate::io::error::{GridError, Result, file_system_error};
use crate::io::resolver::ProfileResolver;
use crate::math::Cell;
use crate::spatial::bounds::Boundary;
use crate::spatial::grid::Grid;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Placement of one element as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecord {
    /// External reference of the element's profile
    pub profile_reference: String,
    /// Per-instance state, carried verbatim
    #[serde(default)]
    pub runtime_data: RuntimeData,
    /// Anchor cell of the element
    pub anchor: Cell,
    /// Whether the element was turned a quarter
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub rotated: bool,
}

/// Ordered list of element records describing one grid
///
/// Record order follows the grid's element iteration and is not stable
/// between captures.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridSnapshot {
    /// Records in restore order
    pub contents: Vec<ElementRecord>,
}

impl GridSnapshot {
    /// Create a snapshot from records
    pub const fn new(contents: Vec<ElementRecord>) -> Self {
        Self { contents }
    }

    /// Record every element of `grid` whose profile has a reference
    pub fn capture<B: Boundary>(grid: &Grid<B>) -> Self {
        let contents: Vec<ElementRecord> = grid
            .elements()
            .iter()
            .filter_map(|handle| {
                let element = handle.borrow();
                let profile_reference = element.profile().reference()?.to_string();
                let anchor = element.anchor()?;

                Some(ElementRecord {
                    profile_reference,
                    runtime_data: element.runtime().clone(),
                    anchor,
                    rotated: element.is_rotated(),
                })
            })
            .collect();

        debug!("captured {} records from {}", contents.len(), grid.id());
        Self { contents }
    }

    /// Number of records
    pub const fn len(&self) -> usize {
        self.contents.len()
    }

    /// Whether the snapshot has no records
    pub const fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Encode as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid snapshot
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a snapshot file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| file_system_error(path, "read snapshot", e))?;
        Self::from_json(&text)
    }

    /// Write the snapshot to a file, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        std::fs::write(path, self.to_json()?)
            .map_err(|e| file_system_error(path, "write snapshot", e))
    }
}

/// Outcome of a restore that resolved every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestoreReport {
    /// Records inserted into the grid
    pub inserted: usize,
    /// Records whose profile resolved but whose placement was rejected
    pub rejected: usize,
}

/// Restore that stopped at a failed resolution
///
/// Holds the grid as populated up to the failing record.
#[derive(Debug)]
pub struct PartialRestore {
    /// Grid with every record before the failure applied
    pub grid: Grid,
    /// The resolution failure
    pub error: GridError,
}

impl fmt::Display for PartialRestore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Restore aborted after {} elements: {}",
            self.grid.element_count(),
            self.error
        )
    }
}

impl std::error::Error for PartialRestore {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Rebuild a snapshot into a new unbounded grid
///
/// # Errors
///
/// Returns the partially populated grid and the resolution error if any
/// profile fails to resolve.
#[allow(clippy::future_not_send)]
pub async fn restore<R: ProfileResolver>(
    snapshot: &GridSnapshot,
    resolver: &R,
) -> std::result::Result<Grid, Box<PartialRestore>> {
    let mut grid = Grid::new();
    match restore_into(&mut grid, snapshot, resolver).await {
        Ok(_) => Ok(grid),
        Err(error) => Err(Box::new(PartialRestore { grid, error })),
    }
}

/// Rebuild a snapshot into a new grid, handing it to `on_complete`
///
/// `on_complete` runs only if every record resolved.
///
/// # Errors
///
/// Returns the partial restore if any profile fails to resolve.
#[allow(clippy::future_not_send)]
pub async fn restore_then<R, F>(
    snapshot: &GridSnapshot,
    resolver: &R,
    on_complete: F,
) -> std::result::Result<(), Box<PartialRestore>>
where
    R: ProfileResolver,
    F: FnOnce(Grid),
{
    let grid = restore(snapshot, resolver).await?;
    on_complete(grid);
    Ok(())
}

/// Insert every record of `snapshot` into an existing grid
///
/// Records whose placement is rejected are skipped and counted.
///
/// # Errors
///
/// Returns [`GridError::ProfileResolution`] at the first profile that fails
/// to resolve; the records before it remain in `grid`.
#[allow(clippy::future_not_send)]
pub async fn restore_into<B: Boundary, R: ProfileResolver>(
    grid: &mut Grid<B>,
    snapshot: &GridSnapshot,
    resolver: &R,
) -> Result<RestoreReport> {
    let mut report = RestoreReport::default();

    for (index, record) in snapshot.contents.iter().enumerate() {
        let profile = match resolver.resolve(&record.profile_reference).await {
            Ok(profile) => profile,
            Err(source) => {
                warn!(
                    "restore into {} aborted at record {index} ('{}')",
                    grid.id(),
                    record.profile_reference
                );
                return Err(GridError::ProfileResolution {
                    index,
                    reference: record.profile_reference.clone(),
                    source: Box::new(source),
                });
            }
        };

        let mut element = Element::with_runtime(profile, record.runtime_data.clone());
        element.set_rotated(record.rotated);
        let handle = ElementHandle::new(element);

        if grid.insert_element_at(&handle, record.anchor, true) {
            report.inserted += 1;
        } else {
            warn!(
                "record {index} ('{}') rejected at {}",
                record.profile_reference, record.anchor
            );
            report.rejected += 1;
        }
    }

    Ok(report)
}
