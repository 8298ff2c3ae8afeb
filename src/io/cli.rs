//! Command-line interface for inspecting and editing grid snapshot files

use crate::algorithm::search::scatter;
use crate::element::{ElementHandle, RuntimeData};
use crate::io::catalog::Catalog;
use crate::io::configuration::{
    DEFAULT_CELL_PIXELS, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_SEED, MAX_GRID_DIMENSION,
    RANDOM_PLACEMENT_ATTEMPTS, RENDER_SUFFIX,
};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::io::render::{export_png, render_text};
use crate::io::snapshot::{GridSnapshot, restore_into};
use crate::math::Cell;
use crate::spatial::grid::SizedGrid;
use clap::{Parser, Subcommand};
use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "gridstash")]
#[command(
    author,
    version,
    about = "Inspect and edit spatial inventory grid snapshots"
)]
/// Command-line arguments shared by every command
pub struct Cli {
    /// Profile catalog (JSON) resolving the snapshot's profile references
    #[arg(short, long, value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Snapshot file to operate on; a missing file starts an empty grid
    #[arg(short, long, value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Grid width in cells
    #[arg(short = 'W', long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: i32,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: i32,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Operations on a snapshot
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the grid as text
    Show,

    /// Place a new element of a profile
    Place {
        /// Catalog id of the profile
        profile: String,
        /// Anchor column
        x: i32,
        /// Anchor row
        y: i32,
        /// Reject instead of stacking onto an element of the same profile
        #[arg(long)]
        no_combine: bool,
        /// Turn the element a quarter before placing it
        #[arg(short, long)]
        rotate: bool,
        /// Stack size of the new element (stackable profiles only)
        #[arg(long)]
        count: Option<u32>,
    },

    /// Remove the element covering a cell
    Remove {
        /// Column of any cell of the element
        x: i32,
        /// Row of any cell of the element
        y: i32,
    },

    /// Move the element covering a cell to a new anchor
    Move {
        /// Column of any cell of the element
        from_x: i32,
        /// Row of any cell of the element
        from_y: i32,
        /// New anchor column
        to_x: i32,
        /// New anchor row
        to_y: i32,
        /// Reject instead of stacking onto an element of the same profile
        #[arg(long)]
        no_combine: bool,
    },

    /// Place new elements of a profile at random free positions
    Fill {
        /// Catalog id of the profile
        profile: String,
        /// Number of elements to create
        #[arg(short, long, default_value_t = 1)]
        amount: usize,
        /// Random seed for reproducible placement
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },

    /// Export the grid as a PNG image
    Render {
        /// Output path (defaults to the snapshot path with a `_grid.png` suffix)
        output: Option<PathBuf>,
        /// Side length of one cell in pixels
        #[arg(long, default_value_t = DEFAULT_CELL_PIXELS)]
        cell_pixels: u32,
    },
}

impl Command {
    /// Whether the command changes the snapshot
    pub const fn is_mutating(&self) -> bool {
        !matches!(self, Self::Show | Self::Render { .. })
    }
}

/// A snapshot restored into a bounded grid, ready for commands
pub struct Session {
    catalog: Catalog,
    grid: SizedGrid,
    snapshot_path: PathBuf,
}

impl Session {
    /// Load the catalog and restore the snapshot named by `cli`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The grid dimensions are outside `1..=MAX_GRID_DIMENSION`
    /// - The catalog or snapshot cannot be read or parsed
    /// - A snapshot record references a profile missing from the catalog
    pub fn open(cli: &Cli) -> Result<Self> {
        for (parameter, value) in [("width", cli.width), ("height", cli.height)] {
            if !(1..=MAX_GRID_DIMENSION).contains(&value) {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        let catalog = Catalog::load(&cli.catalog)?;
        let snapshot = if cli.snapshot.exists() {
            GridSnapshot::load(&cli.snapshot)?
        } else {
            GridSnapshot::default()
        };

        let mut grid = SizedGrid::with_size(cli.width, cli.height);
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .map_err(|e| GridError::AsyncRuntime { source: e })?;
        let report = runtime.block_on(restore_into(&mut grid, &snapshot, &catalog))?;

        if report.rejected > 0 {
            warn!(
                "{} of {} records did not fit a {}x{} grid",
                report.rejected,
                snapshot.len(),
                cli.width,
                cli.height
            );
        }

        Ok(Self {
            catalog,
            grid,
            snapshot_path: cli.snapshot.clone(),
        })
    }

    /// The restored grid
    pub const fn grid(&self) -> &SizedGrid {
        &self.grid
    }

    /// The loaded catalog
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Write the grid back to the snapshot file
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written
    pub fn save(&self) -> Result<()> {
        GridSnapshot::capture(&self.grid).save(&self.snapshot_path)
    }

    /// Run one command, returning the report to print
    ///
    /// Mutating commands save the snapshot when they change the grid.
    ///
    /// # Errors
    ///
    /// Returns an error if a profile is unknown, a removal targets an empty
    /// cell, a parameter is invalid, or a file cannot be written
    pub fn execute(&mut self, command: &Command) -> Result<String> {
        match command {
            Command::Show => Ok(self.describe()),
            Command::Place {
                profile,
                x,
                y,
                no_combine,
                rotate,
                count,
            } => self.place(profile, Cell::new(*x, *y), !*no_combine, *rotate, *count),
            Command::Remove { x, y } => {
                let position = Cell::new(*x, *y);
                let element = self.grid.remove_element_at(position)?;
                self.save()?;
                Ok(format!(
                    "removed {} from {position}\n",
                    reference_of(&element)
                ))
            }
            Command::Move {
                from_x,
                from_y,
                to_x,
                to_y,
                no_combine,
            } => {
                let from = Cell::new(*from_x, *from_y);
                let to = Cell::new(*to_x, *to_y);
                if !self.grid.has_element_at(from) {
                    return Err(GridError::InvalidPosition { position: from });
                }
                if self.grid.move_element(from, to, !*no_combine) {
                    self.save()?;
                    Ok(format!("moved element from {from} to {to}\n"))
                } else {
                    Ok(format!("move from {from} to {to} rejected\n"))
                }
            }
            Command::Fill {
                profile,
                amount,
                seed,
            } => {
                let elements = (0..*amount)
                    .map(|_| self.catalog.spawn(profile))
                    .collect::<Result<Vec<ElementHandle>>>()?;
                let mut rng = StdRng::seed_from_u64(*seed);
                let region = *self.grid.boundary();
                let placed = scatter(
                    &mut self.grid,
                    &elements,
                    region,
                    &mut rng,
                    RANDOM_PLACEMENT_ATTEMPTS,
                );
                if placed > 0 {
                    self.save()?;
                }
                Ok(format!("placed {placed} of {amount} {profile}\n"))
            }
            Command::Render {
                output,
                cell_pixels,
            } => {
                let path = output
                    .clone()
                    .unwrap_or_else(|| render_path(&self.snapshot_path));
                export_png(&self.grid, *self.grid.boundary(), *cell_pixels, &path)?;
                Ok(format!("wrote {}\n", path.display()))
            }
        }
    }

    fn place(
        &mut self,
        profile: &str,
        position: Cell,
        combine: bool,
        rotate: bool,
        count: Option<u32>,
    ) -> Result<String> {
        let element = self.catalog.spawn(profile)?;

        if let Some(count) = count {
            if element.runtime().stack_count().is_none() {
                return Err(invalid_parameter(
                    "count",
                    &count,
                    &format!("profile '{profile}' does not stack"),
                ));
            }
            element
                .borrow_mut()
                .set_runtime(RuntimeData::Stack { count });
        }
        element.borrow_mut().set_rotated(rotate);

        if !self.grid.insert_element_at(&element, position, combine) {
            return Ok(format!("placement of {profile} at {position} rejected\n"));
        }

        self.save()?;
        if element.in_grid(self.grid.id()) {
            info!("placed {profile} at {position}");
            Ok(format!("placed {profile} at {position}\n"))
        } else {
            Ok(format!("stacked {profile} onto {position}\n"))
        }
    }

    fn describe(&self) -> String {
        let size = self.grid.size();
        format!(
            "{}{} elements, {}/{} cells occupied\n",
            render_text(&self.grid, *self.grid.boundary()),
            self.grid.element_count(),
            self.grid.occupied_count(),
            size.area()
        )
    }
}

/// Parse-free entry point used by the binary
///
/// # Errors
///
/// Propagates errors from [`Session::open`] and [`Session::execute`]
pub fn run(cli: &Cli) -> Result<String> {
    let mut session = Session::open(cli)?;
    session.execute(&cli.command)
}

fn reference_of(element: &ElementHandle) -> String {
    element
        .profile()
        .reference()
        .unwrap_or("element")
        .to_string()
}

fn render_path(snapshot_path: &Path) -> PathBuf {
    let stem = snapshot_path.file_stem().unwrap_or_default();
    let name = format!("{}{RENDER_SUFFIX}.png", stem.to_string_lossy());

    snapshot_path
        .parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}
