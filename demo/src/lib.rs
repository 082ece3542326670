//! Presentation side of the gridpath demo.
//!
//! Builds a terrain map from a [`DemoConfig`], runs every algorithm and
//! open-set combination between the configured endpoints, and draws each
//! result as a colored map: closed cells dim, open cells medium, the route
//! bright with distinct endpoint colors.

use std::fs;
use std::io::{self, Write};
use std::path::Path as FsPath;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use gridpath_core::{CellId, Grid, Point, Range, Terrain};
use gridpath_search::{Algorithm, FrontierKind, Path, SearchEngine};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Demo settings, read from an optional TOML file. Every field has a
/// default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub width: i32,
    pub height: i32,
    /// Seed for terrain generation.
    pub seed: u64,
    /// Fraction of the map covered by forest blobs.
    pub forest_density: f64,
    /// Fraction of the map covered by water blobs.
    pub water_density: f64,
    /// Blob half-width, 0 to 3.
    pub brush_size: i32,
    /// How many times each search is repeated for timing.
    pub repeat: u32,
    pub start: Option<Point>,
    pub destination: Option<Point>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 24,
            seed: 42,
            forest_density: 0.15,
            water_density: 0.10,
            brush_size: 1,
            repeat: 1,
            start: None,
            destination: None,
        }
    }
}

impl DemoConfig {
    /// Parse a TOML document.
    pub fn from_toml(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("invalid demo configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or use the defaults when no path is given.
    pub fn load(path: Option<&FsPath>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            log::info!("no configuration file given, using defaults");
            return Ok(Self::default());
        };
        let contents = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let config = Self::from_toml(&contents)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(0..=3).contains(&self.brush_size) {
            bail!("brush_size must be between 0 and 3, got {}", self.brush_size);
        }
        if self.repeat == 0 {
            bail!("repeat must be at least 1");
        }
        for (name, d) in [
            ("forest_density", self.forest_density),
            ("water_density", self.water_density),
        ] {
            if !(0.0..=1.0).contains(&d) {
                bail!("{name} must be within [0, 1], got {d}");
            }
        }
        Ok(())
    }

    /// Start point, defaulting to the top-left corner.
    pub fn start(&self) -> Point {
        self.start.unwrap_or(Point::ZERO)
    }

    /// Destination, defaulting to the bottom-right corner.
    pub fn destination(&self) -> Point {
        self.destination
            .unwrap_or(Point::new(self.width - 1, self.height - 1))
    }

    /// Generate the terrain map: random square blobs of forest and water,
    /// with both endpoints left as grass.
    pub fn build_grid(&self) -> anyhow::Result<Grid> {
        let mut grid = Grid::new(self.width, self.height)?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let blob_area = Range::around(Point::ZERO, self.brush_size).len() as f64;

        for (terrain, density) in [
            (Terrain::Forest, self.forest_density),
            (Terrain::Water, self.water_density),
        ] {
            let blobs = (grid.len() as f64 * density / blob_area).round() as usize;
            for _ in 0..blobs {
                let center = Point::new(
                    rng.random_range(0..self.width),
                    rng.random_range(0..self.height),
                );
                grid.fill(Range::around(center, self.brush_size), terrain.cost())?;
            }
        }

        for p in [self.start(), self.destination()] {
            grid.set_terrain(p, Terrain::Grass)
                .with_context(|| format!("endpoint {p} is outside the map"))?;
        }
        Ok(grid)
    }
}

// ---------------------------------------------------------------------------
// Runs
// ---------------------------------------------------------------------------

/// One timed search.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub frontier: FrontierKind,
    pub path: Path,
    /// Total time for all repetitions.
    pub elapsed: Duration,
    pub repeat: u32,
}

impl RunReport {
    /// Mode title, e.g. "A* Mode (Optimized)".
    pub fn name(&self) -> String {
        match self.frontier {
            FrontierKind::SortedList => format!("{} Mode", self.algorithm.name()),
            FrontierKind::BinaryHeap => format!("{} Mode (Optimized)", self.algorithm.name()),
        }
    }
}

/// Run every algorithm × frontier combination between the configured
/// endpoints, each `config.repeat` times.
pub fn run_all(grid: &Grid, config: &DemoConfig) -> anyhow::Result<Vec<RunReport>> {
    let (start, destination) = (config.start(), config.destination());
    let Some((s, d)) = grid.id(start).zip(grid.id(destination)) else {
        bail!("endpoints {start} and {destination} must lie inside the map");
    };

    let mut engine = SearchEngine::new(grid);
    let mut reports = Vec::with_capacity(4);
    for algorithm in Algorithm::ALL {
        for frontier in FrontierKind::ALL {
            let t = Instant::now();
            let mut path = engine.search(grid, s, d, algorithm, frontier);
            for _ in 1..config.repeat {
                path = engine.search(grid, s, d, algorithm, frontier);
            }
            let elapsed = t.elapsed();
            log::info!(
                "{algorithm}/{frontier}: {} nodes visited in {elapsed:?} (x{})",
                path.nodes_visited(),
                config.repeat
            );
            reports.push(RunReport {
                algorithm,
                frontier,
                path,
                elapsed,
                repeat: config.repeat,
            });
        }
    }
    Ok(reports)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mark {
    None,
    Closed,
    Open,
    Route,
    Start,
    Destination,
}

fn marks(grid: &Grid, path: &Path) -> Vec<Mark> {
    let mut marks = vec![Mark::None; grid.len()];
    let mut set = |ids: &[CellId], m: Mark| {
        for id in ids {
            marks[id.index()] = m;
        }
    };
    set(path.closed(), Mark::Closed);
    set(path.open(), Mark::Open);
    set(path.route(), Mark::Route);
    if let Some(s) = path.start() {
        set(&[s], Mark::Start);
    }
    if let Some(d) = path.destination() {
        set(&[d], Mark::Destination);
    }
    marks
}

fn terrain_glyph(terrain: Terrain) -> (char, Color) {
    match terrain {
        Terrain::Grass => ('.', Color::Rgb { r: 40, g: 90, b: 40 }),
        Terrain::Forest => ('♣', Color::Rgb { r: 20, g: 60, b: 20 }),
        Terrain::Water => ('~', Color::Rgb { r: 30, g: 50, b: 120 }),
    }
}

fn shade(c: Color, amount: f32) -> Color {
    match c {
        Color::Rgb { r, g, b } => {
            let mix = |v: u8| (v as f32 + (255.0 - v as f32) * amount) as u8;
            Color::Rgb {
                r: mix(r),
                g: mix(g),
                b: mix(b),
            }
        }
        other => other,
    }
}

/// Draw the map with `report`'s search overlaid, followed by the mode
/// name, timing and node count.
pub fn render(grid: &Grid, report: &RunReport, out: &mut impl Write) -> io::Result<()> {
    let marks = marks(grid, &report.path);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = grid.get(x, y);
            let (ch, base) = terrain_glyph(cell.terrain());
            let (fg, bg) = match marks[(y * grid.width() + x) as usize] {
                Mark::None => (Color::Grey, base),
                Mark::Closed => (Color::Grey, shade(base, 0.25)),
                Mark::Open => (Color::White, shade(base, 0.5)),
                Mark::Route => (Color::Black, shade(base, 0.75)),
                Mark::Start => (Color::Black, Color::Rgb { r: 173, g: 255, b: 47 }),
                Mark::Destination => (Color::Black, Color::Rgb { r: 230, g: 40, b: 40 }),
            };
            queue!(out, SetForegroundColor(fg), SetBackgroundColor(bg), Print(ch))?;
        }
        queue!(out, ResetColor, Print('\n'))?;
    }

    let cost = match report.path.cost() {
        Some(c) => format!("{c}"),
        None => "unreachable".to_owned(),
    };
    queue!(
        out,
        Print(format!("{}\n", report.name())),
        Print(format!(
            "Time (x{}): {} ms\n",
            report.repeat,
            report.elapsed.as_millis()
        )),
        Print(format!("Nodes visited: {}\n", report.path.nodes_visited())),
        Print(format!("Route cost: {cost}\n\n")),
    )?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_fields_missing() {
        let c = DemoConfig::from_toml("width = 10\nheight = 5\n").unwrap();
        assert_eq!(c.width, 10);
        assert_eq!(c.height, 5);
        assert_eq!(c.seed, 42);
        assert_eq!(c.start(), Point::new(0, 0));
        assert_eq!(c.destination(), Point::new(9, 4));
    }

    #[test]
    fn parses_endpoints() {
        let c = DemoConfig::from_toml(
            "start = { x = 1, y = 2 }\ndestination = { x = 7, y = 3 }\nrepeat = 10\n",
        )
        .unwrap();
        assert_eq!(c.start(), Point::new(1, 2));
        assert_eq!(c.destination(), Point::new(7, 3));
        assert_eq!(c.repeat, 10);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(DemoConfig::from_toml("brush_size = 4").is_err());
        assert!(DemoConfig::from_toml("repeat = 0").is_err());
        assert!(DemoConfig::from_toml("water_density = 1.5").is_err());
        assert!(DemoConfig::from_toml("width = \"wide\"").is_err());
    }

    #[test]
    fn terrain_is_seeded_and_keeps_endpoints_clear() {
        let config = DemoConfig {
            width: 30,
            height: 12,
            water_density: 0.3,
            ..DemoConfig::default()
        };
        let a = config.build_grid().unwrap();
        let b = config.build_grid().unwrap();
        assert!(a.iter().zip(b.iter()).all(|((_, x), (_, y))| x.cost() == y.cost()));
        assert!(a.iter().any(|(_, c)| c.terrain() == Terrain::Water));
        assert_eq!(a.get(0, 0).terrain(), Terrain::Grass);
        assert_eq!(a.get(29, 11).terrain(), Terrain::Grass);
    }

    #[test]
    fn endpoint_outside_map_is_an_error() {
        let config = DemoConfig {
            width: 8,
            height: 8,
            destination: Some(Point::new(8, 8)),
            ..DemoConfig::default()
        };
        assert!(config.build_grid().is_err());
        let grid = Grid::new(8, 8).unwrap();
        assert!(run_all(&grid, &config).is_err());
    }

    #[test]
    fn all_modes_agree_on_cost() {
        let config = DemoConfig {
            width: 24,
            height: 10,
            repeat: 2,
            ..DemoConfig::default()
        };
        let grid = config.build_grid().unwrap();
        let reports = run_all(&grid, &config).unwrap();
        assert_eq!(reports.len(), 4);
        let cost = reports[0].path.cost().unwrap();
        for r in &reports {
            assert!((r.path.cost().unwrap() - cost).abs() < 1e-9);
            assert_eq!(r.repeat, 2);
        }
        assert_eq!(reports[0].name(), "Dijkstra Mode");
        assert_eq!(reports[3].name(), "A* Mode (Optimized)");
    }

    #[test]
    fn render_writes_map_and_overlay() {
        let config = DemoConfig {
            width: 6,
            height: 3,
            forest_density: 0.0,
            water_density: 0.0,
            ..DemoConfig::default()
        };
        let grid = config.build_grid().unwrap();
        let reports = run_all(&grid, &config).unwrap();
        let mut buf = Vec::new();
        render(&grid, &reports[1], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Dijkstra Mode (Optimized)"));
        assert!(text.contains("Nodes visited: "));
        assert!(text.contains("Route cost: 6"));
    }

    #[test]
    fn route_marks_override_closed() {
        let grid = Grid::new(4, 1).unwrap();
        let mut engine = SearchEngine::new(&grid);
        let path = engine.search(
            &grid,
            CellId(0),
            CellId(3),
            Algorithm::UniformCost,
            FrontierKind::BinaryHeap,
        );
        let m = marks(&grid, &path);
        assert_eq!(m, vec![Mark::Start, Mark::Route, Mark::Route, Mark::Destination]);
    }
}
