use std::io::Write as _;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail, ensure};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use gridpath_core::{Grid, Pos};
use gridpath_maze::{DEFAULT_DENSITY, MazeConfig, MazeKind, Skew};
use gridpath_search::{Algorithm, Alternative, cheapest, compare};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a maze, search it and replay the exploration")]
struct Cli {
    /// Grid height in cells.
    #[arg(long, default_value_t = 15)]
    rows: i32,

    /// Grid width in cells.
    #[arg(long, default_value_t = 31)]
    cols: i32,

    /// Load the grid from a text layout instead of generating one.
    #[arg(long, conflicts_with_all = ["maze", "open"])]
    layout: Option<PathBuf>,

    /// Maze generator: random or division.
    #[arg(long, default_value_t = MazeKind::Division)]
    maze: MazeKind,

    /// Skip maze generation; start and end go to opposite corners.
    #[arg(long)]
    open: bool,

    /// Wall probability for random mazes.
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    density: f64,

    /// Split preference for division mazes: balanced, vertical or horizontal.
    #[arg(long, default_value_t = Skew::Balanced)]
    skew: Skew,

    /// Search strategy: a-star, dijkstra or bfs.
    #[arg(long, default_value_t = Algorithm::AStar)]
    algorithm: Algorithm,

    /// Run every strategy on its own copy of the grid and compare.
    #[arg(long)]
    all: bool,

    /// Seed for maze and weight placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of open cells to give a random weight between 2 and 9.
    #[arg(long, default_value_t = 0)]
    weights: usize,

    /// Replay the visited order frame by frame.
    #[arg(long)]
    animate: bool,

    /// Delay between replay frames, in milliseconds.
    #[arg(long, default_value_t = 30)]
    delay_ms: u64,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let grid = build_grid(&cli)?;
    let algorithms = if cli.all {
        Algorithm::ALL.to_vec()
    } else {
        vec![cli.algorithm]
    };

    let alternatives = compare(&grid, &algorithms, true);
    for alt in &alternatives {
        if cli.animate {
            replay(&grid, alt, Duration::from_millis(cli.delay_ms))?;
        }
        report(alt);
    }
    if alternatives.len() > 1 {
        match cheapest(&alternatives) {
            Some(best) => println!("cheapest: {}", best.algorithm.name()),
            None => println!("no strategy reached the end"),
        }
    }
    Ok(())
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn build_grid(cli: &Cli) -> Result<Grid> {
    if let Some(path) = &cli.layout {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read layout {}", path.display()))?;
        let grid = Grid::parse(&text)
            .with_context(|| format!("invalid layout in {}", path.display()))?;
        info!("loaded a {}x{} layout from {}", grid.rows(), grid.cols(), path.display());
        if grid.start().is_none() || grid.end().is_none() {
            bail!("layout {} needs both an S and an E cell", path.display());
        }
        return Ok(grid);
    }

    let mut grid = Grid::new(cli.rows, cli.cols).context("invalid grid dimensions")?;
    ensure!(
        grid.len() >= 2,
        "a {}x{} grid cannot hold distinct start and end cells",
        cli.rows,
        cli.cols
    );
    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    if cli.open {
        grid.set_start(0, 0);
        grid.set_end(cli.rows - 1, cli.cols - 1);
    } else {
        let config = MazeConfig {
            kind: cli.maze,
            density: cli.density,
            skew: cli.skew,
            seed: Some(rng.random()),
        };
        let walls = config.generate(&mut grid).context("maze generation failed")?;
        info!("{} maze with {walls} walls", config.kind);
    }

    let open: Vec<Pos> = grid
        .iter()
        .filter(|n| !n.is_wall && !n.is_protected())
        .map(|n| n.pos())
        .collect();
    for _ in 0..cli.weights.min(open.len()) {
        let p = open[rng.random_range(0..open.len())];
        grid.set_weight(p.row, p.col, rng.random_range(2..=9));
    }
    Ok(grid)
}

fn replay(grid: &Grid, alt: &Alternative, delay: Duration) -> Result<()> {
    let mut frame = grid.clone();
    let mut out = std::io::stdout().lock();
    for &p in &alt.result.visited {
        if let Some(n) = frame.index(p).and_then(|i| frame.get_mut(i)) {
            n.is_visited = true;
        }
        write!(out, "\x1b[2J\x1b[H{}\n\n{frame}\n", alt.algorithm.name())?;
        out.flush()?;
        thread::sleep(delay);
    }
    Ok(())
}

fn report(alt: &Alternative) {
    println!("{}\n", alt.grid);
    let r = &alt.result;
    match alt.cost() {
        Some(cost) => println!(
            "{}: path of {} cells, cost {cost}, {} cells visited",
            alt.algorithm.name(),
            r.path.len(),
            r.visited.len()
        ),
        None => println!(
            "{}: no path after visiting {} cells",
            alt.algorithm.name(),
            r.visited.len()
        ),
    }
}
