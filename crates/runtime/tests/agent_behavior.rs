use behavior_tree::{Status, builder::action};
use maze_content::MazeGenerator;
use maze_core::{Cell, Grid, TileKind};
use runtime::{
    ActionLabel, InMemoryTelemetry, RunOutcome, Simulation, SimulationConfig, ai::nodes::Escape,
};

fn config(sight_radius: u32, start: Cell) -> SimulationConfig {
    let mut config = SimulationConfig {
        start,
        ..SimulationConfig::default()
    };
    config.agent.sight_radius = sight_radius;
    config
}

/// A remembered item outranks exploring, even with Unknown cells all around.
#[test]
fn test_remembered_item_outranks_exploration() {
    let mut maze = Grid::filled(9, 9, TileKind::Path);
    maze.set(Cell::new(2, 2), TileKind::Item).unwrap();
    let mut sim = Simulation::new(maze, config(1, Cell::new(5, 5))).unwrap();
    sim.context_mut().agent.memory.target_item = Some(Cell::new(2, 2));

    let record = sim.tick();

    assert_eq!(record.status, Status::Running);
    assert_eq!(record.action, ActionLabel::MoveToItem);
    assert_eq!(sim.agent().position(), Cell::new(4, 4));
    assert_eq!(sim.agent().memory.exploration_target, None);
    assert!(sim.agent().has_unknown());

    sim.tick();
    sim.tick();
    assert_eq!(sim.agent().position(), Cell::new(2, 2));

    let pickup = sim.tick();
    assert_eq!(pickup.status, Status::Success);
    assert_eq!(pickup.items_collected, 1);
    assert_eq!(sim.agent().memory.target_item, None);
}

/// Known cells never revert to Unknown or change kind, except picked-up items.
#[test]
fn test_belief_is_monotonic() {
    let maze = MazeGenerator::new(21, 21)
        .with_seed(7)
        .with_item_probability(0.05)
        .generate()
        .expect("valid generator parameters");
    let mut sim = Simulation::new(maze, SimulationConfig::default()).unwrap();

    let mut previous = sim.agent().belief().clone();
    let mut collected = 0;
    while !sim.is_finished() && sim.ticks() < sim.tick_limit() {
        let record = sim.tick();
        let current = sim.agent().belief();

        let mut picked = 0;
        for (cell, before) in previous.iter() {
            let after = current.get(cell).unwrap();
            if before == TileKind::Unknown || before == after {
                continue;
            }
            assert_eq!((before, after), (TileKind::Item, TileKind::Path), "at {cell}");
            assert_eq!(sim.maze().get(cell), Some(TileKind::Path));
            picked += 1;
        }

        assert!(picked <= 1);
        collected += picked;
        assert_eq!(record.items_collected, collected);
        previous = current.clone();
    }

    assert!(sim.is_finished(), "agent escaped within the tick limit");
}

/// A step planned through Unknown territory that turns out to be a wall is
/// never taken; the plan is dropped and the next tick routes around it.
#[test]
fn test_stale_step_forces_replanning() {
    use TileKind::{Path as P, Wall as W};
    let maze = Grid::from_rows(vec![
        vec![P, P, P, P, P],
        vec![P, P, W, P, P],
        vec![P, P, P, P, P],
    ])
    .unwrap();
    let mut config = config(1, Cell::new(1, 0));
    config.exit = Some(Cell::new(1, 4));
    let mut sim = Simulation::with_tree(maze, config, action(Escape)).unwrap();

    let planned = sim.tick();
    assert_eq!(planned.status, Status::Running);
    assert_eq!(sim.agent().position(), Cell::new(1, 1));
    assert_eq!(sim.agent().next_step(), Some(Cell::new(1, 2)));

    let stale = sim.tick();
    assert_eq!(stale.status, Status::Failure);
    assert_eq!(sim.agent().position(), Cell::new(1, 1));
    assert!(sim.agent().path().is_empty());
    assert_eq!(sim.agent().memory.current_target, None);
    assert_eq!(sim.agent().memory.end_point, Some(Cell::new(1, 4)));

    let replanned = sim.tick();
    assert_eq!(replanned.status, Status::Running);
    assert_ne!(sim.agent().position(), Cell::new(1, 2));

    let mut telemetry = InMemoryTelemetry::new();
    let summary = sim.run(&mut telemetry).unwrap();
    assert_eq!(summary.outcome, RunOutcome::Escaped);
    assert!(
        telemetry
            .records()
            .iter()
            .all(|r| (r.row, r.col) != (1, 2))
    );
}

/// Sealed-off Unknown cells do not stop the agent from leaving.
#[test]
fn test_unreachable_unknowns_fall_through_to_escape() {
    use TileKind::{Path as P, Wall as W};
    let maze = Grid::from_rows(vec![
        vec![P, P, P, W, P, P],
        vec![P, P, P, W, P, P],
        vec![W, W, W, W, P, P],
        vec![P, P, P, P, P, P],
    ])
    .unwrap();
    let mut cfg = config(1, Cell::new(3, 0));
    cfg.exit = Some(Cell::new(3, 5));
    let mut sim = Simulation::new(maze, cfg).unwrap();

    let summary = sim.run(&mut InMemoryTelemetry::new()).unwrap();
    assert_eq!(summary.outcome, RunOutcome::Escaped);
    assert!(summary.explored_percent < 100.0);
}
