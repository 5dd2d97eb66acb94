use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use snake_grid_core::{BoundaryMode, Cell, Command, Direction, Event, GridModel, SpawnPolicy};
use snake_grid_system_spawning::{select_next, Config, SpawnOutcome, Spawning};
use snake_grid_world::{self as world, query, World};

fn snake_along_row(length: u32, grid: GridModel) -> World {
    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::ConfigureSession {
            grid,
            start: Cell::new(0, 0),
        },
        &mut events,
    );
    world::apply(
        &mut world,
        Command::SetDirection {
            direction: Direction::Right,
        },
        &mut events,
    );
    for column in 1..length {
        world::apply(
            &mut world,
            Command::PlaceCollectable {
                cell: Cell::new(0, column),
            },
            &mut events,
        );
        world::apply(&mut world, Command::Advance, &mut events);
    }
    assert_eq!(query::chain_length(&world), length as usize);
    world
}

#[test]
fn immediate_policy_never_selects_occupied_cells() {
    let grid = GridModel::new(3, 6, BoundaryMode::Lethal);
    let world = snake_along_row(5, grid);
    let occupancy = query::occupancy_view(&world);
    let head = query::head(&world).expect("configured head");
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);

    for _ in 0..500 {
        let cell = select_next(occupancy, head, SpawnPolicy::Immediate, &mut rng)
            .expect("free cell available");
        assert!(occupancy.is_free(cell), "spawned on occupied cell {cell}");
    }
}

#[test]
fn immediate_policy_is_uniform_over_free_cells() {
    let grid = GridModel::new(2, 4, BoundaryMode::Wrap);
    let world = snake_along_row(2, grid);
    let occupancy = query::occupancy_view(&world);
    let head = query::head(&world).expect("configured head");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut counts: HashMap<Cell, u32> = HashMap::new();
    for _ in 0..6_000 {
        let cell = select_next(occupancy, head, SpawnPolicy::Immediate, &mut rng)
            .expect("free cell available");
        *counts.entry(cell).or_default() += 1;
    }

    assert_eq!(counts.len(), 6);
    for (cell, count) in counts {
        assert!(
            (800..=1_200).contains(&count),
            "cell {cell} drawn {count} times"
        );
    }
}

#[test]
fn delayed_policy_may_select_body_cells_but_never_the_head() {
    let grid = GridModel::new(1, 6, BoundaryMode::Lethal);
    let world = snake_along_row(5, grid);
    let occupancy = query::occupancy_view(&world);
    let head = query::head(&world).expect("configured head");
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    let mut under_body = 0;
    for _ in 0..200 {
        let cell = select_next(occupancy, head, SpawnPolicy::Delayed, &mut rng)
            .expect("cell available");
        assert_ne!(cell, head);
        if !occupancy.is_free(cell) {
            under_body += 1;
        }
    }
    assert!(under_body > 0, "delayed policy never picked a body cell");
}

#[test]
fn handle_places_collectable_after_configuration() {
    let grid = GridModel::new(4, 4, BoundaryMode::Wrap);
    let mut world = World::new();
    let mut events = Vec::new();
    world::apply(
        &mut world,
        Command::ConfigureSession {
            grid,
            start: Cell::new(1, 1),
        },
        &mut events,
    );

    let mut spawning = Spawning::new(Config::new(SpawnPolicy::Immediate, 0x1234_5678));
    let mut commands = Vec::new();
    let outcome = spawning.handle(
        &events,
        query::occupancy_view(&world),
        query::head(&world),
        &mut commands,
    );

    let SpawnOutcome::Placed(cell) = outcome else {
        panic!("expected a placement, got {outcome:?}");
    };
    assert_eq!(commands, vec![Command::PlaceCollectable { cell }]);
    assert_ne!(cell, Cell::new(1, 1));
}

#[test]
fn handle_ignores_ticks_without_pickup() {
    let grid = GridModel::new(4, 4, BoundaryMode::Wrap);
    let world = snake_along_row(2, grid);
    let mut spawning = Spawning::new(Config::new(SpawnPolicy::Immediate, 1));
    let mut commands = Vec::new();

    let outcome = spawning.handle(
        &[Event::HeadAdvanced {
            from: Cell::new(0, 0),
            to: Cell::new(0, 1),
        }],
        query::occupancy_view(&world),
        query::head(&world),
        &mut commands,
    );

    assert_eq!(outcome, SpawnOutcome::Idle);
    assert!(commands.is_empty());
}

#[test]
fn handle_stays_idle_once_the_session_is_won() {
    let grid = GridModel::new(1, 3, BoundaryMode::Lethal);
    let world = snake_along_row(3, grid);
    let mut spawning = Spawning::new(Config::new(SpawnPolicy::Immediate, 1));
    let mut commands = Vec::new();

    let outcome = spawning.handle(
        &[
            Event::CollectableConsumed {
                cell: Cell::new(0, 2),
                score: 2,
            },
            Event::SessionWon { score: 2 },
        ],
        query::occupancy_view(&world),
        query::head(&world),
        &mut commands,
    );

    assert_eq!(outcome, SpawnOutcome::Idle);
    assert!(commands.is_empty());
}

#[test]
fn handle_reports_exhaustion_when_no_cell_is_free() {
    let grid = GridModel::new(1, 3, BoundaryMode::Lethal);
    let world = snake_along_row(3, grid);
    let mut spawning = Spawning::new(Config::new(SpawnPolicy::Immediate, 1));
    let mut commands = Vec::new();

    let outcome = spawning.handle(
        &[Event::CollectableConsumed {
            cell: Cell::new(0, 2),
            score: 2,
        }],
        query::occupancy_view(&world),
        query::head(&world),
        &mut commands,
    );

    assert_eq!(outcome, SpawnOutcome::Exhausted);
    assert!(commands.is_empty());
}

#[test]
fn same_seed_produces_same_sequence() {
    let grid = GridModel::new(5, 5, BoundaryMode::Wrap);
    let world = snake_along_row(3, grid);
    let occupancy = query::occupancy_view(&world);
    let head = query::head(&world).expect("configured head");

    let draw = |seed: u64| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        (0..32)
            .map(|_| select_next(occupancy, head, SpawnPolicy::Delayed, &mut rng))
            .collect::<Vec<_>>()
    };

    assert_eq!(draw(77), draw(77));
}
