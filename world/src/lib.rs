#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative chain state for Snake Grid.
//!
//! The world owns the chain of segments, the occupancy grid, the heading gate
//! and the active collectable. It is mutated exclusively through [`apply`] and
//! observed through the [`query`] module.

mod occupancy;

use std::collections::VecDeque;

use snake_grid_core::{Cell, Command, Direction, Event, GridModel, LossCause, TickResult};

use crate::occupancy::OccupancyGrid;

/// Stable identifier assigned to a chain segment when it is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(u32);

impl SegmentId {
    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

#[derive(Clone, Copy, Debug)]
struct Segment {
    id: SegmentId,
    current: Cell,
    previous: Cell,
}

impl Segment {
    fn at(id: SegmentId, cell: Cell) -> Self {
        Self {
            id,
            current: cell,
            previous: cell,
        }
    }

    fn relocate(&mut self, destination: Cell) {
        self.previous = self.current;
        self.current = destination;
    }

    fn place(&mut self, destination: Cell) {
        self.current = destination;
        self.previous = destination;
    }

    fn settle(&mut self) {
        self.previous = self.current;
    }
}

#[derive(Clone, Copy, Debug)]
struct Session {
    grid: GridModel,
    start: Cell,
}

/// Represents the authoritative Snake Grid world state.
#[derive(Debug)]
pub struct World {
    session: Option<Session>,
    chain: VecDeque<Segment>,
    occupancy: OccupancyGrid,
    heading: Direction,
    pending_heading: Direction,
    heading_locked: bool,
    collectable: Option<Cell>,
    score: u32,
    outcome: Option<TickResult>,
    tick_index: u64,
    next_segment_id: u32,
}

impl World {
    /// Creates an unconfigured world; every advance is rejected until a
    /// [`Command::ConfigureSession`] is applied.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session: None,
            chain: VecDeque::new(),
            occupancy: OccupancyGrid::empty(),
            heading: Direction::None,
            pending_heading: Direction::None,
            heading_locked: false,
            collectable: None,
            score: 0,
            outcome: None,
            tick_index: 0,
            next_segment_id: 0,
        }
    }

    fn allocate_segment(&mut self, cell: Cell) -> Segment {
        let id = SegmentId(self.next_segment_id);
        self.next_segment_id = self.next_segment_id.wrapping_add(1);
        Segment::at(id, cell)
    }

    fn restart(&mut self, session: Session, out_events: &mut Vec<Event>) {
        let capacity = session.grid.cell_count();
        self.session = Some(session);
        self.chain = VecDeque::with_capacity(capacity);
        self.next_segment_id = 0;
        let head = self.allocate_segment(session.start);
        self.chain.push_back(head);
        self.occupancy = OccupancyGrid::new(session.grid);
        self.occupancy.occupy(session.start);
        self.heading = Direction::None;
        self.pending_heading = Direction::None;
        self.heading_locked = false;
        self.collectable = None;
        self.score = 0;
        self.outcome = None;
        self.tick_index = 0;

        tracing::info!(
            rows = session.grid.rows(),
            columns = session.grid.columns(),
            head = %session.start,
            "session configured"
        );
        out_events.push(Event::SessionConfigured {
            grid: session.grid,
            head: session.start,
        });
    }

    fn set_direction(&mut self, direction: Direction, out_events: &mut Vec<Event>) {
        if self.session.is_none() || self.outcome.is_some() {
            return;
        }
        if direction == Direction::None || direction == self.pending_heading {
            return;
        }
        if self.heading_locked {
            tracing::trace!(?direction, "heading already changed this tick");
            return;
        }
        if self.chain.len() > 1 && direction == self.heading.opposite() {
            tracing::trace!(?direction, "reverse heading rejected");
            return;
        }

        self.pending_heading = direction;
        self.heading_locked = true;
        out_events.push(Event::HeadingChanged { direction });
    }

    fn advance(&mut self, out_events: &mut Vec<Event>) {
        let Some(session) = self.session else {
            tracing::warn!("advance requested before the session was configured");
            out_events.push(Event::AdvanceRejected);
            return;
        };
        if let Some(outcome) = self.outcome {
            tracing::warn!(?outcome, "advance requested on a finished session");
            out_events.push(Event::AdvanceRejected);
            return;
        }

        self.heading = self.pending_heading;
        self.heading_locked = false;
        self.tick_index = self.tick_index.saturating_add(1);

        if self.heading == Direction::None {
            self.finish_if_filled(session.grid, out_events);
            return;
        }

        let (Some(head), Some(tail)) = (self.chain.front().copied(), self.chain.back().copied())
        else {
            return;
        };

        let (candidate, crossed_boundary) = session.grid.wrap(head.current, self.heading);
        if crossed_boundary {
            self.finish_lost(LossCause::Boundary, out_events);
            return;
        }
        if self.occupancy.is_occupied(candidate) && candidate != tail.current {
            self.finish_lost(LossCause::Collision, out_events);
            return;
        }

        let vacated_tail = tail.current;
        let consumes = self.collectable == Some(candidate) && candidate != vacated_tail;

        self.occupancy.vacate(vacated_tail);
        self.occupancy.occupy(candidate);
        if let Some(head) = self.chain.front_mut() {
            head.relocate(candidate);
        }
        out_events.push(Event::HeadAdvanced {
            from: head.current,
            to: candidate,
        });

        self.relocate_body(head.current, out_events);

        if consumes {
            self.grow(candidate, vacated_tail, out_events);
        }

        self.finish_if_filled(session.grid, out_events);
    }

    fn finish_if_filled(&mut self, grid: GridModel, out_events: &mut Vec<Event>) {
        if self.chain.len() >= grid.cell_count() {
            self.outcome = Some(TickResult::Won);
            tracing::info!(score = self.score, "chain filled the grid");
            out_events.push(Event::SessionWon { score: self.score });
        }
    }

    /// Moves the former tail into the cell the head vacated, relinking it as
    /// the second segment. Segments further down keep their cells.
    fn relocate_body(&mut self, vacated_head: Cell, out_events: &mut Vec<Event>) {
        match self.chain.len() {
            0 | 1 => {}
            2 => {
                if let Some(body) = self.chain.get_mut(1) {
                    let from = body.current;
                    body.relocate(vacated_head);
                    self.occupancy.occupy(vacated_head);
                    out_events.push(Event::SegmentRelocated {
                        from,
                        to: vacated_head,
                    });
                }
            }
            _ => {
                if let Some(second) = self.chain.get_mut(1) {
                    second.settle();
                }
                let Some(mut moved) = self.chain.pop_back() else {
                    return;
                };
                let from = moved.current;
                moved.place(vacated_head);
                self.chain.insert(1, moved);
                self.occupancy.occupy(vacated_head);
                out_events.push(Event::SegmentRelocated {
                    from,
                    to: vacated_head,
                });
            }
        }
    }

    fn grow(&mut self, consumed: Cell, vacated_tail: Cell, out_events: &mut Vec<Event>) {
        self.collectable = None;
        self.score = self.score.saturating_add(1);
        out_events.push(Event::CollectableConsumed {
            cell: consumed,
            score: self.score,
        });

        let segment = self.allocate_segment(vacated_tail);
        self.chain.push_back(segment);
        self.occupancy.occupy(vacated_tail);
        tracing::debug!(score = self.score, length = self.chain.len(), "chain grew");
        out_events.push(Event::ChainGrew {
            cell: vacated_tail,
            length: self.chain.len(),
        });
    }

    fn finish_lost(&mut self, cause: LossCause, out_events: &mut Vec<Event>) {
        self.outcome = Some(TickResult::Lost);
        tracing::info!(?cause, score = self.score, "session lost");
        out_events.push(Event::SessionLost { cause });
    }

    fn place_collectable(&mut self, cell: Cell, out_events: &mut Vec<Event>) {
        let Some(session) = self.session else {
            return;
        };
        if self.outcome.is_some() {
            return;
        }
        if !session.grid.contains(cell) {
            tracing::warn!(%cell, "collectable placement outside the grid ignored");
            return;
        }
        self.collectable = Some(cell);
        out_events.push(Event::CollectablePlaced { cell });
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::ConfigureSession { grid, start } => {
            if grid.cell_count() == 0 || !grid.contains(start) {
                tracing::warn!(?grid, %start, "invalid session configuration ignored");
                return;
            }
            world.restart(Session { grid, start }, out_events);
        }
        Command::Reset => {
            if let Some(session) = world.session {
                world.restart(session, out_events);
            }
        }
        Command::SetDirection { direction } => world.set_direction(direction, out_events),
        Command::Advance => world.advance(out_events),
        Command::PlaceCollectable { cell } => world.place_collectable(cell, out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use std::collections::vec_deque;

    use snake_grid_core::{Cell, Direction, GridModel, OccupancyView, SessionOutcome};

    use super::{Segment, SegmentId, World};

    /// Grid of the active session, if one was configured.
    #[must_use]
    pub fn grid(world: &World) -> Option<GridModel> {
        world.session.map(|session| session.grid)
    }

    /// Cell the head returns to on reset, if a session was configured.
    #[must_use]
    pub fn start_cell(world: &World) -> Option<Cell> {
        world.session.map(|session| session.start)
    }

    /// Lazily enumerates chain cells from head to tail.
    ///
    /// The iterator borrows the world, so it always describes the chain at
    /// call time; clone it to restart the walk.
    #[must_use]
    pub fn chain_cells(world: &World) -> ChainCells<'_> {
        ChainCells {
            segments: world.chain.iter(),
        }
    }

    /// Cell occupied by the head segment.
    #[must_use]
    pub fn head(world: &World) -> Option<Cell> {
        world.chain.front().map(|segment| segment.current)
    }

    /// Number of segments in the chain.
    #[must_use]
    pub fn chain_length(world: &World) -> usize {
        world.chain.len()
    }

    /// Captures the per-segment bookkeeping from head to tail.
    #[must_use]
    pub fn segments(world: &World) -> Vec<SegmentSnapshot> {
        world.chain.iter().map(SegmentSnapshot::from).collect()
    }

    /// Cell holding the active collectable, if any.
    #[must_use]
    pub fn collectable(world: &World) -> Option<Cell> {
        world.collectable
    }

    /// Reports whether the active collectable currently lies under a body segment.
    #[must_use]
    pub fn collectable_obscured(world: &World) -> bool {
        world
            .collectable
            .map_or(false, |cell| world.occupancy.is_occupied(cell))
    }

    /// Number of collectables consumed since configuration or reset.
    #[must_use]
    pub fn score(world: &World) -> u32 {
        world.score
    }

    /// Heading travelled on the most recent tick.
    #[must_use]
    pub fn heading(world: &World) -> Direction {
        world.heading
    }

    /// Heading that the next tick will apply.
    #[must_use]
    pub fn pending_heading(world: &World) -> Direction {
        world.pending_heading
    }

    /// Lifecycle state of the session.
    #[must_use]
    pub fn outcome(world: &World) -> SessionOutcome {
        world
            .outcome
            .map_or(SessionOutcome::InProgress, SessionOutcome::from)
    }

    /// Number of ticks applied since configuration or reset.
    #[must_use]
    pub fn tick_index(world: &World) -> u64 {
        world.tick_index
    }

    /// Exposes a read-only view of the dense occupancy grid.
    #[must_use]
    pub fn occupancy_view(world: &World) -> OccupancyView<'_> {
        world.occupancy.view()
    }

    /// Immutable representation of a single segment used for queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct SegmentSnapshot {
        /// Identifier assigned when the segment was created.
        pub id: SegmentId,
        /// Cell the segment occupies.
        pub current: Cell,
        /// Cell the segment occupied before its last relocation.
        pub previous: Cell,
    }

    impl From<&Segment> for SegmentSnapshot {
        fn from(segment: &Segment) -> Self {
            Self {
                id: segment.id,
                current: segment.current,
                previous: segment.previous,
            }
        }
    }

    /// Head-to-tail iterator over chain cells.
    #[derive(Clone, Debug)]
    pub struct ChainCells<'a> {
        segments: vec_deque::Iter<'a, Segment>,
    }

    impl Iterator for ChainCells<'_> {
        type Item = Cell;

        fn next(&mut self) -> Option<Self::Item> {
            self.segments.next().map(|segment| segment.current)
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            self.segments.size_hint()
        }
    }

    impl ExactSizeIterator for ChainCells<'_> {}
}
