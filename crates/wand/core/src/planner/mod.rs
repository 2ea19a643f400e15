//! Bounded breadth-first flood fill over the cell lattice.
//!
//! The search starts at the cell in front of the clicked face and grows only
//! in the plane perpendicular to the support axis. A neighbour enters the
//! queue once it passes the structural filter ([`Checks::ENQUEUE`]) and
//! enters the plan once it passes the full filter ([`Checks::DEQUEUE`]).
mod checks;
mod plan;

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

pub use checks::{Checks, Placement, Rejection, check_cell};
pub use plan::PlacementPlan;

use crate::env::{Env, PlacementAuthority, WorldView};
use crate::types::{ActorId, Cell, CellState, Direction, MaterialKind};

/// Plans placements for one actor against a read-only environment.
pub struct FloodFillPlanner<'a, W, A>
where
    W: WorldView + ?Sized,
    A: PlacementAuthority + ?Sized,
{
    env: Env<'a, W, A>,
    actor: ActorId,
}

impl<'a, W, A> FloodFillPlanner<'a, W, A>
where
    W: WorldView + ?Sized,
    A: PlacementAuthority + ?Sized,
{
    pub fn new(env: Env<'a, W, A>, actor: ActorId) -> Self {
        Self { env, actor }
    }

    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// Computes the ordered set of cells that may receive `material`.
    ///
    /// Structural problems with the origin or the seed (wrong origin
    /// material, blocked seed, failed probe) yield an empty plan. Failures on
    /// any other cell only exclude that cell.
    pub fn plan(
        &self,
        origin: Cell,
        face: Direction,
        material: MaterialKind,
        capacity: u32,
    ) -> PlacementPlan {
        let mut plan = PlacementPlan::empty(origin, face, material, capacity);
        if capacity == 0 {
            return plan;
        }

        let world = self.env.world();
        match world.cell(origin) {
            Ok(CellState::Solid(found)) if found == material => {}
            Ok(state) => {
                debug!(%origin, ?state, "origin does not hold the placed material");
                return plan;
            }
            Err(error) => {
                debug!(%origin, %error, "origin probe failed");
                return plan;
            }
        }

        let seed = origin.relative(face);
        match world.cell(seed) {
            Ok(state) if state.is_replaceable() => {}
            Ok(_) => return plan,
            Err(error) => {
                debug!(%seed, %error, "seed probe failed");
                return plan;
            }
        }

        let placement = Placement {
            actor: self.actor,
            material,
            face,
        };
        let authority = self.env.authority();
        let expansion = face.expansion();

        let mut visited = HashSet::from([seed]);
        let mut queue = VecDeque::from([seed]);

        while !plan.is_full() {
            let Some(current) = queue.pop_front() else {
                break;
            };

            match check_cell(world, authority, &placement, current, Checks::DEQUEUE) {
                Ok(()) => plan.push(current),
                // An occupant blocks this cell only; its neighbours stay reachable.
                Err(Rejection::Occupied) => trace!(cell = %current, "occupied, skipping"),
                Err(rejection) => {
                    trace!(cell = %current, %rejection, "rejected at dequeue");
                    continue;
                }
            }

            for direction in expansion {
                let neighbour = current.relative(direction);
                if !visited.insert(neighbour) {
                    continue;
                }
                match check_cell(world, authority, &placement, neighbour, Checks::ENQUEUE) {
                    Ok(()) => queue.push_back(neighbour),
                    Err(rejection) => trace!(cell = %neighbour, %rejection, "not enqueued"),
                }
            }
        }

        debug!(
            actor = %self.actor,
            %origin,
            %face,
            capacity,
            planned = plan.len(),
            visited = visited.len(),
            "plan computed"
        );
        plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::AllowAll;
    use crate::testing::{ACTOR, DIRT, DenyCells, STONE, TestWorld, WATER};
    use crate::types::OccupantKind;

    fn plan_with<A: PlacementAuthority>(
        world: &TestWorld,
        authority: &A,
        origin: Cell,
        face: Direction,
        capacity: u32,
    ) -> PlacementPlan {
        FloodFillPlanner::new(Env::new(world, authority), ACTOR).plan(origin, face, STONE, capacity)
    }

    fn assert_supported(world: &TestWorld, plan: &PlacementPlan) {
        let support = plan.face().opposite();
        for cell in plan.iter() {
            assert_eq!(
                world.cell(cell.relative(support)).unwrap(),
                CellState::Solid(plan.material()),
                "{cell} lacks support"
            );
        }
    }

    #[test]
    fn fills_platform_up_to_capacity() {
        let world = TestWorld::platform(0, -1, 1, STONE);
        let plan = plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 5);

        assert_eq!(plan.len(), 5);
        assert_eq!(plan.cells()[0], Cell::new(0, 1, 0));
        assert!(plan.iter().all(|cell| cell.y == 1));
        assert_supported(&world, &plan);
    }

    #[test]
    fn stops_at_platform_edge() {
        let world = TestWorld::platform(0, -1, 1, STONE);
        let plan = plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 100);

        assert_eq!(plan.len(), 9);
        let unique: HashSet<Cell> = plan.iter().collect();
        assert_eq!(unique.len(), plan.len());
        assert_supported(&world, &plan);
    }

    #[test]
    fn zero_capacity_is_empty() {
        let world = TestWorld::platform(0, -1, 1, STONE);
        assert!(plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 0).is_empty());
    }

    #[test]
    fn origin_must_hold_material() {
        let world = TestWorld::platform(0, -1, 1, DIRT);
        assert!(plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 9).is_empty());

        let mut world = TestWorld::platform(0, -1, 1, STONE);
        world.put(Cell::ORIGIN, CellState::Fluid(WATER));
        assert!(plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 9).is_empty());
    }

    #[test]
    fn blocked_seed_is_empty() {
        let mut world = TestWorld::platform(0, -1, 1, STONE);
        world.put(Cell::new(0, 1, 0), CellState::Solid(DIRT));
        assert!(plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 9).is_empty());
    }

    #[test]
    fn failed_seed_probe_is_empty() {
        let mut world = TestWorld::platform(0, -1, 1, STONE);
        world.failing.insert(Cell::new(0, 1, 0));
        assert!(plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 9).is_empty());
    }

    #[test]
    fn failed_neighbour_probe_only_skips_that_cell() {
        let mut world = TestWorld::platform(0, -1, 1, STONE);
        world.failing.insert(Cell::new(1, 1, 0));
        let plan = plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 100);

        assert_eq!(plan.len(), 8);
        assert!(!plan.cells().contains(&Cell::new(1, 1, 0)));
    }

    #[test]
    fn fluid_cells_are_replaceable() {
        let mut world = TestWorld::platform(0, -1, 1, STONE);
        world.put(Cell::new(1, 1, 1), CellState::Fluid(WATER));
        let plan = plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 100);
        assert!(plan.cells().contains(&Cell::new(1, 1, 1)));
    }

    #[test]
    fn occupied_cell_is_skipped_but_search_continues() {
        let world = {
            let mut world = TestWorld::platform(0, -1, 1, STONE);
            world.occupy(Cell::new(0, 1, 0), OccupantKind::Living);
            world
        };
        let plan = plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 100);

        assert!(!plan.cells().contains(&Cell::new(0, 1, 0)));
        assert_eq!(plan.len(), 8);
        assert_supported(&world, &plan);
    }

    #[test]
    fn non_blocking_occupants_are_ignored() {
        let mut world = TestWorld::platform(0, -1, 1, STONE);
        world.occupy(Cell::new(0, 1, 0), OccupantKind::DroppedItem);
        world.occupy(Cell::new(1, 1, 0), OccupantKind::Projectile);
        let plan = plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 100);
        assert_eq!(plan.len(), 9);
    }

    #[test]
    fn unauthorized_cells_are_excluded() {
        let world = TestWorld::platform(0, -1, 1, STONE);
        let authority = DenyCells([Cell::new(-1, 1, -1), Cell::new(1, 1, 1)].into());
        let plan = plan_with(&world, &authority, Cell::ORIGIN, Direction::Up, 100);

        assert_eq!(plan.len(), 7);
        assert!(plan.iter().all(|cell| !authority.0.contains(&cell)));
    }

    #[test]
    fn mixed_support_is_not_crossed() {
        let mut world = TestWorld::platform(0, -2, 2, STONE);
        for z in -2..=2 {
            world.put(Cell::new(1, 0, z), CellState::Solid(DIRT));
        }
        let plan = plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 100);

        // Columns x = -2..=0 only; the dirt strip at x = 1 cuts the rest off.
        assert_eq!(plan.len(), 15);
        assert!(plan.iter().all(|cell| cell.x <= 0));
        assert_supported(&world, &plan);
    }

    #[test]
    fn wall_face_grows_vertically() {
        let mut world = TestWorld::default();
        for x in -1..=1 {
            for y in 0..=2 {
                world.put(Cell::new(x, y, 0), CellState::Solid(STONE));
            }
        }
        let origin = Cell::new(0, 1, 0);
        let plan = plan_with(&world, &AllowAll, origin, Direction::South, 100);

        assert_eq!(plan.len(), 9);
        assert!(plan.iter().all(|cell| cell.z == 1));
        assert_supported(&world, &plan);
    }

    #[test]
    fn deterministic_discovery_order() {
        let world = TestWorld::platform(0, -2, 2, STONE);
        let first = plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 12);
        let second = plan_with(&world, &AllowAll, Cell::ORIGIN, Direction::Up, 12);
        assert_eq!(first, second);
        assert_eq!(
            &first.cells()[..5],
            &[
                Cell::new(0, 1, 0),
                Cell::new(0, 1, -1),
                Cell::new(0, 1, 1),
                Cell::new(1, 1, 0),
                Cell::new(-1, 1, 0),
            ]
        );
    }
}
