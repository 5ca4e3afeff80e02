//! Pluggable goal-selection strategies.
//!
//! Every strategy answers the same question each planning pass: given
//! what the agent currently believes and has seen, should it chase a
//! specific cell or fall back to frontier search? The surrounding
//! sensing, planning, and route-following machinery is identical for
//! all of them.

use quarry_belief::BeliefFilter;
use quarry_core::{Cell, CellState};
use quarry_nav::CellKnowledge;

use crate::config::PolicyKind;

/// The outcome of one goal-selection pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalDecision {
    /// Pursue a concrete cell.
    Chase(Cell),
    /// No actionable target; explore toward the nearest frontier.
    Search,
}

/// Everything a policy may consult when selecting a goal.
///
/// Borrowed views into the agent's state for the duration of one
/// planning pass.
#[derive(Debug)]
pub struct PolicyInput<'a> {
    /// Whether the target is visible this pass.
    pub saw_target: bool,
    /// The target's cell as observed this pass. Only meaningful when
    /// `saw_target` is true.
    pub observed_cell: Cell,
    /// The most recent cell the target was confirmed at, if any.
    pub last_known_target: Option<Cell>,
    /// The agent's proximity belief.
    pub belief: &'a BeliefFilter,
    /// The agent's discovered topology.
    pub knowledge: &'a CellKnowledge,
}

/// A goal-selection strategy.
///
/// Policies may keep internal state (the extrapolation policy records a
/// short position history), fed through [`note_target`] on every
/// confirmed sighting and consulted in [`select_goal`] on every
/// planning pass.
///
/// [`note_target`]: GoalPolicy::note_target
/// [`select_goal`]: GoalPolicy::select_goal
pub trait GoalPolicy {
    /// Stable name for diagnostics.
    fn name(&self) -> &str;

    /// Record a confirmed target position. Called outside planning
    /// passes, whenever a sighting or reveal lands.
    fn note_target(&mut self, _cell: Cell) {}

    /// Decide this pass's goal.
    fn select_goal(&mut self, input: &PolicyInput<'_>) -> GoalDecision;
}

/// Instantiate the policy named by `kind`.
pub fn policy_for(kind: PolicyKind) -> Box<dyn GoalPolicy> {
    match kind {
        PolicyKind::BeliefThreshold => Box::new(BeliefThresholdPolicy),
        PolicyKind::VisibilityFlag => Box::new(VisibilityFlagPolicy),
        PolicyKind::TrajectoryExtrapolation => {
            Box::new(TrajectoryExtrapolationPolicy::default())
        }
    }
}

/// Chase the last known target cell while the belief filter says the
/// target is near.
///
/// The belief can remain above threshold for several passes after the
/// target breaks line of sight, so this policy keeps pressure on the
/// target's last confirmed position instead of giving up immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct BeliefThresholdPolicy;

impl GoalPolicy for BeliefThresholdPolicy {
    fn name(&self) -> &str {
        "belief-threshold"
    }

    fn select_goal(&mut self, input: &PolicyInput<'_>) -> GoalDecision {
        match input.last_known_target {
            Some(cell) if input.belief.b_near() > 0.5 => GoalDecision::Chase(cell),
            _ => GoalDecision::Search,
        }
    }
}

/// Chase the observed cell exactly while the target is visible; search
/// otherwise.
///
/// Ignores the belief filter entirely. The simplest possible pursuer:
/// reactive, no memory, drops the chase the instant visibility breaks.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityFlagPolicy;

impl GoalPolicy for VisibilityFlagPolicy {
    fn name(&self) -> &str {
        "visibility-flag"
    }

    fn select_goal(&mut self, input: &PolicyInput<'_>) -> GoalDecision {
        if input.saw_target {
            GoalDecision::Chase(input.observed_cell)
        } else {
            GoalDecision::Search
        }
    }
}

/// Lead the target by extrapolating its last recorded move.
///
/// Keeps the two most recent distinct confirmed positions. The
/// predicted cell is the latest position advanced by the per-axis step
/// between them, clamped to one cell per axis. A prediction landing on
/// known-blocked ground deflects to a known-clear perpendicular
/// neighbour of the latest position, or falls back to the latest
/// position itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrajectoryExtrapolationPolicy {
    prev: Option<Cell>,
    last: Option<Cell>,
}

impl TrajectoryExtrapolationPolicy {
    /// Cells recorded so far, oldest first.
    pub fn history(&self) -> (Option<Cell>, Option<Cell>) {
        (self.prev, self.last)
    }

    fn deflect(latest: Cell, dx: i32, dz: i32, knowledge: &CellKnowledge) -> Option<Cell> {
        // Perpendicular to the extrapolated heading.
        let side_steps: [(i32, i32); 2] = if dx != 0 {
            [(0, 1), (0, -1)]
        } else {
            [(1, 0), (-1, 0)]
        };
        side_steps
            .into_iter()
            .map(|(sx, sz)| Cell::new(latest.x + sx, latest.z + sz))
            .find(|&c| knowledge.is_clear(c))
    }
}

impl GoalPolicy for TrajectoryExtrapolationPolicy {
    fn name(&self) -> &str {
        "trajectory-extrapolation"
    }

    fn note_target(&mut self, cell: Cell) {
        // A repeated position carries no direction information.
        if self.last == Some(cell) {
            return;
        }
        self.prev = self.last;
        self.last = Some(cell);
    }

    fn select_goal(&mut self, input: &PolicyInput<'_>) -> GoalDecision {
        match (self.prev, self.last) {
            (Some(a), Some(b)) => {
                let dx = (b.x - a.x).clamp(-1, 1);
                let dz = (b.z - a.z).clamp(-1, 1);
                if dx == 0 && dz == 0 {
                    return GoalDecision::Chase(b);
                }
                let predicted = Cell::new(b.x + dx, b.z + dz);
                if input.knowledge.state(predicted) == CellState::Blocked {
                    match Self::deflect(b, dx, dz, input.knowledge) {
                        Some(side) => GoalDecision::Chase(side),
                        None => GoalDecision::Chase(b),
                    }
                } else {
                    GoalDecision::Chase(predicted)
                }
            }
            (None, Some(b)) => GoalDecision::Chase(b),
            _ => match input.last_known_target {
                Some(cell) => GoalDecision::Chase(cell),
                None => GoalDecision::Search,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_belief::BeliefConfig;
    use quarry_maze::WorldGeometry;
    use quarry_test_utils::geometry_from_ascii;

    fn filter_with_belief(saw_streak: usize) -> BeliefFilter {
        let mut filter = BeliefFilter::new(BeliefConfig::default()).unwrap();
        for _ in 0..saw_streak {
            filter.update(true);
        }
        filter
    }

    fn open_room() -> WorldGeometry {
        geometry_from_ascii(
            "#######
             #.....#
             #.....#
             #.....#
             #######",
        )
    }

    fn input<'a>(
        saw: bool,
        observed: Cell,
        last_known: Option<Cell>,
        belief: &'a BeliefFilter,
        knowledge: &'a CellKnowledge,
    ) -> PolicyInput<'a> {
        PolicyInput {
            saw_target: saw,
            observed_cell: observed,
            last_known_target: last_known,
            belief,
            knowledge,
        }
    }

    // ── belief threshold ──

    #[test]
    fn belief_policy_needs_both_belief_and_position() {
        let mut policy = BeliefThresholdPolicy;
        let knowledge = CellKnowledge::new();

        let convinced = filter_with_belief(5);
        assert!(convinced.b_near() > 0.5);

        // Belief high but no recorded position: nothing to chase.
        let decision =
            policy.select_goal(&input(false, Cell::new(3, 3), None, &convinced, &knowledge));
        assert_eq!(decision, GoalDecision::Search);

        // Belief high with a position: chase it.
        let decision = policy.select_goal(&input(
            false,
            Cell::new(3, 3),
            Some(Cell::new(2, 1)),
            &convinced,
            &knowledge,
        ));
        assert_eq!(decision, GoalDecision::Chase(Cell::new(2, 1)));

        // Belief at the uniform prior: search even with a position.
        let uniform = filter_with_belief(0);
        let decision = policy.select_goal(&input(
            false,
            Cell::new(3, 3),
            Some(Cell::new(2, 1)),
            &uniform,
            &knowledge,
        ));
        assert_eq!(decision, GoalDecision::Search);
    }

    // ── visibility flag ──

    #[test]
    fn visibility_policy_tracks_the_flag_only() {
        let mut policy = VisibilityFlagPolicy;
        let knowledge = CellKnowledge::new();
        let convinced = filter_with_belief(5);

        let decision =
            policy.select_goal(&input(true, Cell::new(4, 2), None, &convinced, &knowledge));
        assert_eq!(decision, GoalDecision::Chase(Cell::new(4, 2)));

        // High belief and a remembered position do not matter once the
        // flag drops.
        let decision = policy.select_goal(&input(
            false,
            Cell::new(4, 2),
            Some(Cell::new(4, 2)),
            &convinced,
            &knowledge,
        ));
        assert_eq!(decision, GoalDecision::Search);
    }

    // ── trajectory extrapolation ──

    #[test]
    fn extrapolation_leads_a_moving_target() {
        let geometry = open_room();
        let mut knowledge = CellKnowledge::new();
        for c in geometry.floor_cells() {
            knowledge.discover(c, &geometry);
        }
        let belief = filter_with_belief(5);

        let mut policy = TrajectoryExtrapolationPolicy::default();
        policy.note_target(Cell::new(2, 2));
        policy.note_target(Cell::new(3, 2));

        let decision = policy.select_goal(&input(
            true,
            Cell::new(3, 2),
            Some(Cell::new(3, 2)),
            &belief,
            &knowledge,
        ));
        assert_eq!(decision, GoalDecision::Chase(Cell::new(4, 2)));
    }

    #[test]
    fn extrapolation_ignores_repeated_positions() {
        let mut policy = TrajectoryExtrapolationPolicy::default();
        policy.note_target(Cell::new(2, 2));
        policy.note_target(Cell::new(2, 2));
        assert_eq!(policy.history(), (None, Some(Cell::new(2, 2))));
    }

    #[test]
    fn extrapolation_deflects_from_a_known_wall() {
        // Target moving +x along the top corridor toward the east wall.
        let geometry = open_room();
        let mut knowledge = CellKnowledge::new();
        for c in geometry.floor_cells() {
            knowledge.discover(c, &geometry);
        }
        let belief = filter_with_belief(5);

        let mut policy = TrajectoryExtrapolationPolicy::default();
        policy.note_target(Cell::new(4, 1));
        policy.note_target(Cell::new(5, 1));

        let decision = policy.select_goal(&input(
            true,
            Cell::new(5, 1),
            Some(Cell::new(5, 1)),
            &belief,
            &knowledge,
        ));
        // (6, 1) is the east wall; the first perpendicular clear
        // neighbour of (5, 1) is (5, 2).
        assert_eq!(decision, GoalDecision::Chase(Cell::new(5, 2)));
    }

    #[test]
    fn extrapolation_with_one_sighting_chases_it_directly() {
        let knowledge = CellKnowledge::new();
        let belief = filter_with_belief(0);

        let mut policy = TrajectoryExtrapolationPolicy::default();
        policy.note_target(Cell::new(3, 1));

        let decision = policy.select_goal(&input(
            false,
            Cell::new(3, 1),
            Some(Cell::new(3, 1)),
            &belief,
            &knowledge,
        ));
        assert_eq!(decision, GoalDecision::Chase(Cell::new(3, 1)));
    }

    #[test]
    fn extrapolation_with_no_history_falls_back() {
        let knowledge = CellKnowledge::new();
        let belief = filter_with_belief(0);
        let mut policy = TrajectoryExtrapolationPolicy::default();

        let decision =
            policy.select_goal(&input(false, Cell::new(0, 0), None, &belief, &knowledge));
        assert_eq!(decision, GoalDecision::Search);

        let decision = policy.select_goal(&input(
            false,
            Cell::new(0, 0),
            Some(Cell::new(1, 1)),
            &belief,
            &knowledge,
        ));
        assert_eq!(decision, GoalDecision::Chase(Cell::new(1, 1)));
    }

    proptest::proptest! {
        // The extrapolated goal never leads the latest sighting by
        // more than one cell per axis, whatever the recorded history.
        #[test]
        fn extrapolated_goal_stays_within_one_step(
            ax in -20i32..20, az in -20i32..20,
            bx in -20i32..20, bz in -20i32..20,
        ) {
            let knowledge = CellKnowledge::new();
            let belief = filter_with_belief(0);
            let mut policy = TrajectoryExtrapolationPolicy::default();
            policy.note_target(Cell::new(ax, az));
            policy.note_target(Cell::new(bx, bz));

            let b = Cell::new(bx, bz);
            match policy.select_goal(&input(true, b, Some(b), &belief, &knowledge)) {
                GoalDecision::Chase(goal) => {
                    proptest::prop_assert!((goal.x - b.x).abs() <= 1);
                    proptest::prop_assert!((goal.z - b.z).abs() <= 1);
                }
                GoalDecision::Search => {
                    proptest::prop_assert!(false, "two sightings must yield a chase goal");
                }
            }
        }
    }

    #[test]
    fn policy_for_constructs_every_kind() {
        assert_eq!(policy_for(PolicyKind::BeliefThreshold).name(), "belief-threshold");
        assert_eq!(policy_for(PolicyKind::VisibilityFlag).name(), "visibility-flag");
        assert_eq!(
            policy_for(PolicyKind::TrajectoryExtrapolation).name(),
            "trajectory-extrapolation"
        );
    }
}
