//! The per-tick pursuit agent.

use std::sync::Arc;

use quarry_belief::BeliefFilter;
use quarry_core::{BehaviorMode, Cell};
use quarry_maze::WorldGeometry;
use quarry_nav::{find_frontier, plan_route, CellKnowledge, DeadEndSet, Route};

use crate::config::{AgentConfig, ConfigError};
use crate::policy::{policy_for, GoalDecision, GoalPolicy, PolicyInput};

/// One tick's externally computed view of the pursued target.
///
/// The host owns target simulation; the agent only receives this
/// summary and never inspects the target directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetObservation {
    /// The cell the target currently occupies.
    pub cell: Cell,
    /// Euclidean distance from the agent to the target, in cells.
    pub distance: f64,
    /// Whether an unobstructed sight line exists between them.
    pub line_of_sight: bool,
}

/// A pursuit agent advanced by synchronous [`tick`](Self::tick) calls.
///
/// Owns all of its mutable state: the knowledge map, dead-end memory,
/// belief filter, goal policy, and current route. Each tick runs in a
/// fixed order — observe, believe, reveal, sense, plan, follow — with
/// sensing, planning, and reveals each throttled by their own
/// accumulated-time interval, so a fast host loop does not re-plan
/// every frame.
///
/// The agent never moves itself. It exposes
/// [`next_waypoint`](Self::next_waypoint) and the host applies the
/// motion, reporting the agent's resulting cell back on the next tick.
pub struct PursuitAgent {
    geometry: Arc<WorldGeometry>,
    config: AgentConfig,
    knowledge: CellKnowledge,
    dead_ends: DeadEndSet,
    belief: BeliefFilter,
    policy: Box<dyn GoalPolicy>,
    mode: BehaviorMode,
    route: Route,
    route_index: usize,
    last_known_target: Option<Cell>,
    sense_timer: f64,
    plan_timer: f64,
    reveal_timer: f64,
}

impl PursuitAgent {
    /// Construct an agent at `spawn` over a shared geometry.
    ///
    /// Validates the full configuration up front; a misconfigured
    /// interval or belief table is rejected before any state exists.
    /// The spawn cell is recorded as known-clear so the first planning
    /// pass has a valid start even before the first sensing pass.
    pub fn new(
        geometry: Arc<WorldGeometry>,
        config: AgentConfig,
        spawn: Cell,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let belief = BeliefFilter::new(config.belief)?;
        let policy = policy_for(config.policy);
        let mut knowledge = CellKnowledge::new();
        knowledge.mark_clear(spawn);
        Ok(Self {
            geometry,
            config,
            knowledge,
            dead_ends: DeadEndSet::new(),
            belief,
            policy,
            mode: BehaviorMode::Searching,
            route: Route::new(),
            route_index: 0,
            last_known_target: None,
            sense_timer: 0.0,
            plan_timer: 0.0,
            reveal_timer: 0.0,
        })
    }

    /// Advance the agent by `dt` seconds.
    ///
    /// `position` is the cell the agent occupies after the host applied
    /// last tick's motion. `target` is this tick's observation of the
    /// pursued target; the visibility evidence fed to the belief filter
    /// is `line_of_sight && distance <= view_range`.
    pub fn tick(&mut self, dt: f64, position: Cell, target: &TargetObservation) {
        let saw = target.line_of_sight && target.distance <= self.config.view_range;
        self.belief.update(saw);
        if saw {
            self.last_known_target = Some(target.cell);
            self.policy.note_target(target.cell);
        }

        self.reveal_timer += dt;
        if self.reveal_timer >= self.config.reveal_interval {
            self.reveal_timer = 0.0;
            // Periodic ground-truth reveal: keeps a stale agent from
            // orbiting an abandoned last-known position forever.
            self.last_known_target = Some(target.cell);
            self.policy.note_target(target.cell);
        }

        self.sense_timer += dt;
        if self.sense_timer >= self.config.sense_interval {
            self.sense_timer = 0.0;
            self.knowledge.discover(position, &self.geometry);
        }

        self.plan_timer += dt;
        if self.plan_timer >= self.config.plan_interval {
            self.plan_timer = 0.0;
            self.replan(position, target, saw);
        }

        self.follow_route(position);
    }

    fn replan(&mut self, position: Cell, target: &TargetObservation, saw: bool) {
        let decision = self.policy.select_goal(&PolicyInput {
            saw_target: saw,
            observed_cell: target.cell,
            last_known_target: self.last_known_target,
            belief: &self.belief,
            knowledge: &self.knowledge,
        });

        match decision {
            GoalDecision::Chase(goal) => {
                self.mode = BehaviorMode::Chasing;
                match plan_route(&self.knowledge, &self.dead_ends, position, goal) {
                    Ok(route) => self.set_route(route),
                    Err(_) => {
                        // The chase goal is outside the known-clear
                        // subgraph; keep exploring until it isn't.
                        self.mode = BehaviorMode::Searching;
                        self.plan_search(position);
                    }
                }
            }
            GoalDecision::Search => {
                self.mode = BehaviorMode::Searching;
                self.plan_search(position);
            }
        }
    }

    fn plan_search(&mut self, position: Cell) {
        let planned = find_frontier(&self.knowledge, &self.dead_ends, position)
            .and_then(|frontier| {
                plan_route(&self.knowledge, &self.dead_ends, position, frontier).ok()
            });
        match planned {
            Some(route) => self.set_route(route),
            None => {
                // No reachable frontier from here. Remember it so
                // future frontier searches route around this cell,
                // and keep whatever route is already in flight.
                self.dead_ends.mark(position);
            }
        }
    }

    fn set_route(&mut self, route: Route) {
        self.route = route;
        self.route_index = 0;
    }

    fn follow_route(&mut self, position: Cell) {
        while self
            .route
            .get(self.route_index)
            .map_or(false, |&c| c == position)
        {
            self.route_index += 1;
        }
    }

    /// The next cell the host should move the agent toward, if a route
    /// is in flight.
    pub fn next_waypoint(&self) -> Option<Cell> {
        self.route.get(self.route_index).copied()
    }

    /// The current route, start..goal inclusive.
    pub fn route(&self) -> &[Cell] {
        &self.route
    }

    /// The current behavior mode.
    pub fn mode(&self) -> BehaviorMode {
        self.mode
    }

    /// The proximity belief filter.
    pub fn belief(&self) -> &BeliefFilter {
        &self.belief
    }

    /// The most recent confirmed target cell, if any.
    pub fn last_known_target(&self) -> Option<Cell> {
        self.last_known_target
    }

    /// The agent's discovered topology.
    pub fn knowledge(&self) -> &CellKnowledge {
        &self.knowledge
    }

    /// Cells this agent has given up on as frontier origins.
    pub fn dead_ends(&self) -> &DeadEndSet {
        &self.dead_ends
    }

    /// The configuration this agent was built with.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Name of the active goal policy.
    pub fn policy_name(&self) -> &str {
        self.policy.name()
    }
}
