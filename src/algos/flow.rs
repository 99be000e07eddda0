use super::Algo;
use crate::errors::SolveError;
use crate::model::{Assignments, ProjectId, StudentId};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::{debug, instrument, trace};

const UNREACHED: i64 = i64::MAX;

/// Exact solver on a min-cost-flow formulation. One unit of supply per
/// student flows through unit arcs priced by rank weight into the
/// chosen projects, and from each project to the sink through a free
/// arc bounded by the capacity plus a penalized arc that never runs
/// out. The constraint matrix of such a network is totally unimodular,
/// so the cheapest flow of value `students` is integral and is a
/// minimum-cost assignment.
pub struct MinCostFlow<'a> {
    assignments: &'a mut Assignments,
    penalty: i64,
}

impl<'a> MinCostFlow<'a> {
    pub fn new(assignments: &'a mut Assignments, penalty: i64) -> MinCostFlow<'a> {
        MinCostFlow {
            assignments,
            penalty,
        }
    }
}

impl Algo for MinCostFlow<'_> {
    #[instrument(skip_all)]
    fn assign(&mut self) -> Result<i64, SolveError> {
        let slen = self.assignments.students.len();
        let plen = self.assignments.projects.len();
        if slen == 0 {
            return Ok(0);
        }

        // Node layout: source, students, projects, sink.
        let source = 0;
        let student_node = |StudentId(student): StudentId| 1 + student;
        let project_node = |ProjectId(project): ProjectId| 1 + slen + project;
        let sink = 1 + slen + plen;
        let mut network = Network::new(sink + 1);

        for student in self.assignments.all_students() {
            network.add_arc(source, student_node(student), 1, 0);
        }
        let mut choice_arcs = vec![Vec::new(); slen];
        for student in &self.assignments.students {
            for (rank, &project) in student.rankings.iter().enumerate() {
                let arc = network.add_arc(
                    student_node(student.id),
                    project_node(project),
                    1,
                    student.weights[rank],
                );
                choice_arcs[student.id.0].push(arc);
            }
        }
        for project in &self.assignments.projects {
            let node = project_node(project.id);
            if project.capacity > 0 {
                network.add_arc(node, sink, i64::from(project.capacity), 0);
            }
            network.add_arc(node, sink, slen as i64, self.penalty);
        }
        debug!(
            nodes = sink + 1,
            arcs = network.arcs.len() / 2,
            "flow network built"
        );

        network.seed_potentials(source);
        let mut total = 0;
        for round in 0..slen {
            match network.augment(source, sink) {
                Some(cost) => {
                    trace!(round, cost, "augmented one unit");
                    total += cost;
                }
                None => {
                    // Cannot happen: the penalized arcs make the sink
                    // reachable from every student with a choice left.
                    return Err(SolveError::internal(format!(
                        "no augmenting path after {round} of {slen} placements"
                    )));
                }
            }
        }

        for student in self.assignments.all_students() {
            let arc = choice_arcs[student.0]
                .iter()
                .copied()
                .find(|&arc| network.flow_on(arc) > 0);
            let Some(arc) = arc else {
                return Err(SolveError::internal(format!(
                    "student {} received no unit of flow",
                    self.assignments.student(student)
                )));
            };
            let project = ProjectId(network.arcs[arc].to - 1 - slen);
            self.assignments.assign_to(student, project);
        }
        debug!(total, "all students placed");
        Ok(total)
    }

    fn get_assignments(&self) -> &Assignments {
        self.assignments
    }
}

#[derive(Clone, Copy)]
struct Arc {
    to: usize,
    cap: i64,
    cost: i64,
}

/// Residual network. Arcs live in pairs, `arc ^ 1` being the reverse of
/// `arc`, and the flow pushed through an arc equals the residual
/// capacity of its reverse.
struct Network {
    arcs: Vec<Arc>,
    adjacent: Vec<Vec<usize>>,
    potential: Vec<i64>,
}

impl Network {
    fn new(nodes: usize) -> Network {
        Network {
            arcs: Vec::new(),
            adjacent: vec![Vec::new(); nodes],
            potential: vec![0; nodes],
        }
    }

    fn add_arc(&mut self, from: usize, to: usize, cap: i64, cost: i64) -> usize {
        let id = self.arcs.len();
        self.arcs.push(Arc { to, cap, cost });
        self.arcs.push(Arc {
            to: from,
            cap: 0,
            cost: -cost,
        });
        self.adjacent[from].push(id);
        self.adjacent[to].push(id + 1);
        id
    }

    fn flow_on(&self, arc: usize) -> i64 {
        self.arcs[arc ^ 1].cap
    }

    /// Seed the node potentials with exact distances from `source` on
    /// the initial network, so that reduced costs start non-negative
    /// even when choice weights are negative. The initial network is
    /// acyclic, hence the relaxation reaches a fixed point after a few
    /// passes.
    fn seed_potentials(&mut self, source: usize) {
        let nodes = self.adjacent.len();
        let mut dist = vec![UNREACHED; nodes];
        dist[source] = 0;
        loop {
            let mut changed = false;
            for from in 0..nodes {
                if dist[from] == UNREACHED {
                    continue;
                }
                for &arc in &self.adjacent[from] {
                    let Arc { to, cap, cost } = self.arcs[arc];
                    if cap == 0 {
                        continue;
                    }
                    if dist[from] + cost < dist[to] {
                        dist[to] = dist[from] + cost;
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
        for (potential, dist) in self.potential.iter_mut().zip(dist) {
            *potential = if dist == UNREACHED { 0 } else { dist };
        }
    }

    /// Push one unit from `source` to `sink` along the cheapest
    /// residual path, found by Dijkstra over reduced costs. Updating
    /// the potentials with the computed distances keeps every residual
    /// arc non-negative for the next round. Returns the true cost of
    /// the path, or `None` when the sink is unreachable.
    fn augment(&mut self, source: usize, sink: usize) -> Option<i64> {
        let nodes = self.adjacent.len();
        let mut dist = vec![UNREACHED; nodes];
        let mut prev_arc = vec![usize::MAX; nodes];
        let mut heap = BinaryHeap::new();
        dist[source] = 0;
        heap.push(Reverse((0, source)));
        while let Some(Reverse((d, node))) = heap.pop() {
            if d > dist[node] {
                continue;
            }
            for &arc in &self.adjacent[node] {
                let Arc { to, cap, cost } = self.arcs[arc];
                if cap == 0 {
                    continue;
                }
                let next = d + cost + self.potential[node] - self.potential[to];
                if next < dist[to] {
                    dist[to] = next;
                    prev_arc[to] = arc;
                    heap.push(Reverse((next, to)));
                }
            }
        }
        if dist[sink] == UNREACHED {
            return None;
        }
        for (potential, dist) in self.potential.iter_mut().zip(&dist) {
            if *dist != UNREACHED {
                *potential += dist;
            }
        }
        let mut node = sink;
        while node != source {
            let arc = prev_arc[node];
            self.arcs[arc].cap -= 1;
            self.arcs[arc ^ 1].cap += 1;
            node = self.arcs[arc ^ 1].to;
        }
        // The potential of the source never moves, so the potential of
        // the sink accumulates exactly the real cost of this path.
        Some(self.potential[sink])
    }
}
