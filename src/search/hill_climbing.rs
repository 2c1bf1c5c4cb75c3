use std::rc::Rc;

use serde::Serialize;

use crate::color::{
    Assignment, ColorId, ColoringInstance, CostVector, Palette, VertexId, checker, CheckerResult
};


/**
Decision of changing the color of vertex v by c_next
*/
#[derive(Debug,Clone,Hash,Eq,PartialEq,Serialize)]
pub struct Move {
    /// vertex to recolor
    pub v: VertexId,
    /// previously used color for v
    pub c_prev: ColorId,
    /// color to use
    pub c_next: ColorId,
}


/** cost[u] = 1 iff some neighbor of u has the same color as u */
pub fn costs(inst:&dyn ColoringInstance, assignment:&[ColorId]) -> CostVector {
    inst.vertices().map(|u| {
        let conflict = inst.neighbors(u).iter().any(|v| assignment[*v] == assignment[u]);
        if conflict { 1 } else { 0 }
    }).collect()
}

/** sum of the per-vertex costs (objective to minimize) */
pub fn total_cost(costs:&[usize]) -> usize {
    costs.iter().sum()
}

/** colors vertex i with the color i mod k */
pub fn initial_state(inst:&dyn ColoringInstance, palette:&Palette) -> Assignment {
    inst.vertices().map(|i| i % palette.len()).collect()
}

/**
Explores the whole neighborhood of the assignment: every vertex recolored with every other
color of the palette. Returns the first move reaching the lowest total cost, with this cost,
if it is strictly lower than `current_cost`.
*/
pub fn best_move(
    inst:&dyn ColoringInstance,
    palette:&Palette,
    assignment:&[ColorId],
    current_cost:usize,
) -> Option<(Move, usize)> {
    let mut candidate = assignment.to_vec();
    let mut best:Option<(Move, usize)> = None;
    let mut best_cost = current_cost;
    for v in inst.vertices() {
        let c_prev = assignment[v];
        for c in palette.colors().filter(|c| *c != c_prev) {
            candidate[v] = c;
            let cost = total_cost(&costs(inst, &candidate));
            if cost < best_cost { // ties keep the first candidate found
                best_cost = cost;
                best = Some((Move { v, c_prev, c_next: c }, cost));
            }
        }
        candidate[v] = c_prev;
    }
    best
}


/** final state of a hill-climbing run */
#[derive(Debug,Clone,Serialize)]
pub struct HillClimbingResult {
    /// local minimum reached
    pub assignment: Assignment,
    /// per-vertex costs of the assignment
    pub costs: CostVector,
    /// moves taken, in order
    pub moves: Vec<Move>,
    /// total cost before the first move and after each move
    pub cost_trajectory: Vec<usize>,
}

impl HillClimbingResult {
    /// number of moves taken
    pub fn nb_iterations(&self) -> usize { self.moves.len() }

    /// number of conflicting vertices in the final assignment
    pub fn total_cost(&self) -> usize { total_cost(&self.costs) }
}


/**
Steepest descent over the full recoloring neighborhood.
At each iteration, the best strictly improving move is applied. The search stops when no
move improves the total cost (local minimum). No restarts, no sideways moves.
*/
#[derive(Debug)]
pub struct HillClimbing {
    /// reference instance
    inst: Rc<dyn ColoringInstance>,
    /// available colors
    palette: Palette,
    /// colors[v]: color of the vertex v
    colors: Assignment,
    /// total cost of colors
    cost: usize,
    /// moves taken so far
    moves: Vec<Move>,
    /// cost_trajectory[i]: total cost after i moves
    cost_trajectory: Vec<usize>,
}

impl HillClimbing {

    /** starts from the initial state (vertex i colored by i mod k) */
    pub fn new(inst:Rc<dyn ColoringInstance>, palette:Palette) -> Self {
        let colors = initial_state(inst.as_ref(), &palette);
        Self::from_assignment(inst, palette, colors)
    }

    /** starts from a given assignment (must color every vertex with a palette color) */
    pub fn from_assignment(inst:Rc<dyn ColoringInstance>, palette:Palette, colors:Assignment) -> Self {
        let cost = match checker(inst.as_ref(), &palette, &colors) {
            CheckerResult::Ok(cost) => cost,
            res => panic!("invalid starting assignment ({:?})", res),
        };
        Self {
            inst, palette, colors, cost,
            moves: Vec::new(),
            cost_trajectory: vec![cost],
        }
    }

    /// current assignment
    pub fn colors(&self) -> &[ColorId] { &self.colors }

    /// total cost of the current assignment
    pub fn cost(&self) -> usize { self.cost }

    /** applies a move to the search state */
    pub fn commit(&mut self, decision:&Move) {
        assert!(self.palette.contains(decision.c_next));
        debug_assert_eq!(self.colors[decision.v], decision.c_prev);
        self.colors[decision.v] = decision.c_next;
        self.cost = total_cost(&costs(self.inst.as_ref(), &self.colors));
        self.moves.push(decision.clone());
        self.cost_trajectory.push(self.cost);
    }

    /** takes the best improving move. Returns None (and does nothing) at a local minimum */
    pub fn step(&mut self) -> Option<Move> {
        let (decision, cost) = best_move(self.inst.as_ref(), &self.palette, &self.colors, self.cost)?;
        self.commit(&decision);
        debug_assert_eq!(self.cost, cost);
        Some(decision)
    }

    /** steps until a local minimum is reached */
    pub fn run(mut self, show_completion:bool) -> HillClimbingResult {
        if show_completion { println!("initial conflicts: {}", self.cost); }
        while let Some(decision) = self.step() {
            if show_completion {
                println!("iter {} \t {}: {} -> {} \t conflicts: {}",
                    self.moves.len(),
                    self.inst.name(decision.v),
                    self.palette.symbol(decision.c_prev),
                    self.palette.symbol(decision.c_next),
                    self.cost,
                );
            }
        }
        if show_completion {
            println!("local minimum reached after {} moves", self.moves.len());
        }
        HillClimbingResult {
            costs: costs(self.inst.as_ref(), &self.colors),
            assignment: self.colors,
            moves: self.moves,
            cost_trajectory: self.cost_trajectory,
        }
    }
}


/**
Runs the hill-climbing from the initial state until a local minimum is reached.

parameters:
 - inst: reference to an instance
 - palette: colors available
 - show_completion: if true, print each move taken
*/
pub fn hill_climbing(inst:Rc<dyn ColoringInstance>, palette:Palette, show_completion:bool) -> HillClimbingResult {
    HillClimbing::new(inst, palette).run(show_completion)
}
