/** Vertex Id (position of a region in the fixed region order) */
pub type VertexId = usize;

/** Color Id (position of a color in the active palette) */
pub type ColorId = usize;

/** Assignment: assignment[v] is the color of vertex v */
pub type Assignment = Vec<ColorId>;

/** CostVector: cost[v] is 1 if v shares its color with a neighbor, 0 otherwise */
pub type CostVector = Vec<usize>;

/// color symbols, in palette order
pub const COLOR_SYMBOLS: [&str; 4] = ["b", "r", "o", "j"];

/// largest palette available
pub const MAX_COLORS: usize = COLOR_SYMBOLS.len();


/** models a map to color (regions and their adjacency) */
pub trait ColoringInstance: std::fmt::Debug {
    /// number of vertices (regions)
    fn nb_vertices(&self) -> usize;

    /// list of vertices adjacent to u, in the authored order
    fn neighbors(&self, u:VertexId) -> &[VertexId];

    /// degree of u
    fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// returns true iff v is listed as a neighbor of u
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool;

    /// undirected edge list (u < v)
    fn edges(&self) -> &[(VertexId, VertexId)];

    /// symbolic name of vertex u
    fn name(&self, u:VertexId) -> &str;

    /// index of the vertex called `name` if it exists
    fn vertex_id(&self, name:&str) -> Option<VertexId>;

    /// iterates over the vertices, in order
    fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.nb_vertices() }

    /// prints statistics of the instance
    fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.edges().len());
        let degrees:Vec<usize> = self.vertices().map(|i| self.degree(i)).collect();
        if let (Some(mini), Some(maxi)) = (degrees.iter().min(), degrees.iter().max()) {
            println!("\t{} \t min degree", mini);
            println!("\t{} \t max degree", maxi);
        }
    }
}


/** the k first colors of COLOR_SYMBOLS */
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Palette {
    /// number of colors
    k: usize,
}

impl Palette {
    /** creates a palette of k colors. Returns None if k is not in 1..=MAX_COLORS */
    pub fn new(k:usize) -> Option<Self> {
        if (1..=MAX_COLORS).contains(&k) { Some(Self { k }) } else { None }
    }

    /// number of colors
    pub fn len(&self) -> usize { self.k }

    /// a palette always holds at least one color
    pub fn is_empty(&self) -> bool { false }

    /// colors of the palette, in order
    pub fn colors(&self) -> std::ops::Range<ColorId> { 0..self.k }

    /// true iff c belongs to the palette
    pub fn contains(&self, c:ColorId) -> bool { c < self.k }

    /// symbol of color c
    pub fn symbol(&self, c:ColorId) -> &'static str { COLOR_SYMBOLS[c] }
}


/** result of the checker */
#[derive(Debug,Clone,PartialEq,Eq)]
pub enum CheckerResult {
    /// the assignment does not color every vertex exactly once
    WrongLength(usize),
    /// vertex uses a color outside of the palette
    UnknownColor(VertexId),
    /// valid assignment, with its number of conflicting vertices
    Ok(usize),
}

/**
checks that the assignment colors every vertex with a palette color.
returns the number of conflicting vertices if it does.
*/
pub fn checker(inst:&dyn ColoringInstance, palette:&Palette, assignment:&[ColorId]) -> CheckerResult {
    if assignment.len() != inst.nb_vertices() {
        return CheckerResult::WrongLength(assignment.len());
    }
    if let Some(v) = assignment.iter().position(|c| !palette.contains(*c)) {
        return CheckerResult::UnknownColor(v);
    }
    let nb_conflicts = inst.vertices()
        .filter(|u| inst.neighbors(*u).iter().any(|v| assignment[*u] == assignment[*v]))
        .count();
    CheckerResult::Ok(nb_conflicts)
}
