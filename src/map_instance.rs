use std::collections::HashMap;

use bit_set::BitSet;

use crate::color::{ColoringInstance, VertexId};

/** models a map to color. Immutable once built.  */
#[derive(Debug)]
pub struct MapInstance {
    /// names[i]: name of region i
    names: Vec<String>,
    /// ids[name]: index of the region called name
    ids: HashMap<String, VertexId>,
    /// edges of the graph
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Vec<BitSet>,
}

impl ColoringInstance for MapInstance {
    fn nb_vertices(&self) -> usize { self.names.len() }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool { self.adj_matrix[u].contains(v) }

    fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    fn name(&self, u:VertexId) -> &str { &self.names[u] }

    fn vertex_id(&self, name:&str) -> Option<VertexId> { self.ids.get(name).copied() }
}


impl MapInstance {

    /** constructor using region names and an adjacency list (indices into names) */
    pub fn new(names:Vec<String>, adj_list:Vec<Vec<VertexId>>) -> Self {
        assert_eq!(names.len(), adj_list.len());
        let ids = names.iter().enumerate()
            .map(|(i,name)| (name.clone(), i))
            .collect();
        let edges = Self::build_edges(&adj_list);
        let adj_matrix = Self::build_adj_matrix(&adj_list);
        Self { names, ids, edges, adj_list, adj_matrix }
    }

    /**
    constructor using a table of (region, neighbor names).
    Neighbor names that are not regions of the table are skipped.
    */
    pub fn from_named_adjacency(table:&[(&str, &[&str])]) -> Self {
        let names:Vec<String> = table.iter().map(|(name,_)| name.to_string()).collect();
        let ids:HashMap<&str, VertexId> = table.iter().enumerate()
            .map(|(i,(name,_))| (*name, i))
            .collect();
        let adj_list = table.iter()
            .map(|(_,neighbors)| {
                neighbors.iter().filter_map(|name| ids.get(name).copied()).collect()
            })
            .collect();
        Self::new(names, adj_list)
    }

    /// builds the edge list (each pair once, even if listed by only one endpoint)
    fn build_edges(adj_list:&[Vec<VertexId>]) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                let e = if i < *j { (i,*j) } else { (*j,i) };
                if i != *j && !res.contains(&e) {
                    res.push(e);
                }
            }
        }
        res
    }

    fn build_adj_matrix(adj_list:&[Vec<VertexId>]) -> Vec<BitSet> {
        let mut res = vec![BitSet::default(); adj_list.len()];
        for (a,resa) in res.iter_mut().enumerate() {
            for b in &adj_list[a] {
                resa.insert(*b);
            }
        }
        res
    }

    /// number of directed adjacency entries (∑ d(v))
    pub fn nb_adjacency_entries(&self) -> usize {
        self.adj_list.iter().map(|l| l.len()).sum()
    }

    /// true iff every neighbor relation is listed from both endpoints
    pub fn is_symmetric(&self) -> bool {
        self.adj_list.iter().enumerate()
            .all(|(u,l)| l.iter().all(|v| self.adj_matrix[*v].contains(u)))
    }
}
