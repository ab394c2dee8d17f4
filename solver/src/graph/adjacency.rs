use std::collections::HashMap;

use super::location::LocationId;

/// Undirected adjacency over interned location names.
///
/// Neighbour lists keep declaration order and are not deduplicated, so a
/// repeated edge in the input shows up as a repeated neighbour.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Vec<String>,
    index: HashMap<String, LocationId>,
    adjacency: Vec<Vec<LocationId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from edge records where the first token of each record
    /// is the location and the rest are its declared neighbours. Empty
    /// records are ignored.
    pub fn from_records<I, R, S>(records: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for record in records {
            let mut tokens = record.into_iter();
            if let Some(location) = tokens.next() {
                graph.add_record(location.as_ref(), tokens);
            }
        }
        graph
    }

    /// Declare `location` adjacent to each of `neighbors`. Both directions are
    /// inserted, so the relation stays symmetric whatever the input declares.
    pub fn add_record<I, S>(&mut self, location: &str, neighbors: I) -> LocationId
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let from = self.intern(location);
        let declared: Vec<LocationId> = neighbors
            .into_iter()
            .map(|name| self.intern(name.as_ref()))
            .collect();

        self.adjacency[from.index()].extend_from_slice(&declared);
        for to in declared {
            self.adjacency[to.index()].push(from);
        }

        from
    }

    fn intern(&mut self, name: &str) -> LocationId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = LocationId::new(self.names.len());
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn lookup(&self, name: &str) -> Option<LocationId> {
        self.index.get(name).copied()
    }

    /// Like [`Graph::lookup`], but an unknown name is an error.
    pub fn resolve(&self, name: &str) -> eyre::Result<LocationId> {
        self.lookup(name)
            .ok_or_else(|| eyre::eyre!("unknown location: {}", name))
    }

    pub fn name(&self, id: LocationId) -> &str {
        &self.names[id.index()]
    }

    pub fn neighbors(&self, id: LocationId) -> &[LocationId] {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn locations(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.names.len()).map(LocationId::new)
    }

    pub fn names_of(&self, path: &[LocationId]) -> Vec<String> {
        path.iter().map(|&id| self.name(id).to_string()).collect()
    }

    /// number of undirected edges, counting duplicates
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor_names<'a>(graph: &'a Graph, name: &str) -> Vec<&'a str> {
        let id = graph.lookup(name).unwrap();
        graph
            .neighbors(id)
            .iter()
            .map(|&n| graph.name(n))
            .collect()
    }

    #[test]
    fn records_insert_both_directions() {
        let graph = Graph::from_records([vec!["A", "B", "C"], vec!["C", "D"]]);

        assert_eq!(graph.len(), 4);
        assert_eq!(neighbor_names(&graph, "A"), ["B", "C"]);
        assert_eq!(neighbor_names(&graph, "B"), ["A"]);
        assert_eq!(neighbor_names(&graph, "C"), ["A", "D"]);
        assert_eq!(neighbor_names(&graph, "D"), ["C"]);
    }

    #[test]
    fn relation_is_symmetric_even_for_one_sided_input() {
        let graph = Graph::from_records([vec!["Wichita", "Salina", "Hutchinson"]]);

        for id in graph.locations() {
            for &neighbor in graph.neighbors(id) {
                assert!(graph.neighbors(neighbor).contains(&id));
            }
        }
    }

    #[test]
    fn duplicate_edges_are_kept() {
        let graph = Graph::from_records([vec!["A", "B"], vec!["B", "A"]]);

        assert_eq!(neighbor_names(&graph, "A"), ["B", "B"]);
        assert_eq!(neighbor_names(&graph, "B"), ["A", "A"]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn single_token_record_registers_isolated_location() {
        let graph = Graph::from_records([vec!["A", "B"], vec!["Z"]]);

        assert!(graph.contains("Z"));
        assert!(neighbor_names(&graph, "Z").is_empty());
    }

    #[test]
    fn empty_records_are_ignored() {
        let graph = Graph::from_records([vec![], vec!["A", "B"]]);
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn resolve_rejects_unknown_names() {
        let graph = Graph::from_records([vec!["A", "B"]]);

        assert_eq!(graph.resolve("A").unwrap(), LocationId::new(0));
        let err = graph.resolve("a").unwrap_err();
        assert_eq!(err.to_string(), "unknown location: a");
    }
}
