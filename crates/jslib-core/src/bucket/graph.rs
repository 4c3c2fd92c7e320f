use std::collections::{HashMap, HashSet};

use crate::bucket::error::BucketError;

/// The `extends` relation between buckets.
///
/// An edge `child -> parent` means the child inherits the parent's
/// declarations. Edges are checked when added, so the graph is acyclic at all
/// times.
#[derive(Debug, Clone, Default)]
pub struct BucketGraph {
    /// Bucket names in insertion order
    nodes: Vec<String>,
    /// child -> buckets it directly extends, in the order they were added
    edges: HashMap<String, Vec<String>>,
}

impl BucketGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, name: &str) {
        if !self.contains(name) {
            self.nodes.push(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n == name)
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Make `child` extend `parent`. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, child: &str, parent: &str) -> Result<(), BucketError> {
        for name in [child, parent] {
            if !self.contains(name) {
                return Err(BucketError::NotFound { name: name.to_string() });
            }
        }
        if self.extends_from(child).iter().any(|p| p == parent) {
            return Ok(());
        }
        // child -> parent closes a cycle iff parent already reaches child
        if let Some(mut path) = self.path_between(parent, child) {
            path.insert(0, child.to_string());
            return Err(BucketError::CycleDetected { path });
        }

        self.edges
            .entry(child.to_string())
            .or_default()
            .push(parent.to_string());
        Ok(())
    }

    /// Buckets `name` directly extends.
    pub fn extends_from(&self, name: &str) -> &[String] {
        self.edges.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `name` and every bucket it transitively extends, parents before children.
    pub fn hierarchy(&self, name: &str) -> Result<Vec<String>, BucketError> {
        if !self.contains(name) {
            return Err(BucketError::NotFound { name: name.to_string() });
        }
        let mut visited = HashSet::new();
        let mut result = Vec::new();
        self.visit_topsort(name, &mut visited, &mut result);
        Ok(result)
    }

    /// All buckets, parents before children.
    pub fn topological_sort(&self) -> Vec<String> {
        let mut visited = HashSet::new();
        let mut result = Vec::new();
        for node in &self.nodes {
            if !visited.contains(node.as_str()) {
                self.visit_topsort(node, &mut visited, &mut result);
            }
        }
        result
    }

    /// DFS post-order: a bucket is emitted after everything it extends
    fn visit_topsort(&self, node: &str, visited: &mut HashSet<String>, result: &mut Vec<String>) {
        visited.insert(node.to_string());
        for parent in self.extends_from(node) {
            if !visited.contains(parent) {
                self.visit_topsort(parent, visited, result);
            }
        }
        result.push(node.to_string());
    }

    /// A path of extension edges from `from` to `to`, both included.
    fn path_between(&self, from: &str, to: &str) -> Option<Vec<String>> {
        let mut visited = HashSet::new();
        let mut path = Vec::new();
        if self.find_path_dfs(from, to, &mut visited, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    fn find_path_dfs(&self, node: &str, target: &str, visited: &mut HashSet<String>, path: &mut Vec<String>) -> bool {
        path.push(node.to_string());
        if node == target {
            return true;
        }
        visited.insert(node.to_string());
        for parent in self.extends_from(node) {
            if !visited.contains(parent) && self.find_path_dfs(parent, target, visited, path) {
                return true;
            }
        }
        path.pop();
        false
    }
}
