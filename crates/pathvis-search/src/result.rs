//! Search output: the reconstructed path and the visit trace.

use pathvis_core::Point;

/// The outcome of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Intermediate cells from start to end in walking order, with the
    /// start and end cells themselves excluded. `None` when the end was
    /// never reached.
    pub path: Option<Vec<Point>>,
    /// Cells in the order the search settled them, start and end excluded.
    /// A cell can appear twice: DFS revisits cells, and the meeting cell of
    /// a bidirectional search is settled by both frontiers.
    pub visit_order: Vec<Point>,
}

impl SearchResult {
    /// Whether the end marker was reached.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }

    /// Number of intermediate cells on the path, if one was found.
    #[inline]
    pub fn path_len(&self) -> Option<usize> {
        self.path.as_ref().map(Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachability_and_length() {
        let hit = SearchResult {
            path: Some(vec![Point::new(1, 0)]),
            visit_order: vec![Point::new(1, 0)],
        };
        assert!(hit.is_reachable());
        assert_eq!(hit.path_len(), Some(1));

        let miss = SearchResult {
            path: None,
            visit_order: vec![Point::new(0, 1)],
        };
        assert!(!miss.is_reachable());
        assert_eq!(miss.path_len(), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_result_round_trip() {
        let result = SearchResult {
            path: Some(vec![Point::new(1, 0), Point::new(2, 0)]),
            visit_order: vec![Point::new(1, 0), Point::new(2, 0), Point::new(2, 1)],
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);

        let miss = SearchResult {
            path: None,
            visit_order: vec![],
        };
        let json = serde_json::to_string(&miss).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, miss);
    }
}
