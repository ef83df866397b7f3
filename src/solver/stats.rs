use prettytable::{Cell, Row, Table};

/// Counters collected over one call to [`Solver::solve`].
///
/// [`Solver::solve`]: crate::solver::Solver::solve
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Backtracking calls entered.
    pub nodes_visited: u64,
    /// Candidate words abandoned after a failed branch.
    pub backtracks: u64,
    /// Calls to `revise` during arc-consistency propagation.
    pub revise_calls: u64,
    /// Revise calls that removed at least one word.
    pub prunings: u64,
    /// Assignments committed by singleton-domain inference rather than by
    /// branching.
    pub singleton_commits: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));
    table.add_row(Row::new(vec![
        Cell::new("Search nodes"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Revise calls"),
        Cell::new(&stats.revise_calls.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Prunings"),
        Cell::new(&stats.prunings.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Singleton commits"),
        Cell::new(&stats.singleton_commits.to_string()),
    ]));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_every_counter() {
        let stats = SearchStats {
            nodes_visited: 5,
            backtracks: 2,
            revise_calls: 40,
            prunings: 7,
            singleton_commits: 1,
        };
        let table = render_stats_table(&stats);
        for label in [
            "Search nodes",
            "Backtracks",
            "Revise calls",
            "Prunings",
            "Singleton commits",
        ] {
            assert!(table.contains(label), "missing {label} in:\n{table}");
        }
        assert!(table.contains("40"));
    }
}
