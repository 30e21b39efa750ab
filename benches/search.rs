//! Benchmarks for the search algorithms on implicit grid graphs.
//!
//! The grid is never materialized: node `row * width + col` is adjacent to its
//! four orthogonal neighbors, and moving onto a cell costs that cell's weight.
//! This measures the algorithms, not adjacency storage.

extern crate graph_search;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_search::{
    algorithms::{
        a_star, bellman_ford, breadth_first_search, bron_kerbosch, dijkstra,
        strongly_connected_components,
    },
    graph::{NullHeuristic, Undirected},
    Edge, EdgeCost, FiniteGraph, GraphBase, HeuristicCost, Neighbors, NodeId, Successors,
};
use std::hint::black_box;

struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    fn new(side: usize) -> Self {
        Grid {
            width: side,
            height: side,
        }
    }

    fn coords(&self, node: NodeId) -> (usize, usize) {
        (node.index() / self.width, node.index() % self.width)
    }

    fn corner(&self) -> NodeId {
        NodeId::new(self.width * self.height - 1)
    }
}

impl GraphBase for Grid {
    fn contains_node(&self, node: NodeId) -> bool {
        node.index() < self.width * self.height
    }
}

impl FiniteGraph for Grid {
    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.width * self.height).map(NodeId::new)
    }
}

impl Neighbors for Grid {
    fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        let (row, col) = self.coords(node);
        let width = self.width;
        [
            (row > 0).then(|| node.index() - width),
            (row + 1 < self.height).then(|| node.index() + width),
            (col > 0).then(|| node.index() - 1),
            (col + 1 < width).then(|| node.index() + 1),
        ]
        .into_iter()
        .flatten()
        .map(NodeId::new)
    }
}

impl Successors for Grid {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.neighbors(node)
    }
}

impl EdgeCost for Grid {
    fn cost(&self, edge: Edge) -> f64 {
        // Deterministic terrain between 1 and 9
        (1 + (edge.tail().index() * 7 + 3) % 9) as f64
    }
}

impl HeuristicCost for Grid {
    fn heuristic_cost(&self, node: NodeId, goal: NodeId) -> f64 {
        let (r1, c1) = self.coords(node);
        let (r2, c2) = self.coords(goal);
        (r1.abs_diff(r2) + c1.abs_diff(c2)) as f64
    }
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");

    for side in [32, 128] {
        let grid = Grid::new(side);
        let start = NodeId::new(0);
        let goal = grid.corner();

        group.bench_with_input(BenchmarkId::new("a_star_manhattan", side), &grid, |b, g| {
            b.iter(|| black_box(a_star(g, black_box(start), black_box(goal))));
        });
        group.bench_with_input(BenchmarkId::new("a_star_null", side), &grid, |b, g| {
            b.iter(|| black_box(a_star(&NullHeuristic::new(g), start, goal)));
        });
        group.bench_with_input(BenchmarkId::new("bfs", side), &grid, |b, g| {
            b.iter(|| black_box(breadth_first_search(g, start, goal)));
        });
        group.bench_with_input(BenchmarkId::new("dijkstra", side), &grid, |b, g| {
            b.iter(|| black_box(dijkstra(g, start)));
        });
    }

    let small = Grid::new(24);
    group.bench_function("bellman_ford/24", |b| {
        b.iter(|| black_box(bellman_ford(&small, NodeId::new(0)).map(|paths| paths.len())));
    });

    group.finish();
}

fn bench_structure(c: &mut Criterion) {
    let grid = Grid::new(128);

    c.bench_function("scc_grid_128", |b| {
        b.iter(|| black_box(strongly_connected_components(&grid).len()));
    });
    c.bench_function("bron_kerbosch_grid_64", |b| {
        let grid = Grid::new(64);
        b.iter(|| black_box(bron_kerbosch(&Undirected::new(&grid)).len()));
    });
}

criterion_group!(benches, bench_shortest_paths, bench_structure);
criterion_main!(benches);
