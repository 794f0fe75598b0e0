//! 图算法模块
//!
//! 遍历原语、结构性算法（连通分量、块、拓扑排序、强连通）
//! 与带权算法（最小生成树、最短路径树、全源距离、直径）

mod blocks;
mod components;
mod distances;
mod shortest_path;
mod spanning_tree;
mod strong;
mod topological;
pub mod traversal;

pub use blocks::{articulation_points, blocks, decompose, BlockDecomposition};
pub use components::{component_members, connected_components, is_connected};
pub use distances::{diameter, distance_table, distances};
pub use shortest_path::{
    arborescence_distances, dijkstra, shortest_path_arborescence,
    shortest_path_arborescence_from, ShortestPaths,
};
pub use spanning_tree::minimum_spanning_tree;
pub use strong::{
    is_strongly_connected, kosaraju_tree_count, strong_component_members,
    strongly_connected_components,
};
pub use topological::{topological_order, topological_sort};
pub use traversal::{depth_first_search, full_sweep, Dfs, DfsEvent, DfsOrder, Direction};
