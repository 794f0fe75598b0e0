//! 边定义
//!
//! 邻接表中的一条边记录。无向图中同一条逻辑边以两条记录出现，
//! 起点与终点互换，权值相同。

use crate::types::{Weight, DEFAULT_WEIGHT};
use serde::{Deserialize, Serialize};

/// 边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// 起点下标
    origin: usize,
    /// 终点下标
    destination: usize,
    /// 权值
    weight: Weight,
}

impl Edge {
    /// 创建新边
    pub fn new(origin: usize, destination: usize, weight: Weight) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }

    /// 创建默认权值的边
    pub fn unweighted(origin: usize, destination: usize) -> Self {
        Self::new(origin, destination, DEFAULT_WEIGHT)
    }

    /// 起点下标
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// 终点下标
    pub fn destination(&self) -> usize {
        self.destination
    }

    /// 权值
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// 反向记录（无向图另一端的邻接表项）
    pub fn reversed(&self) -> Self {
        Self::new(self.destination, self.origin, self.weight)
    }

    /// 从 `from` 出发经过该边到达的另一端
    pub fn other(&self, from: usize) -> usize {
        if self.origin == from {
            self.destination
        } else {
            self.origin
        }
    }

    /// 是否为自环
    pub fn is_loop(&self) -> bool {
        self.origin == self.destination
    }
}
