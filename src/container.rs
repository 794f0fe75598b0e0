//! 结果容器
//!
//! 单向链表 `List<T>`，用于向调用方返回顶点列表或子图列表。
//!
//! - `List<Graph>` 独占其中的子图，释放列表即释放子图
//! - `List<&Vertex>` 只借用所属图中的顶点，释放列表不影响顶点

use std::fmt;

/// 链表节点
pub struct Node<T> {
    content: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    /// 节点内容
    pub fn content(&self) -> &T {
        &self.content
    }

    /// 后继节点，最后一个节点返回 `None`
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

/// 有序单向链表
pub struct List<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> List<T> {
    /// 创建空链表
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// 在表头插入
    pub fn push_front(&mut self, content: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { content, next }));
        self.len += 1;
    }

    /// 移除并返回表头元素
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.content
        })
    }

    /// 第一个节点，空表返回 `None`
    pub fn first(&self) -> Option<&Node<T>> {
        self.head.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.first(),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

// 逐个断开节点，避免长链表递归析构导致栈溢出
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    /// 保持迭代顺序
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let mut list = List::new();
        for item in items.into_iter().rev() {
            list.push_front(item);
        }
        list
    }
}

/// 借用迭代器
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next();
            &node.content
        })
    }
}

/// 所有权迭代器
pub struct IntoIter<T>(List<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
