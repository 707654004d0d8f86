use crate::Cost;

/// An ordered sequence of Nodes with the total Cost of traversing them.
///
/// Produced by walking the predecessor links of a finished search from the Goal back to
/// the Start and reversing, so the first element is always the Start and the last the
/// Goal. The individual costs of the steps within the Path cannot be retrieved through
/// this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    path: Vec<P>,
    cost: Cost,
}

impl<P> Path<P> {
    /// Creates a new Path with the given sequence of Nodes and total Cost.
    ///
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use pixel_pathfinding::Path;
    /// let path = Path::new(vec!['a', 'b', 'c'], 4.2);
    ///
    /// assert_eq!(path.len(), 3);
    /// assert_eq!(path.cost(), 4.2);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }

    /// An empty Path with Cost 0, the result of a failed search.
    pub fn empty() -> Path<P> {
        Path {
            path: Vec::new(),
            cost: 0.0,
        }
    }

    /// The total Cost of the Path.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of Nodes in the Path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// `true` if the Path contains no Nodes.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// An Iterator over the Nodes of the Path, from Start to Goal.
    pub fn iter(&self) -> std::slice::Iter<P> {
        self.path.iter()
    }
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
    type Output = P;
    fn index(&self, index: usize) -> &P {
        &self.path[index]
    }
}

impl<P> Deref for Path<P> {
    type Target = [P];
    fn deref(&self) -> &[P] {
        &self.path
    }
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
    fn eq(&self, rhs: &Vec<P>) -> bool {
        self.path == *rhs
    }
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
    fn eq(&self, rhs: &&'a [P]) -> bool {
        self.path == *rhs
    }
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Path[Cost = {}]: ", self.cost)?;
        if self.path.is_empty() {
            write!(fmt, "<empty>")
        } else {
            write!(fmt, "{}", self.path[0])?;
            for p in self.path.iter().skip(1) {
                write!(fmt, " -> {}", p)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Path;

    #[test]
    fn index() {
        let path = Path::new(vec![4, 2, 0], 4.2);

        assert_eq!(path[0], 4);
        assert_eq!(path[1], 2);
        assert_eq!(path[2], 0);
    }

    #[test]
    fn display() {
        let path = Path::new(vec![4, 2, 0], 4.5);

        assert_eq!(&format!("{}", path), "Path[Cost = 4.5]: 4 -> 2 -> 0");
    }

    #[test]
    fn display_empty() {
        let path = Path::<i32>::empty();

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
    }
}
