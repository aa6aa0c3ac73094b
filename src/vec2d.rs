use std::ops::{Index, IndexMut};

use crate::data::Pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vec2d<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Vec2d<T> {
    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    fn index_of(&self, pos: Pos) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (c, r) = (pos.x as usize, pos.y as usize);
        if c >= self.cols || r >= self.rows {
            return None;
        }
        Some(r * self.cols + c)
    }

    pub(crate) fn contains(&self, pos: Pos) -> bool {
        self.index_of(pos).is_some()
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<&T> {
        self.index_of(pos).map(|i| &self.data[i])
    }

    pub(crate) fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        match self.index_of(pos) {
            Some(i) => Some(&mut self.data[i]),
            None => None,
        }
    }

    pub(crate) fn iter(&self) -> ::std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Clone> Vec2d<T> {
    pub(crate) fn new(cols: usize, rows: usize, default: T) -> Self {
        Vec2d {
            data: vec![default; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Index<Pos> for Vec2d<T> {
    type Output = T;

    fn index(&self, index: Pos) -> &Self::Output {
        match self.index_of(index) {
            Some(i) => &self.data[i],
            None => panic!("{} out of bounds of {}x{}", index, self.cols, self.rows),
        }
    }
}

impl<T> IndexMut<Pos> for Vec2d<T> {
    fn index_mut(&mut self, index: Pos) -> &mut Self::Output {
        let (cols, rows) = (self.cols, self.rows);
        match self.index_of(index) {
            Some(i) => &mut self.data[i],
            None => panic!("{} out of bounds of {}x{}", index, cols, rows),
        }
    }
}
