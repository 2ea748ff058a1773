#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod block;
mod deque;
mod error;
mod map;
mod position;

pub use self::{
    deque::{BlockDeque, Cursor, CursorMut, IntoIter, Iter, IterMut, DEFAULT_BLOCK_WIDTH},
    error::DequeError,
    position::Position,
};
