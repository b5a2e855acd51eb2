pub mod grid;

pub use grid::GridImageReader;
