//! Unit tests mirroring the `src` tree, one file per source module

mod algorithm;
mod element;
mod io;
mod spatial;
