//! Competitive programming scaffold.
//!
//! The kernel modules (`consts`, `num`, `modint`, `rng`, `ordered_set`,
//! `render`, `debug`, `fastio` and the shorthand macros) use only `std` and
//! are also shipped as a single pasteable module, see [`bundle`]. The
//! [`runner`] wires them to files or the standard streams.

#[macro_use]
mod macros;

pub mod consts;
pub mod num;
pub mod modint;
pub mod rng;
pub mod ordered_set;
pub mod render;
pub mod debug;
pub mod fastio;

pub mod bundle;
pub mod config;
pub mod error;
pub mod runner;

pub use error::{Error, Result};

pub mod prelude {
    pub use std::cmp::{Ordering, Reverse};
    pub use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, VecDeque};
    pub use std::io::Write as _;

    pub use crate::config::{Config, TestCount};
    pub use crate::consts::{INF, MOD, N};
    pub use crate::debug::Diagnostics;
    pub use crate::fastio::{Output, Parse, Scanner};
    pub use crate::modint::{Mint, ModInt};
    pub use crate::num::{checked_lcm, gcd, lcm};
    pub use crate::ordered_set::OrderedSet;
    pub use crate::render::Render;
    pub use crate::rng::{rand_int, Rng};
    pub use crate::runner::{Context, Runner, Solve};
    pub use crate::{chmax, chmin, debug, file_io, max, min, read};
    pub use crate::{Error, Result};
}
