//! Text rendering for debug output.
//!
//! Scalars print raw, pairs as `{x, y}`, sequences as `[ a b ]` and sets or
//! maps as `{ a b }`. Composite shapes render their elements recursively.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::{self, Write};

use crate::modint::ModInt;
use crate::ordered_set::OrderedSet;

pub trait Render {
    fn render(&self, out: &mut dyn Write) -> fmt::Result;

    fn to_rendered(&self) -> String {
        let mut s = String::new();
        // writing into a String cannot fail
        let _ = self.render(&mut s);
        s
    }
}

impl<T: Render + ?Sized> Render for &T {
    #[inline(always)]
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        (**self).render(out)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    #[inline(always)]
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        (**self).render(out)
    }
}

macro_rules! render_display {
    ($($T: ty)*) => {$(
        impl Render for $T {
            #[inline(always)]
            fn render(&self, out: &mut dyn Write) -> fmt::Result {
                write!(out, "{self}")
            }
        }
    )*};
}

render_display! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
    f32 f64
    char bool str String
}

impl<const M: u64> Render for ModInt<M> {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        write!(out, "{self}")
    }
}

impl<A: Render, B: Render> Render for (A, B) {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        out.write_char('{')?;
        self.0.render(out)?;
        out.write_str(", ")?;
        self.1.render(out)?;
        out.write_char('}')
    }
}

fn render_all<I>(out: &mut dyn Write, open: char, items: I, close: char) -> fmt::Result
where
    I: IntoIterator,
    I::Item: Render,
{
    out.write_char(open)?;
    out.write_char(' ')?;
    for item in items {
        item.render(out)?;
        out.write_char(' ')?;
    }
    out.write_char(close)
}

fn render_entries<'a, K, V, I>(out: &mut dyn Write, entries: I) -> fmt::Result
where
    K: Render + 'a,
    V: Render + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    render_all(out, '{', entries, '}')
}

impl<T: Render> Render for [T] {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        render_all(out, '[', self, ']')
    }
}

impl<T: Render, const L: usize> Render for [T; L] {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        self.as_slice().render(out)
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        self.as_slice().render(out)
    }
}

impl<T: Render> Render for VecDeque<T> {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        render_all(out, '[', self, ']')
    }
}

impl<T: Render> Render for BTreeSet<T> {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        render_all(out, '{', self, '}')
    }
}

impl<T: Render, S> Render for HashSet<T, S> {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        render_all(out, '{', self, '}')
    }
}

impl<T: Render> Render for OrderedSet<T> {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        render_all(out, '{', self, '}')
    }
}

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        render_entries(out, self)
    }
}

impl<K: Render, V: Render, S> Render for HashMap<K, V, S> {
    fn render(&self, out: &mut dyn Write) -> fmt::Result {
        render_entries(out, self)
    }
}
