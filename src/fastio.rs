use std::cmp::Reverse;
use std::fmt::{self, Display};
use std::io::{self, BufWriter, Write};
use std::num::Wrapping;
use std::str::FromStr;

use crate::modint::ModInt;

/// [`FromStr`] with lifetime support
pub trait Parse<'a>: Sized {
    type Err: Display;
    fn from_str(s: &'a str) -> Result<Self, Self::Err>;
}

macro_rules! parse_upstream {
    ($($T:ty)*) => {$(
        impl<'a> Parse<'a> for $T {
            type Err = <$T as FromStr>::Err;

            #[inline(always)]
            fn from_str(s: &'a str) -> Result<Self, Self::Err> {
                <$T as FromStr>::from_str(s)
            }
        }
    )*};
}

macro_rules! parse_wrapped {
    ($($Wrapper:ident)*) => {$(
        impl<'a, T: Parse<'a>> Parse<'a> for $Wrapper<T> {
            type Err = <T as Parse<'a>>::Err;

            #[inline(always)]
            fn from_str(s: &'a str) -> Result<Self, Self::Err> {
                <T as Parse<'a>>::from_str(s).map($Wrapper)
            }
        }
    )*};
}

impl<'a> Parse<'a> for &'a str {
    type Err = std::convert::Infallible;

    #[inline(always)]
    fn from_str(s: &'a str) -> Result<Self, Self::Err> {
        Ok(s)
    }
}

impl<'a> Parse<'a> for &'a [u8] {
    type Err = std::convert::Infallible;

    #[inline(always)]
    fn from_str(s: &'a str) -> Result<Self, Self::Err> {
        Ok(s.as_bytes())
    }
}

impl<'a, const M: u64> Parse<'a> for ModInt<M> {
    type Err = std::num::ParseIntError;

    #[inline(always)]
    fn from_str(s: &'a str) -> Result<Self, Self::Err> {
        s.parse::<i128>().map(ModInt::from)
    }
}

parse_upstream! {
    f32 f64
    i8 i16 i32 i64 isize i128
    u8 u16 u32 u64 usize u128
    char bool String
}

parse_wrapped! {
    Reverse
    Wrapping
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanError {
    Eof,
    Invalid {
        token: String,
        target: &'static str,
        reason: String,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Eof => write!(f, "ran out of input"),
            ScanError::Invalid { token, target, reason } => {
                write!(f, "cannot read {token:?} as {target}: {reason}")
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// Tokenizer over input that was read in one go.
pub struct Scanner<'a> {
    data: &'a str,
}

impl<'a> Scanner<'a> {
    pub fn new(data: &'a str) -> Self {
        Scanner { data }
    }

    fn next_by(&mut self, mut is_sep: impl FnMut(u8) -> bool) -> Option<&'a str> {
        loop {
            if self.data.is_empty() {
                return None
            }
            // separators are ascii, so splitting here keeps utf-8 boundaries
            match self.data.bytes().position(&mut is_sep) {
                Some(idx) => {
                    let (ret, rest) = self.data.split_at(idx);
                    self.data = &rest[1..];
                    if !ret.is_empty() {
                        return Some(ret)
                    }
                }
                None => return Some(std::mem::take(&mut self.data)),
            }
        }
    }

    #[inline(always)]
    pub fn next_token(&mut self) -> Option<&'a str> {
        self.next_by(|b| b.is_ascii_whitespace())
    }

    /// The next non-empty line, without its terminator.
    #[inline(always)]
    pub fn next_line(&mut self) -> Option<&'a str> {
        self.next_by(|b| matches!(b, b'\n' | b'\r'))
    }

    pub fn next<T: Parse<'a>>(&mut self) -> Result<T, ScanError> {
        let token = self.next_token().ok_or(ScanError::Eof)?;
        T::from_str(token).map_err(|e| ScanError::Invalid {
            token: token.to_owned(),
            target: std::any::type_name::<T>(),
            reason: e.to_string(),
        })
    }

    pub fn vec<T: Parse<'a>>(&mut self, n: usize) -> Result<Vec<T>, ScanError> {
        (0..n).map(|_| self.next()).collect()
    }

    /// Whether only whitespace is left.
    pub fn is_exhausted(&self) -> bool {
        self.data.bytes().all(|b| b.is_ascii_whitespace())
    }
}

/// Buffered output; flushed explicitly or on drop.
pub struct Output<'a>(BufWriter<Box<dyn Write + 'a>>);

impl<'a> Output<'a> {
    pub fn new(inner: impl Write + 'a) -> Self {
        Output(BufWriter::new(Box::new(inner)))
    }

    pub fn stdout() -> Output<'static> {
        Output::new(io::stdout().lock())
    }

    pub fn line<D: Display>(&mut self, x: D) -> io::Result<()> {
        writeln!(self.0, "{x}")
    }

    /// Space-separated items on one line.
    pub fn words<I: IntoIterator<Item = D>, D: Display>(&mut self, iter: I) -> io::Result<()> {
        let mut iter = iter.into_iter();
        if let Some(first) = iter.next() {
            write!(self.0, "{first}")?;
            for x in iter {
                write!(self.0, " {x}")?;
            }
        }
        self.0.write_all(b"\n")
    }

    pub fn yes(&mut self) -> io::Result<()> {
        self.0.write_all(b"YES\n")
    }

    pub fn no(&mut self) -> io::Result<()> {
        self.0.write_all(b"NO\n")
    }

    pub fn yes_no(&mut self, cond: bool) -> io::Result<()> {
        if cond { self.yes() } else { self.no() }
    }
}

impl Write for Output<'_> {
    #[inline(always)]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    #[inline(always)]
    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

/// Reads from a [`Scanner`], propagating errors with `?`.
///
/// `read!(sc, T)`, `read!(sc, T1, T2)` for a tuple, `read!(sc, [T; n])` for a `Vec`.
#[macro_export]
macro_rules! read {
    ($sc:expr, [$t:ty; $n:expr]) => { $sc.vec::<$t>(($n) as usize)? };
    ($sc:expr, $t:ty) => { $sc.next::<$t>()? };
    ($sc:expr, $($t:ty),+ $(,)?) => { ($($sc.next::<$t>()?),+) };
}
