//! Diagnostics sink behind the [`debug!`](crate::debug!) macro.
//!
//! The sink is thread-local and replaceable. Building with the
//! `online-judge` feature turns [`ENABLED`] off, after which `debug!` never
//! evaluates its arguments.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crate::render::Render;

pub const ENABLED: bool = !cfg!(feature = "online-judge");

pub trait Diagnostics {
    fn record(&mut self, label: &str, value: &dyn Render);
}

/// Drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Diagnostics for Silent {
    #[inline(always)]
    fn record(&mut self, _: &str, _: &dyn Render) {}
}

/// Writes `label = value` lines to any byte stream.
pub struct StreamSink<W: io::Write>(pub W);

impl<W: io::Write> Diagnostics for StreamSink<W> {
    fn record(&mut self, label: &str, value: &dyn Render) {
        let line = value.to_rendered();
        // diagnostics must never take the program down
        let _ = writeln!(self.0, "{label} = {line}");
    }
}

/// In-memory sink whose clones share one buffer.
#[derive(Clone, Debug, Default)]
pub struct Buffer(Rc<RefCell<String>>);

impl Buffer {
    pub fn contents(&self) -> String {
        self.0.borrow().clone()
    }
}

impl Diagnostics for Buffer {
    fn record(&mut self, label: &str, value: &dyn Render) {
        let mut buf = self.0.borrow_mut();
        buf.push_str(label);
        buf.push_str(" = ");
        let _ = value.render(&mut *buf);
        buf.push('\n');
    }
}

fn default_sink() -> Box<dyn Diagnostics> {
    match ENABLED {
        true => Box::new(StreamSink(io::stderr())),
        false => Box::new(Silent),
    }
}

thread_local! {
    static SINK: RefCell<Box<dyn Diagnostics>> = RefCell::new(default_sink());
}

/// Installs `sink` for the current thread and returns the previous one.
pub fn set_sink(sink: Box<dyn Diagnostics>) -> Box<dyn Diagnostics> {
    SINK.with(|cur| std::mem::replace(&mut *cur.borrow_mut(), sink))
}

#[doc(hidden)]
pub fn __record(label: &str, value: &dyn Render) {
    SINK.with(|sink| {
        // a Render impl that calls debug! would re-enter; drop that record
        if let Ok(mut sink) = sink.try_borrow_mut() {
            sink.record(label, value)
        }
    })
}

/// Records `expr = rendered` for each argument.
#[macro_export]
macro_rules! debug {
    ($($x: expr),+ $(,)?) => {
        if $crate::debug::ENABLED {
            $($crate::debug::__record(::std::stringify!($x), &$x);)+
        }
    };
}
