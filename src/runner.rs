//! Sets up the streams and calls the solve routine once per test case.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::config::{BuildMode, Config, TestCount};
use crate::debug::{self, Diagnostics, Silent, StreamSink};
use crate::error::{Error, Result, Stream};
use crate::fastio::{Output, Scanner};
use crate::rng::Rng;

/// Everything a solve routine gets; shared by all test cases of a run.
pub struct Context<'a> {
    pub input: Scanner<'a>,
    pub out: Output<'a>,
    pub rng: Rng,
    /// 1-based index of the current test case.
    pub case: usize,
}

pub trait Solve {
    fn solve(&mut self, ctx: &mut Context<'_>) -> Result<()>;
}

impl<F> Solve for F
where
    F: FnMut(&mut Context<'_>) -> Result<()>,
{
    #[inline(always)]
    fn solve(&mut self, ctx: &mut Context<'_>) -> Result<()> {
        self(ctx)
    }
}

fn open(stream: Stream, path: &Path, file: io::Result<File>) -> Result<File> {
    file.map_err(|source| Error::Redirect { stream, path: path.to_owned(), source })
}

pub struct Runner {
    config: Config,
}

impl Runner {
    pub fn new(config: Config) -> Self {
        Runner { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs against the configured files, or the standard streams.
    pub fn run<S: Solve>(&self, solver: S) -> Result<()> {
        let mut raw = Vec::with_capacity(1 << 16);
        match &self.config.input {
            Some(path) => {
                log::debug!("reading input from {}", path.display());
                open(Stream::Input, path, File::open(path))?.read_to_end(&mut raw)?;
            }
            None => {
                io::stdin().lock().read_to_end(&mut raw)?;
            }
        }
        // invalid bytes only matter once a token containing them is parsed
        let input = String::from_utf8_lossy(&raw);

        let output: Box<dyn Write> = match &self.config.output {
            Some(path) => {
                log::debug!("writing output to {}", path.display());
                Box::new(open(Stream::Output, path, File::create(path))?)
            }
            None => Box::new(io::stdout().lock()),
        };

        let sink: Box<dyn Diagnostics> = match (self.config.mode, &self.config.diagnostics) {
            (BuildMode::OnlineJudge, _) => Box::new(Silent),
            (BuildMode::Local, Some(path)) => {
                log::debug!("writing diagnostics to {}", path.display());
                Box::new(StreamSink(open(Stream::Diagnostics, path, File::create(path))?))
            }
            (BuildMode::Local, None) => Box::new(StreamSink(io::stderr())),
        };

        self.run_with(&input, output, sink, solver)
    }

    /// Runs against in-memory input and an arbitrary writer.
    ///
    /// `sink` is installed for the duration of the run and the previous sink
    /// is restored afterwards, even when a case fails.
    pub fn run_with<'a, S: Solve>(
        &self,
        input: &'a str,
        output: impl Write + 'a,
        sink: Box<dyn Diagnostics>,
        mut solver: S,
    ) -> Result<()> {
        let mut ctx = Context {
            input: Scanner::new(input),
            out: Output::new(output),
            rng: match self.config.seed {
                Some(seed) => Rng::with_seed(seed),
                None => Rng::from_clock(),
            },
            case: 0,
        };

        let previous = debug::set_sink(sink);
        let result = self.drive(&mut ctx, &mut solver);
        debug::set_sink(previous);
        result
    }

    fn drive<S: Solve>(&self, ctx: &mut Context<'_>, solver: &mut S) -> Result<()> {
        let cases = match self.config.tests {
            TestCount::Single => 1,
            TestCount::FromInput => ctx.input.next::<usize>()?,
        };
        log::debug!("running {cases} case(s) in {} mode", self.config.mode);

        for case in 1..=cases {
            log::trace!("case {case}");
            ctx.case = case;
            solver.solve(ctx)?;
        }
        ctx.out.flush()?;
        Ok(())
    }
}
