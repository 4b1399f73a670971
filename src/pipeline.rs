use std::io::{Read, Write};

use crate::error::TailError;
use crate::filter::FilterSet;
use crate::project::Projector;
use crate::stream::ObjectStream;

/// What to do with the stream once connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Action {
    /// Continuously print filtered/projected events
    Tail,
    /// Print the field names of the first event and exit
    List,
}

/// Orchestrates ObjectStream -> FilterSet -> Projector -> sink.
///
/// Fully synchronous, one in-flight object; the only blocking points
/// are the input read and the output write. Any stream error
/// propagates to the caller unrecovered.
pub struct Pipeline {
    action: Action,
    filters: FilterSet,
    projector: Projector,
    single: bool,
}

impl Pipeline {
    pub fn new(
        action: Action,
        filters: FilterSet,
        fields: Option<Vec<String>>,
        single: bool,
    ) -> Self {
        let projector = match fields {
            Some(fields) => Projector::Fields(fields),
            None => Projector::Raw,
        };
        Pipeline {
            action,
            filters,
            projector,
            single,
        }
    }

    pub fn run<R: Read, W: Write>(&self, input: R, output: &mut W) -> Result<(), TailError> {
        let mut stream = ObjectStream::new(input);
        match self.action {
            Action::List => self.run_list(&mut stream, output),
            Action::Tail => self.run_tail(&mut stream, output),
        }
    }

    /// Print the top-level field names of the first object, one per
    /// line, in the object's own order. EOF before any object means
    /// no output. Never reads past the first object.
    fn run_list<R: Read, W: Write>(
        &self,
        stream: &mut ObjectStream<R>,
        output: &mut W,
    ) -> Result<(), TailError> {
        if let Some(object) = stream.next() {
            for name in object?.keys() {
                writeln!(output, "{}", name)?;
            }
        }
        output.flush()?;
        Ok(())
    }

    fn run_tail<R: Read, W: Write>(
        &self,
        stream: &mut ObjectStream<R>,
        output: &mut W,
    ) -> Result<(), TailError> {
        for object in stream {
            let object = object?;

            if !self.filters.should_include(&object) {
                continue;
            }

            writeln!(output, "{}", self.projector.render(&object))?;
            // The stream is live; a buffered sink must not sit on a
            // matched event.
            output.flush()?;

            if self.single {
                return Ok(());
            }
        }
        Ok(())
    }
}
