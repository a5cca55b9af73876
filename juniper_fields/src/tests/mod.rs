use std::{
    io,
    sync::{Arc, Mutex},
};

use arcstr::literal;
use tracing_subscriber::fmt::MakeWriter;

use crate::{GraphQLTypeRef, Type};

mod validation;

/// Object type the resolvers under test return.
struct User;

impl GraphQLTypeRef for User {
    fn type_ref() -> Type {
        Type::NonNullNamed(literal!("User"))
    }
}

/// In-memory sink for formatted events.
#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Buffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` and returns the events it emitted at `DEBUG` level or above,
/// formatted one per line.
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = Buffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap()
}
