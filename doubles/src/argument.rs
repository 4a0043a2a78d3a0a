//! Call arguments
//!
//! Arguments are type-erased when a double records them so that one ledger can
//! hold calls of any signature. The `Debug` rendering is captured up front for
//! verification messages.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A single argument as recorded by a double
#[derive(Clone)]
pub struct Argument {
    value: Arc<dyn Any + Send + Sync>,
    rendered: String,
}

impl Argument {
    pub fn new<A>(value: A) -> Self
    where
        A: Any + Send + Sync + fmt::Debug,
    {
        let rendered = format!("{:?}", value);
        Self {
            value: Arc::new(value),
            rendered,
        }
    }

    /// The argument as `A`, or `None` if it has a different type
    pub fn downcast_ref<A: Any>(&self) -> Option<&A> {
        let value: &(dyn Any + Send + Sync) = &*self.value;
        value.downcast_ref::<A>()
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Debug for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// A call about to be dispatched against a double
#[derive(Debug, Clone)]
pub struct Call {
    method: &'static str,
    arguments: Vec<Argument>,
}

impl Call {
    pub fn new(method: &'static str) -> Self {
        Self {
            method,
            arguments: Vec::new(),
        }
    }

    /// Append the next positional argument
    pub fn arg<A>(mut self, value: A) -> Self
    where
        A: Any + Send + Sync + fmt::Debug,
    {
        self.arguments.push(Argument::new(value));
        self
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Typed access to the argument at `position`
    pub fn argument<A: Any>(&self, position: usize) -> Option<&A> {
        self.arguments.get(position)?.downcast_ref::<A>()
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.method)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(argument.rendered())?;
        }
        f.write_str(")")
    }
}
