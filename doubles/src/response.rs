//! Programmed responses

use std::any::Any;

use crate::argument::Call;

type Produce = Box<dyn Fn(&Call) -> Box<dyn Any> + Send + Sync>;

/// What a stub does when it matches a call
pub(crate) enum Response {
    /// A fixed value, cloned out on every match
    Return(Produce),
    /// A value computed from the actual arguments
    Answer(Produce),
    /// An `Err` for methods returning `Result`
    Fail(Produce),
    /// Delegate to the real instance behind a spy
    CallReal,
}

pub(crate) enum Resolution {
    Value(Box<dyn Any>),
    CallReal,
}

impl Response {
    pub(crate) fn returning<R>(value: R) -> Self
    where
        R: Clone + Send + Sync + 'static,
    {
        Response::Return(Box::new(move |_| Box::new(value.clone())))
    }

    pub(crate) fn answering<R, F>(answer: F) -> Self
    where
        R: 'static,
        F: Fn(&Call) -> R + Send + Sync + 'static,
    {
        Response::Answer(Box::new(move |call| Box::new(answer(call))))
    }

    pub(crate) fn failing<T, E>(error: E) -> Self
    where
        T: 'static,
        E: Clone + Send + Sync + 'static,
    {
        Response::Fail(Box::new(move |_| {
            Box::new(Err::<T, E>(error.clone()))
        }))
    }

    pub(crate) fn resolve(&self, call: &Call) -> Resolution {
        match self {
            Response::Return(produce) | Response::Answer(produce) | Response::Fail(produce) => {
                Resolution::Value(produce(call))
            }
            Response::CallReal => Resolution::CallReal,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Response::Return(_) => "return",
            Response::Answer(_) => "answer",
            Response::Fail(_) => "fail",
            Response::CallReal => "call-real",
        }
    }

    pub(crate) fn is_call_real(&self) -> bool {
        matches!(self, Response::CallReal)
    }
}
