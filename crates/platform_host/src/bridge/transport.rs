//! Host transport contract and an in-memory scripted transport for tests.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    future::Future,
    pin::Pin,
    rc::Rc,
};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::error::HostCallError;

/// Object-safe boxed future used by [`HostTransport`] async methods.
pub type HostTransportFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Request/response channel to the host process.
///
/// One call is one round trip: the command name and a JSON argument record go out, a JSON result
/// or a failure comes back. Implementations keep no retry state.
pub trait HostTransport {
    /// Invokes a named host command with a JSON argument record.
    fn invoke<'a>(
        &'a self,
        command: &'a str,
        args: Value,
    ) -> HostTransportFuture<'a, Result<Value, HostCallError>>;

    /// Returns whether a real host is reachable through this transport.
    fn is_attached(&self) -> bool {
        true
    }
}

/// Serializes `args`, invokes `command` through `transport`, and deserializes the result.
///
/// # Errors
///
/// Returns [`HostCallError::Encode`]/[`HostCallError::Decode`] for wire-shape problems and passes
/// transport or host failures through unchanged.
pub async fn call_with<S, A, T>(transport: &S, command: &str, args: &A) -> Result<T, HostCallError>
where
    S: HostTransport + ?Sized,
    A: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let args = serde_json::to_value(args).map_err(|e| HostCallError::Encode {
        command: command.to_string(),
        message: e.to_string(),
    })?;
    let value = transport.invoke(command, args).await?;
    serde_json::from_value(value).map_err(|e| HostCallError::Decode {
        command: command.to_string(),
        message: e.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One recorded invocation seen by [`MemoryHostTransport`].
pub struct HostCall {
    /// Wire command name.
    pub command: String,
    /// JSON argument record as sent.
    pub args: Value,
}

#[derive(Debug, Default)]
struct MemoryHostState {
    calls: Vec<HostCall>,
    replies: HashMap<String, VecDeque<Result<Value, HostCallError>>>,
}

#[derive(Debug, Clone, Default)]
/// Scripted in-memory transport that records every call.
///
/// Replies are queued per command and consumed in order; a command with no queued reply answers
/// `null`. Clones share state, so a test can keep one handle while the code under test owns
/// another.
pub struct MemoryHostTransport {
    inner: Rc<RefCell<MemoryHostState>>,
}

impl MemoryHostTransport {
    /// Queues a successful reply for the next call to `command`.
    pub fn reply_ok(&self, command: &str, value: Value) {
        self.push_reply(command, Ok(value));
    }

    /// Queues a failing reply for the next call to `command`.
    pub fn reply_err(&self, command: &str, err: HostCallError) {
        self.push_reply(command, Err(err));
    }

    /// Returns every call recorded so far, oldest first.
    pub fn calls(&self) -> Vec<HostCall> {
        self.inner.borrow().calls.clone()
    }

    /// Returns the command names recorded so far, oldest first.
    pub fn commands(&self) -> Vec<String> {
        self.inner
            .borrow()
            .calls
            .iter()
            .map(|call| call.command.clone())
            .collect()
    }

    fn push_reply(&self, command: &str, reply: Result<Value, HostCallError>) {
        self.inner
            .borrow_mut()
            .replies
            .entry(command.to_string())
            .or_default()
            .push_back(reply);
    }
}

impl HostTransport for MemoryHostTransport {
    fn invoke<'a>(
        &'a self,
        command: &'a str,
        args: Value,
    ) -> HostTransportFuture<'a, Result<Value, HostCallError>> {
        Box::pin(async move {
            let mut state = self.inner.borrow_mut();
            state.calls.push(HostCall {
                command: command.to_string(),
                args,
            });
            state
                .replies
                .get_mut(command)
                .and_then(VecDeque::pop_front)
                .unwrap_or(Ok(Value::Null))
        })
    }
}
