//! # Outcome Algebra
//!
//! Curried combinators over `Result<O, E>` so that fallible steps (host calls, file lookups)
//! can be composed as plain data instead of early returns scattered through the command flows.
//!
//! Every combinator takes its transformer first and hands back a reusable function from
//! `Result` to `Result` (or to a future of one). The variant that does not match is passed
//! through untouched and the transformer is never invoked for it.

use futures::future::{self, BoxFuture, Either, IntoFuture, Ready};
use futures::{FutureExt, TryFuture, TryFutureExt};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

/// A future that always resolves to a `Result`; failures arrive as `Err`, never as a panic.
pub type AsyncResult<'a, O, E> = BoxFuture<'a, Result<O, E>>;

/// Serde tag of the success variant in the wire shape.
pub const OK_TAG: &str = "Ok";
/// Serde tag of the error variant in the wire shape.
pub const ERR_TAG: &str = "Err";

pub fn ok<O, E>(value: O) -> Result<O, E> {
    Ok(value)
}

pub fn error<O, E>(value: E) -> Result<O, E> {
    Err(value)
}

pub fn is_ok<O, E>(result: &Result<O, E>) -> bool {
    matches!(result, Ok(_))
}

pub fn is_err<O, E>(result: &Result<O, E>) -> bool {
    matches!(result, Err(_))
}

/// Structural guard for results that crossed an untyped boundary as JSON.
///
/// Matches serde's externally tagged encoding: an object with exactly one key,
/// either `"Ok"` or `"Err"`. The payload itself is not inspected.
pub fn is_result(value: &Value) -> bool {
    match value {
        Value::Object(map) if map.len() == 1 => {
            map.contains_key(OK_TAG) || map.contains_key(ERR_TAG)
        }
        _ => false,
    }
}

/// A JSON value that claimed to be a result but is not one.
#[derive(Debug, thiserror::Error)]
pub enum MalformedResult {
    #[error("value is neither an Ok nor an Err result: {0}")]
    Shape(String),

    #[error("result payload does not match the expected type: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Decode a guarded JSON value into a typed result.
pub fn decode<O, E>(value: Value) -> Result<Result<O, E>, MalformedResult>
where
    O: DeserializeOwned,
    E: DeserializeOwned,
{
    if !is_result(&value) {
        return Err(MalformedResult::Shape(value.to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

pub fn map_ok<O, O2, E, F>(f: F) -> impl Fn(Result<O, E>) -> Result<O2, E>
where
    F: Fn(O) -> O2,
{
    move |result| match result {
        Ok(value) => Ok(f(value)),
        Err(err) => Err(err),
    }
}

pub fn map_error<O, E, E2, F>(f: F) -> impl Fn(Result<O, E>) -> Result<O, E2>
where
    F: Fn(E) -> E2,
{
    move |result| match result {
        Ok(value) => Ok(value),
        Err(err) => Err(f(err)),
    }
}

/// Feed the success payload to `f`, which decides the next result itself.
pub fn chain_ok<O, O2, E, F>(f: F) -> impl Fn(Result<O, E>) -> Result<O2, E>
where
    F: Fn(O) -> Result<O2, E>,
{
    move |result| match result {
        Ok(value) => f(value),
        Err(err) => Err(err),
    }
}

/// Feed the error payload to `f`, which may recover or produce a different error.
pub fn chain_error<O, E, E2, F>(f: F) -> impl Fn(Result<O, E>) -> Result<O, E2>
where
    F: Fn(E) -> Result<O, E2>,
{
    move |result| match result {
        Ok(value) => Ok(value),
        Err(err) => f(err),
    }
}

/// Asynchronous `chain_ok`. An `Err` input resolves on the first poll.
pub fn async_chain_ok<O, O2, E, F, Fut>(
    f: F,
) -> impl Fn(Result<O, E>) -> Either<Ready<Result<O2, E>>, Fut>
where
    F: Fn(O) -> Fut,
    Fut: Future<Output = Result<O2, E>>,
{
    move |result| match result {
        Ok(value) => Either::Right(f(value)),
        Err(err) => Either::Left(future::ready(Err(err))),
    }
}

/// Asynchronous `chain_error`. An `Ok` input resolves on the first poll.
pub fn async_chain_error<O, E, E2, F, Fut>(
    f: F,
) -> impl Fn(Result<O, E>) -> Either<Ready<Result<O, E2>>, Fut>
where
    F: Fn(E) -> Fut,
    Fut: Future<Output = Result<O, E2>>,
{
    move |result| match result {
        Ok(value) => Either::Left(future::ready(Ok(value))),
        Err(err) => Either::Right(f(err)),
    }
}

/// Leave the algebra: apply the handler matching the variant and return its value.
pub fn either<O, E, T>(
    if_ok: impl FnOnce(O) -> T,
    if_err: impl FnOnce(E) -> T,
    result: Result<O, E>,
) -> T {
    match result {
        Ok(value) => if_ok(value),
        Err(err) => if_err(err),
    }
}

/// `either` with the result taken last, one argument at a time.
pub fn piped_either<'a, O, E, T, FO, FE>(
    if_ok: FO,
) -> impl Fn(FE) -> Box<dyn Fn(Result<O, E>) -> T + 'a>
where
    FO: Fn(O) -> T + Clone + 'a,
    FE: Fn(E) -> T + 'a,
    O: 'a,
    E: 'a,
    T: 'a,
{
    move |if_err| {
        let if_ok = if_ok.clone();
        Box::new(move |result: Result<O, E>| either(&if_ok, &if_err, result))
    }
}

pub fn to_boolean<O, E>(result: &Result<O, E>) -> bool {
    is_ok(result)
}

/// Apply `f` to `value`; reads left to right in pipelines.
pub fn pipe<A, B>(value: A, f: impl FnOnce(A) -> B) -> B {
    f(value)
}

/// Turn a fallible future into one that resolves to its `Result`.
pub fn from_future<Fut>(fut: Fut) -> IntoFuture<Fut>
where
    Fut: TryFuture,
{
    TryFutureExt::into_future(fut)
}

/// Adapt a fallible async operation so each call yields a result future.
///
/// Operations taking several arguments receive them as a tuple.
pub fn resultify<A, F, Fut>(f: F) -> impl Fn(A) -> IntoFuture<Fut>
where
    F: Fn(A) -> Fut,
    Fut: TryFuture,
{
    move |args| from_future(f(args))
}

/// A panic captured while polling a future.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("operation panicked: {message}")]
pub struct Panicked {
    pub message: String,
}

/// Poll `fut` to completion, converting a panic into `Err(Panicked)`.
pub async fn catch_panic<Fut>(fut: Fut) -> Result<Fut::Output, Panicked>
where
    Fut: Future,
{
    AssertUnwindSafe(fut)
        .catch_unwind()
        .await
        .map_err(|payload| Panicked {
            message: panic_message(payload.as_ref()),
        })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
