//! Response relay.
//!
//! # Responsibilities
//! - Map dispatch failures to `502 Bad Gateway`
//! - Copy upstream status and headers onto the caller's response
//! - Stream the upstream body back in bounded frames
//!
//! # Design Decisions
//! - Frames never exceed `RELAY_BUFFER_SIZE`; larger upstream chunks are
//!   split without copying
//! - An upstream read error ends the relayed body early instead of failing
//!   the response, which is already committed by then
//! - The upstream body lives inside the relay stream and is dropped with it,
//!   on completion, on error, or when the caller goes away

use std::convert::Infallible;
use std::fmt;

use axum::body::{Body, BodyDataStream, Bytes};
use axum::http::{Response, StatusCode};
use futures_util::stream::{self, StreamExt};

use crate::observability::Logger;

/// Upper bound on the size of a relayed body frame.
pub const RELAY_BUFFER_SIZE: usize = 1024;

/// `502 Bad Gateway` carrying the error text as body.
pub fn bad_gateway(err: &impl fmt::Display) -> Response<Body> {
    let mut response = Response::new(Body::from(err.to_string()));
    *response.status_mut() = StatusCode::BAD_GATEWAY;
    response
}

/// Build the caller's response from an upstream one.
pub fn relay_response(upstream: Response<Body>, logger: Logger) -> Response<Body> {
    let (parts, body) = upstream.into_parts();

    let mut response = Response::new(relay_body(body, logger));
    *response.status_mut() = parts.status;

    let headers = response.headers_mut();
    for (name, value) in parts.headers.iter() {
        headers.append(name.clone(), value.clone());
    }

    response
}

struct Relay {
    upstream: BodyDataStream,
    pending: Bytes,
    logger: Logger,
}

/// Re-frame `body` into chunks of at most [`RELAY_BUFFER_SIZE`] bytes.
pub fn relay_body(body: Body, logger: Logger) -> Body {
    let relay = Relay {
        upstream: body.into_data_stream(),
        pending: Bytes::new(),
        logger,
    };

    let frames = stream::unfold(relay, |mut relay| async move {
        loop {
            if !relay.pending.is_empty() {
                let len = relay.pending.len().min(RELAY_BUFFER_SIZE);
                let frame = relay.pending.split_to(len);
                return Some((Ok::<_, Infallible>(frame), relay));
            }

            match relay.upstream.next().await {
                Some(Ok(chunk)) => relay.pending = chunk,
                Some(Err(err)) => {
                    relay
                        .logger
                        .debug(format_args!("relay stopped on upstream body error: {err}"));
                    return None;
                }
                None => return None,
            }
        }
    });

    Body::from_stream(frames)
}
