// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};
use std::mem;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use http::HeaderMap;
use http_body::Body as HttpBody;
use http_body::{Frame, SizeHint};
use http_body_util::combinators::UnsyncBoxBody;
use http_body_util::BodyExt;
use log::debug;

use crate::{Error, Result};

/// Boxed error carried by streaming bodies.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Body of a request that is about to be signed.
///
/// A body is either absent, already buffered in memory, or a stream that can
/// only be read once. Signers call [`Body::buffer`] to capture the payload;
/// after that the body holds the same bytes in memory and can be read again
/// by the transport.
pub struct Body {
    inner: Inner,
    trailers: Option<HeaderMap>,
}

enum Inner {
    Empty,
    Bytes(Bytes),
    Streaming(UnsyncBoxBody<Bytes, BoxError>),
}

impl Body {
    /// Create an absent body.
    pub fn empty() -> Self {
        Self {
            inner: Inner::Empty,
            trailers: None,
        }
    }

    /// Wrap a single-read streaming body.
    pub fn wrap<B>(body: B) -> Self
    where
        B: HttpBody<Data = Bytes> + Send + 'static,
        B::Error: Into<BoxError>,
    {
        Self {
            inner: Inner::Streaming(body.map_err(|err| -> BoxError { err.into() }).boxed_unsync()),
            trailers: None,
        }
    }

    /// Returns `true` if no body was attached at all.
    pub fn is_absent(&self) -> bool {
        matches!(self.inner, Inner::Empty)
    }

    /// Returns `true` if the body is still a stream that has not been buffered.
    pub fn is_streaming(&self) -> bool {
        matches!(self.inner, Inner::Streaming(_))
    }

    /// Returns the buffered bytes, or `None` if the body is absent or still streaming.
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match &self.inner {
            Inner::Bytes(bs) => Some(bs),
            _ => None,
        }
    }

    /// Attach trailers that are sent after the buffered bytes.
    ///
    /// Trailers are ignored on absent and streaming bodies.
    pub fn with_trailers(mut self, trailers: Option<HeaderMap>) -> Self {
        if matches!(self.inner, Inner::Bytes(_)) {
            self.trailers = trailers;
        }
        self
    }

    /// Returns the trailers kept by [`Body::buffer`], if the stream had any.
    pub fn trailers(&self) -> Option<&HeaderMap> {
        self.trailers.as_ref()
    }

    /// Read the whole body into memory and return its bytes.
    ///
    /// A streaming body is consumed exactly once and replaced by the bytes it
    /// yielded, so later reads observe the same content. Buffered bodies are
    /// returned as cheap clones and absent bodies as empty bytes.
    ///
    /// Only data frames are returned. Trailer frames are kept on the body,
    /// available from [`Body::trailers`], and are sent again after the bytes.
    ///
    /// If the stream fails halfway, the bytes read so far are kept in the body
    /// and a [`crate::ErrorKind::BodyUnreadable`] error is returned.
    pub async fn buffer(&mut self) -> Result<Bytes> {
        let mut stream = match mem::replace(&mut self.inner, Inner::Empty) {
            Inner::Empty => return Ok(Bytes::new()),
            Inner::Bytes(bs) => {
                self.inner = Inner::Bytes(bs.clone());
                return Ok(bs);
            }
            Inner::Streaming(stream) => stream,
        };

        let mut buf = BytesMut::new();
        while let Some(frame) = stream.frame().await {
            match frame {
                Ok(frame) => match frame.into_data() {
                    Ok(data) => buf.extend_from_slice(&data),
                    Err(frame) => {
                        if let Ok(trailers) = frame.into_trailers() {
                            self.trailers
                                .get_or_insert_with(HeaderMap::new)
                                .extend(trailers);
                        }
                    }
                },
                Err(err) => {
                    debug!("body stream failed after {} bytes", buf.len());
                    self.inner = Inner::Bytes(buf.freeze());
                    return Err(Error::body_unreadable("failed to read request body")
                        .with_source(anyhow::anyhow!(err)));
                }
            }
        }

        let bs = buf.freeze();
        self.inner = Inner::Bytes(bs.clone());
        Ok(bs)
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::empty()
    }
}

impl Debug for Body {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Inner::Empty => f.write_str("Body::Empty"),
            Inner::Bytes(bs) => f.debug_tuple("Body::Bytes").field(&bs.len()).finish(),
            Inner::Streaming(_) => f.write_str("Body::Streaming"),
        }
    }
}

impl From<Bytes> for Body {
    fn from(bs: Bytes) -> Self {
        Self {
            inner: Inner::Bytes(bs),
            trailers: None,
        }
    }
}

impl From<Vec<u8>> for Body {
    fn from(v: Vec<u8>) -> Self {
        Bytes::from(v).into()
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Bytes::from(s).into()
    }
}

impl From<&'static str> for Body {
    fn from(s: &'static str) -> Self {
        Bytes::from_static(s.as_bytes()).into()
    }
}

impl HttpBody for Body {
    type Data = Bytes;
    type Error = BoxError;

    fn poll_frame(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<std::result::Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.get_mut();
        match &mut this.inner {
            Inner::Empty => Poll::Ready(None),
            Inner::Bytes(bs) if !bs.is_empty() => Poll::Ready(Some(Ok(Frame::data(mem::take(bs))))),
            Inner::Bytes(_) => Poll::Ready(this.trailers.take().map(|t| Ok(Frame::trailers(t)))),
            Inner::Streaming(stream) => Pin::new(stream).poll_frame(cx),
        }
    }

    fn is_end_stream(&self) -> bool {
        match &self.inner {
            Inner::Empty => true,
            Inner::Bytes(bs) => bs.is_empty() && self.trailers.is_none(),
            Inner::Streaming(stream) => stream.is_end_stream(),
        }
    }

    fn size_hint(&self) -> SizeHint {
        match &self.inner {
            Inner::Empty => SizeHint::with_exact(0),
            Inner::Bytes(bs) => SizeHint::with_exact(bs.len() as u64),
            Inner::Streaming(stream) => stream.size_hint(),
        }
    }
}
