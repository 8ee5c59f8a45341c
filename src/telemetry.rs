use actix::Message;
use actix_service::{forward_ready, Service, Transform};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use futures::future::{ready, LocalBoxFuture, Ready};
use tracing_batteries::prelude::*;

/// Wraps an actor message with the span it was sent from so that the work
/// done by the receiving actor is recorded as part of the same trace.
pub struct TraceMessage<M> {
    pub span: tracing::Span,
    pub message: M,
}

impl<M: Message> Message for TraceMessage<M> {
    type Result = M::Result;
}

pub trait TraceMessageExt: Message + Sized {
    fn trace(self) -> TraceMessage<Self> {
        TraceMessage {
            span: tracing::Span::current(),
            message: self,
        }
    }
}

impl<M: Message> TraceMessageExt for M {}

/// Middleware which runs every request inside a server span.
pub struct TracingLogger;

impl<S, B> Transform<S, ServiceRequest> for TracingLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Transform = TracingLoggerMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TracingLoggerMiddleware { service }))
    }
}

pub struct TracingLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TracingLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let route = req
            .match_pattern()
            .unwrap_or_else(|| req.path().to_string());

        let span = tracing::info_span!(
            "request",
            otel.name = %format!("{} {}", req.method(), route),
            otel.kind = "server",
            http.method = %req.method(),
            http.route = %route,
            http.target = %req.uri(),
            http.status_code = tracing::field::Empty,
        );

        let response = {
            let _guard = span.enter();
            self.service.call(req)
        };

        let request_span = span.clone();
        Box::pin(tracing::Instrument::instrument(
            async move {
                let result = response.await;
                let status = match &result {
                    Ok(response) => response.status(),
                    Err(err) => err.as_response_error().status_code(),
                };

                request_span.record("http.status_code", status.as_u16());
                if status.is_server_error() {
                    warn!("Request failed with HTTP {}", status);
                } else {
                    debug!("Request completed with HTTP {}", status);
                }

                result
            },
            span,
        ))
    }
}
