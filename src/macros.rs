#[macro_export]
macro_rules! version {
    () => {
        env!("CARGO_PKG_VERSION")
    };
    ($prefix:literal) => {
        concat!($prefix, env!("CARGO_PKG_VERSION"))
    };
}

/// Implements `Handler<TraceMessage<$msg>>` for an actor by entering the
/// caller's span and delegating to its `Handler<$msg>` implementation.
#[macro_export]
macro_rules! trace_handler {
    ($actor:ty, $msg:ty, $result:ty) => {
        impl actix::prelude::Handler<$crate::telemetry::TraceMessage<$msg>> for $actor {
            type Result = $result;

            fn handle(
                &mut self,
                msg: $crate::telemetry::TraceMessage<$msg>,
                ctx: &mut Self::Context,
            ) -> Self::Result {
                let span = msg.span.clone();
                let _guard = span.enter();
                <Self as actix::prelude::Handler<$msg>>::handle(self, msg.message, ctx)
            }
        }
    };
}
