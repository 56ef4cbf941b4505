// self
use crate::{_prelude::*, config::SsoEnvironment, obs::SsoOperation};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedOperation<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOperation<F> = F;

/// A span builder used by SSO operations.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Creates a new span tagged with the operation, stage, and target environment.
	pub fn new(operation: SsoOperation, stage: &'static str, environment: SsoEnvironment) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"eve_sso.operation",
				operation = operation.as_str(),
				stage,
				environment = environment.as_str()
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, stage, environment);

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> OperationSpanGuard {
		#[cfg(feature = "tracing")]
		{
			OperationSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			OperationSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOperation<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// RAII guard returned by [`OperationSpan::entered`].
pub struct OperationSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for OperationSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("OperationSpanGuard(..)")
	}
}
