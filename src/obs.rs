//! Optional observability helpers for SSO operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `eve_sso.operation` with the `operation`,
//!   `stage`, and `environment` fields.
//! - Enable `metrics` to increment the `eve_sso_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// SSO operations observed by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SsoOperation {
	/// Building the login redirect URL.
	Authorize,
	/// Exchanging an authorization code for a token.
	ExchangeCode,
	/// Resolving an access token to a character.
	Verify,
}
impl SsoOperation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SsoOperation::Authorize => "authorize",
			SsoOperation::ExchangeCode => "exchange_code",
			SsoOperation::Verify => "verify",
		}
	}
}
impl Display for SsoOperation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl OperationOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationOutcome::Attempt => "attempt",
			OperationOutcome::Success => "success",
			OperationOutcome::Failure => "failure",
		}
	}
}
impl Display for OperationOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
