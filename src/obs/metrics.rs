// self
use crate::obs::{OperationOutcome, SsoOperation};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_operation_outcome(operation: SsoOperation, outcome: OperationOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"eve_sso_operation_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

/// Records success or failure for a finished operation.
pub fn record_operation_result<T, E>(operation: SsoOperation, result: &Result<T, E>) {
	let outcome = if result.is_ok() { OperationOutcome::Success } else { OperationOutcome::Failure };

	record_operation_outcome(operation, outcome);
}
