//! JSON endpoint in front of a payment processor
//!
//! Takes `{"amount": "12.34"}` and answers with the receipt as JSON.
//! The amount travels as a string so no precision is lost on the way in.

use kiln_core::{Amount, KilnError, PaymentProcessor, Result};
use serde::Deserialize;

const REQUEST_CONTRACT: &str = "json";
const PAYMENT_REQUEST: &str = "payment request";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaymentRequest {
    amount: Amount,
}

/// Text-in, text-out adapter over any [`PaymentProcessor`]
#[derive(Debug)]
pub struct JsonPaymentEndpoint<P> {
    processor: P,
}

impl<P: PaymentProcessor> JsonPaymentEndpoint<P> {
    /// Serve `processor`
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    /// Handle one request document
    ///
    /// # Errors
    ///
    /// [`KilnError::ConversionFailure`] for documents that are not a
    /// payment request; otherwise whatever the processor reports.
    pub fn handle(&self, request: &str) -> Result<String> {
        let request: PaymentRequest = serde_json::from_str(request).map_err(|e| {
            tracing::warn!(error = %e, "malformed payment request");
            KilnError::conversion(REQUEST_CONTRACT, PAYMENT_REQUEST, e.to_string())
        })?;
        let receipt = self.processor.pay(&request.amount)?;
        serde_json::to_string(&receipt)
            .map_err(|e| KilnError::conversion("payment receipt", REQUEST_CONTRACT, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::CentsGatewayAdapter;
    use assert_matches::assert_matches;
    use kiln_products::SandboxCentsGateway;
    use serde_json::Value;

    fn endpoint(gateway: &SandboxCentsGateway) -> JsonPaymentEndpoint<CentsGatewayAdapter<'_>> {
        JsonPaymentEndpoint::new(CentsGatewayAdapter::new(gateway))
    }

    #[test]
    fn test_request_produces_receipt() {
        let gateway = SandboxCentsGateway::default();
        let response = endpoint(&gateway).handle(r#"{"amount":"12.34"}"#).unwrap();
        let value: Value = serde_json::from_str(&response).unwrap();
        assert_eq!(value["minor_units"], 1234);
        assert_eq!(value["exponent"], 2);
        assert_eq!(value["gateway"], "cents-gateway");
    }

    #[test]
    fn test_malformed_requests() {
        let gateway = SandboxCentsGateway::default();
        let endpoint = endpoint(&gateway);
        for request in [
            "not json",
            r#"{"amount": 12.34}"#,
            r#"{"amount":"-1"}"#,
            r#"{"amount":"1.00","tip":"2"}"#,
            r#"{}"#,
        ] {
            assert_matches!(
                endpoint.handle(request),
                Err(KilnError::ConversionFailure { .. }),
                "request {request} should be refused"
            );
        }
    }

    #[test]
    fn test_processor_errors_pass_through() {
        let gateway = SandboxCentsGateway::new(10);
        let endpoint = endpoint(&gateway);
        assert_matches!(
            endpoint.handle(r#"{"amount":"5"}"#),
            Err(KilnError::CapabilityFault { .. })
        );
    }
}
