//! Order submission flow
//!
//! Receipt upload (when an image is attached) must complete and its URL be
//! attached to the request before the creation call is issued; the two are
//! never concurrent, and an upload failure aborts the submission so no order
//! is created without its intended receipt reference.
//!
//! Preventing a second submission while one is pending is the caller's job:
//! disable the trigger, this flow does not deduplicate requests.

use shared::order::OrderRequest;
use shared::util::order_code;
use tracing::{info, warn};

use super::CheckoutError;
use crate::services::{OrderService, ReceiptUploader};

/// Successful checkout outcome
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    /// Persisted order id
    pub id: String,
    /// Short code shown to the customer
    pub code: String,
}

/// Submit an assembled order, uploading the payment receipt first when one
/// was attached.
pub async fn place_order(
    orders: &dyn OrderService,
    receipts: &dyn ReceiptUploader,
    mut request: OrderRequest,
    receipt_image: Option<&[u8]>,
) -> Result<PlacedOrder, CheckoutError> {
    if let Some(image) = receipt_image
        && request.receipt_url.is_none()
    {
        let url = receipts.upload(image).await.map_err(|error| {
            warn!(error = %error, "receipt upload failed, aborting order creation");
            CheckoutError::UploadFailed(error)
        })?;
        request.receipt_url = Some(url);
    }

    let created = orders
        .create_order(&request)
        .await
        .map_err(CheckoutError::classify_remote)?;

    let code = order_code(&created.id);
    info!(order_id = %created.id, code = %code, total = request.total, "order placed");
    Ok(PlacedOrder {
        id: created.id,
        code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{CreatedOrder, ServiceError};
    use async_trait::async_trait;
    use shared::models::{Order, OrderStatus};
    use shared::order::ServiceType;
    use std::sync::Mutex;

    fn request() -> OrderRequest {
        OrderRequest {
            customer_name: "Ana Reyes".to_string(),
            contact_number: "0917 000 1111".to_string(),
            service_type: ServiceType::Pickup,
            address: None,
            pickup_time: Some("5-10 minutes".to_string()),
            party_size: None,
            dine_in_time: None,
            payment_method: "gcash".to_string(),
            reference_number: None,
            notes: None,
            total: 250.0,
            items: vec![],
            receipt_url: None,
        }
    }

    /// Records call order and the receipt URL seen at creation time
    #[derive(Default)]
    struct Backend {
        calls: Mutex<Vec<String>>,
        create_error: Option<String>,
        upload_error: Option<String>,
    }

    #[async_trait]
    impl OrderService for Backend {
        async fn create_order(
            &self,
            request: &OrderRequest,
        ) -> Result<CreatedOrder, ServiceError> {
            self.calls.lock().unwrap().push(format!(
                "create:{}",
                request.receipt_url.as_deref().unwrap_or("-")
            ));
            match &self.create_error {
                Some(message) => Err(ServiceError::new(message.clone())),
                None => Ok(CreatedOrder {
                    id: "order-2f9a41bc".to_string(),
                }),
            }
        }

        async fn update_order_status(
            &self,
            _order_id: &str,
            _status: OrderStatus,
        ) -> Result<(), ServiceError> {
            Ok(())
        }

        async fn delete_order(&self, _order_id: &str) -> Result<(), ServiceError> {
            Ok(())
        }

        async fn list_orders(&self) -> Result<Vec<Order>, ServiceError> {
            Ok(vec![])
        }

        async fn find_order(&self, _code: &str) -> Result<Option<Order>, ServiceError> {
            Ok(None)
        }

        async fn find_orders_by_phone(&self, _phone: &str) -> Result<Vec<Order>, ServiceError> {
            Ok(vec![])
        }
    }

    #[async_trait]
    impl ReceiptUploader for Backend {
        async fn upload(&self, _image: &[u8]) -> Result<String, ServiceError> {
            self.calls.lock().unwrap().push("upload".to_string());
            match &self.upload_error {
                Some(message) => Err(ServiceError::new(message.clone())),
                None => Ok("https://cdn.example/receipts/abc.jpg".to_string()),
            }
        }
    }

    #[tokio::test]
    async fn test_order_without_receipt_skips_upload() {
        let backend = Backend::default();
        let placed = place_order(&backend, &backend, request(), None).await.unwrap();

        assert_eq!(placed.id, "order-2f9a41bc");
        assert_eq!(placed.code, "2F9A41BC");
        assert_eq!(*backend.calls.lock().unwrap(), vec!["create:-"]);
    }

    #[tokio::test]
    async fn test_upload_completes_before_creation_and_url_is_attached() {
        let backend = Backend::default();
        place_order(&backend, &backend, request(), Some(b"jpeg-bytes"))
            .await
            .unwrap();

        assert_eq!(
            *backend.calls.lock().unwrap(),
            vec![
                "upload".to_string(),
                "create:https://cdn.example/receipts/abc.jpg".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_upload_failure_short_circuits_creation() {
        let backend = Backend {
            upload_error: Some("image too large".to_string()),
            ..Backend::default()
        };
        let result = place_order(&backend, &backend, request(), Some(b"jpeg-bytes")).await;

        assert!(matches!(result, Err(CheckoutError::UploadFailed(_))));
        // No partial order without its intended receipt reference
        assert_eq!(*backend.calls.lock().unwrap(), vec!["upload"]);
    }

    #[tokio::test]
    async fn test_insufficient_stock_surfaces_verbatim() {
        let backend = Backend {
            create_error: Some("Insufficient stock for Spanish Latte: 1 left".to_string()),
            ..Backend::default()
        };
        let error = place_order(&backend, &backend, request(), None)
            .await
            .unwrap_err();

        match error {
            CheckoutError::OutOfStock(message) => {
                assert_eq!(message, "Insufficient stock for Spanish Latte: 1 left");
            }
            other => panic!("expected OutOfStock, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rate_limit_classification() {
        for message in ["Rate limit exceeded", "request rejected: missing identifiers"] {
            let backend = Backend {
                create_error: Some(message.to_string()),
                ..Backend::default()
            };
            let error = place_order(&backend, &backend, request(), None)
                .await
                .unwrap_err();
            assert!(matches!(error, CheckoutError::RateLimited), "for {message}");
        }
    }

    #[tokio::test]
    async fn test_other_remote_failures_ask_for_retry() {
        let backend = Backend {
            create_error: Some("connection reset by peer".to_string()),
            ..Backend::default()
        };
        let error = place_order(&backend, &backend, request(), None)
            .await
            .unwrap_err();

        assert!(matches!(error, CheckoutError::OrderCreationFailed(_)));
        assert_eq!(error.to_string(), "Failed to place order. Please try again.");
    }
}
