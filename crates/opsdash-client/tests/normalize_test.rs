use opsdash_client::PagedClient;
use opsdash_client::resources::{Transactions, Vnubans};
use opsdash_core::{OpsError, PageRequest};
use rstest::*;
use serde_json::{Value, json};

#[fixture]
fn transaction_page() -> Value {
	json!({
		"status": true,
		"data": {
			"content": [
				{
					"transactionRef": "TXN-001",
					"amount": 1500.0,
					"fee": 10.5,
					"currency": "NGN",
					"vnuban": "9900112233",
					"merchantName": "Acme Stores",
					"status": "SUCCESS",
					"createdAt": "2025-03-09T10:15:00Z"
				},
				{
					"transactionRef": "TXN-002",
					"amount": 250.0,
					"status": "PENDING"
				}
			],
			"totalElements": 12,
			"totalPages": 2,
			"number": 1
		}
	})
}

#[rstest]
fn rows_get_serial_numbers_from_the_requested_page(transaction_page: Value) {
	let page = PagedClient::normalize(&Transactions, &transaction_page, PageRequest::new(1, 10))
		.unwrap();

	assert_eq!(page.rows.len(), 2);
	assert_eq!(page.rows[0].serial_number, 11);
	assert_eq!(page.rows[1].serial_number, 12);
	assert_eq!(page.total_elements, 12);
	assert_eq!(page.total_pages, 2);
	assert_eq!(page.index, 1);
}

#[rstest]
fn sparse_records_never_produce_null_fields(transaction_page: Value) {
	let page = PagedClient::normalize(&Transactions, &transaction_page, PageRequest::new(1, 10))
		.unwrap();

	let sparse = &page.rows[1];
	assert_eq!(sparse.vnuban, "N/A");
	assert_eq!(sparse.merchant_name, "N/A");
	assert_eq!(sparse.currency, "NGN");
	assert_eq!(sparse.fee, 0.0);
	assert_eq!(sparse.created_at, "");
}

#[rstest]
fn backend_field_names_map_to_canonical_ones() {
	let body = json!({
		"status": true,
		"data": {
			"content": [{ "accountNo": "9911223344", "accountName": "Jane Doe" }],
			"totalElements": 1,
			"totalPages": 1,
			"number": 0
		}
	});
	let page = PagedClient::normalize(&Vnubans, &body, PageRequest::new(0, 10)).unwrap();
	assert_eq!(page.rows[0].vnuban, "9911223344");
	assert_eq!(page.rows[0].account_name, "Jane Doe");
}

#[rstest]
fn missing_envelope_is_a_normalization_error() {
	let body = json!({ "rows": [] });
	let err =
		PagedClient::normalize(&Transactions, &body, PageRequest::new(0, 10)).unwrap_err();
	assert!(matches!(err, OpsError::Normalization(_)));
}

#[rstest]
fn status_false_surfaces_the_backend_message() {
	let body = json!({ "status": false, "message": "Session expired" });
	let err =
		PagedClient::normalize(&Transactions, &body, PageRequest::new(0, 10)).unwrap_err();
	match err {
		OpsError::Backend { message } => assert_eq!(message, "Session expired"),
		other => panic!("expected Backend error, got {other:?}"),
	}
}

#[rstest]
fn empty_result_has_zero_total_pages() {
	let body = json!({
		"status": true,
		"data": { "content": [], "totalElements": 0, "totalPages": 0, "number": 0 }
	});
	let page = PagedClient::normalize(&Transactions, &body, PageRequest::new(0, 10)).unwrap();
	assert!(page.is_empty());
	assert_eq!(page.expected_pages(10), 0);
}

#[rstest]
fn rederived_page_count_matches_backend_totals(transaction_page: Value) {
	let page = PagedClient::normalize(&Transactions, &transaction_page, PageRequest::new(1, 10))
		.unwrap();
	// 12 elements at size 10 => 2 pages, agreeing with the reported value.
	assert_eq!(page.expected_pages(10), page.total_pages);
}
