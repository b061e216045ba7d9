//! End-to-end flow of one table view, minus the network: UI state in,
//! wire query out, raw response in, normalized page out.

use chrono::NaiveDate;
use opsdash::client::PagedClient;
use opsdash::prelude::*;
use rstest::*;
use serde_json::json;

#[fixture]
fn payout_response() -> serde_json::Value {
	json!({
		"status": true,
		"data": {
			"content": [
				{
					"payoutRef": "PO-2025-0101",
					"amount": 50000.0,
					"currency": "NGN",
					"destinationAccount": "0123456789",
					"bankName": "GTBank",
					"status": "SUCCESS",
					"createdAt": "2025-06-14T08:00:00Z"
				}
			],
			"totalElements": 31,
			"totalPages": 4,
			"number": 2
		}
	})
}

#[rstest]
fn filter_edit_to_normalized_page(payout_response: serde_json::Value) {
	// The user typed a reference, picked a status, then cleared the status
	// back to "All".
	let mut filters = FilterSet::new();
	filters.set("reference", "PO-2025");
	filters.set("status", FilterValue::Choice("SUCCESS".into()));
	filters.set("status", FilterValue::Choice("All".into()));

	let page_request = PageRequest::from_one_based(3, 10);
	let query = build_query(&filters, &SortSpec::default(), page_request, &Payouts);

	assert!(query.contains(&("reference".into(), "PO-2025".into())));
	assert!(!query.iter().any(|(k, _)| k == "status"));
	assert!(query.contains(&("page".into(), "2".into())));

	let page = PagedClient::normalize(&Payouts, &payout_response, page_request).unwrap();
	assert_eq!(page.rows[0].serial_number, 21);
	assert_eq!(page.rows[0].bank, "GTBank");
	assert_eq!(page.total_pages, 4);
	assert_eq!(page.expected_pages(10), 4);
}

#[rstest]
fn stale_fetches_lose_to_the_latest_one(payout_response: serde_json::Value) {
	let seq = RequestSeq::new();

	// First fetch goes out, then the user types again before it lands.
	let stale = seq.begin();
	let fresh = seq.begin();

	let page = PagedClient::normalize(&Payouts, &payout_response, PageRequest::new(0, 10));
	assert!(page.is_ok());

	// The earlier response must be discarded even though it normalized fine.
	assert!(!seq.is_current(stale));
	assert!(seq.is_current(fresh));
}

#[rstest]
fn metric_windows_line_up_for_the_dashboard_header() {
	let now = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
	let current = resolve_window(Period::ThisMonth, now);
	let previous = previous_window(current, now);

	assert_eq!(current.start, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
	assert_eq!(current.end, now);
	assert_eq!(previous.end, NaiveDate::from_ymd_opt(2025, 5, 31).unwrap());
	assert_eq!(previous.duration_days(), current.duration_days());
}

#[rstest]
fn reset_all_returns_the_table_to_defaults() {
	let mut filters = FilterSet::new();
	filters.set("status", FilterValue::Choice("FAILED".into()));
	filters.set("startDate", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
	filters.clear();

	let query = build_query(
		&filters,
		&SortSpec::default(),
		PageRequest::new(0, 10),
		&Transactions,
	);
	let keys: Vec<&str> = query.iter().map(|(k, _)| k.as_str()).collect();
	assert_eq!(keys, vec!["page", "size", "sortBy", "sortOrder"]);
}
