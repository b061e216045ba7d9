//! Translation of UI state into a wire query.

use opsdash_core::{FilterSet, PageRequest, SortSpec};

use crate::resource::Resource;

/// Builds the flat key/value query for one fetch.
///
/// Filters whose value is empty, whitespace-only, or one of the
/// `"All"`/`"default"` sentinels are elided entirely — never sent as empty
/// strings — so the backend's own defaulting applies. Pagination and sort
/// keys are appended after the filters; an unset sort field falls back to
/// the resource's default.
///
/// Value semantics (date ordering, amount ranges) are not validated here;
/// callers validate before building the query.
///
/// # Examples
///
/// ```
/// use opsdash_client::{build_query, resources::Transactions};
/// use opsdash_core::{FilterSet, FilterValue, PageRequest, SortSpec};
///
/// let mut filters = FilterSet::new();
/// filters.set("status", FilterValue::Choice("All".into()));
/// filters.set("vnuban", "9900112233");
///
/// let query = build_query(
///     &filters,
///     &SortSpec::default(),
///     PageRequest::new(0, 10),
///     &Transactions,
/// );
/// // "All" was elided; pagination and default sort were appended.
/// assert!(!query.iter().any(|(k, _)| k == "status"));
/// assert!(query.contains(&("sortBy".into(), "createdAt".into())));
/// ```
pub fn build_query<R: Resource>(
	filters: &FilterSet,
	sort: &SortSpec,
	page: PageRequest,
	resource: &R,
) -> Vec<(String, String)> {
	let mut query: Vec<(String, String)> = filters
		.iter()
		.filter_map(|(key, value)| value.as_param().map(|v| (key.to_string(), v)))
		.collect();

	query.push(("page".into(), page.index.to_string()));
	query.push(("size".into(), page.size.to_string()));

	let sort_field = sort
		.field
		.as_deref()
		.unwrap_or_else(|| resource.default_sort_field());
	let sort_order = if sort.field.is_some() {
		sort.order
	} else {
		resource.default_sort_order()
	};
	query.push(("sortBy".into(), sort_field.to_string()));
	query.push(("sortOrder".into(), sort_order.as_str().to_string()));

	query
}
