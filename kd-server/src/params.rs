use kd_core::dataselect::DataSelectQuery;
use rocket::FromForm;

/// Data-select parameters as they come in on the query string.
#[derive(Clone, Debug, Default, FromForm)]
pub struct ListParams {
    #[field(name = "filterBy")]
    pub filter_by: Option<String>,

    #[field(name = "sortBy")]
    pub sort_by: Option<String>,

    #[field(name = "itemsPerPage")]
    pub items_per_page: Option<i64>,

    pub page: Option<i64>,
}

impl ListParams {
    pub fn to_query(&self, default_items_per_page: i64) -> anyhow::Result<DataSelectQuery> {
        DataSelectQuery::from_params(
            self.filter_by.as_deref(),
            self.sort_by.as_deref(),
            self.items_per_page,
            self.page,
            default_items_per_page,
        )
    }
}
