use super::*;
use crate::errors::*;
use crate::jsonutils::parse_rfc3339;
use crate::prelude::*;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterQuery {
    pub terms: Vec<(PropertyName, ComparableValue)>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortQuery {
    // (property, ascending)
    pub keys: Vec<(PropertyName, bool)>,
}

/// 1-indexed page request; `items_per_page <= 0` means "give me everything".
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PaginationQuery {
    pub items_per_page: i64,
    pub page: i64,
}

impl PaginationQuery {
    pub fn new(items_per_page: i64, page: i64) -> PaginationQuery {
        PaginationQuery { items_per_page, page }
    }

    pub fn no_limit() -> PaginationQuery {
        PaginationQuery { items_per_page: 0, page: 1 }
    }

    pub fn is_unlimited(&self) -> bool {
        self.items_per_page <= 0
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        PaginationQuery::no_limit()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DataSelectQuery {
    pub filter: FilterQuery,
    pub sort: SortQuery,
    pub pagination: PaginationQuery,
}

impl DataSelectQuery {
    pub fn new(filter: FilterQuery, sort: SortQuery, pagination: PaginationQuery) -> DataSelectQuery {
        DataSelectQuery { filter, sort, pagination }
    }

    /// Build a query from the raw request parameters.  A missing `itemsPerPage` falls back to
    /// `default_items_per_page`, and a missing `page` means the first one.
    pub fn from_params(
        filter_by: Option<&str>,
        sort_by: Option<&str>,
        items_per_page: Option<i64>,
        page: Option<i64>,
        default_items_per_page: i64,
    ) -> anyhow::Result<DataSelectQuery> {
        Ok(DataSelectQuery {
            filter: filter_by.map(FilterQuery::parse).transpose()?.unwrap_or_default(),
            sort: sort_by.map(SortQuery::parse).transpose()?.unwrap_or_default(),
            pagination: PaginationQuery::new(items_per_page.unwrap_or(default_items_per_page), page.unwrap_or(1)),
        })
    }
}

fn split_params(raw: &str) -> Vec<&str> {
    if raw.trim().is_empty() {
        return vec![];
    }
    raw.split(',').map(str::trim).collect()
}

impl FilterQuery {
    // "prop,value,prop,value"
    pub fn parse(raw: &str) -> anyhow::Result<FilterQuery> {
        let parts = split_params(raw);
        if parts.len() % 2 != 0 {
            bail!(ResourceError::validation(&format!("filterBy needs property/value pairs: {raw:?}")));
        }

        let terms = parts
            .chunks(2)
            .map(|pair| {
                let prop = PropertyName::parse(pair[0]);
                let value = typed_value(&prop, pair[1])?;
                Ok((prop, value))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(FilterQuery { terms })
    }
}

impl SortQuery {
    // "a,prop,d,prop"
    pub fn parse(raw: &str) -> anyhow::Result<SortQuery> {
        let parts = split_params(raw);
        if parts.len() % 2 != 0 {
            bail!(ResourceError::validation(&format!("sortBy needs direction/property pairs: {raw:?}")));
        }

        let keys = parts
            .chunks(2)
            .map(|pair| {
                let ascending = match pair[0] {
                    SORT_ASCENDING => true,
                    SORT_DESCENDING => false,
                    other => bail!(ResourceError::validation(&format!("unknown sort direction: {other:?}"))),
                };
                Ok((PropertyName::parse(pair[1]), ascending))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(SortQuery { keys })
    }
}

fn typed_value(prop: &PropertyName, raw: &str) -> anyhow::Result<ComparableValue> {
    match prop.value_kind() {
        ValueKind::String => Ok(raw.into()),
        ValueKind::Time => parse_rfc3339(raw)
            .map(ComparableValue::Time)
            .ok_or_else(|| ResourceError::validation(&format!("{prop} filter needs an RFC3339 timestamp: {raw:?}"))),
        ValueKind::Numeric => raw
            .parse::<i64>()
            .map(ComparableValue::Numeric)
            .map_err(|_| ResourceError::validation(&format!("{prop} filter needs an integer: {raw:?}"))),
    }
}
