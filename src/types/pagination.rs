use std::collections::HashMap;

#[derive(Debug, PartialEq)]
pub struct Pagination {
    pub limit: i64,
    pub page: i64,
}

impl Pagination {
    /// Rows to skip before the requested page starts.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

/// Reads `limit` and `page` out of the raw query map. A missing or
/// unparsable value falls back to its default (limit 10, page 1).
pub fn extract_pagination(params: HashMap<String, String>) -> Pagination {
    let limit = params
        .get("limit")
        .and_then(|limit| limit.parse::<i64>().ok())
        .unwrap_or(10);
    let page = params
        .get("page")
        .and_then(|page| page.parse::<i64>().ok())
        .unwrap_or(1);

    Pagination { limit, page }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_params() {
        let pagination = extract_pagination(HashMap::new());
        assert_eq!(pagination, Pagination { limit: 10, page: 1 });
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn first_page_starts_at_zero() {
        let mut params = HashMap::new();
        params.insert("limit".to_string(), "2".to_string());
        params.insert("page".to_string(), "1".to_string());

        let pagination = extract_pagination(params);
        assert_eq!(pagination, Pagination { limit: 2, page: 1 });
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn offset_skips_previous_pages() {
        let mut params = HashMap::new();
        params.insert("limit".to_string(), "10".to_string());
        params.insert("page".to_string(), "3".to_string());

        assert_eq!(extract_pagination(params).offset(), 20);
    }

    #[test]
    fn unparsable_values_fall_back_to_defaults() {
        let mut params = HashMap::new();
        params.insert("limit".to_string(), "a lot".to_string());
        params.insert("page".to_string(), "first".to_string());

        assert_eq!(
            extract_pagination(params),
            Pagination { limit: 10, page: 1 }
        );
    }

    #[test]
    fn out_of_range_page_keeps_its_offset() {
        let mut params = HashMap::new();
        params.insert("limit".to_string(), "2".to_string());
        params.insert("page".to_string(), "50".to_string());

        // The store returns an empty slice for offsets past the end.
        assert_eq!(extract_pagination(params).offset(), 98);
    }
}
