use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;
/// MongoDB skip 은 i64 라서 `(page - 1) * page_size` 가 그 안에 들어와야 한다
pub const MAX_PAGE: u64 = i64::MAX as u64 / MAX_PAGE_SIZE;

/// `?page=&page_size=` 쿼리 (page 는 1부터)
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl PageQuery {
    /// 범위를 벗어난 값은 가장 가까운 유효값으로 맞춘다
    pub fn normalized(&self) -> (u64, u64) {
        let page = self.page.unwrap_or(1).clamp(1, MAX_PAGE);
        let page_size = self
            .page_size
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);
        (page, page_size)
    }

    pub fn skip(&self) -> u64 {
        let (page, page_size) = self.normalized();
        (page - 1) * page_size
    }
}

#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let query = PageQuery::default();

        assert_eq!(query.normalized(), (1, DEFAULT_PAGE_SIZE));
        assert_eq!(query.skip(), 0);
    }

    #[test]
    fn test_clamps_out_of_range_values() {
        let query = PageQuery {
            page: Some(0),
            page_size: Some(10_000),
        };

        assert_eq!(query.normalized(), (1, MAX_PAGE_SIZE));
    }

    #[test]
    fn test_skip_for_third_page() {
        let query = PageQuery {
            page: Some(3),
            page_size: Some(10),
        };

        assert_eq!(query.skip(), 20);
    }

    #[test]
    fn test_huge_page_does_not_overflow() {
        let query = PageQuery {
            page: Some(u64::MAX),
            page_size: Some(20),
        };

        assert_eq!(query.normalized().0, MAX_PAGE);
        assert!(query.skip() <= i64::MAX as u64);
    }
}
