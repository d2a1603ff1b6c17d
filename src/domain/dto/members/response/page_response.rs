use serde::{Deserialize, Serialize};

/// 페이지네이션 응답 DTO
///
/// 회원 목록 조회 등 목록 API의 공통 응답 형식입니다.
/// 페이지 번호는 0부터 시작합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl<T> PageResponse<T> {
    /// 전체 요소 수로부터 전체 페이지 수를 계산하여 생성
    pub fn new(items: Vec<T>, page: u64, size: u64, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };

        Self {
            items,
            page,
            size,
            total_elements,
            total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        let page: PageResponse<i32> = PageResponse::new(vec![1, 2, 3], 0, 10, 23);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_exact_division() {
        let page: PageResponse<i32> = PageResponse::new(vec![], 1, 10, 30);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_empty_collection() {
        let page: PageResponse<i32> = PageResponse::new(vec![], 0, 10, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.is_empty());
    }

    #[test]
    fn test_zero_size_does_not_panic() {
        let page: PageResponse<i32> = PageResponse::new(vec![], 0, 0, 5);
        assert_eq!(page.total_pages, 0);
    }
}
