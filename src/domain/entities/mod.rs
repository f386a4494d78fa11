//! 데이터베이스 행(row)과 1:1로 대응하는 엔티티
//!
//! 날짜는 `yyyy-MM-dd` 문자열로 저장합니다. SQLite와 PostgreSQL 모두에서
//! 같은 표현을 쓰기 위함입니다.

pub mod users;
pub mod task_statuses;
pub mod labels;
pub mod tasks;

pub use users::*;
pub use task_statuses::*;
pub use labels::*;
pub use tasks::*;

/// 오늘 날짜 (`yyyy-MM-dd`, UTC)
pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_format() {
        let date = today();

        assert_eq!(date.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }
}
