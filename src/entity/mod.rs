//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//! 列表和键值字段以 JSON 文本存储。

pub mod prelude;

pub mod assessments;
pub mod assignments;
pub mod chat_sessions;
pub mod students;

use serde::de::DeserializeOwned;

/// 解析 JSON 文本列，损坏的数据按空值处理
pub(crate) fn decode_json<T: DeserializeOwned + Default>(raw: &str) -> T {
    serde_json::from_str(raw).unwrap_or_default()
}

/// 秒级时间戳转换为 UTC 时间
pub(crate) fn from_timestamp(ts: i64) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::<chrono::Utc>::from_timestamp(ts, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json_tolerates_corrupt_rows() {
        let list: Vec<String> = decode_json("[\"fractions\",\"decimals\"]");
        assert_eq!(list, vec!["fractions", "decimals"]);

        let broken: Vec<String> = decode_json("not json");
        assert!(broken.is_empty());
    }

    #[test]
    fn test_from_timestamp() {
        assert_eq!(from_timestamp(0).timestamp(), 0);
        assert_eq!(from_timestamp(1_700_000_000).timestamp(), 1_700_000_000);
    }
}
