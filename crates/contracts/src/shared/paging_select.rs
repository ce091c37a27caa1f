use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Аргументы запроса одной страницы опций
///
/// Сериализуется в camelCase: `page`, `limit`, `relatedKey` (опускается, если не задан).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchPageArgs {
    pub page: usize,
    pub limit: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_key: Option<String>,
}

impl FetchPageArgs {
    pub fn new(page: usize, limit: usize, related_key: Option<String>) -> Self {
        Self {
            page,
            limit,
            related_key,
        }
    }
}

/// Ответ источника данных: элементы страницы и общее количество записей
///
/// `total` - количество записей, не страниц. Отсутствующие поля читаются как пустой список и 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    #[serde(default)]
    pub total: i64,
}

impl<T> PageResponse<T> {
    pub fn new(list: Vec<T>, total: i64) -> Self {
        Self { list, total }
    }
}

/// Опция с ключом `code`; остальные поля хранятся как есть
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionRecord {
    pub code: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Поля, из которых берётся подпись опции (по порядку)
const LABEL_FIELDS: [&str; 5] = ["label", "name", "description", "ename", "cname"];

impl OptionRecord {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(|v| v.as_str())
    }

    /// Подпись для отображения; если подходящего поля нет, возвращается `code`
    pub fn label(&self) -> String {
        LABEL_FIELDS
            .iter()
            .find_map(|key| self.field_str(key))
            .unwrap_or(&self.code)
            .to_string()
    }
}
