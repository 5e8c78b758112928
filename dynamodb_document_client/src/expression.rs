use crate::{sdk::types::AttributeValue, IntoValue};
use std::collections::HashMap;

/// query/scanに渡す条件.
///
/// key conditionはqueryでのみ使われ、scanでは無視されます。
/// ```
/// # use dynamodb_document_client::Expression;
/// let expr = Expression::new()
///     .key_condition("#id = :id")
///     .filter("qty > :min")
///     .name("#id", "id")
///     .value(":id", "w1")
///     .value(":min", 3);
/// assert_eq!(expr.key_condition_expression(), Some("#id = :id"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    key_condition: Option<String>,
    filter: Option<String>,
    projection: Option<String>,
    names: HashMap<String, String>,
    values: HashMap<String, AttributeValue>,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_condition(mut self, expression: impl Into<String>) -> Self {
        self.key_condition = Some(expression.into());
        self
    }

    /// サーバー側で適用されるフィルタ
    pub fn filter(mut self, expression: impl Into<String>) -> Self {
        self.filter = Some(expression.into());
        self
    }

    /// 取得する項目を絞ります
    pub fn projection(mut self, expression: impl Into<String>) -> Self {
        self.projection = Some(expression.into());
        self
    }

    /// `#name`形式のplaceholderを追加します
    pub fn name(mut self, placeholder: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(placeholder.into(), name.into());
        self
    }

    /// `:value`形式のplaceholderを追加します
    pub fn value(mut self, placeholder: impl Into<String>, value: impl IntoValue) -> Self {
        self.values.insert(placeholder.into(), value.into_value());
        self
    }

    pub fn key_condition_expression(&self) -> Option<&str> {
        self.key_condition.as_deref()
    }

    pub fn filter_expression(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn projection_expression(&self) -> Option<&str> {
        self.projection.as_deref()
    }

    pub fn names(&self) -> &HashMap<String, String> {
        &self.names
    }

    pub fn values(&self) -> &HashMap<String, AttributeValue> {
        &self.values
    }

    // 空のmapはValidationExceptionになるので、未設定として送る
    pub(crate) fn names_for_request(&self) -> Option<HashMap<String, String>> {
        (!self.names.is_empty()).then(|| self.names.clone())
    }

    pub(crate) fn values_for_request(&self) -> Option<HashMap<String, AttributeValue>> {
        (!self.values.is_empty()).then(|| self.values.clone())
    }
}
