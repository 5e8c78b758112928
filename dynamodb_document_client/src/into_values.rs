use crate::{
    sdk::{primitives::Blob, types::AttributeValue},
    Item,
};

/// [`AttributeValue`]に変換できる値
pub trait IntoValue {
    fn into_value(self) -> AttributeValue;
}

/// 数値型
pub trait Number: IntoValue {}

impl IntoValue for AttributeValue {
    fn into_value(self) -> AttributeValue {
        self
    }
}

impl IntoValue for String {
    fn into_value(self) -> AttributeValue {
        AttributeValue::S(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> AttributeValue {
        AttributeValue::S(self.into())
    }
}

impl IntoValue for bool {
    fn into_value(self) -> AttributeValue {
        AttributeValue::Bool(self)
    }
}

macro_rules! num_into_value {
    ($($t: ty),*) => {
        $(
            impl IntoValue for $t {
                fn into_value(self) -> AttributeValue {
                    AttributeValue::N(self.to_string())
                }
            }

            impl Number for $t {}
        )*
    };
}

num_into_value!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

impl IntoValue for Vec<u8> {
    fn into_value(self) -> AttributeValue {
        AttributeValue::B(Blob::new(self))
    }
}

/// itemを指すprimary key.
///
/// partition keyだけ、またはpartition key + sort keyを持ちます。
/// ```
/// # use dynamodb_document_client::Key;
/// let key = Key::new("id", "w1").and("version", 3);
/// assert_eq!(key.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Key(Item);

impl Key {
    pub fn new(name: impl Into<String>, value: impl IntoValue) -> Self {
        Self::default().and(name, value)
    }

    /// 項目を追加します
    pub fn and(mut self, name: impl Into<String>, value: impl IntoValue) -> Self {
        self.0.insert(name.into(), value.into_value());
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_item(&self) -> &Item {
        &self.0
    }

    pub fn into_item(self) -> Item {
        self.0
    }
}

impl From<Item> for Key {
    fn from(value: Item) -> Self {
        Self(value)
    }
}
