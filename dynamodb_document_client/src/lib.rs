//! DynamoDBの1テーブルをドキュメントとして扱うための薄いClient.
//!
//! get/put/deleteは1回のリクエストで、query/scanは続きのページを全部たどって
//! 1つの結果にまとめて返します。

pub use api::DynamoDbApi;
pub use client::DocumentClient;
pub use config::Options;
pub use error::Error;
pub use expression::Expression;
pub use into_values::{IntoValue, Key, Number};
pub use shared::{shared_client, ClientCell};

mod api;
mod client;
mod config;
mod error;
mod expression;
mod into_values;
mod paginate;
mod shared;

/// DynamoDBの1レコード
pub type Item = std::collections::HashMap<String, sdk::types::AttributeValue>;

pub mod sdk {
    pub use aws_sdk_dynamodb::*;
}

pub mod sdk_config {
    pub use aws_config::*;
}
