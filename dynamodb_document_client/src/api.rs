use crate::{
    sdk::{
        operation::{
            delete_item::DeleteItemOutput, get_item::GetItemOutput, put_item::PutItemOutput,
            query::QueryOutput, scan::ScanOutput,
        },
        Error as SdkError,
    },
    Expression, Item,
};
use async_trait::async_trait;

/// [`DocumentClient`](`crate::DocumentClient`)が使うDynamoDBの操作.
///
/// [`aws_sdk_dynamodb::Client`]が実装しています。テストではこれを差し替えます。
#[async_trait]
pub trait DynamoDbApi: Send + Sync {
    async fn put_item(&self, table_name: &str, item: Item) -> Result<PutItemOutput, SdkError>;

    async fn get_item(&self, table_name: &str, key: Item) -> Result<GetItemOutput, SdkError>;

    async fn delete_item(&self, table_name: &str, key: Item)
        -> Result<DeleteItemOutput, SdkError>;

    /// 1ページ分のqueryを行います
    async fn query(
        &self,
        table_name: &str,
        expression: &Expression,
        exclusive_start_key: Option<Item>,
    ) -> Result<QueryOutput, SdkError>;

    /// 1ページ分のscanを行います
    async fn scan(
        &self,
        table_name: &str,
        expression: &Expression,
        exclusive_start_key: Option<Item>,
    ) -> Result<ScanOutput, SdkError>;
}

#[async_trait]
impl DynamoDbApi for aws_sdk_dynamodb::Client {
    async fn put_item(&self, table_name: &str, item: Item) -> Result<PutItemOutput, SdkError> {
        self.put_item()
            .table_name(table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(Into::into)
    }

    async fn get_item(&self, table_name: &str, key: Item) -> Result<GetItemOutput, SdkError> {
        self.get_item()
            .table_name(table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(Into::into)
    }

    async fn delete_item(
        &self,
        table_name: &str,
        key: Item,
    ) -> Result<DeleteItemOutput, SdkError> {
        self.delete_item()
            .table_name(table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(Into::into)
    }

    async fn query(
        &self,
        table_name: &str,
        expression: &Expression,
        exclusive_start_key: Option<Item>,
    ) -> Result<QueryOutput, SdkError> {
        self.query()
            .table_name(table_name)
            .set_key_condition_expression(expression.key_condition_expression().map(Into::into))
            .set_filter_expression(expression.filter_expression().map(Into::into))
            .set_projection_expression(expression.projection_expression().map(Into::into))
            .set_expression_attribute_names(expression.names_for_request())
            .set_expression_attribute_values(expression.values_for_request())
            .set_exclusive_start_key(exclusive_start_key)
            .send()
            .await
            .map_err(Into::into)
    }

    async fn scan(
        &self,
        table_name: &str,
        expression: &Expression,
        exclusive_start_key: Option<Item>,
    ) -> Result<ScanOutput, SdkError> {
        self.scan()
            .table_name(table_name)
            .set_filter_expression(expression.filter_expression().map(Into::into))
            .set_projection_expression(expression.projection_expression().map(Into::into))
            .set_expression_attribute_names(expression.names_for_request())
            .set_expression_attribute_values(expression.values_for_request())
            .set_exclusive_start_key(exclusive_start_key)
            .send()
            .await
            .map_err(Into::into)
    }
}
