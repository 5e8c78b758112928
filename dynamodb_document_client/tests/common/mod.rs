#![allow(dead_code)]

use async_trait::async_trait;
use dynamodb_document_client::{
    sdk::{
        operation::{
            delete_item::DeleteItemOutput, get_item::GetItemOutput, put_item::PutItemOutput,
            query::QueryOutput, scan::ScanOutput,
        },
        types::error::ProvisionedThroughputExceededException,
        Error as SdkError,
    },
    DynamoDbApi, Expression, Item,
};
use serde::{Deserialize, Serialize};
use std::{
    collections::{HashMap, VecDeque},
    sync::Mutex,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub id: String,
    pub qty: u32,
}

pub fn item(value: serde_json::Value) -> Item {
    serde_dynamo::aws_sdk_dynamodb_1::to_item(value).unwrap()
}

pub fn throttled() -> SdkError {
    SdkError::ProvisionedThroughputExceededException(
        ProvisionedThroughputExceededException::builder()
            .message("slow down")
            .build(),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    PutItem,
    GetItem,
    DeleteItem,
    Query {
        key_condition: Option<String>,
        start: Option<Item>,
    },
    Scan {
        start: Option<Item>,
    },
}

type Page = Result<(Vec<Item>, Option<Item>), SdkError>;

/// メモリ上のテーブル。query/scanは積まれたページを順に返し、無ければ全件を1ページで返す
#[derive(Debug)]
pub struct FakeDynamoDb {
    key_names: Vec<String>,
    items: Mutex<HashMap<String, Item>>,
    pages: Mutex<VecDeque<Page>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeDynamoDb {
    pub fn new(key_names: &[&str]) -> Self {
        Self {
            key_names: key_names.iter().map(|&n| n.to_owned()).collect(),
            items: Mutex::default(),
            pages: Mutex::default(),
            calls: Mutex::default(),
        }
    }

    pub fn with_page(self, items: Vec<Item>, last_evaluated_key: Option<Item>) -> Self {
        self.pages
            .lock()
            .unwrap()
            .push_back(Ok((items, last_evaluated_key)));
        self
    }

    pub fn with_failing_page(self, error: SdkError) -> Self {
        self.pages.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn storage_key(&self, item: &Item) -> String {
        self.key_names
            .iter()
            .map(|name| format!("{name}={:?}", item.get(name)))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn next_page(&self) -> Page {
        if let Some(page) = self.pages.lock().unwrap().pop_front() {
            return page;
        }
        let mut all: Vec<_> = self.items.lock().unwrap().clone().into_iter().collect();
        all.sort_by(|a, b| a.0.cmp(&b.0));
        Ok((all.into_iter().map(|(_, item)| item).collect(), None))
    }
}

#[async_trait]
impl DynamoDbApi for FakeDynamoDb {
    async fn put_item(&self, _table_name: &str, item: Item) -> Result<PutItemOutput, SdkError> {
        self.record(Call::PutItem);
        let key = self.storage_key(&item);
        self.items.lock().unwrap().insert(key, item);
        Ok(PutItemOutput::builder().build())
    }

    async fn get_item(&self, _table_name: &str, key: Item) -> Result<GetItemOutput, SdkError> {
        self.record(Call::GetItem);
        let item = self.items.lock().unwrap().get(&self.storage_key(&key)).cloned();
        Ok(GetItemOutput::builder().set_item(item).build())
    }

    async fn delete_item(
        &self,
        _table_name: &str,
        key: Item,
    ) -> Result<DeleteItemOutput, SdkError> {
        self.record(Call::DeleteItem);
        self.items.lock().unwrap().remove(&self.storage_key(&key));
        Ok(DeleteItemOutput::builder().build())
    }

    async fn query(
        &self,
        _table_name: &str,
        expression: &Expression,
        exclusive_start_key: Option<Item>,
    ) -> Result<QueryOutput, SdkError> {
        self.record(Call::Query {
            key_condition: expression.key_condition_expression().map(Into::into),
            start: exclusive_start_key,
        });
        let (items, last_evaluated_key) = self.next_page()?;
        Ok(QueryOutput::builder()
            .set_items(Some(items))
            .set_last_evaluated_key(last_evaluated_key)
            .build())
    }

    async fn scan(
        &self,
        _table_name: &str,
        _expression: &Expression,
        exclusive_start_key: Option<Item>,
    ) -> Result<ScanOutput, SdkError> {
        self.record(Call::Scan {
            start: exclusive_start_key,
        });
        let (items, last_evaluated_key) = self.next_page()?;
        Ok(ScanOutput::builder()
            .set_items(Some(items))
            .set_last_evaluated_key(last_evaluated_key)
            .build())
    }
}
