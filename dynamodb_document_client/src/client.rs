use crate::{
    error::from_aws_sdk_dynamodb_error,
    paginate::{collect_pages, decode, deserialize_stream, item_stream},
    DynamoDbApi, Error, Expression, Item, Key, Options,
};
use futures_util::Stream;
use serde::{de::DeserializeOwned, Serialize};

/// 1つのテーブルに固定したDynamoDBの高レベルなClient.
///
/// 作成後は変更できません。低レベルな操作は[`raw_client`](`DocumentClient::raw_client`)を
/// 使って取得したものを使ってください
#[derive(Debug, Clone)]
pub struct DocumentClient<A = aws_sdk_dynamodb::Client> {
    api: A,
    table: String,
}

impl DocumentClient {
    /// [`aws_sdk_dynamodb::Client`]から[`DocumentClient`]を作ります
    pub fn from_dynamodb_client(
        dynamo: aws_sdk_dynamodb::Client,
        table: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::new(dynamo, table)
    }

    /// コンフィグから作ります
    pub fn from_conf<C: Into<aws_sdk_dynamodb::Config>>(
        conf: C,
        table: impl Into<String>,
    ) -> Result<Self, Error> {
        Self::from_dynamodb_client(aws_sdk_dynamodb::Client::from_conf(conf.into()), table)
    }

    /// 環境から設定を読み込んで作ります
    ///
    /// 設定が解決できなければ[`Error::Configuration`]を返し、clientは作られません。
    pub async fn connect(table: impl Into<String>, options: Options) -> Result<Self, Error> {
        let table = table.into();
        if table.is_empty() {
            return Err(Error::InvalidArgument("table name is empty"));
        }
        Self::new(options.load().await?, table)
    }

    /// 内側のclientを取得する
    pub fn raw_client(&self) -> &aws_sdk_dynamodb::Client {
        &self.api
    }
}

impl<A: DynamoDbApi> DocumentClient<A> {
    /// 任意の[`DynamoDbApi`]から作ります
    pub fn new(api: A, table: impl Into<String>) -> Result<Self, Error> {
        let table = table.into();
        if table.is_empty() {
            return Err(Error::InvalidArgument("table name is empty"));
        }
        Ok(Self { api, table })
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// itemを取得します
    ///
    /// 生の値を取得します。itemが無ければ[`Error::NotFound`]です。
    #[tracing::instrument(skip_all, fields(table = %self.table))]
    pub async fn get_raw(&self, key: impl Into<Key>) -> Result<Item, Error> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::InvalidArgument("key has no attributes"));
        }
        self.api
            .get_item(&self.table, key.into_item())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "GetItem failed");
                from_aws_sdk_dynamodb_error(e)
            })?
            .item
            .ok_or(Error::NotFound)
    }

    /// itemを取得して、デシリアライズされた形にします
    pub async fn get_as<T: DeserializeOwned>(&self, key: impl Into<Key>) -> Result<T, Error> {
        decode(self.get_raw(key).await?)
    }

    /// itemを取得して`target`に書き込みます。
    ///
    /// 失敗したときは`target`は変更されません。
    pub async fn get<T: DeserializeOwned>(
        &self,
        key: impl Into<Key>,
        target: &mut T,
    ) -> Result<(), Error> {
        *target = self.get_as(key).await?;
        Ok(())
    }

    /// itemを登録します
    /// 生のitemを登録します。同じkeyのitemは丸ごと上書きされます。
    #[tracing::instrument(skip_all, fields(table = %self.table))]
    pub async fn put_raw(&self, item: Item) -> Result<(), Error> {
        self.api
            .put_item(&self.table, item)
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(error = %e, "PutItem failed");
                from_aws_sdk_dynamodb_error(e)
            })
    }

    /// itemを登録します
    /// シリアライズされます。
    pub async fn put<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), Error> {
        let item: Item =
            serde_dynamo::aws_sdk_dynamodb_1::to_item(value).map_err(Error::Encode)?;
        self.put_raw(item).await
    }

    /// itemを削除します。
    /// 存在しないkeyでもエラーにはなりません。
    #[tracing::instrument(skip_all, fields(table = %self.table))]
    pub async fn delete(&self, key: impl Into<Key>) -> Result<(), Error> {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::InvalidArgument("key has no attributes"));
        }
        self.api
            .delete_item(&self.table, key.into_item())
            .await
            .map(|_| ())
            .map_err(|e| {
                tracing::error!(error = %e, "DeleteItem failed");
                from_aws_sdk_dynamodb_error(e)
            })
    }

    /// queryを掛けます
    ///
    /// 全ページを取得してからまとめて返します。途中のページで失敗したら結果は返しません。
    /// 具体的な型で受けたいなら[`query_as`](`Self::query_as`)があります。
    #[tracing::instrument(skip_all, fields(table = %self.table))]
    pub async fn query(&self, expression: &Expression) -> Result<Vec<Item>, Error> {
        collect_pages(move |start| self.api.query(&self.table, expression, start)).await
    }

    pub async fn query_as<T: DeserializeOwned>(
        &self,
        expression: &Expression,
    ) -> Result<Vec<T>, Error> {
        self.query(expression).await?.into_iter().map(decode).collect()
    }

    /// queryを掛けます
    ///
    /// ページは必要になったときに1つずつ取得されます。
    /// ```no_run
    /// # use dynamodb_document_client::{DocumentClient, Error};
    /// # async fn run(client: &DocumentClient) -> Result<(), Error> {
    /// use dynamodb_document_client::Expression;
    /// use futures_util::TryStreamExt;
    ///
    /// let expr = Expression::new().key_condition("id = :id").value(":id", "w1");
    /// let stream = client.query_stream(&expr);
    /// futures_util::pin_mut!(stream);
    /// while let Some(item) = stream.try_next().await? {
    ///     println!("{item:?}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn query_stream<'a>(
        &'a self,
        expression: &'a Expression,
    ) -> impl Stream<Item = Result<Item, Error>> + 'a {
        item_stream(move |start| self.api.query(&self.table, expression, start))
    }

    pub fn query_stream_as<'a, T: DeserializeOwned + 'a>(
        &'a self,
        expression: &'a Expression,
    ) -> impl Stream<Item = Result<T, Error>> + 'a {
        deserialize_stream(self.query_stream(expression))
    }

    /// scanを掛けます
    ///
    /// key conditionは使われません。
    /// 具体的な型で受けたいなら[`scan_as`](`Self::scan_as`)があります。
    #[tracing::instrument(skip_all, fields(table = %self.table))]
    pub async fn scan(&self, expression: &Expression) -> Result<Vec<Item>, Error> {
        collect_pages(move |start| self.api.scan(&self.table, expression, start)).await
    }

    pub async fn scan_as<T: DeserializeOwned>(
        &self,
        expression: &Expression,
    ) -> Result<Vec<T>, Error> {
        self.scan(expression).await?.into_iter().map(decode).collect()
    }

    /// scanを掛けます
    ///
    /// ページは必要になったときに1つずつ取得されます。
    pub fn scan_stream<'a>(
        &'a self,
        expression: &'a Expression,
    ) -> impl Stream<Item = Result<Item, Error>> + 'a {
        item_stream(move |start| self.api.scan(&self.table, expression, start))
    }

    pub fn scan_stream_as<'a, T: DeserializeOwned + 'a>(
        &'a self,
        expression: &'a Expression,
    ) -> impl Stream<Item = Result<T, Error>> + 'a {
        deserialize_stream(self.scan_stream(expression))
    }
}
