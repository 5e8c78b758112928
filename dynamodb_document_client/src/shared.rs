use crate::{DocumentClient, DynamoDbApi, Error, Options};
use std::future::Future;
use tokio::sync::OnceCell;

/// 一度だけ初期化される[`DocumentClient`]の置き場.
///
/// 同時に初期化しようとしても作られるclientは1つだけです。
/// 初期化に失敗した場合は空のままで、次の呼び出しでやり直します。
#[derive(Debug)]
pub struct ClientCell<A = aws_sdk_dynamodb::Client> {
    cell: OnceCell<DocumentClient<A>>,
}

impl<A> ClientCell<A> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    /// 初期化済みならそのclient
    pub fn get(&self) -> Option<&DocumentClient<A>> {
        self.cell.get()
    }
}

impl<A> Default for ClientCell<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: DynamoDbApi> ClientCell<A> {
    /// clientを取得します。まだ無ければ`init`で作ります。
    ///
    /// 既に別のテーブルで作られていたら[`Error::TableMismatch`]になります。
    pub async fn get_or_try_init<F, Fut>(
        &self,
        table: &str,
        init: F,
    ) -> Result<&DocumentClient<A>, Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<A, Error>>,
    {
        if table.is_empty() {
            return Err(Error::InvalidArgument("table name is empty"));
        }
        let client = self
            .cell
            .get_or_try_init(|| async move {
                tracing::debug!(table, "initializing shared client");
                DocumentClient::new(init().await?, table)
            })
            .await?;
        if client.table_name() != table {
            tracing::warn!(
                bound = client.table_name(),
                requested = table,
                "shared client is already bound to another table"
            );
            return Err(Error::TableMismatch {
                bound: client.table_name().to_owned(),
                requested: table.to_owned(),
            });
        }
        Ok(client)
    }
}

static SHARED: ClientCell = ClientCell::new();

/// プロセスで共有する[`DocumentClient`]を取得します。
///
/// 最初の呼び出しだけが設定を読み込みます。2回目以降の`options`は使われません。
/// ```no_run
/// # async fn run() -> Result<(), dynamodb_document_client::Error> {
/// use dynamodb_document_client::{shared_client, Key, Options};
///
/// let client = shared_client("Widgets", Options::default()).await?;
/// client.delete(Key::new("id", "w1")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn shared_client(
    table: &str,
    options: Options,
) -> Result<&'static DocumentClient, Error> {
    SHARED.get_or_try_init(table, || options.load()).await
}
