use crate::{
    error::from_aws_sdk_dynamodb_error,
    sdk::operation::{query::QueryOutput, scan::ScanOutput},
    Error, Item,
};
use futures_util::{stream, Stream, TryStream, TryStreamExt};
use serde::de::DeserializeOwned;
use std::future::{ready, Future};

/// query/scanの1ページ分
#[derive(Debug)]
pub(crate) struct Page {
    pub items: Vec<Item>,
    pub last_evaluated_key: Option<Item>,
}

impl Page {
    /// itemと次のページの開始位置に分けます。空のkeyは続きが無いことを表す
    fn into_parts(self) -> (Vec<Item>, Option<Item>) {
        let next = self.last_evaluated_key.filter(|key| !key.is_empty());
        (self.items, next)
    }
}

impl From<QueryOutput> for Page {
    fn from(value: QueryOutput) -> Self {
        Self {
            items: value.items.unwrap_or_default(),
            last_evaluated_key: value.last_evaluated_key,
        }
    }
}

impl From<ScanOutput> for Page {
    fn from(value: ScanOutput) -> Self {
        Self {
            items: value.items.unwrap_or_default(),
            last_evaluated_key: value.last_evaluated_key,
        }
    }
}

/// 続きが無くなるまでページを取得し、全itemを取得順にまとめます。
///
/// どこかのページで失敗したら、それまでに集めたitemは捨ててエラーだけ返します。
pub(crate) async fn collect_pages<F, Fut, O>(mut fetch: F) -> Result<Vec<Item>, Error>
where
    F: FnMut(Option<Item>) -> Fut,
    Fut: Future<Output = Result<O, aws_sdk_dynamodb::Error>>,
    O: Into<Page>,
{
    let mut items = Vec::new();
    let mut start_key = None;
    let mut pages = 0usize;
    loop {
        let page: Page = fetch(start_key.take())
            .await
            .map_err(|e| {
                tracing::error!(page = pages + 1, error = %e, "page request failed");
                from_aws_sdk_dynamodb_error(e)
            })?
            .into();
        pages += 1;
        let (page_items, next) = page.into_parts();
        tracing::debug!(page = pages, items = page_items.len(), more = next.is_some());
        items.extend(page_items);
        match next {
            Some(key) => start_key = Some(key),
            None => return Ok(items),
        }
    }
}

enum Cursor {
    Start,
    Next(Item),
    Done,
}

/// ページを1つずつ取得しながらitemを流す[`Stream`].
///
/// エラーを流したあとは終了します。
pub(crate) fn item_stream<'a, F, Fut, O>(
    fetch: F,
) -> impl Stream<Item = Result<Item, Error>> + 'a
where
    F: FnMut(Option<Item>) -> Fut + 'a,
    Fut: Future<Output = Result<O, aws_sdk_dynamodb::Error>> + 'a,
    O: Into<Page> + 'a,
{
    stream::try_unfold((fetch, Cursor::Start), |(mut fetch, cursor)| async move {
        let start_key = match cursor {
            Cursor::Start => None,
            Cursor::Next(key) => Some(key),
            Cursor::Done => return Ok::<_, Error>(None),
        };
        let page: Page = fetch(start_key)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "page request failed");
                from_aws_sdk_dynamodb_error(e)
            })?
            .into();
        let (items, next) = page.into_parts();
        let cursor = next.map_or(Cursor::Done, Cursor::Next);
        Ok::<_, Error>(Some((
            stream::iter(items.into_iter().map(Ok::<_, Error>)),
            (fetch, cursor),
        )))
    })
    .try_flatten()
}

pub(crate) fn decode<T: DeserializeOwned>(item: Item) -> Result<T, Error> {
    serde_dynamo::aws_sdk_dynamodb_1::from_item(item).map_err(|e| {
        tracing::error!(error = %e, "failed to decode item");
        Error::Decode(e)
    })
}

pub(crate) fn deserialize_stream<T>(
    raw_stream: impl TryStream<Ok = Item, Error = Error>,
) -> impl Stream<Item = Result<T, Error>>
where
    T: DeserializeOwned,
{
    raw_stream.and_then(|item| ready(decode(item)))
}
