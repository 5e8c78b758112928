use crate::{sdk::config::Builder as DynamoDbConfigBuilder, sdk_config::ConfigLoader, Error};
use aws_config::BehaviorVersion;
use std::fmt;

type ConfigHook = Box<dyn FnOnce(ConfigLoader) -> ConfigLoader + Send>;
type DynamoDbHook = Box<dyn FnOnce(DynamoDbConfigBuilder) -> DynamoDbConfigBuilder + Send>;

/// 設定の読み込みとDynamoDBのclientの作成をカスタマイズします
/// ```no_run
/// # use dynamodb_document_client::{Options, sdk_config::Region};
/// let options = Options::default()
///     .config(|loader| loader.region(Region::new("ap-northeast-1")))
///     .dynamodb(|builder| builder.endpoint_url("http://localhost:8000"));
/// ```
#[derive(Default)]
pub struct Options {
    config: Option<ConfigHook>,
    dynamodb: Option<DynamoDbHook>,
}

impl Options {
    /// 環境からの設定の読み込み(region, credentials, endpointなど)を変更します
    pub fn config(
        mut self,
        hook: impl FnOnce(ConfigLoader) -> ConfigLoader + Send + 'static,
    ) -> Self {
        self.config = Some(Box::new(hook));
        self
    }

    /// DynamoDBのclientの設定を変更します
    pub fn dynamodb(
        mut self,
        hook: impl FnOnce(DynamoDbConfigBuilder) -> DynamoDbConfigBuilder + Send + 'static,
    ) -> Self {
        self.dynamodb = Some(Box::new(hook));
        self
    }

    /// 設定を解決して[`aws_sdk_dynamodb::Client`]を作ります。
    ///
    /// regionが決まらない場合は[`Error::Configuration`]になります。
    pub(crate) async fn load(self) -> Result<aws_sdk_dynamodb::Client, Error> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(hook) = self.config {
            loader = hook(loader);
        }
        let sdk_config = loader.load().await;
        if sdk_config.region().is_none() {
            tracing::error!("no region could be resolved from the environment");
            return Err(Error::Configuration("no region resolved".into()));
        }
        let mut builder = DynamoDbConfigBuilder::from(&sdk_config);
        if let Some(hook) = self.dynamodb {
            builder = hook(builder);
        }
        Ok(aws_sdk_dynamodb::Client::from_conf(builder.build()))
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("config", &self.config.is_some())
            .field("dynamodb", &self.dynamodb.is_some())
            .finish()
    }
}
