//! Client for the `g2config.G2Config` service: in-memory configuration
//! documents and their data sources.

use std::fmt;

use g2_sdk_core::{
    CallContext, G2Error, Instrumentation, LogLevel, MessageLogger, Observable,
    ObserverOperations,
};
use tonic::transport::Channel;

use crate::config::GrpcConfig;
use crate::proto::g2config as pb;
use crate::proto::g2config::g2_config_client::G2ConfigClient as Stub;

/// Component id used in message ids and notifications.
pub const COMPONENT_ID: i32 = 6011;

mod ops {
    use g2_sdk_core::{ObserverOperations, Operation};

    pub const ADD_DATA_SOURCE: Operation = Operation::new("AddDataSource", 1, 8001);
    pub const CLOSE: Operation = Operation::new("Close", 5, 8002);
    pub const CREATE: Operation = Operation::new("Create", 7, 8003);
    pub const DELETE_DATA_SOURCE: Operation = Operation::new("DeleteDataSource", 9, 8004);
    pub const DESTROY: Operation = Operation::new("Destroy", 11, 8005);
    pub const INIT: Operation = Operation::new("Init", 17, 8006);
    pub const LIST_DATA_SOURCES: Operation = Operation::new("ListDataSources", 19, 8007);
    pub const LOAD: Operation = Operation::new("Load", 21, 8008);
    pub const SAVE: Operation = Operation::new("Save", 23, 8009);

    pub static OBSERVER: ObserverOperations = ObserverOperations {
        register_observer: Operation::new("RegisterObserver", 3, 8010),
        set_log_level: Operation::new("SetLogLevel", 25, 8011),
        set_observer_origin: Operation::new("SetObserverOrigin", 27, 8012),
        unregister_observer: Operation::new("UnregisterObserver", 29, 8013),
    };
}

/// Handle to a configuration document held in the server's memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigHandle(pub i64);

impl fmt::Display for ConfigHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
pub struct G2ConfigClient {
    stub: Stub<Channel>,
    instrumentation: Instrumentation,
}

impl G2ConfigClient {
    pub fn new(channel: Channel) -> Self {
        Self::with_logger(channel, MessageLogger::new(COMPONENT_ID, LogLevel::Info))
    }

    pub fn with_logger(channel: Channel, logger: MessageLogger) -> Self {
        Self {
            stub: Stub::new(channel),
            instrumentation: Instrumentation::new(logger),
        }
    }

    /// Connect using `config`, applying its log level and observer origin.
    pub async fn connect(config: &GrpcConfig) -> Result<Self, G2Error> {
        let channel = config.connect().await?;
        let client =
            Self::with_logger(channel, MessageLogger::new(COMPONENT_ID, config.log_level));
        if let Some(origin) = &config.observer_origin {
            client
                .instrumentation
                .set_origin(&ops::OBSERVER.set_observer_origin, origin)
                .await;
        }
        Ok(client)
    }

    fn stub(&self) -> Stub<Channel> {
        self.stub.clone()
    }

    /// Add a data source to the configuration; returns the engine's JSON
    /// acknowledgement (e.g. `{"DSRC_ID":1001}`).
    pub async fn add_data_source(
        &self,
        ctx: &CallContext,
        config_handle: ConfigHandle,
        input_json: &str,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("configHandle", config_handle.to_string()),
                ("inputJson", input_json.to_string()),
            ]
        };
        let request = ctx.request(pb::AddDataSourceRequest {
            config_handle: config_handle.0,
            input_json: input_json.to_string(),
        });
        let details = vec![("inputJson", input_json.to_string())];
        let response = self
            .instrumentation
            .invoke(ctx, &ops::ADD_DATA_SOURCE, args, details, self.stub().add_data_source(request))
            .await?;
        Ok(response.result)
    }

    /// Release an in-memory configuration.
    pub async fn close(
        &self,
        ctx: &CallContext,
        config_handle: ConfigHandle,
    ) -> Result<(), G2Error> {
        let args = || vec![("configHandle", config_handle.to_string())];
        let request = ctx.request(pb::CloseRequest {
            config_handle: config_handle.0,
        });
        self.instrumentation
            .invoke(ctx, &ops::CLOSE, args, vec![], self.stub().close(request))
            .await?;
        Ok(())
    }

    /// Create a configuration from the engine's template.
    pub async fn create(&self, ctx: &CallContext) -> Result<ConfigHandle, G2Error> {
        let request = ctx.request(pb::CreateRequest {});
        let response = self
            .instrumentation
            .invoke(ctx, &ops::CREATE, Vec::new, vec![], self.stub().create(request))
            .await?;
        Ok(ConfigHandle(response.result))
    }

    pub async fn delete_data_source(
        &self,
        ctx: &CallContext,
        config_handle: ConfigHandle,
        input_json: &str,
    ) -> Result<(), G2Error> {
        let args = || {
            vec![
                ("configHandle", config_handle.to_string()),
                ("inputJson", input_json.to_string()),
            ]
        };
        let request = ctx.request(pb::DeleteDataSourceRequest {
            config_handle: config_handle.0,
            input_json: input_json.to_string(),
        });
        let details = vec![("inputJson", input_json.to_string())];
        self.instrumentation
            .invoke(
                ctx,
                &ops::DELETE_DATA_SOURCE,
                args,
                details,
                self.stub().delete_data_source(request),
            )
            .await?;
        Ok(())
    }

    pub async fn destroy(&self, ctx: &CallContext) -> Result<(), G2Error> {
        let request = ctx.request(pb::DestroyRequest {});
        self.instrumentation
            .invoke(ctx, &ops::DESTROY, Vec::new, vec![], self.stub().destroy(request))
            .await?;
        Ok(())
    }

    /// Initialise the server-side config subsystem. `ini_params` is passed
    /// through untouched.
    pub async fn init(
        &self,
        ctx: &CallContext,
        module_name: &str,
        ini_params: &str,
        verbose_logging: i64,
    ) -> Result<(), G2Error> {
        let args = || {
            vec![
                ("moduleName", module_name.to_string()),
                ("iniParams", ini_params.to_string()),
                ("verboseLogging", verbose_logging.to_string()),
            ]
        };
        let request = ctx.request(pb::InitRequest {
            module_name: module_name.to_string(),
            ini_params: ini_params.to_string(),
            verbose_logging,
        });
        let details = vec![
            ("iniParams", ini_params.to_string()),
            ("moduleName", module_name.to_string()),
            ("verboseLogging", verbose_logging.to_string()),
        ];
        self.instrumentation
            .invoke(ctx, &ops::INIT, args, details, self.stub().init(request))
            .await?;
        Ok(())
    }

    /// JSON document listing the configuration's data sources.
    pub async fn list_data_sources(
        &self,
        ctx: &CallContext,
        config_handle: ConfigHandle,
    ) -> Result<String, G2Error> {
        let args = || vec![("configHandle", config_handle.to_string())];
        let request = ctx.request(pb::ListDataSourcesRequest {
            config_handle: config_handle.0,
        });
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::LIST_DATA_SOURCES,
                args,
                vec![],
                self.stub().list_data_sources(request),
            )
            .await?;
        Ok(response.result)
    }

    /// Load a configuration document into server memory.
    pub async fn load(
        &self,
        ctx: &CallContext,
        json_config: &str,
    ) -> Result<ConfigHandle, G2Error> {
        let args = || vec![("jsonConfig", json_config.to_string())];
        let request = ctx.request(pb::LoadRequest {
            json_config: json_config.to_string(),
        });
        let response = self
            .instrumentation
            .invoke(ctx, &ops::LOAD, args, vec![], self.stub().load(request))
            .await?;
        Ok(ConfigHandle(response.result))
    }

    /// Serialise the configuration behind `config_handle` to JSON.
    pub async fn save(
        &self,
        ctx: &CallContext,
        config_handle: ConfigHandle,
    ) -> Result<String, G2Error> {
        let args = || vec![("configHandle", config_handle.to_string())];
        let request = ctx.request(pb::SaveRequest {
            config_handle: config_handle.0,
        });
        let response = self
            .instrumentation
            .invoke(ctx, &ops::SAVE, args, vec![], self.stub().save(request))
            .await?;
        Ok(response.result)
    }
}

impl Observable for G2ConfigClient {
    fn instrumentation(&self) -> &Instrumentation {
        &self.instrumentation
    }

    fn observer_operations(&self) -> &'static ObserverOperations {
        &ops::OBSERVER
    }
}
