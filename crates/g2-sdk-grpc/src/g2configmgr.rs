//! Client for the `g2configmgr.G2ConfigMgr` service: the registry of stored
//! configurations and the default configuration pointer.

use g2_sdk_core::{
    CallContext, G2Error, Instrumentation, LogLevel, MessageLogger, Observable,
    ObserverOperations,
};
use tonic::transport::Channel;

use crate::config::GrpcConfig;
use crate::proto::g2configmgr as pb;
use crate::proto::g2configmgr::g2_config_mgr_client::G2ConfigMgrClient as Stub;

pub const COMPONENT_ID: i32 = 6012;

mod ops {
    use g2_sdk_core::{ObserverOperations, Operation};

    pub const ADD_CONFIG: Operation = Operation::new("AddConfig", 1, 8001);
    pub const DESTROY: Operation = Operation::new("Destroy", 5, 8002);
    pub const GET_CONFIG: Operation = Operation::new("GetConfig", 7, 8003);
    pub const GET_CONFIG_LIST: Operation = Operation::new("GetConfigList", 9, 8004);
    pub const GET_DEFAULT_CONFIG_ID: Operation = Operation::new("GetDefaultConfigID", 11, 8005);
    pub const INIT: Operation = Operation::new("Init", 17, 8006);
    pub const REPLACE_DEFAULT_CONFIG_ID: Operation =
        Operation::new("ReplaceDefaultConfigID", 19, 8007);
    pub const SET_DEFAULT_CONFIG_ID: Operation = Operation::new("SetDefaultConfigID", 21, 8008);

    pub static OBSERVER: ObserverOperations = ObserverOperations {
        register_observer: Operation::new("RegisterObserver", 3, 8009),
        set_log_level: Operation::new("SetLogLevel", 23, 8010),
        set_observer_origin: Operation::new("SetObserverOrigin", 25, 8011),
        unregister_observer: Operation::new("UnregisterObserver", 27, 8012),
    };
}

#[derive(Debug)]
pub struct G2ConfigMgrClient {
    stub: Stub<Channel>,
    instrumentation: Instrumentation,
}

impl G2ConfigMgrClient {
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

    /// Store a configuration document; returns its new configuration id.
    pub async fn add_config(
        &self,
        ctx: &CallContext,
        config_str: &str,
        config_comments: &str,
    ) -> Result<i64, G2Error> {
        let args = || {
            vec![
                ("configStr", config_str.to_string()),
                ("configComments", config_comments.to_string()),
            ]
        };
        let request = ctx.request(pb::AddConfigRequest {
            config_str: config_str.to_string(),
            config_comments: config_comments.to_string(),
        });
        let details = vec![("configComments", config_comments.to_string())];
        let response = self
            .instrumentation
            .invoke(ctx, &ops::ADD_CONFIG, args, details, self.stub().add_config(request))
            .await?;
        Ok(response.result)
    }

    pub async fn destroy(&self, ctx: &CallContext) -> Result<(), G2Error> {
        let request = ctx.request(pb::DestroyRequest {});
        self.instrumentation
            .invoke(ctx, &ops::DESTROY, Vec::new, vec![], self.stub().destroy(request))
            .await?;
        Ok(())
    }

    /// The stored configuration document with id `config_id`.
    pub async fn get_config(&self, ctx: &CallContext, config_id: i64) -> Result<String, G2Error> {
        let args = || vec![("configID", config_id.to_string())];
        let request = ctx.request(pb::GetConfigRequest { config_id });
        let details = vec![("configID", config_id.to_string())];
        let response = self
            .instrumentation
            .invoke(ctx, &ops::GET_CONFIG, args, details, self.stub().get_config(request))
            .await?;
        Ok(response.result)
    }

    /// JSON document listing every stored configuration.
    pub async fn get_config_list(&self, ctx: &CallContext) -> Result<String, G2Error> {
        let request = ctx.request(pb::GetConfigListRequest {});
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::GET_CONFIG_LIST,
                Vec::new,
                vec![],
                self.stub().get_config_list(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn get_default_config_id(&self, ctx: &CallContext) -> Result<i64, G2Error> {
        let request = ctx.request(pb::GetDefaultConfigIdRequest {});
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::GET_DEFAULT_CONFIG_ID,
                Vec::new,
                vec![],
                self.stub().get_default_config_id(request),
            )
            .await?;
        Ok(response.config_id)
    }

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

    /// Move the default pointer from `old_config_id` to `new_config_id`.
    /// Fails if the current default is no longer `old_config_id`.
    pub async fn replace_default_config_id(
        &self,
        ctx: &CallContext,
        old_config_id: i64,
        new_config_id: i64,
    ) -> Result<(), G2Error> {
        let args = || {
            vec![
                ("oldConfigID", old_config_id.to_string()),
                ("newConfigID", new_config_id.to_string()),
            ]
        };
        let request = ctx.request(pb::ReplaceDefaultConfigIdRequest {
            old_config_id,
            new_config_id,
        });
        let details = vec![
            ("newConfigID", new_config_id.to_string()),
            ("oldConfigID", old_config_id.to_string()),
        ];
        self.instrumentation
            .invoke(
                ctx,
                &ops::REPLACE_DEFAULT_CONFIG_ID,
                args,
                details,
                self.stub().replace_default_config_id(request),
            )
            .await?;
        Ok(())
    }

    pub async fn set_default_config_id(
        &self,
        ctx: &CallContext,
        config_id: i64,
    ) -> Result<(), G2Error> {
        let args = || vec![("configID", config_id.to_string())];
        let request = ctx.request(pb::SetDefaultConfigIdRequest { config_id });
        let details = vec![("configID", config_id.to_string())];
        self.instrumentation
            .invoke(
                ctx,
                &ops::SET_DEFAULT_CONFIG_ID,
                args,
                details,
                self.stub().set_default_config_id(request),
            )
            .await?;
        Ok(())
    }
}

impl Observable for G2ConfigMgrClient {
    fn instrumentation(&self) -> &Instrumentation {
        &self.instrumentation
    }

    fn observer_operations(&self) -> &'static ObserverOperations {
        &ops::OBSERVER
    }
}
