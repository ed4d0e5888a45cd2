//! Client for the `g2engine.G2Engine` service: record ingestion, entity
//! resolution queries, redo processing and exports.

use std::fmt;

use g2_sdk_core::{
    convert_grpc_error, CallContext, Details, G2Error, Instrumentation, LogLevel, MessageLogger,
    Observable, ObserverOperations,
};
use tokio_stream::{Stream, StreamExt};
use tonic::transport::Channel;

use crate::config::GrpcConfig;
use crate::proto::g2engine as pb;
use crate::proto::g2engine::g2_engine_client::G2EngineClient as Stub;

pub const COMPONENT_ID: i32 = 6014;

mod ops {
    use g2_sdk_core::{ObserverOperations, Operation};

    pub const ADD_RECORD: Operation = Operation::new("AddRecord", 1, 8001);
    pub const ADD_RECORD_WITH_INFO: Operation = Operation::new("AddRecordWithInfo", 3, 8002);
    pub const CLOSE_EXPORT: Operation = Operation::new("CloseExport", 5, 8003);
    pub const COUNT_REDO_RECORDS: Operation = Operation::new("CountRedoRecords", 7, 8004);
    pub const DELETE_RECORD: Operation = Operation::new("DeleteRecord", 9, 8005);
    pub const DELETE_RECORD_WITH_INFO: Operation = Operation::new("DeleteRecordWithInfo", 11, 8006);
    pub const DESTROY: Operation = Operation::new("Destroy", 13, 8007);
    pub const EXPORT_CSV_ENTITY_REPORT: Operation =
        Operation::new("ExportCSVEntityReport", 15, 8008);
    pub const EXPORT_CONFIG: Operation = Operation::new("ExportConfig", 17, 8009);
    pub const EXPORT_CONFIG_AND_CONFIG_ID: Operation =
        Operation::new("ExportConfigAndConfigID", 19, 8010);
    pub const EXPORT_JSON_ENTITY_REPORT: Operation =
        Operation::new("ExportJSONEntityReport", 21, 8011);
    pub const FETCH_NEXT: Operation = Operation::new("FetchNext", 23, 8012);
    pub const FIND_INTERESTING_ENTITIES_BY_ENTITY_ID: Operation =
        Operation::new("FindInterestingEntitiesByEntityID", 25, 8013);
    pub const FIND_INTERESTING_ENTITIES_BY_RECORD_ID: Operation =
        Operation::new("FindInterestingEntitiesByRecordID", 27, 8014);
    pub const FIND_NETWORK_BY_ENTITY_ID: Operation =
        Operation::new("FindNetworkByEntityID", 29, 8015);
    pub const FIND_NETWORK_BY_ENTITY_ID_V2: Operation =
        Operation::new("FindNetworkByEntityID_V2", 31, 8016);
    pub const FIND_NETWORK_BY_RECORD_ID: Operation =
        Operation::new("FindNetworkByRecordID", 33, 8017);
    pub const FIND_NETWORK_BY_RECORD_ID_V2: Operation =
        Operation::new("FindNetworkByRecordID_V2", 35, 8018);
    pub const FIND_PATH_BY_ENTITY_ID: Operation = Operation::new("FindPathByEntityID", 37, 8019);
    pub const FIND_PATH_BY_ENTITY_ID_V2: Operation =
        Operation::new("FindPathByEntityID_V2", 39, 8020);
    pub const FIND_PATH_BY_RECORD_ID: Operation = Operation::new("FindPathByRecordID", 41, 8021);
    pub const FIND_PATH_BY_RECORD_ID_V2: Operation =
        Operation::new("FindPathByRecordID_V2", 43, 8022);
    pub const FIND_PATH_EXCLUDING_BY_ENTITY_ID: Operation =
        Operation::new("FindPathExcludingByEntityID", 45, 8023);
    pub const FIND_PATH_EXCLUDING_BY_ENTITY_ID_V2: Operation =
        Operation::new("FindPathExcludingByEntityID_V2", 47, 8024);
    pub const FIND_PATH_EXCLUDING_BY_RECORD_ID: Operation =
        Operation::new("FindPathExcludingByRecordID", 49, 8025);
    pub const FIND_PATH_EXCLUDING_BY_RECORD_ID_V2: Operation =
        Operation::new("FindPathExcludingByRecordID_V2", 51, 8026);
    pub const FIND_PATH_INCLUDING_SOURCE_BY_ENTITY_ID: Operation =
        Operation::new("FindPathIncludingSourceByEntityID", 53, 8027);
    pub const FIND_PATH_INCLUDING_SOURCE_BY_ENTITY_ID_V2: Operation =
        Operation::new("FindPathIncludingSourceByEntityID_V2", 55, 8028);
    pub const FIND_PATH_INCLUDING_SOURCE_BY_RECORD_ID: Operation =
        Operation::new("FindPathIncludingSourceByRecordID", 57, 8029);
    pub const FIND_PATH_INCLUDING_SOURCE_BY_RECORD_ID_V2: Operation =
        Operation::new("FindPathIncludingSourceByRecordID_V2", 59, 8030);
    pub const GET_ACTIVE_CONFIG_ID: Operation = Operation::new("GetActiveConfigID", 61, 8031);
    pub const GET_ENTITY_BY_ENTITY_ID: Operation = Operation::new("GetEntityByEntityID", 63, 8032);
    pub const GET_ENTITY_BY_ENTITY_ID_V2: Operation =
        Operation::new("GetEntityByEntityID_V2", 65, 8033);
    pub const GET_ENTITY_BY_RECORD_ID: Operation = Operation::new("GetEntityByRecordID", 67, 8034);
    pub const GET_ENTITY_BY_RECORD_ID_V2: Operation =
        Operation::new("GetEntityByRecordID_V2", 69, 8035);
    pub const GET_RECORD: Operation = Operation::new("GetRecord", 71, 8036);
    pub const GET_RECORD_V2: Operation = Operation::new("GetRecord_V2", 73, 8037);
    pub const GET_REDO_RECORD: Operation = Operation::new("GetRedoRecord", 75, 8038);
    pub const GET_REPOSITORY_LAST_MODIFIED_TIME: Operation =
        Operation::new("GetRepositoryLastModifiedTime", 77, 8039);
    pub const GET_VIRTUAL_ENTITY_BY_RECORD_ID: Operation =
        Operation::new("GetVirtualEntityByRecordID", 79, 8040);
    pub const GET_VIRTUAL_ENTITY_BY_RECORD_ID_V2: Operation =
        Operation::new("GetVirtualEntityByRecordID_V2", 81, 8041);
    pub const HOW_ENTITY_BY_ENTITY_ID: Operation = Operation::new("HowEntityByEntityID", 83, 8042);
    pub const HOW_ENTITY_BY_ENTITY_ID_V2: Operation =
        Operation::new("HowEntityByEntityID_V2", 85, 8043);
    pub const INIT: Operation = Operation::new("Init", 87, 8044);
    pub const INIT_WITH_CONFIG_ID: Operation = Operation::new("InitWithConfigID", 89, 8045);
    pub const PRIME_ENGINE: Operation = Operation::new("PrimeEngine", 91, 8046);
    pub const PROCESS: Operation = Operation::new("Process", 93, 8047);
    pub const PROCESS_REDO_RECORD: Operation = Operation::new("ProcessRedoRecord", 95, 8048);
    pub const PROCESS_REDO_RECORD_WITH_INFO: Operation =
        Operation::new("ProcessRedoRecordWithInfo", 97, 8049);
    pub const PROCESS_WITH_INFO: Operation = Operation::new("ProcessWithInfo", 99, 8050);
    pub const PROCESS_WITH_RESPONSE: Operation = Operation::new("ProcessWithResponse", 101, 8051);
    pub const PROCESS_WITH_RESPONSE_RESIZE: Operation =
        Operation::new("ProcessWithResponseResize", 103, 8052);
    pub const PURGE_REPOSITORY: Operation = Operation::new("PurgeRepository", 105, 8053);
    pub const REEVALUATE_ENTITY: Operation = Operation::new("ReevaluateEntity", 107, 8054);
    pub const REEVALUATE_ENTITY_WITH_INFO: Operation =
        Operation::new("ReevaluateEntityWithInfo", 109, 8055);
    pub const REEVALUATE_RECORD: Operation = Operation::new("ReevaluateRecord", 111, 8056);
    pub const REEVALUATE_RECORD_WITH_INFO: Operation =
        Operation::new("ReevaluateRecordWithInfo", 113, 8057);
    pub const REINIT: Operation = Operation::new("Reinit", 117, 8059);
    pub const REPLACE_RECORD: Operation = Operation::new("ReplaceRecord", 119, 8060);
    pub const REPLACE_RECORD_WITH_INFO: Operation =
        Operation::new("ReplaceRecordWithInfo", 121, 8061);
    pub const SEARCH_BY_ATTRIBUTES: Operation = Operation::new("SearchByAttributes", 123, 8062);
    pub const SEARCH_BY_ATTRIBUTES_V2: Operation =
        Operation::new("SearchByAttributes_V2", 125, 8063);
    pub const STATS: Operation = Operation::new("Stats", 131, 8066);
    pub const STREAM_EXPORT_CSV_ENTITY_REPORT: Operation =
        Operation::new("StreamExportCsvEntityReport", 133, 8067);
    pub const STREAM_EXPORT_JSON_ENTITY_REPORT: Operation =
        Operation::new("StreamExportJsonEntityReport", 135, 8068);
    pub const WHY_ENTITIES: Operation = Operation::new("WhyEntities", 139, 8070);
    pub const WHY_ENTITIES_V2: Operation = Operation::new("WhyEntities_V2", 141, 8071);
    pub const WHY_ENTITY_BY_ENTITY_ID: Operation = Operation::new("WhyEntityByEntityID", 143, 8072);
    pub const WHY_ENTITY_BY_ENTITY_ID_V2: Operation =
        Operation::new("WhyEntityByEntityID_V2", 145, 8073);
    pub const WHY_ENTITY_BY_RECORD_ID: Operation = Operation::new("WhyEntityByRecordID", 147, 8074);
    pub const WHY_ENTITY_BY_RECORD_ID_V2: Operation =
        Operation::new("WhyEntityByRecordID_V2", 149, 8075);
    pub const WHY_RECORDS: Operation = Operation::new("WhyRecords", 151, 8076);
    pub const WHY_RECORDS_V2: Operation = Operation::new("WhyRecords_V2", 153, 8077);

    pub static OBSERVER: ObserverOperations = ObserverOperations {
        register_observer: Operation::new("RegisterObserver", 115, 8058),
        set_log_level: Operation::new("SetLogLevel", 127, 8064),
        set_observer_origin: Operation::new("SetObserverOrigin", 129, 8065),
        unregister_observer: Operation::new("UnregisterObserver", 137, 8069),
    };
}

/// Cursor over an export started by `export_csv_entity_report` or
/// `export_json_entity_report`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExportHandle(pub i64);

impl fmt::Display for ExportHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn record_details(data_source_code: &str, record_id: &str) -> Details {
    vec![
        ("dataSourceCode", data_source_code.to_string()),
        ("recordID", record_id.to_string()),
    ]
}

fn record_pair_details(
    data_source_code1: &str,
    record_id1: &str,
    data_source_code2: &str,
    record_id2: &str,
) -> Details {
    vec![
        ("dataSourceCode1", data_source_code1.to_string()),
        ("dataSourceCode2", data_source_code2.to_string()),
        ("recordID1", record_id1.to_string()),
        ("recordID2", record_id2.to_string()),
    ]
}

fn entity_pair_details(entity_id1: i64, entity_id2: i64) -> Details {
    vec![
        ("entityID1", entity_id1.to_string()),
        ("entityID2", entity_id2.to_string()),
    ]
}

#[derive(Debug)]
pub struct G2EngineClient {
    stub: Stub<Channel>,
    instrumentation: Instrumentation,
}

impl G2EngineClient {
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

    // ------------------------------------------------------------------
    // Record ingestion
    // ------------------------------------------------------------------

    pub async fn add_record(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
        json_data: &str,
        load_id: &str,
    ) -> Result<(), G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("jsonData", json_data.to_string()),
                ("loadID", load_id.to_string()),
            ]
        };
        let request = ctx.request(pb::AddRecordRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            json_data: json_data.to_string(),
            load_id: load_id.to_string(),
        });
        let mut details = record_details(data_source_code, record_id);
        details.push(("loadID", load_id.to_string()));
        self.instrumentation
            .invoke(ctx, &ops::ADD_RECORD, args, details, self.stub().add_record(request))
            .await?;
        Ok(())
    }

    /// Like [`add_record`](Self::add_record), returning the affected entities.
    pub async fn add_record_with_info(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
        json_data: &str,
        load_id: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("jsonData", json_data.to_string()),
                ("loadID", load_id.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::AddRecordWithInfoRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            json_data: json_data.to_string(),
            load_id: load_id.to_string(),
            flags,
        });
        let mut details = record_details(data_source_code, record_id);
        details.push(("loadID", load_id.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::ADD_RECORD_WITH_INFO,
                args,
                details,
                self.stub().add_record_with_info(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn delete_record(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
        load_id: &str,
    ) -> Result<(), G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("loadID", load_id.to_string()),
            ]
        };
        let request = ctx.request(pb::DeleteRecordRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            load_id: load_id.to_string(),
        });
        let mut details = record_details(data_source_code, record_id);
        details.push(("loadID", load_id.to_string()));
        self.instrumentation
            .invoke(ctx, &ops::DELETE_RECORD, args, details, self.stub().delete_record(request))
            .await?;
        Ok(())
    }

    pub async fn delete_record_with_info(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
        load_id: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("loadID", load_id.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::DeleteRecordWithInfoRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            load_id: load_id.to_string(),
            flags,
        });
        let mut details = record_details(data_source_code, record_id);
        details.push(("loadID", load_id.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::DELETE_RECORD_WITH_INFO,
                args,
                details,
                self.stub().delete_record_with_info(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn replace_record(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
        json_data: &str,
        load_id: &str,
    ) -> Result<(), G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("jsonData", json_data.to_string()),
                ("loadID", load_id.to_string()),
            ]
        };
        let request = ctx.request(pb::ReplaceRecordRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            json_data: json_data.to_string(),
            load_id: load_id.to_string(),
        });
        let mut details = record_details(data_source_code, record_id);
        details.push(("loadID", load_id.to_string()));
        self.instrumentation
            .invoke(ctx, &ops::REPLACE_RECORD, args, details, self.stub().replace_record(request))
            .await?;
        Ok(())
    }

    pub async fn replace_record_with_info(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
        json_data: &str,
        load_id: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("jsonData", json_data.to_string()),
                ("loadID", load_id.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::ReplaceRecordWithInfoRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            json_data: json_data.to_string(),
            load_id: load_id.to_string(),
            flags,
        });
        let mut details = record_details(data_source_code, record_id);
        details.push(("loadID", load_id.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::REPLACE_RECORD_WITH_INFO,
                args,
                details,
                self.stub().replace_record_with_info(request),
            )
            .await?;
        Ok(response.result)
    }

    /// Apply a single record document (add, replace or delete as encoded in
    /// the record itself).
    pub async fn process(&self, ctx: &CallContext, record: &str) -> Result<(), G2Error> {
        let args = || vec![("record", record.to_string())];
        let request = ctx.request(pb::ProcessRequest {
            record: record.to_string(),
        });
        self.instrumentation
            .invoke(ctx, &ops::PROCESS, args, vec![], self.stub().process(request))
            .await?;
        Ok(())
    }

    pub async fn process_with_info(
        &self,
        ctx: &CallContext,
        record: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || vec![("record", record.to_string()), ("flags", flags.to_string())];
        let request = ctx.request(pb::ProcessWithInfoRequest {
            record: record.to_string(),
            flags,
        });
        let details = vec![("flags", flags.to_string())];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::PROCESS_WITH_INFO,
                args,
                details,
                self.stub().process_with_info(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn process_with_response(
        &self,
        ctx: &CallContext,
        record: &str,
    ) -> Result<String, G2Error> {
        let args = || vec![("record", record.to_string())];
        let request = ctx.request(pb::ProcessWithResponseRequest {
            record: record.to_string(),
        });
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::PROCESS_WITH_RESPONSE,
                args,
                vec![],
                self.stub().process_with_response(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn process_with_response_resize(
        &self,
        ctx: &CallContext,
        record: &str,
    ) -> Result<String, G2Error> {
        let args = || vec![("record", record.to_string())];
        let request = ctx.request(pb::ProcessWithResponseResizeRequest {
            record: record.to_string(),
        });
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::PROCESS_WITH_RESPONSE_RESIZE,
                args,
                vec![],
                self.stub().process_with_response_resize(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn reevaluate_entity(
        &self,
        ctx: &CallContext,
        entity_id: i64,
        flags: i64,
    ) -> Result<(), G2Error> {
        let args = || vec![("entityID", entity_id.to_string()), ("flags", flags.to_string())];
        let request = ctx.request(pb::ReevaluateEntityRequest { entity_id, flags });
        let details = vec![("entityID", entity_id.to_string())];
        self.instrumentation
            .invoke(
                ctx,
                &ops::REEVALUATE_ENTITY,
                args,
                details,
                self.stub().reevaluate_entity(request),
            )
            .await?;
        Ok(())
    }

    pub async fn reevaluate_entity_with_info(
        &self,
        ctx: &CallContext,
        entity_id: i64,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || vec![("entityID", entity_id.to_string()), ("flags", flags.to_string())];
        let request = ctx.request(pb::ReevaluateEntityWithInfoRequest { entity_id, flags });
        let details = vec![("entityID", entity_id.to_string())];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::REEVALUATE_ENTITY_WITH_INFO,
                args,
                details,
                self.stub().reevaluate_entity_with_info(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn reevaluate_record(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<(), G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::ReevaluateRecordRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags,
        });
        self.instrumentation
            .invoke(
                ctx,
                &ops::REEVALUATE_RECORD,
                args,
                record_details(data_source_code, record_id),
                self.stub().reevaluate_record(request),
            )
            .await?;
        Ok(())
    }

    pub async fn reevaluate_record_with_info(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::ReevaluateRecordWithInfoRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags,
        });
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::REEVALUATE_RECORD_WITH_INFO,
                args,
                record_details(data_source_code, record_id),
                self.stub().reevaluate_record_with_info(request),
            )
            .await?;
        Ok(response.result)
    }

    // ------------------------------------------------------------------
    // Redo
    // ------------------------------------------------------------------

    pub async fn count_redo_records(&self, ctx: &CallContext) -> Result<i64, G2Error> {
        let request = ctx.request(pb::CountRedoRecordsRequest {});
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::COUNT_REDO_RECORDS,
                Vec::new,
                vec![],
                self.stub().count_redo_records(request),
            )
            .await?;
        Ok(response.result)
    }

    /// Next pending redo record, or an empty string when none are queued.
    pub async fn get_redo_record(&self, ctx: &CallContext) -> Result<String, G2Error> {
        let request = ctx.request(pb::GetRedoRecordRequest {});
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::GET_REDO_RECORD,
                Vec::new,
                vec![],
                self.stub().get_redo_record(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn process_redo_record(&self, ctx: &CallContext) -> Result<String, G2Error> {
        let request = ctx.request(pb::ProcessRedoRecordRequest {});
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::PROCESS_REDO_RECORD,
                Vec::new,
                vec![],
                self.stub().process_redo_record(request),
            )
            .await?;
        Ok(response.result)
    }

    /// Returns `(processed record, with-info document)`.
    pub async fn process_redo_record_with_info(
        &self,
        ctx: &CallContext,
        flags: i64,
    ) -> Result<(String, String), G2Error> {
        let args = || vec![("flags", flags.to_string())];
        let request = ctx.request(pb::ProcessRedoRecordWithInfoRequest { flags });
        let details = vec![("flags", flags.to_string())];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::PROCESS_REDO_RECORD_WITH_INFO,
                args,
                details,
                self.stub().process_redo_record_with_info(request),
            )
            .await?;
        Ok((response.result, response.with_info))
    }

    // ------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------

    pub async fn export_config(&self, ctx: &CallContext) -> Result<String, G2Error> {
        let request = ctx.request(pb::ExportConfigRequest {});
        let response = self
            .instrumentation
            .invoke(ctx, &ops::EXPORT_CONFIG, Vec::new, vec![], self.stub().export_config(request))
            .await?;
        Ok(response.result)
    }

    /// The active configuration document together with its id.
    pub async fn export_config_and_config_id(
        &self,
        ctx: &CallContext,
    ) -> Result<(String, i64), G2Error> {
        let request = ctx.request(pb::ExportConfigAndConfigIdRequest {});
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::EXPORT_CONFIG_AND_CONFIG_ID,
                Vec::new,
                vec![],
                self.stub().export_config_and_config_id(request),
            )
            .await?;
        Ok((response.config, response.config_id))
    }

    /// Open a CSV export; read it with [`fetch_next`](Self::fetch_next) and
    /// release it with [`close_export`](Self::close_export).
    pub async fn export_csv_entity_report(
        &self,
        ctx: &CallContext,
        csv_column_list: &str,
        flags: i64,
    ) -> Result<ExportHandle, G2Error> {
        let args = || {
            vec![
                ("csvColumnList", csv_column_list.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::ExportCsvEntityReportRequest {
            csv_column_list: csv_column_list.to_string(),
            flags,
        });
        let details = vec![
            ("csvColumnList", csv_column_list.to_string()),
            ("flags", flags.to_string()),
        ];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::EXPORT_CSV_ENTITY_REPORT,
                args,
                details,
                self.stub().export_csv_entity_report(request),
            )
            .await?;
        Ok(ExportHandle(response.result))
    }

    pub async fn export_json_entity_report(
        &self,
        ctx: &CallContext,
        flags: i64,
    ) -> Result<ExportHandle, G2Error> {
        let args = || vec![("flags", flags.to_string())];
        let request = ctx.request(pb::ExportJsonEntityReportRequest { flags });
        let details = vec![("flags", flags.to_string())];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::EXPORT_JSON_ENTITY_REPORT,
                args,
                details,
                self.stub().export_json_entity_report(request),
            )
            .await?;
        Ok(ExportHandle(response.result))
    }

    /// Next chunk of an open export. An empty string marks the end.
    pub async fn fetch_next(
        &self,
        ctx: &CallContext,
        response_handle: ExportHandle,
    ) -> Result<String, G2Error> {
        let args = || vec![("responseHandle", response_handle.to_string())];
        let request = ctx.request(pb::FetchNextRequest {
            response_handle: response_handle.0,
        });
        let details = vec![("responseHandle", response_handle.to_string())];
        let response = self
            .instrumentation
            .invoke(ctx, &ops::FETCH_NEXT, args, details, self.stub().fetch_next(request))
            .await?;
        Ok(response.result)
    }

    pub async fn close_export(
        &self,
        ctx: &CallContext,
        response_handle: ExportHandle,
    ) -> Result<(), G2Error> {
        let args = || vec![("responseHandle", response_handle.to_string())];
        let request = ctx.request(pb::CloseExportRequest {
            response_handle: response_handle.0,
        });
        let details = vec![("responseHandle", response_handle.to_string())];
        self.instrumentation
            .invoke(ctx, &ops::CLOSE_EXPORT, args, details, self.stub().close_export(request))
            .await?;
        Ok(())
    }

    /// Server-streamed CSV export. The call is instrumented when the stream
    /// opens; each item is a chunk of the report, errors translated.
    pub async fn stream_export_csv_entity_report(
        &self,
        ctx: &CallContext,
        csv_column_list: &str,
        flags: i64,
    ) -> Result<impl Stream<Item = Result<String, G2Error>> + Send + 'static, G2Error> {
        let args = || {
            vec![
                ("csvColumnList", csv_column_list.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::StreamExportCsvEntityReportRequest {
            csv_column_list: csv_column_list.to_string(),
            flags,
        });
        let details = vec![
            ("csvColumnList", csv_column_list.to_string()),
            ("flags", flags.to_string()),
        ];
        let stream = self
            .instrumentation
            .invoke(
                ctx,
                &ops::STREAM_EXPORT_CSV_ENTITY_REPORT,
                args,
                details,
                self.stub().stream_export_csv_entity_report(request),
            )
            .await?;
        Ok(stream.map(|item| item.map(|chunk| chunk.result).map_err(convert_grpc_error)))
    }

    pub async fn stream_export_json_entity_report(
        &self,
        ctx: &CallContext,
        flags: i64,
    ) -> Result<impl Stream<Item = Result<String, G2Error>> + Send + 'static, G2Error> {
        let args = || vec![("flags", flags.to_string())];
        let request = ctx.request(pb::StreamExportJsonEntityReportRequest { flags });
        let details = vec![("flags", flags.to_string())];
        let stream = self
            .instrumentation
            .invoke(
                ctx,
                &ops::STREAM_EXPORT_JSON_ENTITY_REPORT,
                args,
                details,
                self.stub().stream_export_json_entity_report(request),
            )
            .await?;
        Ok(stream.map(|item| item.map(|chunk| chunk.result).map_err(convert_grpc_error)))
    }

    // ------------------------------------------------------------------
    // Entity lookup
    // ------------------------------------------------------------------

    pub async fn get_entity_by_entity_id(
        &self,
        ctx: &CallContext,
        entity_id: i64,
    ) -> Result<String, G2Error> {
        let args = || vec![("entityID", entity_id.to_string())];
        let request = ctx.request(pb::GetEntityByEntityIdRequest { entity_id });
        let details = vec![("entityID", entity_id.to_string())];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::GET_ENTITY_BY_ENTITY_ID,
                args,
                details,
                self.stub().get_entity_by_entity_id(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn get_entity_by_entity_id_v2(
        &self,
        ctx: &CallContext,
        entity_id: i64,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || vec![("entityID", entity_id.to_string()), ("flags", flags.to_string())];
        let request = ctx.request(pb::GetEntityByEntityIdV2Request { entity_id, flags });
        let details = vec![
            ("entityID", entity_id.to_string()),
            ("flags", flags.to_string()),
        ];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::GET_ENTITY_BY_ENTITY_ID_V2,
                args,
                details,
                self.stub().get_entity_by_entity_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn get_entity_by_record_id(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
            ]
        };
        let request = ctx.request(pb::GetEntityByRecordIdRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
        });
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::GET_ENTITY_BY_RECORD_ID,
                args,
                record_details(data_source_code, record_id),
                self.stub().get_entity_by_record_id(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn get_entity_by_record_id_v2(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::GetEntityByRecordIdV2Request {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags,
        });
        let mut details = record_details(data_source_code, record_id);
        details.push(("flags", flags.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::GET_ENTITY_BY_RECORD_ID_V2,
                args,
                details,
                self.stub().get_entity_by_record_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn get_record(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
            ]
        };
        let request = ctx.request(pb::GetRecordRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
        });
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::GET_RECORD,
                args,
                record_details(data_source_code, record_id),
                self.stub().get_record(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn get_record_v2(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::GetRecordV2Request {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags,
        });
        let mut details = record_details(data_source_code, record_id);
        details.push(("flags", flags.to_string()));
        let response = self
            .instrumentation
            .invoke(ctx, &ops::GET_RECORD_V2, args, details, self.stub().get_record_v2(request))
            .await?;
        Ok(response.result)
    }

    /// Resolve a hypothetical entity from `record_list` without persisting it.
    pub async fn get_virtual_entity_by_record_id(
        &self,
        ctx: &CallContext,
        record_list: &str,
    ) -> Result<String, G2Error> {
        let args = || vec![("recordList", record_list.to_string())];
        let request = ctx.request(pb::GetVirtualEntityByRecordIdRequest {
            record_list: record_list.to_string(),
        });
        let details = vec![("recordList", record_list.to_string())];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::GET_VIRTUAL_ENTITY_BY_RECORD_ID,
                args,
                details,
                self.stub().get_virtual_entity_by_record_id(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn get_virtual_entity_by_record_id_v2(
        &self,
        ctx: &CallContext,
        record_list: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || vec![("recordList", record_list.to_string()), ("flags", flags.to_string())];
        let request = ctx.request(pb::GetVirtualEntityByRecordIdV2Request {
            record_list: record_list.to_string(),
            flags,
        });
        let details = vec![
            ("flags", flags.to_string()),
            ("recordList", record_list.to_string()),
        ];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::GET_VIRTUAL_ENTITY_BY_RECORD_ID_V2,
                args,
                details,
                self.stub().get_virtual_entity_by_record_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn find_interesting_entities_by_entity_id(
        &self,
        ctx: &CallContext,
        entity_id: i64,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || vec![("entityID", entity_id.to_string()), ("flags", flags.to_string())];
        let request =
            ctx.request(pb::FindInterestingEntitiesByEntityIdRequest { entity_id, flags });
        let details = vec![
            ("entityID", entity_id.to_string()),
            ("flags", flags.to_string()),
        ];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_INTERESTING_ENTITIES_BY_ENTITY_ID,
                args,
                details,
                self.stub().find_interesting_entities_by_entity_id(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn find_interesting_entities_by_record_id(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::FindInterestingEntitiesByRecordIdRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags,
        });
        let mut details = record_details(data_source_code, record_id);
        details.push(("flags", flags.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_INTERESTING_ENTITIES_BY_RECORD_ID,
                args,
                details,
                self.stub().find_interesting_entities_by_record_id(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn search_by_attributes(
        &self,
        ctx: &CallContext,
        json_data: &str,
    ) -> Result<String, G2Error> {
        let args = || vec![("jsonData", json_data.to_string())];
        let request = ctx.request(pb::SearchByAttributesRequest {
            json_data: json_data.to_string(),
        });
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::SEARCH_BY_ATTRIBUTES,
                args,
                vec![],
                self.stub().search_by_attributes(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn search_by_attributes_v2(
        &self,
        ctx: &CallContext,
        json_data: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || vec![("jsonData", json_data.to_string()), ("flags", flags.to_string())];
        let request = ctx.request(pb::SearchByAttributesV2Request {
            json_data: json_data.to_string(),
            flags,
        });
        let details = vec![("flags", flags.to_string())];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::SEARCH_BY_ATTRIBUTES_V2,
                args,
                details,
                self.stub().search_by_attributes_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    // ------------------------------------------------------------------
    // Networks and paths
    // ------------------------------------------------------------------

    pub async fn find_network_by_entity_id(
        &self,
        ctx: &CallContext,
        entity_list: &str,
        max_degree: i64,
        build_out_degree: i64,
        max_entities: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("entityList", entity_list.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("buildOutDegree", build_out_degree.to_string()),
                ("maxEntities", max_entities.to_string()),
            ]
        };
        let request = ctx.request(pb::FindNetworkByEntityIdRequest {
            entity_list: entity_list.to_string(),
            max_degree,
            build_out_degree,
            max_entities,
        });
        let details = vec![
            ("buildOutDegree", build_out_degree.to_string()),
            ("entityList", entity_list.to_string()),
            ("maxDegree", max_degree.to_string()),
            ("maxEntities", max_entities.to_string()),
        ];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_NETWORK_BY_ENTITY_ID,
                args,
                details,
                self.stub().find_network_by_entity_id(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn find_network_by_entity_id_v2(
        &self,
        ctx: &CallContext,
        entity_list: &str,
        max_degree: i64,
        build_out_degree: i64,
        max_entities: i64,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("entityList", entity_list.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("buildOutDegree", build_out_degree.to_string()),
                ("maxEntities", max_entities.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::FindNetworkByEntityIdV2Request {
            entity_list: entity_list.to_string(),
            max_degree,
            build_out_degree,
            max_entities,
            flags,
        });
        let details = vec![
            ("buildOutDegree", build_out_degree.to_string()),
            ("entityList", entity_list.to_string()),
            ("flags", flags.to_string()),
            ("maxDegree", max_degree.to_string()),
            ("maxEntities", max_entities.to_string()),
        ];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_NETWORK_BY_ENTITY_ID_V2,
                args,
                details,
                self.stub().find_network_by_entity_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn find_network_by_record_id(
        &self,
        ctx: &CallContext,
        record_list: &str,
        max_degree: i64,
        build_out_degree: i64,
        max_entities: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("recordList", record_list.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("buildOutDegree", build_out_degree.to_string()),
                ("maxEntities", max_entities.to_string()),
            ]
        };
        let request = ctx.request(pb::FindNetworkByRecordIdRequest {
            record_list: record_list.to_string(),
            max_degree,
            build_out_degree,
            max_entities,
        });
        let details = vec![
            ("buildOutDegree", build_out_degree.to_string()),
            ("maxDegree", max_degree.to_string()),
            ("maxEntities", max_entities.to_string()),
            ("recordList", record_list.to_string()),
        ];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_NETWORK_BY_RECORD_ID,
                args,
                details,
                self.stub().find_network_by_record_id(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn find_network_by_record_id_v2(
        &self,
        ctx: &CallContext,
        record_list: &str,
        max_degree: i64,
        build_out_degree: i64,
        max_entities: i64,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("recordList", record_list.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("buildOutDegree", build_out_degree.to_string()),
                ("maxEntities", max_entities.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::FindNetworkByRecordIdV2Request {
            record_list: record_list.to_string(),
            max_degree,
            build_out_degree,
            max_entities,
            flags,
        });
        let details = vec![
            ("buildOutDegree", build_out_degree.to_string()),
            ("flags", flags.to_string()),
            ("maxDegree", max_degree.to_string()),
            ("maxEntities", max_entities.to_string()),
            ("recordList", record_list.to_string()),
        ];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_NETWORK_BY_RECORD_ID_V2,
                args,
                details,
                self.stub().find_network_by_record_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn find_path_by_entity_id(
        &self,
        ctx: &CallContext,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("entityID1", entity_id1.to_string()),
                ("entityID2", entity_id2.to_string()),
                ("maxDegree", max_degree.to_string()),
            ]
        };
        let request = ctx.request(pb::FindPathByEntityIdRequest {
            entity_id1,
            entity_id2,
            max_degree,
        });
        let mut details = entity_pair_details(entity_id1, entity_id2);
        details.push(("maxDegree", max_degree.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_PATH_BY_ENTITY_ID,
                args,
                details,
                self.stub().find_path_by_entity_id(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn find_path_by_entity_id_v2(
        &self,
        ctx: &CallContext,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("entityID1", entity_id1.to_string()),
                ("entityID2", entity_id2.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::FindPathByEntityIdV2Request {
            entity_id1,
            entity_id2,
            max_degree,
            flags,
        });
        let mut details = entity_pair_details(entity_id1, entity_id2);
        details.push(("flags", flags.to_string()));
        details.push(("maxDegree", max_degree.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_PATH_BY_ENTITY_ID_V2,
                args,
                details,
                self.stub().find_path_by_entity_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn find_path_by_record_id(
        &self,
        ctx: &CallContext,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
                ("maxDegree", max_degree.to_string()),
            ]
        };
        let request = ctx.request(pb::FindPathByRecordIdRequest {
            data_source_code1: data_source_code1.to_string(),
            record_id1: record_id1.to_string(),
            data_source_code2: data_source_code2.to_string(),
            record_id2: record_id2.to_string(),
            max_degree,
        });
        let mut details =
            record_pair_details(data_source_code1, record_id1, data_source_code2, record_id2);
        details.push(("maxDegree", max_degree.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_PATH_BY_RECORD_ID,
                args,
                details,
                self.stub().find_path_by_record_id(request),
            )
            .await?;
        Ok(response.result)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn find_path_by_record_id_v2(
        &self,
        ctx: &CallContext,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::FindPathByRecordIdV2Request {
            data_source_code1: data_source_code1.to_string(),
            record_id1: record_id1.to_string(),
            data_source_code2: data_source_code2.to_string(),
            record_id2: record_id2.to_string(),
            max_degree,
            flags,
        });
        let mut details =
            record_pair_details(data_source_code1, record_id1, data_source_code2, record_id2);
        details.push(("flags", flags.to_string()));
        details.push(("maxDegree", max_degree.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_PATH_BY_RECORD_ID_V2,
                args,
                details,
                self.stub().find_path_by_record_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    /// Shortest path between two entities avoiding `excluded_entities`.
    pub async fn find_path_excluding_by_entity_id(
        &self,
        ctx: &CallContext,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        excluded_entities: &str,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("entityID1", entity_id1.to_string()),
                ("entityID2", entity_id2.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("excludedEntities", excluded_entities.to_string()),
            ]
        };
        let request = ctx.request(pb::FindPathExcludingByEntityIdRequest {
            entity_id1,
            entity_id2,
            max_degree,
            excluded_entities: excluded_entities.to_string(),
        });
        let mut details = entity_pair_details(entity_id1, entity_id2);
        details.push(("excludedEntities", excluded_entities.to_string()));
        details.push(("maxDegree", max_degree.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_PATH_EXCLUDING_BY_ENTITY_ID,
                args,
                details,
                self.stub().find_path_excluding_by_entity_id(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn find_path_excluding_by_entity_id_v2(
        &self,
        ctx: &CallContext,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        excluded_entities: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("entityID1", entity_id1.to_string()),
                ("entityID2", entity_id2.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("excludedEntities", excluded_entities.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::FindPathExcludingByEntityIdV2Request {
            entity_id1,
            entity_id2,
            max_degree,
            excluded_entities: excluded_entities.to_string(),
            flags,
        });
        let mut details = entity_pair_details(entity_id1, entity_id2);
        details.push(("excludedEntities", excluded_entities.to_string()));
        details.push(("flags", flags.to_string()));
        details.push(("maxDegree", max_degree.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_PATH_EXCLUDING_BY_ENTITY_ID_V2,
                args,
                details,
                self.stub().find_path_excluding_by_entity_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn find_path_excluding_by_record_id(
        &self,
        ctx: &CallContext,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
        excluded_records: &str,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("excludedRecords", excluded_records.to_string()),
            ]
        };
        let request = ctx.request(pb::FindPathExcludingByRecordIdRequest {
            data_source_code1: data_source_code1.to_string(),
            record_id1: record_id1.to_string(),
            data_source_code2: data_source_code2.to_string(),
            record_id2: record_id2.to_string(),
            max_degree,
            excluded_records: excluded_records.to_string(),
        });
        let mut details =
            record_pair_details(data_source_code1, record_id1, data_source_code2, record_id2);
        details.push(("excludedRecords", excluded_records.to_string()));
        details.push(("maxDegree", max_degree.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_PATH_EXCLUDING_BY_RECORD_ID,
                args,
                details,
                self.stub().find_path_excluding_by_record_id(request),
            )
            .await?;
        Ok(response.result)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn find_path_excluding_by_record_id_v2(
        &self,
        ctx: &CallContext,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
        excluded_records: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("excludedRecords", excluded_records.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::FindPathExcludingByRecordIdV2Request {
            data_source_code1: data_source_code1.to_string(),
            record_id1: record_id1.to_string(),
            data_source_code2: data_source_code2.to_string(),
            record_id2: record_id2.to_string(),
            max_degree,
            excluded_records: excluded_records.to_string(),
            flags,
        });
        let mut details =
            record_pair_details(data_source_code1, record_id1, data_source_code2, record_id2);
        details.push(("excludedRecords", excluded_records.to_string()));
        details.push(("flags", flags.to_string()));
        details.push(("maxDegree", max_degree.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_PATH_EXCLUDING_BY_RECORD_ID_V2,
                args,
                details,
                self.stub().find_path_excluding_by_record_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    /// Shortest path that passes through at least one record from one of
    /// `required_dsrcs`.
    pub async fn find_path_including_source_by_entity_id(
        &self,
        ctx: &CallContext,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        excluded_entities: &str,
        required_dsrcs: &str,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("entityID1", entity_id1.to_string()),
                ("entityID2", entity_id2.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("excludedEntities", excluded_entities.to_string()),
                ("requiredDsrcs", required_dsrcs.to_string()),
            ]
        };
        let request = ctx.request(pb::FindPathIncludingSourceByEntityIdRequest {
            entity_id1,
            entity_id2,
            max_degree,
            excluded_entities: excluded_entities.to_string(),
            required_dsrcs: required_dsrcs.to_string(),
        });
        let mut details = entity_pair_details(entity_id1, entity_id2);
        details.push(("excludedEntities", excluded_entities.to_string()));
        details.push(("maxDegree", max_degree.to_string()));
        details.push(("requiredDsrcs", required_dsrcs.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_PATH_INCLUDING_SOURCE_BY_ENTITY_ID,
                args,
                details,
                self.stub().find_path_including_source_by_entity_id(request),
            )
            .await?;
        Ok(response.result)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn find_path_including_source_by_entity_id_v2(
        &self,
        ctx: &CallContext,
        entity_id1: i64,
        entity_id2: i64,
        max_degree: i64,
        excluded_entities: &str,
        required_dsrcs: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("entityID1", entity_id1.to_string()),
                ("entityID2", entity_id2.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("excludedEntities", excluded_entities.to_string()),
                ("requiredDsrcs", required_dsrcs.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::FindPathIncludingSourceByEntityIdV2Request {
            entity_id1,
            entity_id2,
            max_degree,
            excluded_entities: excluded_entities.to_string(),
            required_dsrcs: required_dsrcs.to_string(),
            flags,
        });
        let mut details = entity_pair_details(entity_id1, entity_id2);
        details.push(("excludedEntities", excluded_entities.to_string()));
        details.push(("flags", flags.to_string()));
        details.push(("maxDegree", max_degree.to_string()));
        details.push(("requiredDsrcs", required_dsrcs.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_PATH_INCLUDING_SOURCE_BY_ENTITY_ID_V2,
                args,
                details,
                self.stub().find_path_including_source_by_entity_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn find_path_including_source_by_record_id(
        &self,
        ctx: &CallContext,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
        excluded_records: &str,
        required_dsrcs: &str,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("excludedRecords", excluded_records.to_string()),
                ("requiredDsrcs", required_dsrcs.to_string()),
            ]
        };
        let request = ctx.request(pb::FindPathIncludingSourceByRecordIdRequest {
            data_source_code1: data_source_code1.to_string(),
            record_id1: record_id1.to_string(),
            data_source_code2: data_source_code2.to_string(),
            record_id2: record_id2.to_string(),
            max_degree,
            excluded_records: excluded_records.to_string(),
            required_dsrcs: required_dsrcs.to_string(),
        });
        let mut details =
            record_pair_details(data_source_code1, record_id1, data_source_code2, record_id2);
        details.push(("excludedRecords", excluded_records.to_string()));
        details.push(("maxDegree", max_degree.to_string()));
        details.push(("requiredDsrcs", required_dsrcs.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_PATH_INCLUDING_SOURCE_BY_RECORD_ID,
                args,
                details,
                self.stub().find_path_including_source_by_record_id(request),
            )
            .await?;
        Ok(response.result)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn find_path_including_source_by_record_id_v2(
        &self,
        ctx: &CallContext,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        max_degree: i64,
        excluded_records: &str,
        required_dsrcs: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
                ("maxDegree", max_degree.to_string()),
                ("excludedRecords", excluded_records.to_string()),
                ("requiredDsrcs", required_dsrcs.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::FindPathIncludingSourceByRecordIdV2Request {
            data_source_code1: data_source_code1.to_string(),
            record_id1: record_id1.to_string(),
            data_source_code2: data_source_code2.to_string(),
            record_id2: record_id2.to_string(),
            max_degree,
            excluded_records: excluded_records.to_string(),
            required_dsrcs: required_dsrcs.to_string(),
            flags,
        });
        let mut details =
            record_pair_details(data_source_code1, record_id1, data_source_code2, record_id2);
        details.push(("excludedRecords", excluded_records.to_string()));
        details.push(("flags", flags.to_string()));
        details.push(("maxDegree", max_degree.to_string()));
        details.push(("requiredDsrcs", required_dsrcs.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::FIND_PATH_INCLUDING_SOURCE_BY_RECORD_ID_V2,
                args,
                details,
                self.stub().find_path_including_source_by_record_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    // ------------------------------------------------------------------
    // Why / how
    // ------------------------------------------------------------------

    pub async fn why_entities(
        &self,
        ctx: &CallContext,
        entity_id1: i64,
        entity_id2: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("entityID1", entity_id1.to_string()),
                ("entityID2", entity_id2.to_string()),
            ]
        };
        let request = ctx.request(pb::WhyEntitiesRequest {
            entity_id1,
            entity_id2,
        });
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::WHY_ENTITIES,
                args,
                entity_pair_details(entity_id1, entity_id2),
                self.stub().why_entities(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn why_entities_v2(
        &self,
        ctx: &CallContext,
        entity_id1: i64,
        entity_id2: i64,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("entityID1", entity_id1.to_string()),
                ("entityID2", entity_id2.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::WhyEntitiesV2Request {
            entity_id1,
            entity_id2,
            flags,
        });
        let mut details = entity_pair_details(entity_id1, entity_id2);
        details.push(("flags", flags.to_string()));
        let response = self
            .instrumentation
            .invoke(ctx, &ops::WHY_ENTITIES_V2, args, details, self.stub().why_entities_v2(request))
            .await?;
        Ok(response.result)
    }

    pub async fn why_entity_by_entity_id(
        &self,
        ctx: &CallContext,
        entity_id: i64,
    ) -> Result<String, G2Error> {
        let args = || vec![("entityID", entity_id.to_string())];
        let request = ctx.request(pb::WhyEntityByEntityIdRequest { entity_id });
        let details = vec![("entityID", entity_id.to_string())];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::WHY_ENTITY_BY_ENTITY_ID,
                args,
                details,
                self.stub().why_entity_by_entity_id(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn why_entity_by_entity_id_v2(
        &self,
        ctx: &CallContext,
        entity_id: i64,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || vec![("entityID", entity_id.to_string()), ("flags", flags.to_string())];
        let request = ctx.request(pb::WhyEntityByEntityIdV2Request { entity_id, flags });
        let details = vec![
            ("entityID", entity_id.to_string()),
            ("flags", flags.to_string()),
        ];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::WHY_ENTITY_BY_ENTITY_ID_V2,
                args,
                details,
                self.stub().why_entity_by_entity_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn why_entity_by_record_id(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
            ]
        };
        let request = ctx.request(pb::WhyEntityByRecordIdRequest {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
        });
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::WHY_ENTITY_BY_RECORD_ID,
                args,
                record_details(data_source_code, record_id),
                self.stub().why_entity_by_record_id(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn why_entity_by_record_id_v2(
        &self,
        ctx: &CallContext,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode", data_source_code.to_string()),
                ("recordID", record_id.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::WhyEntityByRecordIdV2Request {
            data_source_code: data_source_code.to_string(),
            record_id: record_id.to_string(),
            flags,
        });
        let mut details = record_details(data_source_code, record_id);
        details.push(("flags", flags.to_string()));
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::WHY_ENTITY_BY_RECORD_ID_V2,
                args,
                details,
                self.stub().why_entity_by_record_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn why_records(
        &self,
        ctx: &CallContext,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
            ]
        };
        let request = ctx.request(pb::WhyRecordsRequest {
            data_source_code1: data_source_code1.to_string(),
            record_id1: record_id1.to_string(),
            data_source_code2: data_source_code2.to_string(),
            record_id2: record_id2.to_string(),
        });
        let details =
            record_pair_details(data_source_code1, record_id1, data_source_code2, record_id2);
        let response = self
            .instrumentation
            .invoke(ctx, &ops::WHY_RECORDS, args, details, self.stub().why_records(request))
            .await?;
        Ok(response.result)
    }

    pub async fn why_records_v2(
        &self,
        ctx: &CallContext,
        data_source_code1: &str,
        record_id1: &str,
        data_source_code2: &str,
        record_id2: &str,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || {
            vec![
                ("dataSourceCode1", data_source_code1.to_string()),
                ("recordID1", record_id1.to_string()),
                ("dataSourceCode2", data_source_code2.to_string()),
                ("recordID2", record_id2.to_string()),
                ("flags", flags.to_string()),
            ]
        };
        let request = ctx.request(pb::WhyRecordsV2Request {
            data_source_code1: data_source_code1.to_string(),
            record_id1: record_id1.to_string(),
            data_source_code2: data_source_code2.to_string(),
            record_id2: record_id2.to_string(),
            flags,
        });
        let mut details =
            record_pair_details(data_source_code1, record_id1, data_source_code2, record_id2);
        details.push(("flags", flags.to_string()));
        let response = self
            .instrumentation
            .invoke(ctx, &ops::WHY_RECORDS_V2, args, details, self.stub().why_records_v2(request))
            .await?;
        Ok(response.result)
    }

    pub async fn how_entity_by_entity_id(
        &self,
        ctx: &CallContext,
        entity_id: i64,
    ) -> Result<String, G2Error> {
        let args = || vec![("entityID", entity_id.to_string())];
        let request = ctx.request(pb::HowEntityByEntityIdRequest { entity_id });
        let details = vec![("entityID", entity_id.to_string())];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::HOW_ENTITY_BY_ENTITY_ID,
                args,
                details,
                self.stub().how_entity_by_entity_id(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn how_entity_by_entity_id_v2(
        &self,
        ctx: &CallContext,
        entity_id: i64,
        flags: i64,
    ) -> Result<String, G2Error> {
        let args = || vec![("entityID", entity_id.to_string()), ("flags", flags.to_string())];
        let request = ctx.request(pb::HowEntityByEntityIdV2Request { entity_id, flags });
        let details = vec![
            ("entityID", entity_id.to_string()),
            ("flags", flags.to_string()),
        ];
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::HOW_ENTITY_BY_ENTITY_ID_V2,
                args,
                details,
                self.stub().how_entity_by_entity_id_v2(request),
            )
            .await?;
        Ok(response.result)
    }

    // ------------------------------------------------------------------
    // Lifecycle and administration
    // ------------------------------------------------------------------

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

    /// Initialise against a specific stored configuration instead of the
    /// default one.
    pub async fn init_with_config_id(
        &self,
        ctx: &CallContext,
        module_name: &str,
        ini_params: &str,
        init_config_id: i64,
        verbose_logging: i64,
    ) -> Result<(), G2Error> {
        let args = || {
            vec![
                ("moduleName", module_name.to_string()),
                ("iniParams", ini_params.to_string()),
                ("initConfigID", init_config_id.to_string()),
                ("verboseLogging", verbose_logging.to_string()),
            ]
        };
        let request = ctx.request(pb::InitWithConfigIdRequest {
            module_name: module_name.to_string(),
            ini_params: ini_params.to_string(),
            init_config_id,
            verbose_logging,
        });
        let details = vec![
            ("iniParams", ini_params.to_string()),
            ("initConfigID", init_config_id.to_string()),
            ("moduleName", module_name.to_string()),
            ("verboseLogging", verbose_logging.to_string()),
        ];
        self.instrumentation
            .invoke(
                ctx,
                &ops::INIT_WITH_CONFIG_ID,
                args,
                details,
                self.stub().init_with_config_id(request),
            )
            .await?;
        Ok(())
    }

    pub async fn reinit(&self, ctx: &CallContext, init_config_id: i64) -> Result<(), G2Error> {
        let args = || vec![("initConfigID", init_config_id.to_string())];
        let request = ctx.request(pb::ReinitRequest { init_config_id });
        let details = vec![("initConfigID", init_config_id.to_string())];
        self.instrumentation
            .invoke(ctx, &ops::REINIT, args, details, self.stub().reinit(request))
            .await?;
        Ok(())
    }

    pub async fn prime_engine(&self, ctx: &CallContext) -> Result<(), G2Error> {
        let request = ctx.request(pb::PrimeEngineRequest {});
        self.instrumentation
            .invoke(ctx, &ops::PRIME_ENGINE, Vec::new, vec![], self.stub().prime_engine(request))
            .await?;
        Ok(())
    }

    /// Delete every record and entity in the repository.
    pub async fn purge_repository(&self, ctx: &CallContext) -> Result<(), G2Error> {
        let request = ctx.request(pb::PurgeRepositoryRequest {});
        self.instrumentation
            .invoke(
                ctx,
                &ops::PURGE_REPOSITORY,
                Vec::new,
                vec![],
                self.stub().purge_repository(request),
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

    pub async fn get_active_config_id(&self, ctx: &CallContext) -> Result<i64, G2Error> {
        let request = ctx.request(pb::GetActiveConfigIdRequest {});
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::GET_ACTIVE_CONFIG_ID,
                Vec::new,
                vec![],
                self.stub().get_active_config_id(request),
            )
            .await?;
        Ok(response.result)
    }

    /// Milliseconds since the epoch of the last repository change.
    pub async fn get_repository_last_modified_time(
        &self,
        ctx: &CallContext,
    ) -> Result<i64, G2Error> {
        let request = ctx.request(pb::GetRepositoryLastModifiedTimeRequest {});
        let response = self
            .instrumentation
            .invoke(
                ctx,
                &ops::GET_REPOSITORY_LAST_MODIFIED_TIME,
                Vec::new,
                vec![],
                self.stub().get_repository_last_modified_time(request),
            )
            .await?;
        Ok(response.result)
    }

    pub async fn stats(&self, ctx: &CallContext) -> Result<String, G2Error> {
        let request = ctx.request(pb::StatsRequest {});
        let response = self
            .instrumentation
            .invoke(ctx, &ops::STATS, Vec::new, vec![], self.stub().stats(request))
            .await?;
        Ok(response.result)
    }
}

impl Observable for G2EngineClient {
    fn instrumentation(&self) -> &Instrumentation {
        &self.instrumentation
    }

    fn observer_operations(&self) -> &'static ObserverOperations {
        &ops::OBSERVER
    }
}
