use std::collections::{BTreeMap, HashMap, VecDeque};
use std::pin::Pin;
use std::sync::Mutex;
use std::time::Duration;

use g2_sdk_grpc::proto::g2engine as pb;
use serde_json::json;
use tokio_stream::Stream;
use tonic::{Request, Response, Status};

use super::{native_status, TEMPLATE_CONFIG};

/// Data sources the mock accepts records for.
pub const KNOWN_DATA_SOURCES: &[&str] = &["CUSTOMERS", "REFERENCE", "TEST"];
pub const LAST_MODIFIED: i64 = 1_700_000_000_000;
/// `prime_engine` takes this long, so tests can cancel it mid-flight.
pub const PRIME_DURATION: Duration = Duration::from_secs(30);

type ExportStream<T> = Pin<Box<dyn Stream<Item = Result<T, Status>> + Send>>;

#[derive(Default)]
struct EngineState {
    initialized: bool,
    active_config_id: i64,
    records: BTreeMap<(String, String), String>,
    next_handle: i64,
    exports: HashMap<i64, VecDeque<String>>,
}

#[derive(Default)]
pub struct MockEngine {
    state: Mutex<EngineState>,
}

impl MockEngine {
    fn initialize(&self, config_id: Option<i64>) -> Result<(), Status> {
        let mut state = self.state.lock().unwrap();
        if state.initialized {
            return Err(native_status(
                "senzing-60144002",
                "0048E|G2 engine already initialized",
            ));
        }
        state.initialized = true;
        if let Some(config_id) = config_id {
            state.active_config_id = config_id;
        }
        Ok(())
    }

    fn upsert(&self, data_source_code: &str, record_id: &str, json_data: String) -> Result<(), Status> {
        if !KNOWN_DATA_SOURCES.contains(&data_source_code) {
            return Err(native_status(
                "senzing-60144001",
                "0023E|Conflicting DATA_SOURCE values",
            ));
        }
        self.state
            .lock()
            .unwrap()
            .records
            .insert((data_source_code.to_string(), record_id.to_string()), json_data);
        Ok(())
    }

    fn remove(&self, data_source_code: &str, record_id: &str) -> Result<(), Status> {
        self.state
            .lock()
            .unwrap()
            .records
            .remove(&(data_source_code.to_string(), record_id.to_string()));
        Ok(())
    }

    fn record(&self, data_source_code: &str, record_id: &str) -> Result<String, Status> {
        let state = self.state.lock().unwrap();
        state
            .records
            .get(&(data_source_code.to_string(), record_id.to_string()))
            .map(|json_data| {
                json!({
                    "DATA_SOURCE": data_source_code,
                    "RECORD_ID": record_id,
                    "JSON_DATA": serde_json::from_str::<serde_json::Value>(json_data).unwrap_or_default(),
                })
                .to_string()
            })
            .ok_or_else(|| native_status("senzing-60144030", "0033E|Unknown record"))
    }

    fn csv_lines(&self, csv_column_list: &str) -> Vec<String> {
        let header = if csv_column_list.is_empty() {
            "RESOLVED_ENTITY_ID,DATA_SOURCE,RECORD_ID"
        } else {
            csv_column_list
        };
        let state = self.state.lock().unwrap();
        std::iter::once(format!("{header}\n"))
            .chain(
                state
                    .records
                    .keys()
                    .enumerate()
                    .map(|(i, (source, id))| format!("{},{source},{id}\n", i + 1)),
            )
            .collect()
    }

    fn json_lines(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state
            .records
            .keys()
            .enumerate()
            .map(|(i, (source, id))| {
                let entity = json!({
                    "RESOLVED_ENTITY": {
                        "ENTITY_ID": i + 1,
                        "RECORDS": [{"DATA_SOURCE": source, "RECORD_ID": id}],
                    }
                });
                format!("{entity}\n")
            })
            .collect()
    }

    fn open_export(&self, lines: Vec<String>) -> i64 {
        let mut state = self.state.lock().unwrap();
        state.next_handle += 1;
        let handle = state.next_handle;
        state.exports.insert(handle, lines.into());
        handle
    }
}

fn with_info(data_source_code: &str, record_id: &str) -> String {
    json!({
        "DATA_SOURCE": data_source_code,
        "RECORD_ID": record_id,
        "AFFECTED_ENTITIES": [{"ENTITY_ID": 1}],
        "INTERESTING_ENTITIES": {"ENTITIES": []},
    })
    .to_string()
}

/// Fixed answer for query calls the tests only check for plumbing.
fn canned(call: &str) -> String {
    json!({"CALL": call, "RESOLVED_ENTITY": {"ENTITY_ID": 1}}).to_string()
}

#[tonic::async_trait]
impl pb::g2_engine_server::G2Engine for MockEngine {
    type StreamExportCsvEntityReportStream = ExportStream<pb::StreamExportCsvEntityReportResponse>;
    type StreamExportJsonEntityReportStream = ExportStream<pb::StreamExportJsonEntityReportResponse>;

    async fn add_record(
        &self,
        request: Request<pb::AddRecordRequest>,
    ) -> Result<Response<pb::AddRecordResponse>, Status> {
        let request = request.into_inner();
        self.upsert(&request.data_source_code, &request.record_id, request.json_data)?;
        Ok(Response::new(pb::AddRecordResponse {}))
    }

    async fn add_record_with_info(
        &self,
        request: Request<pb::AddRecordWithInfoRequest>,
    ) -> Result<Response<pb::AddRecordWithInfoResponse>, Status> {
        let request = request.into_inner();
        self.upsert(&request.data_source_code, &request.record_id, request.json_data)?;
        Ok(Response::new(pb::AddRecordWithInfoResponse {
            result: with_info(&request.data_source_code, &request.record_id),
        }))
    }

    async fn close_export(
        &self,
        request: Request<pb::CloseExportRequest>,
    ) -> Result<Response<pb::CloseExportResponse>, Status> {
        let handle = request.into_inner().response_handle;
        match self.state.lock().unwrap().exports.remove(&handle) {
            Some(_) => Ok(Response::new(pb::CloseExportResponse {})),
            None => Err(native_status("senzing-60144003", "0032E|Invalid export handle")),
        }
    }

    async fn count_redo_records(
        &self,
        _request: Request<pb::CountRedoRecordsRequest>,
    ) -> Result<Response<pb::CountRedoRecordsResponse>, Status> {
        Ok(Response::new(pb::CountRedoRecordsResponse { result: 0 }))
    }

    async fn delete_record(
        &self,
        request: Request<pb::DeleteRecordRequest>,
    ) -> Result<Response<pb::DeleteRecordResponse>, Status> {
        let request = request.into_inner();
        self.remove(&request.data_source_code, &request.record_id)?;
        Ok(Response::new(pb::DeleteRecordResponse {}))
    }

    async fn delete_record_with_info(
        &self,
        request: Request<pb::DeleteRecordWithInfoRequest>,
    ) -> Result<Response<pb::DeleteRecordWithInfoResponse>, Status> {
        let request = request.into_inner();
        self.remove(&request.data_source_code, &request.record_id)?;
        Ok(Response::new(pb::DeleteRecordWithInfoResponse {
            result: with_info(&request.data_source_code, &request.record_id),
        }))
    }

    async fn destroy(
        &self,
        _request: Request<pb::DestroyRequest>,
    ) -> Result<Response<pb::DestroyResponse>, Status> {
        self.state.lock().unwrap().initialized = false;
        Ok(Response::new(pb::DestroyResponse {}))
    }

    async fn export_config(
        &self,
        _request: Request<pb::ExportConfigRequest>,
    ) -> Result<Response<pb::ExportConfigResponse>, Status> {
        Ok(Response::new(pb::ExportConfigResponse {
            result: canned("ExportConfig"),
        }))
    }

    async fn export_config_and_config_id(
        &self,
        _request: Request<pb::ExportConfigAndConfigIdRequest>,
    ) -> Result<Response<pb::ExportConfigAndConfigIdResponse>, Status> {
        let config_id = self.state.lock().unwrap().active_config_id;
        Ok(Response::new(pb::ExportConfigAndConfigIdResponse {
            config: TEMPLATE_CONFIG.to_string(),
            config_id,
        }))
    }

    async fn export_csv_entity_report(
        &self,
        request: Request<pb::ExportCsvEntityReportRequest>,
    ) -> Result<Response<pb::ExportCsvEntityReportResponse>, Status> {
        let lines = self.csv_lines(&request.into_inner().csv_column_list);
        Ok(Response::new(pb::ExportCsvEntityReportResponse {
            result: self.open_export(lines),
        }))
    }

    async fn export_json_entity_report(
        &self,
        _request: Request<pb::ExportJsonEntityReportRequest>,
    ) -> Result<Response<pb::ExportJsonEntityReportResponse>, Status> {
        let lines = self.json_lines();
        Ok(Response::new(pb::ExportJsonEntityReportResponse {
            result: self.open_export(lines),
        }))
    }

    async fn fetch_next(
        &self,
        request: Request<pb::FetchNextRequest>,
    ) -> Result<Response<pb::FetchNextResponse>, Status> {
        let handle = request.into_inner().response_handle;
        let mut state = self.state.lock().unwrap();
        let export = state
            .exports
            .get_mut(&handle)
            .ok_or_else(|| native_status("senzing-60144012", "0032E|Invalid export handle"))?;
        Ok(Response::new(pb::FetchNextResponse {
            result: export.pop_front().unwrap_or_default(),
        }))
    }

    async fn find_interesting_entities_by_entity_id(
        &self,
        _request: Request<pb::FindInterestingEntitiesByEntityIdRequest>,
    ) -> Result<Response<pb::FindInterestingEntitiesByEntityIdResponse>, Status> {
        Ok(Response::new(pb::FindInterestingEntitiesByEntityIdResponse {
            result: canned("FindInterestingEntitiesByEntityID"),
        }))
    }

    async fn find_interesting_entities_by_record_id(
        &self,
        _request: Request<pb::FindInterestingEntitiesByRecordIdRequest>,
    ) -> Result<Response<pb::FindInterestingEntitiesByRecordIdResponse>, Status> {
        Ok(Response::new(pb::FindInterestingEntitiesByRecordIdResponse {
            result: canned("FindInterestingEntitiesByRecordID"),
        }))
    }

    async fn find_network_by_entity_id(
        &self,
        _request: Request<pb::FindNetworkByEntityIdRequest>,
    ) -> Result<Response<pb::FindNetworkByEntityIdResponse>, Status> {
        Ok(Response::new(pb::FindNetworkByEntityIdResponse {
            result: canned("FindNetworkByEntityID"),
        }))
    }

    async fn find_network_by_entity_id_v2(
        &self,
        _request: Request<pb::FindNetworkByEntityIdV2Request>,
    ) -> Result<Response<pb::FindNetworkByEntityIdV2Response>, Status> {
        Ok(Response::new(pb::FindNetworkByEntityIdV2Response {
            result: canned("FindNetworkByEntityID_V2"),
        }))
    }

    async fn find_network_by_record_id(
        &self,
        _request: Request<pb::FindNetworkByRecordIdRequest>,
    ) -> Result<Response<pb::FindNetworkByRecordIdResponse>, Status> {
        Ok(Response::new(pb::FindNetworkByRecordIdResponse {
            result: canned("FindNetworkByRecordID"),
        }))
    }

    async fn find_network_by_record_id_v2(
        &self,
        _request: Request<pb::FindNetworkByRecordIdV2Request>,
    ) -> Result<Response<pb::FindNetworkByRecordIdV2Response>, Status> {
        Ok(Response::new(pb::FindNetworkByRecordIdV2Response {
            result: canned("FindNetworkByRecordID_V2"),
        }))
    }

    async fn find_path_by_entity_id(
        &self,
        _request: Request<pb::FindPathByEntityIdRequest>,
    ) -> Result<Response<pb::FindPathByEntityIdResponse>, Status> {
        Ok(Response::new(pb::FindPathByEntityIdResponse {
            result: canned("FindPathByEntityID"),
        }))
    }

    async fn find_path_by_entity_id_v2(
        &self,
        _request: Request<pb::FindPathByEntityIdV2Request>,
    ) -> Result<Response<pb::FindPathByEntityIdV2Response>, Status> {
        Ok(Response::new(pb::FindPathByEntityIdV2Response {
            result: canned("FindPathByEntityID_V2"),
        }))
    }

    async fn find_path_by_record_id(
        &self,
        _request: Request<pb::FindPathByRecordIdRequest>,
    ) -> Result<Response<pb::FindPathByRecordIdResponse>, Status> {
        Ok(Response::new(pb::FindPathByRecordIdResponse {
            result: canned("FindPathByRecordID"),
        }))
    }

    async fn find_path_by_record_id_v2(
        &self,
        _request: Request<pb::FindPathByRecordIdV2Request>,
    ) -> Result<Response<pb::FindPathByRecordIdV2Response>, Status> {
        Ok(Response::new(pb::FindPathByRecordIdV2Response {
            result: canned("FindPathByRecordID_V2"),
        }))
    }

    async fn find_path_excluding_by_entity_id(
        &self,
        _request: Request<pb::FindPathExcludingByEntityIdRequest>,
    ) -> Result<Response<pb::FindPathExcludingByEntityIdResponse>, Status> {
        Ok(Response::new(pb::FindPathExcludingByEntityIdResponse {
            result: canned("FindPathExcludingByEntityID"),
        }))
    }

    async fn find_path_excluding_by_entity_id_v2(
        &self,
        _request: Request<pb::FindPathExcludingByEntityIdV2Request>,
    ) -> Result<Response<pb::FindPathExcludingByEntityIdV2Response>, Status> {
        Ok(Response::new(pb::FindPathExcludingByEntityIdV2Response {
            result: canned("FindPathExcludingByEntityID_V2"),
        }))
    }

    async fn find_path_excluding_by_record_id(
        &self,
        _request: Request<pb::FindPathExcludingByRecordIdRequest>,
    ) -> Result<Response<pb::FindPathExcludingByRecordIdResponse>, Status> {
        Ok(Response::new(pb::FindPathExcludingByRecordIdResponse {
            result: canned("FindPathExcludingByRecordID"),
        }))
    }

    async fn find_path_excluding_by_record_id_v2(
        &self,
        _request: Request<pb::FindPathExcludingByRecordIdV2Request>,
    ) -> Result<Response<pb::FindPathExcludingByRecordIdV2Response>, Status> {
        Ok(Response::new(pb::FindPathExcludingByRecordIdV2Response {
            result: canned("FindPathExcludingByRecordID_V2"),
        }))
    }

    async fn find_path_including_source_by_entity_id(
        &self,
        _request: Request<pb::FindPathIncludingSourceByEntityIdRequest>,
    ) -> Result<Response<pb::FindPathIncludingSourceByEntityIdResponse>, Status> {
        Ok(Response::new(pb::FindPathIncludingSourceByEntityIdResponse {
            result: canned("FindPathIncludingSourceByEntityID"),
        }))
    }

    async fn find_path_including_source_by_entity_id_v2(
        &self,
        _request: Request<pb::FindPathIncludingSourceByEntityIdV2Request>,
    ) -> Result<Response<pb::FindPathIncludingSourceByEntityIdV2Response>, Status> {
        Ok(Response::new(pb::FindPathIncludingSourceByEntityIdV2Response {
            result: canned("FindPathIncludingSourceByEntityID_V2"),
        }))
    }

    async fn find_path_including_source_by_record_id(
        &self,
        _request: Request<pb::FindPathIncludingSourceByRecordIdRequest>,
    ) -> Result<Response<pb::FindPathIncludingSourceByRecordIdResponse>, Status> {
        Ok(Response::new(pb::FindPathIncludingSourceByRecordIdResponse {
            result: canned("FindPathIncludingSourceByRecordID"),
        }))
    }

    async fn find_path_including_source_by_record_id_v2(
        &self,
        _request: Request<pb::FindPathIncludingSourceByRecordIdV2Request>,
    ) -> Result<Response<pb::FindPathIncludingSourceByRecordIdV2Response>, Status> {
        Ok(Response::new(pb::FindPathIncludingSourceByRecordIdV2Response {
            result: canned("FindPathIncludingSourceByRecordID_V2"),
        }))
    }

    async fn get_active_config_id(
        &self,
        _request: Request<pb::GetActiveConfigIdRequest>,
    ) -> Result<Response<pb::GetActiveConfigIdResponse>, Status> {
        Ok(Response::new(pb::GetActiveConfigIdResponse {
            result: self.state.lock().unwrap().active_config_id,
        }))
    }

    async fn get_entity_by_entity_id(
        &self,
        _request: Request<pb::GetEntityByEntityIdRequest>,
    ) -> Result<Response<pb::GetEntityByEntityIdResponse>, Status> {
        Ok(Response::new(pb::GetEntityByEntityIdResponse {
            result: canned("GetEntityByEntityID"),
        }))
    }

    async fn get_entity_by_entity_id_v2(
        &self,
        _request: Request<pb::GetEntityByEntityIdV2Request>,
    ) -> Result<Response<pb::GetEntityByEntityIdV2Response>, Status> {
        Ok(Response::new(pb::GetEntityByEntityIdV2Response {
            result: canned("GetEntityByEntityID_V2"),
        }))
    }

    async fn get_entity_by_record_id(
        &self,
        _request: Request<pb::GetEntityByRecordIdRequest>,
    ) -> Result<Response<pb::GetEntityByRecordIdResponse>, Status> {
        Ok(Response::new(pb::GetEntityByRecordIdResponse {
            result: canned("GetEntityByRecordID"),
        }))
    }

    async fn get_entity_by_record_id_v2(
        &self,
        _request: Request<pb::GetEntityByRecordIdV2Request>,
    ) -> Result<Response<pb::GetEntityByRecordIdV2Response>, Status> {
        Ok(Response::new(pb::GetEntityByRecordIdV2Response {
            result: canned("GetEntityByRecordID_V2"),
        }))
    }

    async fn get_record(
        &self,
        request: Request<pb::GetRecordRequest>,
    ) -> Result<Response<pb::GetRecordResponse>, Status> {
        let request = request.into_inner();
        Ok(Response::new(pb::GetRecordResponse {
            result: self.record(&request.data_source_code, &request.record_id)?,
        }))
    }

    async fn get_record_v2(
        &self,
        request: Request<pb::GetRecordV2Request>,
    ) -> Result<Response<pb::GetRecordV2Response>, Status> {
        let request = request.into_inner();
        Ok(Response::new(pb::GetRecordV2Response {
            result: self.record(&request.data_source_code, &request.record_id)?,
        }))
    }

    async fn get_redo_record(
        &self,
        _request: Request<pb::GetRedoRecordRequest>,
    ) -> Result<Response<pb::GetRedoRecordResponse>, Status> {
        Ok(Response::new(pb::GetRedoRecordResponse {
            result: canned("GetRedoRecord"),
        }))
    }

    async fn get_repository_last_modified_time(
        &self,
        _request: Request<pb::GetRepositoryLastModifiedTimeRequest>,
    ) -> Result<Response<pb::GetRepositoryLastModifiedTimeResponse>, Status> {
        Ok(Response::new(pb::GetRepositoryLastModifiedTimeResponse {
            result: LAST_MODIFIED,
        }))
    }

    async fn get_virtual_entity_by_record_id(
        &self,
        _request: Request<pb::GetVirtualEntityByRecordIdRequest>,
    ) -> Result<Response<pb::GetVirtualEntityByRecordIdResponse>, Status> {
        Ok(Response::new(pb::GetVirtualEntityByRecordIdResponse {
            result: canned("GetVirtualEntityByRecordID"),
        }))
    }

    async fn get_virtual_entity_by_record_id_v2(
        &self,
        _request: Request<pb::GetVirtualEntityByRecordIdV2Request>,
    ) -> Result<Response<pb::GetVirtualEntityByRecordIdV2Response>, Status> {
        Ok(Response::new(pb::GetVirtualEntityByRecordIdV2Response {
            result: canned("GetVirtualEntityByRecordID_V2"),
        }))
    }

    async fn how_entity_by_entity_id(
        &self,
        _request: Request<pb::HowEntityByEntityIdRequest>,
    ) -> Result<Response<pb::HowEntityByEntityIdResponse>, Status> {
        Ok(Response::new(pb::HowEntityByEntityIdResponse {
            result: canned("HowEntityByEntityID"),
        }))
    }

    async fn how_entity_by_entity_id_v2(
        &self,
        _request: Request<pb::HowEntityByEntityIdV2Request>,
    ) -> Result<Response<pb::HowEntityByEntityIdV2Response>, Status> {
        Ok(Response::new(pb::HowEntityByEntityIdV2Response {
            result: canned("HowEntityByEntityID_V2"),
        }))
    }

    async fn init(
        &self,
        _request: Request<pb::InitRequest>,
    ) -> Result<Response<pb::InitResponse>, Status> {
        self.initialize(None)?;
        Ok(Response::new(pb::InitResponse {}))
    }

    async fn init_with_config_id(
        &self,
        request: Request<pb::InitWithConfigIdRequest>,
    ) -> Result<Response<pb::InitWithConfigIdResponse>, Status> {
        self.initialize(Some(request.into_inner().init_config_id))?;
        Ok(Response::new(pb::InitWithConfigIdResponse {}))
    }

    async fn prime_engine(
        &self,
        _request: Request<pb::PrimeEngineRequest>,
    ) -> Result<Response<pb::PrimeEngineResponse>, Status> {
        tokio::time::sleep(PRIME_DURATION).await;
        Ok(Response::new(pb::PrimeEngineResponse {}))
    }

    async fn process(
        &self,
        _request: Request<pb::ProcessRequest>,
    ) -> Result<Response<pb::ProcessResponse>, Status> {
        Ok(Response::new(pb::ProcessResponse {}))
    }

    async fn process_redo_record(
        &self,
        _request: Request<pb::ProcessRedoRecordRequest>,
    ) -> Result<Response<pb::ProcessRedoRecordResponse>, Status> {
        Ok(Response::new(pb::ProcessRedoRecordResponse {
            result: canned("ProcessRedoRecord"),
        }))
    }

    async fn process_redo_record_with_info(
        &self,
        _request: Request<pb::ProcessRedoRecordWithInfoRequest>,
    ) -> Result<Response<pb::ProcessRedoRecordWithInfoResponse>, Status> {
        Ok(Response::new(pb::ProcessRedoRecordWithInfoResponse {
            result: String::new(),
            with_info: String::new(),
        }))
    }

    async fn process_with_info(
        &self,
        _request: Request<pb::ProcessWithInfoRequest>,
    ) -> Result<Response<pb::ProcessWithInfoResponse>, Status> {
        Ok(Response::new(pb::ProcessWithInfoResponse {
            result: canned("ProcessWithInfo"),
        }))
    }

    async fn process_with_response(
        &self,
        _request: Request<pb::ProcessWithResponseRequest>,
    ) -> Result<Response<pb::ProcessWithResponseResponse>, Status> {
        Ok(Response::new(pb::ProcessWithResponseResponse {
            result: canned("ProcessWithResponse"),
        }))
    }

    async fn process_with_response_resize(
        &self,
        _request: Request<pb::ProcessWithResponseResizeRequest>,
    ) -> Result<Response<pb::ProcessWithResponseResizeResponse>, Status> {
        Ok(Response::new(pb::ProcessWithResponseResizeResponse {
            result: canned("ProcessWithResponseResize"),
        }))
    }

    async fn purge_repository(
        &self,
        _request: Request<pb::PurgeRepositoryRequest>,
    ) -> Result<Response<pb::PurgeRepositoryResponse>, Status> {
        self.state.lock().unwrap().records.clear();
        Ok(Response::new(pb::PurgeRepositoryResponse {}))
    }

    async fn reevaluate_entity(
        &self,
        _request: Request<pb::ReevaluateEntityRequest>,
    ) -> Result<Response<pb::ReevaluateEntityResponse>, Status> {
        Ok(Response::new(pb::ReevaluateEntityResponse {}))
    }

    async fn reevaluate_entity_with_info(
        &self,
        _request: Request<pb::ReevaluateEntityWithInfoRequest>,
    ) -> Result<Response<pb::ReevaluateEntityWithInfoResponse>, Status> {
        Ok(Response::new(pb::ReevaluateEntityWithInfoResponse {
            result: canned("ReevaluateEntityWithInfo"),
        }))
    }

    async fn reevaluate_record(
        &self,
        _request: Request<pb::ReevaluateRecordRequest>,
    ) -> Result<Response<pb::ReevaluateRecordResponse>, Status> {
        Ok(Response::new(pb::ReevaluateRecordResponse {}))
    }

    async fn reevaluate_record_with_info(
        &self,
        _request: Request<pb::ReevaluateRecordWithInfoRequest>,
    ) -> Result<Response<pb::ReevaluateRecordWithInfoResponse>, Status> {
        Ok(Response::new(pb::ReevaluateRecordWithInfoResponse {
            result: canned("ReevaluateRecordWithInfo"),
        }))
    }

    async fn reinit(
        &self,
        request: Request<pb::ReinitRequest>,
    ) -> Result<Response<pb::ReinitResponse>, Status> {
        self.state.lock().unwrap().active_config_id = request.into_inner().init_config_id;
        Ok(Response::new(pb::ReinitResponse {}))
    }

    async fn replace_record(
        &self,
        request: Request<pb::ReplaceRecordRequest>,
    ) -> Result<Response<pb::ReplaceRecordResponse>, Status> {
        let request = request.into_inner();
        self.upsert(&request.data_source_code, &request.record_id, request.json_data)?;
        Ok(Response::new(pb::ReplaceRecordResponse {}))
    }

    async fn replace_record_with_info(
        &self,
        request: Request<pb::ReplaceRecordWithInfoRequest>,
    ) -> Result<Response<pb::ReplaceRecordWithInfoResponse>, Status> {
        let request = request.into_inner();
        self.upsert(&request.data_source_code, &request.record_id, request.json_data)?;
        Ok(Response::new(pb::ReplaceRecordWithInfoResponse {
            result: with_info(&request.data_source_code, &request.record_id),
        }))
    }

    async fn search_by_attributes(
        &self,
        _request: Request<pb::SearchByAttributesRequest>,
    ) -> Result<Response<pb::SearchByAttributesResponse>, Status> {
        Ok(Response::new(pb::SearchByAttributesResponse {
            result: canned("SearchByAttributes"),
        }))
    }

    async fn search_by_attributes_v2(
        &self,
        _request: Request<pb::SearchByAttributesV2Request>,
    ) -> Result<Response<pb::SearchByAttributesV2Response>, Status> {
        Ok(Response::new(pb::SearchByAttributesV2Response {
            result: canned("SearchByAttributes_V2"),
        }))
    }

    async fn stats(
        &self,
        _request: Request<pb::StatsRequest>,
    ) -> Result<Response<pb::StatsResponse>, Status> {
        let loaded = self.state.lock().unwrap().records.len();
        Ok(Response::new(pb::StatsResponse {
            result: json!({"workload": {"loadedRecords": loaded}}).to_string(),
        }))
    }

    async fn stream_export_csv_entity_report(
        &self,
        request: Request<pb::StreamExportCsvEntityReportRequest>,
    ) -> Result<Response<Self::StreamExportCsvEntityReportStream>, Status> {
        let items: Vec<_> = self
            .csv_lines(&request.into_inner().csv_column_list)
            .into_iter()
            .map(|result| Ok(pb::StreamExportCsvEntityReportResponse { result }))
            .collect();
        let stream: Self::StreamExportCsvEntityReportStream = Box::pin(tokio_stream::iter(items));
        Ok(Response::new(stream))
    }

    async fn stream_export_json_entity_report(
        &self,
        _request: Request<pb::StreamExportJsonEntityReportRequest>,
    ) -> Result<Response<Self::StreamExportJsonEntityReportStream>, Status> {
        let items: Vec<_> = self
            .json_lines()
            .into_iter()
            .map(|result| Ok(pb::StreamExportJsonEntityReportResponse { result }))
            .collect();
        let stream: Self::StreamExportJsonEntityReportStream = Box::pin(tokio_stream::iter(items));
        Ok(Response::new(stream))
    }

    async fn why_entities(
        &self,
        _request: Request<pb::WhyEntitiesRequest>,
    ) -> Result<Response<pb::WhyEntitiesResponse>, Status> {
        Ok(Response::new(pb::WhyEntitiesResponse {
            result: canned("WhyEntities"),
        }))
    }

    async fn why_entities_v2(
        &self,
        _request: Request<pb::WhyEntitiesV2Request>,
    ) -> Result<Response<pb::WhyEntitiesV2Response>, Status> {
        Ok(Response::new(pb::WhyEntitiesV2Response {
            result: canned("WhyEntities_V2"),
        }))
    }

    async fn why_entity_by_entity_id(
        &self,
        _request: Request<pb::WhyEntityByEntityIdRequest>,
    ) -> Result<Response<pb::WhyEntityByEntityIdResponse>, Status> {
        Ok(Response::new(pb::WhyEntityByEntityIdResponse {
            result: canned("WhyEntityByEntityID"),
        }))
    }

    async fn why_entity_by_entity_id_v2(
        &self,
        _request: Request<pb::WhyEntityByEntityIdV2Request>,
    ) -> Result<Response<pb::WhyEntityByEntityIdV2Response>, Status> {
        Ok(Response::new(pb::WhyEntityByEntityIdV2Response {
            result: canned("WhyEntityByEntityID_V2"),
        }))
    }

    async fn why_entity_by_record_id(
        &self,
        _request: Request<pb::WhyEntityByRecordIdRequest>,
    ) -> Result<Response<pb::WhyEntityByRecordIdResponse>, Status> {
        Ok(Response::new(pb::WhyEntityByRecordIdResponse {
            result: canned("WhyEntityByRecordID"),
        }))
    }

    async fn why_entity_by_record_id_v2(
        &self,
        _request: Request<pb::WhyEntityByRecordIdV2Request>,
    ) -> Result<Response<pb::WhyEntityByRecordIdV2Response>, Status> {
        Ok(Response::new(pb::WhyEntityByRecordIdV2Response {
            result: canned("WhyEntityByRecordID_V2"),
        }))
    }

    async fn why_records(
        &self,
        _request: Request<pb::WhyRecordsRequest>,
    ) -> Result<Response<pb::WhyRecordsResponse>, Status> {
        Ok(Response::new(pb::WhyRecordsResponse {
            result: canned("WhyRecords"),
        }))
    }

    async fn why_records_v2(
        &self,
        _request: Request<pb::WhyRecordsV2Request>,
    ) -> Result<Response<pb::WhyRecordsV2Response>, Status> {
        Ok(Response::new(pb::WhyRecordsV2Response {
            result: canned("WhyRecords_V2"),
        }))
    }
}
