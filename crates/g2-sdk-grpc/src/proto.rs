//! Generated protobuf messages and gRPC stubs.
//!
//! Built from `proto/*.proto` by `build.rs`. Client wrappers live in the
//! sibling modules; the server halves are only used by the integration tests.

pub mod g2config {
    tonic::include_proto!("g2config");
}

pub mod g2configmgr {
    tonic::include_proto!("g2configmgr");
}

pub mod g2engine {
    tonic::include_proto!("g2engine");
}
