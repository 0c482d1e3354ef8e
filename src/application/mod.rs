// Application module: gRPC service and protobuf mapping

pub mod grpc_service;
pub mod mappers;

pub use grpc_service::GrpcSetCoverService;
